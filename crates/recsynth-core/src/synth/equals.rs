use crate::{
    error::{InvariantViolation, SynthError},
    model::MethodKind,
    synth::{MethodGen, RecordContext},
};
use recsynth_ast::{BinaryOp, Expr, MethodDef, Param, Stmt};

///
/// EqualsGen
///
/// ```text
/// (this === other)
///     || ((other !== null)
///         && ($structural(other)
///             && ($same_variant(this, other) && <field chain>)))
/// ```
///
/// Any non-null structural value of the receiver's variant is compared
/// field by field; `other` is not required to be statically the same type.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct EqualsGen;

impl MethodGen for EqualsGen {
    const KIND: MethodKind = MethodKind::Equals;

    fn generate(&self, cx: &RecordContext<'_>) -> Result<MethodDef, SynthError> {
        cx.require_identity_fields(Self::KIND)?;

        let fields = cx.identity_idents().map_err(|e| e.in_method(Self::KIND))?;

        let mut method = MethodDef::new(cx.naming.method_name(Self::KIND));
        let mut scope = cx.naming.method_scope();
        let other = scope.declare("other");
        method.push_param(Param::required(other.clone()));

        let field_chain = Expr::fold_left(
            BinaryOp::And,
            fields.iter().map(|(_, ident)| {
                Expr::equals(
                    Expr::this_field(ident),
                    Expr::field(Expr::local(&other), ident),
                )
            }),
        )
        .ok_or_else(|| cx.violation(Self::KIND, InvariantViolation::EmptyIdentityFields))?;

        let reference_equal = Expr::ref_eq(Expr::This, Expr::local(&other));
        let not_null = Expr::ref_ne(Expr::local(&other), Expr::null());
        let structural = Expr::is_structural(Expr::local(&other));
        let same_variant = Expr::same_variant(Expr::This, Expr::local(&other));

        let body = Expr::or(
            reference_equal,
            Expr::and(
                not_null,
                Expr::and(structural, Expr::and(same_variant, field_chain)),
            ),
        );

        method.push_stmt(Stmt::Return(body));

        Ok(method)
    }
}
