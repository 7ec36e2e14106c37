use crate::{
    error::{InvariantViolation, SynthError},
    model::MethodKind,
    synth::{MethodGen, RecordContext},
};
use recsynth_ast::{BinaryOp, Expr, MethodDef, Stmt};

///
/// ToStringGen
///
/// `"Name(a=" ++ $stringify(this.a) ++ ", b=" ++ ... ++ ")"`, folded strictly
/// left to right. Literals carry the declared field names, not the mangled
/// output identifiers.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ToStringGen;

impl MethodGen for ToStringGen {
    const KIND: MethodKind = MethodKind::ToString;

    fn generate(&self, cx: &RecordContext<'_>) -> Result<MethodDef, SynthError> {
        cx.require_identity_fields(Self::KIND)?;

        let fields = cx.identity_idents().map_err(|e| e.in_method(Self::KIND))?;
        let parts = fields.iter().enumerate().map(|(i, (declared, ident))| {
            let label = if i == 0 {
                format!("{}({declared}=", cx.record.name)
            } else {
                format!(", {declared}=")
            };

            Expr::concat(
                Expr::text(label),
                Expr::stringify(Expr::this_field(ident)),
            )
        });

        let Some(body) = Expr::fold_left(BinaryOp::Concat, parts) else {
            return Err(cx.violation(Self::KIND, InvariantViolation::EmptyIdentityFields));
        };

        let mut method = MethodDef::new(cx.naming.method_name(Self::KIND));
        method.push_stmt(Stmt::Return(Expr::concat(body, Expr::text(")"))));

        Ok(method)
    }
}
