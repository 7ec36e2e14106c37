use crate::{
    HASH_MULTIPLIER, HASH_SEED,
    error::SynthError,
    model::MethodKind,
    synth::{MethodGen, RecordContext},
};
use recsynth_ast::{Expr, MethodDef, Stmt};

///
/// HashCodeGen
///
/// ```text
/// let result = 0;
/// result = (((result * 31) + $hash(this.a)) | 0);
/// ...
/// return result;
/// ```
///
/// The `| 0` truncates to 32 bits and reinterprets as signed after every
/// step, so hosts with wider native numbers agree with 32-bit ones.
/// A record without identity fields hashes to the seed.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct HashCodeGen;

impl MethodGen for HashCodeGen {
    const KIND: MethodKind = MethodKind::HashCode;

    fn generate(&self, cx: &RecordContext<'_>) -> Result<MethodDef, SynthError> {
        let fields = cx.identity_idents().map_err(|e| e.in_method(Self::KIND))?;

        let mut method = MethodDef::new(cx.naming.method_name(Self::KIND));
        let mut scope = cx.naming.method_scope();
        let result = scope.declare("result");

        method.push_stmt(Stmt::let_(&result, Expr::int(HASH_SEED)));

        for (_, ident) in &fields {
            let combined = Expr::add(
                Expr::mul(Expr::local(&result), Expr::int(HASH_MULTIPLIER)),
                Expr::hash_code(Expr::this_field(ident)),
            );

            method.push_stmt(Stmt::Expr(Expr::assign(
                &result,
                Expr::bit_or(combined, Expr::int(0)),
            )));
        }

        method.push_stmt(Stmt::Return(Expr::local(&result)));

        Ok(method)
    }
}
