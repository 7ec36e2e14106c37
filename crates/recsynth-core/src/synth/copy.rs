use crate::{
    error::{InvariantViolation, SynthError},
    model::{FunctionDescriptor, MethodKind},
    synth::{MethodGen, RecordContext},
};
use recsynth_ast::{Expr, MethodDef, Param, Stmt};

///
/// CopyGen
///
/// `copy(p1, .., pn)` taking one parameter per constructor parameter, in
/// constructor order, and returning a fresh instance built through the
/// primary constructor.
///
/// Defaulted identity fields become optional parameters; when the caller
/// omits one, the receiver's current value is forwarded instead. Every other
/// parameter is forwarded as supplied.
///

#[derive(Clone, Copy, Debug)]
pub struct CopyGen<'a> {
    pub function: &'a FunctionDescriptor,
}

impl<'a> CopyGen<'a> {
    #[must_use]
    pub const fn new(function: &'a FunctionDescriptor) -> Self {
        Self { function }
    }
}

impl MethodGen for CopyGen<'_> {
    const KIND: MethodKind = MethodKind::Copy;

    fn generate(&self, cx: &RecordContext<'_>) -> Result<MethodDef, SynthError> {
        self.function.check_arity(cx.record)?;

        let mut method = MethodDef::new(cx.naming.method_name(Self::KIND));
        let mut scope = cx.naming.method_scope();
        let mut args = Vec::with_capacity(cx.record.params.len());

        for param in &cx.record.params {
            let name = scope.declare(&param.name);
            let supplied = Expr::local(&name);

            if param.has_default {
                if !param.identity {
                    return Err(cx.violation(
                        Self::KIND,
                        InvariantViolation::DefaultOnPlainParam {
                            param: param.name.clone(),
                        },
                    ));
                }

                let current = cx
                    .field_of(Expr::This, &param.name)
                    .map_err(|e| e.in_method(Self::KIND))?;

                args.push(Expr::conditional(
                    Expr::is_absent(&name),
                    current,
                    supplied,
                ));
                method.push_param(Param::optional(name));
            } else {
                args.push(supplied);
                method.push_param(Param::required(name));
            }
        }

        method.push_stmt(Stmt::Return(Expr::construct(
            cx.constructor.clone(),
            args,
        )));

        Ok(method)
    }
}
