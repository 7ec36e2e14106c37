use crate::{
    error::{InvariantViolation, SynthError},
    model::MethodKind,
    synth::{MethodGen, RecordContext},
};
use recsynth_ast::{Expr, MethodDef, Stmt};

///
/// ComponentGen
///
/// `component<N>()` returning the N-th identity field off the receiver.
/// The caller names the field; the ordinal is only cross-checked.
///

#[derive(Clone, Copy, Debug)]
pub struct ComponentGen<'a> {
    pub ordinal: usize,
    pub field: &'a str,
}

impl<'a> ComponentGen<'a> {
    #[must_use]
    pub const fn new(ordinal: usize, field: &'a str) -> Self {
        Self { ordinal, field }
    }
}

impl MethodGen for ComponentGen<'_> {
    const KIND: MethodKind = MethodKind::Component;

    fn generate(&self, cx: &RecordContext<'_>) -> Result<MethodDef, SynthError> {
        let Some(expected) = cx.identity_field(self.ordinal) else {
            return Err(cx.violation(
                Self::KIND,
                InvariantViolation::ComponentOutOfRange {
                    ordinal: self.ordinal,
                    count: cx.identity_count(),
                },
            ));
        };

        if expected.name() != self.field {
            return Err(cx.violation(
                Self::KIND,
                InvariantViolation::ComponentMismatch {
                    ordinal: self.ordinal,
                    given: self.field.to_string(),
                    expected: expected.name().to_string(),
                },
            ));
        }

        let mut method = MethodDef::new(cx.naming.component_name(self.ordinal));
        let value = cx
            .field_of(Expr::This, self.field)
            .map_err(|e| e.in_method(Self::KIND))?;
        method.push_stmt(Stmt::Return(value));

        Ok(method)
    }
}
