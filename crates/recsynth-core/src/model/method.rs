use crate::{
    error::{InvariantViolation, SynthError},
    model::RecordDescriptor,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// MethodKind
///
/// The synthesized method families. Declaration order is emission order.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[display("component")]
    Component,
    #[display("copy")]
    Copy,
    #[display("toString")]
    ToString,
    #[display("hashCode")]
    HashCode,
    #[display("equals")]
    Equals,
}

impl MethodKind {
    pub const ALL: [Self; 5] = [
        Self::Component,
        Self::Copy,
        Self::ToString,
        Self::HashCode,
        Self::Equals,
    ];

    /// Whether synthesis requires at least one identity field.
    #[must_use]
    pub const fn requires_identity_fields(self) -> bool {
        matches!(self, Self::ToString | Self::Equals)
    }
}

///
/// FunctionDescriptor
///
/// The front-end's view of the function being synthesized. Only its
/// parameter list is consulted, to cross-check arity against the record.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FunctionDescriptor {
    pub kind: MethodKind,

    #[serde(default)]
    pub params: Vec<String>,
}

impl FunctionDescriptor {
    #[must_use]
    pub const fn new(kind: MethodKind, params: Vec<String>) -> Self {
        Self { kind, params }
    }

    /// Canonical signature of `kind` for `record`.
    #[must_use]
    pub fn for_record(kind: MethodKind, record: &RecordDescriptor) -> Self {
        let params = match kind {
            MethodKind::Copy => record.params.iter().map(|p| p.name.clone()).collect(),
            MethodKind::Equals => vec!["other".to_string()],
            MethodKind::Component | MethodKind::ToString | MethodKind::HashCode => Vec::new(),
        };

        Self { kind, params }
    }

    /// Number of parameters `kind` must declare for `record`.
    #[must_use]
    pub const fn expected_arity(kind: MethodKind, record: &RecordDescriptor) -> usize {
        match kind {
            MethodKind::Copy => record.params.len(),
            MethodKind::Equals => 1,
            MethodKind::Component | MethodKind::ToString | MethodKind::HashCode => 0,
        }
    }

    /// Fail unless this signature's arity matches what `record` requires.
    pub fn check_arity(&self, record: &RecordDescriptor) -> Result<(), SynthError> {
        let expected = Self::expected_arity(self.kind, record);
        let actual = self.params.len();

        if expected != actual {
            return Err(SynthError::new(
                &record.name,
                InvariantViolation::ParamCountMismatch { expected, actual },
            )
            .in_method(self.kind));
        }

        Ok(())
    }
}
