use crate::model::MethodKind;
use thiserror::Error as ThisError;

///
/// SynthError
///
/// Generation aborted for one record. Every variant is an internal invariant
/// violation: the front-end handed over input it should have rejected.
/// Re-running with corrected input is the only recovery.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("cannot synthesize {} for record '{record}': {violation}", method_label(.method))]
pub struct SynthError {
    pub record: String,
    pub method: Option<MethodKind>,
    pub violation: InvariantViolation,
}

impl SynthError {
    pub fn new(record: impl Into<String>, violation: InvariantViolation) -> Self {
        Self {
            record: record.into(),
            method: None,
            violation,
        }
    }

    #[must_use]
    pub const fn in_method(mut self, method: MethodKind) -> Self {
        self.method = Some(method);
        self
    }
}

fn method_label(method: &Option<MethodKind>) -> String {
    match method {
        Some(method) => format!("'{method}'"),
        None => "methods".to_string(),
    }
}

///
/// InvariantViolation
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum InvariantViolation {
    #[error("component {ordinal} was requested for '{given}' but the identity field is '{expected}'")]
    ComponentMismatch {
        ordinal: usize,
        given: String,
        expected: String,
    },

    #[error("component ordinal {ordinal} is out of range ({count} identity fields)")]
    ComponentOutOfRange { ordinal: usize, count: usize },

    #[error("constructor-only parameter '{param}' is marked defaultable")]
    DefaultOnPlainParam { param: String },

    #[error("constructor parameter '{param}' is declared more than once")]
    DuplicateParam { param: String },

    #[error("record has no identity fields")]
    EmptyIdentityFields,

    #[error("constructor parameter at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("record name is empty")]
    EmptyRecordName,

    #[error("function declares {actual} parameters but {expected} are required")]
    ParamCountMismatch { expected: usize, actual: usize },

    #[error("no constructor parameter named '{field}'")]
    UnknownField { field: String },
}
