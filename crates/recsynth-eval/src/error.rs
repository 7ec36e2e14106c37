use recsynth_core::error::SynthError;
use thiserror::Error as ThisError;

///
/// EvalError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum EvalError {
    #[error("parameter '{name}' was read while absent")]
    AbsentRead { name: String },

    #[error("'{method}' takes {expected} arguments, got {actual}")]
    ArityMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("constructor '{path}' takes {expected} arguments, got {actual}")]
    ConstructorArity {
        path: String,
        expected: usize,
        actual: usize,
    },

    #[error("record class '{path}' is already defined")]
    DuplicateClass { path: String },

    #[error("hash value {value} does not fit in 32 signed bits")]
    HashOutOfRange { value: i64 },

    #[error("'{method}' requires an argument for '{param}'")]
    MissingArgument { method: String, param: String },

    #[error("'{method}' finished without returning")]
    NoReturn { method: String },

    #[error("record '{record}' has no field '{field}'")]
    NoSuchField { record: String, field: String },

    #[error("record '{record}' has no method '{method}'")]
    NoSuchMethod { record: String, method: String },

    #[error("expected a record, found {found}")]
    NotARecord { found: &'static str },

    #[error(transparent)]
    Synth(#[from] SynthError),

    #[error("{op} expects {expected}, found {found}")]
    TypeMismatch {
        op: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("no record class for constructor '{path}'")]
    UnknownClass { path: String },

    #[error("unknown local '{name}'")]
    UnknownLocal { name: String },
}
