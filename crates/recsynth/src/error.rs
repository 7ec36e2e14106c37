use derive_more::Display;
use recsynth_config::ConfigError;
use recsynth_core::{error::SynthError, model::MethodKind};
use recsynth_eval::EvalError;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

impl From<SynthError> for Error {
    fn from(err: SynthError) -> Self {
        let origin = err.method.map_or(ErrorOrigin::Record, ErrorOrigin::Method);

        Self::new(ErrorKind::Invariant, origin, err.to_string())
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::Synth(err) => err.into(),
            err => Self::new(ErrorKind::Evaluation, ErrorOrigin::Runtime, err.to_string()),
        }
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Configuration could not be read or parsed.
    Config,

    /// The record handed to the synthesizer broke an internal invariant.
    /// The caller fixes the input and re-runs.
    Invariant,

    /// A generated tree failed while being evaluated.
    Evaluation,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Record,
    #[display("{_0}")]
    Method(MethodKind),
    Runtime,
}
