//! ## Crate layout
//! - `ast`: the generic output tree handed to a downstream emitter.
//! - `config`: naming and method toggles, loaded from TOML.
//! - `core`: record model, naming, the five generators and the driver.
//! - `eval`: reference interpreter for checking generated trees.
//!
//! The `prelude` module covers the common path: describe a record, run the
//! synthesizer, collect methods.

pub use recsynth_ast as ast;
pub use recsynth_config as config;
pub use recsynth_core as core;
pub use recsynth_eval as eval;

mod error;


pub use error::{Error, ErrorKind, ErrorOrigin};

use crate::{
    config::SynthConfig,
    core::{
        model::RecordDescriptor,
        sink::DeclarationSink,
        synth::{RecordSynthesizer, SynthReport},
    },
};
use std::path::Path;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Entrypoints
///

/// Synthesize every method for `record` with the default configuration.
pub fn synthesize<S>(record: &RecordDescriptor, sink: &mut S) -> Result<SynthReport, Error>
where
    S: DeclarationSink + ?Sized,
{
    synthesize_with(SynthConfig::default(), record, sink)
}

/// Synthesize with an explicit configuration.
pub fn synthesize_with<S>(
    config: SynthConfig,
    record: &RecordDescriptor,
    sink: &mut S,
) -> Result<SynthReport, Error>
where
    S: DeclarationSink + ?Sized,
{
    let report = RecordSynthesizer::new(config).synthesize(record, sink)?;

    Ok(report)
}

/// Synthesize a batch of records under the configuration at `path`.
///
/// Records are processed in order; the first failing record stops the batch
/// and nothing from that record reaches the sink.
pub fn synthesize_from_config<S>(
    path: impl AsRef<Path>,
    records: &[RecordDescriptor],
    sink: &mut S,
) -> Result<Vec<SynthReport>, Error>
where
    S: DeclarationSink + ?Sized,
{
    let config = SynthConfig::load(path)?;
    let synthesizer = RecordSynthesizer::new(config);

    records
        .iter()
        .map(|record| synthesizer.synthesize(record, sink).map_err(Error::from))
        .collect()
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ast::{Expr, Ident, MethodDef, Stmt},
        config::SynthConfig,
        core::prelude::*,
        synthesize,
    };
}
