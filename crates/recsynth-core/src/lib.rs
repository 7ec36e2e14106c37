//! Structural method synthesis for value-like records.
//!
//! Given a validated [`RecordDescriptor`](model::RecordDescriptor), the
//! generators in [`synth`] build the component accessors, `copy`,
//! `toString`, `hashCode` and `equals` methods as output trees and append
//! them to a caller-owned [`DeclarationSink`](sink::DeclarationSink).
#![warn(unreachable_pub)]

pub mod error;
pub mod model;
pub mod naming;
pub mod obs;
pub mod resolve;
pub mod sink;
pub mod synth;

///
/// CONSTANTS
///

/// Multiplier applied to the accumulator before each field hash is added.
pub const HASH_MULTIPLIER: i32 = 31;

/// Initial accumulator value for synthesized `hashCode` bodies.
pub const HASH_SEED: i32 = 0;

///
/// Prelude
///
/// Domain vocabulary only; errors and observability stay behind their
/// module paths.
///

pub mod prelude {
    pub use crate::{
        model::{ConstructorParam, FunctionDescriptor, MethodKind, RecordDescriptor},
        resolve::ConstructorResolver,
        sink::DeclarationSink,
        synth::{MethodGen, RecordContext, RecordSynthesizer},
    };
    pub use recsynth_ast::{Expr, Ident, MethodDef, Param, Stmt};
}
