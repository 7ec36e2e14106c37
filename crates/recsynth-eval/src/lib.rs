//! Reference evaluation of synthesized method trees.
//!
//! A small host runtime: values implement the stringify / hash / equals
//! capability, records are registered with their synthesized methods, and
//! the interpreter executes method bodies against instances. Used to check
//! the runtime behavior of generated code without an emitter.
#![warn(unreachable_pub)]

mod error;
mod interp;
mod runtime;
mod structural;
mod value;


pub use error::EvalError;
pub use runtime::{RecordClass, Runtime};
pub use structural::Structural;
pub use value::{Arg, Instance, Value};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Arg, Runtime, Structural, Value};
}
