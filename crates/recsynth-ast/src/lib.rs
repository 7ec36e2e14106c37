//! Output tree for synthesized record methods.
//!
//! The tree is target-agnostic: it carries no host syntax and is rendered by
//! a downstream emitter. The `Display` impls in `render` exist for
//! diagnostics and tests only.

mod expr;
mod ident;
mod method;
mod render;
mod stmt;


pub use expr::{BinaryOp, ConstructorRef, Expr, Intrinsic, Literal};
pub use ident::Ident;
pub use method::{MethodDef, Param};
pub use stmt::Stmt;
