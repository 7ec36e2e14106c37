mod method;
mod record;

#[cfg(test)]
mod tests;

pub use method::{FunctionDescriptor, MethodKind};
pub use record::{ConstructorParam, IdentityField, RecordDescriptor};
