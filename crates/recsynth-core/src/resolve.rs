use crate::{error::SynthError, model::RecordDescriptor};
use recsynth_ast::ConstructorRef;

///
/// ConstructorResolver
///
/// Yields the constructible handle for a record's primary constructor.
///

pub trait ConstructorResolver {
    fn primary_constructor(&self, record: &RecordDescriptor)
    -> Result<ConstructorRef, SynthError>;
}

///
/// DeclaredConstructor
///
/// Resolves to the path the descriptor declares, or the bare record name.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredConstructor;

impl ConstructorResolver for DeclaredConstructor {
    fn primary_constructor(
        &self,
        record: &RecordDescriptor,
    ) -> Result<ConstructorRef, SynthError> {
        Ok(ConstructorRef::new(record.constructor_path()))
    }
}
