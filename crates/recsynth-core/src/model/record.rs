use crate::{
    error::{InvariantViolation, SynthError},
    model::MethodKind,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

///
/// ConstructorParam
///
/// One formal parameter of the record's primary constructor.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConstructorParam {
    pub name: String,

    /// The parameter also declares a field that takes part in equality,
    /// hashing, string rendering and component access.
    #[serde(default)]
    pub identity: bool,

    #[serde(default)]
    pub has_default: bool,
}

impl ConstructorParam {
    /// Identity field without a default.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: true,
            has_default: false,
        }
    }

    /// Identity field the caller may omit.
    pub fn defaulted_field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: true,
            has_default: true,
        }
    }

    /// Constructor-only parameter.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: false,
            has_default: false,
        }
    }
}

///
/// IdentityField
///
/// An identity field together with its position among identity fields.
/// `ordinal` is independent of the constructor position whenever plain
/// parameters are interleaved.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IdentityField<'a> {
    pub ordinal: usize,
    pub param: &'a ConstructorParam,
}

impl<'a> IdentityField<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.param.name
    }
}

///
/// RecordDescriptor
///
/// Read-only description of one record type, built once by the front-end.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordDescriptor {
    pub name: String,

    /// Qualified path of the primary constructor; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default)]
    pub params: Vec<ConstructorParam>,

    /// Methods the user wrote by hand. These are never synthesized.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub declared: BTreeSet<MethodKind>,
}

impl RecordDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            params: Vec::new(),
            declared: BTreeSet::new(),
        }
    }

    // ---- builder --------------------------------------------------------

    #[must_use]
    pub fn field(self, name: impl Into<String>) -> Self {
        self.param(ConstructorParam::field(name))
    }

    #[must_use]
    pub fn defaulted_field(self, name: impl Into<String>) -> Self {
        self.param(ConstructorParam::defaulted_field(name))
    }

    #[must_use]
    pub fn plain(self, name: impl Into<String>) -> Self {
        self.param(ConstructorParam::plain(name))
    }

    #[must_use]
    pub fn param(mut self, param: ConstructorParam) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_declared(mut self, kind: MethodKind) -> Self {
        self.declared.insert(kind);
        self
    }

    // ---- queries --------------------------------------------------------

    /// Constructor path, falling back to the bare record name.
    #[must_use]
    pub fn constructor_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }

    /// Identity fields in declaration order.
    pub fn identity_fields(&self) -> impl Iterator<Item = IdentityField<'_>> + '_ {
        self.params
            .iter()
            .filter(|p| p.identity)
            .enumerate()
            .map(|(ordinal, param)| IdentityField { ordinal, param })
    }

    #[must_use]
    pub fn identity_count(&self) -> usize {
        self.params.iter().filter(|p| p.identity).count()
    }

    #[must_use]
    pub fn identity_field(&self, ordinal: usize) -> Option<IdentityField<'_>> {
        self.identity_fields().nth(ordinal)
    }

    #[must_use]
    pub fn is_declared(&self, kind: MethodKind) -> bool {
        self.declared.contains(&kind)
    }

    // ---- validation -----------------------------------------------------

    /// Check the invariants every generator relies on.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.name.is_empty() {
            return Err(self.violation(InvariantViolation::EmptyRecordName));
        }

        let mut seen = HashSet::new();
        for (position, param) in self.params.iter().enumerate() {
            if param.name.is_empty() {
                return Err(self.violation(InvariantViolation::EmptyName { position }));
            }

            if !seen.insert(param.name.as_str()) {
                return Err(self.violation(InvariantViolation::DuplicateParam {
                    param: param.name.clone(),
                }));
            }

            if !param.identity && param.has_default {
                return Err(self.violation(InvariantViolation::DefaultOnPlainParam {
                    param: param.name.clone(),
                }));
            }
        }

        Ok(())
    }

    fn violation(&self, violation: InvariantViolation) -> SynthError {
        SynthError::new(&self.name, violation)
    }
}
