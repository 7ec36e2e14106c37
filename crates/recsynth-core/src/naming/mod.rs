//! Per-record naming context.
//!
//! Every generator receives the record's `NamingContext` explicitly; there is
//! no shared symbol table. Field identifiers are fixed once per record, while
//! locals and parameters are declared in a fresh `MethodScope` per method.

mod reserved;

#[cfg(test)]
mod tests;

use crate::{
    error::{InvariantViolation, SynthError},
    model::{MethodKind, RecordDescriptor},
};
use recsynth_ast::Ident;
use recsynth_config::NamingConfig;
use reserved::is_reserved_word;
use std::collections::{BTreeMap, BTreeSet};

const FALLBACK_SUFFIX: &str = "$";

///
/// NamingContext
///

#[derive(Clone, Debug)]
pub struct NamingContext {
    record: String,
    fields: BTreeMap<String, Ident>,
    config: NamingConfig,
    extra_reserved: BTreeSet<String>,
}

impl NamingContext {
    #[must_use]
    pub fn new(record: &RecordDescriptor, config: &NamingConfig) -> Self {
        let mut cx = Self {
            record: record.name.clone(),
            fields: BTreeMap::new(),
            config: config.clone(),
            extra_reserved: config.reserved.iter().cloned().collect(),
        };

        // names that are already usable claim themselves first, so mangling
        // a reserved name can never steal a declared one
        let mut taken: BTreeSet<String> = record
            .params
            .iter()
            .map(|p| p.name.clone())
            .filter(|name| !cx.is_reserved(name))
            .collect();

        for param in &record.params {
            let ident = cx.mangle(&param.name, &taken);
            taken.insert(ident.to_string());
            cx.fields.insert(param.name.clone(), ident);
        }

        cx
    }

    #[must_use]
    pub fn record(&self) -> &str {
        &self.record
    }

    /// Output identifier for a declared field or constructor parameter.
    pub fn field(&self, name: &str) -> Result<&Ident, SynthError> {
        self.fields.get(name).ok_or_else(|| {
            SynthError::new(
                &self.record,
                InvariantViolation::UnknownField {
                    field: name.to_string(),
                },
            )
        })
    }

    /// Name of the accessor for the identity field at `ordinal` (0-based).
    #[must_use]
    pub fn component_name(&self, ordinal: usize) -> Ident {
        Ident::new(format!("{}{}", self.config.component_prefix, ordinal + 1))
    }

    /// Name of a non-component method.
    #[must_use]
    pub fn method_name(&self, kind: MethodKind) -> Ident {
        let name = match kind {
            MethodKind::Component => &self.config.component_prefix,
            MethodKind::Copy => &self.config.copy,
            MethodKind::ToString => &self.config.to_string,
            MethodKind::HashCode => &self.config.hash_code,
            MethodKind::Equals => &self.config.equals,
        };

        Ident::new(name.as_str())
    }

    /// Open a fresh local namespace for one method body.
    #[must_use]
    pub const fn method_scope(&self) -> MethodScope<'_> {
        MethodScope {
            naming: self,
            taken: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        is_reserved_word(name) || self.extra_reserved.contains(name)
    }

    fn suffix(&self) -> &str {
        if self.config.mangle_suffix.is_empty() {
            FALLBACK_SUFFIX
        } else {
            &self.config.mangle_suffix
        }
    }

    fn mangle(&self, hint: &str, taken: &BTreeSet<String>) -> Ident {
        let mut candidate = hint.to_string();

        if !self.is_reserved(&candidate) {
            return Ident::new(candidate);
        }

        while self.is_reserved(&candidate) || taken.contains(&candidate) {
            candidate.push_str(self.suffix());
        }

        Ident::new(candidate)
    }
}

///
/// MethodScope
///
/// Locals and parameters of a single method. Declaring the same hint twice
/// yields two distinct identifiers.
///

#[derive(Debug)]
pub struct MethodScope<'a> {
    naming: &'a NamingContext,
    taken: BTreeSet<String>,
}

impl MethodScope<'_> {
    pub fn declare(&mut self, hint: &str) -> Ident {
        let mut candidate = hint.to_string();

        while self.naming.is_reserved(&candidate) || self.taken.contains(&candidate) {
            candidate.push_str(self.naming.suffix());
        }

        self.taken.insert(candidate.clone());

        Ident::new(candidate)
    }
}
