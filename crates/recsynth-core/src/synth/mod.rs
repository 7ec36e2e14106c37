//! Method generators and the per-record driver.

mod component;
mod copy;
mod equals;
mod hash_code;
mod to_string;


pub use component::ComponentGen;
pub use copy::CopyGen;
pub use equals::EqualsGen;
pub use hash_code::HashCodeGen;
pub use to_string::ToStringGen;

use crate::{
    error::{InvariantViolation, SynthError},
    model::{FunctionDescriptor, IdentityField, MethodKind, RecordDescriptor},
    naming::NamingContext,
    obs::{GlobalMetricsSink, MetricsEvent, MetricsSink},
    resolve::{ConstructorResolver, DeclaredConstructor},
    sink::DeclarationSink,
};
use recsynth_ast::{ConstructorRef, Expr, Ident, MethodDef};
use recsynth_config::SynthConfig;

///
/// MethodGen
///
/// One synthesized method family. Generators are pure: the same context
/// always yields the same tree.
///

pub trait MethodGen {
    const KIND: MethodKind;

    fn generate(&self, cx: &RecordContext<'_>) -> Result<MethodDef, SynthError>;
}

///
/// RecordContext
///
/// Everything a generator may read about one record.
///

#[derive(Debug)]
pub struct RecordContext<'a> {
    pub record: &'a RecordDescriptor,
    pub naming: NamingContext,
    pub constructor: ConstructorRef,
    identity: Vec<IdentityField<'a>>,
}

impl<'a> RecordContext<'a> {
    #[must_use]
    pub fn new(
        record: &'a RecordDescriptor,
        naming: NamingContext,
        constructor: ConstructorRef,
    ) -> Self {
        Self {
            record,
            naming,
            constructor,
            identity: record.identity_fields().collect(),
        }
    }

    /// Identity field `ordinal`, without rescanning the constructor.
    #[must_use]
    pub fn identity_field(&self, ordinal: usize) -> Option<IdentityField<'a>> {
        self.identity.get(ordinal).copied()
    }

    #[must_use]
    pub fn identity_count(&self) -> usize {
        self.identity.len()
    }

    /// Build a context with default naming and the declared constructor.
    pub fn from_record(record: &'a RecordDescriptor) -> Result<Self, SynthError> {
        let config = SynthConfig::default();
        let constructor = DeclaredConstructor.primary_constructor(record)?;

        Ok(Self::new(
            record,
            NamingContext::new(record, &config.naming),
            constructor,
        ))
    }

    /// Generate one method and append it to `sink`.
    pub fn emit<G, S>(&self, generator: &G, sink: &mut S) -> Result<(), SynthError>
    where
        G: MethodGen,
        S: DeclarationSink + ?Sized,
    {
        sink.push_method(generator.generate(self)?);

        Ok(())
    }

    /// `<receiver>.<field>` using the field's output identifier.
    pub(crate) fn field_of(&self, receiver: Expr, name: &str) -> Result<Expr, SynthError> {
        Ok(Expr::field(receiver, self.naming.field(name)?))
    }

    /// The identity fields' output identifiers, in declaration order.
    pub(crate) fn identity_idents(&self) -> Result<Vec<(&'a str, Ident)>, SynthError> {
        self.identity
            .iter()
            .map(|f| -> Result<(&'a str, Ident), SynthError> {
                Ok((f.name(), self.naming.field(f.name())?.clone()))
            })
            .collect()
    }

    /// Fail for `kind` when the record has no identity fields.
    pub(crate) fn require_identity_fields(&self, kind: MethodKind) -> Result<(), SynthError> {
        if self.identity.is_empty() {
            return Err(self.violation(kind, InvariantViolation::EmptyIdentityFields));
        }

        Ok(())
    }

    pub(crate) fn violation(&self, kind: MethodKind, violation: InvariantViolation) -> SynthError {
        SynthError::new(&self.record.name, violation).in_method(kind)
    }
}

///
/// SynthReport
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SynthReport {
    pub record: String,
    pub methods: Vec<Ident>,
}

///
/// RecordSynthesizer
///
/// Drives all enabled generators for one record at a time. Output is
/// all-or-nothing per record: the sink is only touched once every method
/// has been generated.
///

pub struct RecordSynthesizer<'a> {
    config: SynthConfig,
    resolver: &'a dyn ConstructorResolver,
    metrics: &'a dyn MetricsSink,
}

impl Default for RecordSynthesizer<'_> {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}

impl<'a> RecordSynthesizer<'a> {
    #[must_use]
    pub fn new(config: SynthConfig) -> Self {
        Self {
            config,
            resolver: &DeclaredConstructor,
            metrics: &GlobalMetricsSink,
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: &'a dyn ConstructorResolver) -> Self {
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn with_metrics_sink(mut self, metrics: &'a dyn MetricsSink) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Synthesize every enabled, undeclared method for `record` into `sink`.
    pub fn synthesize<S>(
        &self,
        record: &RecordDescriptor,
        sink: &mut S,
    ) -> Result<SynthReport, SynthError>
    where
        S: DeclarationSink + ?Sized,
    {
        self.metrics.record(MetricsEvent::RecordStart {
            record: &record.name,
        });

        match self.generate_all(record) {
            Ok(generated) => {
                let (kinds, methods): (Vec<MethodKind>, Vec<MethodDef>) =
                    generated.into_iter().unzip();
                let names: Vec<Ident> = methods.iter().map(|m| m.name.clone()).collect();

                for kind in kinds {
                    self.metrics.record(MetricsEvent::MethodEmitted {
                        record: &record.name,
                        kind,
                    });
                }
                self.metrics.record(MetricsEvent::RecordFinish {
                    record: &record.name,
                    methods: names.len() as u64,
                });
                tracing::debug!(
                    record = %record.name,
                    methods = names.len(),
                    "synthesized record methods"
                );

                sink.extend_methods(methods);

                Ok(SynthReport {
                    record: record.name.clone(),
                    methods: names,
                })
            }
            Err(err) => {
                self.metrics.record(MetricsEvent::InvariantFailed {
                    record: &record.name,
                    method: err.method,
                });
                tracing::warn!(record = %record.name, error = %err, "record synthesis aborted");

                Err(err)
            }
        }
    }

    fn enabled(&self, record: &RecordDescriptor, kind: MethodKind) -> bool {
        let toggles = &self.config.methods;
        let on = match kind {
            MethodKind::Component => toggles.component,
            MethodKind::Copy => toggles.copy,
            MethodKind::ToString => toggles.to_string,
            MethodKind::HashCode => toggles.hash_code,
            MethodKind::Equals => toggles.equals,
        };

        on && !record.is_declared(kind)
    }

    /// Every enabled method paired with its kind. Nothing is observable
    /// until the caller commits the whole batch.
    fn generate_all(
        &self,
        record: &RecordDescriptor,
    ) -> Result<Vec<(MethodKind, MethodDef)>, SynthError> {
        record.validate()?;

        let constructor = self.resolver.primary_constructor(record)?;
        let naming = NamingContext::new(record, &self.config.naming);
        let cx = RecordContext::new(record, naming, constructor);

        let mut out: Vec<(MethodKind, MethodDef)> = Vec::new();

        if self.enabled(record, MethodKind::Component) {
            for field in &cx.identity {
                Self::push(&cx, &ComponentGen::new(field.ordinal, field.name()), &mut out)?;
            }
        }

        if self.enabled(record, MethodKind::Copy) {
            let function = FunctionDescriptor::for_record(MethodKind::Copy, record);
            Self::push(&cx, &CopyGen::new(&function), &mut out)?;
        }

        if self.enabled(record, MethodKind::ToString) {
            Self::push(&cx, &ToStringGen, &mut out)?;
        }

        if self.enabled(record, MethodKind::HashCode) {
            Self::push(&cx, &HashCodeGen, &mut out)?;
        }

        if self.enabled(record, MethodKind::Equals) {
            Self::push(&cx, &EqualsGen, &mut out)?;
        }

        Ok(out)
    }

    fn push<G: MethodGen>(
        cx: &RecordContext<'_>,
        generator: &G,
        out: &mut Vec<(MethodKind, MethodDef)>,
    ) -> Result<(), SynthError> {
        out.push((G::KIND, generator.generate(cx)?));

        Ok(())
    }
}
