use crate::{
    error::EvalError,
    interp,
    value::{Arg, Instance, Value},
};
use recsynth_ast::{Ident, MethodDef};
use recsynth_config::SynthConfig;
use recsynth_core::{
    model::{MethodKind, RecordDescriptor},
    naming::NamingContext,
    synth::RecordSynthesizer,
};
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

///
/// RecordClass
///
/// A record type registered with the runtime: its descriptor, the output
/// names of its identity fields, and its method table.
///

#[derive(Debug)]
pub struct RecordClass {
    pub record: RecordDescriptor,
    fields: Vec<Ident>,
    components: Vec<Ident>,
    kinds: BTreeMap<MethodKind, Ident>,
    methods: BTreeMap<String, MethodDef>,
}

impl RecordClass {
    fn new(
        record: RecordDescriptor,
        config: &SynthConfig,
        methods: Vec<MethodDef>,
    ) -> Result<Self, EvalError> {
        record.validate()?;

        let naming = NamingContext::new(&record, &config.naming);
        let fields = record
            .identity_fields()
            .map(|field| naming.field(field.name()).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        let components = (0..fields.len())
            .map(|ordinal| naming.component_name(ordinal))
            .collect();
        let kinds = MethodKind::ALL
            .iter()
            .map(|kind| (*kind, naming.method_name(*kind)))
            .collect();
        let methods = methods
            .into_iter()
            .map(|method| (method.name.to_string(), method))
            .collect();

        Ok(Self {
            record,
            fields,
            components,
            kinds,
            methods,
        })
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.get(name)
    }

    /// The synthesized method of `kind`, if the class has one.
    #[must_use]
    pub fn method_of(&self, kind: MethodKind) -> Option<&MethodDef> {
        self.kinds
            .get(&kind)
            .and_then(|name| self.method(name.as_str()))
    }

    #[must_use]
    pub fn component_name(&self, ordinal: usize) -> Option<&Ident> {
        self.components.get(ordinal)
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

///
/// Runtime
///
/// Class registry keyed by constructor path, plus instance allocation.
/// Construction is counted per path so callers can observe that `copy`
/// calls the primary constructor exactly once.
///

#[derive(Debug, Default)]
pub struct Runtime {
    config: SynthConfig,
    classes: BTreeMap<String, RecordClass>,
    next_id: Cell<u32>,
    constructions: RefCell<BTreeMap<String, u64>>,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SynthConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Synthesize the methods for `record` and register the class.
    pub fn define(&mut self, record: RecordDescriptor) -> Result<&RecordClass, EvalError> {
        let mut methods = Vec::new();
        RecordSynthesizer::new(self.config.clone()).synthesize(&record, &mut methods)?;

        self.define_with_methods(record, methods)
    }

    /// Register a class with a caller-supplied method table.
    pub fn define_with_methods(
        &mut self,
        record: RecordDescriptor,
        methods: Vec<MethodDef>,
    ) -> Result<&RecordClass, EvalError> {
        let path = record.constructor_path().to_string();
        if self.classes.contains_key(&path) {
            return Err(EvalError::DuplicateClass { path });
        }

        let class = RecordClass::new(record, &self.config, methods)?;

        Ok(self.classes.entry(path).or_insert(class))
    }

    #[must_use]
    pub fn class(&self, path: &str) -> Option<&RecordClass> {
        self.classes.get(path)
    }

    /// Number of times the constructor at `path` has run.
    #[must_use]
    pub fn constructions(&self, path: &str) -> u64 {
        self.constructions.borrow().get(path).copied().unwrap_or(0)
    }

    /// Run the primary constructor at `path`. Plain parameters are accepted
    /// and discarded; identity parameters become fields.
    pub fn construct(&self, path: &str, args: Vec<Value>) -> Result<Value, EvalError> {
        let class = self.class(path).ok_or_else(|| EvalError::UnknownClass {
            path: path.to_string(),
        })?;

        let expected = class.record.params.len();
        if args.len() != expected {
            return Err(EvalError::ConstructorArity {
                path: path.to_string(),
                expected,
                actual: args.len(),
            });
        }

        let mut identity = class.fields.iter();
        let mut fields = BTreeMap::new();
        for (param, arg) in class.record.params.iter().zip(args) {
            if !param.identity {
                continue;
            }
            if let Some(name) = identity.next() {
                fields.insert(name.clone(), arg);
            }
        }

        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);
        *self
            .constructions
            .borrow_mut()
            .entry(path.to_string())
            .or_default() += 1;

        Ok(Value::Record(Rc::new(Instance {
            id,
            class: path.to_string(),
            record: class.record.name.clone(),
            fields,
        })))
    }

    /// Call `method` on `receiver` by output name.
    pub fn invoke(
        &self,
        receiver: &Value,
        method: &str,
        args: Vec<Arg>,
    ) -> Result<Value, EvalError> {
        let class = self.class_of(receiver)?;
        let def = class.method(method).ok_or_else(|| EvalError::NoSuchMethod {
            record: class.record.name.clone(),
            method: method.to_string(),
        })?;

        interp::call(self, def, receiver, args)
    }

    /// Read identity field `ordinal` through its component accessor.
    pub fn component(&self, receiver: &Value, ordinal: usize) -> Result<Value, EvalError> {
        let class = self.class_of(receiver)?;
        let name = class
            .component_name(ordinal)
            .ok_or_else(|| EvalError::NoSuchMethod {
                record: class.record.name.clone(),
                method: format!("component #{}", ordinal + 1),
            })?;

        self.invoke(receiver, name.as_str(), Vec::new())
    }

    pub fn copy(&self, receiver: &Value, args: Vec<Arg>) -> Result<Value, EvalError> {
        self.dispatch(receiver, MethodKind::Copy, args)?
            .ok_or_else(|| missing(receiver, MethodKind::Copy))
    }

    /// Call the method of `kind` if the receiver's class has one.
    pub(crate) fn dispatch(
        &self,
        receiver: &Value,
        kind: MethodKind,
        args: Vec<Arg>,
    ) -> Result<Option<Value>, EvalError> {
        let class = self.class_of(receiver)?;

        class
            .method_of(kind)
            .map(|def| interp::call(self, def, receiver, args))
            .transpose()
    }

    fn class_of(&self, receiver: &Value) -> Result<&RecordClass, EvalError> {
        let instance = receiver.as_record().ok_or(EvalError::NotARecord {
            found: receiver.kind(),
        })?;

        self.class(&instance.class)
            .ok_or_else(|| EvalError::UnknownClass {
                path: instance.class.clone(),
            })
    }
}

fn missing(receiver: &Value, kind: MethodKind) -> EvalError {
    let record = receiver
        .as_record()
        .map_or_else(String::new, |instance| instance.record.clone());

    EvalError::NoSuchMethod {
        record,
        method: kind.to_string(),
    }
}
