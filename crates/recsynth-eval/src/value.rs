use derive_more::From;
use recsynth_ast::Ident;
use std::{collections::BTreeMap, rc::Rc};

///
/// Value
///
/// Host values. `Int` is deliberately wider than 32 bits so the explicit
/// truncation in synthesized hash code is actually exercised.
///

#[derive(Clone, Debug, From)]
pub enum Value {
    #[from(skip)]
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<Self>),
    Record(Rc<Instance>),
}

impl Value {
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Rc<Instance>> {
        match self {
            Self::Record(instance) => Some(instance),
            _ => None,
        }
    }

    /// Object-like values, as opposed to primitives and null.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::List(_) | Self::Record(_))
    }

    /// Reference identity: records by allocation, primitives by value.
    #[must_use]
    pub fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => Rc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.identical(y))
            }
            _ => false,
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

///
/// Instance
///
/// One constructed record. Fields are keyed by output identifier, which is
/// what synthesized bodies address.
///

#[derive(Debug)]
pub struct Instance {
    pub id: u32,
    pub class: String,
    pub record: String,
    pub fields: BTreeMap<Ident, Value>,
}

impl Instance {
    #[must_use]
    pub fn field(&self, name: &Ident) -> Option<&Value> {
        self.fields.get(name)
    }
}

///
/// Arg
///
/// A call-site argument. `Absent` means the caller left it out, which is
/// not the same as passing `Value::Null`.
///

#[derive(Clone, Debug)]
pub enum Arg {
    Absent,
    Value(Value),
}

impl Arg {
    #[must_use]
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
