use crate::{Ident, Stmt};
use serde::{Deserialize, Serialize};

///
/// Param
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Param {
    pub name: Ident,

    /// The caller may omit this argument; the body observes the omission
    /// through `Expr::IsAbsent`.
    #[serde(default)]
    pub optional: bool,
}

impl Param {
    #[must_use]
    pub const fn required(name: Ident) -> Self {
        Self {
            name,
            optional: false,
        }
    }

    #[must_use]
    pub const fn optional(name: Ident) -> Self {
        Self {
            name,
            optional: true,
        }
    }
}

///
/// MethodDef
///
/// One named method definition as handed to the declaration emitter.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MethodDef {
    pub name: Ident,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

impl MethodDef {
    /// Create a method with no parameters and an empty body.
    #[must_use]
    pub const fn new(name: Ident) -> Self {
        Self {
            name,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn push_param(&mut self, param: Param) {
        self.params.push(param);
    }

    pub fn push_stmt(&mut self, stmt: Stmt) {
        self.body.push(stmt);
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}
