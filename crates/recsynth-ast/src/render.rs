//! Deterministic debug rendering.
//!
//! Binary and conditional expressions are always parenthesised so the
//! rendering shows tree shape exactly; nothing here attempts to be valid
//! syntax for any host.

use crate::{Expr, Literal, MethodDef, Param, Stmt};
use std::fmt::{self, Display, Formatter};

const INDENT: &str = "    ";

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::This => f.write_str("this"),
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::Local(name) => write!(f, "{name}"),
            Self::Field { receiver, field } => write!(f, "{receiver}.{field}"),
            Self::Intrinsic { op, args } => {
                write!(f, "${op}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Self::Construct { constructor, args } => {
                write!(f, "new {constructor}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Self::Conditional {
                test,
                then,
                otherwise,
            } => write!(f, "({test} ? {then} : {otherwise})"),
            Self::IsAbsent(name) => write!(f, "$absent({name})"),
            Self::IsStructural(operand) => write!(f, "$structural({operand})"),
            Self::SameVariant(lhs, rhs) => write!(f, "$same_variant({lhs}, {rhs})"),
            Self::Assign { target, value } => write!(f, "{target} = {value}"),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, init } => write!(f, "let {name} = {init};"),
            Self::Expr(expr) => write!(f, "{expr};"),
            Self::Return(expr) => write!(f, "return {expr};"),
        }
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "{}?", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl Display for MethodDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}(", self.name)?;
        write_list(f, &self.params)?;
        f.write_str(") {\n")?;

        for stmt in &self.body {
            writeln!(f, "{INDENT}{stmt}")?;
        }

        f.write_str("}")
    }
}

// write_list
fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }

    Ok(())
}
