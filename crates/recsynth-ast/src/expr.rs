use crate::Ident;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Literal
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i32),
    Str(String),
}

///
/// BinaryOp
///
/// `Concat` is string concatenation and never overlaps with numeric `Add`,
/// so an emitter targeting a host with a shared `+` can still tell them apart.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum BinaryOp {
    #[display("+")]
    Add,
    #[display("*")]
    Mul,
    #[display("|")]
    BitOr,
    #[display("++")]
    Concat,
    #[display("===")]
    RefEq,
    #[display("!==")]
    RefNe,
    #[display("&&")]
    And,
    #[display("||")]
    Or,
}

///
/// Intrinsic
///
/// Capability calls every host value type must answer: null-safe,
/// polymorphic, and recursive into nested values.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Intrinsic {
    #[display("stringify")]
    Stringify,
    #[display("hash")]
    HashCode,
    #[display("equals")]
    Equals,
}

impl Intrinsic {
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Stringify | Self::HashCode => 1,
            Self::Equals => 2,
        }
    }
}

///
/// ConstructorRef
///
/// Handle to a record's primary constructor, as produced by the
/// constructor resolver. The path is opaque to the synthesizer.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ConstructorRef(String);

impl ConstructorRef {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

///
/// Expr
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Expr {
    /// The implicit receiver.
    This,
    Literal(Literal),
    Local(Ident),
    Field {
        receiver: Box<Self>,
        field: Ident,
    },
    Intrinsic {
        op: Intrinsic,
        args: Vec<Self>,
    },
    Construct {
        constructor: ConstructorRef,
        args: Vec<Self>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Self>,
        rhs: Box<Self>,
    },
    Conditional {
        test: Box<Self>,
        then: Box<Self>,
        otherwise: Box<Self>,
    },
    /// True when the optional parameter was not supplied by the caller.
    /// An explicit null argument is *present*.
    IsAbsent(Ident),
    /// True when the operand is a structural (object-like) value rather than
    /// a primitive or null.
    IsStructural(Box<Self>),
    /// True when both operands are instances of the same concrete variant.
    SameVariant(Box<Self>, Box<Self>),
    Assign {
        target: Ident,
        value: Box<Self>,
    },
}

impl Expr {
    // ---- leaves ---------------------------------------------------------

    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    #[must_use]
    pub const fn int(value: i32) -> Self {
        Self::Literal(Literal::Int(value))
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Literal(Literal::Str(value.into()))
    }

    #[must_use]
    pub fn local(name: &Ident) -> Self {
        Self::Local(name.clone())
    }

    // ---- access ---------------------------------------------------------

    #[must_use]
    pub fn field(receiver: Self, field: &Ident) -> Self {
        Self::Field {
            receiver: Box::new(receiver),
            field: field.clone(),
        }
    }

    /// `this.<field>`
    #[must_use]
    pub fn this_field(field: &Ident) -> Self {
        Self::field(Self::This, field)
    }

    // ---- calls ----------------------------------------------------------

    #[must_use]
    pub fn stringify(arg: Self) -> Self {
        Self::Intrinsic {
            op: Intrinsic::Stringify,
            args: vec![arg],
        }
    }

    #[must_use]
    pub fn hash_code(arg: Self) -> Self {
        Self::Intrinsic {
            op: Intrinsic::HashCode,
            args: vec![arg],
        }
    }

    #[must_use]
    pub fn equals(lhs: Self, rhs: Self) -> Self {
        Self::Intrinsic {
            op: Intrinsic::Equals,
            args: vec![lhs, rhs],
        }
    }

    #[must_use]
    pub const fn construct(constructor: ConstructorRef, args: Vec<Self>) -> Self {
        Self::Construct { constructor, args }
    }

    // ---- operators ------------------------------------------------------

    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[must_use]
    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Add, lhs, rhs)
    }

    #[must_use]
    pub fn mul(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Mul, lhs, rhs)
    }

    #[must_use]
    pub fn bit_or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::BitOr, lhs, rhs)
    }

    #[must_use]
    pub fn concat(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Concat, lhs, rhs)
    }

    #[must_use]
    pub fn ref_eq(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::RefEq, lhs, rhs)
    }

    #[must_use]
    pub fn ref_ne(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::RefNe, lhs, rhs)
    }

    #[must_use]
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    #[must_use]
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }

    /// Fold a sequence with `op`, left-associative.
    /// Returns `None` for an empty sequence.
    pub fn fold_left(op: BinaryOp, items: impl IntoIterator<Item = Self>) -> Option<Self> {
        items
            .into_iter()
            .reduce(|acc, next| Self::binary(op, acc, next))
    }

    #[must_use]
    pub fn conditional(test: Self, then: Self, otherwise: Self) -> Self {
        Self::Conditional {
            test: Box::new(test),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    // ---- checks ---------------------------------------------------------

    #[must_use]
    pub fn is_absent(param: &Ident) -> Self {
        Self::IsAbsent(param.clone())
    }

    #[must_use]
    pub fn is_structural(operand: Self) -> Self {
        Self::IsStructural(Box::new(operand))
    }

    #[must_use]
    pub fn same_variant(lhs: Self, rhs: Self) -> Self {
        Self::SameVariant(Box::new(lhs), Box::new(rhs))
    }

    #[must_use]
    pub fn assign(target: &Ident, value: Self) -> Self {
        Self::Assign {
            target: target.clone(),
            value: Box::new(value),
        }
    }
}
