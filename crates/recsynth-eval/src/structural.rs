use crate::{error::EvalError, interp::to_int32, runtime::Runtime, value::Value};
use recsynth_core::model::MethodKind;

///
/// Structural
///
/// The stringify / hash / equals capability every host value exposes.
/// Records dispatch to their synthesized methods when they have them and
/// fall back to identity semantics otherwise.
///

pub trait Structural {
    fn stringify(&self, rt: &Runtime) -> Result<String, EvalError>;

    fn hash_code(&self, rt: &Runtime) -> Result<i32, EvalError>;

    fn structural_eq(&self, other: &Self, rt: &Runtime) -> Result<bool, EvalError>;
}

impl Structural for Value {
    fn stringify(&self, rt: &Runtime) -> Result<String, EvalError> {
        match self {
            Self::Null => Ok("null".to_string()),
            Self::Bool(b) => Ok(b.to_string()),
            Self::Int(n) => Ok(n.to_string()),
            Self::Text(s) => Ok(s.clone()),
            Self::List(items) => {
                let mut out = String::from("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&item.stringify(rt)?);
                }
                out.push(']');

                Ok(out)
            }
            Self::Record(instance) => match rt.dispatch(self, MethodKind::ToString, Vec::new())? {
                Some(Self::Text(s)) => Ok(s),
                Some(other) => Err(EvalError::TypeMismatch {
                    op: MethodKind::ToString.to_string(),
                    expected: "text",
                    found: other.kind(),
                }),
                None => Ok(format!("{}@{:x}", instance.record, instance.id)),
            },
        }
    }

    fn hash_code(&self, rt: &Runtime) -> Result<i32, EvalError> {
        match self {
            Self::Null => Ok(0),
            Self::Bool(b) => Ok(if *b { 1231 } else { 1237 }),
            Self::Int(n) => Ok(to_int32(*n)),
            Self::Text(s) => Ok(s
                .encode_utf16()
                .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))),
            Self::List(items) => items.iter().try_fold(1i32, |h, item| {
                Ok(h.wrapping_mul(31).wrapping_add(item.hash_code(rt)?))
            }),
            Self::Record(instance) => match rt.dispatch(self, MethodKind::HashCode, Vec::new())? {
                Some(Self::Int(n)) => {
                    i32::try_from(n).map_err(|_| EvalError::HashOutOfRange { value: n })
                }
                Some(other) => Err(EvalError::TypeMismatch {
                    op: MethodKind::HashCode.to_string(),
                    expected: "int",
                    found: other.kind(),
                }),
                None => Ok(instance.id.cast_signed()),
            },
        }
    }

    fn structural_eq(&self, other: &Self, rt: &Runtime) -> Result<bool, EvalError> {
        match (self, other) {
            (Self::Record(_), _) => {
                match rt.dispatch(self, MethodKind::Equals, vec![other.clone().into()])? {
                    Some(Self::Bool(b)) => Ok(b),
                    Some(found) => Err(EvalError::TypeMismatch {
                        op: MethodKind::Equals.to_string(),
                        expected: "bool",
                        found: found.kind(),
                    }),
                    None => Ok(self.identical(other)),
                }
            }
            (Self::List(a), Self::List(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (x, y) in a.iter().zip(b) {
                    if !x.structural_eq(y, rt)? {
                        return Ok(false);
                    }
                }

                Ok(true)
            }
            _ => Ok(self.identical(other)),
        }
    }
}
