use crate::{
    error::EvalError,
    runtime::Runtime,
    structural::Structural,
    value::{Arg, Value},
};
use recsynth_ast::{BinaryOp, Expr, Ident, Intrinsic, Literal, MethodDef, Stmt};
use std::collections::BTreeMap;

///
/// Slot
///

#[derive(Debug)]
enum Slot {
    Absent,
    Bound(Value),
}

///
/// Frame
///
/// One method activation: the receiver plus parameter and `let` locals.
///

struct Frame<'a> {
    rt: &'a Runtime,
    this: &'a Value,
    locals: BTreeMap<Ident, Slot>,
}

/// Execute `method` with `this` bound to `receiver`.
pub(crate) fn call(
    rt: &Runtime,
    method: &MethodDef,
    receiver: &Value,
    args: Vec<Arg>,
) -> Result<Value, EvalError> {
    if args.len() > method.params.len() {
        return Err(EvalError::ArityMismatch {
            method: method.name.to_string(),
            expected: method.params.len(),
            actual: args.len(),
        });
    }

    let mut frame = Frame {
        rt,
        this: receiver,
        locals: BTreeMap::new(),
    };

    let mut args = args.into_iter();
    for param in &method.params {
        let slot = match args.next() {
            Some(Arg::Value(value)) => Slot::Bound(value),
            Some(Arg::Absent) | None if param.optional => Slot::Absent,
            _ => {
                return Err(EvalError::MissingArgument {
                    method: method.name.to_string(),
                    param: param.name.to_string(),
                });
            }
        };
        frame.locals.insert(param.name.clone(), slot);
    }

    for stmt in &method.body {
        match stmt {
            Stmt::Let { name, init } => {
                let value = frame.eval(init)?;
                frame.locals.insert(name.clone(), Slot::Bound(value));
            }
            Stmt::Expr(expr) => {
                frame.eval(expr)?;
            }
            Stmt::Return(expr) => return frame.eval(expr),
        }
    }

    Err(EvalError::NoReturn {
        method: method.name.to_string(),
    })
}

impl Frame<'_> {
    fn eval(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::This => Ok(self.this.clone()),
            Expr::Literal(lit) => Ok(literal(lit)),
            Expr::Local(name) => self.read(name),
            Expr::Field { receiver, field } => {
                let receiver = self.eval(receiver)?;
                let instance = receiver.as_record().ok_or(EvalError::NotARecord {
                    found: receiver.kind(),
                })?;

                instance
                    .field(field)
                    .cloned()
                    .ok_or_else(|| EvalError::NoSuchField {
                        record: instance.record.clone(),
                        field: field.to_string(),
                    })
            }
            Expr::Intrinsic { op, args } => self.intrinsic(*op, args),
            Expr::Construct { constructor, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;

                self.rt.construct(constructor.path(), args)
            }
            Expr::Binary { op, lhs, rhs } => self.binary(*op, lhs, rhs),
            Expr::Conditional {
                test,
                then,
                otherwise,
            } => {
                if self.truth(test, "conditional")? {
                    self.eval(then)
                } else {
                    self.eval(otherwise)
                }
            }
            Expr::IsAbsent(name) => match self.locals.get(name) {
                Some(Slot::Absent) => Ok(Value::Bool(true)),
                Some(Slot::Bound(_)) => Ok(Value::Bool(false)),
                None => Err(EvalError::UnknownLocal {
                    name: name.to_string(),
                }),
            },
            Expr::IsStructural(operand) => Ok(Value::Bool(self.eval(operand)?.is_structural())),
            Expr::SameVariant(a, b) => {
                let (a, b) = (self.eval(a)?, self.eval(b)?);
                let same = match (a.as_record(), b.as_record()) {
                    (Some(a), Some(b)) => a.class == b.class,
                    _ => false,
                };

                Ok(Value::Bool(same))
            }
            Expr::Assign { target, value } => {
                let value = self.eval(value)?;
                let slot = self
                    .locals
                    .get_mut(target)
                    .ok_or_else(|| EvalError::UnknownLocal {
                        name: target.to_string(),
                    })?;
                *slot = Slot::Bound(value.clone());

                Ok(value)
            }
        }
    }

    fn read(&self, name: &Ident) -> Result<Value, EvalError> {
        match self.locals.get(name) {
            Some(Slot::Bound(value)) => Ok(value.clone()),
            Some(Slot::Absent) => Err(EvalError::AbsentRead {
                name: name.to_string(),
            }),
            None => Err(EvalError::UnknownLocal {
                name: name.to_string(),
            }),
        }
    }

    fn truth(&mut self, expr: &Expr, op: &str) -> Result<bool, EvalError> {
        match self.eval(expr)? {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(op, "bool", &other)),
        }
    }

    fn intrinsic(&mut self, op: Intrinsic, args: &[Expr]) -> Result<Value, EvalError> {
        if args.len() != op.arity() {
            return Err(EvalError::ArityMismatch {
                method: op.to_string(),
                expected: op.arity(),
                actual: args.len(),
            });
        }

        let first = self.eval(&args[0])?;
        match op {
            Intrinsic::Stringify => first.stringify(self.rt).map(Value::Text),
            Intrinsic::HashCode => first
                .hash_code(self.rt)
                .map(|h| Value::Int(i64::from(h))),
            Intrinsic::Equals => {
                let second = self.eval(&args[1])?;
                first.structural_eq(&second, self.rt).map(Value::Bool)
            }
        }
    }

    fn binary(&mut self, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Result<Value, EvalError> {
        let op_name = op.to_string();

        match op {
            BinaryOp::And => Ok(Value::Bool(
                self.truth(lhs, &op_name)? && self.truth(rhs, &op_name)?,
            )),
            BinaryOp::Or => Ok(Value::Bool(
                self.truth(lhs, &op_name)? || self.truth(rhs, &op_name)?,
            )),
            BinaryOp::Add | BinaryOp::Mul | BinaryOp::BitOr => {
                let (a, b) = (self.eval(lhs)?, self.eval(rhs)?);
                let (Value::Int(x), Value::Int(y)) = (&a, &b) else {
                    let bad = if matches!(a, Value::Int(_)) { &b } else { &a };
                    return Err(mismatch(&op_name, "int", bad));
                };

                Ok(Value::Int(match op {
                    BinaryOp::Add => x.wrapping_add(*y),
                    BinaryOp::Mul => x.wrapping_mul(*y),
                    _ => i64::from(to_int32(x | y)),
                }))
            }
            BinaryOp::Concat => match (self.eval(lhs)?, self.eval(rhs)?) {
                (Value::Text(mut x), Value::Text(y)) => {
                    x.push_str(&y);
                    Ok(Value::Text(x))
                }
                (Value::Text(_), other) | (other, _) => Err(mismatch(&op_name, "text", &other)),
            },
            BinaryOp::RefEq => Ok(Value::Bool(self.eval(lhs)?.identical(&self.eval(rhs)?))),
            BinaryOp::RefNe => Ok(Value::Bool(!self.eval(lhs)?.identical(&self.eval(rhs)?))),
        }
    }
}

fn literal(lit: &Literal) -> Value {
    match lit {
        Literal::Null => Value::Null,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Int(n) => Value::Int(i64::from(*n)),
        Literal::Str(s) => Value::Text(s.clone()),
    }
}

fn mismatch(op: &str, expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        op: op.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Two's-complement truncation to the low 32 bits, as `x | 0` does in hosts
/// with 32-bit integer coercion.
#[expect(clippy::cast_possible_truncation)]
pub(crate) const fn to_int32(n: i64) -> i32 {
    n as i32
}
