//! Binary comparison built-ins: `(Number, Number) -> {0.0, 1.0}`.

use crate::{construct::tree::Expr, env::Environment, error::EvalError, eval, value::Value};

pub(crate) fn binary(
    args: &[Expr],
    env: &mut Environment,
    f: impl Fn(f64, f64) -> bool,
) -> Result<Value, EvalError> {
    let lhs = eval::eval_expr(&args[0], env)?;
    let rhs = eval::eval_expr(&args[1], env)?;
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(if f(a, b) { 1.0 } else { 0.0 })),
        _ => Err(EvalError::WrongParameterType),
    }
}
