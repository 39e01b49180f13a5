//! Short-circuit boolean built-ins and `if_else`.
//!
//! These receive unevaluated argument expressions and choose which ones to
//! evaluate themselves, per `spec.md` §4.5 item 1.

use crate::{construct::tree::Expr, env::Environment, error::EvalError, eval, value::Value};

fn as_number(value: Value) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(EvalError::WrongParameterType),
    }
}

pub(crate) fn and(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let x = as_number(eval::eval_expr(&args[0], env)?)?;
    if x == 0.0 {
        return Ok(Value::Number(0.0));
    }
    let y = as_number(eval::eval_expr(&args[1], env)?)?;
    Ok(Value::Number(if y != 0.0 { 1.0 } else { 0.0 }))
}

pub(crate) fn or(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let x = as_number(eval::eval_expr(&args[0], env)?)?;
    if x != 0.0 {
        return Ok(Value::Number(1.0));
    }
    let y = as_number(eval::eval_expr(&args[1], env)?)?;
    Ok(Value::Number(if y != 0.0 { 1.0 } else { 0.0 }))
}

pub(crate) fn if_else(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let cond = as_number(eval::eval_expr(&args[0], env)?)?;
    if cond != 0.0 {
        eval::eval_expr(&args[1], env)
    } else {
        eval::eval_expr(&args[2], env)
    }
}
