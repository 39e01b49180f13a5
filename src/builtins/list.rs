//! List primitives: `len`, `assign`, `append`, `slice`, `reverse`. None of
//! these mutate their `List` argument; each returns a new `List`.

use crate::{
    construct::tree::Expr,
    env::Environment,
    error::EvalError,
    eval,
    numeric::{bound_index, element_index},
    value::Value,
};

fn as_list(value: Value) -> Result<Vec<f64>, EvalError> {
    match value {
        Value::List(l) => Ok(l),
        _ => Err(EvalError::WrongParameterType),
    }
}

fn as_number(value: Value) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(EvalError::WrongParameterType),
    }
}

pub(crate) fn len(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let list = as_list(eval::eval_expr(&args[0], env)?)?;
    Ok(Value::Number(list.len() as f64))
}

pub(crate) fn assign(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let mut list = as_list(eval::eval_expr(&args[0], env)?)?;
    let index = as_number(eval::eval_expr(&args[1], env)?)?;
    let value = as_number(eval::eval_expr(&args[2], env)?)?;
    let i = element_index(index, list.len())?;
    list[i] = value;
    Ok(Value::List(list))
}

pub(crate) fn append(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let mut list = as_list(eval::eval_expr(&args[0], env)?)?;
    match eval::eval_expr(&args[1], env)? {
        Value::Number(n) => list.push(n),
        Value::List(more) => list.extend(more),
        _ => return Err(EvalError::WrongParameterType),
    }
    Ok(Value::List(list))
}

pub(crate) fn slice(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let list = as_list(eval::eval_expr(&args[0], env)?)?;
    let start = as_number(eval::eval_expr(&args[1], env)?)?;
    let end = as_number(eval::eval_expr(&args[2], env)?)?;
    let start = bound_index(start, list.len())?;
    let end = bound_index(end, list.len())?;
    if start > end {
        return Err(EvalError::IndexOutOfRange);
    }
    Ok(Value::List(list[start..end].to_vec()))
}

pub(crate) fn reverse(args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let mut list = as_list(eval::eval_expr(&args[0], env)?)?;
    list.reverse();
    Ok(Value::List(list))
}
