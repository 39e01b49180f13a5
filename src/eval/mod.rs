//! The tree-walking evaluator: `Expr`/`Program` + [`Environment`] ->
//! [`Value`] (`spec.md` §4.4–§4.6).

mod subst;

use std::{collections::HashMap, rc::Rc};

use log::trace;

use crate::{
    builtins,
    construct::tree::{Expr, Program},
    env::Environment,
    error::EvalError,
    numeric::element_index,
    value::{Lambda, Value},
};

/// Evaluates a parsed top-level form. On success, the caller (`Context`)
/// rebinds `ans` if the result is non-`Void`.
pub fn eval_program(program: &Program, env: &mut Environment) -> Result<Value, EvalError> {
    match program {
        Program::Assign(name, rhs) => {
            let value = eval_expr(rhs, env)?;
            env.set(name.clone(), value);
            Ok(Value::Void)
        },
        Program::AssignLambda(name, params, body) => {
            let lambda = Lambda::User { params: Rc::new(params.clone()), body: body.clone() };
            env.set(name.clone(), Value::Lambda(lambda));
            Ok(Value::Void)
        },
        Program::Expr(expr) => eval_expr(expr, env),
    }
}

/// Evaluates a sub-expression against the environment.
pub(crate) fn eval_expr(expr: &Expr, env: &mut Environment) -> Result<Value, EvalError> {
    match expr {
        Expr::Number(n) => Ok(Value::Number(*n)),

        Expr::Ident(name) => env
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::IdentifierUndefined(name.clone())),

        Expr::Neg(operand) => negate(eval_expr(operand, env)?),

        Expr::Add(l, r) => broadcast(eval_expr(l, env)?, eval_expr(r, env)?, |a, b| a + b),
        Expr::Sub(l, r) => broadcast(eval_expr(l, env)?, eval_expr(r, env)?, |a, b| a - b),
        Expr::Mul(l, r) => broadcast(eval_expr(l, env)?, eval_expr(r, env)?, |a, b| a * b),
        Expr::Div(l, r) => broadcast(eval_expr(l, env)?, eval_expr(r, env)?, |a, b| a / b),
        Expr::Pow(l, r) => broadcast(eval_expr(l, env)?, eval_expr(r, env)?, f64::powf),

        Expr::List(items) => {
            let mut numbers = Vec::with_capacity(items.len());
            for item in items {
                match eval_expr(item, env)? {
                    Value::Number(n) => numbers.push(n),
                    _ => return Err(EvalError::ListMemberNotDecimal),
                }
            }
            Ok(Value::List(numbers))
        },

        Expr::Index(target, index) => {
            let list = match eval_expr(target, env)? {
                Value::List(l) => l,
                _ => return Err(EvalError::ObjectNotList),
            };
            let idx = match eval_expr(index, env)? {
                Value::Number(n) => n,
                _ => return Err(EvalError::IndexNotDecimal),
            };
            let i = element_index(idx, list.len())?;
            Ok(Value::Number(list[i]))
        },

        Expr::Lambda(params, body) => {
            Ok(Value::Lambda(Lambda::User { params: Rc::new(params.clone()), body: body.clone() }))
        },

        Expr::Call(callee, args) => eval_call(callee, args, env),
    }
}

fn eval_call(callee: &Expr, args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    let lambda = match eval_expr(callee, env)? {
        Value::Lambda(l) => l,
        _ => return Err(EvalError::ObjectNotCallable),
    };

    if args.len() != lambda.arity() {
        return Err(EvalError::WrongNumberOfParameters);
    }

    match lambda {
        Lambda::Builtin { id, .. } => builtins::dispatch(id, args, env),
        Lambda::User { params, body } => {
            trace!("calling user lambda with {} parameter(s)", params.len());
            let mut bindings = HashMap::with_capacity(params.len());
            for (name, arg) in params.iter().zip(args) {
                bindings.insert(name.clone(), eval_expr(arg, env)?);
            }
            let substituted = subst::substitute(&body, &bindings);
            eval_expr(&substituted, env)
        },
    }
}

fn negate(value: Value) -> Result<Value, EvalError> {
    match value {
        Value::Number(n) => Ok(Value::Number(-n)),
        Value::List(l) => Ok(Value::List(l.into_iter().map(|n| -n).collect())),
        _ => Err(EvalError::WrongOperandType),
    }
}

/// Implements the `(Number, Number)`, `(List, Number)`, `(Number, List)`,
/// and `(List, List)` broadcasting rules of `spec.md` §4.3. Operand order
/// is preserved (`lhs op rhs`) so that non-commutative operators (`-`, `/`,
/// `^`) behave correctly in the scalar/list cases.
fn broadcast(lhs: Value, rhs: Value, op: impl Fn(f64, f64) -> f64) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(op(a, b))),
        (Value::List(a), Value::Number(b)) => Ok(Value::List(a.into_iter().map(|x| op(x, b)).collect())),
        (Value::Number(a), Value::List(b)) => Ok(Value::List(b.into_iter().map(|x| op(a, x)).collect())),
        (Value::List(a), Value::List(b)) => {
            if a.len() != b.len() {
                return Err(EvalError::DifferentListLengths);
            }
            Ok(Value::List(a.into_iter().zip(b).map(|(x, y)| op(x, y)).collect()))
        },
        _ => Err(EvalError::WrongOperandType),
    }
}
