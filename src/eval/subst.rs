//! Capture-avoiding substitution (`spec.md` §4.6): inlines a user lambda's
//! argument values into a fresh copy of its body, masking identifiers
//! shadowed by any lambda nested inside that body.

use std::{collections::HashMap, collections::HashSet, rc::Rc};

use crate::{construct::tree::Expr, value::{Lambda, Value}};

/// Substitutes every free occurrence of a name in `params` within `body`
/// with its bound [`Value`], producing a fresh `Expr` tree. The original
/// `body` is never mutated.
pub(crate) fn substitute(body: &Expr, params: &HashMap<String, Value>) -> Expr {
    walk(body, params, &HashSet::new())
}

fn walk(expr: &Expr, params: &HashMap<String, Value>, masked: &HashSet<String>) -> Expr {
    match expr {
        Expr::Number(n) => Expr::Number(*n),

        Expr::Ident(name) => {
            if !masked.contains(name) {
                if let Some(value) = params.get(name) {
                    return value_to_expr(value);
                }
            }
            Expr::Ident(name.clone())
        },

        Expr::Neg(e) => Expr::Neg(Box::new(walk(e, params, masked))),
        Expr::Add(l, r) => Expr::Add(Box::new(walk(l, params, masked)), Box::new(walk(r, params, masked))),
        Expr::Sub(l, r) => Expr::Sub(Box::new(walk(l, params, masked)), Box::new(walk(r, params, masked))),
        Expr::Mul(l, r) => Expr::Mul(Box::new(walk(l, params, masked)), Box::new(walk(r, params, masked))),
        Expr::Div(l, r) => Expr::Div(Box::new(walk(l, params, masked)), Box::new(walk(r, params, masked))),
        Expr::Pow(l, r) => Expr::Pow(Box::new(walk(l, params, masked)), Box::new(walk(r, params, masked))),

        Expr::List(items) => Expr::List(items.iter().map(|e| walk(e, params, masked)).collect()),

        Expr::Call(callee, args) => Expr::Call(
            Box::new(walk(callee, params, masked)),
            args.iter().map(|e| walk(e, params, masked)).collect(),
        ),

        Expr::Index(target, index) => {
            Expr::Index(Box::new(walk(target, params, masked)), Box::new(walk(index, params, masked)))
        },

        Expr::Lambda(inner_params, inner_body) => {
            // Parameters of a nested lambda mask substitution of the same
            // name within its own body, per spec.md §4.6 step 1.
            let mut extended = masked.clone();
            extended.extend(inner_params.iter().cloned());
            Expr::Lambda(inner_params.clone(), Rc::new(walk(inner_body, params, &extended)))
        },
    }
}

fn value_to_expr(value: &Value) -> Expr {
    match value {
        Value::Number(n) => Expr::Number(*n),
        Value::List(items) => Expr::List(items.iter().map(|n| Expr::Number(*n)).collect()),
        Value::Lambda(Lambda::Builtin { name, .. }) => Expr::Ident(name.to_string()),
        Value::Lambda(Lambda::User { params, body }) => {
            Expr::Lambda(params.as_ref().clone(), body.clone())
        },
        // ASSIGN's evaluator never stores Void, so a parameter can never be
        // bound to one; this arm only exists to keep the match total.
        Value::Void => Expr::List(vec![]),
    }
}
