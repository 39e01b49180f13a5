//! Seeds the environment with constants and named built-in lambdas
//! (`spec.md` §4.7), and dispatches calls to them.
//!
//! Each built-in is identified by a [`BuiltinId`] rather than a boxed
//! trait object: with a closed, spec-fixed set of built-ins there is no
//! extension point to abstract over, so a plain enum dispatch (one match
//! arm per built-in) is the simpler idiom — see `spec.md` §9's "capability"
//! note, realized here as a match rather than `dyn Trait` since every
//! implementation is known at compile time.

mod compare;
mod list;
mod logic;
mod math;

use std::rc::Rc;

use crate::{construct::tree::Expr, env::Environment, error::EvalError, value::{Lambda, Value}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinId {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Ln,
    Abs,
    Floor,
    Ceil,
    Round,
    Sqrt,
    Erf,
    Gamma,
    Not,
    Eq,
    Neq,
    Gt,
    Lt,
    Geq,
    Leq,
    And,
    Or,
    IfElse,
    Len,
    Assign,
    Append,
    Slice,
    Reverse,
}

struct Entry {
    name: &'static str,
    params: &'static [&'static str],
    id: BuiltinId,
}

const REGISTRY: &[Entry] = &[
    Entry { name: "sin", params: &["x"], id: BuiltinId::Sin },
    Entry { name: "cos", params: &["x"], id: BuiltinId::Cos },
    Entry { name: "tan", params: &["x"], id: BuiltinId::Tan },
    Entry { name: "asin", params: &["x"], id: BuiltinId::Asin },
    Entry { name: "acos", params: &["x"], id: BuiltinId::Acos },
    Entry { name: "atan", params: &["x"], id: BuiltinId::Atan },
    Entry { name: "exp", params: &["x"], id: BuiltinId::Exp },
    Entry { name: "ln", params: &["x"], id: BuiltinId::Ln },
    Entry { name: "abs", params: &["x"], id: BuiltinId::Abs },
    Entry { name: "floor", params: &["x"], id: BuiltinId::Floor },
    Entry { name: "ceil", params: &["x"], id: BuiltinId::Ceil },
    Entry { name: "round", params: &["x"], id: BuiltinId::Round },
    Entry { name: "sqrt", params: &["x"], id: BuiltinId::Sqrt },
    Entry { name: "erf", params: &["x"], id: BuiltinId::Erf },
    Entry { name: "gamma", params: &["x"], id: BuiltinId::Gamma },
    Entry { name: "not", params: &["x"], id: BuiltinId::Not },
    Entry { name: "eq", params: &["x", "y"], id: BuiltinId::Eq },
    Entry { name: "neq", params: &["x", "y"], id: BuiltinId::Neq },
    Entry { name: "gt", params: &["x", "y"], id: BuiltinId::Gt },
    Entry { name: "lt", params: &["x", "y"], id: BuiltinId::Lt },
    Entry { name: "geq", params: &["x", "y"], id: BuiltinId::Geq },
    Entry { name: "leq", params: &["x", "y"], id: BuiltinId::Leq },
    Entry { name: "and", params: &["x", "y"], id: BuiltinId::And },
    Entry { name: "or", params: &["x", "y"], id: BuiltinId::Or },
    Entry { name: "if_else", params: &["cond", "t", "f"], id: BuiltinId::IfElse },
    Entry { name: "len", params: &["l"], id: BuiltinId::Len },
    Entry { name: "assign", params: &["l", "i", "v"], id: BuiltinId::Assign },
    Entry { name: "append", params: &["l", "x"], id: BuiltinId::Append },
    Entry { name: "slice", params: &["l", "s", "e"], id: BuiltinId::Slice },
    Entry { name: "reverse", params: &["l"], id: BuiltinId::Reverse },
];

/// Clears `env` and reinstalls every constant and built-in lambda.
pub fn install(env: &mut Environment) {
    env.clear();
    env.set("ans", Value::Number(0.0));
    env.set("e", Value::Number(std::f64::consts::E));
    env.set("pi", Value::Number(std::f64::consts::PI));

    for entry in REGISTRY {
        let params = Rc::new(entry.params.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        let lambda = Lambda::Builtin { name: entry.name, params, id: entry.id };
        env.set(entry.name, Value::Lambda(lambda));
    }
}

/// Calls a built-in by id with its unevaluated argument expressions. The
/// caller (`eval::eval_call`) has already checked arity against the
/// lambda's declared parameter count.
pub(crate) fn dispatch(id: BuiltinId, args: &[Expr], env: &mut Environment) -> Result<Value, EvalError> {
    use BuiltinId::*;
    match id {
        Sin => math::unary(args, env, f64::sin),
        Cos => math::unary(args, env, f64::cos),
        Tan => math::unary(args, env, f64::tan),
        Asin => math::unary(args, env, f64::asin),
        Acos => math::unary(args, env, f64::acos),
        Atan => math::unary(args, env, f64::atan),
        Exp => math::unary(args, env, f64::exp),
        Ln => math::unary(args, env, f64::ln),
        Abs => math::unary(args, env, f64::abs),
        Floor => math::unary(args, env, f64::floor),
        Ceil => math::unary(args, env, f64::ceil),
        Round => math::unary(args, env, |x| crate::numeric::round_half_away_from_zero(x)),
        Sqrt => math::unary(args, env, f64::sqrt),
        Erf => math::unary(args, env, math::erf),
        Gamma => math::unary(args, env, math::gamma),
        Not => math::unary(args, env, |x| if x == 0.0 { 1.0 } else { 0.0 }),
        Eq => compare::binary(args, env, |a, b| a == b),
        Neq => compare::binary(args, env, |a, b| a != b),
        Gt => compare::binary(args, env, |a, b| a > b),
        Lt => compare::binary(args, env, |a, b| a < b),
        Geq => compare::binary(args, env, |a, b| a >= b),
        Leq => compare::binary(args, env, |a, b| a <= b),
        And => logic::and(args, env),
        Or => logic::or(args, env),
        IfElse => logic::if_else(args, env),
        Len => list::len(args, env),
        Assign => list::assign(args, env),
        Append => list::append(args, env),
        Slice => list::slice(args, env),
        Reverse => list::reverse(args, env),
    }
}
