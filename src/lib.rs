//! # calcore
//!
//! The core of a small dynamically-typed expression language: a
//! tokenizer, a recursive-descent parser, and a tree-walking evaluator
//! with first-class lambdas, list values, and elementwise broadcasting.
//!
//! This crate is deliberately *not* a REPL. It exposes one entry point, a
//! [`Context`], that a host wires up to a read-line loop:
//!
//! ```
//! use calcore::Context;
//!
//! let mut ctx = Context::new();
//! assert_eq!(ctx.exec("1 + 2*3^2").unwrap(), calcore::Value::Number(19.0));
//! assert_eq!(ctx.exec("ans").unwrap(), calcore::Value::Number(19.0));
//! ```
//!
//! ## Overview of the pipeline
//!
//! A source string flows through:
//! 1. [`compiler::lex`] — scans the string into a [`construct::token::Token`]
//!    stream.
//! 2. [`compiler::parse`] — a hand-written recursive-descent parser turns
//!    that stream into one [`construct::tree::Program`] (an assignment or
//!    a bare expression).
//! 3. [`eval`] — walks the resulting [`construct::tree::Expr`] tree against
//!    the shared global [`env::Environment`], producing a [`value::Value`].
//!
//! Lambdas are not closures: a stored lambda carries only its parameter
//! names and a shared reference to its body. Calling it substitutes the
//! argument values into a fresh copy of the body (`eval::subst`) and
//! evaluates that copy against whatever the environment holds *at call
//! time* — free identifiers resolve late, by design (`spec.md` §4.5).

pub mod builtins;
pub mod compiler;
pub mod construct;
mod context;
pub mod env;
pub mod error;
mod eval;
mod numeric;
pub mod value;

pub use context::Context;
pub use error::EvalError;
pub use value::{Lambda, Value};
