//! The three host-facing entry points from `spec.md` §6: `init`, `exec`,
//! and `environment`. Everything else (reading input lines, interpreting
//! `!`-commands, formatting results) is the host's job.

use log::debug;

use crate::{builtins, compiler, env::Environment, error::EvalError, eval, value::Value};

/// Owns the single global [`Environment`] and exposes the core's entry
/// points. Not `Sync`: a `Context` is meant to be driven by one host loop,
/// one `exec` call at a time (`spec.md` §5).
#[derive(Debug, Default)]
pub struct Context {
    env: Environment,
}

impl Context {
    /// Builds a context with a freshly initialized environment. An alias
    /// for [`Context::init`] as a constructor.
    pub fn new() -> Self {
        let mut ctx = Context { env: Environment::new() };
        ctx.init();
        ctx
    }

    /// Clears the environment and reinstalls every constant and built-in.
    /// Idempotent.
    pub fn init(&mut self) { builtins::install(&mut self.env); }

    /// Starts from a caller-provided environment instead of a freshly
    /// seeded one (e.g. for tests that want a subset of built-ins).
    pub fn with_environment(env: Environment) -> Self { Context { env } }

    /// Tokenizes, parses, and evaluates a single expression or assignment.
    /// On success, if the result is non-`Void`, rebinds `ans` to it. Leaves
    /// the environment exactly as any already-committed side effect left it
    /// on failure (`spec.md` §5) — in practice this only matters for the
    /// assignment form, since the grammar admits one top-level form per
    /// call.
    pub fn exec(&mut self, input: &str) -> Result<Value, EvalError> {
        debug!("exec: {:?}", input);
        let program = compiler::compile(input)?;
        let result = eval::eval_program(&program, &mut self.env);

        match &result {
            Ok(value) if *value != Value::Void => {
                self.env.set("ans", value.clone());
            },
            Err(err) => debug!("exec failed: {}", err),
            _ => {},
        }

        result
    }

    /// Enumerates current bindings in insertion order, for host commands
    /// like `!list`.
    pub fn environment(&self) -> impl Iterator<Item = (&str, &Value)> { self.env.iter() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ans_rebound_after_non_void_result() {
        let mut ctx = Context::new();
        ctx.exec("1 + 1").unwrap();
        assert_eq!(ctx.exec("ans").unwrap(), Value::Number(2.0));
    }

    #[test]
    fn ans_not_rebound_by_assignment() {
        let mut ctx = Context::new();
        ctx.exec("7 + 7").unwrap();
        ctx.exec("x = 5").unwrap();
        assert_eq!(ctx.exec("ans").unwrap(), Value::Number(14.0));
    }

    #[test]
    fn init_reinstalls_builtins() {
        let mut ctx = Context::new();
        ctx.exec("x = 5").unwrap();
        ctx.init();
        assert_eq!(ctx.exec("x").unwrap_err(), EvalError::IdentifierUndefined("x".to_string()));
        // constants survive reinitialization
        assert!(ctx.exec("pi").is_ok());
    }

    #[test]
    fn environment_enumerates_bindings() {
        let mut ctx = Context::new();
        ctx.exec("x = 5").unwrap();
        assert!(ctx.environment().any(|(name, _)| name == "x"));
    }
}
