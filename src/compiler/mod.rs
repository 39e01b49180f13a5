//! Turns a source string into a [`crate::construct::tree::Program`]:
//! lexing, then parsing.

pub mod lex;
pub mod parse;

use crate::{construct::tree::Program, error::EvalError};

/// Tokenizes then parses a single source string into a [`Program`].
pub fn compile(source: &str) -> Result<Program, EvalError> {
    let tokens = lex::Lexer::lex(source)?;
    parse::parse(&tokens)
}
