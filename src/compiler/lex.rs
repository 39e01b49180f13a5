//! Turns a source string into an ordered [`Tokens`] stream.
//!
//! Mirrors the teacher's `Lexer`: a byte index into the source, a
//! `take_while`-style scan for multi-character tokens, and no token for
//! whitespace (there are no comments or line metadata to track, per
//! `spec.md` §4.1).

use log::trace;

use crate::{construct::token::{Token, Tokens}, error::EvalError};

const PUNCTUATORS: &[(char, fn() -> Token)] = &[
    ('+', || Token::Plus),
    ('-', || Token::Minus),
    ('*', || Token::Star),
    ('/', || Token::Slash),
    ('^', || Token::Caret),
    ('(', || Token::LParen),
    (')', || Token::RParen),
    ('[', || Token::LBracket),
    (']', || Token::RBracket),
    ('{', || Token::LBrace),
    ('}', || Token::RBrace),
    ('@', || Token::At),
    (',', || Token::Comma),
    ('=', || Token::Equals),
];

/// Scans a source string into a token stream, failing with
/// [`EvalError::ParseFailed`] on an unrecognized character or
/// [`EvalError::DecimalOutOfRange`] on a numeric literal that overflows
/// `f64`.
pub struct Lexer {
    chars: Vec<char>,
    index: usize,
}

impl Lexer {
    pub fn lex(source: &str) -> Result<Tokens, EvalError> {
        let mut lexer = Lexer {
            chars: source.chars().collect(),
            index: 0,
        };

        let mut tokens = Tokens::new();
        lexer.skip_whitespace();
        while lexer.index < lexer.chars.len() {
            let token = lexer.next_token()?;
            trace!("lexed {}", token);
            tokens.push(token);
            lexer.skip_whitespace();
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.get(self.index) {
            if c.is_whitespace() {
                self.index += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> { self.chars.get(self.index).copied() }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.index;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.index += 1;
        }
        self.chars[start..self.index].iter().collect()
    }

    fn next_token(&mut self) -> Result<Token, EvalError> {
        let c = self.peek().expect("next_token called at end of input");

        if let Some((_, make)) = PUNCTUATORS.iter().find(|(p, _)| *p == c) {
            self.index += 1;
            return Ok(make());
        }

        if c.is_ascii_digit() {
            return self.number();
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let ident = self.take_while(|n| n.is_ascii_alphanumeric() || n == '_');
            return Ok(Token::Ident(ident));
        }

        Err(EvalError::ParseFailed)
    }

    /// Standard decimal literal with an optional fractional part and an
    /// optional signed `e`/`E` exponent. A leading sign is never consumed
    /// here; unary minus is the parser's job (spec.md §4.1).
    fn number(&mut self) -> Result<Token, EvalError> {
        let start = self.index;

        self.take_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') {
            let save = self.index;
            self.index += 1;
            let frac = self.take_while(|c| c.is_ascii_digit());
            if frac.is_empty() {
                // A bare trailing dot with no fractional digits is not part
                // of the literal.
                self.index = save;
            }
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            let save = self.index;
            self.index += 1;
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.index += 1;
            }
            let exponent_digits = self.take_while(|c| c.is_ascii_digit());
            if exponent_digits.is_empty() {
                // No digits followed the `e`/`E`; it isn't an exponent.
                self.index = save;
            }
        }

        let text: String = self.chars[start..self.index].iter().collect();
        let value: f64 = text.parse().map_err(|_| EvalError::DecimalOutOfRange)?;
        if !value.is_finite() {
            return Err(EvalError::DecimalOutOfRange);
        }
        Ok(Token::Number(value))
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_source() {
        assert_eq!(Lexer::lex("").unwrap(), vec![]);
    }

    #[test]
    fn whitespace_collapses() {
        let tokens = Lexer::lex("  1   +\t2\n").unwrap();
        assert_eq!(tokens, vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
    }

    #[test]
    fn punctuators() {
        let tokens = Lexer::lex("+-*/^()[]{}@,=").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Caret,
                Token::LParen,
                Token::RParen,
                Token::LBracket,
                Token::RBracket,
                Token::LBrace,
                Token::RBrace,
                Token::At,
                Token::Comma,
                Token::Equals,
            ]
        );
    }

    #[test]
    fn identifier() {
        let tokens = Lexer::lex("foo_Bar2").unwrap();
        assert_eq!(tokens, vec![Token::Ident("foo_Bar2".to_string())]);
    }

    #[test]
    fn decimal_with_exponent() {
        let tokens = Lexer::lex("1.5e-3").unwrap();
        assert_eq!(tokens, vec![Token::Number(1.5e-3)]);
    }

    #[test]
    fn integer() {
        let tokens = Lexer::lex("42").unwrap();
        assert_eq!(tokens, vec![Token::Number(42.0)]);
    }

    #[test]
    fn unrecognized_char_fails() {
        assert_eq!(Lexer::lex("$").unwrap_err(), EvalError::ParseFailed);
    }

    #[test]
    fn overflow_exponent_fails() {
        assert_eq!(Lexer::lex("1e999").unwrap_err(), EvalError::DecimalOutOfRange);
    }

    #[test]
    fn trailing_dot_is_not_consumed() {
        // `3.` has no fractional digits, so the `.` is left for the parser
        // (which will fail on it, since `.` isn't a recognized punctuator
        // either - this demonstrates the lexer doesn't greedily eat it).
        let err = Lexer::lex("3.").unwrap_err();
        assert_eq!(err, EvalError::ParseFailed);
    }

    proptest! {
        #[test]
        fn doesnt_crash(s in "\\PC*") {
            let _ = Lexer::lex(&s);
        }

        #[test]
        fn every_punctuator_is_one_token(c in prop::sample::select(vec!['+', '-', '*', '/', '^', '(', ')', '[', ']', '{', '}', '@', ',', '='])) {
            let tokens = Lexer::lex(&c.to_string()).unwrap();
            prop_assert_eq!(tokens.len(), 1);
        }

        #[test]
        fn small_nonnegative_integers_roundtrip(n in 0u32..1_000_000) {
            let tokens = Lexer::lex(&n.to_string()).unwrap();
            prop_assert_eq!(tokens, vec![Token::Number(n as f64)]);
        }
    }
}
