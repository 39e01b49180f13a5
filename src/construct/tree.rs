//! The AST produced by [`crate::compiler::parse`].
//!
//! `spec.md` §3 describes the AST as a single generic tagged node whose
//! children are fixed by its tag. This crate realizes that shape as two
//! ordinary Rust sum types instead of one generic node (see `SPEC_FULL.md`
//! §3): [`Program`] for the two top-level forms (`ASSIGN` / `ASSIGN_LAMBDA`,
//! or a bare expression), and [`Expr`] for every other operator tag. The
//! `EXPR_LIST`/`PARAM_LIST` node tags from the spec are the `Vec<Expr>` /
//! `Vec<String>` fields already carried by `Call`, `List`, and `Lambda` —
//! nothing about the described shape is lost, only the generic-container
//! encoding.

use std::rc::Rc;

/// A fully parsed program: either of the two top-level forms in
/// `spec.md`'s `assign` production, or a bare expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Program {
    /// `IDENT '=' expr`
    Assign(String, Expr),
    /// `IDENT '(' param_list ')' '=' expr`
    AssignLambda(String, Vec<String>, Rc<Expr>),
    /// A bare expression with no assignment.
    Expr(Expr),
}

/// A sub-expression. Appears as a lambda body, list element, or call
/// argument — contexts that, per the grammar, can never contain an
/// `Assign`/`AssignLambda` node, which is why substitution
/// (`eval::subst`) only ever walks `Expr` trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Ident(String),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    List(Vec<Expr>),
    Call(Box<Expr>, Vec<Expr>),
    Index(Box<Expr>, Box<Expr>),
    Lambda(Vec<String>, Rc<Expr>),
}
