//! Stylet Parser
//!
//! Parses a token stream into an Abstract Syntax Tree.
//! Exposes two entry points: whole-program parsing (`Parser::parse`)
//! and single-expression parsing (`Parser::expression`), the latter
//! used by the code generator when it re-parses interpolation spans
//! found inside template literals.

pub mod ast;
pub mod parser;

pub use ast::{Block, Expr, Program, Stmt};
pub use parser::Parser;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
