//! Stylet Lexer
//!
//! Tokenizes `.stylet` source files into a stream of tokens.
//! Handles identifiers (with CSS-style hyphens), numeric and string
//! literals, backtick template literals (kept raw, `${...}` spans
//! included), the `@log` / `@warn` / `@error` / `@js` directives,
//! and the punctuation of the brace-based rule syntax.
//!
//! The scanner is also used by the code generator to re-tokenize
//! interpolation expressions found inside template literals, so it
//! must be cheap to construct on arbitrary substrings.
//!
//! # Example
//!
//! ```
//! use stylet_lexer::Scanner;
//!
//! let tokens = Scanner::tokenize("").unwrap();
//! assert_eq!(tokens.len(), 1); // Just EOF
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
