//! Abstract Syntax Tree for Stylet.
//!
//! A compilation unit is a `Program` wrapping one `Block`. A block keeps
//! its ordinary statements and its style rules in two separate ordered
//! lists; the code generator emits all statements first, then all style
//! rules, preserving source order within each list.
//!
//! Operator and console-level tags are stored as lexer `TokenKind`s
//! rather than dedicated enums: the code generator matches them against
//! its fixed lowering table and treats anything outside the table as a
//! fatal error, so the out-of-set case must remain constructible.

use stylet_lexer::TokenKind;

/// A complete Stylet compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub block: Block,
}

/// An ordered sequence of statements and style rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub styles: Vec<StyleRule>,
}

/// A statement-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// First binding of a name: `x = 5;` when `x` is new.
    Assign { name: String, value: Expr },

    /// Rebinding of an existing name: `x = 6;` when `x` was seen before.
    Update { name: String, value: Expr },

    /// `@log expr;` / `@warn expr;` / `@error expr;`
    /// `level` is one of `TokenKind::{Log, Warn, Error}`.
    Console { level: TokenKind, arg: Expr },

    /// A property declaration inside a style rule: `color: "red";`
    Prop(PropDecl),

    /// Raw JavaScript escape: `` @js `code`; `` — passed through verbatim.
    Js(String),

    /// Empty statement (a stray `;`).
    NoOp,
}

/// A named property inside a style rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PropDecl {
    pub name: String,
    pub value: Expr,
}

/// A style rule: `selector { ... }`. Nesting mirrors lexical nesting in
/// source text, so rules form a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub block: Block,
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal: `42`, `2.75`
    Num(f64),

    /// Quoted string literal, content kept raw.
    Str(String),

    /// Backtick template literal, raw text including `${...}` spans.
    /// The code generator re-scans and re-parses the spans itself.
    Template(String),

    /// A name reference.
    Var(String),

    /// Raw JavaScript escape in expression position.
    Js(String),

    /// Prefix sign: `-x`, `+x`. `op` is `TokenKind::Plus` or `Minus`.
    Unary { op: TokenKind, operand: Box<Expr> },

    /// Binary arithmetic: `a + b`. `op` is one of
    /// `TokenKind::{Plus, Minus, Star, Slash}`.
    Binary {
        left: Box<Expr>,
        op: TokenKind,
        right: Box<Expr>,
    },
}
