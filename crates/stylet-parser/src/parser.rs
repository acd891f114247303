//! Recursive-descent parser for Stylet.
//!
//! Converts a flat token stream from `stylet-lexer` into the `Program`
//! AST. Statement dispatch on a leading identifier uses one token of
//! lookahead: `=` starts a binding, `:` a property declaration, and
//! `{` / `.` / `#` / another identifier a style rule.
//!
//! Whether a binding is an `Assign` (first binding) or an `Update`
//! (rebinding) is decided here, from a flat set of names seen so far in
//! the compilation unit. The code generator never re-checks this.

use std::collections::HashSet;

use crate::ast::{Block, Expr, Program, PropDecl, Stmt, StyleRule};
use crate::ParseError;
use stylet_lexer::{Scanner, Token, TokenKind};

/// Stylet parser.
///
/// Token streams produced by `Scanner::tokenize` always end with an
/// `Eof` token; the parser relies on that terminator.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    declared: HashSet<String>,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            declared: HashSet::new(),
        }
    }

    /// Parse source code into a program AST.
    pub fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = Scanner::tokenize(source).map_err(|e| ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        })?;

        let mut parser = Parser::new(tokens);
        parser.parse_program()
    }

    /// Parse a full program: one top-level block, then end of input.
    fn parse_program(&mut self) -> Result<Program, ParseError> {
        let block = self.parse_block()?;
        if self.peek().kind != TokenKind::Eof {
            return Err(self.error(format!("Unexpected {}", self.peek().kind.name())));
        }
        Ok(Program { block })
    }

    /// Parse a block: statements and style rules until `}` or end of
    /// input. Statements and style rules go into separate ordered lists.
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let mut block = Block::default();

        loop {
            match &self.peek().kind {
                TokenKind::Eof | TokenKind::RBrace => break,

                TokenKind::Semicolon => {
                    self.advance();
                    block.statements.push(Stmt::NoOp);
                }

                TokenKind::Log | TokenKind::Warn | TokenKind::Error => {
                    block.statements.push(self.parse_console()?);
                }

                TokenKind::Js => {
                    block.statements.push(self.parse_js_statement()?);
                }

                TokenKind::Dot | TokenKind::Hash => {
                    block.styles.push(self.parse_style_rule()?);
                }

                TokenKind::Identifier(_) => match &self.peek_next().kind {
                    TokenKind::Equals => block.statements.push(self.parse_binding()?),
                    TokenKind::Colon => block.statements.push(self.parse_prop()?),
                    TokenKind::LBrace
                    | TokenKind::Dot
                    | TokenKind::Hash
                    | TokenKind::Identifier(_) => {
                        block.styles.push(self.parse_style_rule()?);
                    }
                    other => {
                        return Err(self.error(format!(
                            "Unexpected {} after identifier",
                            other.name()
                        )))
                    }
                },

                other => return Err(self.error(format!("Unexpected {}", other.name()))),
            }
        }

        Ok(block)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Parse `name = expr;`. The first binding of a name is an `Assign`;
    /// later bindings of the same name are `Update`s.
    fn parse_binding(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Equals)?;
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon)?;

        if self.declared.insert(name.clone()) {
            Ok(Stmt::Assign { name, value })
        } else {
            Ok(Stmt::Update { name, value })
        }
    }

    /// Parse `name: expr;`
    fn parse_prop(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Colon)?;
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Prop(PropDecl { name, value }))
    }

    /// Parse `@log expr;` / `@warn expr;` / `@error expr;`
    fn parse_console(&mut self) -> Result<Stmt, ParseError> {
        let level = self.peek().kind.clone();
        self.advance();
        let arg = self.expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Console { level, arg })
    }

    /// Parse `` @js `code`; ``
    fn parse_js_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // consume @js
        let code = self.expect_template()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Js(code))
    }

    /// Parse `selector { block }`. The selector is the concatenation of
    /// `.` / `#` / identifier tokens up to the opening brace: `.card`,
    /// `#main`, `div`, `div.card`.
    fn parse_style_rule(&mut self) -> Result<StyleRule, ParseError> {
        let mut selector = String::new();

        loop {
            match &self.peek().kind {
                TokenKind::Dot => selector.push('.'),
                TokenKind::Hash => selector.push('#'),
                TokenKind::Identifier(name) => selector.push_str(name),
                TokenKind::LBrace => break,
                other => {
                    return Err(self.error(format!("Unexpected {} in selector", other.name())))
                }
            }
            self.advance();
        }

        self.expect(TokenKind::LBrace)?;
        let block = self.parse_block()?;
        self.expect(TokenKind::RBrace)?;

        Ok(StyleRule { selector, block })
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Parse a single expression from the token stream, leaving any
    /// remaining tokens unconsumed. This is the entry point the code
    /// generator uses for template interpolation spans.
    pub fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.term()?;

        while matches!(self.peek().kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.peek().kind.clone();
            self.advance();
            let right = self.term()?;
            node = Expr::Binary {
                left: Box::new(node),
                op,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.factor()?;

        while matches!(self.peek().kind, TokenKind::Star | TokenKind::Slash) {
            let op = self.peek().kind.clone();
            self.advance();
            let right = self.factor()?;
            node = Expr::Binary {
                left: Box::new(node),
                op,
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind.clone() {
            op @ (TokenKind::Plus | TokenKind::Minus) => {
                self.advance();
                let operand = self.factor()?;
                Ok(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                })
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::Num(n))
            }
            TokenKind::String(s) => {
                self.advance();
                Ok(Expr::Str(s))
            }
            TokenKind::Template(t) => {
                self.advance();
                Ok(Expr::Template(t))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::Var(name))
            }
            TokenKind::Js => {
                self.advance();
                let code = self.expect_template()?;
                Ok(Expr::Js(code))
            }
            TokenKind::LParen => {
                self.advance();
                let node = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(node)
            }
            other => Err(self.error(format!("Expected expression, found {}", other.name()))),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or_else(|| self.tokens.last().expect("token stream ends with Eof"))
    }

    fn peek_next(&self) -> &Token {
        self.tokens
            .get(self.pos + 1)
            .unwrap_or_else(|| self.tokens.last().expect("token stream ends with Eof"))
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume one token of exactly the given (dataless) kind.
    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek().kind == kind {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!(
                "Expected {}, found {}",
                kind.name(),
                self.peek().kind.name()
            )))
        }
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error(format!(
                "Expected identifier, found {}",
                self.peek().kind.name()
            )))
        }
    }

    fn expect_template(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Template(code) = &self.peek().kind {
            let code = code.clone();
            self.advance();
            Ok(code)
        } else {
            Err(self.error(format!(
                "Expected template literal, found {}",
                self.peek().kind.name()
            )))
        }
    }

    fn error(&self, message: String) -> ParseError {
        let span = self.peek().span;
        ParseError {
            message,
            line: span.line,
            column: span.column,
        }
    }
}
