//! Stylet Code Generator
//!
//! Walks the Stylet AST and produces JavaScript source text. Arithmetic
//! is not emitted as native operators: every operator lowers to a call
//! to a runtime helper (`add`, `minus`, `mul`, `div`, `positive`,
//! `negative`) so the emitted code can use Stylet's own arithmetic
//! semantics (e.g. unit-aware math) without this layer knowing them.
//! Style rules lower to immediately-invoked closures building `Style`
//! and `Property` objects; template literals are re-scanned here and
//! their `${...}` spans recursively compiled through a fresh
//! lexer/parser pass.
//!
//! ```text
//! Program AST → transform() → JavaScript text
//! ```
//!
//! Generation is value-threaded: every function returns its fragment,
//! there is no shared accumulator, so the recursive template
//! sub-compilation is reentrant by construction. All errors are fatal —
//! no partial output is ever returned.

pub mod style;
pub mod template;

use stylet_lexer::TokenKind;
use stylet_parser::ast::{Block, Expr, Program, Stmt};

/// Code generation error. Every variant is fatal: generation halts at
/// the point of detection and the caller gets no partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodegenError {
    /// An operator token outside the fixed arithmetic set reached
    /// expression lowering.
    #[error("Codegen error: unsupported operator {}", .0.name())]
    UnsupportedOperator(TokenKind),

    /// A console level tag outside `log` / `warn` / `error`.
    #[error("Codegen error: unsupported console level {}", .0.name())]
    UnsupportedConsoleLevel(TokenKind),

    /// A `${` span in a template literal with no closing `}`.
    #[error("Unterminated interpolation in template literal")]
    UnterminatedInterpolation,

    /// The recursive lex of an interpolation span failed.
    #[error(transparent)]
    Lex(#[from] stylet_lexer::LexerError),

    /// The recursive parse of an interpolation span failed.
    #[error(transparent)]
    Parse(#[from] stylet_parser::ParseError),
}

/// Compile a program AST into JavaScript source text.
///
/// Every emitted statement is joined with `";\n"` and the output is
/// terminated with a trailing `;`. An empty program yields `";"`.
pub fn transform(program: &Program) -> Result<String, CodegenError> {
    let statements = gen_block(&program.block)?;
    Ok(format!("{};", statements.join(";\n")))
}

/// Generate a block: all statements first, then all style rules, in
/// source order within each list. `NoOp` contributes nothing.
pub(crate) fn gen_block(block: &Block) -> Result<Vec<String>, CodegenError> {
    let mut output = Vec::new();

    for stmt in &block.statements {
        if let Some(code) = gen_stmt(stmt)? {
            output.push(code);
        }
    }
    for rule in &block.styles {
        output.push(style::gen_style_rule(rule)?);
    }

    Ok(output)
}

/// Generate one statement. `NoOp` yields `None`.
pub(crate) fn gen_stmt(stmt: &Stmt) -> Result<Option<String>, CodegenError> {
    match stmt {
        Stmt::Assign { name, value } => Ok(Some(format!("let {name} = {}", gen_expr(value)?))),
        Stmt::Update { name, value } => Ok(Some(format!("{name} = {}", gen_expr(value)?))),
        Stmt::Console { level, arg } => {
            let method = match level {
                TokenKind::Log => "log",
                TokenKind::Warn => "warn",
                TokenKind::Error => "error",
                other => return Err(CodegenError::UnsupportedConsoleLevel(other.clone())),
            };
            Ok(Some(format!("console.{method}({})", gen_expr(arg)?)))
        }
        Stmt::Prop(prop) => Ok(Some(style::gen_prop(prop)?)),
        Stmt::Js(code) => Ok(Some(format!("eval(`{code}`)"))),
        Stmt::NoOp => Ok(None),
    }
}

/// Lower an expression to a JavaScript expression fragment.
pub fn gen_expr(expr: &Expr) -> Result<String, CodegenError> {
    match expr {
        Expr::Num(n) => Ok(format_number(*n)),
        Expr::Str(s) => Ok(format!("\"{s}\"")),
        Expr::Template(raw) => template::gen_template(raw),
        Expr::Var(name) => Ok(name.clone()),
        Expr::Js(code) => Ok(format!("eval(`{code}`)")),
        Expr::Unary { op, operand } => {
            let value = gen_expr(operand)?;
            let helper = match op {
                TokenKind::Plus => "positive",
                TokenKind::Minus => "negative",
                other => return Err(CodegenError::UnsupportedOperator(other.clone())),
            };
            Ok(format!("{helper}({value})"))
        }
        Expr::Binary { left, op, right } => {
            // Left operand is lowered strictly before the right
            let left_value = gen_expr(left)?;
            let right_value = gen_expr(right)?;
            let helper = match op {
                TokenKind::Plus => "add",
                TokenKind::Minus => "minus",
                TokenKind::Star => "mul",
                TokenKind::Slash => "div",
                other => return Err(CodegenError::UnsupportedOperator(other.clone())),
            };
            Ok(format!("{helper}({left_value}, {right_value})"))
        }
    }
}

/// Format a number, removing `.0` for integers. Integral values outside
/// i64 range would saturate under `as i64`, so they take the plain
/// float formatting path instead.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 2f64.powi(63) {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
