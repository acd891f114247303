/// A position in source text, tracking line and column for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Token classification for Stylet source.
///
/// Data-carrying variants embed their value directly (no separate `value`
/// field on Token). String and Template contents are kept raw: escape
/// sequences are not decoded at this layer, and a Template keeps its
/// `${...}` interpolation spans as-is for the code generator to re-scan.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals (carry data)
    Identifier(String),
    Number(f64),
    String(String),
    Template(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Punctuation
    Equals,
    Colon,
    Semicolon,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Dot,
    Hash,

    // `@` directives
    Log,
    Warn,
    Error,
    Js,

    // End of input
    Eof,
}

impl TokenKind {
    /// Short human-readable name, used in parser and codegen diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Template(_) => "template",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Equals => "'='",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Dot => "'.'",
            TokenKind::Hash => "'#'",
            TokenKind::Log => "@log",
            TokenKind::Warn => "@warn",
            TokenKind::Error => "@error",
            TokenKind::Js => "@js",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token produced by the Stylet lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
