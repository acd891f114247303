use crate::token::{Span, Token, TokenKind};
use crate::LexerError;

/// Stylet source scanner.
///
/// Tokenizes `.stylet` source into a flat token stream terminated by
/// `Eof`. Whitespace and newlines are insignificant; `//` comments are
/// skipped. String and template contents are carried raw — escape
/// sequences survive untouched so downstream layers see the original
/// text.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens()?;
        Ok(scanner.tokens)
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) -> Result<(), LexerError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        self.emit(TokenKind::Eof);
        Ok(())
    }

    /// Scan the next token.
    fn scan_token(&mut self) -> Result<(), LexerError> {
        let ch = self.peek();

        match ch {
            // Whitespace (skip)
            ' ' | '\t' | '\r' => {
                self.advance();
                Ok(())
            }
            '\n' => {
                self.advance();
                self.line += 1;
                self.column = 1;
                Ok(())
            }

            // Comments
            '/' if self.peek_next() == '/' => {
                self.skip_comment();
                Ok(())
            }

            // Strings and templates
            '"' | '\'' => self.scan_string(),
            '`' => self.scan_template(),

            // Numbers
            '0'..='9' => self.scan_number(),

            // Directives
            '@' => self.scan_directive(),

            // Operators
            '+' => {
                self.emit(TokenKind::Plus);
                self.advance();
                Ok(())
            }
            '-' => {
                self.emit(TokenKind::Minus);
                self.advance();
                Ok(())
            }
            '*' => {
                self.emit(TokenKind::Star);
                self.advance();
                Ok(())
            }
            '/' => {
                self.emit(TokenKind::Slash);
                self.advance();
                Ok(())
            }

            // Punctuation
            '=' => {
                self.emit(TokenKind::Equals);
                self.advance();
                Ok(())
            }
            ':' => {
                self.emit(TokenKind::Colon);
                self.advance();
                Ok(())
            }
            ';' => {
                self.emit(TokenKind::Semicolon);
                self.advance();
                Ok(())
            }
            '{' => {
                self.emit(TokenKind::LBrace);
                self.advance();
                Ok(())
            }
            '}' => {
                self.emit(TokenKind::RBrace);
                self.advance();
                Ok(())
            }
            '(' => {
                self.emit(TokenKind::LParen);
                self.advance();
                Ok(())
            }
            ')' => {
                self.emit(TokenKind::RParen);
                self.advance();
                Ok(())
            }
            '.' => {
                self.emit(TokenKind::Dot);
                self.advance();
                Ok(())
            }
            '#' => {
                self.emit(TokenKind::Hash);
                self.advance();
                Ok(())
            }

            // Identifiers
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),

            _ => Err(self.error(format!("Unexpected character: '{ch}'"))),
        }
    }

    // --- Scanners ---

    /// Scan a string literal. Contents are kept raw: a backslash and the
    /// character after it are both copied through, which also prevents an
    /// escaped quote from terminating the literal.
    fn scan_string(&mut self) -> Result<(), LexerError> {
        let quote = self.peek();
        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;
        self.advance(); // consume opening quote

        let mut value = String::new();

        while !self.is_at_end() && self.peek() != quote {
            if self.peek() == '\\' {
                value.push('\\');
                self.advance();
                if self.is_at_end() {
                    break;
                }
            }
            if self.peek() == '\n' {
                return Err(LexerError {
                    message: "Unterminated string".into(),
                    line: start_line,
                    column: start_col,
                });
            }
            value.push(self.peek());
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexerError {
                message: "Unterminated string".into(),
                line: start_line,
                column: start_col,
            });
        }

        self.advance(); // consume closing quote

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens.push(Token::new(TokenKind::String(value), span));
        Ok(())
    }

    /// Scan a backtick template literal. Contents are carried raw,
    /// `${...}` spans and backslash escapes included — the code generator
    /// performs its own scan over them. Newlines are allowed inside.
    fn scan_template(&mut self) -> Result<(), LexerError> {
        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;
        self.advance(); // consume opening backtick

        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '`' {
            if self.peek() == '\\' {
                value.push('\\');
                self.advance();
                if self.is_at_end() {
                    break;
                }
            }
            if self.peek() == '\n' {
                value.push('\n');
                self.advance();
                self.line += 1;
                self.column = 1;
                continue;
            }
            value.push(self.peek());
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexerError {
                message: "Unterminated template literal".into(),
                line: start_line,
                column: start_col,
            });
        }

        self.advance(); // consume closing backtick

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens
            .push(Token::new(TokenKind::Template(value), span));
        Ok(())
    }

    /// Scan a `@log` / `@warn` / `@error` / `@js` directive.
    fn scan_directive(&mut self) -> Result<(), LexerError> {
        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;
        self.advance(); // consume '@'

        let mut name = String::new();
        while !self.is_at_end() && self.peek().is_alphanumeric() {
            name.push(self.peek());
            self.advance();
        }

        let kind = match name.as_str() {
            "log" => TokenKind::Log,
            "warn" => TokenKind::Warn,
            "error" => TokenKind::Error,
            "js" => TokenKind::Js,
            _ => {
                return Err(LexerError {
                    message: format!("Unknown directive: '@{name}'"),
                    line: start_line,
                    column: start_col,
                })
            }
        };

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens.push(Token::new(kind, span));
        Ok(())
    }

    /// Scan an identifier. Supports hyphens when followed by alphanumeric
    /// (for property names like `font-size` and selectors like `btn-primary`).
    fn scan_identifier(&mut self) -> Result<(), LexerError> {
        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;

        let mut ident = String::new();
        ident.push(self.peek());
        self.advance();

        while !self.is_at_end()
            && (self.peek().is_alphanumeric()
                || self.peek() == '_'
                || (self.peek() == '-' && self.peek_next().is_alphanumeric()))
        {
            ident.push(self.peek());
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens
            .push(Token::new(TokenKind::Identifier(ident), span));
        Ok(())
    }

    /// Scan a number literal (integer or float). The digit text is
    /// accumulated from `chars` — `pos` is a char index, not a byte
    /// offset, so slicing the source string with it would break on any
    /// earlier multi-byte character.
    fn scan_number(&mut self) -> Result<(), LexerError> {
        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;

        let mut text = String::new();
        while !self.is_at_end() && (self.peek().is_ascii_digit() || self.peek() == '.') {
            // A dot not followed by a digit belongs to the surrounding
            // syntax (e.g. `4.class` never occurs, but `4 .a{}` would
            // lex the dot separately).
            if self.peek() == '.' && !self.peek_next().is_ascii_digit() {
                break;
            }
            text.push(self.peek());
            self.advance();
        }

        let value: f64 = text.parse().map_err(|_| LexerError {
            message: format!("Invalid number: '{text}'"),
            line: start_line,
            column: start_col,
        })?;

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens.push(Token::new(TokenKind::Number(value), span));
        Ok(())
    }

    /// Skip a line comment (`// ...`).
    fn skip_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    // --- Helpers ---

    fn emit(&mut self, kind: TokenKind) {
        let span = Span::new(self.pos, self.pos, self.line, self.column);
        self.tokens.push(Token::new(kind, span));
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn peek_next(&self) -> char {
        if self.pos + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.pos + 1]
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
            self.column += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn error(&self, message: String) -> LexerError {
        LexerError {
            message,
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return token kinds (ignoring spans).
    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    /// Helper: tokenize and panic on error.
    fn tokens(source: &str) -> Vec<Token> {
        Scanner::tokenize(source).unwrap()
    }

    // =========================================================================
    // Structure: empty input, whitespace
    // =========================================================================

    #[test]
    fn test_empty_source() {
        let toks = tokens("");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(kinds("  \t \n\n  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(
            kinds("x\r\ny"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Identifier("y".into()),
                TokenKind::Eof,
            ]
        );
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    #[test]
    fn test_simple_identifier() {
        assert_eq!(
            kinds("width"),
            vec![TokenKind::Identifier("width".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_hyphenated_identifier() {
        assert_eq!(
            kinds("font-size"),
            vec![TokenKind::Identifier("font-size".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_identifier_with_underscore() {
        assert_eq!(
            kinds("my_var"),
            vec![TokenKind::Identifier("my_var".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_trailing_hyphen_not_consumed() {
        // `x-` is identifier `x` followed by minus
        assert_eq!(
            kinds("x- 1"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Minus,
                TokenKind::Number(1.0),
                TokenKind::Eof,
            ]
        );
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    #[test]
    fn test_integer() {
        assert_eq!(kinds("42"), vec![TokenKind::Number(42.0), TokenKind::Eof]);
    }

    #[test]
    fn test_float() {
        assert_eq!(kinds("2.75"), vec![TokenKind::Number(2.75), TokenKind::Eof]);
    }

    #[test]
    fn test_zero() {
        assert_eq!(kinds("0"), vec![TokenKind::Number(0.0), TokenKind::Eof]);
    }

    #[test]
    fn test_invalid_number() {
        let result = Scanner::tokenize("1.2.3");
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("Invalid number"));
    }

    #[test]
    fn test_number_after_multibyte_string() {
        // Digit text must come from char positions, not byte offsets
        assert_eq!(
            kinds("s = \"日本語あいう\"; n = 42;"),
            vec![
                TokenKind::Identifier("s".into()),
                TokenKind::Equals,
                TokenKind::String("日本語あいう".into()),
                TokenKind::Semicolon,
                TokenKind::Identifier("n".into()),
                TokenKind::Equals,
                TokenKind::Number(42.0),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_after_accented_text() {
        assert_eq!(
            kinds("s = \"héllo\"; n = 42;"),
            vec![
                TokenKind::Identifier("s".into()),
                TokenKind::Equals,
                TokenKind::String("héllo".into()),
                TokenKind::Semicolon,
                TokenKind::Identifier("n".into()),
                TokenKind::Equals,
                TokenKind::Number(42.0),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    // =========================================================================
    // Strings
    // =========================================================================

    #[test]
    fn test_double_quoted_string() {
        assert_eq!(
            kinds("\"hello\""),
            vec![TokenKind::String("hello".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_single_quoted_string() {
        assert_eq!(
            kinds("'hello'"),
            vec![TokenKind::String("hello".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(
            kinds("\"\""),
            vec![TokenKind::String("".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_string_content_kept_raw() {
        // Escapes are not decoded at this layer
        assert_eq!(
            kinds("\"a\\nb\""),
            vec![TokenKind::String("a\\nb".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_string_escaped_quote() {
        assert_eq!(
            kinds("\"say \\\"hi\\\"\""),
            vec![TokenKind::String("say \\\"hi\\\"".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_string_unterminated() {
        let result = Scanner::tokenize("\"hello");
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("Unterminated string"));
    }

    #[test]
    fn test_string_unterminated_at_newline() {
        let result = Scanner::tokenize("\"hello\nworld\"");
        assert!(result.is_err());
    }

    // =========================================================================
    // Templates
    // =========================================================================

    #[test]
    fn test_template_literal() {
        assert_eq!(
            kinds("`hello`"),
            vec![TokenKind::Template("hello".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_template_keeps_interpolation_raw() {
        assert_eq!(
            kinds("`width is ${x + 1}px`"),
            vec![
                TokenKind::Template("width is ${x + 1}px".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_template_keeps_escapes_raw() {
        assert_eq!(
            kinds("`a \\} b`"),
            vec![TokenKind::Template("a \\} b".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_template_multiline() {
        let toks = tokens("`a\nb`\nx");
        assert_eq!(toks[0].kind, TokenKind::Template("a\nb".into()));
        // Line tracking continues past the template
        assert_eq!(toks[1].span.line, 3);
    }

    #[test]
    fn test_template_unterminated() {
        let result = Scanner::tokenize("`hello");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .message
            .contains("Unterminated template"));
    }

    // =========================================================================
    // Directives
    // =========================================================================

    #[test]
    fn test_log_directive() {
        assert_eq!(kinds("@log"), vec![TokenKind::Log, TokenKind::Eof]);
    }

    #[test]
    fn test_warn_directive() {
        assert_eq!(kinds("@warn"), vec![TokenKind::Warn, TokenKind::Eof]);
    }

    #[test]
    fn test_error_directive() {
        assert_eq!(kinds("@error"), vec![TokenKind::Error, TokenKind::Eof]);
    }

    #[test]
    fn test_js_directive() {
        assert_eq!(kinds("@js"), vec![TokenKind::Js, TokenKind::Eof]);
    }

    #[test]
    fn test_unknown_directive() {
        let result = Scanner::tokenize("@media");
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("Unknown directive"));
    }

    // =========================================================================
    // Operators and punctuation
    // =========================================================================

    #[test]
    fn test_arithmetic_operators() {
        assert_eq!(
            kinds("1 + 2 - 3 * 4 / 5"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Plus,
                TokenKind::Number(2.0),
                TokenKind::Minus,
                TokenKind::Number(3.0),
                TokenKind::Star,
                TokenKind::Number(4.0),
                TokenKind::Slash,
                TokenKind::Number(5.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("= : ; { } ( ) . #"),
            vec![
                TokenKind::Equals,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Dot,
                TokenKind::Hash,
                TokenKind::Eof,
            ]
        );
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_comment_skipped() {
        assert_eq!(
            kinds("x // the variable\ny"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Identifier("y".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comment_only_line() {
        assert_eq!(kinds("// nothing here"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_slash_still_lexes_as_division() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Slash,
                TokenKind::Identifier("b".into()),
                TokenKind::Eof,
            ]
        );
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    #[test]
    fn test_unexpected_character() {
        let result = Scanner::tokenize("~");
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("Unexpected character"));
    }

    // =========================================================================
    // Span tracking
    // =========================================================================

    #[test]
    fn test_span_line_column() {
        let toks = tokens("x = 5;\n.card {}");
        assert_eq!(toks[0].span.line, 1);
        assert_eq!(toks[0].span.column, 1);
        let dot = toks.iter().find(|t| t.kind == TokenKind::Dot).unwrap();
        assert_eq!(dot.span.line, 2);
        assert_eq!(dot.span.column, 1);
    }

    // =========================================================================
    // Full snippets
    // =========================================================================

    #[test]
    fn test_binding_statement() {
        assert_eq!(
            kinds("x = 5;"),
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Equals,
                TokenKind::Number(5.0),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_style_rule() {
        assert_eq!(
            kinds(".card { color: \"red\"; }"),
            vec![
                TokenKind::Dot,
                TokenKind::Identifier("card".into()),
                TokenKind::LBrace,
                TokenKind::Identifier("color".into()),
                TokenKind::Colon,
                TokenKind::String("red".into()),
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_console_with_template() {
        assert_eq!(
            kinds("@log `x is ${x}`;"),
            vec![
                TokenKind::Log,
                TokenKind::Template("x is ${x}".into()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_js_escape() {
        assert_eq!(
            kinds("@js `document.title = \"hi\"`;"),
            vec![
                TokenKind::Js,
                TokenKind::Template("document.title = \"hi\"".into()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }
}
