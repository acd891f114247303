//! Template literal generation.
//!
//! The outer lexer carries template contents raw; this module performs
//! the char-by-char scan over them. Ordinary characters pass through
//! verbatim. Each `${...}` span is compiled as a full expression: a
//! fresh `Scanner` tokenizes it, a fresh `Parser` parses one expression
//! from the tokens, and the resulting node is lowered through the
//! ordinary expression generator, then re-wrapped as `${...}` in the
//! output backtick literal.

use crate::CodegenError;
use stylet_lexer::Scanner;
use stylet_parser::Parser;

/// Generate a backtick-delimited JS template literal from raw template
/// text. A `$` not followed by `{` is copied through literally; a span
/// opened by `${` runs to the first `}` not preceded by a backslash. A
/// span with no closing `}` is an error — the scan never runs past the
/// end of the text.
pub(crate) fn gen_template(raw: &str) -> Result<String, CodegenError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut output = String::new();
    let mut index = 0;

    while index < chars.len() {
        if chars[index] == '$' && chars.get(index + 1) == Some(&'{') {
            index += 2;
            let mut span = String::new();
            loop {
                match chars.get(index) {
                    None => return Err(CodegenError::UnterminatedInterpolation),
                    // A `}` preceded by a backslash is part of the span
                    Some(&'}') if !span.ends_with('\\') => break,
                    Some(&c) => {
                        span.push(c);
                        index += 1;
                    }
                }
            }
            index += 1; // closing `}`

            output.push_str("${");
            output.push_str(&compile_span(&span)?);
            output.push('}');
        } else {
            output.push(chars[index]);
            index += 1;
        }
    }

    Ok(format!("`{output}`"))
}

/// Recursively compile one interpolation span: lex, parse a single
/// expression (trailing tokens ignored), lower it.
fn compile_span(source: &str) -> Result<String, CodegenError> {
    let tokens = Scanner::tokenize(source)?;
    let expr = Parser::new(tokens).expression()?;
    crate::gen_expr(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literal_passthrough() {
        // No interpolation spans: content is copied verbatim
        assert_eq!(gen_template("hello world").unwrap(), "`hello world`");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(gen_template("").unwrap(), "``");
    }

    #[test]
    fn test_simple_interpolation() {
        assert_eq!(gen_template("${1 + 2}").unwrap(), "`${add(1, 2)}`");
    }

    #[test]
    fn test_interpolation_keeps_position() {
        assert_eq!(
            gen_template("width is ${x + 1}px").unwrap(),
            "`width is ${add(x, 1)}px`"
        );
    }

    #[test]
    fn test_multiple_interpolations() {
        assert_eq!(
            gen_template("${a}-${b * 2}").unwrap(),
            "`${a}-${mul(b, 2)}`"
        );
    }

    #[test]
    fn test_bare_dollar_copied_literally() {
        assert_eq!(gen_template("cost: $5").unwrap(), "`cost: $5`");
    }

    #[test]
    fn test_dollar_at_end_of_text() {
        assert_eq!(gen_template("total $").unwrap(), "`total $`");
    }

    #[test]
    fn test_escaped_brace_does_not_terminate_span() {
        // `\}` inside the span is kept; the span runs to the next `}`
        assert_eq!(
            gen_template("${\"a\\}b\"}").unwrap(),
            "`${\"a\\}b\"}`"
        );
    }

    #[test]
    fn test_unterminated_interpolation() {
        assert_eq!(
            gen_template("before ${1 + 2"),
            Err(CodegenError::UnterminatedInterpolation)
        );
    }

    #[test]
    fn test_unterminated_immediately_after_open() {
        assert_eq!(
            gen_template("${"),
            Err(CodegenError::UnterminatedInterpolation)
        );
    }

    #[test]
    fn test_span_lex_error_propagates() {
        let result = gen_template("${~}");
        assert!(matches!(result, Err(CodegenError::Lex(_))));
    }

    #[test]
    fn test_span_parse_error_propagates() {
        let result = gen_template("${1 +}");
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }

    #[test]
    fn test_template_inside_span_is_rejected() {
        // The span scan is single-level: the first unescaped `}` ends it,
        // so a nested template's own `${...}` truncates the span and the
        // recursive lex fails on the unterminated backtick.
        let result = gen_template("${`inner ${x}`}");
        assert!(matches!(result, Err(CodegenError::Lex(_))));
    }
}
