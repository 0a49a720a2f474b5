//! Placeholder Parser
//!
//! Splits a template into literal runs and `%` placeholders:
//!
//! - `%%` is an escaped percent sign and becomes part of the literal run
//! - `%N$spec` references value `N` explicitly
//! - `%spec` takes the next implicit value
//!
//! The specifier is the longest run of word characters (alphanumerics and
//! `_`), where `.`, `-` and `+` are allowed between word characters. The
//! parser never rejects input: a lone `%` becomes a placeholder with an
//! empty specifier and validation happens during resolution.

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied to the output as is
    Literal(String),
    Placeholder(Placeholder),
}

/// A `%` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// `N` from `%N$spec`; `None` for implicit placeholders
    pub explicit_index: Option<usize>,
    /// Type specifier, passed to formatters untouched
    pub specifier: String,
    /// The placeholder exactly as written, emitted when no formatter claims it
    pub raw: String,
}

/// Parse a template into tokens. Never fails.
///
/// ```
/// use intl_format_core::{parse, Token};
///
/// let tokens = parse("%1$date: 100%%");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1], Token::Literal(": 100%".into()));
/// ```
pub fn parse(template: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        literal.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('%') {
            literal.push('%');
            rest = tail;
            continue;
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }

        let (placeholder, consumed) = scan_placeholder(after);
        tokens.push(Token::Placeholder(placeholder));
        rest = &after[consumed..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tokens
}

/// Scan the text following a `%`. Returns the placeholder and the number of
/// bytes it spans after the `%`.
fn scan_placeholder(input: &str) -> (Placeholder, usize) {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();

    let (explicit_index, spec_start) = if digits > 0 && input[digits..].starts_with('$') {
        // Only overflow can fail here; saturate so resolution reports it.
        let index = input[..digits].parse().unwrap_or(usize::MAX);
        (Some(index), digits + 1)
    } else {
        (None, 0)
    };

    let end = spec_start + specifier_len(&input[spec_start..]);

    let placeholder = Placeholder {
        explicit_index,
        specifier: input[spec_start..end].to_string(),
        raw: format!("%{}", &input[..end]),
    };

    (placeholder, end)
}

fn specifier_len(input: &str) -> usize {
    let mut end = 0;

    for (i, c) in input.char_indices() {
        if is_word_char(c) {
            end = i + c.len_utf8();
        } else if !is_joiner(c) {
            break;
        }
    }

    end
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_joiner(c: char) -> bool {
    matches!(c, '.' | '-' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(index: Option<usize>, specifier: &str, raw: &str) -> Token {
        Token::Placeholder(Placeholder {
            explicit_index: index,
            specifier: specifier.to_string(),
            raw: raw.to_string(),
        })
    }

    fn literal(text: &str) -> Token {
        Token::Literal(text.to_string())
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("no placeholders"), vec![literal("no placeholders")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_implicit_placeholders() {
        assert_eq!(
            parse("Hello \"%world\", how are you"),
            vec![
                literal("Hello \""),
                placeholder(None, "world", "%world"),
                literal("\", how are you"),
            ]
        );
    }

    #[test]
    fn test_explicit_placeholders() {
        assert_eq!(
            parse("%2$x %1$x"),
            vec![
                placeholder(Some(2), "x", "%2$x"),
                literal(" "),
                placeholder(Some(1), "x", "%1$x"),
            ]
        );
    }

    #[test]
    fn test_escaped_percent_joins_literal_run() {
        assert_eq!(
            parse("Hello %world, how %%are you"),
            vec![
                literal("Hello "),
                placeholder(None, "world", "%world"),
                literal(", how %are you"),
            ]
        );
        assert_eq!(parse("a%%b"), vec![literal("a%b")]);
        assert_eq!(parse("%%%%"), vec![literal("%%")]);
    }

    #[test]
    fn test_escape_then_placeholder() {
        assert_eq!(
            parse("%%%d"),
            vec![literal("%"), placeholder(None, "d", "%d")]
        );
    }

    #[test]
    fn test_digits_without_dollar_belong_to_specifier() {
        assert_eq!(parse("%03d"), vec![placeholder(None, "03d", "%03d")]);
    }

    #[test]
    fn test_joiners_inside_specifier() {
        assert_eq!(
            parse("%.3number"),
            vec![placeholder(None, ".3number", "%.3number")]
        );
        assert_eq!(parse("%-5s"), vec![placeholder(None, "-5s", "%-5s")]);
        assert_eq!(
            parse("%1$.2f"),
            vec![placeholder(Some(1), ".2f", "%1$.2f")]
        );
    }

    #[test]
    fn test_trailing_joiner_is_literal() {
        assert_eq!(
            parse("I have %d."),
            vec![literal("I have "), placeholder(None, "d", "%d"), literal(".")]
        );
    }

    #[test]
    fn test_delimiters_end_specifier() {
        assert_eq!(
            parse("%a%b 'c'"),
            vec![
                placeholder(None, "a", "%a"),
                placeholder(None, "b", "%b"),
                literal(" 'c'"),
            ]
        );
    }

    #[test]
    fn test_bare_percent_is_empty_placeholder() {
        assert_eq!(
            parse("100% sure"),
            vec![literal("100"), placeholder(None, "", "%"), literal(" sure")]
        );
        assert_eq!(parse("%"), vec![placeholder(None, "", "%")]);
        assert_eq!(parse("%5$"), vec![placeholder(Some(5), "", "%5$")]);
    }

    #[test]
    fn test_zero_index_is_kept_for_validation() {
        assert_eq!(parse("%0$world"), vec![placeholder(Some(0), "world", "%0$world")]);
    }

    #[test]
    fn test_overflowing_index_saturates() {
        let tokens = parse("%99999999999999999999999$x");
        assert_eq!(
            tokens,
            vec![placeholder(Some(usize::MAX), "x", "%99999999999999999999999$x")]
        );
    }

    #[test]
    fn test_unicode_specifier_and_text() {
        assert_eq!(
            parse("Grüße %wörld!"),
            vec![
                literal("Grüße "),
                placeholder(None, "wörld", "%wörld"),
                literal("!"),
            ]
        );
    }
}
