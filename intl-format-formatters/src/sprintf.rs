//! printf-style Formatting
//!
//! Claims specifiers shaped like `[flags][width][.precision]conversion`:
//!
//! | Part | Values |
//! |------|--------|
//! | flags | `-` left-justify, `+` always sign, ` ` sign space, `0` zero pad |
//! | conversion | `b c d e E f F o s u x X` |
//!
//! Through the template parser, `%-10s`, `%+d` and `%05.2f` reach this
//! formatter; the space flag is only reachable by calling it directly.

use intl_format_core::{Formatter, InvalidValueError, Value, ValueKind};

const NUMERIC: [ValueKind; 2] = [ValueKind::Integer, ValueKind::Float];

/// Largest width a directive may request.
pub const MAX_WIDTH: usize = 1024;

/// Largest precision a directive may request.
pub const MAX_PRECISION: usize = 100;

/// A parsed printf directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directive {
    pub left_justify: bool,
    pub plus: bool,
    pub space: bool,
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: char,
}

impl Directive {
    /// Parse a specifier, or `None` if it is not a printf directive.
    ///
    /// Widths above [`MAX_WIDTH`] and precisions above [`MAX_PRECISION`] are
    /// not directives.
    pub fn parse(specifier: &str) -> Option<Self> {
        let mut directive = Directive::default();
        let mut rest = specifier;

        while let Some(c) = rest.chars().next() {
            match c {
                '-' => directive.left_justify = true,
                '+' => directive.plus = true,
                ' ' => directive.space = true,
                '0' => directive.zero_pad = true,
                _ => break,
            }
            rest = &rest[1..];
        }

        let (width, after) = take_digits(rest);
        if !width.is_empty() {
            directive.width = Some(bounded(width, MAX_WIDTH)?);
        }
        rest = after;

        if let Some(after_dot) = rest.strip_prefix('.') {
            let (precision, after) = take_digits(after_dot);
            directive.precision = Some(if precision.is_empty() {
                0
            } else {
                bounded(precision, MAX_PRECISION)?
            });
            rest = after;
        }

        let mut chars = rest.chars();
        let conversion = chars.next()?;
        if chars.next().is_some() || !"bcdeEfFosuxX".contains(conversion) {
            return None;
        }
        directive.conversion = conversion;
        Some(directive)
    }

    /// Render `value` according to this directive.
    pub fn apply(&self, value: &Value) -> Result<String, InvalidValueError> {
        match self.conversion {
            's' => {
                let text = value.to_string();
                let text = match self.precision {
                    Some(max) => text.chars().take(max).collect(),
                    None => text,
                };
                Ok(self.pad("", &text))
            }
            'c' => {
                let code = integer(value)?;
                let c = u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| InvalidValueError::invalid_value_type(value.kind(), &NUMERIC))?;
                Ok(c.to_string())
            }
            'd' => {
                let n = integer(value)?;
                Ok(self.pad(self.sign(n < 0), &n.unsigned_abs().to_string()))
            }
            'u' => Ok(self.pad("", &(integer(value)? as u64).to_string())),
            'b' => Ok(self.pad("", &format!("{:b}", integer(value)? as u64))),
            'o' => Ok(self.pad("", &format!("{:o}", integer(value)? as u64))),
            'x' => Ok(self.pad("", &format!("{:x}", integer(value)? as u64))),
            'X' => Ok(self.pad("", &format!("{:X}", integer(value)? as u64))),
            'e' | 'E' => {
                let n = float(value)?;
                let body = exponent(n.abs(), self.precision.unwrap_or(6));
                let body = if self.conversion == 'E' {
                    body.to_uppercase()
                } else {
                    body
                };
                Ok(self.pad(self.sign(n.is_sign_negative() && n != 0.0), &body))
            }
            _ => {
                let n = float(value)?;
                let body = format!("{:.*}", self.precision.unwrap_or(6), n.abs());
                Ok(self.pad(self.sign(n.is_sign_negative() && n != 0.0), &body))
            }
        }
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }

    fn pad(&self, sign: &str, body: &str) -> String {
        let len = sign.chars().count() + body.chars().count();
        let fill = self.width.unwrap_or(0).saturating_sub(len);

        if self.left_justify {
            format!("{}{}{}", sign, body, " ".repeat(fill))
        } else if self.zero_pad {
            format!("{}{}{}", sign, "0".repeat(fill), body)
        } else {
            format!("{}{}{}", " ".repeat(fill), sign, body)
        }
    }
}

/// Split a leading run of ASCII digits off `input`.
fn take_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

fn bounded(digits: &str, max: usize) -> Option<usize> {
    digits.parse().ok().filter(|n| *n <= max)
}

/// `1.234500e+3` style exponent notation.
fn exponent(n: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{}e{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}e+{}", mantissa, exp),
        None => formatted,
    }
}

fn integer(value: &Value) -> Result<i64, InvalidValueError> {
    let exact = match value {
        Value::Integer(i) => Some(*i),
        Value::Boolean(b) => Some(i64::from(*b)),
        Value::Text(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match exact {
        Some(i) => Ok(i),
        None => value
            .as_f64()
            .map(|f| f.trunc() as i64)
            .ok_or_else(|| invalid(value)),
    }
}

fn float(value: &Value) -> Result<f64, InvalidValueError> {
    match value {
        Value::Boolean(b) => Ok(f64::from(u8::from(*b))),
        _ => value.as_f64().ok_or_else(|| invalid(value)),
    }
}

fn invalid(value: &Value) -> InvalidValueError {
    InvalidValueError::invalid_value_type(value.kind(), &NUMERIC)
}

/// printf-style formatter.
///
/// ```
/// use intl_format_core::{Formatter, Value};
/// use intl_format_formatters::SprintfFormatter;
///
/// let sprintf = SprintfFormatter;
/// assert_eq!(sprintf.render("05.1f", &Value::from(3.14159)).unwrap(), "003.1");
/// assert_eq!(sprintf.render("-6s", &Value::from("ab")).unwrap(), "ab    ");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SprintfFormatter;

impl SprintfFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for SprintfFormatter {
    fn claims(&self, specifier: &str) -> bool {
        Directive::parse(specifier).is_some()
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        match Directive::parse(specifier) {
            Some(directive) => directive.apply(value),
            None => Ok(value.to_string()),
        }
    }

    fn name(&self) -> &str {
        "SprintfFormatter"
    }
}
