//! Error value formatting.

use intl_format_core::{Formatter, InvalidValueError, Value, ValueKind};

/// Handles `emessage`, `ecode`, `efile`, `eline` and `etrace` for
/// [`Value::Error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionFormatter;

impl ExceptionFormatter {
    pub const SPECIFIERS: [&'static str; 5] = ["emessage", "ecode", "efile", "eline", "etrace"];

    pub fn new() -> Self {
        Self
    }
}

impl Formatter for ExceptionFormatter {
    fn claims(&self, specifier: &str) -> bool {
        Self::SPECIFIERS.iter().any(|s| *s == specifier)
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        let Value::Error(error) = value else {
            return Err(InvalidValueError::invalid_value_type(
                value.kind(),
                &[ValueKind::Error],
            ));
        };

        Ok(match specifier {
            "ecode" => error.code.to_string(),
            "efile" => error.file.clone(),
            "eline" => error.line.to_string(),
            "etrace" => error.trace_string(),
            _ => error.message.clone(),
        })
    }

    fn name(&self) -> &str {
        "ExceptionFormatter"
    }
}
