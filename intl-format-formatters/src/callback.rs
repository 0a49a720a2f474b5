//! Closure-backed formatters.

use intl_format_core::{Formatter, InvalidValueError, Value};
use std::fmt;
use std::sync::Arc;

type Callback = Arc<dyn Fn(&str, &Value) -> Value + Send + Sync>;

/// Claims a fixed set of specifiers and renders them with a closure.
///
/// The closure returns a [`Value`]; anything other than text is rejected
/// with [`InvalidValueError::InvalidReturnType`].
///
/// ```
/// use intl_format_core::{Formatter, Value};
/// use intl_format_formatters::CallbackFormatter;
///
/// let upper = CallbackFormatter::new(["upper"], |_, value| {
///     Value::from(value.to_string().to_uppercase())
/// });
///
/// assert_eq!(upper.render("upper", &Value::from("abc")).unwrap(), "ABC");
/// ```
#[derive(Clone)]
pub struct CallbackFormatter {
    specifiers: Vec<String>,
    callback: Callback,
}

impl CallbackFormatter {
    pub fn new<I, S, F>(specifiers: I, callback: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
    {
        Self {
            specifiers: specifiers.into_iter().map(Into::into).collect(),
            callback: Arc::new(callback),
        }
    }

    pub fn specifiers(&self) -> &[String] {
        &self.specifiers
    }
}

impl fmt::Debug for CallbackFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackFormatter")
            .field("specifiers", &self.specifiers)
            .finish_non_exhaustive()
    }
}

impl Formatter for CallbackFormatter {
    fn claims(&self, specifier: &str) -> bool {
        self.specifiers.iter().any(|s| s == specifier)
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        match (self.callback)(specifier, value) {
            Value::Text(text) => Ok(text),
            other => Err(InvalidValueError::invalid_return_type(specifier, other.kind())),
        }
    }

    fn name(&self) -> &str {
        "CallbackFormatter"
    }
}
