//! The formatter capability.

use crate::{InvalidValueError, Value};
use std::sync::Arc;

/// Renders values for the type specifiers it claims.
///
/// The engine only ever calls [`render`](Formatter::render) with a specifier
/// for which [`claims`](Formatter::claims) returned `true`.
///
/// # Example
///
/// ```
/// use intl_format_core::{Formatter, InvalidValueError, Value};
///
/// struct Upper;
///
/// impl Formatter for Upper {
///     fn claims(&self, specifier: &str) -> bool {
///         specifier == "upper"
///     }
///
///     fn render(&self, _specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
///         Ok(value.to_string().to_uppercase())
///     }
/// }
///
/// assert_eq!(Upper.render("upper", &"island".into()).unwrap(), "ISLAND");
/// ```
pub trait Formatter: Send + Sync {
    /// Whether this formatter handles `specifier`.
    fn claims(&self, specifier: &str) -> bool;

    /// Render `value` for `specifier`.
    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError>;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn claims(&self, specifier: &str) -> bool {
        (**self).claims(specifier)
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        (**self).render(specifier, value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn claims(&self, specifier: &str) -> bool {
        (**self).claims(specifier)
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        (**self).render(specifier, value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
