//! Format Engine
//!
//! Ties parser, resolver and registry together. Formatting is a dry run
//! (parse and validate every index) followed by rendering, so an index
//! error never yields partial output.

use crate::{Formatter, FormatterRegistry, Result, Token, Value, parse, resolve};
use intl_format_log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

const TARGET: &str = "intl_format::engine";

static NULL_VALUE: Value = Value::Null;

/// Process-wide registry used by [`format`] and [`add_formatter`].
static GLOBAL_REGISTRY: Lazy<RwLock<FormatterRegistry>> =
    Lazy::new(|| RwLock::new(FormatterRegistry::new()));

/// Format `template` with `values` against an explicit formatter list.
///
/// Formatters later in the slice take priority.
pub fn format_with(
    template: &str,
    values: &[Value],
    formatters: &[Arc<dyn Formatter>],
) -> Result<String> {
    let registry = FormatterRegistry::from_formatters(formatters.iter().cloned());
    format_with_registry(template, values, &registry)
}

/// Format `template` against the process-wide registry.
///
/// ```
/// use intl_format_core::{format, values};
///
/// // Nothing is registered, so the placeholder is kept as written.
/// assert_eq!(format("%x costs 100%%", &values![1]).unwrap(), "%x costs 100%");
/// ```
pub fn format(template: &str, values: &[Value]) -> Result<String> {
    let registry = GLOBAL_REGISTRY.read();
    format_with_registry(template, values, &registry)
}

/// Register a formatter with the process-wide registry.
pub fn add_formatter(formatter: Arc<dyn Formatter>) {
    debug!(target: TARGET, "global registration of {}", formatter.name());
    GLOBAL_REGISTRY.write().register(formatter);
}

/// Snapshot of the process-wide registry.
pub fn global_registry() -> FormatterRegistry {
    GLOBAL_REGISTRY.read().clone()
}

/// Format `template` with a given registry.
pub fn format_with_registry(
    template: &str,
    values: &[Value],
    registry: &FormatterRegistry,
) -> Result<String> {
    let tokens = parse(template);
    let resolution = resolve(&tokens, values.len())?;

    debug!(
        target: TARGET,
        "template {:?}: {} token(s), {} placeholder(s), {} value(s)",
        template,
        tokens.len(),
        resolution.len(),
        values.len()
    );

    let mut output = String::with_capacity(template.len());
    let mut indices = resolution.indices.iter();

    for token in &tokens {
        match token {
            Token::Literal(text) => output.push_str(text),
            Token::Placeholder(placeholder) => {
                // The resolver yields exactly one index per placeholder,
                // all within 1..=values.len().
                let value = indices
                    .next()
                    .and_then(|index| values.get(index - 1))
                    .unwrap_or(&NULL_VALUE);

                match registry.resolve(&placeholder.specifier) {
                    Some(formatter) => {
                        output.push_str(&formatter.render(&placeholder.specifier, value)?);
                    }
                    None => {
                        debug!(
                            target: TARGET,
                            "no formatter for {:?}, keeping it verbatim",
                            placeholder.raw
                        );
                        output.push_str(&placeholder.raw);
                    }
                }
            }
        }
    }

    Ok(output)
}

/// A formatting engine with its own formatter registry.
///
/// Clones share the registry, so formatters added through one clone are
/// visible to all of them.
///
/// ```
/// use intl_format_core::{Formatter, IntlFormat, InvalidValueError, Value, values};
/// use std::sync::Arc;
///
/// struct World;
///
/// impl Formatter for World {
///     fn claims(&self, specifier: &str) -> bool {
///         specifier == "world"
///     }
///     fn render(&self, _: &str, value: &Value) -> Result<String, InvalidValueError> {
///         Ok(value.to_string())
///     }
/// }
///
/// let intl = IntlFormat::new(vec![Arc::new(World) as Arc<dyn Formatter>]);
/// let text = intl.format("Hello %world, Today is %date", &values!["island", 1]).unwrap();
/// assert_eq!(text, "Hello island, Today is %date");
/// ```
#[derive(Clone, Default)]
pub struct IntlFormat {
    registry: Arc<RwLock<FormatterRegistry>>,
}

impl IntlFormat {
    /// Create an engine with formatters in registration order.
    pub fn new(formatters: Vec<Arc<dyn Formatter>>) -> Self {
        Self::from_registry(FormatterRegistry::from_formatters(formatters))
    }

    /// Create an engine around an existing registry.
    pub fn from_registry(registry: FormatterRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Register a formatter; it takes priority over earlier ones.
    pub fn add_formatter(&self, formatter: Arc<dyn Formatter>) {
        debug!(target: TARGET, "registered {}", formatter.name());
        self.registry.write().register(formatter);
    }

    /// Builder-style [`add_formatter`](Self::add_formatter).
    pub fn with_formatter(self, formatter: Arc<dyn Formatter>) -> Self {
        self.add_formatter(formatter);
        self
    }

    /// Format `template` with `values`.
    pub fn format(&self, template: &str, values: &[Value]) -> Result<String> {
        let registry = self.registry.read();
        format_with_registry(template, values, &registry)
    }

    /// Number of registered formatters.
    pub fn formatter_count(&self) -> usize {
        self.registry.read().len()
    }
}

impl std::fmt::Debug for IntlFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntlFormat")
            .field("registry", &*self.registry.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntlFormatError, InvalidValueError, ValueKind, values};
    use parking_lot::Mutex;

    /// Claims a fixed set of specifiers and echoes the value.
    struct Echo {
        specifiers: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl Echo {
        fn new(specifiers: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                specifiers: specifiers.to_vec(),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl Formatter for Echo {
        fn claims(&self, specifier: &str) -> bool {
            self.specifiers.iter().any(|s| *s == specifier)
        }

        fn render(&self, specifier: &str, value: &Value) -> std::result::Result<String, InvalidValueError> {
            self.calls.lock().push(specifier.to_string());
            Ok(value.to_string())
        }
    }

    struct Constant(&'static str);

    impl Formatter for Constant {
        fn claims(&self, _specifier: &str) -> bool {
            true
        }

        fn render(&self, _: &str, _: &Value) -> std::result::Result<String, InvalidValueError> {
            Ok(self.0.to_string())
        }
    }

    struct Strict;

    impl Formatter for Strict {
        fn claims(&self, specifier: &str) -> bool {
            specifier == "int"
        }

        fn render(&self, _: &str, value: &Value) -> std::result::Result<String, InvalidValueError> {
            match value {
                Value::Integer(i) => Ok(i.to_string()),
                other => Err(InvalidValueError::invalid_value_type(
                    other.kind(),
                    &[ValueKind::Integer],
                )),
            }
        }
    }

    fn engine(formatter: Arc<dyn Formatter>) -> IntlFormat {
        IntlFormat::new(vec![formatter])
    }

    #[test]
    fn test_basic_format() {
        let echo = Echo::new(&["world"]);
        let intl = engine(echo.clone());

        let text = intl
            .format("Hello \"%world\", how are you", &values!["island"])
            .unwrap();

        assert_eq!(text, "Hello \"island\", how are you");
        assert_eq!(*echo.calls.lock(), vec!["world".to_string()]);
    }

    #[test]
    fn test_escaped_format() {
        let intl = engine(Echo::new(&["world"]));

        assert_eq!(
            intl.format("Hello %world, how %%are you", &values!["island"]).unwrap(),
            "Hello island, how %are you"
        );
        assert_eq!(
            intl.format("Hello %world, how %% are you", &values!["island"]).unwrap(),
            "Hello island, how % are you"
        );
    }

    #[test]
    fn test_escape_never_reaches_formatters() {
        let echo = Echo::new(&["", "%"]);
        let intl = engine(echo.clone());

        assert_eq!(intl.format("a%%b", &[]).unwrap(), "a%b");
        assert!(echo.calls.lock().is_empty());
    }

    #[test]
    fn test_argument_swapping() {
        let intl = engine(Echo::new(&["swap"]));

        assert_eq!(
            intl.format("%swap %swap %1$swap", &values!["value1", "value2"]).unwrap(),
            "value1 value2 value1"
        );
        assert_eq!(
            intl.format("%3$swap %2$swap %1$swap", &values!["value1", "value2", "value3"])
                .unwrap(),
            "value3 value2 value1"
        );
    }

    #[test]
    fn test_unclaimed_placeholder_is_verbatim() {
        let echo = Echo::new(&["world"]);
        let intl = engine(echo.clone());

        let text = intl
            .format("Hello %world, Today is %2$date", &values!["island", 5])
            .unwrap();

        assert_eq!(text, "Hello island, Today is %2$date");
        assert_eq!(echo.calls.lock().len(), 1);
    }

    #[test]
    fn test_validation_happens_before_rendering() {
        let echo = Echo::new(&["world", "date"]);
        let intl = engine(echo.clone());

        let err = intl
            .format("Hello %world, Today is %date", &values!["island"])
            .unwrap_err();

        assert!(matches!(err, IntlFormatError::ArgumentIndexOutOfRange { index: 2, .. }));
        assert!(echo.calls.lock().is_empty());
    }

    #[test]
    fn test_no_formatters_still_validates() {
        let intl = IntlFormat::default();

        assert_eq!(
            intl.format("Hello %world, Today is %date", &values!["island"])
                .unwrap_err()
                .code(),
            10
        );
        assert_eq!(intl.format("Hello %%world", &values!["island"]).unwrap_err().code(), 20);
        assert_eq!(
            intl.format("Hello %0$world, Today is %date", &values!["island", 1])
                .unwrap_err()
                .code(),
            30
        );
    }

    #[test]
    fn test_add_formatter_overrides() {
        let intl = IntlFormat::default();
        intl.add_formatter(Arc::new(Constant("island")));
        intl.add_formatter(Arc::new(Constant("city")));

        assert_eq!(
            intl.format("Hello \"%world\", how are you", &values!["city"]).unwrap(),
            "Hello \"city\", how are you"
        );
        assert_eq!(intl.formatter_count(), 2);
    }

    #[test]
    fn test_clones_share_registry() {
        let intl = IntlFormat::default();
        let clone = intl.clone().with_formatter(Arc::new(Constant("x")));

        assert_eq!(intl.format("%a", &values![1]).unwrap(), "x");
        assert_eq!(clone.formatter_count(), 1);
    }

    #[test]
    fn test_render_error_propagates_unchanged() {
        let intl = engine(Arc::new(Strict));

        let err = intl.format("%int", &values!["foo"]).unwrap_err();

        assert_eq!(
            err,
            IntlFormatError::InvalidValue(InvalidValueError::invalid_value_type(
                ValueKind::Text,
                &[ValueKind::Integer]
            ))
        );
        assert_eq!(err.to_string(), "Invalid type \"text\" of value. Allowed types: \"integer\".");
    }

    #[test]
    fn test_format_with_slice_priority() {
        let formatters: Vec<Arc<dyn Formatter>> =
            vec![Arc::new(Constant("first")), Arc::new(Constant("last"))];

        assert_eq!(format_with("%x!", &values![0], &formatters).unwrap(), "last!");
    }
}
