//! Formatter Registry
//!
//! An ordered list of formatters where later registrations take priority.

use crate::{Formatter, InvalidValueError, Value};
use intl_format_log::trace;
use std::fmt;
use std::sync::Arc;

/// Ordered collection of formatters.
///
/// Lookups scan in reverse registration order, so a formatter registered
/// later shadows earlier ones that claim the same specifier.
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from formatters in registration order.
    pub fn from_formatters<I>(formatters: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Formatter>>,
    {
        Self {
            formatters: formatters.into_iter().collect(),
        }
    }

    /// Append a formatter. Duplicates are allowed.
    pub fn register(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatters.push(formatter);
    }

    /// The formatter that handles `specifier`, if any.
    pub fn resolve(&self, specifier: &str) -> Option<&dyn Formatter> {
        let found = self
            .formatters
            .iter()
            .rev()
            .find(|formatter| formatter.claims(specifier))
            .map(|formatter| &**formatter);

        match found {
            Some(formatter) => trace!(
                target: "intl_format::registry",
                "specifier {:?} claimed by {}",
                specifier,
                formatter.name()
            ),
            None => trace!(
                target: "intl_format::registry",
                "specifier {:?} unclaimed",
                specifier
            ),
        }

        found
    }

    /// Whether any formatter claims `specifier`.
    pub fn claims(&self, specifier: &str) -> bool {
        self.resolve(specifier).is_some()
    }

    /// Render with the claiming formatter; `None` if nothing claims it.
    pub fn render(
        &self,
        specifier: &str,
        value: &Value,
    ) -> Option<Result<String, InvalidValueError>> {
        self.resolve(specifier)
            .map(|formatter| formatter.render(specifier, value))
    }

    /// Number of registered formatters.
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Whether no formatter is registered.
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// Remove every formatter.
    pub fn clear(&mut self) {
        self.formatters.clear();
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.formatters.iter().map(|formatter| formatter.name()))
            .finish()
    }
}

impl Extend<Arc<dyn Formatter>> for FormatterRegistry {
    fn extend<I: IntoIterator<Item = Arc<dyn Formatter>>>(&mut self, iter: I) {
        self.formatters.extend(iter);
    }
}
