//! Message Formatting Core for intl-format
//!
//! Formats `%`-placeholder templates by dispatching each placeholder to a
//! pluggable [`Formatter`] chosen by its type specifier:
//!
//! - **Placeholder Parsing**: literal runs, `%%` escapes, `%spec` and `%N$spec`
//! - **Argument Resolution**: implicit and explicit 1-based value indices
//! - **Formatter Dispatch**: last registered formatter wins
//! - **Verbatim Fallback**: unclaimed placeholders are kept as written
//!
//! # Quick Start
//!
//! ```rust
//! use intl_format_core::{Formatter, IntlFormat, InvalidValueError, Value, values};
//! use std::sync::Arc;
//!
//! struct Shout;
//!
//! impl Formatter for Shout {
//!     fn claims(&self, specifier: &str) -> bool {
//!         specifier == "shout"
//!     }
//!
//!     fn render(&self, _: &str, value: &Value) -> Result<String, InvalidValueError> {
//!         Ok(value.to_string().to_uppercase())
//!     }
//! }
//!
//! let intl = IntlFormat::default().with_formatter(Arc::new(Shout));
//!
//! let msg = intl.format("%2$shout, %1$shout!", &values!["world", "hello"]).unwrap();
//! assert_eq!(msg, "HELLO, WORLD!");
//! ```
//!
//! # Errors
//!
//! Index problems are detected before anything is rendered:
//!
//! ```rust
//! use intl_format_core::{IntlFormat, IntlFormatError, values};
//!
//! let intl = IntlFormat::default();
//! let err = intl.format("%a %b", &values![1]).unwrap_err();
//! assert!(matches!(err, IntlFormatError::ArgumentIndexOutOfRange { .. }));
//! ```

mod engine;
mod error;
mod formatter;
mod parser;
mod registry;
mod resolver;
mod value;

pub use engine::{
    IntlFormat, add_formatter, format, format_with, format_with_registry, global_registry,
};
pub use error::{IntlFormatError, InvalidValueError};
pub use formatter::Formatter;
pub use parser::{Placeholder, Token, parse};
pub use registry::FormatterRegistry;
pub use resolver::{Resolution, resolve};
pub use value::{ErrorValue, Value, ValueKind};

/// Result type for format operations
pub type Result<T> = std::result::Result<T, IntlFormatError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ErrorValue, Formatter, IntlFormat, IntlFormatError, InvalidValueError, Result, Value,
        ValueKind, add_formatter, format, values,
    };
}
