// intl-format - internationalized sprintf-like message formatting
//
// Templates carry `%`-placeholders whose type specifiers are rendered by
// pluggable, locale-aware formatters.

// Re-export core functionality
pub use intl_format_core::*;

// Re-export logging
pub use intl_format_log as log;

// Re-export the standard formatters
#[cfg(feature = "formatters")]
pub use intl_format_formatters as formatters;

#[cfg(feature = "formatters")]
pub use intl_format_formatters::{
    CallbackFormatter, DateFormatter, ExceptionFormatter, Locale, LocaleError, NumberFormatter,
    PrecisionNumberFormatter, SprintfFormatter, TimeZoneFormatter, standard_formatters,
};

/// An engine loaded with the standard formatters for `locale`.
///
/// ```
/// use intl_format::{Locale, create, values};
///
/// let intl = create(&Locale::de_de());
/// let msg = intl.format("%currency für %d Bananen", &values![1000.1, 3]).unwrap();
/// assert_eq!(msg, "1.000,10 € für 3 Bananen");
/// ```
#[cfg(feature = "formatters")]
pub fn create(locale: &Locale) -> IntlFormat {
    IntlFormat::new(standard_formatters(locale))
}

/// Locale-based constructors for [`IntlFormat`].
#[cfg(feature = "formatters")]
pub trait IntlFormatExt {
    /// Same as [`create`].
    fn with_locale(locale: &Locale) -> IntlFormat;

    /// Standard formatters for the locale found in the environment.
    fn from_env() -> IntlFormat {
        Self::with_locale(&Locale::from_env())
    }
}

#[cfg(feature = "formatters")]
impl IntlFormatExt for IntlFormat {
    fn with_locale(locale: &Locale) -> IntlFormat {
        create(locale)
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use intl_format_core::prelude::*;

    #[cfg(feature = "formatters")]
    pub use crate::{IntlFormatExt, Locale, create, standard_formatters};
}
