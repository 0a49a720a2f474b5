//! Standard Formatters for intl-format
//!
//! Locale-aware [`Formatter`] implementations:
//!
//! - **Numbers**: `number`, `integer`, `percent`, `currency`, `ordinal`,
//!   `duration` and `.<N>number`
//! - **Dates**: `date*`, `quarter*`, `time*`
//! - **Time Zones**: `timeseries_id`, `timeseries_name`, `timeseries_short`
//! - **Errors**: `emessage`, `ecode`, `efile`, `eline`, `etrace`
//! - **printf**: `d`, `s`, `05.2f`, ...
//!
//! # Quick Start
//!
//! ```rust
//! use intl_format_core::{IntlFormat, values};
//! use intl_format_formatters::{Locale, standard_formatters};
//!
//! let intl = IntlFormat::new(standard_formatters(&Locale::de_de()));
//!
//! let msg = intl.format("%integer Affen auf %d Bäumen", &values![1001, 3]).unwrap();
//! assert_eq!(msg, "1.001 Affen auf 3 Bäumen");
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use chrono::FixedOffset;
//! use intl_format_formatters::{DateFormatter, Locale, NumberFormatter};
//!
//! let locale = Locale::from_env();
//! let number = NumberFormatter::new(locale.clone()).with_currency("CHF");
//! let date = DateFormatter::new(locale).with_time_zone(FixedOffset::east_opt(3600).unwrap());
//! ```

mod callback;
mod date;
mod exception;
mod locale;
mod number;
mod sprintf;
mod symbols;
mod timezone;

pub use callback::CallbackFormatter;
pub use date::DateFormatter;
pub use exception::ExceptionFormatter;
pub use locale::{LOCALE_ENV_VARS, Locale, LocaleError};
pub use number::{NumberFormatter, PrecisionNumberFormatter};
pub use sprintf::{Directive, SprintfFormatter};
pub use timezone::{TimeZoneFormatter, zone_id};

use intl_format_core::Formatter;
use intl_format_log::debug;
use std::sync::Arc;

/// The default formatter set for a locale, in registration order.
///
/// Later entries win when specifiers overlap.
pub fn standard_formatters(locale: &Locale) -> Vec<Arc<dyn Formatter>> {
    debug!(target: "intl_format::formatters", "standard formatters for {}", locale);

    vec![
        Arc::new(SprintfFormatter),
        Arc::new(NumberFormatter::new(locale.clone())),
        Arc::new(DateFormatter::new(locale.clone())),
        Arc::new(PrecisionNumberFormatter::new(locale.clone())),
        Arc::new(TimeZoneFormatter::new(locale.clone())),
        Arc::new(ExceptionFormatter),
    ]
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CallbackFormatter, DateFormatter, ExceptionFormatter, Locale, NumberFormatter,
        PrecisionNumberFormatter, SprintfFormatter, TimeZoneFormatter, standard_formatters,
    };
}
