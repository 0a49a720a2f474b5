//! Time zone identifiers and display names.

use crate::Locale;
use crate::date::gmt_label;
use chrono::FixedOffset;
use intl_format_core::{Formatter, InvalidValueError, Value, ValueKind};

const ACCEPTED: [ValueKind; 2] = [ValueKind::DateTime, ValueKind::TimeZone];

/// Handles `timeseries_id`, `timeseries_name` and `timeseries_short`.
///
/// Date-time values contribute their own offset.
#[derive(Debug, Clone)]
pub struct TimeZoneFormatter {
    locale: Locale,
}

impl TimeZoneFormatter {
    pub const SPECIFIERS: [&'static str; 3] = ["timeseries_id", "timeseries_name", "timeseries_short"];

    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn utc_name(&self) -> &'static str {
        match self.locale.language.as_str() {
            "de" => "Koordinierte Weltzeit",
            "fr" => "temps universel coordonné",
            "es" => "tiempo universal coordinado",
            _ => "Coordinated Universal Time",
        }
    }
}

/// `UTC` for a zero offset, else `GMT+01:00`.
pub fn zone_id(offset: &FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        gmt_label(offset, true)
    }
}

impl Formatter for TimeZoneFormatter {
    fn claims(&self, specifier: &str) -> bool {
        Self::SPECIFIERS.iter().any(|s| *s == specifier)
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        let offset = match value {
            Value::DateTime(dt) => *dt.offset(),
            Value::TimeZone(tz) => *tz,
            other => {
                return Err(InvalidValueError::invalid_value_type(other.kind(), &ACCEPTED));
            }
        };

        Ok(match specifier {
            "timeseries_name" if offset.local_minus_utc() == 0 => self.utc_name().to_string(),
            "timeseries_name" => gmt_label(&offset, true),
            "timeseries_short" => gmt_label(&offset, false),
            _ => zone_id(&offset),
        })
    }

    fn name(&self) -> &str {
        "TimeZoneFormatter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_utc() {
        let formatter = TimeZoneFormatter::new(Locale::de_de());
        let utc = Value::from(FixedOffset::east_opt(0).unwrap());

        assert_eq!(formatter.render("timeseries_id", &utc).unwrap(), "UTC");
        assert_eq!(
            formatter.render("timeseries_name", &utc).unwrap(),
            "Koordinierte Weltzeit"
        );
        assert_eq!(formatter.render("timeseries_short", &utc).unwrap(), "GMT");
    }

    #[test]
    fn test_offset_from_datetime() {
        let formatter = TimeZoneFormatter::new(Locale::en_us());
        let value = Value::from(DateTime::parse_from_rfc3339("2016-03-01T01:20:50+05:30").unwrap());

        assert_eq!(formatter.render("timeseries_id", &value).unwrap(), "GMT+05:30");
        assert_eq!(formatter.render("timeseries_name", &value).unwrap(), "GMT+05:30");
        assert_eq!(formatter.render("timeseries_short", &value).unwrap(), "GMT+5:30");
    }

    #[test]
    fn test_rejects_other_values() {
        let formatter = TimeZoneFormatter::new(Locale::en_us());
        let err = formatter.render("timeseries_id", &Value::from("Europe/Berlin")).unwrap_err();

        assert_eq!(err.code(), 10);
        assert_eq!(
            err.to_string(),
            "Invalid type \"text\" of value. Allowed types: \"datetime, timezone\"."
        );
    }

    #[test]
    fn test_claims() {
        let formatter = TimeZoneFormatter::new(Locale::en_us());
        assert!(formatter.claims("timeseries_short"));
        assert!(!formatter.claims("timezone"));
    }
}
