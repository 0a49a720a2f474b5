//! Date and Time Formatting
//!
//! Renders date-times and Unix timestamps with locale patterns in a fixed
//! UTC offset.

use crate::Locale;
use crate::symbols::names;
use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use intl_format_core::{Formatter, InvalidValueError, Value, ValueKind};

const ACCEPTED: [ValueKind; 2] = [ValueKind::DateTime, ValueKind::Integer];

/// Pattern family for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Us,
    Gb,
    De,
    Fr,
    Es,
}

impl Style {
    fn of(locale: &Locale) -> Self {
        match locale.language.as_str() {
            "de" => Style::De,
            "fr" => Style::Fr,
            "es" => Style::Es,
            "en" if matches!(
                locale.region.as_deref(),
                Some("GB" | "IE" | "AU" | "NZ" | "IN")
            ) =>
            {
                Style::Gb
            }
            _ => Style::Us,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Length {
    Short,
    Medium,
    Long,
    Full,
}

/// Handles `date*`, `quarter*` and `time*` specifiers.
///
/// ```
/// use chrono::DateTime;
/// use intl_format_core::{Formatter, Value};
/// use intl_format_formatters::{DateFormatter, Locale};
///
/// let formatter = DateFormatter::new(Locale::de_de());
/// let date = DateTime::parse_from_rfc3339("2016-03-01T01:20:50Z").unwrap();
///
/// assert_eq!(formatter.render("date_long", &Value::from(date)).unwrap(), "1. März 2016");
/// ```
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: Locale,
    offset: FixedOffset,
}

impl DateFormatter {
    pub const SPECIFIERS: [&'static str; 18] = [
        "date",
        "date_short",
        "date_medium",
        "date_long",
        "date_full",
        "date_year",
        "date_month",
        "date_month_name",
        "date_day",
        "date_weekday",
        "quarter",
        "quarter_abbr",
        "quarter_name",
        "time",
        "time_short",
        "time_medium",
        "time_long",
        "time_full",
    ];

    /// Create a date formatter rendering in UTC.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            offset: Utc.fix(),
        }
    }

    /// Render in the given UTC offset instead of UTC.
    pub fn with_time_zone(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// The offset values are converted to before rendering.
    pub fn time_zone(&self) -> FixedOffset {
        self.offset
    }

    fn to_local(&self, value: &Value) -> Result<DateTime<FixedOffset>, InvalidValueError> {
        let instant = match value {
            Value::DateTime(dt) => Some(dt.with_timezone(&self.offset)),
            Value::Integer(secs) => DateTime::from_timestamp(*secs, 0)
                .map(|dt| dt.with_timezone(&self.offset)),
            _ => None,
        };
        instant.ok_or_else(|| InvalidValueError::invalid_value_type(value.kind(), &ACCEPTED))
    }

    fn format_date(&self, dt: &DateTime<FixedOffset>, length: Length) -> String {
        let names = names(&self.locale);
        let (year, month, day) = (dt.year(), dt.month(), dt.day());
        let month_name = names.months[dt.month0() as usize];
        let month_short = names.months_short[dt.month0() as usize];
        let weekday = names.weekdays[dt.weekday().num_days_from_monday() as usize];
        let yy = year.rem_euclid(100);

        match (Style::of(&self.locale), length) {
            (Style::Us, Length::Short) => format!("{}/{}/{:02}", month, day, yy),
            (Style::Us, Length::Medium) => format!("{} {}, {}", month_short, day, year),
            (Style::Us, Length::Long) => format!("{} {}, {}", month_name, day, year),
            (Style::Us, Length::Full) => format!("{}, {} {}, {}", weekday, month_name, day, year),

            (Style::Gb, Length::Short) => format!("{:02}/{:02}/{}", day, month, year),
            (Style::Gb, Length::Medium) => format!("{} {} {}", day, month_short, year),
            (Style::Gb, Length::Long) => format!("{} {} {}", day, month_name, year),
            (Style::Gb, Length::Full) => format!("{}, {} {} {}", weekday, day, month_name, year),

            (Style::De, Length::Short) => format!("{:02}.{:02}.{:02}", day, month, yy),
            (Style::De, Length::Medium) => format!("{:02}.{:02}.{}", day, month, year),
            (Style::De, Length::Long) => format!("{}. {} {}", day, month_name, year),
            (Style::De, Length::Full) => format!("{}, {}. {} {}", weekday, day, month_name, year),

            (Style::Fr, Length::Short) => format!("{:02}/{:02}/{}", day, month, year),
            (Style::Fr, Length::Medium) => format!("{} {} {}", day, month_short, year),
            (Style::Fr, Length::Long) => format!("{} {} {}", day, month_name, year),
            (Style::Fr, Length::Full) => format!("{} {} {} {}", weekday, day, month_name, year),

            (Style::Es, Length::Short) => format!("{}/{}/{:02}", day, month, yy),
            (Style::Es, Length::Medium) => format!("{} {} {}", day, month_short, year),
            (Style::Es, Length::Long) => format!("{} de {} de {}", day, month_name, year),
            (Style::Es, Length::Full) => {
                format!("{}, {} de {} de {}", weekday, day, month_name, year)
            }
        }
    }

    fn format_time(&self, dt: &DateTime<FixedOffset>, length: Length) -> String {
        let (hour, minute, second) = (dt.hour(), dt.minute(), dt.second());

        let clock = match Style::of(&self.locale) {
            Style::Us => {
                let (hour12, meridiem) = match hour {
                    0 => (12, "AM"),
                    1..=11 => (hour, "AM"),
                    12 => (12, "PM"),
                    _ => (hour - 12, "PM"),
                };
                match length {
                    Length::Short => format!("{}:{:02} {}", hour12, minute, meridiem),
                    _ => format!("{}:{:02}:{:02} {}", hour12, minute, second, meridiem),
                }
            }
            Style::Es => match length {
                Length::Short => format!("{}:{:02}", hour, minute),
                _ => format!("{}:{:02}:{:02}", hour, minute, second),
            },
            _ => match length {
                Length::Short => format!("{:02}:{:02}", hour, minute),
                _ => format!("{:02}:{:02}:{:02}", hour, minute, second),
            },
        };

        match length {
            Length::Short | Length::Medium => clock,
            Length::Long => format!("{} {}", clock, gmt_label(dt.offset(), false)),
            Length::Full => format!("{} {}", clock, gmt_label(dt.offset(), true)),
        }
    }

    fn quarter_name(&self, quarter: u32) -> String {
        match self.locale.language.as_str() {
            "de" => format!("{}. Quartal", quarter),
            "fr" if quarter == 1 => "1er trimestre".to_string(),
            "fr" => format!("{}e trimestre", quarter),
            "es" if quarter == 1 || quarter == 3 => format!("{}.er trimestre", quarter),
            "es" => format!("{}.º trimestre", quarter),
            _ => {
                let suffix = match quarter {
                    1 => "st",
                    2 => "nd",
                    3 => "rd",
                    _ => "th",
                };
                format!("{}{} quarter", quarter, suffix)
            }
        }
    }
}

impl Formatter for DateFormatter {
    fn claims(&self, specifier: &str) -> bool {
        Self::SPECIFIERS.iter().any(|s| *s == specifier)
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        let dt = self.to_local(value)?;
        let names = names(&self.locale);
        let quarter = dt.month0() / 3 + 1;

        Ok(match specifier {
            "date_short" => self.format_date(&dt, Length::Short),
            "date_long" => self.format_date(&dt, Length::Long),
            "date_full" => self.format_date(&dt, Length::Full),
            "date_year" => dt.year().to_string(),
            "date_month" => dt.month().to_string(),
            "date_month_name" => names.months[dt.month0() as usize].to_string(),
            "date_day" => dt.day().to_string(),
            "date_weekday" => {
                names.weekdays[dt.weekday().num_days_from_monday() as usize].to_string()
            }
            "quarter" => quarter.to_string(),
            "quarter_abbr" => match self.locale.language.as_str() {
                "fr" | "es" | "it" | "pt" => format!("T{}", quarter),
                _ => format!("Q{}", quarter),
            },
            "quarter_name" => self.quarter_name(quarter),
            "time" | "time_medium" => self.format_time(&dt, Length::Medium),
            "time_short" => self.format_time(&dt, Length::Short),
            "time_long" => self.format_time(&dt, Length::Long),
            "time_full" => self.format_time(&dt, Length::Full),
            _ => self.format_date(&dt, Length::Medium),
        })
    }

    fn name(&self) -> &str {
        "DateFormatter"
    }
}

/// `GMT`, `GMT+1`, `GMT-5:30`; the long form pads to `GMT+01:00`.
pub(crate) fn gmt_label(offset: &FixedOffset, long: bool) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "GMT".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes_total = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes_total / 60, minutes_total % 60);

    match (long, minutes) {
        (true, _) => format!("GMT{}{:02}:{:02}", sign, hours, minutes),
        (false, 0) => format!("GMT{}{}", sign, hours),
        (false, _) => format!("GMT{}{}:{:02}", sign, hours, minutes),
    }
}
