//! Number Formatting
//!
//! Locale-aware rendering of plain numbers, integers, percentages,
//! currencies, ordinals and durations.

use crate::Locale;
use crate::symbols::{add_grouping, number_separators};
use intl_format_core::{Formatter, InvalidValueError, Value, ValueKind};

const NUMERIC: [ValueKind; 2] = [ValueKind::Integer, ValueKind::Float];

/// Largest `N` claimed by `.<N>number`.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Read a finite numeric argument or fail with the numeric kinds.
pub(crate) fn numeric(value: &Value) -> Result<f64, InvalidValueError> {
    value
        .as_f64()
        .filter(|n| n.is_finite())
        .ok_or_else(|| InvalidValueError::invalid_value_type(value.kind(), &NUMERIC))
}

/// Render `n` with grouping and between `min_fraction` and `max_fraction`
/// fraction digits (trailing zeros beyond the minimum are dropped).
pub(crate) fn decimal(n: f64, min_fraction: usize, max_fraction: usize, locale: &Locale) -> String {
    let (decimal_sep, group_sep) = number_separators(locale);
    let min_fraction = min_fraction.min(MAX_FRACTION_DIGITS);
    let max_fraction = max_fraction.clamp(min_fraction, MAX_FRACTION_DIGITS);

    let formatted = format!("{:.*}", max_fraction, n.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));

    let significant = fraction.trim_end_matches('0').len().max(min_fraction);
    let fraction = &fraction[..significant.min(fraction.len())];

    let mut out = String::with_capacity(formatted.len() + 4);
    if n.is_sign_negative() && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(&add_grouping(integer, group_sep));
    if !fraction.is_empty() {
        out.push_str(decimal_sep);
        out.push_str(fraction);
    }
    out
}

// ============================================================================
// NumberFormatter
// ============================================================================

/// Handles `number`, `integer`, `percent`, `currency`, `ordinal` and
/// `duration`.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    locale: Locale,
    currency: Option<String>,
}

impl NumberFormatter {
    pub const SPECIFIERS: [&'static str; 6] =
        ["number", "integer", "percent", "currency", "ordinal", "duration"];

    /// Create a number formatter for a locale.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            currency: None,
        }
    }

    /// Use a fixed ISO 4217 currency instead of the locale default.
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into().to_uppercase());
        self
    }

    /// The currency used by `%currency`.
    pub fn currency(&self) -> String {
        self.currency
            .clone()
            .unwrap_or_else(|| default_currency(&self.locale).to_string())
    }

    fn format_currency(&self, amount: f64) -> String {
        let code = self.currency();
        let symbol = currency_symbol(&code);
        let formatted = decimal(amount.abs(), 2, 2, &self.locale);
        let sign = if amount < 0.0 && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            "-"
        } else {
            ""
        };

        if symbol_before_amount(&self.locale) {
            format!("{}{}{}", sign, symbol, formatted)
        } else {
            format!("{}{} {}", sign, formatted, symbol)
        }
    }

    fn format_percent(&self, n: f64) -> String {
        let number = decimal((n * 100.0).round_ties_even(), 0, 0, &self.locale);
        match self.locale.language.as_str() {
            "de" | "es" | "sv" | "da" | "no" | "nb" | "fi" => format!("{}\u{a0}%", number),
            "fr" => format!("{}\u{202f}%", number),
            _ => format!("{}%", number),
        }
    }

    fn format_ordinal(&self, n: f64) -> String {
        let n = n.round_ties_even() as i64;
        match self.locale.language.as_str() {
            "en" => {
                let suffix = match (n.rem_euclid(10), n.rem_euclid(100)) {
                    (_, 11..=13) => "th",
                    (1, _) => "st",
                    (2, _) => "nd",
                    (3, _) => "rd",
                    _ => "th",
                };
                format!("{}{}", n, suffix)
            }
            "fr" if n == 1 => "1er".to_string(),
            "fr" => format!("{}e", n),
            "es" | "it" | "pt" => format!("{}.º", n),
            _ => format!("{}.", n),
        }
    }

    fn format_duration(&self, seconds: f64) -> String {
        let total = seconds.abs().round() as u64;
        let sign = if seconds < 0.0 && total > 0 { "-" } else { "" };
        let (hours, minutes, secs) = (total / 3600, total % 3600 / 60, total % 60);

        if hours > 0 {
            format!("{}{}:{:02}:{:02}", sign, hours, minutes, secs)
        } else {
            format!("{}{}:{:02}", sign, minutes, secs)
        }
    }
}

impl Formatter for NumberFormatter {
    fn claims(&self, specifier: &str) -> bool {
        Self::SPECIFIERS.iter().any(|s| *s == specifier)
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        let n = numeric(value)?;

        Ok(match specifier {
            "integer" => decimal(n.round_ties_even(), 0, 0, &self.locale),
            "percent" => self.format_percent(n),
            "currency" => self.format_currency(n),
            "ordinal" => self.format_ordinal(n),
            "duration" => self.format_duration(n),
            _ => decimal(n, 0, 3, &self.locale),
        })
    }

    fn name(&self) -> &str {
        "NumberFormatter"
    }
}

// ============================================================================
// PrecisionNumberFormatter
// ============================================================================

/// Handles `.<N>number`: exactly `N` fraction digits.
#[derive(Debug, Clone)]
pub struct PrecisionNumberFormatter {
    locale: Locale,
}

impl PrecisionNumberFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Fraction digits encoded in `specifier`, if it has the `.<N>number` shape
    /// with `N` at most [`MAX_FRACTION_DIGITS`].
    pub fn fraction_digits(specifier: &str) -> Option<usize> {
        let digits = specifier.strip_prefix('.')?.strip_suffix("number")?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits
            .parse()
            .ok()
            .filter(|n| *n <= MAX_FRACTION_DIGITS)
    }
}

impl Formatter for PrecisionNumberFormatter {
    fn claims(&self, specifier: &str) -> bool {
        Self::fraction_digits(specifier).is_some()
    }

    fn render(&self, specifier: &str, value: &Value) -> Result<String, InvalidValueError> {
        let n = numeric(value)?;
        let digits = Self::fraction_digits(specifier).unwrap_or(0);
        Ok(decimal(n, digits, digits, &self.locale))
    }

    fn name(&self) -> &str {
        "PrecisionNumberFormatter"
    }
}

// ============================================================================
// Currency Helpers
// ============================================================================

fn default_currency(locale: &Locale) -> &'static str {
    match locale.region.as_deref() {
        Some("US") => "USD",
        Some("GB") => "GBP",
        Some("CH") | Some("LI") => "CHF",
        Some("JP") => "JPY",
        Some("CA") => "CAD",
        Some("AU") => "AUD",
        Some("BR") => "BRL",
        Some("MX") => "MXN",
        Some("DE" | "AT" | "FR" | "BE" | "ES" | "IT" | "NL" | "PT" | "FI" | "IE" | "LU") => "EUR",
        _ => match locale.language.as_str() {
            "de" | "fr" | "es" | "it" | "nl" | "pt" | "fi" => "EUR",
            "ja" => "JPY",
            _ => "USD",
        },
    }
}

/// Whether the currency symbol precedes the amount.
fn symbol_before_amount(locale: &Locale) -> bool {
    !matches!(
        locale.language.as_str(),
        "de" | "fr" | "es" | "it" | "pt" | "nl" | "da" | "sv" | "no" | "fi" | "pl" | "cs" | "sk"
            | "hu" | "ro" | "bg" | "el" | "ru" | "uk" | "vi"
    ) || locale.region_is("CH")
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "KRW" => "₩",
        "INR" => "₹",
        "RUB" => "₽",
        "BRL" => "R$",
        "CAD" => "CA$",
        "AUD" => "A$",
        "MXN" => "MX$",
        "PLN" => "zł",
        "CZK" => "Kč",
        "SEK" | "NOK" | "DKK" => "kr",
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de() -> NumberFormatter {
        NumberFormatter::new(Locale::de_de())
    }

    fn en() -> NumberFormatter {
        NumberFormatter::new(Locale::en_us())
    }

    #[test]
    fn test_number_and_integer() {
        assert_eq!(de().render("number", &Value::from(1000.1)).unwrap(), "1.000,1");
        assert_eq!(de().render("integer", &Value::from(1000.1)).unwrap(), "1.000");
        assert_eq!(de().render("integer", &Value::from(1001)).unwrap(), "1.001");
        assert_eq!(de().render("integer", &Value::from("1001")).unwrap(), "1.001");
        assert_eq!(en().render("number", &Value::from(-1234.5678)).unwrap(), "-1,234.568");
        assert_eq!(en().render("number", &Value::from(-0.0001)).unwrap(), "0");
    }

    #[test]
    fn test_percent_and_currency() {
        assert_eq!(en().render("percent", &Value::from(1)).unwrap(), "100%");
        assert_eq!(de().render("percent", &Value::from(0.5)).unwrap(), "50\u{a0}%");
        assert_eq!(de().render("currency", &Value::from(1000.1)).unwrap(), "1.000,10 €");
        assert_eq!(en().render("currency", &Value::from(-9.5)).unwrap(), "-$9.50");

        let gbp = en().with_currency("gbp");
        assert_eq!(gbp.currency(), "GBP");
        assert_eq!(gbp.render("currency", &Value::from(3)).unwrap(), "£3.00");
    }

    #[test]
    fn test_ordinal() {
        let expected = [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (11, "11th"), (22, "22nd"), (113, "113th")];
        for (n, text) in expected {
            assert_eq!(en().render("ordinal", &Value::from(n)).unwrap(), text);
        }
        assert_eq!(de().render("ordinal", &Value::from(3)).unwrap(), "3.");
        let fr = NumberFormatter::new(Locale::fr_fr());
        assert_eq!(fr.render("ordinal", &Value::from(1)).unwrap(), "1er");
        assert_eq!(fr.render("ordinal", &Value::from(2)).unwrap(), "2e");
    }

    #[test]
    fn test_duration() {
        assert_eq!(en().render("duration", &Value::from(61)).unwrap(), "1:01");
        assert_eq!(en().render("duration", &Value::from(3725)).unwrap(), "1:02:05");
        assert_eq!(en().render("duration", &Value::from(-5)).unwrap(), "-0:05");
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        let invalid = [
            Value::from("foo"),
            Value::from(true),
            Value::Null,
            Value::from(vec![1, 2, 3]),
        ];
        for value in invalid {
            let err = en().render("integer", &value).unwrap_err();
            assert_eq!(err.code(), 10);
            assert_eq!(
                err,
                InvalidValueError::invalid_value_type(value.kind(), &NUMERIC)
            );
        }
    }

    #[test]
    fn test_claims() {
        for specifier in NumberFormatter::SPECIFIERS {
            assert!(en().claims(specifier));
        }
        assert!(!en().claims("int"));
        assert!(!en().claims(".2number"));
    }

    #[test]
    fn test_precision_number() {
        let formatter = PrecisionNumberFormatter::new(Locale::de_de());

        assert!(formatter.claims(".3number"));
        assert!(formatter.claims(".0number"));
        assert!(!formatter.claims("number"));
        assert!(!formatter.claims(".number"));
        assert!(!formatter.claims(".2numbers"));
        assert!(!formatter.claims(".-2number"));

        assert_eq!(formatter.render(".3number", &Value::from(1234.5)).unwrap(), "1.234,500");
        assert_eq!(formatter.render(".0number", &Value::from(1234.5)).unwrap(), "1.234");
        assert_eq!(
            formatter.render(".2number", &Value::from("x")).unwrap_err().code(),
            10
        );
    }

    #[test]
    fn test_precision_number_bounds() {
        let formatter = PrecisionNumberFormatter::new(Locale::en_us());

        assert!(formatter.claims(".100number"));
        assert!(!formatter.claims(".101number"));
        assert!(!formatter.claims(".70000number"));
        assert!(!formatter.claims(".99999999999999999999number"));

        let out = formatter.render(".100number", &Value::from(1)).unwrap();
        assert_eq!(out, format!("1.{}", "0".repeat(100)));

        // Called directly with an oversized specifier it falls back to zero digits.
        assert_eq!(formatter.render(".70000number", &Value::from(1.5)).unwrap(), "2");
    }

    #[test]
    fn test_rejects_non_finite_floats() {
        for n in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            for specifier in NumberFormatter::SPECIFIERS {
                let err = en().render(specifier, &Value::Float(n)).unwrap_err();
                assert_eq!(err, InvalidValueError::invalid_value_type(ValueKind::Float, &NUMERIC));
            }
            let precision = PrecisionNumberFormatter::new(Locale::en_us());
            assert!(precision.render(".2number", &Value::Float(n)).is_err());
        }
    }
}
