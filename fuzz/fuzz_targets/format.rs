//! Fuzz target for end-to-end formatting with the standard formatters.

#![no_main]

use arbitrary::Arbitrary;
use intl_format_core::{IntlFormat, Value};
use intl_format_formatters::{Locale, standard_formatters};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Null,
}

impl From<FuzzValue> for Value {
    fn from(value: FuzzValue) -> Self {
        match value {
            FuzzValue::Integer(i) => Value::Integer(i),
            FuzzValue::Float(f) => Value::Float(f),
            FuzzValue::Text(s) => Value::Text(s),
            FuzzValue::Boolean(b) => Value::Boolean(b),
            FuzzValue::Null => Value::Null,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzFormat {
    locale: String,
    template: String,
    values: Vec<FuzzValue>,
}

fuzz_target!(|data: FuzzFormat| {
    let locale = Locale::parse(&data.locale).unwrap_or_default();
    let intl = IntlFormat::new(standard_formatters(&locale));
    let values: Vec<Value> = data.values.into_iter().map(Value::from).collect();

    // Errors are fine; panics are not.
    let _ = intl.format(&data.template, &values);
});
