//! Argument values handed to formatters.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

/// A single template argument.
///
/// Formatters match on the variants they support and reject the rest with
/// [`InvalidValueError::InvalidValueType`](crate::InvalidValueError).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Null,
    /// A point in time with its UTC offset
    DateTime(DateTime<FixedOffset>),
    /// A time zone given by its UTC offset
    TimeZone(FixedOffset),
    Error(ErrorValue),
    List(Vec<Value>),
}

/// Discriminant of a [`Value`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Float,
    Text,
    Boolean,
    Null,
    DateTime,
    TimeZone,
    Error,
    List,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::DateTime => "datetime",
            ValueKind::TimeZone => "timezone",
            ValueKind::Error => "error",
            ValueKind::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::TimeZone(_) => ValueKind::TimeZone,
            Value::Error(_) => ValueKind::Error,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Numeric view of the value.
    ///
    /// Integers, floats and text that parses as a finite number qualify;
    /// booleans do not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Text view of the value, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => Ok(()),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::TimeZone(tz) => write!(f, "{}", tz),
            Value::Error(e) => f.write_str(&e.message),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

/// A captured error: message, numeric code, origin and cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorValue {
    pub message: String,
    pub code: i64,
    pub file: String,
    pub line: u32,
    /// Messages of the source chain, outermost cause first
    pub trace: Vec<String>,
}

impl ErrorValue {
    /// Create an error value located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            message: message.into(),
            code: 0,
            file: location.file().to_string(),
            line: location.line(),
            trace: Vec::new(),
        }
    }

    /// Capture an error and its `source()` chain, located at the caller.
    #[track_caller]
    pub fn capture(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut value = Self::new(err.to_string());
        let mut source = err.source();
        while let Some(cause) = source {
            value.trace.push(cause.to_string());
            source = cause.source();
        }
        value
    }

    /// Set the numeric code.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Override the origin.
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    /// The cause chain as numbered lines (`#0 ...`), ending with `{main}`.
    pub fn trace_string(&self) -> String {
        let mut lines: Vec<String> = self
            .trace
            .iter()
            .enumerate()
            .map(|(i, cause)| format!("#{} {}", i, cause))
            .collect();
        lines.push(format!("#{} {{main}}", self.trace.len()));
        lines.join("\n")
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Integer)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.fixed_offset())
    }
}

impl From<FixedOffset> for Value {
    fn from(tz: FixedOffset) -> Self {
        Value::TimeZone(tz)
    }
}

impl From<ErrorValue> for Value {
    fn from(e: ErrorValue) -> Self {
        Value::Error(e)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            other => Value::Text(other.to_string()),
        }
    }
}

impl Value {
    /// A date-time from a Unix timestamp in seconds, in UTC.
    pub fn timestamp(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Value::from)
    }
}

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```
/// use intl_format_core::{Value, values};
///
/// let args = values!["island", 42, 1.5];
/// assert_eq!(args[1], Value::Integer(42));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
