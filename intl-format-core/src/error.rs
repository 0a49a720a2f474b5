//! Error types for message formatting

use crate::ValueKind;
use thiserror::Error;

/// Errors raised by the format engine.
///
/// Every variant aborts the whole call; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntlFormatError {
    /// A placeholder references a value that was not supplied.
    #[error(
        "Placeholder \"{placeholder}\" references value {index}, but only {available} value(s) were given"
    )]
    ArgumentIndexOutOfRange {
        placeholder: String,
        index: usize,
        available: usize,
    },

    /// More values were supplied than any placeholder references.
    #[error("{supplied} value(s) were given, but the template only references {referenced}")]
    SurplusArguments { supplied: usize, referenced: usize },

    /// Explicit argument indices start at 1.
    #[error("Invalid type specifier index in \"{placeholder}\": indices start at 1")]
    InvalidSpecifierIndex { placeholder: String },

    /// A formatter rejected the value it was asked to render.
    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),
}

impl IntlFormatError {
    /// Numeric error code.
    ///
    /// Index errors use 10 (out of range), 20 (surplus) and 30 (invalid
    /// index); value errors report their own code.
    pub fn code(&self) -> u16 {
        match self {
            Self::ArgumentIndexOutOfRange { .. } => 10,
            Self::SurplusArguments { .. } => 20,
            Self::InvalidSpecifierIndex { .. } => 30,
            Self::InvalidValue(inner) => inner.code(),
        }
    }

    /// Whether the error comes from placeholder/argument validation.
    pub fn is_index_error(&self) -> bool {
        !matches!(self, Self::InvalidValue(_))
    }

    /// The formatter error, if this is one.
    pub fn as_value_error(&self) -> Option<&InvalidValueError> {
        match self {
            Self::InvalidValue(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Errors raised by formatters while rendering a single value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidValueError {
    /// The value kind is not accepted for this specifier.
    #[error("Invalid type \"{actual}\" of value. Allowed types: \"{}\".", join_kinds(.allowed))]
    InvalidValueType {
        actual: ValueKind,
        allowed: Vec<ValueKind>,
    },

    /// A callback produced something other than text.
    #[error("Invalid return type \"{actual}\" for type specifier \"{specifier}\". Expected \"text\".")]
    InvalidReturnType { specifier: String, actual: ValueKind },
}

impl InvalidValueError {
    /// Build an [`InvalidValueError::InvalidValueType`].
    pub fn invalid_value_type(actual: ValueKind, allowed: &[ValueKind]) -> Self {
        Self::InvalidValueType {
            actual,
            allowed: allowed.to_vec(),
        }
    }

    /// Build an [`InvalidValueError::InvalidReturnType`].
    pub fn invalid_return_type(specifier: impl Into<String>, actual: ValueKind) -> Self {
        Self::InvalidReturnType {
            specifier: specifier.into(),
            actual,
        }
    }

    /// Numeric error code: 10 for value type, 30 for return type.
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidValueType { .. } => 10,
            Self::InvalidReturnType { .. } => 30,
        }
    }
}

fn join_kinds(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(ValueKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_type_message() {
        let err = InvalidValueError::invalid_value_type(
            ValueKind::Text,
            &[ValueKind::Integer, ValueKind::Float],
        );
        assert_eq!(
            err.to_string(),
            "Invalid type \"text\" of value. Allowed types: \"integer, float\"."
        );
        assert_eq!(err.code(), 10);
    }

    #[test]
    fn test_value_errors_pass_through_unchanged() {
        let inner = InvalidValueError::invalid_return_type("a", ValueKind::List);
        let outer = IntlFormatError::from(inner.clone());

        assert_eq!(outer.to_string(), inner.to_string());
        assert_eq!(outer.code(), 30);
        assert_eq!(outer.as_value_error(), Some(&inner));
        assert!(!outer.is_index_error());
    }

    #[test]
    fn test_index_error_codes() {
        let out_of_range = IntlFormatError::ArgumentIndexOutOfRange {
            placeholder: "%date".into(),
            index: 2,
            available: 1,
        };
        let surplus = IntlFormatError::SurplusArguments {
            supplied: 1,
            referenced: 0,
        };
        let invalid = IntlFormatError::InvalidSpecifierIndex {
            placeholder: "%0$world".into(),
        };

        assert_eq!(out_of_range.code(), 10);
        assert_eq!(surplus.code(), 20);
        assert_eq!(invalid.code(), 30);
        assert!(invalid.is_index_error());
    }
}
