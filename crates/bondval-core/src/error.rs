//! Error types for record mapping.
//!
//! Rate parsing never fails, and valuation is total over any mapped record,
//! so the only failures in the core are the ones raised while turning a raw
//! row into a [`BondRecord`](crate::record::BondRecord). Each of them is fatal
//! for that one row only.

use thiserror::Error;

/// A specialized Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Error raised while mapping a raw row to a bond record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A closed-vocabulary field held a literal outside its vocabulary.
    #[error("Unknown {field} value: '{value}'")]
    UnknownEnumValue {
        /// Column name of the offending field.
        field: &'static str,
        /// The text as it appeared in the row.
        value: String,
    },

    /// A numeric field could not be parsed.
    #[error("Malformed {field} value: '{value}'")]
    MalformedNumber {
        /// Column name of the offending field.
        field: &'static str,
        /// The text as it appeared in the row.
        value: String,
    },

    /// A field parsed but fails the optional range checks.
    #[error("{field} out of range: '{value}' - {reason}")]
    OutOfRange {
        /// Column name of the offending field.
        field: &'static str,
        /// The text as it appeared in the row.
        value: String,
        /// Which bound was violated.
        reason: String,
    },
}

impl MappingError {
    /// Creates an unknown enum value error.
    #[must_use]
    pub fn unknown_enum(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field,
            value: value.into(),
        }
    }

    /// Creates a malformed number error.
    #[must_use]
    pub fn malformed_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedNumber {
            field,
            value: value.into(),
        }
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the column name the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::UnknownEnumValue { field, .. }
            | Self::MalformedNumber { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }

    /// Returns the offending text.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::UnknownEnumValue { value, .. }
            | Self::MalformedNumber { value, .. }
            | Self::OutOfRange { value, .. } => value,
        }
    }
}
