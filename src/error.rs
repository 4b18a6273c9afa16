//! Error types for value construction and literal parsing.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// A value was outside the range its type accepts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("{corner} must be greater than or equal to 0.0, got {value}")]
    NegativeCorner { corner: &'static str, value: f32 },

    #[error("{corner} must be a number, got NaN")]
    NanCorner { corner: &'static str },

    #[error("elevation must range between 0 and 24, got {0}")]
    Elevation(i64),
}

/// A literal could not be read as the requested type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("invalid {kind}: empty input")]
    Empty { kind: &'static str },

    #[error("invalid {kind}: expected {expected} values, found {found}")]
    TokenCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid {kind}: {token:?} is not a number")]
    InvalidNumber {
        kind: &'static str,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid {kind}: {token:?} is not an integer")]
    InvalidInteger {
        kind: &'static str,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid {kind}")]
    OutOfRange {
        kind: &'static str,
        #[source]
        source: RangeError,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_out_of_range_keeps_source() {
        let err = FormatError::OutOfRange {
            kind: "Elevation",
            source: RangeError::Elevation(25),
        };
        assert_eq!(err.to_string(), "invalid Elevation");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("elevation must range between 0 and 24, got 25")
        );
    }

    #[test]
    fn test_error_from_conversions() {
        let err: Error = RangeError::Elevation(-1).into();
        assert!(matches!(err, Error::Range(RangeError::Elevation(-1))));
        let err: Error = FormatError::Empty { kind: "Shape" }.into();
        assert_eq!(err.to_string(), "invalid Shape: empty input");
    }
}
