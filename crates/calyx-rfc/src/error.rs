use thiserror::Error;

use crate::rfc::xcal::parse::ParseError;

/// Errors raised by the object model and the xCal codec
#[derive(Error, Debug)]
pub enum RfcError {
    /// Malformed scalar construction or an invalid field combination.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Numeric field outside its domain.
    #[error("Range error: {field} must be within {min}..={max}, got {value}")]
    RangeError {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    CoreError(#[from] calyx_core::error::CoreError),
}

impl RfcError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub(crate) fn range(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Self::RangeError {
            field,
            value: value.into(),
            min,
            max,
        }
    }
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;

/// Checks `value` against an inclusive range, reporting `field` on failure.
pub(crate) fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> RfcResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RfcError::range(field, value, min, max))
    }
}
