//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Errors from option parameter validation
//!
//! The pricing engine itself never fails; these errors exist for callers
//! that need to tell invalid input apart from a genuinely small result.

use thiserror::Error;

/// Parameter validation errors.
///
/// Provides structured error handling for option parameter checks
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `NonFinite`: A numeric field is NaN or infinite
/// - `NonPositive`: A field that must be strictly positive is not
/// - `UnknownOptionType`: An option type string could not be parsed
///
/// # Examples
/// ```
/// use pricer_core::types::ValidationError;
///
/// let err = ValidationError::NonPositive { field: "spot", value: -1.0 };
/// assert_eq!(format!("{}", err), "spot must be positive, got -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// Numeric field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Field must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Unrecognised option type string.
    #[error("Unknown option type: {0} (expected call or put)")]
    UnknownOptionType(String),
}

impl ValidationError {
    /// Returns the name of the field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NonFinite { field, .. } | ValidationError::NonPositive { field, .. } => {
                Some(*field)
            }
            ValidationError::UnknownOptionType(_) => None,
        }
    }
}

/// Checks that `value` is finite.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

/// Checks that `value` is finite and strictly positive.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositive { field, value })
    }
}
