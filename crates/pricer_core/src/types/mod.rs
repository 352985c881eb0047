//! Core option and time types.
//!
//! This module provides:
//! - `option`: `OptionType` and `OptionParameters`, the inputs of every evaluation
//! - `time`: Calendar-day conversions for time to expiry
//! - `error`: Structured validation errors
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`], [`OptionParameters`] from `option`
//! - [`ValidationError`] from `error`
//! - [`DAYS_PER_YEAR`], [`days_to_years`], [`years_to_days`] from `time`

pub mod error;
pub mod option;
pub mod time;

// Re-export commonly used types at module level
pub use error::ValidationError;
pub use option::{OptionParameters, OptionType};
pub use time::{days_to_years, years_to_days, DAYS_PER_YEAR};
