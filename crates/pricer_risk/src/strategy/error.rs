//! Strategy error types.
//!
//! This module provides structured error types for strategy construction
//! using `thiserror` for derivation. Evaluation itself never fails; these
//! errors serve callers that want to reject bad input up front.

use pricer_core::types::ValidationError;
use thiserror::Error;

/// Errors that can occur while building or validating a strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    /// A leg failed validation.
    #[error("Invalid leg {index}: {reason}")]
    InvalidLeg {
        /// Position of the leg in the strategy.
        index: usize,
        /// What was wrong with it.
        #[source]
        reason: ValidationError,
    },

    /// A leg specification string could not be parsed.
    #[error("Invalid leg specification '{0}': expected direction:type:strike[:quantity]")]
    InvalidLegSpec(String),

    /// Strategy has no legs.
    #[error("Strategy has no legs")]
    EmptyStrategy,

    /// Preset name not recognised.
    #[error("Unknown preset strategy: {0}")]
    UnknownPreset(String),

    /// Parameter validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
