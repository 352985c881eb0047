//! CLI error types.

use pricer_core::types::ValidationError;
use pricer_risk::strategy::StrategyError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `optionlab` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Option parameters were rejected.
    #[error("Invalid parameters: {0}")]
    Validation(#[from] ValidationError),

    /// Strategy could not be built.
    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    /// Command-line argument was not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialisation failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = CliError::InvalidArgument("--leg is empty".to_string());
        assert_eq!(err.to_string(), "Invalid argument: --leg is empty");
    }

    #[test]
    fn test_from_strategy_error() {
        let err: CliError = StrategyError::UnknownPreset("x".to_string()).into();
        assert_eq!(err.to_string(), "Strategy error: Unknown preset strategy: x");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().starts_with("Invalid log level: loud"));
    }
}
