//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report, render it in the configured format, and print it.

pub mod curve;
pub mod decay;
pub mod presets;
pub mod price;
pub mod strategy;
pub mod volatility;

use pricer_core::types::OptionParameters;
use tracing::warn;

/// Logs a warning when `params` would not give meaningful results.
///
/// Returns the validation message so reports can carry it.
pub(crate) fn check_params(params: &OptionParameters) -> Option<String> {
    match params.validate() {
        Ok(()) => None,
        Err(e) => {
            warn!(error = %e, "Parameters are invalid; output is sentinel-derived");
            Some(e.to_string())
        }
    }
}
