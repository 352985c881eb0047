//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use pricer_core::math::SpotGrid;
use pricer_core::types::{OptionParameters, OptionType};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "optionlab.toml";

/// Prefix of all environment overrides.
pub const ENV_PREFIX: &str = "OPTIONLAB_";

/// Longest accepted expiry in years; bounds the daily decay schedule.
pub const MAX_EXPIRY_YEARS: f64 = 100.0;

/// Largest accepted `sweep.steps`; bounds the grid at `2 * steps + 1` points.
pub const MAX_SWEEP_STEPS: usize = 10_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

impl ConfigError {
    fn invalid(key: &str, value: impl ToString) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Market inputs used when a command does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketDefaults {
    /// Underlying price
    pub spot: f64,
    /// Strike (also the ATM strike of preset strategies)
    pub strike: f64,
    /// Risk-free rate (decimal)
    pub rate: f64,
    /// Volatility (decimal)
    pub volatility: f64,
    /// Years to expiry
    pub expiry: f64,
}

impl Default for MarketDefaults {
    fn default() -> Self {
        let p = OptionParameters::default();
        Self {
            spot: p.spot,
            strike: p.strike,
            rate: p.rate,
            volatility: p.volatility,
            expiry: p.expiry,
        }
    }
}

impl MarketDefaults {
    /// Pricing inputs for `option_type`.
    pub fn params(&self, option_type: OptionType) -> OptionParameters {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.expiry,
            option_type,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("expiry", self.expiry),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(key, value));
            }
        }
        if self.expiry > MAX_EXPIRY_YEARS {
            return Err(ConfigError::invalid("expiry", self.expiry));
        }
        Ok(())
    }
}

/// Spot sweep window: `[max(S - w, floor), S + w]` in `steps` steps, with
/// `w = max(S * width_fraction, min_half_width)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Half-width as a fraction of spot
    pub width_fraction: f64,
    /// Lower bound on the half-width
    pub min_half_width: f64,
    /// Steps per half-width
    pub steps: usize,
    /// Lowest spot included
    pub floor: f64,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            width_fraction: 0.6,
            min_half_width: 30.0,
            steps: 100,
            floor: 0.01,
        }
    }
}

impl SweepSettings {
    /// Grid around `spot`, always containing `spot` itself when it is at or
    /// above the floor.
    pub fn grid(&self, spot: f64) -> SpotGrid {
        let grid = SpotGrid::around(
            spot,
            self.width_fraction,
            self.min_half_width,
            self.steps,
            self.floor,
        );
        if spot >= self.floor {
            grid.with_point(spot)
        } else {
            grid
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width_fraction.is_finite() && self.width_fraction >= 0.0) {
            return Err(ConfigError::invalid("sweep.width_fraction", self.width_fraction));
        }
        if !(self.min_half_width.is_finite() && self.min_half_width >= 0.0) {
            return Err(ConfigError::invalid("sweep.min_half_width", self.min_half_width));
        }
        if self.steps == 0 || self.steps > MAX_SWEEP_STEPS {
            return Err(ConfigError::invalid("sweep.steps", self.steps));
        }
        if !(self.floor.is_finite() && self.floor >= 0.0) {
            return Err(ConfigError::invalid("sweep.floor", self.floor));
        }
        Ok(())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output: OutputFormat,
    /// Market inputs
    pub defaults: MarketDefaults,
    /// Spot sweep window
    pub sweep: SweepSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `OPTIONLAB_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by full variable name (e.g. `OPTIONLAB_SPOT`).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level.parse()?;
        }
        if let Some(output) = var("OUTPUT") {
            self.output = output.parse()?;
        }

        let defaults = &mut self.defaults;
        for (name, slot) in [
            ("SPOT", &mut defaults.spot),
            ("STRIKE", &mut defaults.strike),
            ("RATE", &mut defaults.rate),
            ("VOLATILITY", &mut defaults.volatility),
            ("EXPIRY", &mut defaults.expiry),
        ] {
            if let Some(raw) = var(name) {
                *slot = parse_value(&format!("{}{}", ENV_PREFIX, name), &raw)?;
            }
        }

        if let Some(raw) = var("SWEEP_STEPS") {
            self.sweep.steps = parse_value("OPTIONLAB_SWEEP_STEPS", &raw)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        }
        if let Some(output) = &cli.output {
            self.output = output.parse()?;
        }
        if let Some(spot) = cli.spot {
            self.defaults.spot = spot;
        }
        if let Some(strike) = cli.strike {
            self.defaults.strike = strike;
        }
        if let Some(rate) = cli.rate {
            self.defaults.rate = rate;
        }
        if let Some(volatility) = cli.volatility {
            self.defaults.volatility = volatility;
        }
        if let Some(expiry) = cli.expiry {
            self.defaults.expiry = expiry;
        }
        if let Some(steps) = cli.steps {
            self.sweep.steps = steps;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Market values only need to be finite here; non-positive inputs are
    /// reported by the commands themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.validate()?;
        self.sweep.validate()
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, raw))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path; `None` means the optional default file
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output: Option<String>,
    /// Spot override
    pub spot: Option<f64>,
    /// Strike override
    pub strike: Option<f64>,
    /// Rate override
    pub rate: Option<f64>,
    /// Volatility override
    pub volatility: Option<f64>,
    /// Expiry override
    pub expiry: Option<f64>,
    /// Sweep steps override
    pub steps: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, env: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_overrides(env)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn no_env() -> impl Fn(&str) -> Option<String> {
        env(&[])
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.defaults.spot, 100.0);
        assert_eq!(config.defaults.strike, 100.0);
        assert_eq!(config.defaults.rate, 0.05);
        assert_eq!(config.defaults.volatility, 0.2);
        assert_eq!(config.defaults.expiry, 1.0);
        assert_eq!(config.sweep, SweepSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(ConfigError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"
output = "json"

[defaults]
spot = 120.0
volatility = 0.35

[sweep]
steps = 40
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.defaults.spot, 120.0);
        assert_eq!(config.defaults.volatility, 0.35);
        // Unset keys keep their defaults
        assert_eq!(config.defaults.strike, 100.0);
        assert_eq!(config.sweep.steps, 40);
        assert_eq!(config.sweep.width_fraction, 0.6);
    }

    #[test]
    fn test_from_file_rejects_bad_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"loud\"").unwrap();
        assert!(matches!(
            CliConfig::from_file(file.path()),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/optionlab.toml")),
            ..CliArgs::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env()),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_overrides(env(&[
                ("OPTIONLAB_LOG_LEVEL", "warn"),
                ("OPTIONLAB_OUTPUT", "json"),
                ("OPTIONLAB_SPOT", "95.5"),
                ("OPTIONLAB_EXPIRY", " 0.25 "),
                ("OPTIONLAB_SWEEP_STEPS", "10"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.defaults.spot, 95.5);
        assert_eq!(config.defaults.expiry, 0.25);
        assert_eq!(config.sweep.steps, 10);
    }

    #[test]
    fn test_env_invalid_value() {
        let mut config = CliConfig::default();
        let err = config
            .apply_overrides(env(&[("OPTIONLAB_RATE", "five percent")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, "OPTIONLAB_RATE");
                assert_eq!(value, "five percent");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_priority_cli_over_env() {
        let cli = CliArgs {
            config_file: None,
            spot: Some(110.0),
            output: Some("json".to_string()),
            ..CliArgs::default()
        };
        let config = build_config_with(
            &cli,
            env(&[("OPTIONLAB_SPOT", "90"), ("OPTIONLAB_STRIKE", "105")]),
        )
        .unwrap();

        assert_eq!(config.defaults.spot, 110.0);
        assert_eq!(config.defaults.strike, 105.0);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_validation_rejects_non_finite_and_zero_steps() {
        let cli = CliArgs {
            volatility: Some(f64::NAN),
            ..CliArgs::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env()),
            Err(ConfigError::InvalidValue { .. })
        ));

        let cli = CliArgs {
            steps: Some(0),
            ..CliArgs::default()
        };
        assert!(build_config_with(&cli, no_env()).is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_expiry() {
        let cli = CliArgs {
            expiry: Some(1e9),
            ..CliArgs::default()
        };
        match build_config_with(&cli, no_env()) {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "expiry"),
            other => panic!("expected invalid expiry, got {:?}", other),
        }

        let cli = CliArgs {
            expiry: Some(MAX_EXPIRY_YEARS),
            ..CliArgs::default()
        };
        assert!(build_config_with(&cli, no_env()).is_ok());
    }

    #[test]
    fn test_validation_rejects_oversized_steps() {
        let cli = CliArgs {
            steps: Some(usize::MAX),
            ..CliArgs::default()
        };
        match build_config_with(&cli, no_env()) {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "sweep.steps"),
            other => panic!("expected invalid steps, got {:?}", other),
        }

        let overrides = env(&[("OPTIONLAB_SWEEP_STEPS", "1000000")]);
        assert!(build_config_with(&CliArgs::default(), overrides).is_err());

        let cli = CliArgs {
            steps: Some(MAX_SWEEP_STEPS),
            ..CliArgs::default()
        };
        assert!(build_config_with(&cli, no_env()).is_ok());
    }

    #[test]
    fn test_non_positive_market_values_allowed() {
        // Reported later by the command, not by configuration
        let cli = CliArgs {
            volatility: Some(0.0),
            ..CliArgs::default()
        };
        assert!(build_config_with(&cli, no_env()).is_ok());
    }

    #[test]
    fn test_sweep_grid_contains_spot() {
        let grid = SweepSettings::default().grid(97.3);
        assert!(grid.points().contains(&97.3));
        let grid = SweepSettings::default().grid(100.0);
        assert!(grid.points().contains(&100.0));
        assert!(grid.len() >= 201);
    }
}
