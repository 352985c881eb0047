//! optionlab - Black-Scholes analytics from the command line
//!
//! # Commands
//!
//! - `optionlab price` - Price and Greeks for one option
//! - `optionlab curve` - Price and Greeks across a spot window
//! - `optionlab volatility` - Volatility scenario comparison
//! - `optionlab decay` - Price and theta per day to expiry
//! - `optionlab strategy --preset iron-condor` - Multi-leg strategy profile
//! - `optionlab presets` - List preset strategies
//!
//! # Configuration
//!
//! Values come from defaults, then `optionlab.toml` (or `--config`), then
//! `OPTIONLAB_*` environment variables, then command-line flags.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the pricer
//! crates and owns logging setup, configuration, and output formatting.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_core::types::OptionType;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::strategy::StrategyArgs;
use config::{build_config, CliArgs};

/// optionlab - Black-Scholes option analytics
#[derive(Parser)]
#[command(name = "optionlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format) [default: optionlab.toml if present]
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Underlying spot price
    #[arg(long, global = true, allow_negative_numbers = true)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long, global = true, allow_negative_numbers = true)]
    strike: Option<f64>,

    /// Risk-free rate (decimal, e.g. 0.05)
    #[arg(long, global = true, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Volatility (decimal, e.g. 0.2)
    #[arg(long, global = true, allow_negative_numbers = true)]
    volatility: Option<f64>,

    /// Time to expiry in years
    #[arg(long, global = true, allow_negative_numbers = true)]
    expiry: Option<f64>,

    /// Sweep steps per half-width
    #[arg(long, global = true)]
    steps: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option and show its Greeks
    Price {
        /// Option type (call, put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: OptionType,
    },

    /// Price and Greeks across the spot window
    Curve {
        /// Option type for the Greeks (call, put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: OptionType,
    },

    /// Compare volatility scenarios
    Volatility {
        /// Option type (call, put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: OptionType,

        /// Scenario volatility in percent; repeat for several [default: 10, current, 50]
        #[arg(long = "vol", value_name = "PERCENT")]
        vols: Vec<f64>,
    },

    /// Price and theta for each day to expiry
    Decay {
        /// Option type (call, put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: OptionType,
    },

    /// Evaluate a multi-leg strategy
    Strategy {
        /// Preset strategy (see `optionlab presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Leg as direction:type:strike[:quantity], e.g. long:call:105:1
        #[arg(short, long = "leg", value_name = "SPEC")]
        legs: Vec<String>,

        /// ATM strike for the preset [default: --strike]
        #[arg(long)]
        atm_strike: Option<f64>,
    },

    /// List preset strategies
    Presets,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            output: cli.output.clone(),
            spot: cli.spot,
            strike: cli.strike,
            rate: cli.rate,
            volatility: cli.volatility,
            expiry: cli.expiry,
            steps: cli.steps,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!(
        log_level = %config.log_level,
        output = %config.output,
        spot = config.defaults.spot,
        strike = config.defaults.strike,
        rate = config.defaults.rate,
        volatility = config.defaults.volatility,
        expiry = config.defaults.expiry,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Price { option_type } => commands::price::run(&config, option_type),
        Commands::Curve { option_type } => commands::curve::run(&config, option_type),
        Commands::Volatility { option_type, vols } => {
            commands::volatility::run(&config, option_type, &vols)
        }
        Commands::Decay { option_type } => commands::decay::run(&config, option_type),
        Commands::Strategy {
            preset,
            legs,
            atm_strike,
        } => commands::strategy::run(
            &config,
            &StrategyArgs {
                preset,
                legs,
                atm_strike,
            },
        ),
        Commands::Presets => commands::presets::run(&config),
    }
}
