//! Decay command implementation
//!
//! Reports price and theta for each calendar day left until expiry.

use pricer_core::types::{years_to_days, OptionParameters, OptionType};
use pricer_models::analytical::{time_decay, DecayPoint};
use serde::Serialize;
use tracing::info;

use super::check_params;
use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::Result;

/// Time decay from today to one day before expiry.
#[derive(Debug, Serialize)]
pub struct DecayReport {
    pub parameters: OptionParameters,
    pub warning: Option<String>,
    pub days_to_expiry: u32,
    pub points: Vec<DecayPoint>,
}

impl DecayReport {
    /// Evaluates the decay schedule for `option_type`.
    pub fn new(config: &CliConfig, option_type: OptionType) -> Self {
        let params = config.defaults.params(option_type);
        Self {
            parameters: params,
            warning: check_params(&params),
            days_to_expiry: years_to_days(params.expiry),
            points: time_decay(&params),
        }
    }
}

fn table(report: &DecayReport) -> String {
    let mut table = Table::new(["Days", "Price", "Theta"]);
    for p in &report.points {
        table.add_row([p.days.to_string(), num(p.price), num(p.theta)]);
    }

    let mut out = format!(
        "{} strike {}, {} days to expiry\n",
        report.parameters.option_type,
        num(report.parameters.strike),
        report.days_to_expiry
    );
    out.push_str(&table.render());
    if let Some(warning) = &report.warning {
        out.push_str(&format!("warning: {}\n", warning));
    }
    out
}

/// Render the decay command output.
pub fn render_decay(config: &CliConfig, option_type: OptionType) -> Result<String> {
    let report = DecayReport::new(config, option_type);
    render(&report, config.output, table)
}

/// Run the decay command
pub fn run(config: &CliConfig, option_type: OptionType) -> Result<()> {
    info!(%option_type, "Building time decay schedule");
    print!("{}", render_decay(config, option_type)?);
    Ok(())
}
