//! Price command implementation
//!
//! Prices a single European option and reports its Greeks.

use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::{BlackScholes, Greeks};
use serde::Serialize;
use tracing::info;

use super::check_params;
use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::Result;

/// Price and Greeks for one parameter set.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub parameters: OptionParameters,
    pub warning: Option<String>,
    pub d1: f64,
    pub d2: f64,
    pub price: f64,
    pub greeks: Greeks,
}

impl PriceReport {
    /// Evaluates `params`.
    pub fn new(params: OptionParameters) -> Self {
        let warning = check_params(&params);
        let bs = BlackScholes::new(params);
        Self {
            parameters: params,
            warning,
            d1: bs.d1(),
            d2: bs.d2(),
            price: bs.price(),
            greeks: bs.greeks(),
        }
    }
}

fn table(report: &PriceReport) -> String {
    let p = &report.parameters;
    let mut table = Table::new(["Quantity", "Value"]);
    table.add_row(["Type".to_string(), p.option_type.to_string()]);
    table.add_row(["Spot".to_string(), num(p.spot)]);
    table.add_row(["Strike".to_string(), num(p.strike)]);
    table.add_row(["Rate".to_string(), num(p.rate)]);
    table.add_row(["Volatility".to_string(), num(p.volatility)]);
    table.add_row(["Expiry (years)".to_string(), num(p.expiry)]);
    table.add_row(["d1".to_string(), num(report.d1)]);
    table.add_row(["d2".to_string(), num(report.d2)]);
    table.add_row(["Price".to_string(), num(report.price)]);
    table.add_row(["Delta".to_string(), num(report.greeks.delta)]);
    table.add_row(["Gamma".to_string(), num(report.greeks.gamma)]);
    table.add_row(["Theta (per day)".to_string(), num(report.greeks.theta)]);
    table.add_row(["Vega (per vol pt)".to_string(), num(report.greeks.vega)]);
    table.add_row(["Rho (per rate pt)".to_string(), num(report.greeks.rho)]);

    let mut out = table.render();
    if let Some(warning) = &report.warning {
        out.push_str(&format!("warning: {}\n", warning));
    }
    out
}

/// Render the price command output.
pub fn render_price(config: &CliConfig, option_type: OptionType) -> Result<String> {
    let report = PriceReport::new(config.defaults.params(option_type));
    render(&report, config.output, table)
}

/// Run the price command
pub fn run(config: &CliConfig, option_type: OptionType) -> Result<()> {
    info!(%option_type, "Pricing option");
    print!("{}", render_price(config, option_type)?);
    info!("Pricing complete");
    Ok(())
}
