//! Volatility command implementation
//!
//! Compares price and vega at the current spot across volatility scenarios,
//! and prices each scenario across the configured spot window.

use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::{
    volatility_comparison, volatility_curves, VolatilityCurve, VolatilityImpact,
    VolatilityScenario,
};
use serde::Serialize;
use tracing::info;

use super::check_params;
use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::{CliError, Result};

/// Volatility scenario comparison.
#[derive(Debug, Serialize)]
pub struct VolatilityReport {
    pub parameters: OptionParameters,
    pub warning: Option<String>,
    pub impact: Vec<VolatilityImpact>,
    pub curves: Vec<VolatilityCurve>,
}

/// Scenarios from explicit volatilities (percent), or the standard
/// low/current/high set when none are given.
pub fn scenarios(current: f64, percents: &[f64]) -> Result<Vec<VolatilityScenario>> {
    if percents.is_empty() {
        return Ok(VolatilityScenario::standard(current));
    }
    percents
        .iter()
        .map(|&pct| {
            if pct.is_finite() && pct > 0.0 {
                Ok(VolatilityScenario::new(format!("Vol {}%", pct), pct / 100.0))
            } else {
                Err(CliError::InvalidArgument(format!(
                    "volatility must be a positive percentage, got {}",
                    pct
                )))
            }
        })
        .collect()
}

impl VolatilityReport {
    /// Evaluates the scenarios for `option_type`.
    pub fn new(config: &CliConfig, option_type: OptionType, scenarios: &[VolatilityScenario]) -> Self {
        let params = config.defaults.params(option_type);
        let grid = config.sweep.grid(params.spot);
        Self {
            parameters: params,
            warning: check_params(&params),
            impact: volatility_comparison(&params, scenarios),
            curves: volatility_curves(&params, scenarios, grid.points()),
        }
    }
}

fn table(report: &VolatilityReport) -> String {
    let mut impact = Table::new(["Scenario", "Volatility", "Price", "Vega"]);
    for row in &report.impact {
        impact.add_row([
            row.label.clone(),
            num(row.volatility),
            num(row.price),
            num(row.vega),
        ]);
    }

    let mut headers = vec!["Spot".to_string()];
    headers.extend(report.curves.iter().map(|c| c.label.clone()));
    let mut curves = Table::new(headers);
    let n_points = report.curves.first().map_or(0, |c| c.points.len());
    for i in 0..n_points {
        let mut row = vec![num(report.curves[0].points[i].spot)];
        row.extend(report.curves.iter().map(|c| num(c.points[i].price)));
        curves.add_row(row);
    }

    let mut out = format!(
        "{} at spot {}\n",
        report.parameters.option_type,
        num(report.parameters.spot)
    );
    out.push_str(&impact.render());
    out.push_str(&curves.render());
    if let Some(warning) = &report.warning {
        out.push_str(&format!("warning: {}\n", warning));
    }
    out
}

/// Render the volatility command output.
pub fn render_volatility(
    config: &CliConfig,
    option_type: OptionType,
    percents: &[f64],
) -> Result<String> {
    let scenarios = scenarios(config.defaults.volatility, percents)?;
    let report = VolatilityReport::new(config, option_type, &scenarios);
    render(&report, config.output, table)
}

/// Run the volatility command
pub fn run(config: &CliConfig, option_type: OptionType, percents: &[f64]) -> Result<()> {
    info!(%option_type, scenarios = percents.len(), "Comparing volatility scenarios");
    print!("{}", render_volatility(config, option_type, percents)?);
    Ok(())
}
