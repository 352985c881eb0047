//! Curve command implementation
//!
//! Sweeps spot across the configured window and reports call/put prices,
//! intrinsic values, and the Greeks of the selected option type.

use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::{greeks_curve, price_curve, GreeksPoint, PricePoint};
use serde::Serialize;
use tracing::info;

use super::check_params;
use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::Result;

/// Price and Greeks curves over one spot grid.
#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub parameters: OptionParameters,
    pub warning: Option<String>,
    pub prices: Vec<PricePoint>,
    pub greeks: Vec<GreeksPoint>,
}

impl CurveReport {
    /// Evaluates both curves over the configured sweep around the spot.
    pub fn new(config: &CliConfig, option_type: OptionType) -> Self {
        let params = config.defaults.params(option_type);
        let grid = config.sweep.grid(params.spot);
        Self {
            parameters: params,
            warning: check_params(&params),
            prices: price_curve(&params, grid.points()),
            greeks: greeks_curve(&params, grid.points()),
        }
    }
}

fn table(report: &CurveReport) -> String {
    let mut table = Table::new([
        "Spot", "Call", "Put", "Call Intr", "Put Intr", "Delta", "Gamma", "Theta", "Vega", "Rho",
    ]);
    for (p, g) in report.prices.iter().zip(report.greeks.iter()) {
        table.add_row([
            num(p.spot),
            num(p.call),
            num(p.put),
            num(p.call_intrinsic),
            num(p.put_intrinsic),
            num(g.greeks.delta),
            num(g.greeks.gamma),
            num(g.greeks.theta),
            num(g.greeks.vega),
            num(g.greeks.rho),
        ]);
    }

    let mut out = format!(
        "Price curve, strike {} (Greeks for {})\n",
        num(report.parameters.strike),
        report.parameters.option_type
    );
    out.push_str(&table.render());
    if let Some(warning) = &report.warning {
        out.push_str(&format!("warning: {}\n", warning));
    }
    out
}

/// Render the curve command output.
pub fn render_curve(config: &CliConfig, option_type: OptionType) -> Result<String> {
    let report = CurveReport::new(config, option_type);
    render(&report, config.output, table)
}

/// Run the curve command
pub fn run(config: &CliConfig, option_type: OptionType) -> Result<()> {
    info!(%option_type, steps = config.sweep.steps, "Building price and Greeks curves");
    print!("{}", render_curve(config, option_type)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() {
        let mut config = CliConfig::default();
        config.sweep.steps = 10;
        let report = CurveReport::new(&config, OptionType::Put);

        // max(100 * 0.6, 30) = 60 either side in steps of 6
        assert_eq!(report.prices.len(), 21);
        assert_eq!(report.greeks.len(), 21);
        assert!(report.prices.iter().any(|p| p.spot == 100.0));
        assert!(report.greeks.iter().all(|g| g.greeks.delta <= 0.0));
    }

    #[test]
    fn test_table_has_row_per_point() {
        let mut config = CliConfig::default();
        config.sweep.steps = 4;
        let out = render_curve(&config, OptionType::Call).unwrap();
        // title + 3 border lines + header + rows
        let report = CurveReport::new(&config, OptionType::Call);
        assert_eq!(out.lines().count(), 5 + report.prices.len());
    }
}
