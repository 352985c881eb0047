//! Strategy command implementation
//!
//! Evaluates a preset or hand-built multi-leg strategy over the configured
//! spot window and reports its cost, current metrics, and profile.

use pricer_risk::strategy::{
    MarketContext, PresetStrategy, ProfilePoint, Strategy, StrategyError, StrategyLeg,
    StrategyProfile,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{num, render, Table};
use crate::Result;

/// Strategy inputs taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct StrategyArgs {
    /// Preset name or slug
    pub preset: Option<String>,
    /// Extra legs as `direction:type:strike[:quantity]`
    pub legs: Vec<String>,
    /// ATM strike for the preset; defaults to the configured strike
    pub atm_strike: Option<f64>,
}

/// Evaluated strategy.
#[derive(Debug, Serialize)]
pub struct StrategyReport {
    pub name: String,
    pub current_spot: f64,
    pub context: MarketContext,
    pub legs: Vec<StrategyLeg>,
    pub warning: Option<String>,
    pub initial_cost: f64,
    pub current: ProfilePoint,
    pub max_value: Option<ProfilePoint>,
    pub min_value: Option<ProfilePoint>,
    pub profile: StrategyProfile,
}

/// Builds the strategy described by `args`.
pub fn build_strategy(config: &CliConfig, args: &StrategyArgs) -> Result<(String, Strategy)> {
    let context = MarketContext::new(
        config.defaults.rate,
        config.defaults.volatility,
        config.defaults.expiry,
    );
    let atm_strike = args.atm_strike.unwrap_or(config.defaults.strike);

    let (name, mut strategy) = match &args.preset {
        Some(preset) => {
            let preset: PresetStrategy = preset.parse()?;
            (
                preset.name().to_string(),
                Strategy::from_preset(preset, atm_strike, context),
            )
        }
        None => ("Custom".to_string(), Strategy::new(context)),
    };

    for spec in &args.legs {
        strategy.add_leg(spec.parse()?);
    }

    if strategy.legs().is_empty() {
        return Err(StrategyError::EmptyStrategy.into());
    }

    Ok((name, strategy))
}

impl StrategyReport {
    /// Evaluates `strategy` at the configured spot and sweep.
    pub fn new(config: &CliConfig, name: String, strategy: &Strategy) -> Self {
        let warning = strategy.validate().err().map(|e| {
            warn!(error = %e, "Strategy has invalid legs; they are skipped");
            e.to_string()
        });

        let spot = config.defaults.spot;
        let grid = config.sweep.grid(spot);
        let profile = strategy.evaluate(spot, grid.points());

        Self {
            name,
            current_spot: spot,
            context: *strategy.context(),
            legs: strategy.legs().to_vec(),
            warning,
            initial_cost: profile.initial_cost,
            current: profile.current_metrics(spot),
            max_value: profile.max_value().copied(),
            min_value: profile.min_value().copied(),
            profile,
        }
    }
}

fn cost_label(initial_cost: f64) -> &'static str {
    if initial_cost < 0.0 {
        "net debit"
    } else {
        "net credit"
    }
}

fn table(report: &StrategyReport) -> String {
    let mut out = format!(
        "{} at spot {}\n",
        report.name,
        num(report.current_spot)
    );

    let mut legs = Table::new(["#", "Direction", "Type", "Strike", "Qty"]);
    for (i, leg) in report.legs.iter().enumerate() {
        legs.add_row([
            (i + 1).to_string(),
            leg.direction.to_string(),
            leg.option_type.to_string(),
            num(leg.strike),
            leg.quantity.to_string(),
        ]);
    }
    out.push_str(&legs.render());

    let c = &report.current;
    let mut summary = Table::new(["Metric", "Value"]);
    summary.add_row([
        format!("Initial cost ({})", cost_label(report.initial_cost)),
        num(report.initial_cost),
    ]);
    summary.add_row(["P&L now".to_string(), num(c.total_value)]);
    summary.add_row(["Delta".to_string(), num(c.total_delta)]);
    summary.add_row(["Gamma".to_string(), num(c.total_gamma)]);
    summary.add_row(["Theta (per day)".to_string(), num(c.total_theta)]);
    summary.add_row(["Vega (per vol pt)".to_string(), num(c.total_vega)]);
    if let Some(max) = &report.max_value {
        summary.add_row([
            "Best P&L in window".to_string(),
            format!("{} @ {}", num(max.total_value), num(max.spot)),
        ]);
    }
    if let Some(min) = &report.min_value {
        summary.add_row([
            "Worst P&L in window".to_string(),
            format!("{} @ {}", num(min.total_value), num(min.spot)),
        ]);
    }
    out.push_str(&summary.render());

    let mut profile = Table::new(["Spot", "P&L", "Delta", "Gamma", "Theta", "Vega"]);
    for p in &report.profile.profile {
        profile.add_row([
            num(p.spot),
            num(p.total_value),
            num(p.total_delta),
            num(p.total_gamma),
            num(p.total_theta),
            num(p.total_vega),
        ]);
    }
    out.push_str(&profile.render());

    if let Some(warning) = &report.warning {
        out.push_str(&format!("warning: {}\n", warning));
    }
    out
}

/// Render the strategy command output.
pub fn render_strategy(config: &CliConfig, args: &StrategyArgs) -> Result<String> {
    let (name, strategy) = build_strategy(config, args)?;
    let report = StrategyReport::new(config, name, &strategy);
    render(&report, config.output, table)
}

/// Run the strategy command
pub fn run(config: &CliConfig, args: &StrategyArgs) -> Result<()> {
    info!(
        preset = args.preset.as_deref().unwrap_or("custom"),
        extra_legs = args.legs.len(),
        "Evaluating strategy"
    );
    print!("{}", render_strategy(config, args)?);
    info!("Strategy evaluation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::CliError;
    use approx::assert_relative_eq;

    fn preset(name: &str) -> StrategyArgs {
        StrategyArgs {
            preset: Some(name.to_string()),
            ..StrategyArgs::default()
        }
    }

    #[test]
    fn test_build_preset() {
        let (name, strategy) = build_strategy(&CliConfig::default(), &preset("iron-condor")).unwrap();
        assert_eq!(name, "Iron Condor");
        assert_eq!(strategy.legs().len(), 4);
        assert_eq!(strategy.legs()[0].strike, 90.0);
    }

    #[test]
    fn test_build_preset_with_atm_and_extra_leg() {
        let args = StrategyArgs {
            preset: Some("long straddle".to_string()),
            legs: vec!["short:call:130:2".to_string()],
            atm_strike: Some(120.0),
        };
        let (_, strategy) = build_strategy(&CliConfig::default(), &args).unwrap();
        assert_eq!(strategy.legs().len(), 3);
        assert_eq!(strategy.legs()[0].strike, 120.0);
        assert_eq!(strategy.legs()[2].quantity, 2);
    }

    #[test]
    fn test_build_errors() {
        let config = CliConfig::default();
        assert!(matches!(
            build_strategy(&config, &StrategyArgs::default()),
            Err(CliError::Strategy(StrategyError::EmptyStrategy))
        ));
        assert!(matches!(
            build_strategy(&config, &preset("butterfly")),
            Err(CliError::Strategy(StrategyError::UnknownPreset(_)))
        ));
        let args = StrategyArgs {
            legs: vec!["long:call".to_string()],
            ..StrategyArgs::default()
        };
        assert!(build_strategy(&config, &args).is_err());
    }

    #[test]
    fn test_report_long_call_flat_now() {
        let config = CliConfig::default();
        let args = StrategyArgs {
            legs: vec!["long:call:100:1".to_string()],
            ..StrategyArgs::default()
        };
        let (name, strategy) = build_strategy(&config, &args).unwrap();
        let report = StrategyReport::new(&config, name, &strategy);

        assert_eq!(report.name, "Custom");
        assert_eq!(report.current.spot, 100.0);
        assert_relative_eq!(report.current.total_value, 0.0, epsilon = 1e-12);
        assert_relative_eq!(report.initial_cost, -10.4506, epsilon = 1e-4);
        assert!(report.warning.is_none());
    }

    #[test]
    fn test_invalid_leg_is_reported_and_skipped() {
        let config = CliConfig::default();
        let args = StrategyArgs {
            legs: vec!["long:call:100:1".to_string(), "long:put:100:0".to_string()],
            ..StrategyArgs::default()
        };
        let (name, strategy) = build_strategy(&config, &args).unwrap();
        let report = StrategyReport::new(&config, name, &strategy);

        assert!(report.warning.as_deref().unwrap_or("").contains("Invalid leg 1"));
        assert_relative_eq!(report.initial_cost, -10.4506, epsilon = 1e-4);
    }

    #[test]
    fn test_render_json() {
        let mut config = CliConfig::default();
        config.output = OutputFormat::Json;
        config.sweep.steps = 5;
        let out = render_strategy(&config, &preset("collar")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "Collar");
        assert_eq!(value["legs"][0]["direction"], "long");
        assert!(value["profile"]["profile"].as_array().is_some());
    }

    #[test]
    fn test_render_table() {
        let mut config = CliConfig::default();
        config.sweep.steps = 5;
        let out = render_strategy(&config, &preset("short-straddle")).unwrap();
        assert!(out.starts_with("Short Straddle at spot 100.0000"));
        assert!(out.contains("net credit"));
    }
}
