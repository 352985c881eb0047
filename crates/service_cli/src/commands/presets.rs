//! Presets command implementation
//!
//! Lists the preset strategies with their legs around the configured strike.

use pricer_risk::strategy::{PresetStrategy, StrategyLeg};
use serde::Serialize;

use crate::config::CliConfig;
use crate::output::{render, Table};
use crate::Result;

/// One preset as listed.
#[derive(Debug, Serialize)]
pub struct PresetEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub legs: Vec<StrategyLeg>,
}

/// All presets around `atm_strike`.
pub fn entries(atm_strike: f64) -> Vec<PresetEntry> {
    PresetStrategy::ALL
        .iter()
        .map(|preset| PresetEntry {
            slug: preset.slug(),
            name: preset.name(),
            description: preset.description(),
            legs: preset.legs(atm_strike),
        })
        .collect()
}

fn table(entries: &[PresetEntry]) -> String {
    let mut table = Table::new(["Slug", "Name", "Legs", "Description"]);
    for entry in entries {
        let legs: Vec<String> = entry.legs.iter().map(|l| l.to_string()).collect();
        table.add_row([
            entry.slug.to_string(),
            entry.name.to_string(),
            legs.join(", "),
            entry.description.to_string(),
        ]);
    }
    table.render()
}

/// Render the presets command output.
pub fn render_presets(config: &CliConfig) -> Result<String> {
    render(&entries(config.defaults.strike), config.output, |list| table(list))
}

/// Run the presets command
pub fn run(config: &CliConfig) -> Result<()> {
    print!("{}", render_presets(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_all_presets() {
        let list = entries(100.0);
        assert_eq!(list.len(), 15);
        assert_eq!(list[0].slug, "long-straddle");
        assert_eq!(list[14].legs.len(), 2);
    }

    #[test]
    fn test_render_table_lists_slugs() {
        let out = render_presets(&CliConfig::default()).unwrap();
        for preset in PresetStrategy::ALL {
            assert!(out.contains(preset.slug()));
        }
        assert!(out.contains("Long Call x1 @ 95"));
    }
}
