//! Multi-leg option strategies.
//!
//! This module provides:
//! - `leg`: [`StrategyLeg`] and [`Direction`] with its two sign conventions
//! - `context`: [`MarketContext`] shared by all legs
//! - `aggregator`: [`evaluate_strategy`] producing a [`StrategyProfile`]
//! - `presets`: [`PresetStrategy`] definitions
//! - `error`: [`StrategyError`]
//!
//! [`Strategy`] bundles legs with their context for callers that prefer an
//! owned value over free functions.

pub mod aggregator;
pub mod context;
pub mod error;
pub mod leg;
pub mod presets;

pub use aggregator::{
    evaluate_strategy, evaluate_strategy_with, initial_cost, ProfilePoint, StrategyProfile,
};
pub use context::MarketContext;
pub use error::StrategyError;
pub use leg::{Direction, StrategyLeg};
pub use presets::PresetStrategy;

use crate::parallel::ParallelConfig;

/// Ordered legs sharing one market context.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_risk::strategy::{MarketContext, PresetStrategy, Strategy, StrategyLeg};
///
/// let condor = Strategy::from_preset(PresetStrategy::IronCondor, 100.0, MarketContext::default());
/// assert_eq!(condor.legs().len(), 4);
///
/// let custom = Strategy::new(MarketContext::default())
///     .with_leg(StrategyLeg::long(OptionType::Call, 100.0, 1))
///     .with_leg(StrategyLeg::short(OptionType::Call, 110.0, 1));
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strategy {
    legs: Vec<StrategyLeg>,
    context: MarketContext,
}

impl Strategy {
    /// Creates an empty strategy.
    pub fn new(context: MarketContext) -> Self {
        Self {
            legs: Vec::new(),
            context,
        }
    }

    /// Creates a strategy from existing legs.
    pub fn with_legs(legs: Vec<StrategyLeg>, context: MarketContext) -> Self {
        Self { legs, context }
    }

    /// Creates a preset strategy around `atm_strike`.
    pub fn from_preset(preset: PresetStrategy, atm_strike: f64, context: MarketContext) -> Self {
        Self::with_legs(preset.legs(atm_strike), context)
    }

    /// Appends a leg.
    pub fn add_leg(&mut self, leg: StrategyLeg) {
        self.legs.push(leg);
    }

    /// Appends a leg (builder style).
    pub fn with_leg(mut self, leg: StrategyLeg) -> Self {
        self.add_leg(leg);
        self
    }

    /// Removes and returns the leg at `index`, if any.
    pub fn remove_leg(&mut self, index: usize) -> Option<StrategyLeg> {
        (index < self.legs.len()).then(|| self.legs.remove(index))
    }

    /// The legs in insertion order.
    pub fn legs(&self) -> &[StrategyLeg] {
        &self.legs
    }

    /// The shared market context.
    pub fn context(&self) -> &MarketContext {
        &self.context
    }

    /// Replaces the market context.
    pub fn set_context(&mut self, context: MarketContext) {
        self.context = context;
    }

    /// Checks that there is at least one leg and every leg is valid.
    ///
    /// Evaluation does not require this; it skips invalid legs instead.
    ///
    /// # Errors
    /// - [`StrategyError::EmptyStrategy`] without legs
    /// - [`StrategyError::InvalidLeg`] for the first invalid leg
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.legs.is_empty() {
            return Err(StrategyError::EmptyStrategy);
        }
        for (index, leg) in self.legs.iter().enumerate() {
            leg.validate()
                .map_err(|reason| StrategyError::InvalidLeg { index, reason })?;
        }
        Ok(())
    }

    /// Net premium at `current_spot`.
    pub fn initial_cost(&self, current_spot: f64) -> f64 {
        initial_cost(&self.legs, &self.context, current_spot)
    }

    /// Evaluates the strategy over `sweep_spots`.
    pub fn evaluate(&self, current_spot: f64, sweep_spots: &[f64]) -> StrategyProfile {
        evaluate_strategy(&self.legs, &self.context, current_spot, sweep_spots)
    }

    /// Evaluates the strategy with explicit parallel settings.
    pub fn evaluate_with(
        &self,
        current_spot: f64,
        sweep_spots: &[f64],
        config: &ParallelConfig,
    ) -> StrategyProfile {
        evaluate_strategy_with(&self.legs, &self.context, current_spot, sweep_spots, config)
    }
}
