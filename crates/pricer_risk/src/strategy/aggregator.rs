//! Strategy evaluation across a spot sweep.
//!
//! # Algorithm
//!
//! 1. Drop legs that fail [`StrategyLeg::validate`].
//! 2. Initial cost at the current spot:
//!    `Σ cost_basis_sign · price · quantity` (negative = net debit).
//! 3. For every sweep spot S':
//!    `total_value = initial_cost + Σ mark_to_market_sign · price(S') · quantity`,
//!    and the same signed sum for delta, gamma, theta and vega.
//! 4. Drop sweep points whose spot or any leg output is non-finite.
//!
//! Output order follows the input sweep order.

use pricer_core::math::nearest_index;
use pricer_models::analytical::{BlackScholes, Greeks};
use tracing::{debug, trace};

use super::context::MarketContext;
use super::leg::StrategyLeg;
use crate::parallel::{map_with_config, ParallelConfig};

/// Portfolio value and aggregate Greeks at one spot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProfilePoint {
    /// Underlying price.
    pub spot: f64,
    /// Profit and loss relative to the opening cash flow.
    pub total_value: f64,
    /// Aggregate delta.
    pub total_delta: f64,
    /// Aggregate gamma.
    pub total_gamma: f64,
    /// Aggregate theta per calendar day.
    pub total_theta: f64,
    /// Aggregate vega per vol point.
    pub total_vega: f64,
}

impl ProfilePoint {
    fn is_finite(&self) -> bool {
        self.total_value.is_finite()
            && self.total_delta.is_finite()
            && self.total_gamma.is_finite()
            && self.total_theta.is_finite()
            && self.total_vega.is_finite()
    }
}

/// Result of evaluating a strategy.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrategyProfile {
    /// Net premium at the current spot: negative is a debit, positive a credit.
    pub initial_cost: f64,
    /// Swept points in input order.
    pub profile: Vec<ProfilePoint>,
}

impl StrategyProfile {
    /// Number of swept points kept.
    pub fn len(&self) -> usize {
        self.profile.len()
    }

    /// Returns whether no sweep point was kept.
    pub fn is_empty(&self) -> bool {
        self.profile.is_empty()
    }

    /// Point whose spot is closest to `spot`. The first point wins ties.
    pub fn nearest(&self, spot: f64) -> Option<&ProfilePoint> {
        let spots: Vec<f64> = self.profile.iter().map(|p| p.spot).collect();
        nearest_index(&spots, spot).map(|i| &self.profile[i])
    }

    /// The [`nearest`](Self::nearest) point, or all zeros when there is none.
    pub fn current_metrics(&self, spot: f64) -> ProfilePoint {
        self.nearest(spot).copied().unwrap_or_default()
    }

    /// Point with the highest total value.
    pub fn max_value(&self) -> Option<&ProfilePoint> {
        self.profile
            .iter()
            .max_by(|a, b| a.total_value.total_cmp(&b.total_value))
    }

    /// Point with the lowest total value.
    pub fn min_value(&self) -> Option<&ProfilePoint> {
        self.profile
            .iter()
            .min_by(|a, b| a.total_value.total_cmp(&b.total_value))
    }
}

/// Evaluates a strategy with the default [`ParallelConfig`].
///
/// # Arguments
///
/// * `legs` - Positions; invalid ones are skipped
/// * `context` - Rate, volatility and expiry shared by all legs
/// * `current_spot` - Spot at which the initial cost is struck
/// * `sweep_spots` - Spots to evaluate, any count and order
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_risk::strategy::{evaluate_strategy, MarketContext, StrategyLeg};
///
/// let straddle = [
///     StrategyLeg::long(OptionType::Call, 100.0, 1),
///     StrategyLeg::long(OptionType::Put, 100.0, 1),
/// ];
/// let profile = evaluate_strategy(&straddle, &MarketContext::default(), 100.0, &[60.0, 100.0, 140.0]);
///
/// // Long volatility: loses at the strike, gains in the wings
/// assert!(profile.profile[1].total_value < 0.0);
/// assert!(profile.profile[0].total_value > 0.0);
/// assert!(profile.profile[2].total_value > 0.0);
/// ```
pub fn evaluate_strategy(
    legs: &[StrategyLeg],
    context: &MarketContext,
    current_spot: f64,
    sweep_spots: &[f64],
) -> StrategyProfile {
    evaluate_strategy_with(
        legs,
        context,
        current_spot,
        sweep_spots,
        &ParallelConfig::default(),
    )
}

/// Evaluates a strategy, parallelising the sweep according to `config`.
///
/// The result does not depend on `config`.
pub fn evaluate_strategy_with(
    legs: &[StrategyLeg],
    context: &MarketContext,
    current_spot: f64,
    sweep_spots: &[f64],
    config: &ParallelConfig,
) -> StrategyProfile {
    let active = active_legs(legs);
    let initial_cost = initial_cost(&active, context, current_spot);

    let points = map_with_config(sweep_spots, config, |&spot| {
        evaluate_point(&active, context, initial_cost, spot)
    });

    let profile: Vec<ProfilePoint> = points.into_iter().flatten().collect();

    trace!(
        legs = legs.len(),
        active_legs = active.len(),
        sweep = sweep_spots.len(),
        kept = profile.len(),
        initial_cost,
        "strategy evaluated"
    );

    StrategyProfile {
        initial_cost,
        profile,
    }
}

/// Net premium of the valid legs at `spot`.
pub fn initial_cost(legs: &[StrategyLeg], context: &MarketContext, spot: f64) -> f64 {
    legs.iter()
        .filter(|leg| leg.is_valid())
        .map(|leg| {
            let price = BlackScholes::new(leg.params(spot, context)).price();
            leg.direction.cost_basis_sign() * price * leg.size()
        })
        .sum()
}

fn active_legs(legs: &[StrategyLeg]) -> Vec<StrategyLeg> {
    legs.iter()
        .enumerate()
        .filter_map(|(index, leg)| match leg.validate() {
            Ok(()) => Some(*leg),
            Err(error) => {
                debug!(index, %leg, %error, "skipping invalid strategy leg");
                None
            }
        })
        .collect()
}

fn evaluate_point(
    legs: &[StrategyLeg],
    context: &MarketContext,
    initial_cost: f64,
    spot: f64,
) -> Option<ProfilePoint> {
    if !spot.is_finite() {
        debug!(spot, "excluding non-finite sweep spot");
        return None;
    }

    let mut value = 0.0;
    let mut greeks = Greeks::ZERO;
    for leg in legs {
        let bs = BlackScholes::new(leg.params(spot, context));
        let price = bs.price();
        let leg_greeks = bs.greeks();
        if !price.is_finite() || !leg_greeks.is_finite() {
            debug!(spot, %leg, "excluding sweep point with non-finite leg output");
            return None;
        }

        let weight = leg.direction.mark_to_market_sign() * leg.size();
        value += weight * price;
        greeks += leg_greeks * weight;
    }

    let point = ProfilePoint {
        spot,
        total_value: initial_cost + value,
        total_delta: greeks.delta,
        total_gamma: greeks.gamma,
        total_theta: greeks.theta,
        total_vega: greeks.vega,
    };

    if point.is_finite() {
        Some(point)
    } else {
        debug!(spot, "excluding sweep point with non-finite totals");
        None
    }
}
