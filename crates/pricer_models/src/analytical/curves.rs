//! Single-option analytic sweeps.
//!
//! These helpers evaluate the Black-Scholes engine repeatedly while varying
//! one input:
//! - spot: [`price_curve`], [`greeks_curve`]
//! - volatility: [`volatility_comparison`], [`volatility_curves`]
//! - days to expiry: [`time_decay`]
//!
//! All sweeps preserve the order of the supplied spots.

use pricer_core::types::{days_to_years, years_to_days, OptionParameters, OptionType};

use super::black_scholes::BlackScholes;
use super::greeks::Greeks;

/// Low volatility scenario used by [`VolatilityScenario::standard`].
pub const LOW_VOLATILITY: f64 = 0.10;

/// High volatility scenario used by [`VolatilityScenario::standard`].
pub const HIGH_VOLATILITY: f64 = 0.50;

/// Longest schedule [`time_decay`] produces (100 years of days).
pub const MAX_DECAY_DAYS: u32 = 36_500;

/// Call and put values at one spot, with their intrinsic values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricePoint {
    /// Underlying price.
    pub spot: f64,
    /// Black-Scholes call price.
    pub call: f64,
    /// Black-Scholes put price.
    pub put: f64,
    /// max(S - K, 0)
    pub call_intrinsic: f64,
    /// max(K - S, 0)
    pub put_intrinsic: f64,
}

/// Price and Greeks at one spot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GreeksPoint {
    /// Underlying price.
    pub spot: f64,
    /// Option price.
    pub price: f64,
    /// Greeks at this spot.
    pub greeks: Greeks,
}

/// A named volatility level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VolatilityScenario {
    /// Display label.
    pub label: String,
    /// Annualised volatility (decimal).
    pub volatility: f64,
}

impl VolatilityScenario {
    /// Creates a scenario.
    pub fn new(label: impl Into<String>, volatility: f64) -> Self {
        Self {
            label: label.into(),
            volatility,
        }
    }

    /// Low (10%), current, and high (50%) volatility.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::curves::VolatilityScenario;
    ///
    /// let scenarios = VolatilityScenario::standard(0.25);
    /// assert_eq!(scenarios.len(), 3);
    /// assert_eq!(scenarios[1].volatility, 0.25);
    /// ```
    pub fn standard(current: f64) -> Vec<Self> {
        vec![
            Self::new("Low Vol (10%)", LOW_VOLATILITY),
            Self::new("Current Vol", current),
            Self::new("High Vol (50%)", HIGH_VOLATILITY),
        ]
    }
}

/// Price and vega at the current spot under one volatility scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VolatilityImpact {
    /// Scenario label.
    pub label: String,
    /// Scenario volatility.
    pub volatility: f64,
    /// Option price.
    pub price: f64,
    /// Vega per vol point.
    pub vega: f64,
}

/// Spot/price pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpotValue {
    /// Underlying price.
    pub spot: f64,
    /// Option price.
    pub price: f64,
}

/// Price curve for one volatility scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VolatilityCurve {
    /// Scenario label.
    pub label: String,
    /// Scenario volatility.
    pub volatility: f64,
    /// Prices across the spot sweep.
    pub points: Vec<SpotValue>,
}

/// Price and theta with a given number of calendar days left.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecayPoint {
    /// Calendar days to expiry.
    pub days: u32,
    /// Same, in years.
    pub expiry: f64,
    /// Option price.
    pub price: f64,
    /// Theta per calendar day.
    pub theta: f64,
}

/// Call and put prices plus intrinsic values across `spots`.
///
/// The option type of `base` is ignored; both sides are priced.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::analytical::curves::price_curve;
///
/// let curve = price_curve(&OptionParameters::default(), &[90.0, 100.0, 110.0]);
/// assert_eq!(curve.len(), 3);
/// assert_eq!(curve[2].call_intrinsic, 10.0);
/// assert_eq!(curve[0].put_intrinsic, 10.0);
/// ```
pub fn price_curve(base: &OptionParameters, spots: &[f64]) -> Vec<PricePoint> {
    spots
        .iter()
        .map(|&spot| {
            let bs = BlackScholes::new(base.with_spot(spot));
            PricePoint {
                spot,
                call: bs.price_call(),
                put: bs.price_put(),
                call_intrinsic: OptionType::Call.intrinsic(spot, base.strike),
                put_intrinsic: OptionType::Put.intrinsic(spot, base.strike),
            }
        })
        .collect()
}

/// Price and Greeks for the option type of `base` across `spots`.
pub fn greeks_curve(base: &OptionParameters, spots: &[f64]) -> Vec<GreeksPoint> {
    spots
        .iter()
        .map(|&spot| {
            let bs = BlackScholes::new(base.with_spot(spot));
            GreeksPoint {
                spot,
                price: bs.price(),
                greeks: bs.greeks(),
            }
        })
        .collect()
}

/// Price and vega at the spot of `base` for each volatility scenario.
pub fn volatility_comparison(
    base: &OptionParameters,
    scenarios: &[VolatilityScenario],
) -> Vec<VolatilityImpact> {
    scenarios
        .iter()
        .map(|scenario| {
            let bs = BlackScholes::new(base.with_volatility(scenario.volatility));
            VolatilityImpact {
                label: scenario.label.clone(),
                volatility: scenario.volatility,
                price: bs.price(),
                vega: bs.vega(),
            }
        })
        .collect()
}

/// One price curve across `spots` per volatility scenario.
pub fn volatility_curves(
    base: &OptionParameters,
    scenarios: &[VolatilityScenario],
    spots: &[f64],
) -> Vec<VolatilityCurve> {
    scenarios
        .iter()
        .map(|scenario| {
            let params = base.with_volatility(scenario.volatility);
            let points = spots
                .iter()
                .map(|&spot| SpotValue {
                    spot,
                    price: BlackScholes::new(params.with_spot(spot)).price(),
                })
                .collect();
            VolatilityCurve {
                label: scenario.label.clone(),
                volatility: scenario.volatility,
                points,
            }
        })
        .collect()
}

/// Price and theta for each calendar day from the current days to expiry
/// (`round(T·365)`) down to one day.
///
/// Returns an empty vector when the expiry rounds to zero days. Longer
/// expiries start from [`MAX_DECAY_DAYS`].
///
/// # Examples
/// ```
/// use pricer_core::types::{days_to_years, OptionParameters};
/// use pricer_models::analytical::curves::time_decay;
///
/// let params = OptionParameters::default().with_expiry(days_to_years(30));
/// let decay = time_decay(&params);
/// assert_eq!(decay.len(), 30);
/// assert_eq!(decay[0].days, 30);
/// assert_eq!(decay[29].days, 1);
/// ```
pub fn time_decay(base: &OptionParameters) -> Vec<DecayPoint> {
    let days = years_to_days(base.expiry).min(MAX_DECAY_DAYS);
    (1..=days)
        .rev()
        .map(|days| {
            let expiry = days_to_years(days);
            let bs = BlackScholes::new(base.with_expiry(expiry));
            DecayPoint {
                days,
                expiry,
                price: bs.price(),
                theta: bs.theta(),
            }
        })
        .collect()
}
