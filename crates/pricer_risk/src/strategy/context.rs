//! Market inputs shared by every leg of a strategy.

use pricer_core::types::{OptionParameters, OptionType};

/// Rate, volatility and expiry common to all legs.
///
/// The spot varies across the sweep and the strike belongs to each leg, so
/// neither lives here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketContext {
    /// Continuously compounded annual risk-free rate.
    pub rate: f64,
    /// Annualised volatility (decimal).
    pub volatility: f64,
    /// Years to expiry.
    pub expiry: f64,
}

impl MarketContext {
    /// Creates a market context.
    pub fn new(rate: f64, volatility: f64, expiry: f64) -> Self {
        Self {
            rate,
            volatility,
            expiry,
        }
    }

    /// Takes rate, volatility and expiry from a full parameter set.
    pub fn from_params(params: &OptionParameters) -> Self {
        Self::new(params.rate, params.volatility, params.expiry)
    }

    /// Builds pricing inputs for one leg at one spot.
    #[inline]
    pub fn option_params(&self, spot: f64, strike: f64, option_type: OptionType) -> OptionParameters {
        OptionParameters::new(
            spot,
            strike,
            self.rate,
            self.volatility,
            self.expiry,
            option_type,
        )
    }
}

impl Default for MarketContext {
    fn default() -> Self {
        Self::from_params(&OptionParameters::default())
    }
}
