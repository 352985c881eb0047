//! Strategy legs and position direction.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::error::ensure_positive;
use pricer_core::types::{OptionParameters, OptionType, ValidationError};

use super::context::MarketContext;
use super::error::StrategyError;

/// Position direction.
///
/// A direction carries two sign conventions that are exact inverses of each
/// other:
/// - [`Direction::cost_basis_sign`]: cash flow when the position is opened
///   (paying premium is negative)
/// - [`Direction::mark_to_market_sign`]: contribution of the position's
///   current value to the portfolio
///
/// # Examples
/// ```
/// use pricer_risk::strategy::Direction;
///
/// assert_eq!(Direction::Long.cost_basis_sign(), -1.0);
/// assert_eq!(Direction::Long.mark_to_market_sign(), 1.0);
/// assert_eq!("sell".parse::<Direction>().unwrap(), Direction::Short);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Bought position
    #[default]
    Long,
    /// Sold (written) position
    Short,
}

impl Direction {
    /// Sign of the premium cash flow when opening: -1 Long, +1 Short.
    #[inline]
    pub fn cost_basis_sign(&self) -> f64 {
        match self {
            Direction::Long => -1.0,
            Direction::Short => 1.0,
        }
    }

    /// Sign of the position's value in the portfolio: +1 Long, -1 Short.
    #[inline]
    pub fn mark_to_market_sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "Long"),
            Direction::Short => write!(f, "Short"),
        }
    }
}

impl FromStr for Direction {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" | "l" => Ok(Direction::Long),
            "short" | "sell" | "s" => Ok(Direction::Short),
            _ => Err(StrategyError::InvalidLegSpec(s.to_string())),
        }
    }
}

/// One option position in a strategy.
///
/// Rate, volatility and expiry come from the shared [`MarketContext`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyLeg {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price, must be positive.
    pub strike: f64,
    /// Number of contracts, must be at least 1.
    pub quantity: u32,
    /// Long or short.
    pub direction: Direction,
}

impl StrategyLeg {
    /// Creates a leg.
    pub fn new(option_type: OptionType, strike: f64, quantity: u32, direction: Direction) -> Self {
        Self {
            option_type,
            strike,
            quantity,
            direction,
        }
    }

    /// Bought leg.
    pub fn long(option_type: OptionType, strike: f64, quantity: u32) -> Self {
        Self::new(option_type, strike, quantity, Direction::Long)
    }

    /// Sold leg.
    pub fn short(option_type: OptionType, strike: f64, quantity: u32) -> Self {
        Self::new(option_type, strike, quantity, Direction::Short)
    }

    /// Checks strike and quantity.
    ///
    /// # Errors
    /// - `NonFinite` / `NonPositive` on `strike`
    /// - `NonPositive` on `quantity` when it is zero
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("strike", self.strike)?;
        if self.quantity == 0 {
            return Err(ValidationError::NonPositive {
                field: "quantity",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Returns whether the leg takes part in evaluation.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Quantity as a float.
    #[inline]
    pub fn size(&self) -> f64 {
        f64::from(self.quantity)
    }

    /// Pricing inputs for this leg at `spot`.
    #[inline]
    pub fn params(&self, spot: f64, context: &MarketContext) -> OptionParameters {
        context.option_params(spot, self.strike, self.option_type)
    }
}

impl fmt::Display for StrategyLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} x{} @ {}",
            self.direction, self.option_type, self.quantity, self.strike
        )
    }
}

/// Parses `direction:type:strike[:quantity]`, e.g. `long:call:105:1`.
///
/// Quantity defaults to 1. The parsed leg is not validated.
impl FromStr for StrategyLeg {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StrategyError::InvalidLegSpec(s.to_string());
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(invalid());
        }

        let direction: Direction = parts[0].parse().map_err(|_| invalid())?;
        let option_type: OptionType = parts[1].parse()?;
        let strike: f64 = parts[2].parse().map_err(|_| invalid())?;
        let quantity: u32 = match parts.get(3) {
            Some(q) => q.parse().map_err(|_| invalid())?,
            None => 1,
        };

        Ok(StrategyLeg::new(option_type, strike, quantity, direction))
    }
}
