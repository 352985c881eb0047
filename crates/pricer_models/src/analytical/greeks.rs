//! Option Greeks container.
//!
//! Holds the five first- and second-order sensitivities produced by the
//! Black-Scholes engine, in the engine's reporting units:
//! - theta per calendar day
//! - vega per 1 percentage point of volatility
//! - rho per 1 percentage point of rate

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Option Greeks (sensitivities).
///
/// # Examples
/// ```
/// use pricer_models::analytical::Greeks;
///
/// let long = Greeks::new(0.6, 0.02, -0.01, 0.4, 0.5);
/// let short = long.scale(-1.0);
/// let flat = long + short;
/// assert_eq!(flat.delta, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Theta: ∂V/∂t per calendar day
    pub theta: f64,
    /// Vega: ∂V/∂σ per 1 vol point
    pub vega: f64,
    /// Rho: ∂V/∂r per 1 rate point
    pub rho: f64,
}

impl Greeks {
    /// All-zero Greeks.
    pub const ZERO: Greeks = Greeks {
        delta: 0.0,
        gamma: 0.0,
        theta: 0.0,
        vega: 0.0,
        rho: 0.0,
    };

    /// Creates a Greeks record.
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Scales every Greek by `factor` (position size, direction).
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    /// Returns whether every Greek is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.theta.is_finite()
            && self.vega.is_finite()
            && self.rho.is_finite()
    }
}

impl Add for Greeks {
    type Output = Greeks;

    fn add(self, other: Greeks) -> Greeks {
        Greeks {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            theta: self.theta + other.theta,
            vega: self.vega + other.vega,
            rho: self.rho + other.rho,
        }
    }
}

impl AddAssign for Greeks {
    fn add_assign(&mut self, other: Greeks) {
        *self = *self + other;
    }
}

impl Mul<f64> for Greeks {
    type Output = Greeks;

    fn mul(self, factor: f64) -> Greeks {
        self.scale(factor)
    }
}

impl Sum for Greeks {
    fn sum<I: Iterator<Item = Greeks>>(iter: I) -> Greeks {
        iter.fold(Greeks::ZERO, Add::add)
    }
}
