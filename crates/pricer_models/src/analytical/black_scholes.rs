//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Reporting Units
//!
//! - Theta is per calendar day (annual theta / 365)
//! - Vega is per 1 percentage point of volatility (÷100)
//! - Rho is per 1 percentage point of rate (÷100)
//!
//! ## Degenerate Inputs
//!
//! Every function here is total. If spot, strike, volatility or expiry is
//! non-positive, if any input is non-finite, or if d₁ itself comes out
//! non-finite, [`d1`] returns the sentinel `0` and all dependent formulas
//! evaluate from it. [`d2`] falls back to the same sentinel when σ√T is
//! not finite. Terms that divide by S·σ·√T or √T evaluate to zero
//! when that denominator vanishes, and any remaining non-finite result is
//! reported as zero. Results for invalid inputs are therefore finite but not
//! meaningful; use [`OptionParameters::validate`] to detect them.

use pricer_core::types::{OptionParameters, OptionType, DAYS_PER_YEAR};

use super::distributions::{norm_cdf, norm_pdf};
use super::greeks::Greeks;

/// Divisor converting per-unit vega and rho into per-percentage-point values.
pub const PERCENT_POINT: f64 = 100.0;

/// d₁ returned for invalid inputs.
pub const D1_SENTINEL: f64 = 0.0;

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
///
/// # Returns
/// The d1 term, or [`D1_SENTINEL`] when the inputs are invalid or the
/// result is not finite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::d1;
///
/// assert!((d1(100.0, 100.0, 0.05, 0.2, 1.0) - 0.35).abs() < 1e-12);
/// assert_eq!(d1(0.0, 100.0, 0.05, 0.2, 1.0), 0.0);
/// assert_eq!(d1(100.0, 100.0, f64::NAN, 0.2, 1.0), 0.0);
/// ```
#[inline]
pub fn d1(spot: f64, strike: f64, rate: f64, volatility: f64, expiry: f64) -> f64 {
    let all_finite = spot.is_finite()
        && strike.is_finite()
        && rate.is_finite()
        && volatility.is_finite()
        && expiry.is_finite();
    if !all_finite || spot <= 0.0 || strike <= 0.0 || volatility <= 0.0 || expiry <= 0.0 {
        return D1_SENTINEL;
    }

    let log_moneyness = (spot / strike).ln();
    let drift = (rate + 0.5 * volatility * volatility) * expiry;
    let result = (log_moneyness + drift) / (volatility * expiry.sqrt());

    if result.is_finite() {
        result
    } else {
        D1_SENTINEL
    }
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T, using the (possibly sentinel) d₁.
///
/// # Returns
/// The d2 term, or [`D1_SENTINEL`] when the result is not finite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::d2;
///
/// assert!((d2(100.0, 100.0, 0.05, 0.2, 1.0) - 0.15).abs() < 1e-12);
/// assert_eq!(d2(100.0, 100.0, 0.05, 0.2, -1.0), 0.0);
/// ```
#[inline]
pub fn d2(spot: f64, strike: f64, rate: f64, volatility: f64, expiry: f64) -> f64 {
    finite_or_zero(d1(spot, strike, rate, volatility, expiry) - volatility * expiry.sqrt())
}

/// Prices the option described by `params`.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::price;
///
/// let call = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
/// assert!((price(&call) - 10.4506).abs() < 1e-4);
/// ```
#[inline]
pub fn price(params: &OptionParameters) -> f64 {
    BlackScholes::new(*params).price()
}

/// Computes all five Greeks for the option described by `params`.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::greeks;
///
/// let put = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Put);
/// let g = greeks(&put);
/// assert!((g.delta + 0.3632).abs() < 1e-4);
/// assert!((g.rho + 0.4189).abs() < 1e-4);
/// ```
#[inline]
pub fn greeks(params: &OptionParameters) -> Greeks {
    BlackScholes::new(*params).greeks()
}

/// Black-Scholes evaluator for one parameter set.
///
/// Computes d₁, d₂, √T and the discount factor once on construction, so
/// that pricing and all Greeks for the same inputs share them.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_models::analytical::BlackScholes;
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
/// let bs = BlackScholes::new(params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = bs.price_call() - bs.price_put() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    params: OptionParameters,
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    discount: f64,
}

impl BlackScholes {
    /// Creates an evaluator. Never fails; see the module docs for how
    /// invalid inputs are handled.
    pub fn new(params: OptionParameters) -> Self {
        let OptionParameters {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            ..
        } = params;

        let sqrt_t = expiry.sqrt();
        let d1 = d1(spot, strike, rate, volatility, expiry);
        let d2 = finite_or_zero(d1 - volatility * sqrt_t);
        let discount = (-rate * expiry).exp();

        Self {
            params,
            d1,
            d2,
            sqrt_t,
            discount,
        }
    }

    /// Returns the parameters this evaluator was built from.
    #[inline]
    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    /// The d1 term (sentinel-guarded).
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// The d2 term (sentinel-guarded).
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// The discount factor e^(-rT).
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// European call price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self) -> f64 {
        let p = &self.params;
        finite_or_zero(p.spot * norm_cdf(self.d1) - p.strike * self.discount * norm_cdf(self.d2))
    }

    /// European put price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self) -> f64 {
        let p = &self.params;
        finite_or_zero(p.strike * self.discount * norm_cdf(-self.d2) - p.spot * norm_cdf(-self.d1))
    }

    /// Price for the configured option type.
    #[inline]
    pub fn price(&self) -> f64 {
        match self.params.option_type {
            OptionType::Call => self.price_call(),
            OptionType::Put => self.price_put(),
        }
    }

    /// Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self) -> f64 {
        let n_d1 = norm_cdf(self.d1);
        match self.params.option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - 1.0,
        }
    }

    /// Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    #[inline]
    pub fn gamma(&self) -> f64 {
        let p = &self.params;
        finite_or_zero(ratio_or_zero(
            norm_pdf(self.d1),
            p.spot * p.volatility * self.sqrt_t,
        ))
    }

    /// Theta (∂V/∂t) per calendar day.
    ///
    /// - Call: [-(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)] / 365
    /// - Put: [-(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)] / 365
    #[inline]
    pub fn theta(&self) -> f64 {
        let p = &self.params;
        let decay = ratio_or_zero(
            -p.spot * p.volatility * norm_pdf(self.d1),
            2.0 * self.sqrt_t,
        );
        let carry = p.rate * p.strike * self.discount;
        let interest = match p.option_type {
            OptionType::Call => -carry * norm_cdf(self.d2),
            OptionType::Put => carry * norm_cdf(-self.d2),
        };
        finite_or_zero((decay + interest) / DAYS_PER_YEAR)
    }

    /// Vega (∂V/∂σ) per 1 vol point, identical for calls and puts.
    ///
    /// Vega = S·√T·φ(d₁) / 100
    #[inline]
    pub fn vega(&self) -> f64 {
        let p = &self.params;
        finite_or_zero(p.spot * self.sqrt_t * norm_pdf(self.d1) / PERCENT_POINT)
    }

    /// Rho (∂V/∂r) per 1 rate point.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂) / 100
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂) / 100
    #[inline]
    pub fn rho(&self) -> f64 {
        let p = &self.params;
        let basis = p.strike * p.expiry * self.discount;
        let rho = match p.option_type {
            OptionType::Call => basis * norm_cdf(self.d2),
            OptionType::Put => -basis * norm_cdf(-self.d2),
        };
        finite_or_zero(rho / PERCENT_POINT)
    }

    /// All five Greeks.
    pub fn greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta(),
            gamma: self.gamma(),
            theta: self.theta(),
            vega: self.vega(),
            rho: self.rho(),
        }
    }
}

impl From<OptionParameters> for BlackScholes {
    fn from(params: OptionParameters) -> Self {
        Self::new(params)
    }
}

/// `num / den`, or zero when the denominator is zero or not finite.
#[inline]
fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den == 0.0 || !den.is_finite() {
        0.0
    } else {
        num / den
    }
}

/// Final guard for results that non-finite inputs could still poison.
#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
