//! European option value types.
//!
//! This module provides:
//! - `OptionType`: Call or Put
//! - `OptionParameters`: The six inputs of a Black-Scholes evaluation
//!
//! `OptionParameters` is a plain value type. Construction never fails so
//! that the pricing engine can stay total over every floating-point input;
//! use [`OptionParameters::validate`] when invalid input has to be rejected.

use std::fmt;
use std::str::FromStr;

use super::error::{ensure_finite, ensure_positive, ValidationError};

/// Option type (Call or Put).
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike
    #[default]
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Intrinsic value at the given spot.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Lowercase name used in CLI arguments and serialised output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(ValidationError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Inputs of a single Black-Scholes evaluation.
///
/// Field names follow the usual notation: `spot` (S), `strike` (K),
/// `rate` (r, continuously compounded), `volatility` (σ, annualised) and
/// `expiry` (T, years to expiry).
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
/// assert!(params.validate().is_ok());
///
/// let degenerate = params.with_volatility(0.0);
/// assert!(degenerate.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Continuously-compounded annual risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Call or Put
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Creates a parameter set. No validation is performed.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            option_type,
        }
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    /// Returns a copy with a different rate.
    #[inline]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Returns a copy with a different expiry.
    #[inline]
    pub fn with_expiry(mut self, expiry: f64) -> Self {
        self.expiry = expiry;
        self
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Checks the parameter invariants.
    ///
    /// All numeric fields must be finite; `spot`, `strike`, `volatility`
    /// and `expiry` must also be strictly positive. The first violation
    /// found is reported.
    ///
    /// # Errors
    /// - `ValidationError::NonFinite` for NaN or infinite fields
    /// - `ValidationError::NonPositive` for non-positive spot, strike,
    ///   volatility or expiry
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_finite("rate", self.rate)?;
        ensure_positive("volatility", self.volatility)?;
        ensure_positive("expiry", self.expiry)?;
        Ok(())
    }

    /// Returns whether [`validate`](Self::validate) would succeed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Intrinsic value of the option at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }
}

impl Default for OptionParameters {
    /// The textbook at-the-money case: S = K = 100, r = 5%, σ = 20%, T = 1.
    fn default() -> Self {
        Self::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" c ".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(ValidationError::UnknownOptionType(_))
        ));
    }

    #[test]
    fn test_option_type_display() {
        assert_eq!(OptionType::Call.to_string(), "Call");
        assert_eq!(OptionType::Put.as_str(), "put");
    }

    #[test]
    fn test_validate_accepts_textbook_case() {
        assert!(OptionParameters::default().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_negative_rate() {
        let params = OptionParameters::default().with_rate(-0.02);
        assert!(params.is_valid());
    }

    #[test]
    fn test_validate_rejects_non_positive_fields() {
        let base = OptionParameters::default();
        for (params, field) in [
            (base.with_spot(0.0), "spot"),
            (base.with_strike(-1.0), "strike"),
            (base.with_volatility(0.0), "volatility"),
            (base.with_expiry(0.0), "expiry"),
        ] {
            let err = params.validate().unwrap_err();
            assert_eq!(err.field(), Some(field));
            assert!(matches!(err, ValidationError::NonPositive { .. }));
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_fields() {
        let base = OptionParameters::default();
        assert!(matches!(
            base.with_rate(f64::NAN).validate(),
            Err(ValidationError::NonFinite { field: "rate", .. })
        ));
        assert!(matches!(
            base.with_spot(f64::INFINITY).validate(),
            Err(ValidationError::NonFinite { field: "spot", .. })
        ));
    }

    #[test]
    fn test_with_methods_leave_base_untouched() {
        let base = OptionParameters::default();
        let put = base.with_option_type(OptionType::Put).with_strike(110.0);
        assert_eq!(base.option_type, OptionType::Call);
        assert_eq!(base.strike, 100.0);
        assert_eq!(put.option_type, OptionType::Put);
        assert_eq!(put.strike, 110.0);
        assert_eq!(put.intrinsic(), 10.0);
    }
}
