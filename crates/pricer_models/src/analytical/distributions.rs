//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! `norm_cdf` is total over `f64`: non-finite arguments return the 0.5
//! fallback and the tails are clamped outside [-10, 10].

use statrs::function::erf::erf;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Beyond this magnitude Φ is 0 or 1 to double precision.
const CDF_TAIL_CUTOFF: f64 = 10.0;

/// Value returned by [`norm_cdf`] for NaN or infinite arguments.
///
/// This is a safe fallback, not a probability: it keeps degenerate
/// intermediate values finite without claiming anything about them.
pub const NON_FINITE_CDF: f64 = 0.5;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1 + erf(x / √2)) / 2
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// - [`NON_FINITE_CDF`] if `x` is NaN or ±∞
/// - `0` for `x < -10`, `1` for `x > 10`
/// - otherwise Φ(x), accurate to double precision
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert!((norm_cdf(1.0) - 0.841_344_746_068_542_9).abs() < 1e-12);
/// assert_eq!(norm_cdf(-11.0), 0.0);
/// assert_eq!(norm_cdf(f64::NAN), 0.5);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    if !x.is_finite() {
        return NON_FINITE_CDF;
    }
    if x < -CDF_TAIL_CUTOFF {
        return 0.0;
    }
    if x > CDF_TAIL_CUTOFF {
        return 1.0;
    }
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-10);
///
/// let pdf_1 = norm_pdf(1.0);
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
