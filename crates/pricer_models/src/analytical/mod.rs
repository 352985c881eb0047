//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes engine:
//! - Standard normal CDF and PDF
//! - d1/d2, call and put prices
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho)
//! - Single-option sweeps over spot, volatility and days to expiry
//!
//! ## Design Principles
//!
//! - **Total functions**: every input yields a finite output; invalid inputs
//!   are caught at `d1` and `norm_cdf` and evaluated from sentinels
//! - **Stateless**: no caching or shared state, safe to call from any thread
//! - **Accurate CDF**: erf-based, relative error below 1e-12

pub mod black_scholes;
pub mod curves;
pub mod distributions;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{d1, d2, greeks, price, BlackScholes};
pub use curves::{
    greeks_curve, price_curve, time_decay, volatility_comparison, volatility_curves, DecayPoint,
    GreeksPoint, PricePoint, SpotValue, VolatilityCurve, VolatilityImpact, VolatilityScenario,
};
pub use distributions::{norm_cdf, norm_pdf};
pub use greeks::Greeks;
