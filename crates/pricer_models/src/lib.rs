//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes pricing engine for European options.
//!
//! This crate provides:
//! - Closed-form call and put prices
//! - The five standard Greeks in reporting units (theta per day, vega and
//!   rho per percentage point)
//! - Spot, volatility and time-decay sweeps for a single option
//!
//! ## Design Principles
//!
//! - **Pure functions** over [`pricer_core::types::OptionParameters`]
//! - **No panics, no NaN**: degenerate inputs produce finite sentinel-derived
//!   values; use `OptionParameters::validate` to detect them
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{OptionParameters, OptionType};
//! use pricer_models::analytical::{greeks, price};
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
//! assert!((price(&params) - 10.4506).abs() < 1e-4);
//! assert!((greeks(&params).delta - 0.6368).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
