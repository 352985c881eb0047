//! # Pricer Risk (L4: Application)
//!
//! Multi-leg option strategies and their payoff profiles.
//!
//! This crate provides:
//! - Strategy legs with long/short direction and quantity
//! - Strategy evaluation: initial cost plus a swept profile of portfolio
//!   value and aggregate Greeks
//! - Preset strategies (straddles, spreads, condors, ...)
//! - Rayon-based parallelisation of large sweeps
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  strategy/   - legs, presets,           │
//! │               profile aggregation       │
//! │  parallel/   - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes price and Greeks         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::OptionType;
//! use pricer_risk::strategy::{evaluate_strategy, MarketContext, StrategyLeg};
//!
//! let legs = [StrategyLeg::long(OptionType::Call, 100.0, 1)];
//! let context = MarketContext::default();
//!
//! let profile = evaluate_strategy(&legs, &context, 100.0, &[90.0, 100.0, 110.0]);
//! assert!(profile.initial_cost < 0.0); // paid premium
//! assert!(profile.profile[1].total_value.abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod parallel;
pub mod strategy;
