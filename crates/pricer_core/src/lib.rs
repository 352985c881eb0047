//! # pricer_core: Foundation Types for Option Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Option value types: `OptionType`, `OptionParameters` (`types::option`)
//! - Validation errors: `ValidationError` (`types::error`)
//! - Calendar-day helpers: `days_to_years`, `years_to_days` (`types::time`)
//! - Spot-price sweep grids: `SpotGrid` (`math::grid`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::grid::SpotGrid;
//! use pricer_core::types::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 105.0, 0.05, 0.2, 0.5, OptionType::Put);
//! assert!(params.validate().is_ok());
//!
//! let grid = SpotGrid::around(params.spot, 0.5, 0.0, 50, 0.01);
//! assert_eq!(grid.len(), 101);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for option types, parameters and grids

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
