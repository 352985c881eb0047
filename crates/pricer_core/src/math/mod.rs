//! Numerical helpers shared by the pricing layers.
//!
//! This module provides:
//! - `grid`: Spot-price grids for price, Greek, and strategy sweeps

pub mod grid;

pub use grid::{nearest_index, SpotGrid};
