//! Calendar-day conversions for time to expiry.
//!
//! Time to expiry is carried in years throughout the workspace. The
//! interactive views count it in calendar days; both directions use a
//! fixed 365-day year, matching the per-day theta convention.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{days_to_years, years_to_days};
//!
//! let t = days_to_years(73);
//! assert!((t - 0.2).abs() < 1e-12);
//! assert_eq!(years_to_days(t), 73);
//! ```

/// Calendar days per year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts a number of calendar days into a year fraction.
#[inline]
pub fn days_to_years(days: u32) -> f64 {
    days as f64 / DAYS_PER_YEAR
}

/// Converts a year fraction into whole calendar days (rounded).
///
/// Non-finite or negative inputs map to 0 days.
#[inline]
pub fn years_to_days(years: f64) -> u32 {
    if !years.is_finite() || years <= 0.0 {
        return 0;
    }
    let days = (years * DAYS_PER_YEAR).round();
    if days >= u32::MAX as f64 {
        u32::MAX
    } else {
        days as u32
    }
}
