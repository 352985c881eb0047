//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that option types are accessible via absolute path.
#[test]
fn test_option_module_exports() {
    use pricer_core::types::option::OptionParameters;
    use pricer_core::types::option::OptionType;

    let params = OptionParameters::new(100.0, 95.0, 0.01, 0.3, 0.25, OptionType::Put);
    assert_eq!(params.option_type, OptionType::Put);
    assert!(params.is_valid());
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::{ensure_positive, ValidationError};

    let err = ensure_positive("volatility", -0.1).unwrap_err();
    assert!(matches!(err, ValidationError::NonPositive { .. }));
}

/// Test that time helpers are accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use pricer_core::types::time::{days_to_years, years_to_days, DAYS_PER_YEAR};

    assert_eq!(DAYS_PER_YEAR, 365.0);
    assert_eq!(years_to_days(days_to_years(30)), 30);
}

/// Test that grid helpers are accessible via absolute path.
#[test]
fn test_grid_module_exports() {
    use pricer_core::math::grid::{nearest_index, SpotGrid};

    let grid = SpotGrid::window(100.0, 10.0, 10, 0.0);
    assert_eq!(grid.len(), 21);
    assert_eq!(nearest_index(grid.points(), 100.2), Some(10));
}

/// Test module-level re-exports.
#[test]
fn test_reexports() {
    use pricer_core::math::SpotGrid;
    use pricer_core::types::{days_to_years, OptionParameters, OptionType, ValidationError};

    let params = OptionParameters::default().with_expiry(days_to_years(0));
    let err: ValidationError = params.validate().unwrap_err();
    assert_eq!(err.field(), Some("expiry"));
    assert_eq!(OptionType::default(), OptionType::Call);
    assert!(SpotGrid::default().is_empty());
}
