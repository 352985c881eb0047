//! Property-based tests for the Black-Scholes engine.
//!
//! # Test Categories
//!
//! 1. **No-arbitrage**: put-call parity, price bounds
//! 2. **Greeks**: delta bounds, gamma/vega symmetry, vega sign
//! 3. **Monotonicity**: ATM price in expiry
//! 4. **Degenerate inputs**: finite output everywhere

use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::{d1, d2, greeks, price, BlackScholes};
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = OptionParameters> {
    (
        1.0_f64..500.0,
        1.0_f64..500.0,
        -0.10_f64..0.50,
        0.01_f64..2.0,
        0.01_f64..5.0,
    )
        .prop_map(|(spot, strike, rate, vol, expiry)| {
            OptionParameters::new(spot, strike, rate, vol, expiry, OptionType::Call)
        })
}

fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::MAX),
        Just(f64::MIN_POSITIVE),
        -1e6_f64..1e6,
    ]
}

// ============================================================================
// No-arbitrage
// ============================================================================

proptest! {
    #[test]
    fn put_call_parity(params in valid_params()) {
        let bs = BlackScholes::new(params);
        let lhs = bs.price_call() - bs.price_put();
        let rhs = params.spot - params.strike * (-params.rate * params.expiry).exp();
        let scale = params.spot.max(params.strike);
        prop_assert!((lhs - rhs).abs() <= 1e-9 * scale, "lhs={} rhs={}", lhs, rhs);
    }

    #[test]
    fn prices_are_non_negative_and_bounded(params in valid_params()) {
        let bs = BlackScholes::new(params);
        prop_assert!(bs.price_call() >= -1e-9);
        prop_assert!(bs.price_put() >= -1e-9);
        prop_assert!(bs.price_call() <= params.spot + 1e-9);
        prop_assert!(bs.price_put() <= params.strike * bs.discount() + 1e-9);
    }
}

// ============================================================================
// Greeks
// ============================================================================

proptest! {
    #[test]
    fn delta_bounds(params in valid_params()) {
        let call = greeks(&params);
        let put = greeks(&params.with_option_type(OptionType::Put));
        prop_assert!((0.0..=1.0).contains(&call.delta));
        prop_assert!((-1.0..=0.0).contains(&put.delta));
    }

    #[test]
    fn gamma_and_vega_identical_for_call_and_put(params in valid_params()) {
        let call = greeks(&params);
        let put = greeks(&params.with_option_type(OptionType::Put));
        prop_assert_eq!(call.gamma, put.gamma);
        prop_assert_eq!(call.vega, put.vega);
    }

    #[test]
    fn vega_and_gamma_non_negative(params in valid_params()) {
        let g = greeks(&params);
        prop_assert!(g.vega >= 0.0);
        prop_assert!(g.gamma >= 0.0);
    }
}

// ============================================================================
// Monotonicity
// ============================================================================

proptest! {
    #[test]
    fn atm_price_non_decreasing_in_expiry(
        spot in 10.0_f64..500.0,
        rate in 0.0_f64..0.20,
        vol in 0.05_f64..1.0,
        t1 in 0.01_f64..5.0,
        dt in 0.0_f64..5.0,
    ) {
        let short = OptionParameters::new(spot, spot, rate, vol, t1, OptionType::Call);
        let long = short.with_expiry(t1 + dt);
        prop_assert!(price(&long) >= price(&short) - 1e-9);
    }
}

// ============================================================================
// Degenerate inputs
// ============================================================================

proptest! {
    #[test]
    fn any_input_gives_finite_output(
        spot in any_f64(),
        strike in any_f64(),
        rate in any_f64(),
        vol in any_f64(),
        expiry in any_f64(),
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let params = OptionParameters::new(spot, strike, rate, vol, expiry, option_type);
        prop_assert!(d1(spot, strike, rate, vol, expiry).is_finite());
        prop_assert!(d2(spot, strike, rate, vol, expiry).is_finite());
        prop_assert!(BlackScholes::new(params).d2().is_finite());
        prop_assert!(price(&params).is_finite());
        prop_assert!(greeks(&params).is_finite());
    }
}

#[test]
fn boundary_inputs_give_finite_output() {
    let base = OptionParameters::default();
    for params in [
        base.with_spot(0.0),
        base.with_strike(0.0),
        base.with_volatility(0.0),
        base.with_expiry(0.0),
    ] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let p = params.with_option_type(option_type);
            assert!(price(&p).is_finite());
            assert!(greeks(&p).is_finite());
        }
    }
}
