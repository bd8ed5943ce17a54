//! Property-based integration tests for formatting and rate display.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use beamglass_core::constants::MIN_RATE;
use beamglass_core::currencies::Currency;
use beamglass_core::display::{
    amount_to_locale, amount_to_ui_string, number_to_locale_fixed, ui_string_to_amount,
    NumberLocale,
};
use beamglass_core::fx::{calc_display_rate, AmountInput};
use beamglass_core::utils::time_utils::expires_time;

// =============================================================================
// Generators
// =============================================================================

/// Generates a positive form amount with up to 8 fraction digits.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1u64..=1_000_000_000_000u64, 0u32..=8)
        .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(i128::from(mantissa), scale))
}

/// Generates one of the supported currencies.
fn arb_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Beam),
        Just(Currency::Btc),
        Just(Currency::Ltc),
        Just(Currency::Qtum),
    ]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Smallest-unit amounts survive the round trip through display form.
    #[test]
    fn prop_ui_amount_round_trip(units in any::<u64>()) {
        let display = amount_to_ui_string(units, None);
        prop_assert_eq!(ui_string_to_amount(&display).unwrap(), units);
    }

    /// Fixed-point formatting is stable under parse-and-reformat.
    #[test]
    fn prop_fixed_format_idempotent(value in arb_amount()) {
        let first = number_to_locale_fixed(value, &NumberLocale::C);
        let reparsed: Decimal = first.parse().unwrap();
        prop_assert_eq!(number_to_locale_fixed(reparsed, &NumberLocale::C), first);
    }

    /// "C"-locale output is untouched by "C"-locale re-rendering.
    #[test]
    fn prop_c_locale_is_identity(value in arb_amount()) {
        let plain = value.to_string();
        prop_assert_eq!(amount_to_locale(&plain, &NumberLocale::C), plain);
    }

    /// Same currency on both sides is always the identity rate.
    #[test]
    fn prop_same_currency_identity(
        receive in arb_amount(),
        send in arb_amount(),
        currency in arb_currency(),
    ) {
        let result = calc_display_rate(
            &AmountInput::new(receive, currency),
            &AmountInput::new(send, currency),
            true,
            &NumberLocale::C,
        );
        prop_assert_eq!(result.rate, Decimal::ONE);
        prop_assert!(!result.error);
    }

    /// Machine-mode display rates parse back in the "C" locale, and the
    /// error flag tracks the display floor exactly.
    #[test]
    fn prop_num_only_rate_parses(receive in arb_amount(), send in arb_amount()) {
        let result = calc_display_rate(
            &AmountInput::new(receive, Currency::Btc),
            &AmountInput::new(send, Currency::Beam),
            true,
            &NumberLocale::C,
        );
        prop_assert!(result.display_rate.parse::<Decimal>().is_ok());
        prop_assert_eq!(result.error, result.rate < MIN_RATE);
    }

    /// Later expiry heights never map to earlier instants.
    #[test]
    fn prop_expiry_monotone(
        current in 0u64..=1_000_000,
        a in 0u64..=1_000_000,
        b in 0u64..=1_000_000,
    ) {
        let now = "2023-05-17T12:00:00Z".parse().unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(expires_time(now, current, lo) <= expires_time(now, current, hi));
    }
}
