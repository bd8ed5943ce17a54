use rust_decimal::Decimal;

use super::fx_model::{AmountInput, RateResult};
use crate::constants::{MIN_RATE, RATE_DECIMAL_PRECISION, SUB_MIN_RATE_PRECISION};
use crate::display::{amount_to_locale, NumberLocale};
use crate::translation::tr_args;

/// Derives the exchange rate between the receive and send sides of the form.
///
/// The rate is `receive.amount / send.amount`. Two degenerate shapes short
/// circuit before any division: equal currencies are an identity conversion
/// (rate 1, amounts ignored), and a zero amount on either side means the
/// form is not filled in yet (rate 0, empty display, no error).
///
/// `num_only` forces the "C" locale so `display_rate` stays machine
/// parsable; otherwise `ui_locale` drives the separators. Downstream code
/// parses `display_rate` when `num_only` is set, so the dual-mode behavior
/// is load bearing.
pub fn calc_display_rate(
    receive: &AmountInput,
    send: &AmountInput,
    num_only: bool,
    ui_locale: &NumberLocale,
) -> RateResult {
    let min_display_rate = format_rate(MIN_RATE, num_only, ui_locale);

    if receive.currency == send.currency {
        return RateResult {
            rate: Decimal::ONE,
            display_rate: "1".to_string(),
            error: false,
            error_text: None,
            min_rate: MIN_RATE,
            min_display_rate,
        };
    }

    if send.amount.is_zero() || receive.amount.is_zero() {
        return RateResult {
            rate: Decimal::ZERO,
            display_rate: String::new(),
            error: false,
            error_text: None,
            min_rate: MIN_RATE,
            min_display_rate,
        };
    }

    let rate = receive.amount / send.amount;
    let error = rate < MIN_RATE;
    RateResult {
        rate,
        display_rate: format_rate(rate, num_only, ui_locale),
        error,
        error_text: error.then(|| tr_args("invalid-rate-min", &[&min_display_rate])),
        min_rate: MIN_RATE,
        min_display_rate,
    }
}

/// Formats a rate value: 8 fraction digits normally, 17 below the display
/// floor, trailing zeros trimmed.
fn format_rate(value: Decimal, num_only: bool, ui_locale: &NumberLocale) -> String {
    let precision = if value < MIN_RATE {
        SUB_MIN_RATE_PRECISION
    } else {
        RATE_DECIMAL_PRECISION
    };
    let locale = if num_only { &NumberLocale::C } else { ui_locale };
    amount_to_locale(&value.round_dp(precision).normalize().to_string(), locale)
}
