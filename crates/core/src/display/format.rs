use chrono::{DateTime, FixedOffset};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::locale::NumberLocale;
use crate::constants::{
    COIN_DECIMAL_PLACES, MIN_RATE, NEVER_TIMESTAMP_SECS, RATE_DECIMAL_PRECISION, UNITS_PER_COIN,
};
use crate::currencies::Currency;
use crate::errors::{Error, Result, ValidationError};
use crate::translation::tr;

/// Formats an instant as `"<date> | <time> (GMT <±offset>)"`.
///
/// Instants at or past the 32-bit Unix-time maximum are the "no value"
/// sentinel and render as the localized "Never". The GMT offset is taken
/// from the instant's own offset, so the output is wall-clock-zone
/// dependent, not UTC-stable.
pub fn format_date_time(datetime: DateTime<FixedOffset>, locale: &NumberLocale) -> String {
    if datetime.timestamp() >= NEVER_TIMESTAMP_SECS {
        return tr("time-never");
    }
    let offset_hours = f64::from(datetime.offset().local_minus_utc()) / 3600.0;
    let zone = if offset_hours >= 0.0 {
        format!("GMT +{}", offset_hours)
    } else {
        format!("GMT {}", offset_hours)
    };
    format!(
        "{} | {} ({})",
        datetime.format(locale.date_format),
        datetime.format(locale.time_format),
        zone
    )
}

/// Formats a number with locale separators at full natural precision.
///
/// Trailing zeros carried by the value's scale are preserved; nothing is
/// padded or trimmed.
pub fn number_to_locale(value: Decimal, locale: &NumberLocale) -> String {
    localize_numeric(&value.to_string(), locale)
}

/// Formats a number to at most 8 fraction digits, trimming trailing zeros.
///
/// Values below the display floor (including zero and negatives) are clamped
/// up to it, so the result is never a string of zeros.
pub fn number_to_locale_fixed(value: Decimal, locale: &NumberLocale) -> String {
    let clamped = if value < MIN_RATE { MIN_RATE } else { value };
    let trimmed = clamped.round_dp(RATE_DECIMAL_PRECISION).normalize();
    localize_numeric(&trimmed.to_string(), locale)
}

/// Re-renders a "C"-locale numeric string with locale separators.
///
/// `amount` must already be normalized to the "C" locale (`.` decimal point,
/// no grouping); malformed input is passed through undigested.
pub fn amount_to_locale(amount: &str, locale: &NumberLocale) -> String {
    localize_numeric(amount, locale)
}

/// Converts a smallest-unit amount into a trimmed coin string, with the
/// currency code appended when one is given.
pub fn amount_to_ui_string(units: u64, currency: Option<Currency>) -> String {
    let coins = Decimal::from_i128_with_scale(i128::from(units), COIN_DECIMAL_PLACES).normalize();
    match currency {
        Some(currency) => format!("{} {}", coins, currency.code()),
        None => coins.to_string(),
    }
}

/// Renders a raw smallest-unit amount, e.g. `"42 GROTH"`.
pub fn amount_in_groth_to_ui_string(units: u64) -> String {
    format!("{} {}", units, tr("general-groth"))
}

/// Parses a "C"-locale coin string back into smallest units.
///
/// Rejects negative values, more than 8 fraction digits, and values that do
/// not fit the smallest-unit range.
pub fn ui_string_to_amount(value: &str) -> Result<u64> {
    let trimmed = value.trim();
    let coins: Decimal = trimmed
        .parse()
        .map_err(ValidationError::DecimalParse)
        .map_err(Error::from)?;
    if coins.is_sign_negative() {
        return Err(ValidationError::InvalidAmount(trimmed.to_string()).into());
    }
    let units = coins
        .checked_mul(Decimal::from(UNITS_PER_COIN))
        .ok_or_else(|| Error::from(ValidationError::AmountOutOfRange(trimmed.to_string())))?;
    if !units.fract().is_zero() {
        return Err(ValidationError::InvalidAmount(trimmed.to_string()).into());
    }
    units
        .to_u64()
        .ok_or_else(|| Error::from(ValidationError::AmountOutOfRange(trimmed.to_string())))
}

/// Humanizes a remaining-time estimate, e.g. `"2 h 5 min"` or `"40 sec"`.
///
/// Minutes are rounded up when seconds remain; estimates of a minute or less
/// floor at `"1 sec"`.
pub fn estimate_time_str(estimate_secs: i64) -> String {
    const SECONDS_IN_MINUTE: i64 = 60;
    const SECONDS_IN_HOUR: i64 = 60 * SECONDS_IN_MINUTE;

    let hours_unit = tr("loading-view-estimate-hours");
    let minutes_unit = tr("loading-view-estimate-minutes");
    let seconds_unit = tr("loading-view-estimate-seconds");

    if estimate_secs >= SECONDS_IN_HOUR {
        let hours = estimate_secs / SECONDS_IN_HOUR;
        let remainder = estimate_secs % SECONDS_IN_HOUR;
        let mut minutes = remainder / SECONDS_IN_MINUTE;
        if remainder % SECONDS_IN_MINUTE != 0 {
            minutes += 1;
        }
        let mut out = format!("{} {}", hours, hours_unit);
        if minutes >= 1 {
            out.push_str(&format!(" {} {}", minutes, minutes_unit));
        }
        out
    } else if estimate_secs > 100 {
        let mut minutes = estimate_secs / SECONDS_IN_MINUTE;
        if estimate_secs % SECONDS_IN_MINUTE != 0 {
            minutes += 1;
        }
        format!("{} {}", minutes, minutes_unit)
    } else if estimate_secs > SECONDS_IN_MINUTE {
        let minutes = estimate_secs / SECONDS_IN_MINUTE;
        let seconds = estimate_secs - SECONDS_IN_MINUTE;
        format!(
            "{} {} {} {}",
            minutes, minutes_unit, seconds, seconds_unit
        )
    } else {
        let seconds = if estimate_secs > 0 { estimate_secs } else { 1 };
        format!("{} {}", seconds, seconds_unit)
    }
}

/// Vertical gap above the logo on the start screen, in pixels.
pub fn logo_top_gap(parent_height: f64) -> f64 {
    parent_height * if parent_height < 768.0 { 0.13 } else { 0.18 }
}

/// Splits a "C"-locale numeric string and re-renders it with the locale's
/// separators: groups of three in the integer part, locale decimal point.
fn localize_numeric(amount: &str, locale: &NumberLocale) -> String {
    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (amount, None),
    };
    let grouped = group_digits(integer, locale.group_separator);
    match fraction {
        Some(fraction) => format!("{}{}{}", grouped, locale.decimal_point, fraction),
        None => grouped,
    }
}

/// Inserts `separator` every three digits from the right. A leading sign is
/// kept in place; non-digit strings are returned unchanged.
fn group_digits(integer: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return integer.to_string();
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.len() <= 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }
    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
