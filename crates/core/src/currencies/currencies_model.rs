use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::currencies_constants::{
    DEFAULT_FEE_BEAM, DEFAULT_FEE_RATE_BTC, DEFAULT_FEE_RATE_LTC, DEFAULT_FEE_RATE_QTUM,
    MIN_FEE_BEAM, MIN_FEE_RATE_BTC, MIN_FEE_RATE_LTC, MIN_FEE_RATE_QTUM, SYMBOL_BEAM, SYMBOL_BTC,
    SYMBOL_LTC, SYMBOL_QTUM,
};
use crate::errors::Error;

/// A currency the wallet can display and exchange.
///
/// BEAM is the wallet's native currency; the rest are the supported
/// atomic-swap coins. The set and its order are fixed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Beam,
    Btc,
    Ltc,
    Qtum,
}

impl Currency {
    /// The display code, e.g. `"BEAM"`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Beam => "BEAM",
            Currency::Btc => "BTC",
            Currency::Ltc => "LTC",
            Currency::Qtum => "QTUM",
        }
    }

    /// The single icon-font glyph used to render the currency sign.
    pub fn symbol(&self) -> char {
        match self {
            Currency::Beam => SYMBOL_BEAM,
            Currency::Btc => SYMBOL_BTC,
            Currency::Ltc => SYMBOL_LTC,
            Currency::Qtum => SYMBOL_QTUM,
        }
    }

    /// Lowercase identifier, e.g. `"beam"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Beam => "beam",
            Currency::Btc => "btc",
            Currency::Ltc => "ltc",
            Currency::Qtum => "qtum",
        }
    }

    /// Minimum fee, in smallest units (groth) for BEAM and smallest units
    /// per kB for the swap coins.
    pub fn min_fee(&self) -> u64 {
        match self {
            Currency::Beam => MIN_FEE_BEAM,
            Currency::Btc => MIN_FEE_RATE_BTC,
            Currency::Ltc => MIN_FEE_RATE_LTC,
            Currency::Qtum => MIN_FEE_RATE_QTUM,
        }
    }

    /// Fee pre-filled into the send form.
    pub fn default_fee(&self) -> u64 {
        match self {
            Currency::Beam => DEFAULT_FEE_BEAM,
            Currency::Btc => DEFAULT_FEE_RATE_BTC,
            Currency::Ltc => DEFAULT_FEE_RATE_LTC,
            Currency::Qtum => DEFAULT_FEE_RATE_QTUM,
        }
    }

    /// Unit label shown next to the fee input.
    pub fn fee_rate_label(&self) -> &'static str {
        match self {
            Currency::Beam => "GROTH",
            Currency::Btc => "sat/kB",
            Currency::Ltc => "ph/kB",
            Currency::Qtum => "qsat/kB",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BEAM" => Ok(Currency::Beam),
            "BTC" => Ok(Currency::Btc),
            "LTC" => Ok(Currency::Ltc),
            "QTUM" => Ok(Currency::Qtum),
            _ => Err(Error::UnsupportedCurrency(s.to_string())),
        }
    }
}

/// The supported currencies, in the fixed display order.
pub fn supported_currencies() -> [Currency; 4] {
    [Currency::Beam, Currency::Btc, Currency::Ltc, Currency::Qtum]
}

/// The supported currency codes, in the fixed display order.
pub fn currency_codes() -> [&'static str; 4] {
    ["BEAM", "BTC", "LTC", "QTUM"]
}

/// Returns the numeric part of an `"<amount> <CODE>"` display string.
///
/// Strings without a space are returned unchanged.
pub fn amount_without_currency(amount_with_currency: &str) -> &str {
    match amount_with_currency.split_once(' ') {
        Some((amount, _)) => amount,
        None => amount_with_currency,
    }
}

/// Whether a fee meets the floor for the given currency.
pub fn is_fee_ok(fee: u64, currency: Currency) -> bool {
    fee >= currency.min_fee()
}
