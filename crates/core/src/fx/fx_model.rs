use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currencies::Currency;

/// One side of the send/receive form: an amount denominated in a currency.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AmountInput {
    pub amount: Decimal,
    pub currency: Currency,
}

impl AmountInput {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        AmountInput { amount, currency }
    }
}

/// Result of a display-rate computation.
///
/// A too-small rate is reported as data (`error` plus `error_text`), never as
/// `Err`: the form keeps the value and shows the message, it does not reject
/// the input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateResult {
    pub rate: Decimal,
    pub display_rate: String,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
    pub min_rate: Decimal,
    pub min_display_rate: String,
}
