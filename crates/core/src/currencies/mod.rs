//! Currencies module - supported currency registry and fee floors.

mod currencies_constants;
mod currencies_model;

#[cfg(test)]
mod currencies_model_tests;

pub use currencies_constants::*;
pub use currencies_model::{
    amount_without_currency, currency_codes, is_fee_ok, supported_currencies, Currency,
};
