//! FX module - exchange-rate computation for the send/receive form.

mod fx_model;
mod fx_service;


pub use fx_model::{AmountInput, RateResult};
pub use fx_service::calc_display_rate;
