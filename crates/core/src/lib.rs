//! Beamglass UI Core - presentation-layer domain logic for the desktop wallet.
//!
//! This crate contains the UI-facing core of Beamglass: locale-aware
//! formatting, exchange-rate display, the external-link confirmation flow,
//! and the supported-currency registry. It is toolkit-agnostic and defines
//! traits that are implemented by the GUI shell.

pub mod constants;
pub mod currencies;
pub mod display;
pub mod errors;
pub mod fx;
pub mod links;
pub mod settings;
pub mod translation;
pub mod utils;

// Re-export common types from the currency and fx modules
pub use currencies::*;
pub use fx::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
