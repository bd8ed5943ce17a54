//! Display module - locale-aware formatting for dates, numbers, and amounts.

mod format;
mod locale;


pub use format::{
    amount_in_groth_to_ui_string, amount_to_locale, amount_to_ui_string, estimate_time_str,
    format_date_time, logo_top_gap, number_to_locale, number_to_locale_fixed, ui_string_to_amount,
};
pub use locale::NumberLocale;
