//! Settings module - model, repository trait, and typed accessors.

mod settings_model;
mod settings_service;
mod settings_traits;


pub use settings_model::{Settings, SettingsUpdate, SETTING_ALLOW_EXTERNAL_LINKS, SETTING_LOCALE};
pub use settings_service::SettingsService;
pub use settings_traits::SettingsRepositoryTrait;
