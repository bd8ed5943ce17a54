//! Repository trait for settings.

use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate};

/// Contract implemented by the GUI shell's persisted settings store.
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get all settings.
    fn get_settings(&self) -> Result<Settings>;

    /// Update multiple settings at once.
    fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;

    /// Get a single setting value by key.
    ///
    /// Absent keys return [`SettingsError::NotFound`](crate::errors::SettingsError).
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}
