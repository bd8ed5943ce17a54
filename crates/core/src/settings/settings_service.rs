use std::sync::Arc;

use log::debug;

use super::settings_model::{
    Settings, SettingsUpdate, SETTING_ALLOW_EXTERNAL_LINKS, SETTING_LOCALE,
};
use super::SettingsRepositoryTrait;
use crate::errors::{Error, Result, SettingsError};

/// Typed accessors over the shell's key-value settings store.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService { repository }
    }

    pub fn get_settings(&self) -> Result<Settings> {
        self.repository.get_settings()
    }

    pub fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        self.repository.update_settings(new_settings)
    }

    /// Whether external MW links may open without confirmation.
    ///
    /// An absent or unparsable value reads as `false`, the conservative
    /// default for a fresh profile.
    pub fn is_external_links_allowed(&self) -> Result<bool> {
        match self.repository.get_setting(SETTING_ALLOW_EXTERNAL_LINKS) {
            Ok(value) => Ok(value.parse().unwrap_or(false)),
            Err(Error::Settings(SettingsError::NotFound(_))) => {
                debug!(
                    "Setting '{}' not present, defaulting to false",
                    SETTING_ALLOW_EXTERNAL_LINKS
                );
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub fn set_external_links_allowed(&self, allowed: bool) -> Result<()> {
        self.repository
            .update_setting(SETTING_ALLOW_EXTERNAL_LINKS, if allowed { "true" } else { "false" })
    }

    /// The active UI locale name; absent reads as "C".
    pub fn locale_name(&self) -> Result<String> {
        match self.repository.get_setting(SETTING_LOCALE) {
            Ok(value) => Ok(value),
            Err(Error::Settings(SettingsError::NotFound(_))) => {
                debug!("Setting '{}' not present, defaulting to C", SETTING_LOCALE);
                Ok("C".to_string())
            }
            Err(e) => Err(e),
        }
    }

    pub fn set_locale_name(&self, locale: &str) -> Result<()> {
        self.repository.update_setting(SETTING_LOCALE, locale)
    }
}
