use serde::{Deserialize, Serialize};

/// Key of the "open MW links without asking" flag.
pub const SETTING_ALLOW_EXTERNAL_LINKS: &str = "allow_external_links";

/// Key of the active UI locale name.
pub const SETTING_LOCALE: &str = "locale";

/// The settings the UI core reads, as one snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub allow_external_links: bool,
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            allow_external_links: false,
            locale: "C".to_string(),
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub allow_external_links: Option<bool>,
    pub locale: Option<String>,
}
