//! Translation-string lookup for UI-facing messages.
//!
//! The GUI shell owns the real localization machinery; this module defines
//! the provider seam plus a built-in English catalog so the core never emits
//! bare message ids. Messages use Qt-style positional placeholders
//! (`%1`, `%2`, ...).

use std::sync::OnceLock;

/// Built-in English texts, keyed by stable message id.
const ENGLISH_CATALOG: &[(&str, &str)] = &[
    ("time-never", "Never"),
    ("invalid-rate-min", "Rate cannot be less than %1"),
    ("general-groth", "GROTH"),
    ("loading-view-estimate-hours", "h"),
    ("loading-view-estimate-minutes", "min"),
    ("loading-view-estimate-seconds", "sec"),
];

/// Contract implemented by the GUI shell's translator.
pub trait TranslationProviderTrait: Send + Sync {
    /// Returns the localized template for a message id, if known.
    fn lookup(&self, id: &str) -> Option<String>;
}

/// The built-in English catalog, used when no provider is installed.
pub struct StaticTranslations;

impl TranslationProviderTrait for StaticTranslations {
    fn lookup(&self, id: &str) -> Option<String> {
        ENGLISH_CATALOG
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, text)| (*text).to_string())
    }
}

static PROVIDER: OnceLock<Box<dyn TranslationProviderTrait>> = OnceLock::new();

/// Installs the shell's translation provider.
///
/// Settable once per process; returns `false` if a provider was already
/// installed. Messages the provider does not know fall back to the English
/// catalog.
pub fn install(provider: Box<dyn TranslationProviderTrait>) -> bool {
    PROVIDER.set(provider).is_ok()
}

/// Looks up the localized text for a message id.
///
/// Falls back to the English catalog, then to the id itself.
pub fn tr(id: &str) -> String {
    if let Some(provider) = PROVIDER.get() {
        if let Some(text) = provider.lookup(id) {
            return text;
        }
    }
    match StaticTranslations.lookup(id) {
        Some(text) => text,
        None => {
            log::warn!("No translation for message id '{}'", id);
            id.to_string()
        }
    }
}

/// Looks up a message and substitutes positional placeholders.
///
/// `args[0]` replaces `%1`, `args[1]` replaces `%2`, and so on. Higher
/// positions are substituted first so `%1` never clips `%10`.
pub fn tr_args(id: &str, args: &[&str]) -> String {
    let mut text = tr(id);
    for (position, arg) in args.iter().enumerate().rev() {
        text = text.replace(&format!("%{}", position + 1), arg);
    }
    text
}
