//! Collaborator traits implemented by the GUI shell.

use super::links_model::CursorShape;
use crate::errors::Result;

/// The rich-text element as the link handler sees it.
pub trait LinkElement {
    /// Returns the URL under the given element-local position, if any.
    fn link_at(&self, x: f64, y: f64) -> Option<String>;

    fn cursor(&self) -> CursorShape;

    fn set_cursor(&mut self, cursor: CursorShape);
}

/// The platform URL opener (browser launch).
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// The confirmation dialog surface.
pub trait ConfirmationPresenter: Send + Sync {
    /// Shows the confirmation dialog for the given URL.
    fn present(&self, url: &str);
}
