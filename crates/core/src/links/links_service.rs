use std::sync::Arc;

use log::debug;

use super::links_model::{CursorShape, LinkOutcome, MouseEvent, PendingConfirmation};
use super::links_traits::{ConfirmationPresenter, LinkElement, UrlOpener};
use crate::errors::Result;
use crate::settings::SettingsService;

/// Updates the element cursor from the link under the pointer.
///
/// Pointer-move glue: a pointing hand over a link, an arrow elsewhere.
pub fn handle_mouse_pointer(mouse: &MouseEvent, element: &mut dyn LinkElement) {
    let shape = match element.link_at(mouse.x, mouse.y) {
        Some(link) if !link.is_empty() => CursorShape::PointingHand,
        _ => CursorShape::Arrow,
    };
    element.set_cursor(shape);
}

/// Opens external links, asking for confirmation the first time.
pub struct LinkHandler {
    opener: Arc<dyn UrlOpener>,
    settings: Arc<SettingsService>,
    presenter: Arc<dyn ConfirmationPresenter>,
}

impl LinkHandler {
    pub fn new(
        opener: Arc<dyn UrlOpener>,
        settings: Arc<SettingsService>,
        presenter: Arc<dyn ConfirmationPresenter>,
    ) -> Self {
        LinkHandler {
            opener,
            settings,
            presenter,
        }
    }

    /// Opens `url` right away when the user has allowed it; otherwise shows
    /// the confirmation dialog and hands back the pending token.
    pub fn open_external(&self, url: &str) -> Result<LinkOutcome> {
        if self.settings.is_external_links_allowed()? {
            self.opener.open(url)?;
            return Ok(LinkOutcome::Opened);
        }
        debug!("Requesting confirmation before opening '{}'", url);
        let pending = PendingConfirmation {
            url: url.to_string(),
        };
        self.presenter.present(pending.url());
        Ok(LinkOutcome::ConfirmationRequested(pending))
    }

    /// Completes a pending confirmation.
    ///
    /// Approval remembers the choice and opens the URL; rejection drops the
    /// token. Consuming `pending` is what guarantees at-most-once delivery.
    pub fn resolve(&self, pending: PendingConfirmation, approved: bool) -> Result<()> {
        if !approved {
            debug!("External link '{}' rejected", pending.url());
            return Ok(());
        }
        self.settings.set_external_links_allowed(true)?;
        self.opener.open(&pending.url)
    }

    /// Click handler for rich text containing links.
    ///
    /// Returns `None` when the element is not showing a link cursor, so the
    /// caller falls through to default mouse handling; `Some(outcome)` means
    /// the click was consumed.
    pub fn handle_external_link(
        &self,
        mouse: &MouseEvent,
        element: &mut dyn LinkElement,
    ) -> Result<Option<LinkOutcome>> {
        if element.cursor() != CursorShape::PointingHand {
            return Ok(None);
        }
        match element.link_at(mouse.x, mouse.y) {
            Some(link) if !link.is_empty() => self.open_external(&link).map(Some),
            _ => Ok(Some(LinkOutcome::NoLink)),
        }
    }
}
