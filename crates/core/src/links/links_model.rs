/// Cursor glyph the rich-text element should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Arrow,
    PointingHand,
}

/// Position of a mouse event, in element-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub x: f64,
    pub y: f64,
}

impl MouseEvent {
    pub fn new(x: f64, y: f64) -> Self {
        MouseEvent { x, y }
    }
}

/// One-shot token for a link waiting on user confirmation.
///
/// Neither `Clone` nor `Copy`: [`LinkHandler::resolve`](crate::links::LinkHandler::resolve)
/// consumes it, so a confirmation can be acted on at most once.
#[derive(Debug)]
pub struct PendingConfirmation {
    pub(crate) url: String,
}

impl PendingConfirmation {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// What the link handler did with a requested URL.
#[derive(Debug)]
pub enum LinkOutcome {
    /// The URL was opened right away.
    Opened,
    /// The confirmation dialog was shown; the caller holds the token until
    /// the user decides.
    ConfirmationRequested(PendingConfirmation),
    /// The element's link cursor was stale; the click was consumed but there
    /// was nothing to open.
    NoLink,
}
