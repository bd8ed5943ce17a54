//! Links module - external-hyperlink handling for rich text.
//!
//! Cursor glue, URL opening, and the one-shot confirmation protocol that
//! gates machine-generated ("MW") links behind user approval.

mod links_model;
mod links_service;
mod links_traits;


pub use links_model::{CursorShape, LinkOutcome, MouseEvent, PendingConfirmation};
pub use links_service::{handle_mouse_pointer, LinkHandler};
pub use links_traits::{ConfirmationPresenter, LinkElement, UrlOpener};
