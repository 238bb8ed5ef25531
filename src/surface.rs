//! Capabilities the host page provides.
//!
//! The crate never touches markup directly. Whatever renders the page
//! (a browser binding, a terminal UI, a test spy) implements these.

use crate::avatar::AvatarState;
use crate::notify::Toast;
use crate::toggle::{ItemId, RowView};

/// Avatar preview and its save control.
pub trait AvatarSurface: Send {
    fn render(&mut self, state: &AvatarState);
}

/// One assignment row's button and styling.
pub trait RowSurface: Send {
    fn render_row(&mut self, id: ItemId, view: &RowView);
}

/// Transient banner area.
pub trait ToastSurface: Send {
    fn show(&mut self, toast: &Toast);
    fn hide(&mut self);
}

/// Blocking fallback used when no toast surface exists.
pub trait BlockingAlert: Send {
    fn alert(&mut self, message: &str);
}

/// The "unsaved changes" confirmation dialog.
pub trait ConfirmDialog: Send {
    fn open(&mut self);
    fn close(&mut self);
}

/// Leaves the page.
pub trait Navigator: Send {
    fn navigate(&mut self, target_url: &str);
}

/// Source of the anti-forgery token embedded in the page.
///
/// Queried once per request; implementations must not cache.
pub trait TokenSource: Send {
    fn csrf_token(&self) -> Option<String>;
}

/// Everything a `ProfilePage` needs from its host.
pub struct PageSurfaces {
    pub avatar: Box<dyn AvatarSurface>,
    pub rows: Box<dyn RowSurface>,
    /// `None` when the page has no toast markup.
    pub toast: Option<Box<dyn ToastSurface>>,
    pub alert: Box<dyn BlockingAlert>,
    pub dialog: Box<dyn ConfirmDialog>,
    pub navigator: Box<dyn Navigator>,
    pub tokens: Box<dyn TokenSource>,
}
