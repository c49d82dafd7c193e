//! Fibrowser Tabs
//!
//! A tab is one browsing context: a page created by the engine plus the
//! navigation state the window shows for it (title, icon, URL).
//! Pages never hold a reference to the window. They report through a
//! [`PageEvents`] handle carrying the tab's id, and the window resolves that
//! id against its [`TabStrip`] when the event is handled.

mod error;
mod page;
mod strip;
mod tab;

pub use error::TabError;
pub use page::{PageEvent, PageEvents, PageFactory, PageListener, WebPage};
pub use strip::TabStrip;
pub use tab::{truncate_title, TabId, TabState, NEW_TAB_TITLE, TITLE_MAX_CHARS};

pub type Result<T> = std::result::Result<T, TabError>;
