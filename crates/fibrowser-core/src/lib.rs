//! Fibrowser Core
//!
//! Window state of the Fibrowser shell. The rendering engine and the widget
//! toolkit stay outside: pages and downloads are driven through traits and
//! report back through the window's event queue.

mod action_log;
mod bookmarks;
mod config;
mod error;
mod events;
mod shortcuts;
mod snapshot;
mod theme;
mod widgets;
mod window;

pub use action_log::{ActionLog, ActionLogEntry, INITIAL_STATUS};
pub use bookmarks::{Bookmark, BOOKMARKS};
pub use config::{Config, DEFAULT_HOME_PAGE};
pub use error::CoreError;
pub use events::{BrowserEvent, EventQueue, EventSender};
pub use shortcuts::{Shortcut, WindowCommand, SHORTCUTS};
pub use snapshot::{DownloadInfo, TabInfo, WindowSnapshot};
pub use theme::{Color, Theme, DEFAULT_THEME, THEMES};
pub use widgets::{AddressBar, ProgressIndicator};
pub use window::BrowserWindow;

// Re-export engine-facing types
pub use fibrowser_download::{
    DownloadError, DownloadHandle, DownloadItem, DownloadListener, DownloadManager,
    DownloadRecord, DownloadState, DownloadUpdate, ProgressReporter,
};
pub use fibrowser_navigation::{
    InputResolution, InputResolver, NavigationError, SearchEngine, DEFAULT_SEARCH_ENGINE,
    SEARCH_ENGINES,
};
pub use fibrowser_tabs::{
    PageEvent, PageEvents, PageFactory, PageListener, TabError, TabId, TabState, TabStrip,
    WebPage,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
