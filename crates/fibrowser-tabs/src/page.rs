//! Engine page interface
//!
//! ```text
//! engine page ──PageEvents──▶ PageListener ──▶ window (by TabId)
//! ```

use std::sync::Arc;

use fibrowser_download::DownloadItem;

use crate::tab::TabId;

/// Navigation surface of one engine page.
pub trait WebPage {
    fn navigate(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
}

/// Creates pages for new tabs.
pub trait PageFactory {
    /// Build a page loading `url`; the page reports through `events`.
    fn create_page(&mut self, url: &str, events: PageEvents) -> Box<dyn WebPage>;
}

/// Notification emitted by a page.
pub enum PageEvent {
    UrlChanged(String),
    TitleChanged(String),
    /// Favicon reference, `None` when the page has none
    IconChanged(Option<String>),
    /// Load progress, 0-100
    LoadProgress(u8),
    DownloadRequested(Box<dyn DownloadItem>),
}

impl std::fmt::Debug for PageEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageEvent::UrlChanged(url) => f.debug_tuple("UrlChanged").field(url).finish(),
            PageEvent::TitleChanged(title) => f.debug_tuple("TitleChanged").field(title).finish(),
            PageEvent::IconChanged(icon) => f.debug_tuple("IconChanged").field(icon).finish(),
            PageEvent::LoadProgress(p) => f.debug_tuple("LoadProgress").field(p).finish(),
            PageEvent::DownloadRequested(item) => f
                .debug_tuple("DownloadRequested")
                .field(&item.path())
                .finish(),
        }
    }
}

/// Receiver side of page notifications.
pub trait PageListener: Send + Sync {
    fn on_page_event(&self, tab: TabId, event: PageEvent);
}

/// Callback handle given to a page at creation, bound to its tab.
#[derive(Clone)]
pub struct PageEvents {
    tab: TabId,
    listener: Arc<dyn PageListener>,
}

impl PageEvents {
    pub fn new(tab: TabId, listener: Arc<dyn PageListener>) -> Self {
        Self { tab, listener }
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn url_changed(&self, url: impl Into<String>) {
        self.emit(PageEvent::UrlChanged(url.into()));
    }

    pub fn title_changed(&self, title: impl Into<String>) {
        self.emit(PageEvent::TitleChanged(title.into()));
    }

    pub fn icon_changed(&self, icon: Option<String>) {
        self.emit(PageEvent::IconChanged(icon));
    }

    pub fn load_progress(&self, percent: u8) {
        self.emit(PageEvent::LoadProgress(percent));
    }

    pub fn download_requested(&self, item: Box<dyn DownloadItem>) {
        self.emit(PageEvent::DownloadRequested(item));
    }

    fn emit(&self, event: PageEvent) {
        self.listener.on_page_event(self.tab, event);
    }
}

impl std::fmt::Debug for PageEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageEvents")
            .field("tab", &self.tab)
            .finish_non_exhaustive()
    }
}
