//! Engine event queue
//!
//! Pages and downloads post notifications through [`EventSender`]; the window
//! drains the queue on the UI thread. A single FIFO keeps the emission order
//! across every page and download.

use tokio::sync::mpsc;

use fibrowser_download::{DownloadHandle, DownloadListener, DownloadUpdate};
use fibrowser_tabs::{PageEvent, PageListener, TabId};

#[derive(Debug)]
pub enum BrowserEvent {
    Page { tab: TabId, event: PageEvent },
    Download { handle: DownloadHandle, update: DownloadUpdate },
}

/// Posting side of the queue, handed to pages and downloads as their listener.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<BrowserEvent>,
}

impl EventSender {
    pub fn send(&self, event: BrowserEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("Window closed, dropping engine event");
        }
    }
}

impl PageListener for EventSender {
    fn on_page_event(&self, tab: TabId, event: PageEvent) {
        self.send(BrowserEvent::Page { tab, event });
    }
}

impl DownloadListener for EventSender {
    fn on_download_update(&self, handle: DownloadHandle, update: DownloadUpdate) {
        self.send(BrowserEvent::Download { handle, update });
    }
}

#[derive(Debug)]
pub struct EventQueue {
    sender: EventSender,
    rx: mpsc::UnboundedReceiver<BrowserEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            sender: EventSender { tx },
            rx,
        }
    }

    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Next pending event, without waiting
    pub fn try_next(&mut self) -> Option<BrowserEvent> {
        self.rx.try_recv().ok()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
