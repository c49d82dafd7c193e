//! Engine-side download interface
//!
//! The engine hands a [`DownloadItem`] to the shell when a page requests a
//! download. On accept it receives a [`ProgressReporter`] and calls it for
//! every progress or state change, in the order they happen.

use std::path::Path;
use std::sync::Arc;

use crate::download::{DownloadHandle, DownloadState};

/// A download negotiated by the engine, waiting for the shell's decision.
pub trait DownloadItem: Send {
    /// Target path chosen by the engine
    fn path(&self) -> &Path;

    /// Start the transfer and report through `reporter` from now on
    fn accept(&mut self, reporter: ProgressReporter);

    fn cancel(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DownloadUpdate {
    Progress { received: u64, total: Option<u64> },
    StateChanged(DownloadState),
}

/// Receiver side of download notifications.
pub trait DownloadListener: Send + Sync {
    fn on_download_update(&self, handle: DownloadHandle, update: DownloadUpdate);
}

/// Callback handle bound to one tracked download.
#[derive(Clone)]
pub struct ProgressReporter {
    handle: DownloadHandle,
    listener: Arc<dyn DownloadListener>,
}

impl ProgressReporter {
    pub fn new(handle: DownloadHandle, listener: Arc<dyn DownloadListener>) -> Self {
        Self { handle, listener }
    }

    pub fn handle(&self) -> DownloadHandle {
        self.handle
    }

    /// `total` is `None` when the size is unknown
    pub fn progress(&self, received: u64, total: Option<u64>) {
        self.listener
            .on_download_update(self.handle, DownloadUpdate::Progress { received, total });
    }

    pub fn state_changed(&self, state: DownloadState) {
        self.listener
            .on_download_update(self.handle, DownloadUpdate::StateChanged(state));
    }
}

impl std::fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
