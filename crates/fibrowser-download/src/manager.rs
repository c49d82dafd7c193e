//! Download manager

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::download::{DownloadHandle, DownloadRecord, DownloadState};
use crate::error::DownloadError;
use crate::item::{DownloadItem, DownloadListener, DownloadUpdate, ProgressReporter};
use crate::Result;

struct TrackedDownload {
    record: DownloadRecord,
    item: Box<dyn DownloadItem>,
}

/// Ordered list of downloads plus the visibility of the downloads panel.
pub struct DownloadManager {
    /// Arrival order, never reordered
    downloads: Vec<TrackedDownload>,
    visible: bool,
}

impl DownloadManager {
    pub fn new() -> Self {
        Self {
            downloads: Vec::new(),
            visible: false,
        }
    }

    /// Accept a download and start tracking it.
    ///
    /// The item is accepted right away; its notifications go to `listener`
    /// tagged with the returned handle.
    pub fn add(
        &mut self,
        mut item: Box<dyn DownloadItem>,
        listener: Arc<dyn DownloadListener>,
    ) -> DownloadHandle {
        let record = DownloadRecord::new(item.path().to_path_buf());
        let handle = record.handle();

        item.accept(ProgressReporter::new(handle, listener));

        tracing::info!(
            download = %handle,
            path = %record.target_path().display(),
            "Accepted download"
        );

        self.downloads.push(TrackedDownload { record, item });
        handle
    }

    pub fn get(&self, handle: DownloadHandle) -> Result<&DownloadRecord> {
        self.downloads
            .iter()
            .find(|d| d.record.handle() == handle)
            .map(|d| &d.record)
            .ok_or(DownloadError::NotFound(handle))
    }

    fn tracked_mut(&mut self, handle: DownloadHandle) -> Result<&mut TrackedDownload> {
        self.downloads
            .iter_mut()
            .find(|d| d.record.handle() == handle)
            .ok_or(DownloadError::NotFound(handle))
    }

    /// Apply one engine notification
    pub fn apply(&mut self, handle: DownloadHandle, update: DownloadUpdate) -> Result<&DownloadRecord> {
        match update {
            DownloadUpdate::Progress { received, total } => {
                self.update_progress(handle, received, total)
            }
            DownloadUpdate::StateChanged(state) => self.update_state(handle, state),
        }
    }

    pub fn update_progress(
        &mut self,
        handle: DownloadHandle,
        received: u64,
        total: Option<u64>,
    ) -> Result<&DownloadRecord> {
        self.update_progress_at(handle, received, total, Utc::now())
    }

    pub fn update_progress_at(
        &mut self,
        handle: DownloadHandle,
        received: u64,
        total: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<&DownloadRecord> {
        let tracked = self.tracked_mut(handle)?;
        tracked.record.apply_progress(received, total, now);

        tracing::trace!(
            download = %handle,
            received,
            total = ?total,
            percent = tracked.record.percent(),
            "Download progress"
        );

        Ok(&tracked.record)
    }

    pub fn update_state(
        &mut self,
        handle: DownloadHandle,
        state: DownloadState,
    ) -> Result<&DownloadRecord> {
        let tracked = self.tracked_mut(handle)?;
        tracked.record.apply_state(state);

        match state {
            DownloadState::Failed => tracing::warn!(download = %handle, "Download failed"),
            _ => tracing::info!(download = %handle, state = %state, "Download state changed"),
        }

        Ok(&tracked.record)
    }

    /// Ask the engine to cancel; the state change arrives as a notification.
    pub fn cancel(&mut self, handle: DownloadHandle) -> Result<()> {
        let tracked = self.tracked_mut(handle)?;
        if tracked.record.state() == DownloadState::InProgress {
            tracked.item.cancel();
            tracing::info!(download = %handle, "Requested download cancel");
        }
        Ok(())
    }

    /// Remove every record whose progress reads 100.
    ///
    /// Scans from the back so that removals never shift entries that are
    /// still to be visited.
    pub fn clear_completed(&mut self) -> usize {
        let mut removed = 0;
        for index in (0..self.downloads.len()).rev() {
            if self.downloads[index].record.is_full() {
                self.downloads.remove(index);
                removed += 1;
            }
        }

        tracing::debug!(removed, remaining = self.downloads.len(), "Cleared completed downloads");

        removed
    }

    /// All records in arrival order
    pub fn records(&self) -> impl Iterator<Item = &DownloadRecord> {
        self.downloads.iter().map(|d| &d.record)
    }

    pub fn active_count(&self) -> usize {
        self.records()
            .filter(|r| r.state() == DownloadState::InProgress)
            .count()
    }

    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct Recorder {
        updates: Mutex<Vec<(DownloadHandle, DownloadUpdate)>>,
    }

    impl DownloadListener for Recorder {
        fn on_download_update(&self, handle: DownloadHandle, update: DownloadUpdate) {
            self.updates.lock().push((handle, update));
        }
    }

    struct FakeItem {
        path: PathBuf,
        reporter: Arc<Mutex<Option<ProgressReporter>>>,
        cancelled: Arc<AtomicBool>,
    }

    impl DownloadItem for FakeItem {
        fn path(&self) -> &Path {
            &self.path
        }

        fn accept(&mut self, reporter: ProgressReporter) {
            *self.reporter.lock() = Some(reporter);
        }

        fn cancel(&mut self) {
            self.cancelled.store(true, Ordering::SeqCst);
        }
    }

    fn fake(path: &str) -> (Box<FakeItem>, Arc<Mutex<Option<ProgressReporter>>>, Arc<AtomicBool>) {
        let reporter = Arc::new(Mutex::new(None));
        let cancelled = Arc::new(AtomicBool::new(false));
        let item = Box::new(FakeItem {
            path: PathBuf::from(path),
            reporter: Arc::clone(&reporter),
            cancelled: Arc::clone(&cancelled),
        });
        (item, reporter, cancelled)
    }

    #[test]
    fn test_add_accepts_and_reports() {
        let listener = Arc::new(Recorder::default());
        let mut manager = DownloadManager::new();

        let (item, reporter, _) = fake("/tmp/report.pdf");
        let handle = manager.add(item, listener.clone());

        let reporter = reporter.lock().clone().unwrap();
        assert_eq!(reporter.handle(), handle);

        reporter.progress(50, Some(100));
        reporter.state_changed(DownloadState::Completed);

        let updates = listener.updates.lock().clone();
        assert_eq!(updates.len(), 2);
        for (h, update) in updates {
            manager.apply(h, update).unwrap();
        }

        let record = manager.get(handle).unwrap();
        assert_eq!(record.percent(), 100);
        assert_eq!(record.rate_label(), "Completed");
    }

    #[test]
    fn test_arrival_order() {
        let listener = Arc::new(Recorder::default());
        let mut manager = DownloadManager::new();

        for name in ["/a.zip", "/b.zip", "/c.zip"] {
            let (item, _, _) = fake(name);
            manager.add(item, listener.clone());
        }

        let names: Vec<String> = manager.records().map(|r| r.file_name()).collect();
        assert_eq!(names, vec!["a.zip", "b.zip", "c.zip"]);
        assert_eq!(manager.active_count(), 3);
    }

    #[test]
    fn test_unknown_handle() {
        let mut manager = DownloadManager::new();
        let result = manager.update_state(DownloadHandle::new(), DownloadState::Completed);
        assert!(matches!(result, Err(DownloadError::NotFound(_))));
    }

    #[test]
    fn test_clear_completed() {
        let listener = Arc::new(Recorder::default());
        let mut manager = DownloadManager::new();

        let mut handles = Vec::new();
        for name in ["/1", "/2", "/3", "/4", "/5"] {
            let (item, _, _) = fake(name);
            handles.push(manager.add(item, listener.clone()));
        }

        // 1: completed, 2: half way, 3: full bytes but no state yet,
        // 4: cancelled half way, 5: completed with unknown size
        manager.update_state(handles[0], DownloadState::Completed).unwrap();
        manager.update_progress(handles[1], 5, Some(10)).unwrap();
        manager.update_progress(handles[2], 10, Some(10)).unwrap();
        manager.update_progress(handles[3], 3, Some(10)).unwrap();
        manager.update_state(handles[3], DownloadState::Cancelled).unwrap();
        manager.update_progress(handles[4], 42, None).unwrap();
        manager.update_state(handles[4], DownloadState::Completed).unwrap();

        assert_eq!(manager.clear_completed(), 3);

        let left: Vec<DownloadHandle> = manager.records().map(|r| r.handle()).collect();
        assert_eq!(left, vec![handles[1], handles[3]]);

        // Nothing left to clear
        assert_eq!(manager.clear_completed(), 0);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_cancel_only_in_progress() {
        let listener = Arc::new(Recorder::default());
        let mut manager = DownloadManager::new();

        let (item, _, cancelled) = fake("/big.iso");
        let handle = manager.add(item, listener.clone());
        manager.cancel(handle).unwrap();
        assert!(cancelled.load(Ordering::SeqCst));

        let (item, _, cancelled) = fake("/done.iso");
        let handle = manager.add(item, listener);
        manager.update_state(handle, DownloadState::Completed).unwrap();
        manager.cancel(handle).unwrap();
        assert!(!cancelled.load(Ordering::SeqCst));
    }

    #[test]
    fn test_visibility() {
        let mut manager = DownloadManager::new();
        assert!(!manager.is_visible());
        manager.show();
        assert!(manager.is_visible());
        manager.hide();
        assert!(!manager.is_visible());
    }
}
