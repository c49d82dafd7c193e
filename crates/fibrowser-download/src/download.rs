//! Download record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Handle returned when a download is registered; used to route later updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownloadHandle(Uuid);

impl DownloadHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DownloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DownloadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadState {
    /// Bytes are still arriving
    InProgress,
    /// Engine reported the transfer as finished
    Completed,
    /// Cancelled by the user or the page
    Cancelled,
    /// Engine gave up on the transfer
    Failed,
}

impl DownloadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::InProgress => "in_progress",
            DownloadState::Completed => "completed",
            DownloadState::Cancelled => "cancelled",
            DownloadState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DownloadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracked state of one file transfer.
///
/// Only the owning [`DownloadManager`](crate::DownloadManager) mutates a
/// record, in response to engine notifications.
#[derive(Debug, Clone)]
pub struct DownloadRecord {
    handle: DownloadHandle,
    target_path: PathBuf,
    bytes_received: u64,
    bytes_total: Option<u64>,
    start_time: DateTime<Utc>,
    state: DownloadState,
    percent: u8,
    rate_kbps: f64,
}

impl DownloadRecord {
    pub fn new(target_path: PathBuf) -> Self {
        Self::started_at(target_path, Utc::now())
    }

    pub fn started_at(target_path: PathBuf, start_time: DateTime<Utc>) -> Self {
        Self {
            handle: DownloadHandle::new(),
            target_path,
            bytes_received: 0,
            bytes_total: None,
            start_time,
            state: DownloadState::InProgress,
            percent: 0,
            rate_kbps: 0.0,
        }
    }

    pub fn handle(&self) -> DownloadHandle {
        self.handle
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Last path component, as shown in the downloads list
    pub fn file_name(&self) -> String {
        self.target_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target_path.to_string_lossy().into_owned())
    }

    pub fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    /// `None` while the engine does not know the size
    pub fn bytes_total(&self) -> Option<u64> {
        self.bytes_total
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn state(&self) -> DownloadState {
        self.state
    }

    /// Progress percentage (0-100)
    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn rate_kbps(&self) -> f64 {
        self.rate_kbps
    }

    /// Text for the rate column
    pub fn rate_label(&self) -> String {
        if self.state == DownloadState::Completed {
            "Completed".to_string()
        } else {
            format!("{:.1} KB/s", self.rate_kbps)
        }
    }

    /// True once the progress bar reads 100, whatever the state
    pub fn is_full(&self) -> bool {
        self.percent == 100
    }

    /// Transfer rate in KB/s over whole seconds elapsed since start.
    pub fn rate_at(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = (now - self.start_time).num_seconds();
        if elapsed <= 0 {
            return 0.0;
        }
        self.bytes_received as f64 / (elapsed as f64 * 1024.0)
    }

    pub(crate) fn apply_progress(&mut self, received: u64, total: Option<u64>, now: DateTime<Utc>) {
        if let Some(t) = total {
            self.bytes_total = Some(t);
        }

        self.bytes_received = match self.bytes_total {
            Some(t) => received.min(t),
            None => received,
        };

        if self.state == DownloadState::Completed {
            return;
        }

        if let Some(total) = self.bytes_total.filter(|t| *t > 0) {
            let percent = u128::from(self.bytes_received) * 100 / u128::from(total);
            self.percent = percent.min(100) as u8;
            self.rate_kbps = self.rate_at(now);
        }
    }

    pub(crate) fn apply_state(&mut self, state: DownloadState) {
        self.state = state;
        if state == DownloadState::Completed {
            // Covers transfers whose size was never reported
            self.percent = 100;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record() -> DownloadRecord {
        DownloadRecord::started_at(PathBuf::from("/downloads/report.pdf"), Utc::now())
    }

    #[test]
    fn test_new_record() {
        let record = record();
        assert_eq!(record.state(), DownloadState::InProgress);
        assert_eq!(record.bytes_received(), 0);
        assert_eq!(record.bytes_total(), None);
        assert_eq!(record.percent(), 0);
        assert_eq!(record.file_name(), "report.pdf");
    }

    #[test]
    fn test_percent() {
        let mut record = record();
        let now = record.start_time();
        record.apply_progress(50, Some(100), now);
        assert_eq!(record.percent(), 50);

        record.apply_progress(999, Some(1000), now);
        assert_eq!(record.percent(), 99);
    }

    #[test]
    fn test_unknown_total_keeps_percent() {
        let mut record = record();
        let now = record.start_time();
        record.apply_progress(4096, None, now);
        assert_eq!(record.bytes_received(), 4096);
        assert_eq!(record.percent(), 0);
        assert_eq!(record.rate_kbps(), 0.0);
    }

    #[test]
    fn test_received_clamped_to_total() {
        let mut record = record();
        let now = record.start_time();
        record.apply_progress(150, Some(100), now);
        assert_eq!(record.bytes_received(), 100);
        assert_eq!(record.percent(), 100);

        // A later update without size keeps the known total
        record.apply_progress(300, None, now);
        assert_eq!(record.bytes_total(), Some(100));
        assert_eq!(record.bytes_received(), 100);
    }

    #[test]
    fn test_zero_elapsed_rate() {
        let mut record = record();
        let now = record.start_time();
        record.apply_progress(10_240, Some(20_480), now);
        assert_eq!(record.rate_kbps(), 0.0);
        assert!(!record.rate_kbps().is_nan());
        assert_eq!(record.rate_label(), "0.0 KB/s");
    }

    #[test]
    fn test_rate_whole_seconds() {
        let mut record = record();
        let now = record.start_time() + Duration::milliseconds(2_900);
        record.apply_progress(20_480, Some(40_960), now);
        // 2.9s counts as 2 whole seconds
        assert!((record.rate_kbps() - 10.0).abs() < f64::EPSILON);
        assert_eq!(record.rate_label(), "10.0 KB/s");
    }

    #[test]
    fn test_completed_forces_full() {
        let mut record = record();
        let now = record.start_time() + Duration::seconds(4);
        record.apply_progress(1_000, None, now);
        record.apply_state(DownloadState::Completed);
        assert_eq!(record.percent(), 100);
        assert!(record.is_full());
        assert_eq!(record.rate_label(), "Completed");

        // Late progress does not bring the numeric rate back
        record.apply_progress(2_000, Some(4_000), now);
        assert_eq!(record.rate_label(), "Completed");
        assert_eq!(record.percent(), 100);
        assert_eq!(record.bytes_received(), 2_000);
    }

    #[test]
    fn test_cancelled_keeps_percent() {
        let mut record = record();
        let now = record.start_time();
        record.apply_progress(30, Some(100), now);
        record.apply_state(DownloadState::Cancelled);
        assert_eq!(record.percent(), 30);
        assert_eq!(record.state(), DownloadState::Cancelled);
    }
}
