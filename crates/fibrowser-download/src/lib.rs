//! Fibrowser Download Tracking
//!
//! The engine owns the byte transfer. This crate only mirrors what the engine
//! reports:
//! - Downloads are accepted unconditionally and tracked in arrival order
//! - Progress percent and transfer rate are derived from reported byte counts
//! - Records leave the list only through "clear completed"

mod download;
mod error;
mod item;
mod manager;

pub use download::{DownloadHandle, DownloadRecord, DownloadState};
pub use error::DownloadError;
pub use item::{DownloadItem, DownloadListener, DownloadUpdate, ProgressReporter};
pub use manager::DownloadManager;

pub type Result<T> = std::result::Result<T, DownloadError>;
