//! Serializable view of the window for the toolkit layer

use serde::Serialize;

use fibrowser_download::DownloadRecord;
use fibrowser_tabs::TabState;

use crate::widgets::{AddressBar, ProgressIndicator};
use crate::window::BrowserWindow;
use crate::Result;

#[derive(Debug, Clone, Serialize)]
pub struct TabInfo {
    pub id: String,
    pub url: String,
    pub title: String,
    pub favicon: Option<String>,
    pub created_at: String,
}

impl From<&TabState> for TabInfo {
    fn from(tab: &TabState) -> Self {
        Self {
            id: tab.id().to_string(),
            url: tab.url().to_string(),
            title: tab.title().to_string(),
            favicon: tab.favicon().map(str::to_string),
            created_at: tab.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadInfo {
    pub id: String,
    pub file_name: String,
    pub file_path: String,
    pub total_bytes: Option<u64>,
    pub downloaded_bytes: u64,
    pub state: String,
    pub percent: u8,
    pub rate: String,
    pub started_at: String,
}

impl From<&DownloadRecord> for DownloadInfo {
    fn from(record: &DownloadRecord) -> Self {
        Self {
            id: record.handle().to_string(),
            file_name: record.file_name(),
            file_path: record.target_path().to_string_lossy().to_string(),
            total_bytes: record.bytes_total(),
            downloaded_bytes: record.bytes_received(),
            state: record.state().as_str().to_string(),
            percent: record.percent(),
            rate: record.rate_label(),
            started_at: record.start_time().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowSnapshot {
    pub tabs: Vec<TabInfo>,
    pub current_tab: usize,
    pub address_bar: AddressBar,
    pub progress: ProgressIndicator,
    pub search_engine: &'static str,
    pub search_selector_label: String,
    pub theme: &'static str,
    pub bookmarks_bar_visible: bool,
    pub dev_tools_visible: bool,
    pub downloads_visible: bool,
    pub downloads: Vec<DownloadInfo>,
    pub status: String,
    pub console: Vec<String>,
}

impl WindowSnapshot {
    pub fn capture(window: &BrowserWindow) -> Self {
        Self {
            tabs: window.tabs().iter().map(TabInfo::from).collect(),
            current_tab: window.tabs().current_index(),
            address_bar: window.address_bar().clone(),
            progress: *window.progress(),
            search_engine: window.search_engine().name,
            search_selector_label: window.search_selector_label(),
            theme: window.theme().name,
            bookmarks_bar_visible: window.bookmarks_bar_visible(),
            dev_tools_visible: window.dev_tools_visible(),
            downloads_visible: window.downloads().is_visible(),
            downloads: window.downloads().records().map(DownloadInfo::from).collect(),
            status: window.status().to_string(),
            console: window.log().console_lines(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
