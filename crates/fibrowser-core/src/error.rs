//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] fibrowser_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] fibrowser_navigation::NavigationError),

    #[error("Download error: {0}")]
    Download(#[from] fibrowser_download::DownloadError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
