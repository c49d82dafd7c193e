//! Download error types

use thiserror::Error;

use crate::download::DownloadHandle;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Download not found: {0}")]
    NotFound(DownloadHandle),
}
