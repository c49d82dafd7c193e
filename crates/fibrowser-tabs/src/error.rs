//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("Tab index out of range: {0}")]
    IndexOutOfRange(usize),

    #[error("Cannot close the last tab")]
    LastTab,
}
