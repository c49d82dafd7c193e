//! Fibrowser Navigation
//!
//! Address bar input resolution:
//! 1. Text with a space, or without a `.` → search with the selected engine
//! 2. Anything else → URL, `https://` added when no scheme is given

mod error;
mod input;
mod search;

pub use error::NavigationError;
pub use input::{InputResolution, InputResolver};
pub use search::{SearchEngine, DEFAULT_SEARCH_ENGINE, SEARCH_ENGINES};

pub type Result<T> = std::result::Result<T, NavigationError>;
