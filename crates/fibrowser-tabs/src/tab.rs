//! Tab data structure
//!
//! Tabs display:
//! - Favicon
//! - Title (truncated)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::page::{PageEvents, PageFactory, PageListener, WebPage};

/// Longest title shown on a tab label before it is cut
pub const TITLE_MAX_CHARS: usize = 30;

/// Label of a tab whose page has not reported a title yet
pub const NEW_TAB_TITLE: &str = "New Tab";

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cut a page title to [`TITLE_MAX_CHARS`] characters plus `...`.
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &title[..cut], ELLIPSIS),
        None => title.to_string(),
    }
}

pub struct TabState {
    /// Unique identifier
    id: TabId,
    /// Display title, already truncated
    title: String,
    /// Favicon reference if the page reported one
    favicon: Option<String>,
    /// Last URL reported by the page
    url: String,
    page: Box<dyn WebPage>,
    created_at: DateTime<Utc>,
}

impl TabState {
    /// Create a tab and its page, wiring page notifications to `listener`.
    pub fn create(
        factory: &mut dyn PageFactory,
        url: &str,
        listener: Arc<dyn PageListener>,
    ) -> Self {
        let id = TabId::new();
        let page = factory.create_page(url, PageEvents::new(id, listener));

        tracing::info!(tab_id = %id, url = %url, "Created new tab");

        Self {
            id,
            title: NEW_TAB_TITLE.to_string(),
            favicon: None,
            url: url.to_string(),
            page,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Store a page title, truncated for the tab label
    pub fn set_title(&mut self, title: &str) {
        self.title = truncate_title(title);
    }

    pub fn set_favicon(&mut self, favicon: Option<String>) {
        self.favicon = favicon;
    }

    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    pub fn page_mut(&mut self) -> &mut dyn WebPage {
        self.page.as_mut()
    }
}

impl std::fmt::Debug for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabState")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("favicon", &self.favicon)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
