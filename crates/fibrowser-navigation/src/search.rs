//! Search engine registry

use serde::Serialize;

use crate::error::NavigationError;
use crate::Result;

/// Engine selected when nothing else is configured
pub const DEFAULT_SEARCH_ENGINE: &str = "Google";

const QUERY_MARKER: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchEngine {
    pub name: &'static str,
    /// URL with a single `{}` where the query goes
    pub url_template: &'static str,
}

pub static SEARCH_ENGINES: [SearchEngine; 4] = [
    SearchEngine {
        name: "Google",
        url_template: "https://www.google.com/search?q={}",
    },
    SearchEngine {
        name: "Bing",
        url_template: "https://www.bing.com/search?q={}",
    },
    SearchEngine {
        name: "DuckDuckGo",
        url_template: "https://duckduckgo.com/?q={}",
    },
    SearchEngine {
        name: "YouTube",
        url_template: "https://www.youtube.com/results?search_query={}",
    },
];

impl SearchEngine {
    pub fn all() -> &'static [SearchEngine] {
        &SEARCH_ENGINES
    }

    pub fn find(name: &str) -> Result<&'static SearchEngine> {
        SEARCH_ENGINES
            .iter()
            .find(|engine| engine.name == name)
            .ok_or_else(|| NavigationError::UnknownSearchEngine(name.to_string()))
    }

    pub fn default_engine() -> &'static SearchEngine {
        &SEARCH_ENGINES[0]
    }

    /// Registry entry for `name`, or the default engine
    pub fn find_or_default(name: &str) -> &'static SearchEngine {
        Self::find(name).unwrap_or_else(|e| {
            tracing::warn!(error = %e, fallback = DEFAULT_SEARCH_ENGINE, "Falling back to default search engine");
            Self::default_engine()
        })
    }

    /// Substitute the form-encoded query into the template
    pub fn search_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        self.url_template.replacen(QUERY_MARKER, &encoded, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_have_one_marker() {
        for engine in SearchEngine::all() {
            assert_eq!(engine.url_template.matches(QUERY_MARKER).count(), 1, "{}", engine.name);
        }
    }

    #[test]
    fn test_default_is_google() {
        assert_eq!(SearchEngine::default_engine().name, DEFAULT_SEARCH_ENGINE);
    }

    #[test]
    fn test_find() {
        assert_eq!(SearchEngine::find("Bing").unwrap().name, "Bing");
        assert!(matches!(
            SearchEngine::find("AltaVista"),
            Err(NavigationError::UnknownSearchEngine(_))
        ));
        assert_eq!(SearchEngine::find_or_default("AltaVista").name, "Google");
    }

    #[test]
    fn test_search_url() {
        let engine = SearchEngine::find("DuckDuckGo").unwrap();
        assert_eq!(
            engine.search_url("rust programming"),
            "https://duckduckgo.com/?q=rust+programming"
        );

        let engine = SearchEngine::find("YouTube").unwrap();
        assert_eq!(
            engine.search_url("a&b={}"),
            "https://www.youtube.com/results?search_query=a%26b%3D%7B%7D"
        );
    }
}
