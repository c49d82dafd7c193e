//! Input resolution for address bar

use crate::search::{SearchEngine, DEFAULT_SEARCH_ENGINE};

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Navigate to a URL
    Navigate(String),
    /// Search results URL
    Search(String),
}

impl InputResolution {
    /// URL to load either way
    pub fn url(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    engine: &'static SearchEngine,
}

impl InputResolver {
    pub fn new() -> Self {
        Self::with_search_engine(DEFAULT_SEARCH_ENGINE)
    }

    /// Unknown names fall back to the default engine
    pub fn with_search_engine(name: &str) -> Self {
        Self {
            engine: SearchEngine::find_or_default(name),
        }
    }

    /// Select an engine by name; returns the engine actually selected
    pub fn set_search_engine(&mut self, name: &str) -> &'static SearchEngine {
        self.engine = SearchEngine::find_or_default(name);
        self.engine
    }

    pub fn search_engine(&self) -> &'static SearchEngine {
        self.engine
    }

    /// Resolve user input into a URL to load
    pub fn resolve(&self, input: &str) -> InputResolution {
        if input.contains(' ') || !input.contains('.') {
            return InputResolution::Search(self.engine.search_url(input));
        }

        if has_scheme(input) {
            InputResolution::Navigate(input.to_string())
        } else {
            InputResolution::Navigate(format!("https://{input}"))
        }
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// `scheme://...` with a syntactically valid scheme name
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let resolver = InputResolver::new();

        // Full URL
        assert_eq!(
            resolver.resolve("https://example.com"),
            InputResolution::Navigate("https://example.com".to_string())
        );
        assert_eq!(
            resolver.resolve("http://example.com/a"),
            InputResolution::Navigate("http://example.com/a".to_string())
        );

        // Domain only
        assert_eq!(
            resolver.resolve("example.com"),
            InputResolution::Navigate("https://example.com".to_string())
        );
        assert_eq!(
            resolver.resolve("docs.rs/tokio"),
            InputResolution::Navigate("https://docs.rs/tokio".to_string())
        );

        // Other schemes are kept
        assert_eq!(
            resolver.resolve("ftp://files.example.org"),
            InputResolution::Navigate("ftp://files.example.org".to_string())
        );
    }

    #[test]
    fn test_resolve_search() {
        let resolver = InputResolver::new();

        match resolver.resolve("rust programming") {
            InputResolution::Search(url) => {
                assert_eq!(url, "https://www.google.com/search?q=rust+programming");
            }
            other => panic!("Expected Search, got {other:?}"),
        }

        // No dot means search, even for host-like input
        assert!(matches!(
            resolver.resolve("localhost:8080"),
            InputResolution::Search(_)
        ));

        // A space wins over a dot
        assert_eq!(
            resolver.resolve("what is example.com").url(),
            "https://www.google.com/search?q=what+is+example.com"
        );
    }

    #[test]
    fn test_selected_engine() {
        let mut resolver = InputResolver::new();
        assert_eq!(resolver.set_search_engine("Bing").name, "Bing");
        assert_eq!(
            resolver.resolve("weather").url(),
            "https://www.bing.com/search?q=weather"
        );

        assert_eq!(resolver.set_search_engine("Nope").name, "Google");
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://a.b"));
        assert!(has_scheme("view-source://a.b"));
        assert!(!has_scheme("a.b"));
        assert!(!has_scheme("://a.b"));
        assert!(!has_scheme("1http://a.b"));
        assert!(!has_scheme("example.com/redirect?to=https://x.y"));
    }
}
