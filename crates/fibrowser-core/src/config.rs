//! Browser configuration

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::theme::DEFAULT_THEME;
use crate::Result;
use fibrowser_navigation::DEFAULT_SEARCH_ENGINE;

/// Page opened by new tabs and the home button
pub const DEFAULT_HOME_PAGE: &str = "https://www.bing.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Homepage URL
    pub home_page: String,
    /// Search engine name selected at startup
    pub search_engine: String,
    /// Theme name applied at startup
    pub theme: String,
    /// Maximum number of action log entries kept; `None` keeps everything
    pub action_log_capacity: Option<usize>,
}

impl Config {
    /// Parse a configuration handed over by the embedding application.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.home_page.trim().is_empty() {
            return Err(CoreError::Config("Home page cannot be empty".to_string()));
        }
        if self.action_log_capacity == Some(0) {
            return Err(CoreError::Config(
                "Action log capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_page: DEFAULT_HOME_PAGE.to_string(),
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            action_log_capacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.home_page, "https://www.bing.com");
        assert_eq!(config.search_engine, "Google");
        assert_eq!(config.theme, "Dark");
        assert!(config.action_log_capacity.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "theme": "Blue", "action_log_capacity": 500 }"#).unwrap();
        assert_eq!(config.theme, "Blue");
        assert_eq!(config.action_log_capacity, Some(500));
        assert_eq!(config.home_page, DEFAULT_HOME_PAGE);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_json(r#"{ "home_page": "  " }"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "action_log_capacity": 0 }"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json("not json"),
            Err(CoreError::Serialization(_))
        ));
    }
}
