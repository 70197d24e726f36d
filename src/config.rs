//! Configuration for kiosktui
//!
//! Two externally supplied values: the TMDB API credential and the detail
//! URL template. Both come from ~/.config/kiosktui/config.toml; the
//! credential can also arrive via the TMDB_API_KEY environment variable.
//! A missing credential blocks search only, never startup. A template
//! without the `{id}` placeholder is the one startup-time failure.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default detail view address pattern
pub const DEFAULT_DETAIL_URL_TEMPLATE: &str = "https://www.themoviedb.org/movie/{id}";

/// Substitution token in the detail URL template
pub const ID_PLACEHOLDER: &str = "{id}";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TMDB API key
    pub api_key: Option<String>,
    /// Detail view URL template with an `{id}` placeholder
    pub detail_url_template: Option<String>,
}

impl Config {
    /// Config file path (~/.config/kiosktui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kiosktui").join("config.toml"))
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Effective API key: TMDB_API_KEY env var first, then the config file
    pub fn api_key(&self) -> Option<String> {
        std::env::var("TMDB_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.is_empty()))
    }

    /// Effective detail URL template
    pub fn template(&self) -> &str {
        self.detail_url_template
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_DETAIL_URL_TEMPLATE)
    }

    /// Reject templates that can never address an item
    pub fn validate(&self) -> Result<()> {
        if !self.template().contains(ID_PLACEHOLDER) {
            bail!(
                "detail_url_template is missing the {} placeholder: {}",
                ID_PLACEHOLDER,
                self.template()
            );
        }
        Ok(())
    }

    /// Detail view address for an item: the template with `{id}` replaced by
    /// the URL-escaped decimal id.
    pub fn detail_url(&self, id: u64) -> String {
        let escaped = urlencoding::encode(&id.to_string()).into_owned();
        self.template().replace(ID_PLACEHOLDER, &escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let config = Config::default();
        assert_eq!(config.template(), DEFAULT_DETAIL_URL_TEMPLATE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_detail_url_substitution() {
        let config = Config::default();
        assert_eq!(
            config.detail_url(414906),
            "https://www.themoviedb.org/movie/414906"
        );
    }

    #[test]
    fn test_detail_url_custom_template() {
        let config = Config {
            api_key: None,
            detail_url_template: Some("https://kiosk.local/watch?movie={id}&full=1".to_string()),
        };
        assert_eq!(
            config.detail_url(42),
            "https://kiosk.local/watch?movie=42&full=1"
        );
    }

    #[test]
    fn test_validate_rejects_missing_placeholder() {
        let config = Config {
            api_key: None,
            detail_url_template: Some("https://kiosk.local/watch".to_string()),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_template_falls_back() {
        let config = Config {
            api_key: None,
            detail_url_template: Some(String::new()),
        };
        assert_eq!(config.template(), DEFAULT_DETAIL_URL_TEMPLATE);
    }

    #[test]
    fn test_empty_api_key_counts_as_absent() {
        let config = Config {
            api_key: Some(String::new()),
            detail_url_template: None,
        };
        // Env var may be set in the test environment; only assert the
        // config-file side of the fallback.
        if std::env::var("TMDB_API_KEY").is_err() {
            assert!(config.api_key().is_none());
        }
    }
}
