//! Configuration for the trendcolors application.
//!
//! Centralizes the page locations and politeness settings in one place.
//! Nothing is read from the environment; the defaults are the real GitHub
//! endpoints and tests override them through the `with_*` builders.

use std::time::Duration;

/// Default pause before every request.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(8);

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Page listing the trending languages
    pub trending_url: String,
    /// Search page, queried with `q=language:"<name>"`
    pub search_url: String,
    /// Prefix that an `owner/repo` identifier is appended to
    pub project_base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Fixed pause before each request
    pub request_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trending_url: "https://github.com/trending".to_string(),
            search_url: "https://github.com/search".to_string(),
            project_base_url: "https://github.com/".to_string(),
            user_agent: concat!("trendcolors/", env!("CARGO_PKG_VERSION")).to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

impl Config {
    /// Point every URL at `base`, e.g. a local mock server.
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.trending_url = format!("{}/trending", base);
        self.search_url = format!("{}/search", base);
        self.project_base_url = format!("{}/", base);
        self
    }

    /// Override the pause before each request
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Search URL listing projects written in `language`.
    ///
    /// The language is embedded as a quoted exact-match filter and
    /// form-encoded into the `q` parameter.
    pub fn search_url_for(&self, language: &str) -> crate::errors::Result<String> {
        let query = format!("language:\"{}\"", language);
        let url = url::Url::parse_with_params(&self.search_url, &[("q", query)])?;
        Ok(url.into())
    }

    /// Page URL of an `owner/repo` project.
    pub fn project_url_for(&self, project: &str) -> String {
        format!("{}{}", self.project_base_url, project)
    }
}
