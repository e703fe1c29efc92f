//! Centralized error handling for the trendcolors application.
//!
//! This module provides a unified error type that consolidates all
//! application errors into a single enum. Every error is fatal for a run.

use thiserror::Error;

/// Unified error type for the trendcolors application.
#[derive(Error, Debug)]
pub enum Error {
    /// Scraping related errors
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed configured URL
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while walking GitHub's HTML pages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The search page listed no project for a language
    #[error("could not find project for {0}")]
    ProjectNotFound(String),

    /// The server answered with a non-success status
    #[error("GET {url} returned status {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// A CSS selector failed to compile
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, Error>;
