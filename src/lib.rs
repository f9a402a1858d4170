//! url-extractor: same-site link extraction
//!
//! This crate fetches HTML pages and extracts the hyperlinks that belong to the
//! same site, resolving relative links against the requested URL and dropping
//! external links and non-navigable schemes.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use output::OutputError;
use thiserror::Error;

/// Main error type for url-extractor operations
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Call to URL {url} returned status code {status} (> 299)")]
    Fetch { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl ExtractorError {
    /// Returns the URL a fetch or transport error refers to
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Fetch { url, .. } | Self::Http { url, .. } => Some(url),
            Self::Client(_) | Self::Config(_) | Self::Output(_) => None,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for url-extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{extract_links, run_extraction, BatchReport, ExtractionMap, LinkExtractor};
pub use url::{classify_link, is_own_domain, is_relative, resolve_link, LinkClass};
