//! Configuration module for url-extractor
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every table and key is optional; a missing file means
//! [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use url_extractor::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("extractor.toml")).unwrap();
//! println!("Fetching up to {} pages at once", config.batch.max_concurrent_requests);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BatchConfig, Config, FailurePolicy, FetcherConfig, DEFAULT_MAX_CONCURRENT_REQUESTS,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
