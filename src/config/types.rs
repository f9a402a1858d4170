use serde::Deserialize;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("url-extractor/", env!("CARGO_PKG_VERSION"));

/// Default number of pages fetched at once
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 4;

/// Main configuration structure for url-extractor
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FetcherConfig {
    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds (none when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Connect timeout in seconds (none when unset)
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

/// Multi-URL batch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BatchConfig {
    /// Maximum number of pages fetched concurrently
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// What to do when one of the URLs fails
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Behaviour of a batch when one URL fails to fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// The batch fails with the first failing URL in request order
    #[default]
    FailFast,
    /// Successful URLs are reported, failures are collected alongside
    Partial,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_concurrent_requests() -> usize {
    DEFAULT_MAX_CONCURRENT_REQUESTS
}
