//! HTTP fetcher implementation
//!
//! This module handles the single GET request made for each requested URL:
//! - Building the HTTP client from the fetcher configuration
//! - Sending the request and reading the body
//! - Rejecting any status code above 299

use crate::config::FetcherConfig;
use crate::ExtractorError;
use reqwest::Client;
use std::time::Duration;

/// Highest status code accepted as a successful fetch
const MAX_SUCCESS_STATUS: u16 = 299;

/// A fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The requested URL, verbatim
    pub url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Page body content
    pub body: String,
}

/// Builds an HTTP client from the fetcher configuration
///
/// Timeouts are only set when configured; otherwise the client waits as
/// long as the platform lets it.
///
/// # Example
///
/// ```
/// use url_extractor::config::FetcherConfig;
/// use url_extractor::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL and returns its status and body
///
/// Redirects are followed by the client. Any final status above 299 fails
/// with [`ExtractorError::Fetch`], including 3xx responses the client could
/// not follow. There are no retries.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch, sent as given
///
/// # Returns
///
/// * `Ok(FetchedPage)` - Status code <= 299 and a readable body
/// * `Err(ExtractorError::Fetch)` - Status code > 299
/// * `Err(ExtractorError::Http)` - Invalid URL, connection or body read failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, ExtractorError> {
    tracing::debug!("Fetching {}", url);

    let response = client.get(url).send().await.map_err(|source| {
        tracing::warn!("Request to {} failed: {}", url, source);
        ExtractorError::Http {
            url: url.to_string(),
            source,
        }
    })?;

    let status_code = response.status().as_u16();
    tracing::debug!("{} responded with {}", url, status_code);

    if status_code > MAX_SUCCESS_STATUS {
        tracing::warn!("{} returned status {}", url, status_code);
        return Err(ExtractorError::Fetch {
            url: url.to_string(),
            status: status_code,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ExtractorError::Http {
            url: url.to_string(),
            source,
        })?;

    Ok(FetchedPage {
        url: url.to_string(),
        status_code,
        body,
    })
}
