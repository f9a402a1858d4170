//! Link extraction for a single page
//!
//! Fetches the page, scans its anchors and keeps the same-site links:
//! relative hrefs are resolved against the requested URL, absolute hrefs
//! containing it are kept as they are, everything else is dropped.

use crate::config::FetcherConfig;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::scan_hrefs;
use crate::url::{classify_link, resolve_link, LinkClass};
use crate::ExtractorError;
use reqwest::Client;

/// Extracts same-site links from pages
///
/// Holds nothing but the HTTP client, so one extractor can serve any number
/// of concurrent extractions.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    client: Client,
}

impl LinkExtractor {
    /// Creates an extractor with a client built from `config`
    pub fn new(config: &FetcherConfig) -> Result<Self, ExtractorError> {
        let client = build_http_client(config).map_err(ExtractorError::Client)?;
        Ok(Self { client })
    }

    /// Creates an extractor around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns its same-site links in document order
    ///
    /// Duplicates are kept. A page without anchors, or without any
    /// same-site anchor, yields an empty list.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The extracted links
    /// * `Err(ExtractorError)` - The fetch failed; see [`fetch_page`]
    pub async fn extract_links(&self, url: &str) -> Result<Vec<String>, ExtractorError> {
        let page = fetch_page(&self.client, url).await?;
        let hrefs = scan_hrefs(&page.body);
        let href_count = hrefs.len();

        let links = filter_links(hrefs, url);
        tracing::debug!(
            "{}: kept {} of {} anchor hrefs",
            url,
            links.len(),
            href_count
        );

        Ok(links)
    }
}

/// Filters raw hrefs down to same-site links, resolving relative ones
///
/// # Example
///
/// ```
/// use url_extractor::crawler::filter_links;
///
/// let hrefs = vec![
///     "https://example.com/1".to_string(),
///     "https://external.com/1".to_string(),
///     "home".to_string(),
/// ];
/// assert_eq!(
///     filter_links(hrefs, "https://example.com"),
///     vec!["https://example.com/1", "https://example.com/home"]
/// );
/// ```
pub fn filter_links(hrefs: Vec<String>, base_url: &str) -> Vec<String> {
    hrefs
        .into_iter()
        .filter_map(|href| match classify_link(&href, base_url) {
            LinkClass::Relative => Some(resolve_link(&href, base_url)),
            LinkClass::OwnDomain => Some(href),
            LinkClass::External => {
                tracing::trace!("Dropping external link {}", href);
                None
            }
        })
        .collect()
}

/// Extracts the same-site links of a single URL with a default client
///
/// # Example
///
/// ```no_run
/// # async fn example() -> url_extractor::Result<()> {
/// let links = url_extractor::extract_links("https://example.com").await?;
/// for link in links {
///     println!("{}", link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn extract_links(url: &str) -> Result<Vec<String>, ExtractorError> {
    LinkExtractor::new(&FetcherConfig::default())?
        .extract_links(url)
        .await
}
