//! Multi-URL extraction
//!
//! Runs one extraction per requested URL, a bounded number at a time, and
//! assembles the results in request order.

use crate::config::{BatchConfig, FailurePolicy};
use crate::crawler::extractor::LinkExtractor;
use crate::ExtractorError;
use futures::stream::{self, StreamExt};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from requested URL to its extracted links
///
/// Iteration and serialization follow insertion order. Inserting a URL that
/// is already present replaces its links but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ExtractionMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the links for `url`
    pub fn insert(&mut self, url: String, links: Vec<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == url) {
            Some((_, current)) => *current = links,
            None => self.entries.push((url, links)),
        }
    }

    /// Returns the links extracted for `url`
    pub fn get(&self, url: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == url)
            .map(|(_, links)| links.as_slice())
    }

    /// Iterates over `(url, links)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(url, links)| (url.as_str(), links.as_slice()))
    }

    /// Iterates over every link of every URL, in order
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, links)| links.iter().map(String::as_str))
    }

    /// Number of URLs in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no URL has been inserted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ExtractionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (url, links) in &self.entries {
            map.serialize_entry(url, links)?;
        }
        map.end()
    }
}

/// A requested URL whose extraction failed
#[derive(Debug)]
pub struct UrlFailure {
    pub url: String,
    pub error: ExtractorError,
}

/// Outcome of a batch extraction
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Links of every URL that succeeded, in request order
    pub links: ExtractionMap,

    /// URLs that failed, in request order (only under `FailurePolicy::Partial`)
    pub failures: Vec<UrlFailure>,
}

impl BatchReport {
    /// Returns true if every requested URL succeeded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Extracts links from every URL in `urls`
///
/// Up to `config.max_concurrent_requests` pages are fetched at once. Results
/// are consumed in request order whatever order the fetches complete in.
///
/// # Failure Policy
///
/// | Policy | Behaviour |
/// |--------|-----------|
/// | `FailFast` | Returns the error of the first failing URL in request order; pending fetches are dropped |
/// | `Partial` | Records the failure and carries on with the remaining URLs |
pub async fn extract_all(
    extractor: &LinkExtractor,
    urls: &[String],
    config: &BatchConfig,
) -> Result<BatchReport, ExtractorError> {
    tracing::info!(
        "Extracting links from {} URL(s), {} at a time",
        urls.len(),
        config.max_concurrent_requests
    );

    let mut results = stream::iter(urls)
        .map(move |url| async move { (url, extractor.extract_links(url).await) })
        .buffered(config.max_concurrent_requests.max(1));

    let mut report = BatchReport::default();

    while let Some((url, result)) = results.next().await {
        match result {
            Ok(links) => {
                tracing::info!("{}: {} link(s)", url, links.len());
                report.links.insert(url.clone(), links);
            }
            Err(error) => match config.failure_policy {
                FailurePolicy::FailFast => return Err(error),
                FailurePolicy::Partial => report.failures.push(UrlFailure {
                    url: url.clone(),
                    error,
                }),
            },
        }
    }

    Ok(report)
}
