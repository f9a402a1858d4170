//! Extraction pipeline
//!
//! This module contains the link extraction logic, including:
//! - HTTP fetching of the requested page
//! - HTML scanning for anchor hrefs
//! - Same-site filtering and relative link resolution
//! - Running several URLs as one batch

mod batch;
mod extractor;
mod fetcher;
mod parser;

pub use batch::{extract_all, BatchReport, ExtractionMap, UrlFailure};
pub use extractor::{extract_links, filter_links, LinkExtractor};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use parser::scan_hrefs;

use crate::config::Config;
use crate::ExtractorError;

/// Runs a complete extraction for a set of URLs
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client from `config.fetcher`
/// 2. Fetch and scan every URL, `config.batch.max_concurrent_requests` at a time
/// 3. Apply `config.batch.failure_policy` to failed URLs
///
/// # Returns
///
/// * `Ok(BatchReport)` - Links per URL in request order, plus failures when partial
/// * `Err(ExtractorError)` - Client setup failed, or a URL failed under fail-fast
pub async fn run_extraction(config: &Config, urls: &[String]) -> Result<BatchReport, ExtractorError> {
    let extractor = LinkExtractor::new(&config.fetcher)?;
    extract_all(&extractor, urls, &config.batch).await
}
