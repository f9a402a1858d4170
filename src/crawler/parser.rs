//! HTML scanner for anchor hrefs
//!
//! Parsing goes through html5ever (via scraper), which recovers from any
//! malformed input the way browsers do, so scanning never fails. Scripting
//! is disabled in the tree builder so `<noscript>` content is parsed as
//! markup rather than raw text.

use html5ever::driver::{self, ParseOpts};
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, Selector};
use tendril::TendrilSink;

/// Scans HTML content and returns every anchor href, in document order
///
/// # Scanning Rules
///
/// - Every `<a>` element is visited, in document order, including anchors
///   inside `<noscript>`
/// - Anchors without an `href` attribute are skipped
/// - A valueless `<a href>` yields an empty string
/// - A repeated `href` attribute yields its first value
/// - Values are returned verbatim (after entity decoding); duplicates are kept
///
/// # Example
///
/// ```
/// use url_extractor::crawler::scan_hrefs;
///
/// let html = r#"<p><a href="/a">A</a><a name="top">no href</a><a href="b">B"#;
/// assert_eq!(scan_hrefs(html), vec!["/a", "b"]);
/// ```
pub fn scan_hrefs(html: &str) -> Vec<String> {
    let document = parse_without_scripting(html);
    let mut hrefs = Vec::new();

    if let Ok(a_selector) = Selector::parse("a") {
        for element in document.select(&a_selector) {
            match element.value().attr("href") {
                Some(href) => hrefs.push(href.to_string()),
                None => tracing::trace!("Skipping anchor without href"),
            }
        }
    }

    hrefs
}

/// Parses a full document with the tree builder's scripting flag off
fn parse_without_scripting(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    driver::parse_document(Html::new_document(), opts).one(html)
}
