//! JSON presenter
//!
//! Emits one compact JSON object keyed by requested URL. Each link has the
//! requested URL removed from it, so `https://example.com/home` becomes
//! `/home` under the `https://example.com` key.

use crate::crawler::ExtractionMap;
use crate::output::traits::{OutputResult, Presenter};
use std::io::Write;

/// Prints the extraction map as JSON with site-relative links
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, links: &ExtractionMap, writer: &mut dyn Write) -> OutputResult<()> {
        let relative = relative_links(links);
        serde_json::to_writer(&mut *writer, &relative)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Removes every occurrence of each requested URL from its own links
pub fn relative_links(links: &ExtractionMap) -> ExtractionMap {
    let mut relative = ExtractionMap::new();
    for (url, url_links) in links.iter() {
        let stripped = url_links.iter().map(|link| link.replace(url, "")).collect();
        relative.insert(url.to_string(), stripped);
    }
    relative
}
