//! Line-per-link presenter

use crate::crawler::ExtractionMap;
use crate::output::traits::{OutputResult, Presenter};
use std::io::Write;

/// Prints every extracted link on its own line, absolute form
///
/// Links of all URLs are printed back to back, in request order and then
/// document order, with no header per URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinesPresenter;

impl Presenter for LinesPresenter {
    fn render(&self, links: &ExtractionMap, writer: &mut dyn Write) -> OutputResult<()> {
        for link in links.links() {
            writeln!(writer, "{}", link)?;
        }
        writer.flush()?;
        Ok(())
    }
}
