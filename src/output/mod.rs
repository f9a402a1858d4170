//! Output module for rendering extraction results
//!
//! This module handles:
//! - Printing extracted links one per line
//! - Printing a JSON object of site-relative links per requested URL

mod json;
mod lines;
mod traits;

pub use json::{relative_links, JsonPresenter};
pub use lines::LinesPresenter;
pub use traits::{OutputError, OutputResult, Presenter};

use crate::crawler::ExtractionMap;
use std::io::Write;

/// Output formats selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One absolute link per line
    Stdout,
    /// JSON object of relative links keyed by URL
    Json,
}

impl OutputFormat {
    /// Returns the presenter for this format
    pub fn presenter(&self) -> Box<dyn Presenter> {
        match self {
            Self::Stdout => Box::new(LinesPresenter),
            Self::Json => Box::new(JsonPresenter),
        }
    }
}

/// Renders `links` in the given format
pub fn render(format: OutputFormat, links: &ExtractionMap, writer: &mut dyn Write) -> OutputResult<()> {
    format.presenter().render(links, writer)
}
