//! Presenter trait and errors

use crate::crawler::ExtractionMap;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur while rendering results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for result presenters
///
/// A presenter renders a whole extraction map into a writer. The CLI passes
/// standard output; tests pass a `Vec<u8>`.
pub trait Presenter {
    /// Renders `links` into `writer`
    fn render(&self, links: &ExtractionMap, writer: &mut dyn Write) -> OutputResult<()>;
}
