use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a grading run
#[derive(Debug, Error)]
pub enum GradeError {
    /// The rendering context could not be started
    #[error("failed to start {engine} context: {reason}")]
    ContextStart { engine: String, reason: String },

    /// The page under test could not be loaded
    #[error("failed to load page {page}: {reason}")]
    PageLoad { page: String, reason: String },

    /// The test suite could not be read or is invalid
    #[error("invalid test cases in {source_name}: {reason}")]
    Cases { source_name: String, reason: String },

    /// A report artifact could not be written
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

/// Render an anyhow chain on one line
pub(crate) fn chain(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}
