//! Failures of user-facing editor actions.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    /// A dialog was dismissed. Not a failure, the action simply stops.
    #[error("cancelled by user")]
    Cancelled,

    #[error("I/O error on {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch {url}: {source}")]
    ExternalLaunchFailure {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl EditorError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, EditorError::Cancelled)
    }
}
