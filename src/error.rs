//! Error types for directory logging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a directory logging run.
///
/// Per-file metadata failures never show up here; the collector reports them
/// through the event sink and leaves the file out of its directory record.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The cancellation flag was observed at a checkpoint.
    #[error("logging process stopped by user")]
    Cancelled,

    /// A directory could not be read during traversal.
    #[error("cannot read directory {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The encoded document could not be written to its destination.
    #[error("cannot write log file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An encoder failed while serializing the document.
    #[error("failed to encode log document: {0}")]
    Encode(#[source] io::Error),
}

impl LoggerError {
    pub fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
