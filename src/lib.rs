//! dirlog - log a directory tree with file metadata as text, JSON, CSV or XML

pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod metadata;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, FileConfig};
pub use error::LoggerError;
pub use events::{EventSink, MemorySink, ScanEvent, TracingSink};
pub use logger::{DirectoryLogger, LoggerConfig};
pub use output::{OutputFormat, echo_document};
pub use tree::{
    CancelFlag, DirectoryRecord, FileRecord, LogDocument, PathWalker, Progress, WalkerConfig,
};
