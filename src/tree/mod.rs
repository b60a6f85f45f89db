//! Directory tree walking logic
//!
//! `PathWalker` visits a tree twice: once to count items for progress, once
//! to build the `LogDocument`, fetching file metadata per directory.

mod cancel;
mod config;
mod document;
mod progress;
mod utils;
mod walker;

// Re-export public types
pub use cancel::CancelFlag;
pub use config::WalkerConfig;
pub use document::{DirectoryRecord, FileRecord, LogDocument};
pub use progress::Progress;
pub use utils::{DirListing, display_path, list_directory};
pub use walker::PathWalker;
