//! Shared utility functions for tree walking

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoggerError;

/// Immediate contents of one directory, in the order `read_dir` yielded them.
#[derive(Debug, Default)]
pub struct DirListing {
    /// Names of child directories, including symlinks to directories
    pub subdirectories: Vec<String>,
    /// Names of everything else, unconverted so they can be joined back onto
    /// the directory path
    pub files: Vec<OsString>,
    /// Child directories to descend into (symlinked directories excluded)
    pub descend: Vec<PathBuf>,
}

impl DirListing {
    /// Items this directory contributes to progress accounting.
    pub fn item_count(&self) -> u64 {
        (self.subdirectories.len() + self.files.len()) as u64
    }
}

/// Read one directory level. No sorting is applied.
pub fn list_directory(path: &Path) -> Result<DirListing, LoggerError> {
    let entries = fs::read_dir(path).map_err(|e| LoggerError::traversal(path, e))?;

    let mut listing = DirListing::default();
    for entry in entries {
        let entry = entry.map_err(|e| LoggerError::traversal(path, e))?;
        let name = entry.file_name();
        let file_type = entry
            .file_type()
            .map_err(|e| LoggerError::traversal(entry.path(), e))?;

        if file_type.is_dir() {
            listing.descend.push(entry.path());
            listing.subdirectories.push(name.to_string_lossy().into_owned());
        } else if file_type.is_symlink() && points_to_dir(&entry.path()) {
            // Listed like a directory but never followed
            listing.subdirectories.push(name.to_string_lossy().into_owned());
        } else {
            listing.files.push(name);
        }
    }

    Ok(listing)
}

/// Whether a symlink resolves to a directory. Broken links count as files.
fn points_to_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Render a path the way it appears in directory records.
///
/// Trailing separators and `.` segments after the first component are
/// dropped, so `logs/` and `logs/.` both render as `logs`.
pub fn display_path(path: &Path) -> String {
    let normalized: PathBuf = path.components().collect();
    if normalized.as_os_str().is_empty() {
        return ".".to_string();
    }
    normalized.to_string_lossy().into_owned()
}
