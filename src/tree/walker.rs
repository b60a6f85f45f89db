//! PathWalker - two-pass traversal that builds a log document

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::LoggerError;
use crate::events::{Reporter, ScanEvent};
use crate::metadata::collect_file_records;

use super::cancel::CancelFlag;
use super::config::WalkerConfig;
use super::document::{DirectoryRecord, LogDocument};
use super::progress::Progress;
use super::utils::{display_path, list_directory};

/// Depth-aware tree walker.
///
/// The first pass only counts items so progress has a fixed denominator.
/// The second pass visits directories pre-order, one at a time, fetching file
/// metadata for every directory within the depth limit. Directories past the
/// limit are still walked so their items count toward progress; they just do
/// not get a record.
pub struct PathWalker<'a> {
    config: &'a WalkerConfig,
    cancel: &'a CancelFlag,
    progress: &'a Progress,
    reporter: Reporter<'a>,
}

impl<'a> PathWalker<'a> {
    pub fn new(
        config: &'a WalkerConfig,
        cancel: &'a CancelFlag,
        progress: &'a Progress,
        reporter: Reporter<'a>,
    ) -> Self {
        Self {
            config,
            cancel,
            progress,
            reporter,
        }
    }

    /// Run both passes over the tree at `root`.
    pub fn walk(&self, root: &Path) -> Result<LogDocument, LoggerError> {
        let total = self.count(root)?;
        self.progress.set_total(total);
        self.reporter.emit(ScanEvent::ItemsCounted { total });

        let document = self.process(root)?;
        self.progress.finish();
        Ok(document)
    }

    /// Counting pass: subdirectories plus files over every directory.
    pub fn count(&self, root: &Path) -> Result<u64, LoggerError> {
        let mut total = 0u64;
        let mut stack = vec![root.to_path_buf()];

        while let Some(dir) = stack.pop() {
            self.cancel.check()?;
            let listing = list_directory(&dir)?;
            total += listing.item_count();
            stack.extend(listing.descend);
        }

        Ok(total)
    }

    /// Processing pass.
    fn process(&self, root: &Path) -> Result<LogDocument, LoggerError> {
        let mut document = LogDocument::new();
        let mut stack: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

        while let Some((dir, depth)) = stack.pop() {
            self.cancel.check()?;
            let listing = list_directory(&dir)?;

            if self.config.within_depth(depth) {
                self.reporter.emit(ScanEvent::EnteringDirectory { path: &dir, depth });
                let names: Vec<OsString> = listing
                    .files
                    .iter()
                    .filter(|name| self.config.matches_extension(&name.to_string_lossy()))
                    .cloned()
                    .collect();
                let files = collect_file_records(
                    &dir,
                    names,
                    self.config.workers,
                    self.cancel,
                    self.reporter,
                )?;
                document.push(DirectoryRecord {
                    directory: display_path(&dir),
                    subdirectories: listing.subdirectories.clone(),
                    files,
                });
            } else {
                self.reporter.emit(ScanEvent::DirectorySkipped { path: &dir, depth });
            }

            self.progress.advance(listing.item_count());

            // Reverse so the first child is popped first (pre-order)
            for child in listing.descend.into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        Ok(document)
    }
}
