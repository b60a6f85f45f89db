//! Structured log events emitted by the engine
//!
//! The engine never talks to a global logger directly. It reports what it is
//! doing through an [`EventSink`] handed to it at construction. The default
//! sink, [`TracingSink`], forwards every event to `tracing`; routing is then
//! up to whichever subscriber the host process installs.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use crate::error::LoggerError;

/// Something worth logging that happened during a run.
#[derive(Debug)]
pub enum ScanEvent<'a> {
    /// A run is starting at `root`.
    ScanStarted { root: &'a Path },
    /// The counting pass finished.
    ItemsCounted { total: u64 },
    /// The processing pass reached a directory within the depth limit.
    EnteringDirectory { path: &'a Path, depth: usize },
    /// The processing pass walked a directory beyond the depth limit.
    DirectorySkipped { path: &'a Path, depth: usize },
    /// Metadata for a file could not be read; the file is left out.
    FileSkipped { path: &'a Path, error: &'a io::Error },
    /// The encoded document was written to `path`.
    OutputWritten { path: &'a Path, directories: usize },
    /// Echoing the document to the console failed after the log was written.
    EchoFailed { error: &'a io::Error },
    /// The run stopped because cancellation was requested.
    ScanCancelled,
    /// The run failed.
    ScanFailed { error: &'a LoggerError },
}

impl ScanEvent<'_> {
    /// Debug-level events only reach the sink in verbose mode.
    pub fn is_debug(&self) -> bool {
        matches!(
            self,
            ScanEvent::EnteringDirectory { .. } | ScanEvent::DirectorySkipped { .. }
        )
    }
}

/// Destination for engine log events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &ScanEvent<'_>);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &ScanEvent<'_>) {
        match event {
            ScanEvent::ScanStarted { root } => {
                tracing::info!(root = %root.display(), "starting directory logging process");
            }
            ScanEvent::ItemsCounted { total } => {
                tracing::debug!(total, "counted items");
            }
            ScanEvent::EnteringDirectory { path, depth } => {
                tracing::debug!(depth, "processing directory: {}", path.display());
            }
            ScanEvent::DirectorySkipped { path, depth } => {
                tracing::debug!(depth, "beyond max depth, not recorded: {}", path.display());
            }
            ScanEvent::FileSkipped { path, error } => {
                tracing::error!("error processing file {}: {}", path.display(), error);
            }
            ScanEvent::OutputWritten { path, directories } => {
                tracing::info!(directories, "directory log saved to {}", path.display());
            }
            ScanEvent::EchoFailed { error } => {
                tracing::warn!("could not print log to console: {}", error);
            }
            ScanEvent::ScanCancelled => {
                tracing::warn!("logging process stopped by user");
            }
            ScanEvent::ScanFailed { error } => {
                tracing::error!(error = ?error, "directory logging failed: {}", error);
            }
        }
    }
}

/// Sink plus verbosity, passed down the call chain by value.
///
/// Debug-level events are dropped here unless the run is verbose, so the sink
/// only ever sees what the configuration asked for.
#[derive(Clone, Copy)]
pub struct Reporter<'a> {
    sink: &'a dyn EventSink,
    verbose: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a dyn EventSink, verbose: bool) -> Self {
        Self { sink, verbose }
    }

    pub fn emit(&self, event: ScanEvent<'_>) {
        if event.is_debug() && !self.verbose {
            return;
        }
        self.sink.emit(&event);
    }
}

/// Keeps a rendered copy of every event. Handy for front-ends that show a
/// log pane, and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &ScanEvent<'_>) {
        let level = if event.is_debug() { "DEBUG" } else { "INFO" };
        let line = format!("{} {:?}", level, event);
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}
