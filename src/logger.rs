//! DirectoryLogger - the engine driven by the CLI (or any other front-end)
//!
//! A logger is configured once and can be run repeatedly. It is `Send + Sync`:
//! put it in an `Arc`, call [`DirectoryLogger::run`] on a worker thread, and
//! call [`DirectoryLogger::stop`] or [`DirectoryLogger::progress`] from
//! anywhere else.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::LoggerError;
use crate::events::{EventSink, Reporter, ScanEvent, TracingSink};
use crate::output::{OutputFormat, echo_document};
use crate::tree::{CancelFlag, LogDocument, PathWalker, Progress, WalkerConfig};

const DEFAULT_LOG_FILE: &str = "directory_log.txt";

/// Fully-resolved configuration for one logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Directory to log
    pub root: PathBuf,
    /// File the encoded log is written to
    pub output: PathBuf,
    /// Only list files whose name ends with this suffix
    pub extension: Option<String>,
    /// Deepest directory level that gets a record (root = 0)
    pub max_depth: Option<usize>,
    pub format: OutputFormat,
    /// Also echo the finished document to the console
    pub to_console: bool,
    /// Emit per-directory debug events
    pub verbose: bool,
    /// Metadata workers per directory (0 = all cores)
    pub workers: usize,
}

impl LoggerConfig {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            extension: self.extension.clone(),
            max_depth: self.max_depth,
            workers: self.workers,
            verbose: self.verbose,
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_LOG_FILE),
            extension: None,
            max_depth: None,
            format: OutputFormat::Text,
            to_console: false,
            verbose: false,
            workers: 0,
        }
    }
}

/// Walks a directory tree and writes its log.
pub struct DirectoryLogger {
    config: LoggerConfig,
    walker_config: WalkerConfig,
    cancel: CancelFlag,
    progress: Progress,
    sink: Arc<dyn EventSink>,
}

impl DirectoryLogger {
    /// Pure configuration; touches nothing on disk.
    pub fn new(config: LoggerConfig) -> Self {
        let walker_config = config.walker_config();
        Self {
            config,
            walker_config,
            cancel: CancelFlag::new(),
            progress: Progress::new(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Route log events to `sink` instead of `tracing`.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Traverse, write the log file, and echo to stdout if configured.
    pub fn run(&self) -> Result<LogDocument, LoggerError> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        self.run_with_console(&mut console)
    }

    /// Like [`run`](Self::run), echoing to `console` instead of stdout.
    ///
    /// Nothing is written to the output path unless the traversal completed.
    /// Once the log file is written the run has succeeded; a failing console
    /// echo is only reported.
    pub fn run_with_console(&self, console: &mut dyn Write) -> Result<LogDocument, LoggerError> {
        let reporter = self.reporter();
        let result = self.collect().and_then(|doc| {
            self.write_output(&doc)?;
            reporter.emit(ScanEvent::OutputWritten {
                path: &self.config.output,
                directories: doc.len(),
            });
            if self.config.to_console {
                if let Err(error) = echo_document(&doc, self.config.format, console) {
                    reporter.emit(ScanEvent::EchoFailed { error: &error });
                }
            }
            Ok(doc)
        });

        match &result {
            Err(error) if error.is_cancelled() => reporter.emit(ScanEvent::ScanCancelled),
            Err(error) => reporter.emit(ScanEvent::ScanFailed { error }),
            Ok(_) => {}
        }
        result
    }

    /// Traverse only: build the document without writing anything.
    pub fn collect(&self) -> Result<LogDocument, LoggerError> {
        self.progress.reset();
        self.cancel.check()?;

        let reporter = self.reporter();
        reporter.emit(ScanEvent::ScanStarted {
            root: &self.config.root,
        });
        PathWalker::new(&self.walker_config, &self.cancel, &self.progress, reporter)
            .walk(&self.config.root)
    }

    /// Request cancellation. Safe from any thread, at any time; sticky.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Handle that shares this logger's cancellation flag.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Handle that observes this logger's progress counters.
    pub fn progress_handle(&self) -> Progress {
        self.progress.clone()
    }

    /// Completion percentage of the current (or last) run, in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress.percent()
    }

    fn reporter(&self) -> Reporter<'_> {
        Reporter::new(self.sink.as_ref(), self.config.verbose)
    }

    /// Encode fully in memory, then write the file in one go.
    fn write_output(&self, doc: &LogDocument) -> Result<(), LoggerError> {
        let bytes = self
            .config
            .format
            .encode_to_vec(doc)
            .map_err(LoggerError::Encode)?;
        fs::write(&self.config.output, bytes).map_err(|source| LoggerError::OutputWrite {
            path: self.config.output.clone(),
            source,
        })
    }
}
