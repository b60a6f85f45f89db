//! Per-directory file metadata collection
//!
//! Each call builds its own rayon pool, fans one fetch task per file out to
//! it, and gathers results over a channel in completion order. The pool is
//! dropped when the call returns. Fetch failures are reported and skipped;
//! they never fail the call.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use chrono::{DateTime, Local};

use crate::error::LoggerError;
use crate::events::{Reporter, ScanEvent};
use crate::tree::{CancelFlag, FileRecord};

/// `ctime(3)` layout, e.g. `Thu Oct  1 09:05:03 2026`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Outcome of one fetch: the full path (for reporting) and the record.
type Fetched = (PathBuf, io::Result<FileRecord>);

/// Collect file records for `names` inside `dir`.
///
/// Blocks until every dispatched fetch has finished. If `cancel` is observed
/// set after any completion, the remaining fetches are drained and the call
/// fails with [`LoggerError::Cancelled`].
pub fn collect_file_records(
    dir: &Path,
    names: Vec<OsString>,
    workers: usize,
    cancel: &CancelFlag,
    reporter: Reporter<'_>,
) -> Result<Vec<FileRecord>, LoggerError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let threads = worker_count(workers, names.len());
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("dirlog-meta-{}", i))
        .build()
    {
        Ok(pool) => pool,
        Err(_) => {
            // Fall back to fetching on the calling thread
            let mut results = names.into_iter().map(|name| fetch(dir, name));
            return gather(&mut results, cancel, reporter);
        }
    };

    let (tx, rx) = mpsc::channel::<Fetched>();
    for name in names {
        let tx = tx.clone();
        let dir = dir.to_path_buf();
        pool.spawn(move || {
            let _ = tx.send(fetch(&dir, name));
        });
    }
    drop(tx);

    let mut results = rx.iter();
    let outcome = gather(&mut results, cancel, reporter);
    // Let already-dispatched tasks run to completion before the pool goes away
    results.for_each(drop);
    outcome
}

/// Consume fetch outcomes, checking for cancellation after each one.
fn gather<I>(
    results: &mut I,
    cancel: &CancelFlag,
    reporter: Reporter<'_>,
) -> Result<Vec<FileRecord>, LoggerError>
where
    I: Iterator<Item = Fetched>,
{
    let mut records = Vec::new();
    for (path, result) in results {
        cancel.check()?;
        match result {
            Ok(record) => records.push(record),
            Err(error) => reporter.emit(ScanEvent::FileSkipped {
                path: &path,
                error: &error,
            }),
        }
    }
    Ok(records)
}

/// Stat the file under its raw name; only the recorded name is lossy.
fn fetch(dir: &Path, name: OsString) -> Fetched {
    let path = dir.join(&name);
    let record = read_file_record(&path, name.to_string_lossy().into_owned());
    (path, record)
}

/// Read size and timestamps for a single file.
///
/// Symlinks are followed, so a broken link fails here.
pub fn read_file_record(path: &Path, name: String) -> io::Result<FileRecord> {
    let metadata = fs::metadata(path)?;
    Ok(FileRecord {
        name,
        size: metadata.len(),
        created: format_timestamp(created_time(&metadata)?),
        modified: format_timestamp(DateTime::<Local>::from(metadata.modified()?)),
    })
}

/// Render a local timestamp in `ctime(3)` layout.
pub fn format_timestamp(time: DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Inode change time, which is what Unix reports as a file's `ctime`.
#[cfg(unix)]
fn created_time(metadata: &Metadata) -> io::Result<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    DateTime::from_timestamp(metadata.ctime(), metadata.ctime_nsec() as u32)
        .map(|t| t.with_timezone(&Local))
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "change time out of range"))
}

#[cfg(not(unix))]
fn created_time(metadata: &Metadata) -> io::Result<DateTime<Local>> {
    metadata.created().map(DateTime::<Local>::from)
}

/// Pool size for a directory: the configured count (0 = all cores), capped by
/// the number of files so small directories do not spawn idle threads.
fn worker_count(configured: usize, files: usize) -> usize {
    let wanted = if configured == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    } else {
        configured
    };
    wanted.min(files).max(1)
}
