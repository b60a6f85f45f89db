//! Configuration types for the path walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Only list files whose name ends with this suffix (e.g. `.txt`).
    /// `None` or an empty string lists every file.
    pub extension: Option<String>,
    /// Deepest directory (root = 0) that still gets a record.
    pub max_depth: Option<usize>,
    /// Number of parallel workers for metadata collection.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (one worker thread)
    /// N = use N worker threads
    pub workers: usize,
    /// Emit per-directory debug events.
    pub verbose: bool,
}

impl WalkerConfig {
    /// Check whether a file name passes the extension filter.
    pub fn matches_extension(&self, name: &str) -> bool {
        match self.extension.as_deref() {
            None | Some("") => true,
            Some(ext) => name.ends_with(ext),
        }
    }

    /// Check whether a directory at `depth` gets its own record.
    pub fn within_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}
