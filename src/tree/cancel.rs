//! Cooperative cancellation

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::LoggerError;

/// Shared stop flag polled by the traversal at its checkpoints.
///
/// Clones share the same flag, so a handle can be given to another thread
/// (a UI, a signal handler) while the traversal runs. Once set it stays set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Checkpoint: fail with `Cancelled` if a stop was requested.
    pub fn check(&self) -> Result<(), LoggerError> {
        if self.is_cancelled() {
            Err(LoggerError::Cancelled)
        } else {
            Ok(())
        }
    }
}
