use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared running flag for one visualizer panel.
///
/// Clones observe the same flag, so the input loop can see that a sort is in
/// flight while the visualizer itself is owned by the worker running it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    running: Arc<AtomicBool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the session from idle to running.
    /// Returns `false` without changing anything if a sort is already running.
    pub fn try_begin(&self) -> bool {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn end(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
