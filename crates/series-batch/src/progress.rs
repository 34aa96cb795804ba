//! Serialized progress delivery
//!
//! The executor reports (completed, total) after every item settles.
//! Handlers are invoked under a lock, so delivery is serialized and never
//! overlaps itself even though item execution is parallel. Handlers should
//! return quickly; a slow handler stalls progress reporting, not the
//! workers' own computation, but it does stall the run's completion.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Observer of batch progress
pub trait ProgressHandler: Send + Sync {
    /// Called after every settled item with the running completion count
    fn on_progress(&self, completed: usize, total: usize);
}

impl<T: ProgressHandler + ?Sized> ProgressHandler for Arc<T> {
    fn on_progress(&self, completed: usize, total: usize) {
        (**self).on_progress(completed, total);
    }
}

/// Fan-out point distributing progress updates to registered handlers
///
/// All handlers run under one lock per update, in registration order.
pub struct ProgressBus {
    handlers: Mutex<Vec<Box<dyn ProgressHandler>>>,
}

impl ProgressBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Register a progress handler
    pub fn register<H>(&self, handler: H)
    where
        H: ProgressHandler + 'static,
    {
        if let Ok(mut handlers) = self.handlers.lock() {
            handlers.push(Box::new(handler));
        }
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().map(|h| h.len()).unwrap_or(0)
    }

    /// Deliver one update to every handler, serialized
    pub(crate) fn emit(&self, completed: usize, total: usize) {
        if let Ok(handlers) = self.handlers.lock() {
            for handler in handlers.iter() {
                handler.on_progress(completed, total);
            }
        }
    }
}

impl Default for ProgressBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Pollable progress snapshot
///
/// Register an `Arc<SharedProgress>` with the executor and poll
/// [`SharedProgress::snapshot`] from any thread instead of (or in addition
/// to) callback-style handlers.
#[derive(Debug, Default)]
pub struct SharedProgress {
    completed: AtomicUsize,
    total: AtomicUsize,
}

impl SharedProgress {
    /// Create a zeroed snapshot holder
    pub fn new() -> Self {
        Self::default()
    }

    /// Current (completed, total) pair
    pub fn snapshot(&self) -> (usize, usize) {
        (
            self.completed.load(Ordering::SeqCst),
            self.total.load(Ordering::SeqCst),
        )
    }

    /// Fraction of items settled, 0.0 before any total is known
    pub fn fraction(&self) -> f64 {
        let (completed, total) = self.snapshot();
        if total == 0 {
            return 0.0;
        }
        completed as f64 / total as f64
    }
}

impl ProgressHandler for SharedProgress {
    fn on_progress(&self, completed: usize, total: usize) {
        self.total.store(total, Ordering::SeqCst);
        self.completed.store(completed, Ordering::SeqCst);
    }
}
