//! Termination signals.
//!
//! Raw mode turns Ctrl+C into a key press, but SIGTERM and SIGHUP still reach
//! the process. [`ShutdownFlag`] records them so the main loop quits through
//! the normal session teardown instead of dying with the terminal in raw mode.

use crate::error::TermError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Shared flag set when the process is asked to terminate.
#[derive(Clone, Debug, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    /// Create an unset flag with no handler attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process-wide SIGINT/SIGTERM/SIGHUP handler that sets the
    /// returned flag. Only one handler can be registered per process.
    pub fn install() -> Result<Self, TermError> {
        let flag = Self::new();
        let handler = flag.clone();
        ctrlc::set_handler(move || handler.request())?;
        debug!("termination handler installed");
        Ok(flag)
    }

    /// Ask the main loop to stop.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether termination was requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flag_is_unset() {
        assert!(!ShutdownFlag::new().is_requested());
    }

    #[test]
    fn test_request_is_visible_through_clones() {
        let flag = ShutdownFlag::new();
        let handler = flag.clone();
        handler.request();
        assert!(flag.is_requested());
    }
}
