//! Scoped terminal session.
//!
//! [`TerminalSession`] owns the terminal mode for its lifetime: raw mode,
//! alternate screen and hidden cursor are set up on entry and undone when the
//! session is left or dropped, including on error returns and panics.

use crate::backend::TerminalBackend;
use crate::error::TermError;
use tracing::{debug, warn};

/// A terminal held in raw mode until the session ends.
pub struct TerminalSession<B: TerminalBackend> {
    backend: B,
    active: bool,
}

impl<B: TerminalBackend> TerminalSession<B> {
    /// Enter raw mode and the alternate screen, hiding the cursor.
    ///
    /// If a later setup step fails the partially entered session is dropped,
    /// which restores the terminal before the error is returned.
    pub fn enter(backend: B) -> Result<Self, TermError> {
        let mut session = Self {
            backend,
            active: false,
        };
        session.backend.enable_raw_mode()?;
        session.active = true;
        session.backend.enter_alternate_screen()?;
        session.backend.hide_cursor()?;
        debug!("terminal session entered");
        Ok(session)
    }

    /// Whether the terminal is still in session mode.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Restore the terminal, reporting the first failure.
    ///
    /// Every restore step runs even if an earlier one fails.
    pub fn leave(&mut self) -> Result<(), TermError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let cursor = self.backend.show_cursor();
        let screen = self.backend.leave_alternate_screen();
        let raw = self.backend.disable_raw_mode();
        debug!("terminal session left");
        cursor.and(screen).and(raw)
    }
}

impl<B: TerminalBackend> Drop for TerminalSession<B> {
    fn drop(&mut self) {
        if let Err(err) = self.leave() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TestableBackend;
    use crate::render::Renderer;
    use crossterm::event::Event;
    use std::io;
    use std::time::Duration;
    use toroid_core::Grid;

    #[test]
    fn test_enter_sets_modes() {
        let mut backend = TestableBackend::new(Vec::new());
        let session = TerminalSession::enter(&mut backend).unwrap();
        assert!(session.is_active());
        assert!(session.backend().is_raw_mode());
        assert!(session.backend().is_alternate_screen());
        assert!(session.backend().is_cursor_hidden());
    }

    #[test]
    fn test_drop_restores_terminal() {
        let mut backend = TestableBackend::new(Vec::new());
        {
            let _session = TerminalSession::enter(&mut backend).unwrap();
        }
        assert!(!backend.is_raw_mode());
        assert!(!backend.is_alternate_screen());
        assert!(!backend.is_cursor_hidden());
    }

    #[test]
    fn test_leave_is_idempotent() {
        let mut backend = TestableBackend::new(Vec::new());
        let mut session = TerminalSession::enter(&mut backend).unwrap();
        session.leave().unwrap();
        assert!(!session.is_active());
        session.leave().unwrap();
        drop(session);

        let output = String::from_utf8(backend.into_writer()).unwrap();
        assert_eq!(output.matches("\x1b[?1049l").count(), 1);
    }

    #[test]
    fn test_restore_on_panic() {
        let mut backend = TestableBackend::new(Vec::new());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _session = TerminalSession::enter(&mut backend).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!backend.is_raw_mode());
    }

    /// Backend whose alternate-screen switch fails.
    struct FailingScreen {
        raw: bool,
    }

    impl TerminalBackend for FailingScreen {
        fn enable_raw_mode(&mut self) -> Result<(), TermError> {
            self.raw = true;
            Ok(())
        }
        fn disable_raw_mode(&mut self) -> Result<(), TermError> {
            self.raw = false;
            Ok(())
        }
        fn enter_alternate_screen(&mut self) -> Result<(), TermError> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "no alt screen").into())
        }
        fn leave_alternate_screen(&mut self) -> Result<(), TermError> {
            Ok(())
        }
        fn hide_cursor(&mut self) -> Result<(), TermError> {
            Ok(())
        }
        fn show_cursor(&mut self) -> Result<(), TermError> {
            Ok(())
        }
        fn poll(&self, _timeout: Duration) -> Result<bool, TermError> {
            Ok(false)
        }
        fn read_event(&self) -> Result<Event, TermError> {
            Err(io::Error::new(io::ErrorKind::WouldBlock, "no events").into())
        }
        fn draw(&mut self, _renderer: &Renderer, _grid: &Grid) -> Result<(), TermError> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_setup_restores_raw_mode() {
        let mut backend = FailingScreen { raw: false };
        assert!(matches!(
            TerminalSession::enter(&mut backend),
            Err(TermError::Io(_))
        ));
        assert!(!backend.raw);
    }
}
