//! Non-blocking keyboard polling.

use crate::backend::TerminalBackend;
use crate::error::TermError;
use crate::shutdown::ShutdownFlag;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use toroid_core::Command;
use tracing::info;

/// Key binding configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
    /// Command issued on a match.
    pub command: Command,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers, command: Command) -> Self {
        Self {
            code,
            modifiers,
            command,
        }
    }

    /// Create a simple key binding without modifiers.
    #[must_use]
    pub const fn simple(code: KeyCode, command: Command) -> Self {
        Self::new(code, KeyModifiers::NONE, command)
    }

    /// Check if this binding matches a key event.
    ///
    /// Modifiers must match exactly, except `SHIFT`, which is already folded
    /// into the character code.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.code == self.code
            && event.modifiers.difference(KeyModifiers::SHIFT)
                == self.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Zero-timeout poller turning one pending event into a [`Command`].
#[derive(Debug, Clone)]
pub struct InputPoller {
    bindings: Vec<KeyBinding>,
    timeout: Duration,
    shutdown: Option<ShutdownFlag>,
}

impl Default for InputPoller {
    fn default() -> Self {
        Self {
            bindings: vec![
                KeyBinding::simple(KeyCode::Char('w'), Command::Increase),
                KeyBinding::simple(KeyCode::Char('s'), Command::Decrease),
                KeyBinding::simple(KeyCode::Char('q'), Command::Quit),
                KeyBinding::simple(KeyCode::Char('Q'), Command::Quit),
                // Raw mode turns Ctrl+C into a key event instead of SIGINT.
                KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, Command::Quit),
            ],
            timeout: Duration::ZERO,
            shutdown: None,
        }
    }
}

impl InputPoller {
    /// Create a poller with the default `w`/`s`/`q` bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a poller with custom bindings.
    #[must_use]
    pub fn with_bindings(bindings: Vec<KeyBinding>) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Report `Quit` once `flag` is set, ahead of any pending key.
    #[must_use]
    pub fn with_shutdown(mut self, flag: ShutdownFlag) -> Self {
        self.shutdown = Some(flag);
        self
    }

    /// Active bindings.
    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Classify one event. Only key presses (and auto-repeats) issue commands;
    /// everything else is `NoOp`.
    #[must_use]
    pub fn classify(&self, event: &Event) -> Command {
        let Event::Key(key) = event else {
            return Command::NoOp;
        };
        if key.kind == KeyEventKind::Release {
            return Command::NoOp;
        }
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map_or(Command::NoOp, |binding| binding.command)
    }

    /// Check for a pending event without waiting. If one is pending, consume
    /// exactly one event and classify it; otherwise return `NoOp`.
    ///
    /// A requested shutdown yields `Quit` without touching the event queue.
    pub fn poll<B: TerminalBackend>(&self, backend: &B) -> Result<Command, TermError> {
        if self.shutdown.as_ref().is_some_and(ShutdownFlag::is_requested) {
            info!("termination signal received");
            return Ok(Command::Quit);
        }
        if !backend.poll(self.timeout)? {
            return Ok(Command::NoOp);
        }
        let event = backend.read_event()?;
        Ok(self.classify(&event))
    }
}
