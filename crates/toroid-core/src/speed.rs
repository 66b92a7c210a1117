//! Interactive speed model.

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

/// A command decoded from a single keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Speed up by one step.
    Increase,
    /// Slow down by one step, never below 1.
    Decrease,
    /// Stop the simulation.
    Quit,
    /// Nothing to do.
    NoOp,
}

/// Generations per base interval. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(NonZeroU32);

impl Speed {
    /// The slowest speed.
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Create a speed, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Faster by one step. Has no practical upper bound (saturates at `u32::MAX`).
    #[must_use]
    pub const fn increased(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Slower by one step, staying at 1 when already at the minimum.
    #[must_use]
    pub const fn decreased(self) -> Self {
        match NonZeroU32::new(self.0.get() - 1) {
            Some(v) => Self(v),
            None => self,
        }
    }

    /// Apply a command. `Quit` and `NoOp` leave the speed unchanged.
    pub fn apply(&mut self, command: Command) {
        *self = match command {
            Command::Increase => self.increased(),
            Command::Decrease => self.decreased(),
            Command::Quit | Command::NoOp => *self,
        };
    }

    /// Inter-frame delay: `base / speed`.
    #[must_use]
    pub fn delay(self, base: Duration) -> Duration {
        base / self.get()
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
