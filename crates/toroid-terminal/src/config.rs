//! Simulator configuration.

use crate::render::{Renderer, ALIVE_GLYPH, DEAD_GLYPH};
use std::time::Duration;
use toroid_core::{GridDims, Speed};

/// Delay between generations at speed 1.
pub const BASE_DELAY: Duration = Duration::from_micros(300_000);

/// Configuration for the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid dimensions the seed must match.
    pub dims: GridDims,
    /// Delay at speed 1; the tick delay is `base_delay / speed`.
    pub base_delay: Duration,
    /// Speed at startup.
    pub initial_speed: Speed,
    /// Glyph for live cells.
    pub alive_glyph: char,
    /// Glyph for dead cells.
    pub dead_glyph: char,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dims: GridDims::REFERENCE,
            base_delay: BASE_DELAY,
            initial_speed: Speed::MIN,
            alive_glyph: ALIVE_GLYPH,
            dead_glyph: DEAD_GLYPH,
        }
    }
}

impl SimConfig {
    /// Config for a grid of the given size.
    #[must_use]
    pub fn with_dims(mut self, dims: GridDims) -> Self {
        self.dims = dims;
        self
    }

    /// Set the speed-1 delay.
    #[must_use]
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Set the startup speed.
    #[must_use]
    pub fn with_initial_speed(mut self, speed: Speed) -> Self {
        self.initial_speed = speed;
        self
    }

    /// Set the live/dead glyphs.
    #[must_use]
    pub fn with_glyphs(mut self, alive: char, dead: char) -> Self {
        self.alive_glyph = alive;
        self.dead_glyph = dead;
        self
    }

    /// Renderer using the configured glyphs.
    #[must_use]
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.alive_glyph, self.dead_glyph)
    }
}
