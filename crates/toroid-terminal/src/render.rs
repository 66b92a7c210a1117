//! Full-frame text renderer.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufWriter, Write};
pub use toroid_core::{ALIVE_GLYPH, DEAD_GLYPH};
use toroid_core::{Cell, Grid};

/// Draws a grid as one glyph per cell after clearing the screen.
///
/// Rows end with `\r\n` because raw mode disables output post-processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    alive: char,
    dead: char,
}

impl Renderer {
    /// Create a renderer with custom glyphs.
    #[must_use]
    pub const fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    /// Glyph for a cell.
    #[must_use]
    pub const fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }

    fn line(&self, row: &[Cell]) -> String {
        row.iter().map(|&cell| self.glyph(cell)).collect()
    }

    /// Home the cursor, clear the screen and write the frame.
    pub fn render<W: Write>(&self, grid: &Grid, writer: &mut W) -> io::Result<()> {
        let mut out = BufWriter::with_capacity(8192, writer);
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        for row in grid.rows() {
            queue!(out, Print(self.line(row)), Print("\r\n"))?;
        }
        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(ALIVE_GLYPH, DEAD_GLYPH)
    }
}
