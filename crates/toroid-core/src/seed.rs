//! Startup grid parsing.
//!
//! A seed is a stream of whitespace-separated integer tokens, one per cell in
//! row-major order, each `0` (dead) or `1` (alive). Reading stops as soon as
//! every cell is populated, so the remainder of the stream is left untouched.
//! No partially populated grid is ever returned.

use std::io::BufRead;

use tracing::debug;

use crate::error::SeedError;
use crate::grid::{Cell, Grid, GridDims};

/// Accumulates validated tokens into a grid in row-major order.
struct SeedCursor {
    grid: Grid,
    filled: usize,
}

impl SeedCursor {
    fn new(dims: GridDims) -> Self {
        Self {
            grid: Grid::new(dims),
            filled: 0,
        }
    }

    fn is_complete(&self) -> bool {
        self.filled == self.grid.dims().cell_count()
    }

    fn push(&mut self, token: &str) -> Result<(), SeedError> {
        let cols = self.grid.width();
        let (row, col) = (self.filled / cols, self.filled % cols);
        let value: i64 = token.parse().map_err(|_| SeedError::Malformed {
            row,
            col,
            token: token.to_string(),
        })?;
        let cell = match value {
            0 => Cell::Dead,
            1 => Cell::Alive,
            _ => return Err(SeedError::OutOfRange { row, col, value }),
        };
        self.grid.set(row, col, cell);
        self.filled += 1;
        Ok(())
    }

    fn finish(self) -> Result<Grid, SeedError> {
        let expected = self.grid.dims().cell_count();
        if self.filled < expected {
            return Err(SeedError::Missing {
                expected,
                found: self.filled,
            });
        }
        debug!(
            dims = %self.grid.dims(),
            live = self.grid.live_count(),
            "seed loaded"
        );
        Ok(self.grid)
    }
}

/// Read a seed line by line from `reader`.
///
/// Stops reading once `dims.cell_count()` tokens have been accepted; tokens
/// after that point on the same line are ignored.
pub fn read_seed<R: BufRead>(mut reader: R, dims: GridDims) -> Result<Grid, SeedError> {
    let mut cursor = SeedCursor::new(dims);
    let mut line = String::new();

    while !cursor.is_complete() {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        for token in line.split_whitespace() {
            cursor.push(token)?;
            if cursor.is_complete() {
                break;
            }
        }
    }

    cursor.finish()
}

/// Parse a seed held in memory.
pub fn parse_seed(input: &str, dims: GridDims) -> Result<Grid, SeedError> {
    read_seed(input.as_bytes(), dims)
}
