//! Double-buffered generations.

use crate::grid::Grid;
use crate::rules;

/// Two preallocated grids whose roles alternate each generation.
///
/// One grid is "current" (rendered and read for neighbor counts), the other
/// receives the next generation. Swapping flips an index; grids are never
/// copied or reallocated after construction.
#[derive(Clone, Debug)]
pub struct DoubleBuffer {
    grids: [Grid; 2],
    current: usize,
}

impl DoubleBuffer {
    /// Create a buffer pair with `initial` as the current generation.
    #[must_use]
    pub fn new(initial: Grid) -> Self {
        let next = Grid::new(initial.dims());
        Self {
            grids: [initial, next],
            current: 0,
        }
    }

    /// The current generation.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.grids[self.current]
    }

    /// The back buffer (the most recent `compute_next` output, or the
    /// previous generation after a swap).
    #[must_use]
    pub fn next(&self) -> &Grid {
        &self.grids[self.current ^ 1]
    }

    /// Write the next generation into the back buffer.
    pub fn compute_next(&mut self) {
        let [first, second] = &mut self.grids;
        let (current, next) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };
        rules::step_into(current, next);
    }

    /// Exchange the current and back buffer roles.
    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    /// Compute the next generation and make it current.
    pub fn advance(&mut self) {
        self.compute_next();
        self.swap();
    }
}
