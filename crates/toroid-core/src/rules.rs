//! Conway's birth/survival/death rule on a toroidal grid.

use crate::grid::{Cell, Grid};

/// Relative positions of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live cells among the eight neighbors of `(row, col)`, wrapping at the edges.
///
/// On grids narrower than three cells a neighbor may wrap onto the same
/// position more than once (or onto the cell itself); each offset is counted.
#[must_use]
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let dims = grid.dims();
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(d_row, d_col)| {
            let (r, c) = dims.wrap(row, col, d_row, d_col);
            grid.get(r, c).is_alive()
        })
        .count() as u8
}

/// Next state of one cell given its current state and live neighbor count.
#[must_use]
pub const fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Compute the next generation of `current` into `next`.
///
/// Every cell of `next` is overwritten, so it may hold a stale generation.
///
/// # Panics
///
/// Panics if the two grids have different dimensions.
pub fn step_into(current: &Grid, next: &mut Grid) {
    assert_eq!(
        current.dims(),
        next.dims(),
        "step_into requires grids of equal dimensions"
    );
    for row in 0..current.height() {
        for col in 0..current.width() {
            let live = live_neighbors(current, row, col);
            next.set(row, col, next_state(current.get(row, col), live));
        }
    }
}

/// Compute the next generation into a freshly allocated grid.
#[must_use]
pub fn step(current: &Grid) -> Grid {
    let mut next = Grid::new(current.dims());
    step_into(current, &mut next);
    next
}
