//! Fixed-size cell grid with toroidal adjacency.

use std::fmt;

/// Glyph for live cells in text output.
pub const ALIVE_GLYPH: char = '@';
/// Glyph for dead cells in text output.
pub const DEAD_GLYPH: char = ' ';

/// State of a single grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Empty position.
    #[default]
    Dead = 0,
    /// Occupied position.
    Alive = 1,
}

impl Cell {
    /// Check if the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Create a cell from a boolean liveness flag.
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::from_alive(alive)
    }
}

/// Grid dimensions, fixed for the lifetime of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl GridDims {
    /// The classic 25x80 terminal field.
    pub const REFERENCE: Self = Self { rows: 25, cols: 80 };

    /// Create new dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Self { rows, cols }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Offset `(row, col)` by `(d_row, d_col)`, wrapping around both edges.
    #[must_use]
    pub const fn wrap(self, row: usize, col: usize, d_row: isize, d_col: isize) -> (usize, usize) {
        let row = (row as isize + d_row).rem_euclid(self.rows as isize) as usize;
        let col = (col as isize + d_col).rem_euclid(self.cols as isize) as usize;
        (row, col)
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Rectangular field of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims: GridDims,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    #[must_use]
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![Cell::Dead; dims.cell_count()],
        }
    }

    /// Build a grid from rows of booleans. Intended for patterns and tests.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows have differing lengths.
    #[must_use]
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(GridDims::new(rows.len(), width));
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "all rows must have the same length");
            for (c, &alive) in row.iter().enumerate() {
                grid.set(r, c, Cell::from_alive(alive));
            }
        }
        grid
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.dims.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.dims.rows && col < self.dims.cols,
            "cell ({row}, {col}) outside {} grid",
            self.dims
        );
        row * self.dims.cols + col
    }

    /// Get the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Set the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Iterate over rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.dims.cols)
    }

    /// Number of live cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Reset every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }
}

/// Plain-text frame: [`ALIVE_GLYPH`] and [`DEAD_GLYPH`], one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                let glyph = if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH };
                fmt::Write::write_char(f, glyph)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
