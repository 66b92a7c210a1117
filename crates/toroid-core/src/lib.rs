//! Core types for the toroid Game of Life simulator.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)] // "variables can be used directly in format!"
#![allow(clippy::needless_range_loop)] // "loop variable only used to index"
//!
//! Everything in this crate is pure, in-memory and terminal-agnostic:
//!
//! - [`Grid`]: fixed-dimension cell field with toroidal adjacency
//! - [`rules`]: the birth/survival/death rule and neighbor counting
//! - [`DoubleBuffer`]: two preallocated grids whose roles swap each tick
//! - [`seed`]: parsing the startup grid from a whitespace token stream
//! - [`Speed`] and [`Command`]: the interactive speed model
//!
//! # Example
//!
//! ```
//! use toroid_core::{rules, Cell, Grid, GridDims};
//!
//! let mut grid = Grid::new(GridDims::new(5, 5));
//! grid.set(2, 1, Cell::Alive);
//! grid.set(2, 2, Cell::Alive);
//! grid.set(2, 3, Cell::Alive);
//!
//! let next = rules::step(&grid);
//! assert!(next.get(1, 2).is_alive());
//! assert!(next.get(3, 2).is_alive());
//! assert!(!next.get(2, 1).is_alive());
//! ```

mod buffer;
mod error;
mod grid;
pub mod rules;
pub mod seed;
mod speed;

pub use buffer::DoubleBuffer;
pub use error::SeedError;
pub use grid::{Cell, Grid, GridDims, ALIVE_GLYPH, DEAD_GLYPH};
pub use seed::{parse_seed, read_seed};
pub use speed::{Command, Speed};
