//! Terminal front end for the toroid Game of Life simulator.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)] // "variables can be used directly in format!"
//!
//! This crate drives `toroid_core` grids on a real terminal using `crossterm`
//! directly.
//!
//! # Architecture
//!
//! ```text
//! stdin seed ──► Grid ──► LifeApp ──tick──► poll ─► step ─► swap ─► sleep ─► draw
//!                              ▲                                            │
//!                              └──────────── TerminalBackend ◄──────────────┘
//! ```
//!
//! - [`TerminalBackend`] abstracts every raw terminal call; [`CrosstermBackend`]
//!   talks to the TTY and [`TestableBackend`] replays scripted events
//! - [`TerminalSession`] holds raw mode for its lifetime and restores the
//!   terminal on drop
//! - [`InputPoller`] performs the zero-timeout keystroke check
//! - [`Renderer`] clears and redraws the full frame
//! - [`ShutdownFlag`] turns SIGTERM/SIGHUP into a normal quit
//!
//! # Example
//!
//! ```ignore
//! use toroid_terminal::{LifeApp, SimConfig};
//!
//! let config = SimConfig::default();
//! let seed = toroid_core::read_seed(std::io::stdin().lock(), config.dims)?;
//! LifeApp::new(config, seed)?.run()?;
//! ```

mod app;
mod backend;
mod config;
mod error;
mod input;
mod render;
mod session;
mod shutdown;

pub use app::{LifeApp, LoopState};
pub use backend::{CrosstermBackend, TerminalBackend, TestableBackend};
pub use config::{SimConfig, BASE_DELAY};
pub use error::TermError;
pub use input::{InputPoller, KeyBinding};
pub use render::{Renderer, ALIVE_GLYPH, DEAD_GLYPH};
pub use session::TerminalSession;
pub use shutdown::ShutdownFlag;
