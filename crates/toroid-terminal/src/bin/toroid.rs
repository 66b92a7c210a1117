//! toroid: Conway's Game of Life on a 25x80 torus
//!
//! Run: cargo run -p toroid-terminal --bin toroid < pattern.txt
//!
//! The seed is read from standard input as 2000 whitespace-separated `0`/`1`
//! tokens. Keys: `w` faster, `s` slower, `q` quit. SIGTERM and SIGHUP quit
//! the same way `q` does, restoring the terminal first.

use std::io;
use std::process::ExitCode;

use toroid_core::read_seed;
use toroid_terminal::{
    CrosstermBackend, InputPoller, LifeApp, ShutdownFlag, SimConfig, TermError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stderr, warnings only unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("toroid: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), TermError> {
    let config = SimConfig::default();
    info!(dims = %config.dims, "reading seed from stdin");
    let seed = read_seed(io::stdin().lock(), config.dims)?;
    let app = LifeApp::new(config, seed)?;

    // Only once the seed is in: a signal while reading stdin should still kill us.
    let shutdown = ShutdownFlag::install()?;
    CrosstermBackend::install_panic_hook();
    let mut app = app.with_poller(InputPoller::new().with_shutdown(shutdown));
    app.run()
}
