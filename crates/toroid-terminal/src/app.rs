//! Simulation main loop.

use crate::backend::{CrosstermBackend, TerminalBackend};
use crate::config::SimConfig;
use crate::error::TermError;
use crate::input::InputPoller;
use crate::render::Renderer;
use crate::session::TerminalSession;
use toroid_core::{Command, DoubleBuffer, Grid, Speed};
use tracing::{debug, info};

/// Loop state. `Terminated` is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Game of Life simulator: owns both generation buffers and the speed.
pub struct LifeApp {
    config: SimConfig,
    buffers: DoubleBuffer,
    speed: Speed,
    state: LoopState,
    generation: u64,
    poller: InputPoller,
    renderer: Renderer,
}

impl LifeApp {
    /// Create a simulator starting from `seed`.
    pub fn new(config: SimConfig, seed: Grid) -> Result<Self, TermError> {
        if seed.dims() != config.dims {
            return Err(TermError::DimensionMismatch {
                expected: config.dims,
                found: seed.dims(),
            });
        }
        Ok(Self {
            speed: config.initial_speed,
            renderer: config.renderer(),
            buffers: DoubleBuffer::new(seed),
            state: LoopState::Running,
            generation: 0,
            poller: InputPoller::new(),
            config,
        })
    }

    /// Replace the input poller.
    #[must_use]
    pub fn with_poller(mut self, poller: InputPoller) -> Self {
        self.poller = poller;
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current (last rendered) generation.
    pub fn current(&self) -> &Grid {
        self.buffers.current()
    }

    /// Apply a command to the speed or loop state.
    pub fn apply(&mut self, command: Command) -> LoopState {
        match command {
            Command::Quit => {
                self.state = LoopState::Terminated;
                info!(generation = self.generation, "quit requested");
            }
            Command::Increase | Command::Decrease => {
                self.speed.apply(command);
                debug!(speed = self.speed.get(), "speed changed");
            }
            Command::NoOp => {}
        }
        self.state
    }

    /// Run one tick: poll, step, swap, sleep, render.
    ///
    /// A quit read during the poll ends the tick immediately, with no further
    /// generation computed or drawn.
    pub fn tick<B: TerminalBackend>(&mut self, backend: &mut B) -> Result<LoopState, TermError> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        let command = self.poller.poll(&*backend)?;
        if self.apply(command) == LoopState::Terminated {
            return Ok(self.state);
        }

        self.buffers.compute_next();
        self.buffers.swap();
        self.generation += 1;

        std::thread::sleep(self.speed.delay(self.config.base_delay));

        backend.draw(&self.renderer, self.buffers.current())?;
        Ok(self.state)
    }

    /// Run the simulation on the real terminal until quit.
    pub fn run(&mut self) -> Result<(), TermError> {
        self.run_with_backend(CrosstermBackend::new())
    }

    /// Run the simulation with a custom backend.
    /// This is the testable entry point.
    pub fn run_with_backend<B: TerminalBackend>(&mut self, backend: B) -> Result<(), TermError> {
        let mut session = TerminalSession::enter(backend)?;
        while self.tick(session.backend_mut())? == LoopState::Running {}
        session.leave()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TestableBackend;
    use crate::shutdown::ShutdownFlag;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;
    use toroid_core::{rules, GridDims};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn blinker_app() -> LifeApp {
        let seed = Grid::from_rows(&[
            [false, false, false, false, false],
            [false, false, false, false, false],
            [false, true, true, true, false],
            [false, false, false, false, false],
            [false, false, false, false, false],
        ]);
        let config = SimConfig::default()
            .with_dims(GridDims::new(5, 5))
            .with_base_delay(Duration::ZERO);
        LifeApp::new(config, seed).unwrap()
    }

    #[test]
    fn test_new_rejects_mismatched_seed() {
        let seed = Grid::new(GridDims::new(3, 3));
        let result = LifeApp::new(SimConfig::default(), seed);
        assert!(matches!(result, Err(TermError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_initial_state() {
        let app = blinker_app();
        assert_eq!(app.state(), LoopState::Running);
        assert_eq!(app.speed(), Speed::MIN);
        assert_eq!(app.generation(), 0);
        assert_eq!(app.current().live_count(), 3);
        assert_eq!(app.config().dims, GridDims::new(5, 5));
    }

    #[test]
    fn test_apply_speed_commands() {
        let mut app = blinker_app();
        app.apply(Command::Decrease);
        assert_eq!(app.speed().get(), 1);
        app.apply(Command::Increase);
        app.apply(Command::Increase);
        assert_eq!(app.speed().get(), 3);
        assert_eq!(app.apply(Command::NoOp), LoopState::Running);
    }

    #[test]
    fn test_tick_steps_and_draws() {
        let mut app = blinker_app();
        let before = app.current().clone();
        let mut backend = TestableBackend::new(Vec::new());

        assert_eq!(app.tick(&mut backend).unwrap(), LoopState::Running);
        assert_eq!(app.generation(), 1);
        assert_eq!(app.current(), &rules::step(&before));
        assert_eq!(backend.frames(), 1);

        let output = String::from_utf8(backend.into_writer()).unwrap();
        assert!(output.starts_with("\x1b[1;1H\x1b[2J"));
        assert!(output.contains("  @  \r\n"));
    }

    #[test]
    fn test_quit_ends_tick_without_step() {
        let mut app = blinker_app().with_poller(InputPoller::new());
        let before = app.current().clone();
        let mut backend = TestableBackend::new(Vec::new()).with_events([key('q')]);

        assert_eq!(app.tick(&mut backend).unwrap(), LoopState::Terminated);
        assert_eq!(app.generation(), 0);
        assert_eq!(app.current(), &before);
        assert_eq!(backend.frames(), 0);

        // Terminated is final.
        assert_eq!(app.tick(&mut backend).unwrap(), LoopState::Terminated);
        assert!(backend.poll_timeouts().len() == 1);
    }

    #[test]
    fn test_speed_key_applies_in_same_tick() {
        let mut app = blinker_app();
        let mut backend = TestableBackend::new(Vec::new()).with_events([key('w')]);
        app.tick(&mut backend).unwrap();
        assert_eq!(app.speed().get(), 2);
        assert_eq!(app.generation(), 1);
    }

    #[test]
    fn test_run_with_backend_restores_terminal() {
        let mut app = blinker_app();
        let mut backend =
            TestableBackend::new(Vec::new()).with_events([key('x'), key('w'), key('q')]);

        app.run_with_backend(&mut backend).unwrap();

        assert_eq!(app.state(), LoopState::Terminated);
        assert_eq!(app.generation(), 2);
        assert_eq!(app.speed().get(), 2);
        assert_eq!(backend.frames(), 2);
        assert!(!backend.is_raw_mode());
        assert!(!backend.is_alternate_screen());
        assert!(!backend.is_cursor_hidden());
    }

    #[test]
    fn test_shutdown_request_ends_run_and_restores_terminal() {
        let flag = ShutdownFlag::new();
        let mut app = blinker_app().with_poller(InputPoller::new().with_shutdown(flag.clone()));
        let mut backend = TestableBackend::new(Vec::new());

        assert_eq!(app.tick(&mut backend).unwrap(), LoopState::Running);
        flag.request();
        app.run_with_backend(&mut backend).unwrap();

        assert_eq!(app.state(), LoopState::Terminated);
        assert_eq!(app.generation(), 1);
        assert_eq!(backend.frames(), 1);
        assert!(!backend.is_raw_mode());
        assert!(!backend.is_alternate_screen());
        assert!(!backend.is_cursor_hidden());

        let output = String::from_utf8(backend.into_writer()).unwrap();
        assert!(output.ends_with("\x1b[?25h\x1b[?1049l"));
    }
}
