//! Terminal backends.
//!
//! All raw terminal access goes through [`TerminalBackend`] so the main loop
//! can be driven by [`TestableBackend`] without a TTY.

use crate::error::TermError;
use crate::render::Renderer;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use toroid_core::Grid;

/// Backend trait for raw terminal operations (crossterm calls).
pub trait TerminalBackend {
    fn enable_raw_mode(&mut self) -> Result<(), TermError>;
    fn disable_raw_mode(&mut self) -> Result<(), TermError>;
    fn enter_alternate_screen(&mut self) -> Result<(), TermError>;
    fn leave_alternate_screen(&mut self) -> Result<(), TermError>;
    fn hide_cursor(&mut self) -> Result<(), TermError>;
    fn show_cursor(&mut self) -> Result<(), TermError>;
    /// Check for a pending event, waiting at most `timeout`.
    fn poll(&self, timeout: Duration) -> Result<bool, TermError>;
    /// Consume the next event.
    fn read_event(&self) -> Result<Event, TermError>;
    /// Draw a full frame and flush it.
    fn draw(&mut self, renderer: &Renderer, grid: &Grid) -> Result<(), TermError>;
}

impl<B: TerminalBackend + ?Sized> TerminalBackend for &mut B {
    fn enable_raw_mode(&mut self) -> Result<(), TermError> {
        (**self).enable_raw_mode()
    }
    fn disable_raw_mode(&mut self) -> Result<(), TermError> {
        (**self).disable_raw_mode()
    }
    fn enter_alternate_screen(&mut self) -> Result<(), TermError> {
        (**self).enter_alternate_screen()
    }
    fn leave_alternate_screen(&mut self) -> Result<(), TermError> {
        (**self).leave_alternate_screen()
    }
    fn hide_cursor(&mut self) -> Result<(), TermError> {
        (**self).hide_cursor()
    }
    fn show_cursor(&mut self) -> Result<(), TermError> {
        (**self).show_cursor()
    }
    fn poll(&self, timeout: Duration) -> Result<bool, TermError> {
        (**self).poll(timeout)
    }
    fn read_event(&self) -> Result<Event, TermError> {
        (**self).read_event()
    }
    fn draw(&mut self, renderer: &Renderer, grid: &Grid) -> Result<(), TermError> {
        (**self).draw(renderer, grid)
    }
}

/// Real crossterm backend.
///
/// On Unix crossterm reads keys from `/dev/tty` when standard input is not a
/// terminal, so the seed can be piped in while keys still come from the user.
pub struct CrosstermBackend {
    stdout: Stdout,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Restore the terminal before the panic message is printed, so the
    /// message lands on the main screen rather than the alternate one.
    pub fn install_panic_hook() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let mut backend = Self::new();
            let _ = backend.show_cursor();
            let _ = backend.leave_alternate_screen();
            let _ = backend.disable_raw_mode();
            previous(info);
        }));
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enable_raw_mode(&mut self) -> Result<(), TermError> {
        enable_raw_mode()?;
        Ok(())
    }
    fn disable_raw_mode(&mut self) -> Result<(), TermError> {
        disable_raw_mode()?;
        Ok(())
    }
    fn enter_alternate_screen(&mut self) -> Result<(), TermError> {
        execute!(self.stdout, EnterAlternateScreen)?;
        Ok(())
    }
    fn leave_alternate_screen(&mut self) -> Result<(), TermError> {
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }
    fn hide_cursor(&mut self) -> Result<(), TermError> {
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }
    fn show_cursor(&mut self) -> Result<(), TermError> {
        execute!(self.stdout, cursor::Show)?;
        Ok(())
    }
    fn poll(&self, timeout: Duration) -> Result<bool, TermError> {
        Ok(event::poll(timeout)?)
    }
    fn read_event(&self) -> Result<Event, TermError> {
        Ok(event::read()?)
    }
    fn draw(&mut self, renderer: &Renderer, grid: &Grid) -> Result<(), TermError> {
        renderer.render(grid, &mut self.stdout)?;
        Ok(())
    }
}

/// Testable backend with generic writer for capturing escape sequences.
/// Events are replayed from a queue; `poll` reports whether one is queued.
pub struct TestableBackend<W: Write> {
    writer: W,
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
    events: RefCell<VecDeque<Event>>,
    polls: RefCell<Vec<Duration>>,
    frames: usize,
}

impl<W: Write> TestableBackend<W> {
    /// Create a new testable backend with the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            raw_mode: false,
            alternate_screen: false,
            cursor_hidden: false,
            events: RefCell::new(VecDeque::new()),
            polls: RefCell::new(Vec::new()),
            frames: 0,
        }
    }

    /// Queue events to be returned by `read_event`.
    pub fn with_events(self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.borrow_mut().extend(events);
        self
    }

    /// Queue one more event.
    pub fn push_event(&mut self, event: Event) {
        self.events.get_mut().push_back(event);
    }

    /// Events not yet consumed.
    pub fn pending_events(&self) -> usize {
        self.events.borrow().len()
    }

    /// Timeouts passed to `poll`, in call order.
    pub fn poll_timeouts(&self) -> Vec<Duration> {
        self.polls.borrow().clone()
    }

    /// Check if raw mode is enabled.
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    /// Check if the alternate screen is active.
    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    /// Check if the cursor is hidden.
    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Number of frames drawn.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Borrow the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get the underlying writer (consumes self).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TerminalBackend for TestableBackend<W> {
    fn enable_raw_mode(&mut self) -> Result<(), TermError> {
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<(), TermError> {
        self.raw_mode = false;
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<(), TermError> {
        self.alternate_screen = true;
        execute!(self.writer, EnterAlternateScreen)?;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<(), TermError> {
        self.alternate_screen = false;
        execute!(self.writer, LeaveAlternateScreen)?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), TermError> {
        self.cursor_hidden = true;
        execute!(self.writer, cursor::Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), TermError> {
        self.cursor_hidden = false;
        execute!(self.writer, cursor::Show)?;
        Ok(())
    }

    fn poll(&self, timeout: Duration) -> Result<bool, TermError> {
        self.polls.borrow_mut().push(timeout);
        Ok(!self.events.borrow().is_empty())
    }

    fn read_event(&self) -> Result<Event, TermError> {
        self.events
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TermError::Io(io::Error::new(io::ErrorKind::WouldBlock, "no events")))
    }

    fn draw(&mut self, renderer: &Renderer, grid: &Grid) -> Result<(), TermError> {
        renderer.render(grid, &mut self.writer)?;
        self.frames += 1;
        Ok(())
    }
}
