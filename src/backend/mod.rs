//! Backends - where draw passes end up and where input comes from.
//!
//! - [`TerminalBackend`] - the process's terminal (raw mode, stdin thread)
//! - [`HeadlessBackend`] - in-memory grid for tests and offscreen use
//! - [`InputParser`] - shared decoder for size and mouse reports

mod headless;
pub mod input;
mod terminal;

pub use headless::{Cell, HeadlessBackend};
pub use input::InputParser;
pub use terminal::TerminalBackend;

use std::io;

use crate::renderer::Screen;
use crate::types::{Point, Size};

/// A screen plus the device services the engine needs around it.
pub trait Backend: Screen {
    /// Current screen size, or `None` while it is still unknown.
    fn screen_size(&mut self) -> Option<Size>;

    /// Register a callback for screen size changes.
    fn on_screen_size_changed(&mut self, listener: Box<dyn FnMut(Size)>);

    /// Pump pending input and refresh the screen size.
    fn update(&mut self);

    /// Take user input received since the last call.
    fn read_input(&mut self) -> String;

    /// Last known pointer position (0-based cells).
    fn mouse_position(&self) -> Option<Point>;

    /// Release the device and restore its state.
    fn destroy(&mut self) -> io::Result<()>;
}
