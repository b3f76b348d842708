//! Renderer - escape-sequence encoding for character-grid terminals.
//!
//! # Architecture
//!
//! ```text
//! DrawContext ──set_char──▶ Screen (trait)
//!                              │
//!                 ScreenEncoder<W> ──▶ OutputBuffer ──write_all──▶ W
//! ```
//!
//! - [`Screen`] - the capability a draw pass writes cells into
//! - [`ScreenEncoder`] - cursor/color deduplicating encoder over any `Write`
//! - [`OutputBuffer`] - growable byte buffer, one write per pass
//! - [`GlyphSet`] - UTF-8 or code page 437 output
//! - [`ansi`] - raw escape sequences

pub mod ansi;
mod encoder;
mod glyphs;
mod output;

pub use encoder::ScreenEncoder;
pub use glyphs::GlyphSet;
pub use output::OutputBuffer;

use std::io;

use crate::types::{Color, SpecialChar};

/// A cell-addressable output surface.
///
/// Coordinates are device cells. Callers are expected to clip before
/// writing; implementations do not bounds-check against the screen.
pub trait Screen {
    /// Start a draw pass. Cached output state is forgotten.
    fn begin_draw(&mut self);

    /// Write one character cell.
    fn set_char(&mut self, ch: char, fg: Color, bg: Color, x: i32, y: i32);

    /// Write one special glyph cell.
    fn set_special_char(&mut self, glyph: SpecialChar, fg: Color, bg: Color, x: i32, y: i32);

    /// Finish the pass and push its output to the device.
    fn end_draw(&mut self) -> io::Result<()>;
}
