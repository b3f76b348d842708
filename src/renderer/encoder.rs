//! Stateful screen encoder.
//!
//! Translates cell writes into the shortest escape stream it can: a cursor
//! move is emitted only when a write does not continue the previous one, and
//! an SGR sequence only when the color pair changes. A run of N contiguous
//! same-colored cells costs one move, one color sequence and N glyphs.

use std::io::{self, Write};

use tracing::trace;

use crate::types::{Color, SpecialChar};

use super::ansi;
use super::glyphs::GlyphSet;
use super::output::OutputBuffer;
use super::Screen;

/// Encodes cell writes for a sink and flushes them once per draw pass.
#[derive(Debug)]
pub struct ScreenEncoder<W: Write> {
    sink: W,
    out: OutputBuffer,
    glyphs: GlyphSet,
    last_pos: Option<(i32, i32)>,
    last_colors: Option<(Color, Color)>,
}

impl<W: Write> ScreenEncoder<W> {
    /// Create an encoder with the default buffer capacity.
    pub fn new(sink: W, glyphs: GlyphSet) -> Self {
        Self::with_capacity(sink, glyphs, crate::config::DEFAULT_BUFFER_CAPACITY)
    }

    pub fn with_capacity(sink: W, glyphs: GlyphSet, capacity: usize) -> Self {
        Self {
            sink,
            out: OutputBuffer::with_capacity(capacity),
            glyphs,
            last_pos: None,
            last_colors: None,
        }
    }

    #[inline]
    pub fn glyphs(&self) -> GlyphSet {
        self.glyphs
    }

    /// Bytes encoded since the last flush.
    #[inline]
    pub fn pending(&self) -> &OutputBuffer {
        &self.out
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Forget the cached cursor position and colors.
    ///
    /// The next write emits its full state.
    pub fn reset(&mut self) {
        self.last_pos = None;
        self.last_colors = None;
    }

    /// Write raw bytes straight through to the sink (control sequences
    /// outside a draw pass).
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)?;
        self.sink.flush()
    }

    fn put(&mut self, ch: char, fg: Color, bg: Color, x: i32, y: i32) {
        if self.last_pos != Some((x, y)) {
            ansi::cursor_to(&mut self.out, x, y).ok();
        }
        if self.last_colors != Some((fg, bg)) {
            ansi::colors(&mut self.out, fg, bg).ok();
            self.last_colors = Some((fg, bg));
        }
        self.glyphs.encode(ch, &mut self.out);
        self.last_pos = Some((x + 1, y));
    }

    /// Flush everything encoded so far in a single write.
    pub fn flush(&mut self) -> io::Result<()> {
        trace!(target: "spark_grid::encoder", bytes = self.out.len(), "flush");
        self.out.flush_to(&mut self.sink)
    }
}

impl<W: Write> Screen for ScreenEncoder<W> {
    fn begin_draw(&mut self) {
        self.reset();
    }

    fn set_char(&mut self, ch: char, fg: Color, bg: Color, x: i32, y: i32) {
        self.put(ch, fg, bg, x, y);
    }

    fn set_special_char(&mut self, glyph: SpecialChar, fg: Color, bg: Color, x: i32, y: i32) {
        let ch = self.glyphs.special(glyph);
        self.put(ch, fg, bg, x, y);
    }

    fn end_draw(&mut self) -> io::Result<()> {
        self.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================
