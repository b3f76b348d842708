//! In-memory backend.
//!
//! Keeps a cell grid of everything drawn plus the exact bytes each draw pass
//! would have sent to a terminal. Used for tests and offscreen rendering.

use std::io;

use super::input::InputParser;
use super::Backend;
use crate::renderer::{GlyphSet, Screen, ScreenEncoder};
use crate::types::{Color, Point, Size, SpecialChar};

/// One drawn cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

/// A backend without a terminal.
pub struct HeadlessBackend {
    encoder: ScreenEncoder<Vec<u8>>,
    size: Option<Size>,
    pending_size: Option<Size>,
    cells: Vec<Option<Cell>>,
    frames: Vec<Vec<u8>>,
    input: InputParser,
    queued_input: Vec<u8>,
    listeners: Vec<Box<dyn FnMut(Size)>>,
    destroyed: bool,
}

impl HeadlessBackend {
    /// A screen of `size` cells, Unicode glyphs.
    pub fn new(size: Size) -> Self {
        let mut backend = Self::without_size();
        backend.apply_size(size);
        backend
    }

    /// A backend that never reports a size until
    /// [`set_screen_size`](Self::set_screen_size) is called.
    pub fn without_size() -> Self {
        Self {
            encoder: ScreenEncoder::new(Vec::new(), GlyphSet::Unicode),
            size: None,
            pending_size: None,
            cells: Vec::new(),
            frames: Vec::new(),
            input: InputParser::new(),
            queued_input: Vec::new(),
            listeners: Vec::new(),
            destroyed: false,
        }
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.encoder = ScreenEncoder::new(Vec::new(), glyphs);
        self
    }

    /// Resize the screen. Applied, and reported to listeners, on the next
    /// [`update`](Backend::update).
    pub fn set_screen_size(&mut self, size: Size) {
        self.pending_size = Some(size);
    }

    /// Queue raw input bytes, decoded on the next update or read.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.queued_input.extend_from_slice(bytes);
    }

    fn apply_size(&mut self, size: Size) {
        self.size = Some(size);
        let len = (size.width.max(0) * size.height.max(0)) as usize;
        self.cells = vec![None; len];
    }

    fn pump_input(&mut self) {
        if !self.queued_input.is_empty() {
            let bytes = std::mem::take(&mut self.queued_input);
            self.input.feed(&bytes);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let size = self.size?;
        if x < 0 || y < 0 || x >= size.width || y >= size.height {
            return None;
        }
        Some((y * size.width + x) as usize)
    }

    fn store(&mut self, ch: char, fg: Color, bg: Color, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(Cell { ch, fg, bg });
        }
    }

    /// The cell at `(x, y)`, if anything was drawn there.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// A screen row as text; undrawn cells read as spaces.
    pub fn row_text(&self, y: i32) -> String {
        let width = self.size.map_or(0, |s| s.width);
        (0..width)
            .map(|x| self.cell(x, y).map_or(' ', |c| c.ch))
            .collect()
    }

    /// Bytes emitted by each completed draw pass, oldest first.
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    pub fn take_frames(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.frames)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Screen for HeadlessBackend {
    fn begin_draw(&mut self) {
        self.encoder.begin_draw();
    }

    fn set_char(&mut self, ch: char, fg: Color, bg: Color, x: i32, y: i32) {
        self.store(ch, fg, bg, x, y);
        self.encoder.set_char(ch, fg, bg, x, y);
    }

    fn set_special_char(&mut self, glyph: SpecialChar, fg: Color, bg: Color, x: i32, y: i32) {
        self.store(GlyphSet::Unicode.special(glyph), fg, bg, x, y);
        self.encoder.set_special_char(glyph, fg, bg, x, y);
    }

    fn end_draw(&mut self) -> io::Result<()> {
        self.encoder.end_draw()?;
        let frame = std::mem::take(self.encoder.sink_mut());
        self.frames.push(frame);
        Ok(())
    }
}

impl Backend for HeadlessBackend {
    fn screen_size(&mut self) -> Option<Size> {
        if self.size.is_none() {
            if let Some(size) = self.pending_size.take() {
                self.apply_size(size);
            }
        }
        self.size
    }

    fn on_screen_size_changed(&mut self, listener: Box<dyn FnMut(Size)>) {
        self.listeners.push(listener);
    }

    fn update(&mut self) {
        self.pump_input();
        if let Some(size) = self.pending_size.take() {
            if self.size != Some(size) {
                self.apply_size(size);
                for listener in &mut self.listeners {
                    listener(size);
                }
            }
        }
    }

    fn read_input(&mut self) -> String {
        self.pump_input();
        self.input.take_text()
    }

    fn mouse_position(&self) -> Option<Point> {
        self.input.mouse_position()
    }

    fn destroy(&mut self) -> io::Result<()> {
        self.destroyed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_and_frames() {
        let mut backend = HeadlessBackend::new(Size::new(4, 2));
        backend.begin_draw();
        backend.set_char('a', Color::RED, Color::BLACK, 1, 0);
        backend.set_special_char(SpecialChar::FullBlock, Color::WHITE, Color::BLACK, 2, 0);
        backend.set_char('z', Color::WHITE, Color::BLACK, 9, 9);
        backend.end_draw().unwrap();

        assert_eq!(backend.row_text(0), " a█ ");
        assert_eq!(backend.cell(1, 0).map(|c| c.fg), Some(Color::RED));
        assert_eq!(backend.frames().len(), 1);
        assert!(String::from_utf8_lossy(&backend.frames()[0]).starts_with("\x1b[1;2H"));
    }

    #[test]
    fn test_resize_notifies_on_update() {
        use std::cell::Cell as StdCell;
        use std::rc::Rc;

        let seen = Rc::new(StdCell::new(None));
        let sink = Rc::clone(&seen);
        let mut backend = HeadlessBackend::new(Size::new(4, 2));
        backend.on_screen_size_changed(Box::new(move |size| sink.set(Some(size))));

        backend.set_screen_size(Size::new(8, 3));
        assert_eq!(seen.get(), None);
        backend.update();
        assert_eq!(seen.get(), Some(Size::new(8, 3)));
        assert_eq!(backend.screen_size(), Some(Size::new(8, 3)));
    }

    #[test]
    fn test_input_and_mouse() {
        let mut backend = HeadlessBackend::new(Size::new(4, 2));
        backend.push_input(b"q\x1b[<0;3;2M");
        assert_eq!(backend.read_input(), "q");
        assert_eq!(backend.mouse_position(), Some(Point::new(2, 1)));
    }
}
