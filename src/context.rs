//! Draw context - the drawing API widgets paint with.
//!
//! A `DrawContext` wraps a [`Screen`] for one draw pass and layers two
//! stacks on top of it:
//!
//! - **Transform stack**: cumulative `(tx, ty)` offsets. Widgets draw in local
//!   coordinates; device coordinates are local plus the current offset.
//! - **Clip stack**: the active device-space clip rect. Every cell write is
//!   tested against it.
//!
//! The local cursor and the current color pair are plain state, not stacked:
//! popping a transform or clip leaves them as they are.
//!
//! # Example
//!
//! ```
//! use spark_grid::{Color, DrawContext, Rect, ScreenEncoder, GlyphSet};
//!
//! let mut screen = ScreenEncoder::new(Vec::new(), GlyphSet::Unicode);
//! let mut ctx = DrawContext::begin(&mut screen, Rect::new(0, 0, 80, 24));
//! ctx.push_transform(2, 1);
//! ctx.color(Color::YELLOW, Color::BLUE).text("hello");
//! ctx.pop_transform();
//! ctx.end().unwrap();
//! ```

use std::io;

use bitflags::bitflags;

use crate::renderer::Screen;
use crate::types::{Color, Glyph, Point, Rect, SpecialChar};

bitflags! {
    /// Border edges that fall inside the active clip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edges: u8 {
        const TOP    = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
    }
}

/// Drawing state for one pass over a [`Screen`].
pub struct DrawContext<'s> {
    screen: &'s mut dyn Screen,
    clip: Rect,
    tx: i32,
    ty: i32,
    x: i32,
    y: i32,
    fg: Color,
    bg: Color,
    transforms: Vec<Point>,
    clips: Vec<Rect>,
}

impl<'s> DrawContext<'s> {
    /// Start a draw pass restricted to `clip` (device coordinates).
    pub fn begin(screen: &'s mut dyn Screen, clip: Rect) -> Self {
        screen.begin_draw();
        Self {
            screen,
            clip,
            tx: 0,
            ty: 0,
            x: 0,
            y: 0,
            fg: Color::WHITE,
            bg: Color::BLACK,
            transforms: Vec::new(),
            clips: Vec::new(),
        }
    }

    /// Finish the pass and flush the screen.
    pub fn end(self) -> io::Result<()> {
        self.screen.end_draw()
    }

    // =========================================================================
    // Stacks
    // =========================================================================

    pub fn push_transform(&mut self, dx: i32, dy: i32) {
        self.transforms.push(Point::new(self.tx, self.ty));
        self.tx += dx;
        self.ty += dy;
    }

    pub fn pop_transform(&mut self) {
        if let Some(p) = self.transforms.pop() {
            self.tx = p.x;
            self.ty = p.y;
        }
    }

    /// Narrow the clip to the local rect `(x, y, w, h)`.
    pub fn push_clip(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.clips.push(self.clip);
        let local = Rect::new(self.tx + x, self.ty + y, width, height);
        self.clip = self.clip.intersection(&local);
    }

    pub fn pop_clip(&mut self) {
        if let Some(clip) = self.clips.pop() {
            self.clip = clip;
        }
    }

    /// Active clip in device coordinates.
    #[inline]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Current cumulative offset.
    #[inline]
    pub fn transform(&self) -> Point {
        Point::new(self.tx, self.ty)
    }

    /// Local cursor position.
    #[inline]
    pub fn cursor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Coarse check: does the local rect touch the active clip at all?
    pub fn is_visible(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        Rect::new(self.tx + x, self.ty + y, width, height).intersects(&self.clip)
    }

    // =========================================================================
    // Cursor & color
    // =========================================================================

    pub fn move_cursor_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn color(&mut self, fg: Color, bg: Color) -> &mut Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// White on black.
    pub fn reset_color(&mut self) -> &mut Self {
        self.color(Color::WHITE, Color::BLACK)
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    fn put(&mut self, glyph: Glyph) {
        let dx = self.tx + self.x;
        let dy = self.ty + self.y;
        if self.clip.contains_point(dx, dy) {
            match glyph {
                Glyph::Char(ch) => self.screen.set_char(ch, self.fg, self.bg, dx, dy),
                Glyph::Special(s) => self.screen.set_special_char(s, self.fg, self.bg, dx, dy),
            }
        }
        self.x += 1;
    }

    /// Write `s` at the cursor, one cell per code point.
    pub fn text(&mut self, s: &str) -> &mut Self {
        for ch in s.chars() {
            self.put(Glyph::Char(ch));
        }
        self
    }

    pub fn char(&mut self, ch: char) -> &mut Self {
        self.put(Glyph::Char(ch));
        self
    }

    pub fn char_times(&mut self, ch: char, times: i32) -> &mut Self {
        for _ in 0..times.max(0) {
            self.put(Glyph::Char(ch));
        }
        self
    }

    pub fn special_char(&mut self, glyph: SpecialChar) -> &mut Self {
        self.put(Glyph::Special(glyph));
        self
    }

    pub fn special_char_times(&mut self, glyph: SpecialChar, times: i32) -> &mut Self {
        for _ in 0..times.max(0) {
            self.put(Glyph::Special(glyph));
        }
        self
    }

    /// Write `glyph` into every cell of the local rect.
    pub fn fill(&mut self, x: i32, y: i32, width: i32, height: i32, glyph: impl Into<Glyph>) -> &mut Self {
        let glyph = glyph.into();
        for row in y..y + height.max(0) {
            self.move_cursor_to(x, row);
            for _ in 0..width.max(0) {
                self.put(glyph);
            }
        }
        self
    }

    /// Edges of the local box `(x, y, w, h)` whose row or column lies inside
    /// the active clip.
    pub fn border_edges(&self, x: i32, y: i32, width: i32, height: i32) -> Edges {
        let dev = Rect::new(self.tx + x, self.ty + y, width, height);
        let clip = self.clip;
        let in_rows = |row: i32| row >= clip.y && row < clip.y1();
        let in_cols = |col: i32| col >= clip.x && col < clip.x1();
        let spans_cols = dev.x < clip.x1() && dev.x1() > clip.x;
        let spans_rows = dev.y < clip.y1() && dev.y1() > clip.y;

        let mut edges = Edges::empty();
        if spans_cols && in_rows(dev.y) {
            edges |= Edges::TOP;
        }
        if spans_cols && in_rows(dev.y1() - 1) {
            edges |= Edges::BOTTOM;
        }
        if spans_rows && in_cols(dev.x) {
            edges |= Edges::LEFT;
        }
        if spans_rows && in_cols(dev.x1() - 1) {
            edges |= Edges::RIGHT;
        }
        edges
    }

    /// Draw a double-line box outline.
    ///
    /// Boxes narrower or shorter than two cells have no outline and are
    /// skipped.
    pub fn border(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        if width < 2 || height < 2 {
            return self;
        }
        let edges = self.border_edges(x, y, width, height);
        let right = x + width - 1;
        let bottom = y + height - 1;

        if edges.contains(Edges::TOP) {
            self.move_cursor_to(x, y)
                .special_char(SpecialChar::DoubleCornerTopLeft)
                .special_char_times(SpecialChar::DoubleHorizontal, width - 2)
                .special_char(SpecialChar::DoubleCornerTopRight);
        }
        if edges.intersects(Edges::LEFT | Edges::RIGHT) {
            for row in y + 1..bottom {
                if edges.contains(Edges::LEFT) {
                    self.move_cursor_to(x, row).special_char(SpecialChar::DoubleVertical);
                }
                if edges.contains(Edges::RIGHT) {
                    self.move_cursor_to(right, row).special_char(SpecialChar::DoubleVertical);
                }
            }
        }
        if edges.contains(Edges::BOTTOM) {
            self.move_cursor_to(x, bottom)
                .special_char(SpecialChar::DoubleCornerBottomLeft)
                .special_char_times(SpecialChar::DoubleHorizontal, width - 2)
                .special_char(SpecialChar::DoubleCornerBottomRight);
        }
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        cells: Vec<(i32, i32, Glyph, Color, Color)>,
        begun: usize,
        ended: usize,
    }

    impl Screen for Recorder {
        fn begin_draw(&mut self) {
            self.begun += 1;
        }
        fn set_char(&mut self, ch: char, fg: Color, bg: Color, x: i32, y: i32) {
            self.cells.push((x, y, Glyph::Char(ch), fg, bg));
        }
        fn set_special_char(&mut self, glyph: SpecialChar, fg: Color, bg: Color, x: i32, y: i32) {
            self.cells.push((x, y, Glyph::Special(glyph), fg, bg));
        }
        fn end_draw(&mut self) -> io::Result<()> {
            self.ended += 1;
            Ok(())
        }
    }

    fn positions(rec: &Recorder) -> Vec<(i32, i32)> {
        rec.cells.iter().map(|c| (c.0, c.1)).collect()
    }

    #[test]
    fn test_begin_end_bracket_screen() {
        let mut rec = Recorder::default();
        let ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        ctx.end().unwrap();
        assert_eq!((rec.begun, rec.ended), (1, 1));
    }

    #[test]
    fn test_transform_offsets_text() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 20, 20));
        ctx.push_transform(3, 4);
        ctx.push_transform(1, 1);
        ctx.text("ab");
        ctx.pop_transform();
        ctx.move_cursor_to(0, 0).text("c");
        ctx.end().unwrap();
        assert_eq!(positions(&rec), vec![(4, 5), (5, 5), (3, 4)]);
    }

    #[test]
    fn test_clip_drops_outside_cells() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 20, 20));
        ctx.push_clip(2, 0, 2, 1);
        ctx.text("abcdef");
        ctx.end().unwrap();
        assert_eq!(positions(&rec), vec![(2, 0), (3, 0)]);
    }

    #[test]
    fn test_clip_is_intersection_with_parent() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        ctx.push_transform(8, 8);
        ctx.push_clip(0, 0, 5, 5);
        assert_eq!(ctx.clip(), Rect::new(8, 8, 2, 2));
        ctx.pop_clip();
        ctx.pop_transform();
        assert_eq!(ctx.clip(), Rect::new(0, 0, 10, 10));
        assert_eq!(ctx.transform(), Point::new(0, 0));
    }

    #[test]
    fn test_pop_empty_stacks_is_noop() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(1, 1, 3, 3));
        ctx.pop_clip();
        ctx.pop_transform();
        assert_eq!(ctx.clip(), Rect::new(1, 1, 3, 3));
        assert_eq!(ctx.transform(), Point::new(0, 0));
    }

    #[test]
    fn test_color_not_restored_by_pop() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        ctx.push_transform(1, 0);
        ctx.color(Color::RED, Color::BLUE);
        ctx.pop_transform();
        ctx.move_cursor_to(0, 0).char('x');
        ctx.end().unwrap();
        assert_eq!(rec.cells[0].3, Color::RED);
        assert_eq!(rec.cells[0].4, Color::BLUE);
    }

    #[test]
    fn test_fill_respects_clip() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(1, 1, 2, 2));
        ctx.fill(0, 0, 4, 4, '#');
        ctx.end().unwrap();
        assert_eq!(positions(&rec), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_fill_negative_size_is_noop() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        ctx.fill(0, 0, -3, 2, '#');
        ctx.fill(0, 0, 2, -1, '#');
        ctx.end().unwrap();
        assert!(rec.cells.is_empty());
    }

    #[test]
    fn test_border_full() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        ctx.border(0, 0, 3, 3);
        ctx.end().unwrap();
        assert_eq!(rec.cells.len(), 8);
        assert_eq!(rec.cells[0].2, Glyph::Special(SpecialChar::DoubleCornerTopLeft));
        assert_eq!(rec.cells[7].2, Glyph::Special(SpecialChar::DoubleCornerBottomRight));
    }

    #[test]
    fn test_border_degenerate_is_noop() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        ctx.border(0, 0, 1, 5);
        ctx.border(0, 0, 5, 0);
        ctx.end().unwrap();
        assert!(rec.cells.is_empty());
    }

    #[test]
    fn test_border_edges_half_clipped() {
        let mut rec = Recorder::default();
        let ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        assert_eq!(ctx.border_edges(0, 0, 5, 5), Edges::all());
        assert_eq!(ctx.border_edges(5, 5, 10, 10), Edges::TOP | Edges::LEFT);
        assert_eq!(ctx.border_edges(20, 20, 3, 3), Edges::empty());
    }

    #[test]
    fn test_border_clipped_right_half() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 4, 10));
        ctx.border(2, 0, 5, 3);
        ctx.end().unwrap();
        assert!(rec.cells.iter().all(|c| c.0 < 4));
        assert!(!rec
            .cells
            .iter()
            .any(|c| c.2 == Glyph::Special(SpecialChar::DoubleCornerTopRight)));
    }

    #[test]
    fn test_is_visible_closed_interval() {
        let mut rec = Recorder::default();
        let mut ctx = DrawContext::begin(&mut rec, Rect::new(0, 0, 10, 10));
        assert!(ctx.is_visible(10, 0, 2, 2));
        assert!(!ctx.is_visible(11, 0, 2, 2));
        ctx.push_transform(-20, 0);
        assert!(!ctx.is_visible(0, 0, 5, 5));
    }
}
