//! Scrolling viewport.

use crate::context::DrawContext;
use crate::types::{Color, Glyph, Point, Rect, Size};

use super::Widget;

/// A container whose children are shifted by a scroll offset.
///
/// Children are clipped to the viewport only, so content scrolled past an
/// edge is cut off there.
#[derive(Debug, Clone, Copy)]
pub struct Scrollable {
    pub fg: Color,
    pub bg: Color,
    pub fill: Glyph,
    offset: Point,
}

impl Scrollable {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            fill: Glyph::Char(' '),
            offset: Point::default(),
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Returns whether the offset changed.
    ///
    /// Call through [`WidgetTree::update`](super::WidgetTree::update) so the
    /// viewport gets repainted.
    pub fn set_offset(&mut self, x: i32, y: i32) -> bool {
        let offset = Point::new(x, y);
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        true
    }
}

impl Default for Scrollable {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::BLACK)
    }
}

impl Widget for Scrollable {
    fn draw_self(&self, size: Size, ctx: &mut DrawContext<'_>) {
        ctx.color(self.fg, self.bg)
            .fill(0, 0, size.width, size.height, self.fill);
    }

    fn is_container(&self) -> bool {
        true
    }

    fn inner_rect(&self, size: Size) -> Rect {
        Rect::new(self.offset.x, self.offset.y, size.width, size.height)
    }

    fn clips_children(&self) -> bool {
        false
    }
}
