//! Filled box with optional border and title.

use crate::context::DrawContext;
use crate::types::{Color, Glyph, Rect, Size};

use super::Widget;

/// A container that fills its area and optionally frames it with a
/// double-line border. Children are inset by `border` cells on every side.
#[derive(Debug, Clone)]
pub struct BoxContainer {
    pub border: i32,
    pub border_fg: Color,
    pub border_bg: Color,
    pub fg: Color,
    pub bg: Color,
    pub fill: Glyph,
    pub title: String,
    pub title_fg: Color,
    pub title_bg: Color,
}

impl BoxContainer {
    /// White on black, filled with spaces.
    pub fn new(border: i32) -> Self {
        Self {
            border: border.max(0),
            border_fg: Color::WHITE,
            border_bg: Color::BLACK,
            fg: Color::WHITE,
            bg: Color::BLACK,
            fill: Glyph::Char(' '),
            title: String::new(),
            title_fg: Color::WHITE,
            title_bg: Color::BLACK,
        }
    }

    pub fn with_border_colors(mut self, fg: Color, bg: Color) -> Self {
        self.border_fg = fg;
        self.border_bg = bg;
        self
    }

    pub fn with_colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<Glyph>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>, fg: Color, bg: Color) -> Self {
        self.title = title.into();
        self.title_fg = fg;
        self.title_bg = bg;
        self
    }
}

impl Default for BoxContainer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Widget for BoxContainer {
    fn draw_self(&self, size: Size, ctx: &mut DrawContext<'_>) {
        if self.border > 0 {
            ctx.color(self.fg, self.bg)
                .fill(1, 1, size.width - 2, size.height - 2, self.fill);
            ctx.color(self.border_fg, self.border_bg)
                .border(0, 0, size.width, size.height);
        } else {
            ctx.color(self.fg, self.bg)
                .fill(0, 0, size.width, size.height, self.fill);
        }

        if !self.title.is_empty() {
            let len = self.title.chars().count() as i32;
            ctx.move_cursor_to((size.width - len).div_euclid(2), 0)
                .color(self.title_fg, self.title_bg)
                .text(&self.title);
        }
    }

    fn is_container(&self) -> bool {
        true
    }

    fn inner_rect(&self, size: Size) -> Rect {
        let b = self.border;
        Rect::new(b, b, size.width - b * 2, size.height - b * 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect_insets_border() {
        let boxed = BoxContainer::new(1);
        assert_eq!(boxed.inner_rect(Size::new(10, 5)), Rect::new(1, 1, 8, 3));

        let plain = BoxContainer::new(0);
        assert_eq!(plain.inner_rect(Size::new(10, 5)), Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_negative_border_clamped() {
        assert_eq!(BoxContainer::new(-3).border, 0);
    }
}
