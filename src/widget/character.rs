//! Single-cell glyph widget.

use crate::context::DrawContext;
use crate::types::{Color, Glyph, Size};

use super::Widget;

/// A 1x1 widget showing one character or special glyph.
#[derive(Debug, Clone, Copy)]
pub struct Character {
    pub glyph: Glyph,
    pub fg: Color,
    pub bg: Color,
}

impl Character {
    pub fn new(glyph: impl Into<Glyph>, fg: Color, bg: Color) -> Self {
        Self {
            glyph: glyph.into(),
            fg,
            bg,
        }
    }
}

impl Widget for Character {
    fn draw_self(&self, _size: Size, ctx: &mut DrawContext<'_>) {
        ctx.color(self.fg, self.bg);
        match self.glyph {
            Glyph::Char(ch) => ctx.char(ch),
            Glyph::Special(special) => ctx.special_char(special),
        };
    }

    fn measure(&self) -> Option<Size> {
        Some(Size::new(1, 1))
    }
}
