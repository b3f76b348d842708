//! Text label.

use crate::context::DrawContext;
use crate::types::{Color, Size};

use super::Widget;

/// One or more lines of text. Sized to its content: the width of the
/// longest line by the number of lines.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    pub fg: Color,
    pub bg: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, fg: Color, bg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
            bg,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn draw_self(&self, _size: Size, ctx: &mut DrawContext<'_>) {
        ctx.color(self.fg, self.bg);
        for (row, line) in self.text.split('\n').enumerate() {
            ctx.move_cursor_to(0, row as i32).text(line);
        }
    }

    fn measure(&self) -> Option<Size> {
        let mut size = Size::default();
        for line in self.text.split('\n') {
            size.width = size.width.max(line.chars().count() as i32);
            size.height += 1;
        }
        Some(size)
    }
}
