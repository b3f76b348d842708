//! Plain container.

use crate::context::DrawContext;
use crate::types::Size;

use super::Widget;

/// A container that paints nothing itself. Useful as a root or to move a set
/// of widgets together.
#[derive(Debug, Clone, Copy, Default)]
pub struct Group;

impl Group {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Group {
    fn draw_self(&self, _size: Size, _ctx: &mut DrawContext<'_>) {}

    fn is_container(&self) -> bool {
        true
    }
}
