//! Two-panel split container.

use tracing::warn;

use crate::context::DrawContext;
use crate::types::Size;

use super::{BoxContainer, Widget, WidgetId, WidgetLayout, WidgetMut, WidgetTree};

/// Axis along which the two panels are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitDirection {
    /// First panel on the left, second on the right.
    #[default]
    Horizontal,
    /// First panel on top, second below.
    Vertical,
}

/// How the available extent is shared between the panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Split {
    /// Percentage given to the first panel.
    Percent(f32),
    /// Fixed extent for the first panel; the second gets the rest.
    First(i32),
    /// Fixed extent for the second panel; the first gets the rest.
    Second(i32),
}

impl Split {
    /// Extents of the first and second panel along an axis of `total` cells.
    pub fn extents(self, total: i32) -> (i32, i32) {
        let total = total.max(0);
        match self {
            Split::Percent(percent) => {
                let first = (f64::from(total) * f64::from(percent) / 100.0).floor() as i32;
                let second = (f64::from(total) * f64::from(100.0 - percent) / 100.0).ceil() as i32;
                (first, second)
            }
            Split::First(n) => {
                let first = n.clamp(0, total);
                (first, total - first)
            }
            Split::Second(n) => {
                let second = n.clamp(0, total);
                (total - second, second)
            }
        }
    }
}

impl Default for Split {
    fn default() -> Self {
        Split::Percent(50.0)
    }
}

/// Ids created by [`SplitPanel::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPanelIds {
    pub panel: WidgetId,
    pub first: WidgetId,
    pub second: WidgetId,
}

/// A container holding two bordered panels that share its area.
///
/// The panels are ordinary [`BoxContainer`] children whose layout hooks read
/// the split settings from this widget, so changing the split through
/// [`WidgetTree::update`] re-lays them out on the next draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitPanel {
    pub direction: SplitDirection,
    pub split: Split,
}

#[derive(Clone, Copy)]
enum Side {
    First,
    Second,
}

impl SplitPanel {
    pub fn new(direction: SplitDirection, split: Split) -> Self {
        Self { direction, split }
    }

    /// Insert the split panel and its two bordered panels into `tree`.
    pub fn create(tree: &mut WidgetTree, panel: SplitPanel) -> SplitPanelIds {
        let id = tree.insert(panel);
        let first = tree.insert(BoxContainer::new(1));
        let second = tree.insert(BoxContainer::new(1));

        for (child, side) in [(first, Side::First), (second, Side::Second)] {
            if let Err(err) = tree.set_parent(child, Some(id)) {
                warn!(target: "spark_grid::widget", %err, "split panel child not attached");
                continue;
            }
            tree.set_layout(child, panel_layout(side));
        }

        SplitPanelIds { panel: id, first, second }
    }
}

fn panel_extent(w: &WidgetMut<'_>, side: Side, parent_width: i32, parent_height: i32) -> Option<(SplitDirection, i32)> {
    let panel = w.parent_widget::<SplitPanel>()?;
    let total = match panel.direction {
        SplitDirection::Horizontal => parent_width,
        SplitDirection::Vertical => parent_height,
    };
    let (first, second) = panel.split.extents(total);
    let extent = match side {
        Side::First => first,
        Side::Second => second,
    };
    Some((panel.direction, extent))
}

fn panel_layout(side: Side) -> WidgetLayout {
    WidgetLayout::new()
        .with_custom_size(move |w, pw, ph| {
            let Some((direction, extent)) = panel_extent(w, side, pw, ph) else {
                return;
            };
            match direction {
                SplitDirection::Horizontal => w.set_size(extent, ph),
                SplitDirection::Vertical => w.set_size(pw, extent),
            }
        })
        .with_custom_position(move |w, pw, ph| {
            let Some(direction) = w.parent_widget::<SplitPanel>().map(|p| p.direction) else {
                return;
            };
            match (side, direction) {
                (Side::First, _) => w.set_position(0, 0),
                (Side::Second, SplitDirection::Horizontal) => {
                    let x = pw - w.width();
                    w.set_position(x, 0);
                }
                (Side::Second, SplitDirection::Vertical) => {
                    let y = ph - w.height();
                    w.set_position(0, y);
                }
            }
        })
}

impl Widget for SplitPanel {
    fn draw_self(&self, _size: Size, _ctx: &mut DrawContext<'_>) {}

    fn is_container(&self) -> bool {
        true
    }
}
