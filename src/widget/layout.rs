//! Layout pass.
//!
//! Top-down and single pass: a widget resolves its own size and position
//! against its parent's content size, then lays out its children against its
//! own content size. Resolution order per widget:
//!
//! 1. `height_percent` (rounded up)
//! 2. `width_percent` (rounded up)
//! 3. `custom_size`
//! 4. `horizontal_spacing_percent` of the free width (rounded down)
//! 5. `vertical_spacing_percent` of the free height (rounded down)
//! 6. `custom_position`
//!
//! Stacked children layouts then overwrite child positions.

use tracing::trace;

use super::{ChildrenLayout, WidgetId, WidgetMut, WidgetTree};
use crate::types::Size;

#[inline]
fn percent_ceil(total: i32, percent: f32) -> i32 {
    (f64::from(total) * f64::from(percent) / 100.0).ceil() as i32
}

#[inline]
fn percent_floor(total: i32, percent: f32) -> i32 {
    (f64::from(total) * f64::from(percent) / 100.0).floor() as i32
}

impl WidgetTree {
    /// Lay out a widget and its subtree inside a parent content area of
    /// `parent_width` x `parent_height`.
    pub fn update_layout(&mut self, id: WidgetId, parent_width: i32, parent_height: i32) {
        let Some(layout) = self.layout(id).cloned() else {
            return;
        };

        if let Some(percent) = layout.height_percent {
            self.set_height(id, percent_ceil(parent_height, percent));
        }
        if let Some(percent) = layout.width_percent {
            self.set_width(id, percent_ceil(parent_width, percent));
        }
        if let Some(custom_size) = &layout.custom_size {
            custom_size(&mut WidgetMut { tree: self, id }, parent_width, parent_height);
        }

        let size = self.size(id).unwrap_or_default();
        if let Some(percent) = layout.horizontal_spacing_percent {
            self.set_x(id, percent_floor(parent_width - size.width, percent));
        }
        if let Some(percent) = layout.vertical_spacing_percent {
            self.set_y(id, percent_floor(parent_height - size.height, percent));
        }
        if let Some(custom_position) = &layout.custom_position {
            custom_position(&mut WidgetMut { tree: self, id }, parent_width, parent_height);
        }

        self.update_children_layout(id);
    }

    fn update_children_layout(&mut self, id: WidgetId) {
        let Some(widget) = self.widget(id) else {
            return;
        };
        if !widget.is_container() {
            return;
        }
        let Some(inner) = self.inner_rect(id) else {
            return;
        };
        let children = self.children(id).to_vec();
        let mode = self.children_layout(id).unwrap_or_default();

        let mut offset = 0;
        for child in children {
            self.update_layout(child, inner.width, inner.height);
            match mode {
                ChildrenLayout::Absolute => {}
                ChildrenLayout::Vertical { spacing } => {
                    self.set_position(child, 0, offset);
                    offset += self.size(child).map_or(0, |s| s.height) + spacing;
                }
                ChildrenLayout::Horizontal { spacing } => {
                    self.set_position(child, offset, 0);
                    offset += self.size(child).map_or(0, |s| s.width) + spacing;
                }
            }
        }
    }

    /// Lay out every root against the screen size.
    pub fn update_layout_roots(&mut self, screen: Size) {
        trace!(target: "spark_grid::layout", roots = self.roots().len(), ?screen, "layout pass");
        let roots = self.roots().to_vec();
        for root in roots {
            self.update_layout(root, screen.width, screen.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Rect};
    use crate::widget::{BoxContainer, Group, Label, WidgetLayout};

    fn label(tree: &mut WidgetTree, text: &str) -> WidgetId {
        tree.insert(Label::new(text, Color::WHITE, Color::BLACK))
    }

    #[test]
    fn test_horizontal_spacing_centers_label() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Group::new());
        tree.set_size(root, 20, 10);
        let hi = label(&mut tree, "Hi");
        tree.set_parent(hi, Some(root)).unwrap();
        tree.set_layout(hi, WidgetLayout::new().with_horizontal_spacing_percent(50.0));

        tree.update_layout(root, 20, 10);
        assert_eq!(tree.rect(hi), Some(Rect::new(9, 0, 2, 1)));
    }

    #[test]
    fn test_percent_sizes_round_up() {
        let mut tree = WidgetTree::new();
        let group = tree.insert(Group::new());
        tree.set_layout(
            group,
            WidgetLayout::new().with_width_percent(50.0).with_height_percent(33.0),
        );
        tree.update_layout(group, 9, 10);
        assert_eq!(tree.size(group), Some(Size::new(5, 4)));
    }

    #[test]
    fn test_bordered_child_percent() {
        let mut tree = WidgetTree::new();
        let boxed = tree.insert(BoxContainer::new(1));
        tree.set_size(boxed, 10, 5);
        let child = tree.insert(Group::new());
        tree.set_parent(child, Some(boxed)).unwrap();
        tree.set_layout(child, WidgetLayout::new().with_width_percent(50.0));

        tree.update_layout(boxed, 80, 24);
        assert_eq!(tree.inner_rect(boxed), Some(Rect::new(1, 1, 8, 3)));
        assert_eq!(tree.size(child).map(|s| s.width), Some(4));
    }

    #[test]
    fn test_vertical_children_layout() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Group::new());
        tree.set_size(root, 20, 20);
        tree.set_children_layout(root, ChildrenLayout::Vertical { spacing: 1 });
        let ids: Vec<_> = (0..3).map(|_| label(&mut tree, "x")).collect();
        for &id in &ids {
            tree.set_parent(id, Some(root)).unwrap();
            tree.set_x(id, 7);
        }

        tree.update_layout(root, 20, 20);
        let ys: Vec<_> = ids.iter().map(|&id| tree.rect(id).unwrap().y).collect();
        assert_eq!(ys, vec![0, 2, 4]);
        assert!(ids.iter().all(|&id| tree.rect(id).unwrap().x == 0));
    }

    #[test]
    fn test_horizontal_children_layout_overrides_custom_position() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Group::new());
        tree.set_children_layout(root, ChildrenLayout::Horizontal { spacing: 0 });
        let a = label(&mut tree, "abc");
        let b = label(&mut tree, "de");
        tree.set_layout(b, WidgetLayout::new().with_custom_position(|w, _, _| w.set_position(50, 50)));
        tree.set_parent(a, Some(root)).unwrap();
        tree.set_parent(b, Some(root)).unwrap();

        tree.update_layout(root, 20, 20);
        assert_eq!(tree.rect(b), Some(Rect::new(3, 0, 2, 1)));
    }

    #[test]
    fn test_custom_size_runs_before_spacing() {
        let mut tree = WidgetTree::new();
        let group = tree.insert(Group::new());
        tree.set_layout(
            group,
            WidgetLayout::new()
                .with_custom_size(|w, pw, _| w.set_size(pw / 2, 1))
                .with_vertical_spacing_percent(100.0),
        );
        tree.update_layout(group, 10, 6);
        assert_eq!(tree.rect(group), Some(Rect::new(0, 5, 5, 1)));
    }
}
