//! Widget arena - node storage, parent links and invalidation.
//!
//! Every structural or geometric change funnels into [`WidgetTree::invalidate`],
//! which feeds the tree's [`InvalidationQueue`] for nodes attached to the
//! engine (reachable from a root).

use std::cell::Cell;

use tracing::trace;

use super::{AsAny, ChildrenLayout, Widget, WidgetId, WidgetLayout};
use crate::context::DrawContext;
use crate::error::TreeError;
use crate::invalidation::InvalidationQueue;
use crate::types::{Rect, Size};

// =============================================================================
// Node
// =============================================================================

struct Node {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    attached: bool,
    layout: WidgetLayout,
    children_layout: ChildrenLayout,
    bbox: Cell<Rect>,
    bbox_dirty: Cell<bool>,
    last_invalidated: Rect,
    widget: Box<dyn Widget>,
}

impl Node {
    fn new(widget: Box<dyn Widget>) -> Self {
        let size = widget.measure().unwrap_or_default();
        Self {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
            parent: None,
            children: Vec::new(),
            attached: false,
            layout: WidgetLayout::default(),
            children_layout: ChildrenLayout::default(),
            bbox: Cell::new(Rect::default()),
            bbox_dirty: Cell::new(true),
            last_invalidated: Rect::default(),
            widget,
        }
    }

    #[inline]
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

fn replace(slot: &mut i32, value: i32) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

// =============================================================================
// WidgetTree
// =============================================================================

/// Arena owning every widget and the pending invalidations.
pub struct WidgetTree {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    roots: Vec<WidgetId>,
    queue: InvalidationQueue,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            roots: Vec::new(),
            queue: InvalidationQueue::new(),
        }
    }

    #[inline]
    fn node(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    fn node_mut(&mut self, id: WidgetId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn require(&self, id: WidgetId) -> Result<&Node, TreeError> {
        self.node(id).ok_or(TreeError::MissingWidget(id))
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Store a widget, detached. Its initial size comes from
    /// [`Widget::measure`].
    pub fn insert<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.insert_boxed(Box::new(widget))
    }

    pub fn insert_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let node = Node::new(widget);
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        WidgetId(index)
    }

    /// Remove a widget and its whole subtree, invalidating the area it covered.
    pub fn remove(&mut self, id: WidgetId) -> Result<(), TreeError> {
        let parent = self.require(id)?.parent;
        self.invalidate(id);

        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|c| *c != id);
        }
        self.roots.retain(|r| *r != id);
        self.release(id);
        Ok(())
    }

    fn release(&mut self, id: WidgetId) {
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        for child in node.children {
            self.release(child);
        }
        self.free.push(id.0);
        trace!(target: "spark_grid::tree", index = id.0, "released");
    }

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Local geometry (relative to the parent's content area).
    pub fn rect(&self, id: WidgetId) -> Option<Rect> {
        self.node(id).map(|n| Rect::new(n.x, n.y, n.width, n.height))
    }

    pub fn size(&self, id: WidgetId) -> Option<Size> {
        self.node(id).map(Node::size)
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Widgets attached directly to the engine, back to front.
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    /// Whether the widget is reachable from a root.
    pub fn is_attached(&self, id: WidgetId) -> bool {
        self.node(id).is_some_and(|n| n.attached)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.node(id).map(|n| n.widget.as_ref())
    }

    /// Typed access to a widget kind.
    pub fn get<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        let widget = self.node(id)?.widget.as_ref();
        AsAny::as_any(widget).downcast_ref::<T>()
    }

    /// Content area of a widget, relative to its origin.
    pub fn inner_rect(&self, id: WidgetId) -> Option<Rect> {
        self.node(id).map(|n| n.widget.inner_rect(n.size()))
    }

    pub fn layout(&self, id: WidgetId) -> Option<&WidgetLayout> {
        self.node(id).map(|n| &n.layout)
    }

    pub fn children_layout(&self, id: WidgetId) -> Option<ChildrenLayout> {
        self.node(id).map(|n| n.children_layout)
    }

    /// Absolute screen rect of a widget.
    ///
    /// Cached per node; the cache is dropped whenever the node or one of its
    /// ancestors moves, resizes or is reparented.
    pub fn bounding_box(&self, id: WidgetId) -> Rect {
        let Some(node) = self.node(id) else {
            return Rect::default();
        };
        if !node.bbox_dirty.get() {
            return node.bbox.get();
        }

        let mut rect = Rect::new(node.x, node.y, node.width, node.height);
        if let Some(parent_id) = node.parent {
            if let Some(parent) = self.node(parent_id) {
                let origin = self.bounding_box(parent_id);
                let inner = parent.widget.inner_rect(parent.size());
                rect = rect.offset(origin.x + inner.x, origin.y + inner.y);
            }
        }

        node.bbox.set(rect);
        node.bbox_dirty.set(false);
        rect
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Mutable handle for geometry edits.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<WidgetMut<'_>> {
        if self.contains(id) {
            Some(WidgetMut { tree: self, id })
        } else {
            None
        }
    }

    /// Mutate a widget's content.
    ///
    /// The widget is re-measured and invalidated afterwards. Returns `None`
    /// if the id is unknown or the widget is not a `T`.
    pub fn update<T: Widget, R>(&mut self, id: WidgetId, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let node = self.node_mut(id)?;
        let widget = AsAny::as_any_mut(node.widget.as_mut()).downcast_mut::<T>()?;
        let out = f(widget);

        if let Some(size) = node.widget.measure() {
            node.width = size.width;
            node.height = size.height;
        }
        self.mark_dirty(id);
        self.invalidate(id);
        self.sync_descendants(id);
        Some(out)
    }

    fn set_geometry(&mut self, id: WidgetId, apply: impl FnOnce(&mut Node) -> bool) {
        let changed = self.node_mut(id).is_some_and(apply);
        if changed {
            self.mark_dirty(id);
            self.invalidate(id);
            self.sync_descendants(id);
        }
    }

    pub fn set_x(&mut self, id: WidgetId, x: i32) {
        self.set_geometry(id, |n| replace(&mut n.x, x));
    }

    pub fn set_y(&mut self, id: WidgetId, y: i32) {
        self.set_geometry(id, |n| replace(&mut n.y, y));
    }

    pub fn set_width(&mut self, id: WidgetId, width: i32) {
        self.set_geometry(id, |n| replace(&mut n.width, width));
    }

    pub fn set_height(&mut self, id: WidgetId, height: i32) {
        self.set_geometry(id, |n| replace(&mut n.height, height));
    }

    pub fn set_position(&mut self, id: WidgetId, x: i32, y: i32) {
        self.set_geometry(id, |n| replace(&mut n.x, x) | replace(&mut n.y, y));
    }

    pub fn set_size(&mut self, id: WidgetId, width: i32, height: i32) {
        self.set_geometry(id, |n| replace(&mut n.width, width) | replace(&mut n.height, height));
    }

    /// Replace the layout descriptor. Takes effect on the next layout pass.
    pub fn set_layout(&mut self, id: WidgetId, layout: WidgetLayout) {
        if let Some(node) = self.node_mut(id) {
            node.layout = layout;
            self.invalidate(id);
        }
    }

    pub fn set_children_layout(&mut self, id: WidgetId, layout: ChildrenLayout) {
        if let Some(node) = self.node_mut(id) {
            if node.children_layout != layout {
                node.children_layout = layout;
                self.invalidate(id);
            }
        }
    }

    /// Move a widget under `parent`, or detach it with `None`.
    ///
    /// The area the widget covered before the move and the area it covers
    /// after are both invalidated.
    pub fn set_parent(&mut self, id: WidgetId, parent: Option<WidgetId>) -> Result<(), TreeError> {
        let old = self.require(id)?.parent;

        if let Some(parent_id) = parent {
            if !self.require(parent_id)?.widget.is_container() {
                return Err(TreeError::NotAContainer(parent_id));
            }
            let mut cursor = Some(parent_id);
            while let Some(ancestor) = cursor {
                if ancestor == id {
                    return Err(TreeError::Cycle { child: id, parent: parent_id });
                }
                cursor = self.parent(ancestor);
            }
        }
        if old == parent && !self.roots.contains(&id) {
            return Ok(());
        }

        self.invalidate(id);

        if let Some(old_parent) = old.and_then(|p| self.node_mut(p)) {
            old_parent.children.retain(|c| *c != id);
        }
        self.roots.retain(|r| *r != id);

        let attached = match parent {
            Some(parent_id) => match self.node_mut(parent_id) {
                Some(parent_node) => {
                    parent_node.children.push(id);
                    parent_node.attached
                }
                None => false,
            },
            None => false,
        };
        if let Some(node) = self.node_mut(id) {
            node.parent = parent;
        }

        self.mark_dirty(id);
        self.set_attached(id, attached);
        self.invalidate(id);
        self.sync_descendants(id);
        trace!(target: "spark_grid::tree", index = id.0, ?parent, "reparented");
        Ok(())
    }

    /// Attach a widget directly to the engine.
    ///
    /// A widget with a parent is detached from it first.
    pub fn add_root(&mut self, id: WidgetId) -> Result<(), TreeError> {
        let parent = self.require(id)?.parent;
        if parent.is_some() {
            self.set_parent(id, None)?;
        }
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.mark_dirty(id);
        self.set_attached(id, true);
        Ok(())
    }

    /// Detach a root from the engine, invalidating the area it covered.
    pub fn remove_root(&mut self, id: WidgetId) -> Result<(), TreeError> {
        self.require(id)?;
        if !self.roots.contains(&id) {
            return Ok(());
        }
        self.invalidate(id);
        self.roots.retain(|r| *r != id);
        self.set_attached(id, false);
        Ok(())
    }

    /// Propagate the engine attachment flag through a subtree.
    ///
    /// Nodes that become attached take their current box as the last
    /// painted area, so their first move also repaints where they were.
    fn set_attached(&mut self, id: WidgetId, attached: bool) {
        let bbox = self.bounding_box(id);
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.attached = attached;
        if attached {
            node.last_invalidated = bbox;
        }
        let children = node.children.clone();
        for child in children {
            self.set_attached(child, attached);
        }
    }

    /// Re-anchor the remembered area of every descendant of `id` after `id`
    /// moved or changed its content area. The ancestor's own invalidation
    /// covers the cells they vacated.
    fn sync_descendants(&mut self, id: WidgetId) {
        let children = self.children(id).to_vec();
        for child in children {
            let bbox = self.bounding_box(child);
            if let Some(node) = self.node_mut(child) {
                node.last_invalidated = bbox;
            }
            self.sync_descendants(child);
        }
    }

    fn mark_dirty(&self, id: WidgetId) {
        if let Some(node) = self.node(id) {
            node.bbox_dirty.set(true);
            for &child in &node.children {
                self.mark_dirty(child);
            }
        }
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Queue the widget's current area, and its previously queued area if
    /// that differs.
    ///
    /// The current box is always remembered; only widgets attached to the
    /// engine feed the queue.
    pub fn invalidate(&mut self, id: WidgetId) {
        let bbox = self.bounding_box(id);
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::as_mut) else {
            return;
        };
        let last = std::mem::replace(&mut node.last_invalidated, bbox);
        if !node.attached {
            return;
        }

        if !last.is_empty() && last != bbox {
            self.queue.invalidate_rect(last);
        }
        if !bbox.is_empty() {
            self.queue.invalidate_rect(bbox);
        }
    }

    /// Queue an arbitrary screen region.
    pub fn invalidate_rect(&mut self, rect: Rect) {
        self.queue.invalidate_rect(rect);
    }

    pub fn invalidations(&self) -> &InvalidationQueue {
        &self.queue
    }

    pub fn take_invalidations(&mut self) -> Vec<Rect> {
        self.queue.take()
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Paint a widget and its subtree.
    pub fn draw(&self, id: WidgetId, ctx: &mut DrawContext<'_>) {
        let Some(node) = self.node(id) else {
            return;
        };
        if !ctx.is_visible(node.x, node.y, node.width, node.height) {
            return;
        }

        let size = node.size();
        ctx.push_transform(node.x, node.y);
        ctx.push_clip(0, 0, size.width, size.height);
        ctx.move_cursor_to(0, 0);
        node.widget.draw_self(size, ctx);

        if node.widget.is_container() && !node.children.is_empty() {
            let inner = node.widget.inner_rect(size);
            let offset = inner.x != 0 || inner.y != 0;
            let clip = node.widget.clips_children() && inner != Rect::from_size(size);

            if offset {
                ctx.push_transform(inner.x, inner.y);
            }
            if clip {
                ctx.push_clip(0, 0, inner.width, inner.height);
            }
            for &child in &node.children {
                self.draw(child, ctx);
            }
            if clip {
                ctx.pop_clip();
            }
            if offset {
                ctx.pop_transform();
            }
        }

        ctx.pop_clip();
        ctx.pop_transform();
    }

    /// Paint every root, back to front.
    pub fn draw_roots(&self, ctx: &mut DrawContext<'_>) {
        for &root in &self.roots {
            self.draw(root, ctx);
        }
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// WidgetMut
// =============================================================================

/// A widget handle with mutable access to the tree, passed to layout hooks.
pub struct WidgetMut<'a> {
    pub(super) tree: &'a mut WidgetTree,
    pub(super) id: WidgetId,
}

impl WidgetMut<'_> {
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn tree(&self) -> &WidgetTree {
        &*self.tree
    }

    pub fn rect(&self) -> Rect {
        self.tree.rect(self.id).unwrap_or_default()
    }

    pub fn x(&self) -> i32 {
        self.rect().x
    }

    pub fn y(&self) -> i32 {
        self.rect().y
    }

    pub fn width(&self) -> i32 {
        self.rect().width
    }

    pub fn height(&self) -> i32 {
        self.rect().height
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.tree.parent(self.id)
    }

    /// The widget kind of this node.
    pub fn get<T: Widget>(&self) -> Option<&T> {
        self.tree.get(self.id)
    }

    /// The widget kind of this node's parent.
    pub fn parent_widget<T: Widget>(&self) -> Option<&T> {
        self.tree.get(self.parent()?)
    }

    pub fn set_x(&mut self, x: i32) {
        self.tree.set_x(self.id, x);
    }

    pub fn set_y(&mut self, y: i32) {
        self.tree.set_y(self.id, y);
    }

    pub fn set_width(&mut self, width: i32) {
        self.tree.set_width(self.id, width);
    }

    pub fn set_height(&mut self, height: i32) {
        self.tree.set_height(self.id, height);
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.tree.set_position(self.id, x, y);
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.tree.set_size(self.id, width, height);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;
    use crate::widget::{BoxContainer, Group, Label};

    fn attached_group(tree: &mut WidgetTree, width: i32, height: i32) -> WidgetId {
        let root = tree.insert(Group::new());
        tree.set_size(root, width, height);
        tree.add_root(root).unwrap();
        root
    }

    #[test]
    fn test_insert_measures_widget() {
        let mut tree = WidgetTree::new();
        let label = tree.insert(Label::new("hello", Color::WHITE, Color::BLACK));
        assert_eq!(tree.size(label), Some(Size::new(5, 1)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_releases_subtree_and_reuses_slots() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Group::new());
        let a = tree.insert(Group::new());
        let b = tree.insert(Label::new("b", Color::WHITE, Color::BLACK));
        tree.set_parent(a, Some(root)).unwrap();
        tree.set_parent(b, Some(a)).unwrap();

        tree.remove(a).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.children(root).is_empty());
        assert!(!tree.contains(b));

        let c = tree.insert(Group::new());
        assert!(c.index() == a.index() || c.index() == b.index());
    }

    #[test]
    fn test_remove_missing_widget() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Group::new());
        tree.remove(id).unwrap();
        assert_eq!(tree.remove(id), Err(TreeError::MissingWidget(id)));
    }

    #[test]
    fn test_set_parent_rejects_leaf() {
        let mut tree = WidgetTree::new();
        let leaf = tree.insert(Label::new("x", Color::WHITE, Color::BLACK));
        let other = tree.insert(Group::new());
        assert_eq!(tree.set_parent(other, Some(leaf)), Err(TreeError::NotAContainer(leaf)));
    }

    #[test]
    fn test_set_parent_rejects_cycle() {
        let mut tree = WidgetTree::new();
        let a = tree.insert(Group::new());
        let b = tree.insert(Group::new());
        tree.set_parent(b, Some(a)).unwrap();
        assert_eq!(
            tree.set_parent(a, Some(b)),
            Err(TreeError::Cycle { child: a, parent: b })
        );
        assert_eq!(
            tree.set_parent(a, Some(a)),
            Err(TreeError::Cycle { child: a, parent: a })
        );
    }

    #[test]
    fn test_attachment_propagates() {
        let mut tree = WidgetTree::new();
        let root = attached_group(&mut tree, 10, 10);
        let mid = tree.insert(Group::new());
        let leaf = tree.insert(Label::new("x", Color::WHITE, Color::BLACK));
        tree.set_parent(leaf, Some(mid)).unwrap();
        assert!(!tree.is_attached(leaf));

        tree.set_parent(mid, Some(root)).unwrap();
        assert!(tree.is_attached(mid));
        assert!(tree.is_attached(leaf));

        tree.set_parent(mid, None).unwrap();
        assert!(!tree.is_attached(leaf));
    }

    #[test]
    fn test_detached_changes_do_not_invalidate() {
        let mut tree = WidgetTree::new();
        let label = tree.insert(Label::new("x", Color::WHITE, Color::BLACK));
        tree.set_x(label, 4);
        tree.set_size(label, 3, 3);
        assert!(tree.invalidations().is_empty());
    }

    #[test]
    fn test_setter_noop_on_same_value() {
        let mut tree = WidgetTree::new();
        let root = attached_group(&mut tree, 10, 10);
        tree.take_invalidations();
        tree.set_width(root, 10);
        tree.set_position(root, 0, 0);
        assert!(tree.invalidations().is_empty());
    }

    #[test]
    fn test_move_invalidates_old_and_new_box() {
        let mut tree = WidgetTree::new();
        let root = attached_group(&mut tree, 80, 24);
        let label = tree.insert(Label::new("ab", Color::WHITE, Color::BLACK));
        tree.set_parent(label, Some(root)).unwrap();
        tree.take_invalidations();

        tree.set_x(label, 40);
        assert_eq!(
            tree.invalidations().rects(),
            &[Rect::new(0, 0, 2, 1), Rect::new(40, 0, 2, 1)]
        );
    }

    #[test]
    fn test_child_attached_with_parent_invalidates_old_box() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Group::new());
        tree.set_size(root, 20, 5);
        let label = tree.insert(Label::new("x", Color::WHITE, Color::BLACK));
        tree.set_parent(label, Some(root)).unwrap();
        tree.add_root(root).unwrap();
        tree.take_invalidations();

        tree.set_x(label, 10);
        assert_eq!(
            tree.invalidations().rects(),
            &[Rect::new(0, 0, 1, 1), Rect::new(10, 0, 1, 1)]
        );
    }

    #[test]
    fn test_child_move_after_parent_move() {
        let mut tree = WidgetTree::new();
        let root = attached_group(&mut tree, 40, 5);
        let group = tree.insert(Group::new());
        tree.set_size(group, 5, 1);
        tree.set_parent(group, Some(root)).unwrap();
        let label = tree.insert(Label::new("x", Color::WHITE, Color::BLACK));
        tree.set_parent(label, Some(group)).unwrap();

        tree.set_x(group, 20);
        tree.take_invalidations();

        tree.set_x(label, 3);
        assert_eq!(
            tree.invalidations().rects(),
            &[Rect::new(20, 0, 1, 1), Rect::new(23, 0, 1, 1)]
        );
    }

    #[test]
    fn test_bounding_box_accumulates_insets() {
        let mut tree = WidgetTree::new();
        let outer = tree.insert(BoxContainer::new(1));
        tree.set_position(outer, 5, 5);
        tree.set_size(outer, 20, 20);
        let inner = tree.insert(BoxContainer::new(1));
        tree.set_parent(inner, Some(outer)).unwrap();
        tree.set_position(inner, 2, 3);
        tree.set_size(inner, 6, 6);
        let label = tree.insert(Label::new("x", Color::WHITE, Color::BLACK));
        tree.set_parent(label, Some(inner)).unwrap();

        assert_eq!(tree.bounding_box(label), Rect::new(9, 10, 1, 1));

        tree.set_x(outer, 0);
        assert_eq!(tree.bounding_box(label), Rect::new(4, 10, 1, 1));
    }

    #[test]
    fn test_update_remeasures_and_invalidates() {
        let mut tree = WidgetTree::new();
        let root = attached_group(&mut tree, 80, 24);
        let label = tree.insert(Label::new("ab", Color::WHITE, Color::BLACK));
        tree.set_parent(label, Some(root)).unwrap();
        tree.take_invalidations();

        let updated = tree.update::<Label, _>(label, |l| l.set_text("abcd\nxy"));
        assert!(updated.is_some());
        assert_eq!(tree.size(label), Some(Size::new(4, 2)));
        assert_eq!(tree.invalidations().rects(), &[Rect::new(0, 0, 4, 2)]);

        assert!(tree.update::<Group, _>(label, |_| ()).is_none());
    }

    #[test]
    fn test_remove_root_invalidates_area() {
        let mut tree = WidgetTree::new();
        let root = attached_group(&mut tree, 10, 4);
        tree.invalidate(root);
        tree.take_invalidations();

        tree.remove_root(root).unwrap();
        assert!(tree.roots().is_empty());
        assert!(!tree.is_attached(root));
        assert_eq!(tree.invalidations().rects(), &[Rect::new(0, 0, 10, 4)]);
    }
}
