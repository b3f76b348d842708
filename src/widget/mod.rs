//! Widgets - the retained tree the engine lays out and paints.
//!
//! # Architecture
//!
//! All widgets live in a [`WidgetTree`] arena and are addressed by
//! [`WidgetId`]. The arena owns geometry, parent/child links, layout
//! descriptors and the cached absolute bounding box of every node; the
//! boxed [`Widget`] value only carries what is specific to its kind (text,
//! colors, border) and knows how to paint itself.
//!
//! ```text
//! WidgetTree
//!   ├── nodes: Vec<Option<Node>>   (free slots reused)
//!   ├── roots: Vec<WidgetId>       (attached to the engine)
//!   └── InvalidationQueue          (fed by every geometry change)
//! ```
//!
//! # Example
//!
//! ```
//! use spark_grid::widget::{Group, Label, WidgetLayout, WidgetTree};
//! use spark_grid::Color;
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.insert(Group::new());
//! let label = tree.insert(Label::new("Hi", Color::WHITE, Color::BLACK));
//! tree.set_parent(label, Some(root)).unwrap();
//! tree.set_layout(label, WidgetLayout::new().with_horizontal_spacing_percent(50.0));
//!
//! tree.set_size(root, 20, 10);
//! tree.update_layout(root, 20, 10);
//! assert_eq!(tree.rect(label).map(|r| r.x), Some(9));
//! ```

mod boxed;
mod character;
mod group;
mod label;
mod layout;
mod scrollable;
mod split_panel;
mod tree;

pub use boxed::BoxContainer;
pub use character::Character;
pub use group::Group;
pub use label::Label;
pub use scrollable::Scrollable;
pub use split_panel::{Split, SplitDirection, SplitPanel, SplitPanelIds};
pub use tree::{WidgetMut, WidgetTree};

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::context::DrawContext;
use crate::types::{Rect, Size};

// =============================================================================
// WidgetId
// =============================================================================

/// Handle to a node in a [`WidgetTree`].
///
/// Slots are reused after [`WidgetTree::remove`], so an id must not be kept
/// past the removal of its widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) usize);

impl WidgetId {
    /// Arena slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// Widget trait
// =============================================================================

/// Downcasting support for widget kinds.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A widget kind.
///
/// The tree handles transforms, clipping and child traversal; implementors
/// only paint their own cells in local coordinates `(0, 0)..size`.
pub trait Widget: AsAny {
    /// Paint this widget. The cursor starts at the local origin.
    fn draw_self(&self, size: Size, ctx: &mut DrawContext<'_>);

    /// Whether the widget may hold children.
    fn is_container(&self) -> bool {
        false
    }

    /// Content area for children, relative to the widget origin.
    fn inner_rect(&self, size: Size) -> Rect {
        Rect::from_size(size)
    }

    /// Whether children are clipped to [`inner_rect`](Widget::inner_rect)
    /// rather than only to the widget bounds.
    fn clips_children(&self) -> bool {
        true
    }

    /// Natural size derived from content, applied on insert and after every
    /// [`WidgetTree::update`].
    fn measure(&self) -> Option<Size> {
        None
    }
}

// =============================================================================
// Layout descriptors
// =============================================================================

/// Layout hook called with the widget and its parent's inner size.
pub type LayoutFn = Rc<dyn Fn(&mut WidgetMut<'_>, i32, i32)>;

/// How a widget sizes and positions itself inside its parent.
///
/// Every field is optional; an absent field leaves the current value alone.
#[derive(Clone, Default)]
pub struct WidgetLayout {
    pub width_percent: Option<f32>,
    pub height_percent: Option<f32>,
    /// Share of the free horizontal space placed left of the widget.
    pub horizontal_spacing_percent: Option<f32>,
    /// Share of the free vertical space placed above the widget.
    pub vertical_spacing_percent: Option<f32>,
    pub custom_size: Option<LayoutFn>,
    pub custom_position: Option<LayoutFn>,
}

impl WidgetLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width_percent(mut self, percent: f32) -> Self {
        self.width_percent = Some(percent);
        self
    }

    pub fn with_height_percent(mut self, percent: f32) -> Self {
        self.height_percent = Some(percent);
        self
    }

    pub fn with_horizontal_spacing_percent(mut self, percent: f32) -> Self {
        self.horizontal_spacing_percent = Some(percent);
        self
    }

    pub fn with_vertical_spacing_percent(mut self, percent: f32) -> Self {
        self.vertical_spacing_percent = Some(percent);
        self
    }

    /// Center in both axes.
    pub fn centered() -> Self {
        Self::new()
            .with_horizontal_spacing_percent(50.0)
            .with_vertical_spacing_percent(50.0)
    }

    pub fn with_custom_size<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut WidgetMut<'_>, i32, i32) + 'static,
    {
        self.custom_size = Some(Rc::new(f));
        self
    }

    pub fn with_custom_position<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut WidgetMut<'_>, i32, i32) + 'static,
    {
        self.custom_position = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for WidgetLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetLayout")
            .field("width_percent", &self.width_percent)
            .field("height_percent", &self.height_percent)
            .field("horizontal_spacing_percent", &self.horizontal_spacing_percent)
            .field("vertical_spacing_percent", &self.vertical_spacing_percent)
            .field("custom_size", &self.custom_size.is_some())
            .field("custom_position", &self.custom_position.is_some())
            .finish()
    }
}

/// How a container positions its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildrenLayout {
    /// Children keep their own positions.
    #[default]
    Absolute,
    /// Stack top to bottom at `x = 0`.
    Vertical { spacing: i32 },
    /// Stack left to right at `y = 0`.
    Horizontal { spacing: i32 },
}
