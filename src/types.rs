//! Core types for spark-grid.
//!
//! Geometry, palette and glyph types shared by every layer: the encoder
//! understands `Color` and `SpecialChar`, the draw context clips with `Rect`,
//! and widgets are positioned with plain `i32` coordinates.
//!
//! All coordinates are signed. Negative widths show up transiently while
//! clips are shrunk and are treated as empty regions by every consumer.

// =============================================================================
// Point / Size
// =============================================================================

/// A 2D offset in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle of cells.
///
/// A zero-area rect is a valid value and is used as the "nothing yet"
/// sentinel (e.g. a widget that was never invalidated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rect anchored at the origin covering `size`.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn x1(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn y1(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when the rect covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a cell is inside this rect.
    #[inline]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x1() && y >= self.y && y < self.y1()
    }

    /// Closed-interval overlap test.
    ///
    /// Two rects intersect unless one lies strictly to the left, right, above
    /// or below the other, so rects that merely touch count as intersecting.
    #[inline]
    pub const fn intersects(&self, other: &Rect) -> bool {
        !(self.x1() < other.x
            || self.y1() < other.y
            || self.x > other.x1()
            || self.y > other.y1())
    }

    /// Smallest rect containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.x1().max(other.x1());
        let y1 = self.y1().max(other.y1());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Overlapping region of two rects.
    ///
    /// The result is not normalized: disjoint inputs produce a rect with a
    /// zero or negative extent, which `is_empty` reports as empty.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.x1().min(other.x1());
        let y1 = self.y1().min(other.y1());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Translate by an offset.
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

// =============================================================================
// Color
// =============================================================================

/// A palette color.
///
/// Indices 0-15 are the classic ANSI colors (8 normal + 8 bright) and are
/// emitted with the short SGR codes. Indices 16-255 address the extended
/// 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const RED: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const BLUE: Self = Self(4);
    pub const MAGENTA: Self = Self(5);
    pub const CYAN: Self = Self(6);
    pub const WHITE: Self = Self(7);
    pub const BRIGHT_BLACK: Self = Self(8);
    pub const BRIGHT_RED: Self = Self(9);
    pub const BRIGHT_GREEN: Self = Self(10);
    pub const BRIGHT_YELLOW: Self = Self(11);
    pub const BRIGHT_BLUE: Self = Self(12);
    pub const BRIGHT_MAGENTA: Self = Self(13);
    pub const BRIGHT_CYAN: Self = Self(14);
    pub const BRIGHT_WHITE: Self = Self(15);

    /// Extended palette color by index.
    pub const fn indexed(index: u8) -> Self {
        Self(index)
    }

    /// Color from the 6x6x6 cube of the 256-color palette.
    ///
    /// Each channel is in `0..=5`; larger values are clamped.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        let r = if r > 5 { 5 } else { r };
        let g = if g > 5 { 5 } else { g };
        let b = if b > 5 { 5 } else { b };
        Self(16 + 36 * r + 6 * g + b)
    }

    /// Palette index.
    #[inline]
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// True for the 16 base ANSI colors.
    #[inline]
    pub const fn is_basic(&self) -> bool {
        self.0 < 16
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

// =============================================================================
// Special Characters
// =============================================================================

/// Line and block drawing glyphs.
///
/// The concrete code point depends on the [`GlyphSet`](crate::renderer::GlyphSet)
/// selected at startup (Unicode box drawing or code page 437).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SpecialChar {
    /// █
    FullBlock = 0,
    /// ▄
    BottomHalfBlock,
    /// ▀
    TopHalfBlock,
    /// ▌
    LeftHalfBlock,
    /// ▐
    RightHalfBlock,
    /// ░
    LightShade,
    /// ▒
    MediumShade,
    /// ▓
    DarkShade,
    /// │
    Vertical,
    /// ─
    Horizontal,
    /// ┌
    CornerTopLeft,
    /// ┐
    CornerTopRight,
    /// └
    CornerBottomLeft,
    /// ┘
    CornerBottomRight,
    /// ┤
    ConnectorVerticalLeft,
    /// ├
    ConnectorVerticalRight,
    /// ┴
    ConnectorHorizontalTop,
    /// ┬
    ConnectorHorizontalBottom,
    /// ┼
    ConnectorCross,
    /// ║
    DoubleVertical,
    /// ═
    DoubleHorizontal,
    /// ╔
    DoubleCornerTopLeft,
    /// ╗
    DoubleCornerTopRight,
    /// ╚
    DoubleCornerBottomLeft,
    /// ╝
    DoubleCornerBottomRight,
    /// ╣
    DoubleConnectorVerticalLeft,
    /// ╠
    DoubleConnectorVerticalRight,
    /// ╩
    DoubleConnectorHorizontalTop,
    /// ╦
    DoubleConnectorHorizontalBottom,
    /// ╬
    DoubleConnectorCross,
}

impl SpecialChar {
    /// Number of special glyphs.
    pub const COUNT: usize = 30;

    /// Table index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One renderable unit: a plain character or a special glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Char(char),
    Special(SpecialChar),
}

impl From<char> for Glyph {
    fn from(c: char) -> Self {
        Glyph::Char(c)
    }
}

impl From<SpecialChar> for Glyph {
    fn from(s: SpecialChar) -> Self {
        Glyph::Special(s)
    }
}

// =============================================================================
// Tests
// =============================================================================
