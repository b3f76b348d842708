//! Glyph encodings.
//!
//! A [`GlyphSet`] decides how code points reach the terminal: UTF-8 for
//! modern terminals, or single bytes from code page 437 for legacy consoles.
//! The set also maps each [`SpecialChar`] to its code in that encoding.

use crate::types::SpecialChar;

use super::output::OutputBuffer;

/// Code points for every `SpecialChar`, in enum order.
const UNICODE_TABLE: [char; SpecialChar::COUNT] = [
    // Block
    '█', '▄', '▀', '▌', '▐',
    // Shade
    '░', '▒', '▓',
    // Single line
    '│', '─', '┌', '┐', '└', '┘', '┤', '├', '┴', '┬', '┼',
    // Double line
    '║', '═', '╔', '╗', '╚', '╝', '╣', '╠', '╩', '╦', '╬',
];

/// Code page 437 bytes for every `SpecialChar`, in enum order.
const CP437_TABLE: [u8; SpecialChar::COUNT] = [
    // Block
    219, 220, 223, 221, 222,
    // Shade
    176, 177, 178,
    // Single line
    179, 196, 218, 191, 192, 217, 180, 195, 193, 194, 197,
    // Double line
    186, 205, 201, 187, 200, 188, 185, 204, 202, 203, 206,
];

/// Byte written for code points that a single-byte set cannot carry.
const REPLACEMENT: u8 = b'?';

/// Output glyph encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphSet {
    /// UTF-8 output with Unicode box-drawing glyphs.
    Unicode,
    /// One byte per cell, box drawing from code page 437.
    Cp437,
}

impl GlyphSet {
    /// CP437 on Windows consoles, Unicode elsewhere.
    pub const fn platform_default() -> Self {
        if cfg!(windows) {
            GlyphSet::Cp437
        } else {
            GlyphSet::Unicode
        }
    }

    /// Code for a special glyph in this set.
    ///
    /// For `Cp437` the returned char carries the byte value (`U+0000..=U+00FF`).
    pub fn special(self, glyph: SpecialChar) -> char {
        match self {
            GlyphSet::Unicode => UNICODE_TABLE[glyph.index()],
            GlyphSet::Cp437 => char::from(CP437_TABLE[glyph.index()]),
        }
    }

    /// Append `ch` to `out` in this encoding.
    #[inline]
    pub fn encode(self, ch: char, out: &mut OutputBuffer) {
        match self {
            GlyphSet::Unicode => out.write_char(ch),
            GlyphSet::Cp437 => out.write_byte(u8::try_from(u32::from(ch)).unwrap_or(REPLACEMENT)),
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::platform_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_specials() {
        let set = GlyphSet::Unicode;
        assert_eq!(set.special(SpecialChar::FullBlock), '█');
        assert_eq!(set.special(SpecialChar::LightShade), '░');
        assert_eq!(set.special(SpecialChar::ConnectorCross), '┼');
        assert_eq!(set.special(SpecialChar::DoubleCornerTopLeft), '╔');
        assert_eq!(set.special(SpecialChar::DoubleConnectorCross), '╬');
    }

    #[test]
    fn test_cp437_specials() {
        let set = GlyphSet::Cp437;
        assert_eq!(u32::from(set.special(SpecialChar::FullBlock)), 219);
        assert_eq!(u32::from(set.special(SpecialChar::Vertical)), 179);
        assert_eq!(u32::from(set.special(SpecialChar::DoubleHorizontal)), 205);
    }

    #[test]
    fn test_encode() {
        let mut out = OutputBuffer::new();
        GlyphSet::Unicode.encode('═', &mut out);
        assert_eq!(out.as_bytes(), "═".as_bytes());

        out.clear();
        GlyphSet::Cp437.encode('A', &mut out);
        GlyphSet::Cp437.encode(GlyphSet::Cp437.special(SpecialChar::DoubleHorizontal), &mut out);
        GlyphSet::Cp437.encode('═', &mut out);
        assert_eq!(out.as_bytes(), &[b'A', 205, b'?']);
    }
}
