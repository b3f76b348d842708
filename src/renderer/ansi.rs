//! ANSI escape sequences for terminal control.
//!
//! Everything the engine writes besides glyph codes goes through here:
//! - Cursor positioning, visibility, save/restore
//! - SGR color pairs (16-color and 256-color palette)
//! - Cursor position requests used for screen size discovery
//! - Screen clearing, alternate screen, soft reset

use std::io::Write;

use crate::types::Color;

// =============================================================================
// Constants
// =============================================================================

/// Escape character.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Foreground SGR codes for the 16 base colors.
pub const FG_CODES: [u8; 16] = [30, 31, 32, 33, 34, 35, 36, 37, 90, 91, 92, 93, 94, 95, 96, 97];

/// Background SGR codes for the 16 base colors.
pub const BG_CODES: [u8; 16] = [
    40, 41, 42, 43, 44, 45, 46, 47, 100, 101, 102, 103, 104, 105, 106, 107,
];

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to a 0-based cell (emitted 1-based).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: i32, y: i32) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Save cursor position.
#[inline]
pub fn cursor_save<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[s")
}

/// Restore cursor position.
#[inline]
pub fn cursor_restore<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[u")
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

/// Ask the terminal to report the cursor position (`ESC[row;colR`).
#[inline]
pub fn request_cursor_position<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[6n")
}

/// Query the screen size.
///
/// Parks the cursor at the far bottom-right corner, requests its position
/// and restores it. The terminal clamps the move, so the report carries the
/// screen size.
pub fn request_screen_size<W: Write>(w: &mut W) -> std::io::Result<()> {
    cursor_hide(w)?;
    cursor_save(w)?;
    w.write_all(b"\x1b[999;999H")?;
    request_cursor_position(w)?;
    cursor_restore(w)
}

// =============================================================================
// Screen
// =============================================================================

/// Clear the screen and home the cursor.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[2J\x1b[H")
}

/// Enter alternate screen buffer.
#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[?1049h")
}

/// Exit alternate screen buffer.
#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[?1049l")
}

/// Soft terminal reset (DECSTR).
#[inline]
pub fn soft_reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[!p")
}

// =============================================================================
// Colors
// =============================================================================

/// Reset all attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set foreground and background in one SGR sequence.
///
/// Base colors use the short codes (`30-37`/`90-97`, `40-47`/`100-107`);
/// extended indices use `38;5;n` / `48;5;n`.
pub fn colors<W: Write>(w: &mut W, fg: Color, bg: Color) -> std::io::Result<()> {
    w.write_all(CSI.as_bytes())?;
    if fg.is_basic() {
        write!(w, "{}", FG_CODES[fg.index() as usize])?;
    } else {
        write!(w, "38;5;{}", fg.index())?;
    }
    w.write_all(b";")?;
    if bg.is_basic() {
        write!(w, "{}", BG_CODES[bg.index() as usize])?;
    } else {
        write!(w, "48;5;{}", bg.index())?;
    }
    w.write_all(b"m")
}

// =============================================================================
// Tests
// =============================================================================
