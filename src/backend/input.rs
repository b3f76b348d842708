//! Raw input decoding.
//!
//! Terminal input interleaves user keystrokes with replies to our own
//! queries. The parser pulls out the two kinds of reply the engine cares
//! about and passes everything else through as text:
//!
//! - **Cursor position reports** `ESC [ row ; col R`, read as the screen
//!   size, but only while a size request is outstanding (`R` also ends some
//!   function-key sequences).
//! - **SGR mouse reports** `ESC [ < b ; x ; y M|m`, read as the pointer
//!   position (converted to 0-based cells).
//!
//! Framing is best effort: an `ESC` that interrupts an unfinished sequence
//! drops the fragment, and a sequence that stays unterminated past
//! [`MAX_SEQUENCE_LEN`] bytes is discarded. Split reads are handled by
//! carrying incomplete `ESC [` sequences and UTF-8 tails into the next feed;
//! an ESC that ends a read is delivered at once as the Escape key.

use tracing::trace;

use crate::types::{Point, Size};

/// Longest unterminated escape sequence kept while waiting for more input.
pub const MAX_SEQUENCE_LEN: usize = 32;

const ESC: u8 = 0x1b;

/// Incremental parser for raw terminal input.
#[derive(Debug, Default)]
pub struct InputParser {
    raw: Vec<u8>,
    carry: String,
    text: String,
    size_request_pending: bool,
    screen_size: Option<Size>,
    mouse: Option<Point>,
}

impl InputParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a size request as sent.
    ///
    /// Returns `false` when one is already outstanding, in which case the
    /// caller must not send another.
    pub fn request_size(&mut self) -> bool {
        if self.size_request_pending {
            return false;
        }
        self.size_request_pending = true;
        true
    }

    /// Forget an outstanding request (e.g. the query could not be written).
    pub fn cancel_size_request(&mut self) {
        self.size_request_pending = false;
    }

    #[inline]
    pub fn size_request_pending(&self) -> bool {
        self.size_request_pending
    }

    /// Last reported screen size.
    #[inline]
    pub fn screen_size(&self) -> Option<Size> {
        self.screen_size
    }

    /// Last reported pointer position.
    #[inline]
    pub fn mouse_position(&self) -> Option<Point> {
        self.mouse
    }

    /// Take the user text accumulated so far.
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Consume a chunk of raw bytes.
    ///
    /// Returns the screen size if this chunk carried a size report.
    pub fn feed(&mut self, bytes: &[u8]) -> Option<Size> {
        let decoded = self.decode(bytes);
        let mut buf = std::mem::take(&mut self.carry);
        buf.push_str(&decoded);
        self.scan(&buf)
    }

    fn decode(&mut self, bytes: &[u8]) -> String {
        self.raw.extend_from_slice(bytes);
        let mut out = String::new();
        loop {
            let (valid, invalid) = match std::str::from_utf8(&self.raw) {
                Ok(_) => (self.raw.len(), None),
                Err(e) => (e.valid_up_to(), e.error_len()),
            };
            out.push_str(&String::from_utf8_lossy(&self.raw[..valid]));
            match invalid {
                Some(len) => {
                    out.push(char::REPLACEMENT_CHARACTER);
                    self.raw.drain(..valid + len);
                }
                None => {
                    self.raw.drain(..valid);
                    break;
                }
            }
        }
        out
    }

    fn scan(&mut self, buf: &str) -> Option<Size> {
        let bytes = buf.as_bytes();
        let mut reported = None;
        let mut i = 0;

        'outer: while i < bytes.len() {
            let Some(offset) = bytes[i..].iter().position(|&b| b == ESC) else {
                self.text.push_str(&buf[i..]);
                break;
            };
            let esc = i + offset;
            self.text.push_str(&buf[i..esc]);

            // A read ending in a bare ESC is the Escape key.
            if esc + 1 >= bytes.len() {
                self.text.push('\x1b');
                break;
            }
            if bytes[esc + 1] != b'[' {
                self.text.push('\x1b');
                i = esc + 1;
                continue;
            }

            let mut j = esc + 2;
            while j < bytes.len() {
                let b = bytes[j];
                if b == ESC {
                    trace!(target: "spark_grid::input", dropped = j - esc, "interrupted escape sequence");
                    i = j;
                    continue 'outer;
                }
                if (0x40..=0x7e).contains(&b) {
                    let seq = &buf[esc..=j];
                    match self.handle_sequence(seq) {
                        Some(Reply::Size(size)) => reported = Some(size),
                        Some(Reply::Mouse) => {}
                        None => self.text.push_str(seq),
                    }
                    i = j + 1;
                    continue 'outer;
                }
                j += 1;
            }

            if bytes.len() - esc > MAX_SEQUENCE_LEN {
                trace!(target: "spark_grid::input", dropped = bytes.len() - esc, "unterminated escape sequence");
            } else {
                self.carry.push_str(&buf[esc..]);
            }
            break;
        }

        reported
    }

    fn handle_sequence(&mut self, seq: &str) -> Option<Reply> {
        let body = &seq[2..seq.len() - 1];
        match seq.as_bytes()[seq.len() - 1] {
            b'R' if self.size_request_pending => {
                let (row, col) = parse_pair(body)?;
                let size = Size::new(col, row);
                self.size_request_pending = false;
                self.screen_size = Some(size);
                Some(Reply::Size(size))
            }
            b'M' | b'm' => {
                let params = body.strip_prefix('<')?;
                let mut parts = params.split(';');
                let _button: i32 = parts.next()?.parse().ok()?;
                let x: i32 = parts.next()?.parse().ok()?;
                let y: i32 = parts.next()?.parse().ok()?;
                if parts.next().is_some() {
                    return None;
                }
                self.mouse = Some(Point::new(x - 1, y - 1));
                Some(Reply::Mouse)
            }
            _ => None,
        }
    }
}

enum Reply {
    Size(Size),
    Mouse,
}

fn parse_pair(body: &str) -> Option<(i32, i32)> {
    let (a, b) = body.split_once(';')?;
    Some((a.parse().ok()?, b.parse().ok()?))
}
