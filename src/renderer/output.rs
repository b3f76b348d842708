//! Output buffering.
//!
//! Every draw pass accumulates its escape sequences and glyph bytes here and
//! hands them to the sink in a single `write_all`.

use std::io::{self, Write};

use crate::config::DEFAULT_BUFFER_CAPACITY;

/// A byte buffer that accumulates output for batch writing.
///
/// The backing `Vec` grows geometrically and is never shrunk, so after the
/// first few frames a draw pass performs no allocation.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a buffer with specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a character as UTF-8.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Write the whole buffer to `writer` in one call, flush it, and clear.
    pub fn flush_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Get the accumulated data as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_buffer_writes() {
        let mut out = OutputBuffer::with_capacity(4);
        out.write_str("ab");
        out.write_char('█');
        out.write_byte(b'!');
        assert_eq!(out.as_str(), "ab█!");
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_flush_keeps_capacity() {
        let mut out = OutputBuffer::new();
        out.write_bytes(&[b'x'; 100]);
        let capacity = out.capacity();

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();

        assert_eq!(sink.len(), 100);
        assert!(out.is_empty());
        assert_eq!(out.capacity(), capacity);
    }

    #[test]
    fn test_flush_empty_writes_nothing() {
        let mut out = OutputBuffer::new();
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert!(sink.is_empty());
    }
}
