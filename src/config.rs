//! Engine and terminal configuration.
//!
//! Both structs are plain values with sensible defaults and builder-style
//! setters:
//!
//! ```
//! use std::time::Duration;
//! use spark_grid::{EngineConfig, TerminalConfig, GlyphSet};
//!
//! let engine = EngineConfig::default().with_size_poll_attempts(500);
//! let terminal = TerminalConfig::default()
//!     .with_glyphs(GlyphSet::Unicode)
//!     .with_mouse_capture(false);
//! assert_eq!(engine.size_poll_interval, Duration::from_millis(1));
//! assert!(!terminal.capture_mouse);
//! ```

use std::time::Duration;

use crate::renderer::GlyphSet;

/// Default initial capacity of the output buffer in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8192;

// =============================================================================
// EngineConfig
// =============================================================================

/// Settings for [`Engine`](crate::Engine) construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Delay between screen size polls while waiting for the first report.
    pub size_poll_interval: Duration,
    /// Polls before giving up with `ScreenSizeUnavailable`.
    pub size_poll_attempts: u32,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            size_poll_interval: Duration::from_millis(1),
            size_poll_attempts: 2000,
        }
    }

    pub fn with_size_poll_interval(mut self, interval: Duration) -> Self {
        self.size_poll_interval = interval;
        self
    }

    pub fn with_size_poll_attempts(mut self, attempts: u32) -> Self {
        self.size_poll_attempts = attempts;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TerminalConfig
// =============================================================================

/// Settings for [`TerminalBackend`](crate::backend::TerminalBackend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Glyph encoding used for every write.
    pub glyphs: GlyphSet,
    /// Switch to the alternate screen while running.
    pub alternate_screen: bool,
    /// Enable SGR mouse reporting.
    pub capture_mouse: bool,
    /// Initial output buffer capacity.
    pub buffer_capacity: usize,
}

impl TerminalConfig {
    pub fn new() -> Self {
        Self {
            glyphs: GlyphSet::platform_default(),
            alternate_screen: false,
            capture_mouse: true,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    pub fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.capture_mouse = enabled;
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.size_poll_interval, Duration::from_millis(1));
        assert_eq!(config.size_poll_attempts, 2000);
    }

    #[test]
    fn test_terminal_config_builder() {
        let config = TerminalConfig::default()
            .with_glyphs(GlyphSet::Cp437)
            .with_alternate_screen(true)
            .with_buffer_capacity(64);
        assert_eq!(config.glyphs, GlyphSet::Cp437);
        assert!(config.alternate_screen);
        assert!(config.capture_mouse);
        assert_eq!(config.buffer_capacity, 64);
    }
}
