//! # spark-grid
//!
//! Retained-mode rendering engine for character-grid terminals.
//!
//! ## Architecture
//!
//! Widgets live in an arena ([`WidgetTree`]) and are laid out top-down against
//! the screen size. Every geometry change queues the affected screen area as a
//! dirty rect; a draw pass repaints only those rects, and the encoder turns
//! the cell writes into a minimal escape stream:
//!
//! ```text
//! setters ─▶ InvalidationQueue ─▶ Engine::draw ─▶ DrawContext ─▶ ScreenEncoder ─▶ terminal
//!                                  (layout once,    (transform +    (cursor/color
//!                                   per dirty rect)  clip stacks)    dedup)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, palette and glyph types
//! - [`renderer`] - Screen trait, ANSI encoder, output buffer, glyph sets
//! - [`context`] - Draw context used by widgets to paint
//! - [`invalidation`] - Dirty-rect queue
//! - [`widget`] - Widget trait, arena tree, layout, stock widgets
//! - [`backend`] - Terminal and headless backends, input decoding
//! - [`engine`] - Frame loop tying it all together

pub mod backend;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod invalidation;
pub mod renderer;
pub mod types;
pub mod widget;

pub use types::*;

pub use backend::{Backend, HeadlessBackend, TerminalBackend};
pub use config::{EngineConfig, TerminalConfig};
pub use context::{DrawContext, Edges};
pub use engine::Engine;
pub use error::{EngineError, Result, TreeError};
pub use invalidation::InvalidationQueue;
pub use renderer::{GlyphSet, OutputBuffer, Screen, ScreenEncoder};
pub use widget::{ChildrenLayout, Widget, WidgetId, WidgetLayout, WidgetMut, WidgetTree};
