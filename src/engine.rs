//! Engine - owns the backend and the widget tree and runs frames.
//!
//! # Frame loop
//!
//! ```text
//! engine.update()   pump input, pick up resizes (full invalidation)
//! engine.draw()     layout once, then per dirty rect:
//!                   begin_draw ─ walk roots ─ end_draw
//! ```
//!
//! # Example
//!
//! ```
//! use spark_grid::backend::HeadlessBackend;
//! use spark_grid::widget::Label;
//! use spark_grid::{Color, Engine, Size};
//!
//! let mut engine = Engine::new(HeadlessBackend::new(Size::new(20, 5))).unwrap();
//! let label = engine.widgets_mut().insert(Label::new("hello", Color::GREEN, Color::BLACK));
//! engine.add_widget(label).unwrap();
//!
//! engine.update();
//! engine.draw().unwrap();
//! assert!(engine.backend().row_text(0).starts_with("hello"));
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::thread;

use tracing::{debug, trace, warn};

use crate::backend::Backend;
use crate::config::EngineConfig;
use crate::context::DrawContext;
use crate::error::{EngineError, Result};
use crate::types::{Point, Rect, Size};
use crate::widget::{WidgetId, WidgetTree};

/// Retained-mode renderer over a [`Backend`].
pub struct Engine<B: Backend> {
    backend: B,
    tree: WidgetTree,
    console: Size,
    resized: Rc<Cell<Option<Size>>>,
}

impl<B: Backend> Engine<B> {
    /// Build an engine with the default configuration.
    pub fn new(backend: B) -> Result<Self> {
        Self::with_config(backend, EngineConfig::default())
    }

    /// Build an engine, polling the backend until it reports a screen size.
    ///
    /// Fails with [`EngineError::ScreenSizeUnavailable`] once
    /// `size_poll_attempts` polls came back empty.
    pub fn with_config(mut backend: B, config: EngineConfig) -> Result<Self> {
        let mut attempts = 0;
        let console = loop {
            backend.update();
            if let Some(size) = backend.screen_size() {
                break size;
            }
            attempts += 1;
            if attempts >= config.size_poll_attempts {
                return Err(EngineError::ScreenSizeUnavailable { attempts });
            }
            thread::sleep(config.size_poll_interval);
        };

        let resized = Rc::new(Cell::new(None));
        let sink = Rc::clone(&resized);
        backend.on_screen_size_changed(Box::new(move |size| sink.set(Some(size))));

        debug!(target: "spark_grid::engine", ?console, attempts, "engine ready");
        Ok(Self {
            backend,
            tree: WidgetTree::new(),
            console,
            resized,
        })
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Pump backend input and apply a pending resize.
    pub fn update(&mut self) {
        self.backend.update();
        if let Some(size) = self.resized.take() {
            if size != self.console {
                debug!(target: "spark_grid::engine", from = ?self.console, to = ?size, "resized");
                self.console = size;
                self.invalidate_all();
            }
        }
    }

    /// Repaint every region invalidated since the last draw.
    pub fn draw(&mut self) -> Result<()> {
        if self.tree.invalidations().is_empty() {
            return Ok(());
        }

        self.tree.update_layout_roots(self.console);
        let rects = self.tree.take_invalidations();
        let screen = Rect::from_size(self.console);
        trace!(target: "spark_grid::engine", rects = rects.len(), "draw");

        let mut pending = rects.into_iter();
        while let Some(rect) = pending.next() {
            let clip = rect.intersection(&screen);
            if clip.is_empty() {
                continue;
            }
            let mut ctx = DrawContext::begin(&mut self.backend, clip);
            self.tree.draw_roots(&mut ctx);
            if let Err(err) = ctx.end() {
                // Requeue everything not flushed.
                self.tree.invalidate_rect(rect);
                for rest in pending {
                    self.tree.invalidate_rect(rest);
                }
                warn!(target: "spark_grid::engine", %err, "draw pass failed");
                return Err(err.into());
            }
        }
        Ok(())
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Attach a widget to the engine as a root, lay it out against the
    /// screen and queue its area.
    pub fn add_widget(&mut self, id: WidgetId) -> Result<()> {
        self.tree.add_root(id)?;
        self.tree.update_layout(id, self.console.width, self.console.height);
        self.tree.invalidate(id);
        Ok(())
    }

    /// Detach a root widget. Its area is repainted on the next draw; the
    /// widget itself stays in the tree.
    pub fn remove_widget(&mut self, id: WidgetId) -> Result<()> {
        self.tree.remove_root(id)?;
        Ok(())
    }

    pub fn widgets(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn widgets_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    pub fn invalidate_rect(&mut self, rect: Rect) {
        self.tree.invalidate_rect(rect);
    }

    /// Queue the whole screen.
    pub fn invalidate_all(&mut self) {
        self.tree.invalidate_rect(Rect::from_size(self.console));
    }

    // =========================================================================
    // Device
    // =========================================================================

    /// User input received since the last call.
    pub fn read_input(&mut self) -> String {
        self.update();
        self.backend.read_input()
    }

    pub fn mouse_position(&self) -> Option<Point> {
        self.backend.mouse_position()
    }

    pub fn console_size(&self) -> Size {
        self.console
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Restore the device.
    pub fn destroy(&mut self) -> Result<()> {
        debug!(target: "spark_grid::engine", "destroy");
        self.backend.destroy()?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
