//! Dirty-rect tracking.
//!
//! Invalidations arrive in bursts from neighbouring widgets, so the queue
//! only tries to merge a new rect into the most recent entry. Anything that
//! does not touch the last entry starts a new one.

use crate::types::Rect;

/// Ordered queue of screen regions that need repainting.
#[derive(Debug, Default, Clone)]
pub struct InvalidationQueue {
    rects: Vec<Rect>,
}

impl InvalidationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `rect`, merging it into the last entry when the two intersect.
    pub fn invalidate_rect(&mut self, rect: Rect) {
        if let Some(last) = self.rects.last_mut() {
            if last.intersects(&rect) {
                *last = last.union(&rect);
                return;
            }
        }
        self.rects.push(rect);
    }

    #[inline]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Remove and return every queued rect.
    pub fn take(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.rects)
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }
}
