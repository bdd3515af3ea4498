//! Single-slot shape clipboard.

use crate::shapes::Shape;
use kurbo::Vec2;

/// Holds one copied shape.
///
/// Every paste hands out the stored shape moved by `offset` and keeps the
/// moved copy, so repeated pastes cascade diagonally.
#[derive(Debug, Clone)]
pub struct Clipboard {
    slot: Option<Shape>,
    offset: Vec2,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(Vec2::new(40.0, 40.0))
    }
}

impl Clipboard {
    pub fn new(offset: Vec2) -> Self {
        Self { slot: None, offset }
    }

    /// Store a copy of `shape`, replacing anything copied before.
    pub fn copy(&mut self, shape: &Shape) {
        self.slot = Some(shape.clone());
    }

    /// Produce the next pasted shape, or `None` if nothing was copied.
    pub fn paste(&mut self) -> Option<Shape> {
        let slot = self.slot.as_mut()?;
        *slot = slot.translated(self.offset);
        Some(slot.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
