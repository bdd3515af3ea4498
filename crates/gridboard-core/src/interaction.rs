//! The pointer interaction state machine.

use crate::selection::Corner;
use crate::shapes::Shape;
use kurbo::{Point, Vec2};

/// What the pointer is currently doing.
///
/// Exactly one mode is active at a time; each variant carries the data its
/// pointer-move handler needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Moving the viewport.
    Panning {
        /// Last pointer position in screen coordinates.
        last_screen: Point,
    },
    /// Moving a shape.
    Dragging {
        index: usize,
        /// Cursor minus shape center at the start of the drag, in world units.
        grab_offset: Vec2,
    },
    /// Resizing a shape from one of its corner handles.
    Resizing {
        index: usize,
        corner: Corner,
        /// Shape as it was when the resize started.
        original: Shape,
        /// Cursor position at the start of the resize, in world units.
        initial_world: Point,
    },
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, InteractionMode::Panning { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionMode::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, InteractionMode::Resizing { .. })
    }

    /// Index of the shape being dragged or resized.
    pub fn target(&self) -> Option<usize> {
        match self {
            InteractionMode::Dragging { index, .. } | InteractionMode::Resizing { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }

    /// Short name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "idle",
            InteractionMode::Panning { .. } => "panning",
            InteractionMode::Dragging { .. } => "dragging",
            InteractionMode::Resizing { .. } => "resizing",
        }
    }

    /// Return to idle, handing back the mode that was active.
    pub fn end(&mut self) -> InteractionMode {
        let previous = std::mem::take(self);
        if !previous.is_idle() {
            log::debug!("Interaction {} ended", previous.name());
        }
        previous
    }
}
