//! Moving a shape with the pointer.
//!
//! A drag keeps the grab point under the cursor and snaps the shape rigidly:
//! both outer edges of each axis compete for the grid and the winner's
//! offset moves the whole shape.

use crate::interaction::InteractionMode;
use crate::shapes::Shape;
use crate::snap::GridSnap;
use crate::store::ShapeStore;
use kurbo::{Point, Vec2};

/// Begin dragging the shape at `index`.
///
/// The shape is raised to the top of the z-order. Returns the new
/// interaction mode, or `None` when the index is stale.
pub fn start(store: &mut ShapeStore, index: usize, cursor_world: Point) -> Option<InteractionMode> {
    let grab_offset = cursor_world - store.get(index)?.center();
    let index = store.raise_to_top(index)?;
    log::debug!("Drag started on shape {index}");
    Some(InteractionMode::Dragging { index, grab_offset })
}

/// Compute where a dragged shape lands for the given cursor position.
pub fn apply_drag(shape: &Shape, cursor_world: Point, grab_offset: Vec2, snap: &GridSnap) -> Shape {
    let candidate = cursor_world - grab_offset;
    let delta = snap.translation_for(shape.outer_bounds_at(candidate, snap.half_outline));
    let mut moved = shape.clone();
    moved.set_center(candidate + delta);
    moved
}

/// Move the dragged shape to follow the cursor.
///
/// Does nothing unless `mode` is a drag. Returns whether a shape moved.
pub fn update(
    mode: &InteractionMode,
    store: &mut ShapeStore,
    cursor_world: Point,
    snap: &GridSnap,
) -> bool {
    let InteractionMode::Dragging { index, grab_offset } = *mode else {
        return false;
    };
    let Some(shape) = store.get(index) else {
        return false;
    };
    let moved = apply_drag(shape, cursor_world, grab_offset, snap);
    store.replace(index, moved)
}
