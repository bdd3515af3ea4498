//! Resizing a shape from a corner handle.
//!
//! Every update is computed from the snapshot taken when the resize started,
//! so the result depends only on the total cursor travel.

use crate::interaction::InteractionMode;
use crate::selection::Corner;
use crate::shapes::{Circle, Rectangle, Shape, ShapeTrait};
use crate::snap::GridSnap;
use crate::store::ShapeStore;
use kurbo::{Point, Vec2};

/// Begin resizing the shape at `index` from `corner`.
///
/// Returns `None` when the index is stale.
pub fn start(
    store: &ShapeStore,
    index: usize,
    corner: Corner,
    cursor_world: Point,
) -> Option<InteractionMode> {
    let original = store.get(index)?.clone();
    log::debug!("Resize started on shape {index} from {corner:?}");
    Some(InteractionMode::Resizing {
        index,
        corner,
        original,
        initial_world: cursor_world,
    })
}

/// Compute the resized shape for the given cursor position.
pub fn apply_resize(
    original: &Shape,
    corner: Corner,
    initial_world: Point,
    cursor_world: Point,
    snap: &GridSnap,
) -> Shape {
    match original {
        Shape::Rectangle(rect) => {
            resize_rectangle(rect, corner, cursor_world - initial_world, snap).into()
        }
        Shape::Circle(circle) => resize_circle(circle, corner, cursor_world, snap).into(),
    }
}

/// Resize the shape being resized to follow the cursor.
///
/// Does nothing unless `mode` is a resize. Returns whether a shape changed.
pub fn update(
    mode: &InteractionMode,
    store: &mut ShapeStore,
    cursor_world: Point,
    snap: &GridSnap,
) -> bool {
    let InteractionMode::Resizing {
        index,
        corner,
        original,
        initial_world,
    } = mode
    else {
        return false;
    };
    let resized = apply_resize(original, *corner, *initial_world, cursor_world, snap);
    store.replace(*index, resized)
}

/// Move the edges adjacent to `corner` by `delta`; the opposite edges stay.
///
/// Only the moved edges snap, each on its own outer line.
fn resize_rectangle(rect: &Rectangle, corner: Corner, delta: Vec2, snap: &GridSnap) -> Rectangle {
    let bounds = rect.bounds();
    let half = snap.half_outline;
    let (mut left, mut top, mut right, mut bottom) = (bounds.x0, bounds.y0, bounds.x1, bounds.y1);

    if corner.is_left() {
        left += delta.x;
        left += snap.offset(left - half);
    } else {
        right += delta.x;
        right += snap.offset(right + half);
    }
    if corner.is_top() {
        top += delta.y;
        top += snap.offset(top - half);
    } else {
        bottom += delta.y;
        bottom += snap.offset(bottom + half);
    }

    Rectangle::from_edges(left, top, right, bottom, rect.style)
}

/// Grow or shrink a circle inside the square spanned by the fixed anchor
/// corner and the cursor.
fn resize_circle(circle: &Circle, corner: Corner, cursor_world: Point, snap: &GridSnap) -> Circle {
    let anchor = corner.opposite().of(circle.bounds());
    let d = cursor_world - anchor;
    let radius = (d.x.abs().min(d.y.abs()) / 2.0).max(Circle::MIN_RADIUS);
    let center = anchor + Vec2::new(signum(d.x) * radius, signum(d.y) * radius);

    let mut resized = Circle::new(center, radius, circle.style);
    let half = snap.half_outline;
    resized.center += snap.translation_for(resized.bounds().inflate(half, half));
    resized
}

/// Sign of `v`, with zero mapping to zero.
fn signum(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
