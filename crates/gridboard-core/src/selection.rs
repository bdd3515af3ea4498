//! Single selection and its resize handles.

use crate::shapes::Shape;
use crate::viewport::Viewport;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 12.0;

/// Corner positions of a shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in handle order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Whether this corner lies on the left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Whether this corner lies on the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Position of this corner on `rect`.
    pub fn of(self, rect: Rect) -> Point {
        let x = if self.is_left() { rect.x0 } else { rect.x1 };
        let y = if self.is_top() { rect.y0 } else { rect.y1 };
        Point::new(x, y)
    }
}

/// A resize handle with its world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in world coordinates.
    pub position: Point,
    pub corner: Corner,
}

impl Handle {
    pub fn new(position: Point, corner: Corner) -> Self {
        Self { position, corner }
    }

    /// Screen-space square of side `size` centered on the handle.
    pub fn screen_rect(&self, viewport: &Viewport, size: f64) -> Rect {
        Rect::from_center_size(viewport.to_screen(self.position), (size, size))
    }

    /// Check if a screen point lies within the handle square (edges included).
    ///
    /// Handles keep the same on-screen size at every zoom level.
    pub fn hit_test(&self, screen_point: Point, viewport: &Viewport, size: f64) -> bool {
        let center = viewport.to_screen(self.position);
        let half = size / 2.0;
        (screen_point.x - center.x).abs() <= half && (screen_point.y - center.y).abs() <= half
    }
}

/// The four corner handles of a shape's bounding box.
pub fn corner_handles(shape: &Shape) -> [Handle; 4] {
    let bounds = shape.bounds();
    Corner::ALL.map(|corner| Handle::new(corner.of(bounds), corner))
}

/// Find which corner handle (if any) is hit at the given screen point.
pub fn hit_test_handles(
    shape: &Shape,
    screen_point: Point,
    viewport: &Viewport,
    size: f64,
) -> Option<Corner> {
    corner_handles(shape)
        .into_iter()
        .find(|handle| handle.hit_test(screen_point, viewport, size))
        .map(|handle| handle.corner)
}

/// The current selection: at most one shape, by store index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection (`None` clears it).
    pub fn select(&mut self, index: Option<usize>) {
        self.index = index;
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_none()
    }
}
