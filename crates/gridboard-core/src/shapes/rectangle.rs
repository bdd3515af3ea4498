//! Rectangle shape.

use super::{ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::Serialize;

/// An axis-aligned rectangle described by its center and size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    /// Center point.
    pub center: Point,
    width: f64,
    height: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Smallest width or height a rectangle can have.
    pub const MIN_SIZE: f64 = 10.0;

    /// Create a new rectangle. Width and height are clamped to [`Self::MIN_SIZE`].
    pub fn new(center: Point, width: f64, height: f64, style: ShapeStyle) -> Self {
        Self {
            center,
            width: width.max(Self::MIN_SIZE),
            height: height.max(Self::MIN_SIZE),
            style,
        }
    }

    /// Create a rectangle with equal sides.
    pub fn square(center: Point, size: f64, style: ShapeStyle) -> Self {
        Self::new(center, size, size, style)
    }

    /// Build a rectangle from its four edges.
    ///
    /// The center is the midpoint of the edges; the size is clamped to
    /// [`Self::MIN_SIZE`] independently of the center.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64, style: ShapeStyle) -> Self {
        Self::new(
            Point::new((left + right) / 2.0, (top + bottom) / 2.0),
            right - left,
            bottom - top,
            style,
        )
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the size, clamped to [`Self::MIN_SIZE`].
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width.max(Self::MIN_SIZE);
        self.height = height.max(Self::MIN_SIZE);
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl ShapeTrait for Rectangle {
    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn bounds(&self) -> Rect {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Rect::new(
            self.center.x - half_w,
            self.center.y - half_h,
            self.center.x + half_w,
            self.center.y + half_h,
        )
    }

    fn contains(&self, point: Point) -> bool {
        // Inclusive on every edge, unlike `kurbo::Rect::contains`.
        let b = self.bounds();
        point.x >= b.x0 && point.x <= b.x1 && point.y >= b.y0 && point.y <= b.y1
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
