//! Shape definitions for the canvas.

mod circle;
mod color;
mod rectangle;

pub use circle::Circle;
pub use color::{ColorParseError, ShapeColor};
pub use rectangle::Rectangle;

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Fraction by which a fill color is darkened to derive its outline color.
pub const STROKE_DARKEN_AMOUNT: f64 = 0.2;

/// Fill and outline colors of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Interior color.
    pub fill: ShapeColor,
    /// Outline color.
    pub stroke: ShapeColor,
}

impl ShapeStyle {
    pub const fn new(fill: ShapeColor, stroke: ShapeColor) -> Self {
        Self { fill, stroke }
    }

    /// Style whose outline is the fill darkened by [`STROKE_DARKEN_AMOUNT`].
    pub fn from_fill(fill: ShapeColor) -> Self {
        Self::new(fill, fill.darken(STROKE_DARKEN_AMOUNT))
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new(ShapeColor::new(0xe0, 0xe0, 0xe0), ShapeColor::new(0x9e, 0x9e, 0x9e))
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Center point in world coordinates.
    fn center(&self) -> Point;

    /// Move the shape so its center lies at `center`.
    fn set_center(&mut self, center: Point);

    /// Geometric bounding box in world coordinates (outline excluded).
    fn bounds(&self) -> Rect;

    /// Check if a world point lies inside the shape.
    fn contains(&self, point: Point) -> bool;

    fn style(&self) -> &ShapeStyle;

    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// A shape on the canvas.
///
/// Squares are rectangles whose width equals their height; there is no
/// separate variant for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn center(&self) -> Point {
        match self {
            Shape::Circle(s) => s.center(),
            Shape::Rectangle(s) => s.center(),
        }
    }

    pub fn set_center(&mut self, center: Point) {
        match self {
            Shape::Circle(s) => s.set_center(center),
            Shape::Rectangle(s) => s.set_center(center),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Circle(s) => s.contains(point),
            Shape::Rectangle(s) => s.contains(point),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Circle(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Circle(s) => s.style_mut(),
            Shape::Rectangle(s) => s.style_mut(),
        }
    }

    /// Bounding box grown by `half_outline` on every side, i.e. the extent
    /// of the visible outline. Grid snapping aligns this box.
    pub fn outer_bounds(&self, half_outline: f64) -> Rect {
        self.bounds().inflate(half_outline, half_outline)
    }

    /// Outer bounds the shape would have if its center were `center`.
    pub fn outer_bounds_at(&self, center: Point, half_outline: f64) -> Rect {
        let offset = center - self.center();
        self.outer_bounds(half_outline) + offset
    }

    /// Return a copy moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Shape {
        let mut shape = self.clone();
        shape.set_center(self.center() + delta);
        shape
    }

    /// Human-readable kind, distinguishing squares from other rectangles.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "Circle",
            Shape::Rectangle(r) if r.is_square() => "Square",
            Shape::Rectangle(_) => "Rect",
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}
