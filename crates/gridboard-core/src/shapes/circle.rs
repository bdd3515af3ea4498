//! Circle shape.

use super::{ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::Serialize;

/// A circle described by its center and radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Smallest radius a circle can have.
    pub const MIN_RADIUS: f64 = 5.0;

    /// Create a new circle. The radius is clamped to [`Self::MIN_RADIUS`].
    pub fn new(center: Point, radius: f64, style: ShapeStyle) -> Self {
        Self {
            center,
            radius: radius.max(Self::MIN_RADIUS),
            style,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius, clamped to [`Self::MIN_RADIUS`].
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(Self::MIN_RADIUS);
    }
}

impl ShapeTrait for Circle {
    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn contains(&self, point: Point) -> bool {
        (point - self.center).hypot2() <= self.radius * self.radius
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new(Point::new(100.0, 100.0), 46.0, ShapeStyle::default());
        assert!((circle.radius() - 46.0).abs() < f64::EPSILON);
        assert_eq!(circle.center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_radius_clamped() {
        let mut circle = Circle::new(Point::ZERO, 1.0, ShapeStyle::default());
        assert!((circle.radius() - Circle::MIN_RADIUS).abs() < f64::EPSILON);
        circle.set_radius(-20.0);
        assert!((circle.radius() - Circle::MIN_RADIUS).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains() {
        let circle = Circle::new(Point::new(0.0, 0.0), 10.0, ShapeStyle::default());
        assert!(circle.contains(Point::new(0.0, 0.0)));
        assert!(circle.contains(Point::new(10.0, 0.0))); // On the boundary
        assert!(circle.contains(Point::new(6.0, 8.0)));
        assert!(!circle.contains(Point::new(8.0, 8.0))); // Inside the box, outside the disc
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(200.0, 200.0), 40.0, ShapeStyle::default());
        assert_eq!(circle.bounds(), Rect::new(160.0, 160.0, 240.0, 240.0));
    }
}
