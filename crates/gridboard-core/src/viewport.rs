//! Viewport module for pan/zoom transforms.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Viewport manages the world-to-screen transform of the canvas.
///
/// `screen = world * scale + offset`. The scale is clamped to
/// `[min_scale, max_scale]` and never reaches zero, so the transform is
/// always invertible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Translation in screen units.
    pub offset: Vec2,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::with_limits(0.1, 10.0)
    }
}

impl Viewport {
    /// Create a viewport with the default scale range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an identity viewport with a custom scale range.
    pub fn with_limits(min_scale: f64, max_scale: f64) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0_f64.clamp(min_scale, max_scale),
            min_scale,
            max_scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale directly, clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    /// World-to-screen transform for rendering.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Screen-to-world transform for input handling.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset)
    }

    pub fn to_screen(&self, world: Point) -> Point {
        self.transform() * world
    }

    pub fn to_world(&self, screen: Point) -> Point {
        self.inverse_transform() * screen
    }

    /// Pan by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom by `factor`, keeping the world point under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        let world = self.to_world(anchor);
        self.set_scale(self.scale * factor);
        self.offset = anchor.to_vec2() - world.to_vec2() * self.scale;
    }

    /// Reset to scale 1 with no offset.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.set_scale(1.0);
    }

    /// World rectangle covered by a screen area of `size` at the origin.
    pub fn visible_world_rect(&self, size: Size) -> Rect {
        Rect::from_points(
            self.to_world(Point::ZERO),
            self.to_world(Point::new(size.width, size.height)),
        )
    }
}

/// Zoom factor for a wheel delta; scrolling up (negative delta) zooms in.
pub fn wheel_zoom_factor(delta_y: f64, intensity: f64) -> f64 {
    1.0 - delta_y * intensity
}
