//! Snap functionality for aligning shape outlines to the grid.
//!
//! Snapping never moves a shape onto a grid intersection; it computes the
//! shortest offset that brings one of the shape's outer edges onto a grid
//! line, and only when that edge is already within the threshold.

use crate::config::EngineConfig;
use kurbo::{Rect, Vec2};

/// Grid size for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 100.0;

/// Maximum distance from a grid line at which snapping engages.
pub const SNAP_THRESHOLD: f64 = 7.0;

/// Half of the rendered outline thickness; outer edges sit this far
/// outside the geometry.
pub const OUTLINE_HALF_WIDTH: f64 = 4.0;

/// Offset that moves `coord` onto the nearest grid line, or 0 when no grid
/// line is within `threshold`.
///
/// The remainder is normalized into `[0, grid_size)` so negative
/// coordinates snap the same way as positive ones.
pub fn snap_offset(coord: f64, grid_size: f64, threshold: f64) -> f64 {
    let m = ((coord % grid_size) + grid_size) % grid_size;
    if m <= threshold {
        -m
    } else if grid_size - m <= threshold {
        grid_size - m
    } else {
        0.0
    }
}

/// Pick the smallest non-zero snap offset among `edges`.
///
/// The first edge wins ties; returns 0 when no edge is close to a line.
pub fn best_snap(edges: &[f64], grid_size: f64, threshold: f64) -> f64 {
    let mut best = 0.0_f64;
    for &edge in edges {
        let d = snap_offset(edge, grid_size, threshold);
        if d != 0.0 && (best == 0.0 || d.abs() < best.abs()) {
            best = d;
        }
    }
    best
}

/// Grid snapping parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnap {
    pub grid_size: f64,
    pub threshold: f64,
    /// Distance by which geometry is inflated to get the snapped outer box.
    pub half_outline: f64,
}

impl Default for GridSnap {
    fn default() -> Self {
        Self::new(GRID_SIZE, SNAP_THRESHOLD)
    }
}

impl GridSnap {
    pub fn new(grid_size: f64, threshold: f64) -> Self {
        Self {
            grid_size,
            threshold,
            half_outline: OUTLINE_HALF_WIDTH,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            threshold: config.snap_threshold,
            half_outline: config.outline_half_width,
        }
    }

    pub fn offset(&self, coord: f64) -> f64 {
        snap_offset(coord, self.grid_size, self.threshold)
    }

    pub fn best(&self, edges: &[f64]) -> f64 {
        best_snap(edges, self.grid_size, self.threshold)
    }

    /// Rigid translation that snaps an outer bounding box.
    ///
    /// Both edges of each axis compete; the resulting delta moves the whole
    /// box, so its size is unchanged.
    pub fn translation_for(&self, outer: Rect) -> Vec2 {
        Vec2::new(self.best(&[outer.x0, outer.x1]), self.best(&[outer.y0, outer.y1]))
    }

    /// Snap `coord` onto a grid line if it is within the threshold.
    pub fn snap(&self, coord: f64) -> f64 {
        coord + self.offset(coord)
    }
}
