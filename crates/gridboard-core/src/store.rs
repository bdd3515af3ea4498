//! Ordered shape storage and hit-testing.

use crate::shapes::Shape;
use kurbo::Point;

/// All shapes on the canvas, back to front.
///
/// The position of a shape in the store is its z-order: later shapes are
/// drawn on top. Indices are only meaningful until the next reordering or
/// removal.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of all others and return its index.
    pub fn push(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Replace the shape at `index` by value. Returns false if out of range.
    pub fn replace(&mut self, index: usize, shape: Shape) -> bool {
        match self.shapes.get_mut(index) {
            Some(slot) => {
                *slot = shape;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        (index < self.shapes.len()).then(|| self.shapes.remove(index))
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Move a shape to the top of the z-order and return its new index.
    pub fn raise_to_top(&mut self, index: usize) -> Option<usize> {
        let shape = self.remove(index)?;
        Some(self.push(shape))
    }

    /// Index of the topmost shape containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.shapes.iter().rposition(|shape| shape.contains(point))
    }

    /// Shapes in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
