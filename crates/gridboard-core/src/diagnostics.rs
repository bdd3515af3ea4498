//! Shape reports emitted after creation, moves and resizes.
//!
//! Reports describe the visible extent of a shape, outline included, so a
//! circle of radius 46 is reported with radius 50 and a 192 x 92 rectangle
//! as 200 x 100 starting at its outer top-left corner.

use crate::shapes::Shape;
use kurbo::Point;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// What happened to the reported shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Created,
    Moved,
    Resized,
}

/// Reported size of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dimensions {
    Radius { radius: f64 },
    Size { width: f64, height: f64 },
}

/// Snapshot of a shape's outer geometry and colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    /// "Circle", "Square" or "Rect".
    pub kind: &'static str,
    /// Circle center, or outer top-left corner of a rectangle.
    pub position: Point,
    pub dimensions: Dimensions,
    pub fill: String,
    pub stroke: String,
}

impl ShapeReport {
    /// Describe `shape` with an outline of half-width `half_outline`.
    pub fn from_shape(shape: &Shape, half_outline: f64) -> Self {
        let (position, dimensions) = match shape {
            Shape::Circle(circle) => (
                circle.center,
                Dimensions::Radius {
                    radius: circle.radius() + half_outline,
                },
            ),
            Shape::Rectangle(_) => {
                let outer = shape.outer_bounds(half_outline);
                (
                    Point::new(outer.x0, outer.y0),
                    Dimensions::Size {
                        width: outer.width(),
                        height: outer.height(),
                    },
                )
            }
        };
        let style = shape.style();
        Self {
            kind: shape.kind_name(),
            position,
            dimensions,
            fill: style.fill.to_hex(),
            stroke: style.stroke.to_hex(),
        }
    }
}

impl fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object: {} position ({}, {})", self.kind, self.position.x, self.position.y)?;
        match self.dimensions {
            Dimensions::Radius { radius } => write!(f, " radius {radius}")?,
            Dimensions::Size { width, height } => write!(f, " width {width} height {height}")?,
        }
        write!(f, " color {} border_color {}", self.fill, self.stroke)
    }
}

/// Receiver of shape reports.
///
/// Reports are observability only; a sink cannot influence the canvas.
pub trait DiagnosticSink {
    fn report(&mut self, kind: ReportKind, report: &ShapeReport);
}

/// Sink that writes every report to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, kind: ReportKind, report: &ShapeReport) {
        log::info!("{kind:?}: {report}");
    }
}

/// Sink that keeps every report in memory.
///
/// Clones share the same buffer, so a clone can be handed to a canvas while
/// the original is used to read the reports back.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    reports: Rc<RefCell<Vec<(ReportKind, ShapeReport)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports received so far, oldest first.
    pub fn reports(&self) -> Vec<(ReportKind, ShapeReport)> {
        self.reports.borrow().clone()
    }

    pub fn last(&self) -> Option<(ReportKind, ShapeReport)> {
        self.reports.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, kind: ReportKind, report: &ShapeReport) {
        self.reports.borrow_mut().push((kind, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, ShapeStyle};

    #[test]
    fn test_circle_report() {
        let shape: Shape =
            Circle::new(Point::new(100.0, 100.0), 46.0, ShapeStyle::default()).into();
        let report = ShapeReport::from_shape(&shape, 4.0);
        assert_eq!(report.kind, "Circle");
        assert_eq!(report.position, Point::new(100.0, 100.0));
        assert_eq!(report.dimensions, Dimensions::Radius { radius: 50.0 });
        assert_eq!(
            report.to_string(),
            "Object: Circle position (100, 100) radius 50 color #e0e0e0 border_color #9e9e9e"
        );
    }

    #[test]
    fn test_rectangle_report_uses_outer_corner() {
        let shape: Shape =
            Rectangle::new(Point::new(200.0, 100.0), 192.0, 92.0, ShapeStyle::default()).into();
        let report = ShapeReport::from_shape(&shape, 4.0);
        assert_eq!(report.kind, "Rect");
        assert_eq!(report.position, Point::new(100.0, 50.0));
        assert_eq!(
            report.dimensions,
            Dimensions::Size {
                width: 200.0,
                height: 100.0,
            }
        );
    }

    #[test]
    fn test_report_json() {
        let shape: Shape =
            Rectangle::square(Point::new(50.0, 50.0), 92.0, ShapeStyle::default()).into();
        let value = serde_json::to_value(ShapeReport::from_shape(&shape, 4.0)).unwrap();
        assert_eq!(value["kind"], "Square");
        assert_eq!(value["dimensions"]["width"], 100.0);
        assert_eq!(value["position"]["x"], 0.0);
    }

    #[test]
    fn test_recording_sink_shares_buffer() {
        let recorder = RecordingSink::new();
        let mut handle = recorder.clone();
        let shape: Shape = Circle::new(Point::ZERO, 10.0, ShapeStyle::default()).into();

        handle.report(ReportKind::Moved, &ShapeReport::from_shape(&shape, 4.0));

        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.last().map(|(kind, _)| kind), Some(ReportKind::Moved));
        recorder.clear();
        assert!(recorder.is_empty());
    }
}
