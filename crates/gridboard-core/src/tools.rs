//! Tool selection and shape placement.

use crate::config::EngineConfig;
use crate::shapes::{Circle, Rectangle, Shape};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Select,
    Circle,
    Rectangle,
    Square,
    /// Clicking a shape removes it.
    Delete,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Select,
        ToolKind::Circle,
        ToolKind::Rectangle,
        ToolKind::Square,
        ToolKind::Delete,
    ];

    /// Whether double-clicking with this tool places a shape.
    pub fn is_placement(self) -> bool {
        matches!(self, ToolKind::Circle | ToolKind::Rectangle | ToolKind::Square)
    }

    /// Get the display name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Circle => "Circle",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Square => "Square",
            ToolKind::Delete => "Delete",
        }
    }

    /// Build the shape this tool places at `center`, sized and styled per
    /// `config`. Returns `None` for tools that place nothing.
    pub fn create_shape(self, center: Point, config: &EngineConfig) -> Option<Shape> {
        let style = config.default_style;
        let shape = match self {
            ToolKind::Circle => Circle::new(center, config.circle_radius, style).into(),
            ToolKind::Rectangle => {
                Rectangle::new(center, config.rect_width, config.rect_height, style).into()
            }
            ToolKind::Square => Rectangle::square(center, config.square_size, style).into(),
            ToolKind::Select | ToolKind::Delete => return None,
        };
        Some(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool() {
        assert_eq!(ToolKind::default(), ToolKind::Select);
    }

    #[test]
    fn test_placement_tools() {
        let placing: Vec<_> = ToolKind::ALL.into_iter().filter(|t| t.is_placement()).collect();
        assert_eq!(placing, vec![ToolKind::Circle, ToolKind::Rectangle, ToolKind::Square]);
    }

    #[test]
    fn test_create_default_shapes() {
        let config = EngineConfig::default();
        let at = Point::new(100.0, 100.0);

        let Some(Shape::Circle(circle)) = ToolKind::Circle.create_shape(at, &config) else {
            panic!("expected a circle");
        };
        assert_eq!(circle.center, at);
        assert!((circle.radius() - 46.0).abs() < f64::EPSILON);

        let Some(Shape::Rectangle(rect)) = ToolKind::Rectangle.create_shape(at, &config) else {
            panic!("expected a rectangle");
        };
        assert!((rect.width() - 192.0).abs() < f64::EPSILON);
        assert!((rect.height() - 92.0).abs() < f64::EPSILON);

        let square = ToolKind::Square.create_shape(at, &config).unwrap();
        assert_eq!(square.kind_name(), "Square");
    }

    #[test]
    fn test_non_placement_tools_create_nothing() {
        let config = EngineConfig::default();
        assert!(ToolKind::Select.create_shape(Point::ZERO, &config).is_none());
        assert!(ToolKind::Delete.create_shape(Point::ZERO, &config).is_none());
    }
}
