//! Renderer trait abstraction.

use gridboard_core::canvas::Canvas;
use kurbo::Size;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport size: {0}x{1}")]
    InvalidViewport(f64, f64),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Grid display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// No grid (plain background).
    None,
    /// Full grid lines.
    #[default]
    Lines,
    /// Only intersection dots.
    Dots,
}

impl GridStyle {
    /// Cycle to the next grid style.
    pub fn next(self) -> Self {
        match self {
            GridStyle::None => GridStyle::Lines,
            GridStyle::Lines => GridStyle::Dots,
            GridStyle::Dots => GridStyle::None,
        }
    }

    /// Get display name for this grid style.
    pub fn name(self) -> &'static str {
        match self {
            GridStyle::None => "None",
            GridStyle::Lines => "Lines",
            GridStyle::Dots => "Dots",
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Viewport size in screen pixels.
    pub viewport_size: Size,
    /// Grid display style.
    pub grid_style: GridStyle,
    /// Grid line color.
    pub grid_color: Color,
    /// Fill of the selection handles.
    pub handle_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas, viewport_size: Size) -> Self {
        Self {
            canvas,
            viewport_size,
            grid_style: GridStyle::Lines,
            grid_color: Color::from_rgba8(0, 0, 0, 255),
            handle_color: Color::from_rgba8(0, 0, 0, 255),
        }
    }

    /// Set the grid style.
    pub fn with_grid(mut self, style: GridStyle) -> Self {
        self.grid_style = style;
        self
    }

    /// Set the grid line color.
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    /// Fails when the viewport has no drawable area.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(RendererError::InvalidViewport(width, height))
        }
    }
}

/// Trait for rendering backends.
///
/// Rendering only reads the canvas; it never changes shapes, selection or
/// interaction state.
pub trait Renderer {
    /// Build the drawing commands for a frame.
    fn render(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_style_cycle() {
        assert_eq!(GridStyle::default(), GridStyle::Lines);
        assert_eq!(GridStyle::Lines.next(), GridStyle::Dots);
        assert_eq!(GridStyle::Dots.next(), GridStyle::None);
        assert_eq!(GridStyle::None.next().name(), "Lines");
    }

    #[test]
    fn test_validate_viewport() {
        let canvas = Canvas::new();
        assert!(RenderContext::new(&canvas, Size::new(800.0, 600.0)).validate().is_ok());
        let err = RenderContext::new(&canvas, Size::new(0.0, 600.0)).validate().unwrap_err();
        assert!(matches!(err, RendererError::InvalidViewport(..)));
        assert!(RenderContext::new(&canvas, Size::new(f64::NAN, 1.0)).validate().is_err());
    }
}
