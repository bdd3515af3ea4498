//! Backend-independent renderer that records draw commands.

use crate::renderer::{GridStyle, RenderContext, RenderResult, Renderer};
use gridboard_core::selection::corner_handles;
use gridboard_core::shapes::Shape;
use kurbo::{Affine, Point, Rect};
use peniko::Color;

/// Outline width of circles, in world units.
pub const CIRCLE_STROKE_WIDTH: f64 = 4.0;
/// Outline width of rectangles, in world units.
pub const RECT_STROKE_WIDTH: f64 = 8.0;
/// Width of grid lines, in world units.
const GRID_LINE_WIDTH: f64 = 0.5;
/// Radius of grid dots, in world units.
const GRID_DOT_RADIUS: f64 = 1.5;
/// Upper bound on grid lines per axis in one frame.
pub const MAX_GRID_LINES: usize = 1000;

/// A single drawing operation.
///
/// Grid and shape commands are in world coordinates and are drawn through
/// [`DisplayList::transform`]; handles are already in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    GridLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    GridDot {
        center: Point,
        radius: f64,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    Rect {
        rect: Rect,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    /// Resize handle square in screen coordinates.
    Handle { rect: Rect, fill: Color },
}

/// Renderer producing a flat list of [`DrawCommand`]s per frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    /// World-to-screen transform of the last frame.
    pub transform: Affine,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last frame in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn render_grid(&mut self, ctx: &RenderContext) {
        let grid_size = ctx.canvas.config().grid_size;
        let visible = ctx.canvas.viewport.visible_world_rect(ctx.viewport_size);
        let color = ctx.grid_color;
        let start_x = (visible.x0 / grid_size).floor() * grid_size;
        let start_y = (visible.y0 / grid_size).floor() * grid_size;
        let columns = grid_steps(start_x, visible.x1, grid_size);
        let rows = grid_steps(start_y, visible.y1, grid_size);

        match ctx.grid_style {
            GridStyle::None => {}
            GridStyle::Lines => {
                for i in 0..columns {
                    let x = start_x + i as f64 * grid_size;
                    self.commands.push(DrawCommand::GridLine {
                        from: Point::new(x, visible.y0),
                        to: Point::new(x, visible.y1),
                        color,
                        width: GRID_LINE_WIDTH,
                    });
                }
                for j in 0..rows {
                    let y = start_y + j as f64 * grid_size;
                    self.commands.push(DrawCommand::GridLine {
                        from: Point::new(visible.x0, y),
                        to: Point::new(visible.x1, y),
                        color,
                        width: GRID_LINE_WIDTH,
                    });
                }
            }
            GridStyle::Dots => {
                for i in 0..columns {
                    let x = start_x + i as f64 * grid_size;
                    for j in 0..rows {
                        self.commands.push(DrawCommand::GridDot {
                            center: Point::new(x, start_y + j as f64 * grid_size),
                            radius: GRID_DOT_RADIUS,
                            color,
                        });
                    }
                }
            }
        }
    }

    fn render_shape(&mut self, ctx: &RenderContext, index: usize, shape: &Shape) {
        let style = ctx.canvas.display_style(index).unwrap_or(*shape.style());
        let fill = Color::from(style.fill);
        let stroke = Color::from(style.stroke);
        let command = match shape {
            Shape::Circle(circle) => DrawCommand::Circle {
                center: circle.center,
                radius: circle.radius(),
                fill,
                stroke,
                stroke_width: CIRCLE_STROKE_WIDTH,
            },
            Shape::Rectangle(_) => DrawCommand::Rect {
                rect: shape.bounds(),
                fill,
                stroke,
                stroke_width: RECT_STROKE_WIDTH,
            },
        };
        self.commands.push(command);
    }

    fn render_handles(&mut self, ctx: &RenderContext) {
        let Some(shape) = ctx.canvas.selected_shape() else {
            return;
        };
        let size = ctx.canvas.config().handle_size;
        for handle in corner_handles(shape) {
            self.commands.push(DrawCommand::Handle {
                rect: handle.screen_rect(&ctx.canvas.viewport, size),
                fill: ctx.handle_color,
            });
        }
    }
}

/// Number of grid lines from `start` up to (excluding) `end`.
fn grid_steps(start: f64, end: f64, step: f64) -> usize {
    let steps = ((end - start) / step).ceil();
    if steps.is_finite() && steps > 0.0 {
        (steps as usize).min(MAX_GRID_LINES)
    } else {
        0
    }
}

impl Renderer for DisplayList {
    fn render(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.commands.clear();
        self.transform = ctx.canvas.viewport.transform();

        self.render_grid(ctx);
        for (index, shape) in ctx.canvas.shapes().iter().enumerate() {
            self.render_shape(ctx, index, shape);
        }
        self.render_handles(ctx);

        log::trace!("Display list built with {} commands", self.commands.len());
        Ok(())
    }
}
