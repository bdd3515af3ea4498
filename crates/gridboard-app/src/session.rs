//! Scripted canvas sessions.
//!
//! A session script is JSON lines: one input event per line, in the order
//! a user would produce them. Blank lines and lines starting with `#` are
//! skipped.

use gridboard_core::{
    Canvas, ConfigError, EngineConfig, KeyEvent, Modifiers, MouseButton, Shape, ShapeColor,
    ToolKind, Viewport,
};
use gridboard_render::{DisplayList, GridStyle, RenderContext, Renderer, RendererError};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("Output error: {0}")]
    Output(serde_json::Error),
}

/// One line of a session script. Coordinates are in screen pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Option<MouseButton>,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
    Wheel {
        x: f64,
        y: f64,
        delta_y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    DoubleClick {
        x: f64,
        y: f64,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Tool {
        tool: ToolKind,
    },
    Preview {
        color: ShapeColor,
    },
    Commit {
        color: ShapeColor,
    },
    Delete {
        x: f64,
        y: f64,
    },
    Clear,
}

/// Final state printed at the end of a session.
#[derive(Debug, Serialize)]
pub struct SessionSummary<'a> {
    pub shapes: &'a [Shape],
    pub selection: Option<usize>,
    pub tool: ToolKind,
    pub viewport: &'a Viewport,
    /// Draw commands of the final frame, when rendering was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_commands: Option<usize>,
}

/// A canvas driven by script events.
pub struct Session {
    canvas: Canvas,
    events: usize,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            canvas: Canvas::with_config(config),
            events: 0,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of events applied so far.
    pub fn events(&self) -> usize {
        self.events
    }

    /// Apply a single event to the canvas.
    pub fn apply(&mut self, event: SessionEvent) {
        log::debug!("Event {}: {:?}", self.events, event);
        self.events += 1;
        let canvas = &mut self.canvas;
        match event {
            SessionEvent::Down { x, y, button } => {
                canvas.pointer_down(Point::new(x, y), button.unwrap_or(MouseButton::Left));
            }
            SessionEvent::Move { x, y } => canvas.pointer_move(Point::new(x, y)),
            SessionEvent::Up => canvas.pointer_up(),
            SessionEvent::Wheel {
                x,
                y,
                delta_y,
                modifiers,
            } => {
                canvas.wheel(Point::new(x, y), delta_y, modifiers);
            }
            SessionEvent::DoubleClick { x, y } => {
                canvas.double_click(Point::new(x, y));
            }
            SessionEvent::Key { key, modifiers } => {
                canvas.key(&KeyEvent::new(key, modifiers));
            }
            SessionEvent::Tool { tool } => canvas.set_tool(tool),
            SessionEvent::Preview { color } => canvas.preview_color(color),
            SessionEvent::Commit { color } => {
                canvas.commit_color(color);
            }
            SessionEvent::Delete { x, y } => {
                canvas.delete_shape_at(Point::new(x, y));
            }
            SessionEvent::Clear => canvas.clear_all(),
        }
    }

    /// Parse and apply every event of a script.
    pub fn run(&mut self, reader: impl BufRead) -> Result<(), SessionError> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let event = serde_json::from_str(trimmed).map_err(|source| SessionError::Parse {
                line: index + 1,
                source,
            })?;
            self.apply(event);
        }
        log::info!("Session finished after {} events", self.events);
        Ok(())
    }

    /// Build the display list of the current frame.
    pub fn render(
        &self,
        viewport_size: Size,
        grid: GridStyle,
    ) -> Result<DisplayList, SessionError> {
        let mut list = DisplayList::new();
        list.render(&RenderContext::new(&self.canvas, viewport_size).with_grid(grid))?;
        Ok(list)
    }

    pub fn summary(&self, draw_commands: Option<usize>) -> SessionSummary<'_> {
        SessionSummary {
            shapes: self.canvas.shapes(),
            selection: self.canvas.selection(),
            tool: self.canvas.tool(),
            viewport: &self.canvas.viewport,
            draw_commands,
        }
    }

    /// Summary as pretty-printed JSON.
    pub fn summary_json(&self, draw_commands: Option<usize>) -> Result<String, SessionError> {
        serde_json::to_string_pretty(&self.summary(draw_commands)).map_err(SessionError::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> Session {
        let mut session = Session::new(EngineConfig::default());
        session.run(script.as_bytes()).unwrap();
        session
    }

    #[test]
    fn test_place_and_drag() {
        let session = run(r#"
# place a circle and drag it
{"event": "tool", "tool": "circle"}
{"event": "double_click", "x": 100, "y": 100}
{"event": "tool", "tool": "select"}
{"event": "down", "x": 100, "y": 100}
{"event": "move", "x": 130, "y": 120}
{"event": "up"}
"#);
        assert_eq!(session.events(), 6);
        let shapes = session.canvas().shapes();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].center(), Point::new(130.0, 120.0));
        assert_eq!(session.canvas().selection(), Some(0));
    }

    #[test]
    fn test_copy_paste_and_commit() {
        let session = run(r##"
{"event": "tool", "tool": "square"}
{"event": "double_click", "x": 500, "y": 500}
{"event": "key", "key": "c", "modifiers": {"ctrl": true}}
{"event": "key", "key": "v", "modifiers": {"meta": true}}
{"event": "commit", "color": "#ff0000"}
"##);
        let shapes = session.canvas().shapes();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1].center(), Point::new(540.0, 540.0));
        assert_eq!(shapes[1].style().fill.to_hex(), "#ff0000");
        assert_eq!(shapes[1].style().stroke.to_hex(), "#cc0000");
        assert_eq!(shapes[0].style().fill.to_hex(), "#e0e0e0");
    }

    #[test]
    fn test_wheel_requires_modifier() {
        let session = run(r#"
{"event": "wheel", "x": 400, "y": 300, "delta_y": -100}
{"event": "wheel", "x": 400, "y": 300, "delta_y": -100, "modifiers": {"ctrl": true}}
"#);
        assert!((session.canvas().viewport.scale() - 1.15).abs() < 1e-12);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let mut session = Session::new(EngineConfig::default());
        let err = session
            .run("{\"event\": \"up\"}\n{\"event\": \"jump\"}\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, SessionError::Parse { line: 2, .. }));
        assert_eq!(session.events(), 1);
    }

    #[test]
    fn test_summary_json() {
        let session = run(r#"
{"event": "tool", "tool": "rectangle"}
{"event": "double_click", "x": 200, "y": 100}
"#);
        let list = session.render(Size::new(800.0, 600.0), GridStyle::None).unwrap();
        let json = session.summary_json(Some(list.commands().len())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shapes"][0]["type"], "rectangle");
        assert_eq!(value["shapes"][0]["width"], 192.0);
        assert_eq!(value["selection"], 0);
        assert_eq!(value["tool"], "rectangle");
        // One rectangle plus four handles
        assert_eq!(value["draw_commands"], 5);
    }

    #[test]
    fn test_delete_and_clear() {
        let session = run(r#"
{"event": "tool", "tool": "circle"}
{"event": "double_click", "x": 100, "y": 100}
{"event": "double_click", "x": 400, "y": 100}
{"event": "delete", "x": 100, "y": 100}
"#);
        assert_eq!(session.canvas().shapes().len(), 1);

        let mut session = session;
        session.apply(SessionEvent::Clear);
        assert!(session.canvas().shapes().is_empty());
    }

    #[test]
    fn test_run_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"event": "tool", "tool": "rectangle"}}"#).unwrap();
        writeln!(file, r#"{{"event": "double_click", "x": 10, "y": 10}}"#).unwrap();

        let mut session = Session::new(EngineConfig::default());
        let reader = std::io::BufReader::new(std::fs::File::open(file.path()).unwrap());
        session.run(reader).unwrap();
        assert_eq!(session.canvas().shapes().len(), 1);
    }
}
