//! GridBoard Core Library
//!
//! Platform-agnostic geometry engine for the GridBoard diagramming canvas:
//! viewport transforms, hit-testing, grid snapping and the drag/resize
//! interaction state machines.

pub mod canvas;
pub mod clipboard;
pub mod config;
pub mod diagnostics;
pub mod drag;
pub mod input;
pub mod interaction;
pub mod resize;
pub mod selection;
pub mod shapes;
pub mod snap;
pub mod store;
pub mod tools;
pub mod viewport;

pub use canvas::{Canvas, ColorPanel, BASIC_COLORS};
pub use clipboard::Clipboard;
pub use config::{ConfigError, EngineConfig};
pub use diagnostics::{DiagnosticSink, Dimensions, LogSink, RecordingSink, ReportKind, ShapeReport};
pub use input::{KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use interaction::InteractionMode;
pub use selection::{Corner, Handle, Selection};
pub use shapes::{Circle, ColorParseError, Rectangle, Shape, ShapeColor, ShapeStyle};
pub use snap::{GridSnap, GRID_SIZE, OUTLINE_HALF_WIDTH, SNAP_THRESHOLD};
pub use store::ShapeStore;
pub use tools::ToolKind;
pub use viewport::Viewport;
