//! GridBoard Render Library
//!
//! Renderer abstraction for GridBoard and a backend-independent
//! display-list implementation.

mod display_list;
mod renderer;

pub use display_list::{DisplayList, DrawCommand};
pub use renderer::{GridStyle, RenderContext, RenderResult, Renderer, RendererError};
