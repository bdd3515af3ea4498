//! Canvas state and event dispatch.

use crate::clipboard::Clipboard;
use crate::config::EngineConfig;
use crate::diagnostics::{DiagnosticSink, LogSink, ReportKind, ShapeReport};
use crate::drag;
use crate::input::{KeyEvent, Modifiers, MouseButton, PointerEvent};
use crate::interaction::InteractionMode;
use crate::resize;
use crate::selection::{Selection, hit_test_handles};
use crate::shapes::{Shape, ShapeColor, ShapeStyle, STROKE_DARKEN_AMOUNT};
use crate::snap::GridSnap;
use crate::store::ShapeStore;
use crate::tools::ToolKind;
use crate::viewport::{Viewport, wheel_zoom_factor};
use kurbo::Point;

/// Swatches offered by the color panel.
pub const BASIC_COLORS: [ShapeColor; 8] = [
    ShapeColor::new(0xff, 0x00, 0x00),
    ShapeColor::new(0x00, 0xff, 0x00),
    ShapeColor::new(0x00, 0x00, 0xff),
    ShapeColor::new(0xff, 0xff, 0x00),
    ShapeColor::new(0xff, 0x00, 0xff),
    ShapeColor::new(0x00, 0xff, 0xff),
    ShapeColor::black(),
    ShapeColor::white(),
];

/// Horizontal distance from the shape center to the panel's left edge, in pixels.
const PANEL_OFFSET_X: f64 = 150.0;
/// Vertical distance from the shape's top edge to the panel's top edge, in pixels.
const PANEL_OFFSET_Y: f64 = 100.0;

/// State of the color panel shown next to the selected shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPanel {
    /// Fill shown on the selected shape while the panel is open.
    pub preview: ShapeColor,
    /// Outline derived from the preview fill.
    pub preview_stroke: ShapeColor,
    /// Top-left corner of the panel in screen coordinates.
    pub anchor: Point,
}

/// The interactive canvas: shapes, view and pointer state.
pub struct Canvas {
    store: ShapeStore,
    /// Pan/zoom of the view.
    pub viewport: Viewport,
    selection: Selection,
    mode: InteractionMode,
    clipboard: Clipboard,
    tool: ToolKind,
    /// Preview fill while the color panel is open.
    panel: Option<ShapeColor>,
    config: EngineConfig,
    snap: GridSnap,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an empty canvas; reports go to the `log` facade.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            store: ShapeStore::new(),
            viewport: Viewport::with_limits(config.min_zoom, config.max_zoom),
            selection: Selection::new(),
            mode: InteractionMode::Idle,
            clipboard: Clipboard::new(config.paste_offset),
            tool: ToolKind::default(),
            panel: None,
            snap: GridSnap::from_config(&config),
            config,
            sink: Box::new(LogSink),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        self.store.as_slice()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.store.get(self.selection.index()?)
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Select a shape, or clear the selection with `None`.
    ///
    /// Selecting opens the color panel with the shape's fill as preview;
    /// clearing hides it.
    pub fn select(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.store.len());
        self.selection.select(index);
        self.open_panel();
    }

    pub fn clear_selection(&mut self) {
        self.select(None);
    }

    /// Feed a pointer event to the matching handler.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Wheel {
                position,
                delta_y,
                modifiers,
            } => {
                self.wheel(position, delta_y, modifiers);
            }
            PointerEvent::DoubleClick { position } => {
                self.double_click(position);
            }
        }
    }

    /// Pointer pressed at a screen position.
    pub fn pointer_down(&mut self, screen: Point, button: MouseButton) {
        if !self.mode.is_idle() {
            // A release was missed; never run two interactions at once.
            self.pointer_up();
        }
        let world = self.viewport.to_world(screen);

        match button {
            MouseButton::Middle => self.start_panning(screen),
            MouseButton::Right => {
                let hit = self.store.hit_test(world);
                self.select(hit);
            }
            MouseButton::Left => {
                if self.tool != ToolKind::Delete && self.try_start_resize(screen, world) {
                    return;
                }
                match self.store.hit_test(world) {
                    Some(index) if self.tool == ToolKind::Delete => self.remove_shape(index),
                    Some(index) => self.start_drag(index, world),
                    None => {
                        self.clear_selection();
                        self.start_panning(screen);
                    }
                }
            }
        }
    }

    /// Pointer moved to a screen position.
    pub fn pointer_move(&mut self, screen: Point) {
        let world = self.viewport.to_world(screen);
        match self.mode {
            InteractionMode::Idle => {}
            InteractionMode::Panning { last_screen } => {
                self.viewport.pan(screen - last_screen);
                self.mode = InteractionMode::Panning { last_screen: screen };
            }
            InteractionMode::Dragging { .. } => {
                self.panel = None;
                drag::update(&self.mode, &mut self.store, world, &self.snap);
            }
            InteractionMode::Resizing { .. } => {
                resize::update(&self.mode, &mut self.store, world, &self.snap);
            }
        }
    }

    /// Pointer released, on or off the canvas. Ends any interaction.
    pub fn pointer_up(&mut self) {
        let kind = match self.mode.end() {
            InteractionMode::Dragging { .. } => ReportKind::Moved,
            InteractionMode::Resizing { .. } => ReportKind::Resized,
            InteractionMode::Idle | InteractionMode::Panning { .. } => return,
        };
        if let Some(index) = self.selection.index() {
            self.open_panel();
            self.report(kind, index);
        }
    }

    /// Wheel scrolled over a screen position. Zooms about the cursor when
    /// the command modifier is held; returns whether the view changed.
    pub fn wheel(&mut self, screen: Point, delta_y: f64, modifiers: Modifiers) -> bool {
        if !modifiers.command() {
            return false;
        }
        let factor = wheel_zoom_factor(delta_y, self.config.zoom_intensity);
        self.viewport.zoom_at(screen, factor);
        log::debug!("Zoom {:.3} at ({}, {})", self.viewport.scale(), screen.x, screen.y);
        true
    }

    /// Double-click at a screen position: place a shape with the active tool.
    ///
    /// Returns the index of the new shape.
    pub fn double_click(&mut self, screen: Point) -> Option<usize> {
        let world = self.viewport.to_world(screen);
        let shape = self.tool.create_shape(world, &self.config)?;
        let index = self.store.push(shape);
        self.select(Some(index));
        self.report(ReportKind::Created, index);
        Some(index)
    }

    /// Keyboard shortcut handling. Returns whether the key was consumed.
    pub fn key(&mut self, event: &KeyEvent) -> bool {
        if event.is_command("0") {
            self.reset_view();
            true
        } else if event.is_command("c") {
            self.copy_selection()
        } else if event.is_command("v") {
            self.paste().is_some()
        } else {
            false
        }
    }

    /// Restore scale 1 and no offset.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Copy the selected shape. Returns false when nothing is selected.
    pub fn copy_selection(&mut self) -> bool {
        let Some(shape) = self.selected_shape() else {
            return false;
        };
        let shape = shape.clone();
        self.clipboard.copy(&shape);
        log::debug!("Copied {}", shape.kind_name());
        true
    }

    /// Paste the clipboard shape on top of all others and select it.
    pub fn paste(&mut self) -> Option<usize> {
        let shape = self.clipboard.paste()?;
        let index = self.store.push(shape);
        self.select(Some(index));
        Some(index)
    }

    /// Switch tools; the selection is cleared.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.clear_selection();
        log::debug!("Tool set to {}", tool.name());
    }

    /// Remove every shape.
    pub fn clear_all(&mut self) {
        self.mode.end();
        self.store.clear();
        self.clear_selection();
    }

    /// Remove the topmost shape under a screen position.
    pub fn delete_shape_at(&mut self, screen: Point) -> bool {
        let world = self.viewport.to_world(screen);
        match self.store.hit_test(world) {
            Some(index) => {
                self.remove_shape(index);
                true
            }
            None => false,
        }
    }

    /// Current color panel, or `None` while it is hidden.
    pub fn color_panel(&self) -> Option<ColorPanel> {
        let preview = self.panel?;
        let shape = self.selected_shape()?;
        let center = self.viewport.to_screen(shape.center());
        let top = self.viewport.to_screen(Point::new(shape.center().x, shape.bounds().y0));
        Some(ColorPanel {
            preview,
            preview_stroke: preview.darken(STROKE_DARKEN_AMOUNT),
            anchor: Point::new(center.x - PANEL_OFFSET_X, top.y - PANEL_OFFSET_Y),
        })
    }

    /// Show `color` on the selected shape without applying it.
    pub fn preview_color(&mut self, color: ShapeColor) {
        if self.panel.is_some() && !self.selection.is_empty() {
            self.panel = Some(color);
        }
    }

    /// Apply `color` to the selected shape; its outline becomes a darker
    /// shade of the same color. Returns false when nothing is selected.
    pub fn commit_color(&mut self, color: ShapeColor) -> bool {
        let Some(index) = self.selection.index() else {
            return false;
        };
        let Some(mut shape) = self.store.get(index).cloned() else {
            return false;
        };
        *shape.style_mut() = ShapeStyle::from_fill(color);
        self.store.replace(index, shape);
        if self.panel.is_some() {
            self.panel = Some(color);
        }
        true
    }

    /// Style a shape is drawn with, including the color preview.
    pub fn display_style(&self, index: usize) -> Option<ShapeStyle> {
        let shape = self.store.get(index)?;
        match self.panel {
            Some(preview) if self.selection.is_selected(index) => {
                Some(ShapeStyle::from_fill(preview))
            }
            _ => Some(*shape.style()),
        }
    }

    fn open_panel(&mut self) {
        self.panel = self.selected_shape().map(|shape| shape.style().fill);
    }

    fn start_panning(&mut self, screen: Point) {
        self.mode = InteractionMode::Panning { last_screen: screen };
    }

    fn start_drag(&mut self, index: usize, world: Point) {
        if let Some(mode) = drag::start(&mut self.store, index, world) {
            self.select(mode.target());
            self.mode = mode;
        }
    }

    fn try_start_resize(&mut self, screen: Point, world: Point) -> bool {
        let Some(index) = self.selection.index() else {
            return false;
        };
        let Some(shape) = self.store.get(index) else {
            return false;
        };
        let size = self.config.handle_size;
        let Some(corner) = hit_test_handles(shape, screen, &self.viewport, size) else {
            return false;
        };
        match resize::start(&self.store, index, corner, world) {
            Some(mode) => {
                self.panel = None;
                self.mode = mode;
                true
            }
            None => false,
        }
    }

    /// Removing shifts the indices above `index`, so any interaction ends.
    fn remove_shape(&mut self, index: usize) {
        self.mode.end();
        if let Some(shape) = self.store.remove(index) {
            log::debug!("Removed {} at index {index}", shape.kind_name());
        }
        self.clear_selection();
    }

    fn report(&mut self, kind: ReportKind, index: usize) {
        if let Some(shape) = self.store.get(index) {
            let report = ShapeReport::from_shape(shape, self.snap.half_outline);
            self.sink.report(kind, &report);
        }
    }
}
