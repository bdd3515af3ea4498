//! Engine configuration.
//!
//! Every field has a default matching the stock canvas, so a configuration
//! file only needs to name the values it changes.

use crate::shapes::{Circle, Rectangle, ShapeStyle};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunable constants of the geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Spacing between grid lines in world units.
    pub grid_size: f64,
    /// Maximum distance from a grid line at which snapping engages.
    pub snap_threshold: f64,
    /// Half of the rendered outline thickness, in world units.
    pub outline_half_width: f64,
    /// Side of the square resize handles, in screen pixels.
    pub handle_size: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per unit of wheel delta.
    pub zoom_intensity: f64,
    /// Translation applied to each pasted shape.
    pub paste_offset: Vec2,
    /// Radius of circles placed with the circle tool.
    pub circle_radius: f64,
    /// Size of rectangles placed with the rectangle tool.
    pub rect_width: f64,
    pub rect_height: f64,
    /// Side of squares placed with the square tool.
    pub square_size: f64,
    /// Style given to newly placed shapes.
    pub default_style: ShapeStyle,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: crate::snap::GRID_SIZE,
            snap_threshold: crate::snap::SNAP_THRESHOLD,
            outline_half_width: crate::snap::OUTLINE_HALF_WIDTH,
            handle_size: crate::selection::HANDLE_SIZE,
            min_zoom: 0.1,
            max_zoom: 10.0,
            zoom_intensity: 0.0015,
            paste_offset: Vec2::new(40.0, 40.0),
            circle_radius: 46.0,
            rect_width: 192.0,
            rect_height: 92.0,
            square_size: 92.0,
            default_style: ShapeStyle::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            log::warn!("Rejected engine config: {err}");
            return Err(err);
        }
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Check that the values describe a usable engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if !(self.snap_threshold >= 0.0 && self.snap_threshold < self.grid_size / 2.0) {
            return Err(ConfigError::Invalid(format!(
                "snap_threshold must be in [0, grid_size / 2), got {}",
                self.snap_threshold
            )));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom range [{}, {}] is empty or not positive",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.outline_half_width < 0.0 || self.handle_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "outline_half_width ({}) must not be negative, handle_size ({}) must be positive",
                self.outline_half_width, self.handle_size
            )));
        }
        if !(self.circle_radius >= Circle::MIN_RADIUS) {
            return Err(ConfigError::Invalid(format!(
                "circle_radius must be at least {}, got {}",
                Circle::MIN_RADIUS,
                self.circle_radius
            )));
        }
        for (name, value) in [
            ("rect_width", self.rect_width),
            ("rect_height", self.rect_height),
            ("square_size", self.square_size),
        ] {
            if !(value >= Rectangle::MIN_SIZE) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be at least {}, got {value}",
                    Rectangle::MIN_SIZE
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            EngineConfig::from_json(r#"{ "grid_size": 50.0, "snap_threshold": 5.0 }"#).unwrap();
        assert!((config.grid_size - 50.0).abs() < f64::EPSILON);
        assert!((config.snap_threshold - 5.0).abs() < f64::EPSILON);
        assert!((config.circle_radius - 46.0).abs() < f64::EPSILON);
        assert_eq!(config.default_style, ShapeStyle::default());
    }

    #[test]
    fn test_style_from_json() {
        let config = EngineConfig::from_json(
            r##"{ "default_style": { "fill": "#ff0000", "stroke": "#cc0000" } }"##,
        )
        .unwrap();
        assert_eq!(config.default_style.fill.to_hex(), "#ff0000");
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err =
            EngineConfig::from_json(r#"{ "grid_size": 10.0, "snap_threshold": 7.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_zoom_range() {
        let err = EngineConfig::from_json(r#"{ "min_zoom": 2.0, "max_zoom": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_shapes_below_minimum() {
        let err = EngineConfig::from_json(r#"{ "circle_radius": 2.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("circle_radius")));

        let err = EngineConfig::from_json(r#"{ "square_size": 9.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("square_size")));

        assert!(EngineConfig::from_json(r#"{ "rect_width": 10.0, "rect_height": 10.0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EngineConfig::from_json("{ grid_size").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "handle_size": 16.0 }}"#).unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert!((config.handle_size - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
