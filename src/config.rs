//! Picker configuration.
//!
//! Handle sizes, square dimensions and the resize-handle adjustment used by the
//! mappers. With the `config` feature the configuration can be loaded from
//! YAML, with every field falling back to its default.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::{Error, Result};

/// Gradient shown when the host supplies no stops at all.
pub const DEFAULT_GRADIENT: &str =
    "linear-gradient(90deg, rgba(96,93,93,1) 0%, rgba(255,255,255,1) 100%)";

/// Geometry and behavior settings shared by the picker widgets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct PickerConfig {
    /// Size of the square's draggable cross, in pixels.
    #[cfg_attr(feature = "config", serde(default = "default_cross_size"))]
    pub cross_size: f32,

    /// Size of a slider bar handle, in pixels.
    #[cfg_attr(feature = "config", serde(default = "default_bar_size"))]
    pub bar_size: f32,

    /// Rendered width of the saturation/value square.
    #[cfg_attr(feature = "config", serde(default = "default_square_width"))]
    pub square_width: f32,

    /// Rendered height of the saturation/value square.
    #[cfg_attr(feature = "config", serde(default = "default_square_height"))]
    pub square_height: f32,

    /// Class attribute that marks the resize-handle variant.
    #[cfg_attr(feature = "config", serde(default = "default_resize_handle_class"))]
    pub resize_handle_class: String,

    /// Left adjustment applied to resize-handle bounds.
    #[cfg_attr(feature = "config", serde(default = "default_resize_handle_offset"))]
    pub resize_handle_offset: f32,

    /// Minimum spacing between handled pointer moves, in milliseconds.
    #[cfg_attr(feature = "config", serde(default = "default_move_throttle_ms"))]
    pub move_throttle_ms: f64,

    /// Color handed out by `ColorValue::current` when a value has no usable
    /// color.
    #[cfg_attr(feature = "config", serde(default = "default_gradient"))]
    pub default_gradient: String,
}

fn default_cross_size() -> f32 {
    18.0
}
fn default_bar_size() -> f32 {
    18.0
}
fn default_square_width() -> f32 {
    294.0
}
fn default_square_height() -> f32 {
    151.0
}
fn default_resize_handle_class() -> String {
    "c-resize ps-rl".to_string()
}
fn default_resize_handle_offset() -> f32 {
    15.0
}
fn default_move_throttle_ms() -> f64 {
    16.0
}
fn default_gradient() -> String {
    DEFAULT_GRADIENT.to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            cross_size: default_cross_size(),
            bar_size: default_bar_size(),
            square_width: default_square_width(),
            square_height: default_square_height(),
            resize_handle_class: default_resize_handle_class(),
            resize_handle_offset: default_resize_handle_offset(),
            move_throttle_ms: default_move_throttle_ms(),
            default_gradient: default_gradient(),
        }
    }
}

impl PickerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "config")]
impl PickerConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::debug!("using default picker config, {} not loaded: {e}", path.display());
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::new();
        assert!((config.cross_size - 18.0).abs() < f32::EPSILON);
        assert!((config.bar_size - 18.0).abs() < f32::EPSILON);
        assert!((config.square_width - 294.0).abs() < f32::EPSILON);
        assert!((config.square_height - 151.0).abs() < f32::EPSILON);
        assert_eq!(config.resize_handle_class, "c-resize ps-rl");
        assert!((config.resize_handle_offset - 15.0).abs() < f32::EPSILON);
        assert_eq!(config.default_gradient, DEFAULT_GRADIENT);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_parse_partial_yaml() {
        let config = PickerConfig::parse("cross_size: 12\nsquare_width: 200\n").unwrap();
        assert!((config.cross_size - 12.0).abs() < f32::EPSILON);
        assert!((config.square_width - 200.0).abs() < f32::EPSILON);
        assert!((config.square_height - 151.0).abs() < f32::EPSILON);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_parse_error_reports_line() {
        let err = PickerConfig::parse("cross_size: 12\nbar_size: [oops\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.yaml");
        std::fs::write(&path, "bar_size: 24\nresize_handle_offset: 10\n").unwrap();

        let config = PickerConfig::load(&path).unwrap();
        assert!((config.bar_size - 24.0).abs() < f32::EPSILON);
        assert!((config.resize_handle_offset - 10.0).abs() < f32::EPSILON);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_load_or_default_missing_file() {
        let config = PickerConfig::load_or_default("/nonexistent/picker.yaml");
        assert_eq!(config, PickerConfig::default());
    }
}
