//! # Gradient-Picker
//!
//! The math behind a browser color picker: pointer clamping, slider values,
//! the saturation/value square and CSS gradient strings.
//!
//! Everything here is a pure function or a small state machine driven by the
//! host's events. The host measures elements, forwards events and applies the
//! returned colors; nothing in this crate touches the DOM outside the `wasm`
//! bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use gradient_picker::prelude::*;
//!
//! let gradient = Gradient::linear(
//!     90,
//!     vec![ColorStop::new("red", 50.0), ColorStop::new("blue", 0.0)],
//! );
//! assert_eq!(gradient.to_css_string(), "linear-gradient(90deg, blue 0%, red 50%)");
//!
//! let config = PickerConfig::default();
//! let bounds = Rect::new(0.0, 0.0, 294.0, 151.0);
//! let pos = picker_position(&PointerEvent::mouse(500.0, 500.0), bounds, config.cross_size);
//! assert_eq!(pos, Point::new(285.0, 142.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: Load [`PickerConfig`](config::PickerConfig) from YAML
//! - `wasm`: JavaScript bindings
//! - `full`: All features except `wasm`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and CSS color conversions.
pub mod color;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Picker configuration.
pub mod config;

// ============================================================================
// Input Modules
// ============================================================================

/// Element bounds resolution.
pub mod bounds;

/// Pointer events and widget-local positions.
pub mod pointer;

/// Rate limiting for pointer moves.
pub mod throttle;

// ============================================================================
// Widget Modules
// ============================================================================

/// Hue and opacity bars.
pub mod slider;

/// Saturation/value square.
pub mod square;

/// Gradient descriptors and CSS strings.
pub mod gradient;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for gradient-picker operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use gradient_picker::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bounds::{safe_bounds, ElementGeometry, StaticElement};
    pub use crate::color::{Hsva, Rgba};
    pub use crate::config::{PickerConfig, DEFAULT_GRADIENT};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{clamp_range, Point, Rect};
    pub use crate::gradient::{
        gradient_details, shorthand_degrees, ColorStop, ColorValue, CurrentColor, Direction,
        Gradient, GradientDetails, GradientKind, Orientation, FALLBACK_COLOR,
    };
    pub use crate::pointer::{picker_position, PointerEvent, PointerKind, TouchPoint};
    pub use crate::slider::{handle_offset, handle_value, BarKind};
    pub use crate::square::{square_sv, square_xy, SquareChange, SquareGesture};
    pub use crate::throttle::Throttle;
}

// ============================================================================
// Tests
// ============================================================================
