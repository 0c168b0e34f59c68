//! Geometric primitives for widget-local coordinates.
//!
//! Provides the point and rectangle types shared by the pointer, slider and
//! square mappers, plus the clamping helper all of them are built on.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by position and size.
///
/// Used as the on-screen bounds of a widget: `x` is the left edge and `y` the
/// top edge in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Zero-sized rectangle at the origin (an unmounted element).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.y
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: an inverted range resolves to
/// `min`, and NaN resolves to `min`.
#[must_use]
pub fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() || value < min || min > max {
        min
    } else if value > max {
        max
    } else {
        value
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Clamping is idempotent.
        #[test]
        fn prop_clamp_idempotent(
            value in -1000.0f32..1000.0,
            min in -500.0f32..0.0,
            span in 0.0f32..500.0
        ) {
            let max = min + span;
            let once = clamp_range(value, min, max);
            prop_assert_eq!(clamp_range(once, min, max), once);
            prop_assert!(once >= min && once <= max);
        }

        /// An in-range value is returned unchanged.
        #[test]
        fn prop_clamp_in_range_unchanged(min in -500.0f32..0.0, span in 0.0f32..500.0, t in 0.0f32..=1.0) {
            let max = min + span;
            let value = (min + span * t).min(max);
            prop_assert_eq!(clamp_range(value, min, max), value);
        }
    }
}
