//! Linear slider mapping (hue and opacity bars).
//!
//! A bar maps a clamped horizontal pixel position to an integer 0-100 value,
//! which the hue and opacity bars then scale into their own units.

use crate::color::Hsva;
use crate::geometry::{clamp_range, Rect};

/// Pixels of the bar width the handle cannot travel into.
pub const BAR_TRACK_INSET: f32 = 18.0;

/// Which channel a bar edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarKind {
    /// Hue bar, 0-100 maps to 0-360 degrees.
    Hue,
    /// Opacity bar, 0-100 maps to alpha 0-1.
    Opacity,
}

/// Map a client x coordinate to a 0-100 bar value.
///
/// The position is taken relative to the bar's left edge and centered on the
/// handle, clamped into `[0, width - 18]`, then rescaled and rounded. A bar
/// too narrow to have any travel yields 0.
#[must_use]
pub fn handle_value(client_x: f32, bounds: Rect, bar_size: f32) -> u8 {
    let travel = bounds.width - BAR_TRACK_INSET;
    if travel <= 0.0 {
        return 0;
    }

    let pos = client_x - bounds.left() - bar_size / 2.0;
    let bounded = clamp_range(pos, 0.0, travel);
    (bounded / (travel / 100.0)).round().clamp(0.0, 100.0) as u8
}

/// Pixel offset of a bar handle showing `value` (0-100) on a bar `width` wide.
#[must_use]
pub fn handle_offset(value: f32, width: f32) -> f32 {
    let travel = (width - BAR_TRACK_INSET).max(0.0);
    clamp_range(value, 0.0, 100.0) / 100.0 * travel
}

/// Hue in degrees for a 0-100 bar value.
#[must_use]
pub fn hue_from_value(value: f32) -> f32 {
    clamp_range(value, 0.0, 100.0) * 3.6
}

/// Bar value (0-100) for a hue in degrees.
#[must_use]
pub fn value_from_hue(hue: f32) -> u8 {
    (clamp_range(hue, 0.0, 360.0) / 3.6).round() as u8
}

/// Alpha (0-1) for a 0-100 bar value.
#[must_use]
pub fn alpha_from_value(value: f32) -> f32 {
    clamp_range(value, 0.0, 100.0) / 100.0
}

/// Bar value (0-100) for an alpha.
#[must_use]
pub fn value_from_alpha(alpha: f32) -> u8 {
    (clamp_range(alpha, 0.0, 1.0) * 100.0).round() as u8
}

impl BarKind {
    /// Current bar value for `color`.
    #[must_use]
    pub fn value_of(self, color: Hsva) -> u8 {
        match self {
            BarKind::Hue => value_from_hue(color.h),
            BarKind::Opacity => value_from_alpha(color.a),
        }
    }

    /// `color` with this bar's channel set from a 0-100 value.
    #[must_use]
    pub fn apply(self, value: u8, color: Hsva) -> Hsva {
        let value = f32::from(value);
        match self {
            BarKind::Hue => Hsva::new(hue_from_value(value), color.s, color.v, color.a),
            BarKind::Opacity => Hsva::new(color.h, color.s, color.v, alpha_from_value(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: f32 = 18.0;

    fn bar_bounds() -> Rect {
        // 118 px wide bar gives exactly 100 px of travel
        Rect::new(50.0, 0.0, 118.0, 14.0)
    }

    #[test]
    fn test_handle_value_midpoint() {
        // 50 (left) + 9 (half handle) + 50 (half travel)
        assert_eq!(handle_value(109.0, bar_bounds(), BAR), 50);
    }

    #[test]
    fn test_handle_value_clamps() {
        assert_eq!(handle_value(-500.0, bar_bounds(), BAR), 0);
        assert_eq!(handle_value(5000.0, bar_bounds(), BAR), 100);
    }

    #[test]
    fn test_handle_value_rounds() {
        // 0.4 of a step rounds down, 0.6 rounds up
        assert_eq!(handle_value(59.4 + 10.0, bar_bounds(), BAR), 10);
        assert_eq!(handle_value(59.6 + 10.0, bar_bounds(), BAR), 11);
    }

    #[test]
    fn test_handle_value_narrow_bar() {
        let narrow = Rect::new(0.0, 0.0, 18.0, 10.0);
        assert_eq!(handle_value(10.0, narrow, BAR), 0);
        assert_eq!(handle_value(10.0, Rect::ZERO, BAR), 0);
    }

    #[test]
    fn test_handle_offset() {
        assert!((handle_offset(50.0, 118.0) - 50.0).abs() < f32::EPSILON);
        assert!((handle_offset(150.0, 118.0) - 100.0).abs() < f32::EPSILON);
        assert!(handle_offset(50.0, 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hue_conversions() {
        assert!((hue_from_value(50.0) - 180.0).abs() < 0.001);
        assert_eq!(value_from_hue(180.0), 50);
        assert_eq!(value_from_hue(360.0), 100);
    }

    #[test]
    fn test_alpha_conversions() {
        assert!((alpha_from_value(25.0) - 0.25).abs() < f32::EPSILON);
        assert_eq!(value_from_alpha(0.5), 50);
        assert_eq!(value_from_alpha(2.0), 100);
    }

    #[test]
    fn test_bar_kind_apply() {
        let color = Hsva::new(10.0, 40.0, 60.0, 1.0);

        let hue = BarKind::Hue.apply(50, color);
        assert!((hue.h - 180.0).abs() < 0.001);
        assert!((hue.s - 40.0).abs() < f32::EPSILON);

        let faded = BarKind::Opacity.apply(30, color);
        assert!((faded.a - 0.3).abs() < 0.001);
        assert!((faded.h - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bar_kind_value_of() {
        let color = Hsva::new(90.0, 0.0, 0.0, 0.75);
        assert_eq!(BarKind::Hue.value_of(color), 25);
        assert_eq!(BarKind::Opacity.value_of(color), 75);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Bar values never leave 0-100.
        #[test]
        fn prop_handle_value_in_range(
            x in -5000.0f32..5000.0,
            left in -200.0f32..800.0,
            width in 0.0f32..800.0
        ) {
            let value = handle_value(x, Rect::new(left, 0.0, width, 14.0), 18.0);
            prop_assert!(value <= 100);
        }

        /// Placing a handle for a value and reading it back returns the value.
        #[test]
        fn prop_offset_then_value(value in 0u8..=100, width in 40.0f32..800.0, left in 0.0f32..500.0) {
            let bounds = Rect::new(left, 0.0, width, 14.0);
            let client_x = left + 9.0 + handle_offset(f32::from(value), width);
            prop_assert_eq!(handle_value(client_x, bounds, 18.0), value);
        }
    }
}
