//! Pointer and touch input mapped into widget-local coordinates.

use crate::geometry::{clamp_range, Point, Rect};

/// A single active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    /// Client X coordinate.
    pub client_x: f32,
    /// Client Y coordinate.
    pub client_y: f32,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(client_x: f32, client_y: f32) -> Self {
        Self { client_x, client_y }
    }
}

/// Source of a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerKind {
    /// Mouse event carrying its own client coordinates.
    Mouse {
        /// Client X coordinate.
        client_x: f32,
        /// Client Y coordinate.
        client_y: f32,
    },
    /// Touch event; the first active touch is the one that counts.
    Touch {
        /// Active touch points, in host order.
        touches: Vec<TouchPoint>,
    },
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Mouse or touch payload.
    pub kind: PointerKind,
    /// Host event timestamp in milliseconds.
    pub timestamp_ms: f64,
}

impl PointerEvent {
    /// Mouse event at the given client coordinates.
    #[must_use]
    pub fn mouse(client_x: f32, client_y: f32) -> Self {
        Self {
            kind: PointerKind::Mouse { client_x, client_y },
            timestamp_ms: 0.0,
        }
    }

    /// Touch event with the given active touches.
    #[must_use]
    pub fn touch(touches: Vec<TouchPoint>) -> Self {
        Self {
            kind: PointerKind::Touch { touches },
            timestamp_ms: 0.0,
        }
    }

    /// Set the event timestamp.
    #[must_use]
    pub fn at(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Client coordinates of the event.
    ///
    /// Touch events use the first active touch; a touch event without touches
    /// yields the origin.
    #[must_use]
    pub fn client_position(&self) -> Point {
        match &self.kind {
            PointerKind::Mouse { client_x, client_y } => Point::new(*client_x, *client_y),
            PointerKind::Touch { touches } => touches
                .first()
                .map_or(Point::ORIGIN, |t| Point::new(t.client_x, t.client_y)),
        }
    }
}

/// Map a pointer event into a handle position inside `bounds`.
///
/// The bounds offset and half the cross size are subtracted, then each axis is
/// clamped to `[-cross_size / 2, dimension - cross_size / 2]` so the cross's
/// center never leaves the widget.
#[must_use]
pub fn picker_position(event: &PointerEvent, bounds: Rect, cross_size: f32) -> Point {
    let half = cross_size / 2.0;
    let client = event.client_position();

    let x = clamp_range(client.x - bounds.left() - half, -half, bounds.width - half);
    let y = clamp_range(client.y - bounds.top() - half, -half, bounds.height - half);

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CROSS: f32 = 18.0;

    #[test]
    fn test_mouse_client_position() {
        let event = PointerEvent::mouse(12.0, 34.0);
        assert_eq!(event.client_position(), Point::new(12.0, 34.0));
    }

    #[test]
    fn test_touch_uses_first_point() {
        let event = PointerEvent::touch(vec![TouchPoint::new(5.0, 6.0), TouchPoint::new(50.0, 60.0)]);
        assert_eq!(event.client_position(), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_touch_without_points_is_origin() {
        let event = PointerEvent::touch(Vec::new());
        assert_eq!(event.client_position(), Point::ORIGIN);
    }

    #[test]
    fn test_position_inside_bounds() {
        let bounds = Rect::new(100.0, 50.0, 294.0, 151.0);
        let pos = picker_position(&PointerEvent::mouse(200.0, 100.0), bounds, CROSS);
        assert!((pos.x - 91.0).abs() < f32::EPSILON);
        assert!((pos.y - 41.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_position_clamped_low() {
        let bounds = Rect::new(100.0, 50.0, 294.0, 151.0);
        let pos = picker_position(&PointerEvent::mouse(0.0, 0.0), bounds, CROSS);
        assert!((pos.x + 9.0).abs() < f32::EPSILON);
        assert!((pos.y + 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_position_clamped_high() {
        let bounds = Rect::new(100.0, 50.0, 294.0, 151.0);
        let pos = picker_position(&PointerEvent::mouse(1000.0, 1000.0), bounds, CROSS);
        assert!((pos.x - 285.0).abs() < f32::EPSILON);
        assert!((pos.y - 142.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_touch_maps_from_origin() {
        // (0, 0) client position, then clamped like any other point
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let pos = picker_position(&PointerEvent::touch(Vec::new()), bounds, CROSS);
        assert_eq!(pos, Point::new(-9.0, -9.0));
    }

    #[test]
    fn test_unmounted_bounds() {
        let pos = picker_position(&PointerEvent::mouse(40.0, 40.0), Rect::ZERO, CROSS);
        assert_eq!(pos, Point::new(-9.0, -9.0));
    }

    #[test]
    fn test_timestamp_builder() {
        let event = PointerEvent::mouse(1.0, 2.0).at(123.5);
        assert!((event.timestamp_ms - 123.5).abs() < f64::EPSILON);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Every mapped position lies within the handle-adjusted bounds.
        #[test]
        fn prop_position_within_bounds(
            cx in -2000.0f32..2000.0,
            cy in -2000.0f32..2000.0,
            left in -100.0f32..500.0,
            top in -100.0f32..500.0,
            width in 0.0f32..600.0,
            height in 0.0f32..600.0,
            cross in 0.0f32..40.0
        ) {
            let bounds = Rect::new(left, top, width, height);
            let pos = picker_position(&PointerEvent::mouse(cx, cy), bounds, cross);
            let half = cross / 2.0;
            prop_assert!(pos.x >= -half && pos.x <= width - half);
            prop_assert!(pos.y >= -half && pos.y <= height - half);
        }
    }
}
