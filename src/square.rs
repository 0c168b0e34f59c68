//! Saturation/value square mapping and its drag gesture.
//!
//! Saturation runs left to right and value bottom to top. Handle positions are
//! the top-left corner of the cross, so both directions account for half the
//! cross size.

use crate::color::Hsva;
use crate::config::PickerConfig;
use crate::geometry::{clamp_range, Point, Rect};
use crate::pointer::{picker_position, PointerEvent};
use crate::throttle::Throttle;

/// Handle position for saturation `s` and value `v` (both 0-100).
#[must_use]
pub fn square_xy(s: f32, v: f32, width: f32, height: f32, cross_size: f32) -> Point {
    let half = cross_size / 2.0;
    let x = s / 100.0 * width - half;
    let y = (100.0 - v) / 100.0 * height - half;
    Point::new(x, y)
}

/// Saturation and value (both 0-100) for a handle position.
///
/// The cross center is clamped to the last valid pixel of the square on each
/// axis before rescaling.
#[must_use]
pub fn square_sv(pos: Point, width: f32, height: f32, cross_size: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 100.0);
    }

    let half = cross_size / 2.0;
    let x = clamp_range(pos.x + half, 0.0, width - 1.0);
    let y = clamp_range(pos.y + half, 0.0, height - 1.0);

    let s = x / width * 100.0;
    let v = 100.0 - y / height * 100.0;
    (s, v)
}

/// Color change produced by the square while dragging.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareChange {
    /// New working color.
    pub color: Hsva,
    /// CSS string of `color` for the host.
    pub css: String,
}

/// Drag state of one saturation/value square.
///
/// The host forwards its events here and applies the returned changes. The
/// release handler should be registered globally so a release outside the
/// square still ends the drag.
#[derive(Debug, Clone)]
pub struct SquareGesture {
    width: f32,
    height: f32,
    cross_size: f32,
    color: Hsva,
    dragging: bool,
    drag_pos: Point,
    moves: Throttle<Point>,
}

impl SquareGesture {
    /// Create the gesture for a square showing `color`.
    #[must_use]
    pub fn new(config: &PickerConfig, color: Hsva) -> Self {
        let drag_pos = square_xy(
            color.s,
            color.v,
            config.square_width,
            config.square_height,
            config.cross_size,
        );
        Self {
            width: config.square_width,
            height: config.square_height,
            cross_size: config.cross_size,
            color,
            dragging: false,
            drag_pos,
            moves: Throttle::new(config.move_throttle_ms),
        }
    }

    /// Current handle position.
    #[must_use]
    pub fn handle_position(&self) -> Point {
        self.drag_pos
    }

    /// Current working color.
    #[must_use]
    pub fn color(&self) -> Hsva {
        self.color
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Follow a color change made elsewhere (hue bar, inputs, host).
    ///
    /// Ignored while dragging. With `v == 0` every saturation renders the same
    /// black, so the handle keeps its x coordinate instead of snapping left.
    pub fn sync(&mut self, color: Hsva) {
        self.color = color;
        if self.dragging {
            return;
        }

        let target = square_xy(color.s, color.v, self.width, self.height, self.cross_size);
        if target != self.drag_pos {
            let x = if color.v == 0.0 { self.drag_pos.x } else { target.x };
            self.drag_pos = Point::new(x, target.y);
        }
    }

    /// Pointer pressed on the square: start dragging from the pointer.
    pub fn pointer_down(&mut self, event: &PointerEvent, bounds: Rect) -> Option<SquareChange> {
        self.dragging = true;
        self.moves.reset();
        let pos = picker_position(event, bounds, self.cross_size);
        log::debug!("Square: started dragging at ({}, {})", pos.x, pos.y);
        self.move_to(pos)
    }

    /// Pointer pressed on the handle itself: start dragging in place.
    pub fn handle_down(&mut self) {
        log::debug!("Square: started dragging handle");
        self.dragging = true;
        self.moves.reset();
    }

    /// Pointer moved anywhere on the page.
    pub fn pointer_move(&mut self, event: &PointerEvent, bounds: Rect) -> Option<SquareChange> {
        if !self.dragging {
            return None;
        }

        let pos = picker_position(event, bounds, self.cross_size);
        match self.moves.offer(pos, event.timestamp_ms) {
            Some(pos) => self.move_to(pos),
            None => {
                log::trace!("Square: move at {}ms held by throttle", event.timestamp_ms);
                None
            }
        }
    }

    /// Pointer released anywhere on the page: end the drag.
    ///
    /// A move held back by the throttle is applied first, so the final
    /// position always wins.
    pub fn pointer_up(&mut self) -> Option<SquareChange> {
        if !self.dragging {
            return None;
        }

        let change = self.moves.flush().and_then(|pos| self.move_to(pos));
        self.dragging = false;
        log::debug!(
            "Square: stopped dragging at ({}, {})",
            self.drag_pos.x,
            self.drag_pos.y
        );
        change
    }

    /// Click on the square outside a drag: jump the handle to the pointer.
    ///
    /// The click that ends a press-release in place finds the handle already
    /// there and reports nothing.
    pub fn click(&mut self, event: &PointerEvent, bounds: Rect) -> Option<SquareChange> {
        if self.dragging {
            return None;
        }

        let pos = picker_position(event, bounds, self.cross_size);
        if pos == self.drag_pos {
            return None;
        }
        self.drag_pos = pos;
        Some(self.emit())
    }

    /// Apply a drag position; changes are only produced mid-drag.
    fn move_to(&mut self, pos: Point) -> Option<SquareChange> {
        self.drag_pos = pos;
        if self.dragging {
            Some(self.emit())
        } else {
            None
        }
    }

    fn emit(&mut self) -> SquareChange {
        let (s, v) = square_sv(self.drag_pos, self.width, self.height, self.cross_size);
        self.color = self.color.with_sv(s, v);
        let css = self.color.to_rgb_string();
        log::trace!("Square: s={s:.1} v={v:.1} -> {css}");
        SquareChange {
            color: self.color,
            css,
        }
    }
}
