//! Rate limiting for rapid-fire pointer moves.
//!
//! Timing comes from the events themselves (DOM `timeStamp`, in
//! milliseconds), so the limiter holds no clock and stays deterministic.

/// Leading-edge throttle where the last held value wins.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval_ms: f64,
    last_emit_ms: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Create a throttle that lets at most one value through per `interval_ms`.
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_emit_ms: None,
            pending: None,
        }
    }

    /// Offer a value observed at `timestamp_ms`.
    ///
    /// Returns the value to act on now, or `None` if it was held. A held
    /// value replaces any earlier held value.
    pub fn offer(&mut self, value: T, timestamp_ms: f64) -> Option<T> {
        let ready = match self.last_emit_ms {
            None => true,
            Some(last) => timestamp_ms - last >= self.interval_ms || timestamp_ms < last,
        };

        if ready {
            self.last_emit_ms = Some(timestamp_ms);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Release the held value, if any.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Forget timing and any held value.
    pub fn reset(&mut self) {
        self.last_emit_ms = None;
        self.pending = None;
    }
}
