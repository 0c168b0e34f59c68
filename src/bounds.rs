//! Bounds resolution for rendered widget elements.
//!
//! The host owns the real elements; this module only needs the rectangle of an
//! element's parent in page coordinates and the element's class, exposed
//! through [`ElementGeometry`].

use crate::config::PickerConfig;
use crate::geometry::Rect;

/// Geometry of a rendered element, as reported by the host.
pub trait ElementGeometry {
    /// On-screen rectangle of the element's parent, `None` when unmounted.
    fn parent_rect(&self) -> Option<Rect>;

    /// The element's class attribute.
    fn class_name(&self) -> String;
}

/// A fixed element snapshot, for hosts that already measured the layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticElement {
    /// Parent rectangle, `None` when unmounted.
    pub parent: Option<Rect>,
    /// Class attribute.
    pub class_name: String,
}

impl StaticElement {
    /// A mounted element whose parent occupies `rect`.
    #[must_use]
    pub fn mounted(rect: Rect) -> Self {
        Self {
            parent: Some(rect),
            class_name: String::new(),
        }
    }

    /// Set the class attribute.
    #[must_use]
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

impl ElementGeometry for StaticElement {
    fn parent_rect(&self) -> Option<Rect> {
        self.parent
    }

    fn class_name(&self) -> String {
        self.class_name.clone()
    }
}

/// Resolve the interactive bounds of `element`.
///
/// Returns the parent rectangle, with the left edge shifted by
/// `config.resize_handle_offset` when the element carries the resize-handle
/// class. An unmounted element resolves to [`Rect::ZERO`].
#[must_use]
pub fn safe_bounds<E: ElementGeometry + ?Sized>(element: &E, config: &PickerConfig) -> Rect {
    let Some(rect) = element.parent_rect() else {
        return Rect::ZERO;
    };

    let adjuster = if element.class_name() == config.resize_handle_class {
        config.resize_handle_offset
    } else {
        0.0
    };

    Rect::new(rect.x + adjuster, rect.y, rect.width, rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmounted_is_zero() {
        let element = StaticElement::default();
        assert_eq!(safe_bounds(&element, &PickerConfig::default()), Rect::ZERO);
    }

    #[test]
    fn test_mounted_passes_through() {
        let rect = Rect::new(10.0, 20.0, 294.0, 151.0);
        let element = StaticElement::mounted(rect).class("rbgcp-canvas");
        assert_eq!(safe_bounds(&element, &PickerConfig::default()), rect);
    }

    #[test]
    fn test_resize_handle_class_shifts_left() {
        let rect = Rect::new(10.0, 20.0, 294.0, 18.0);
        let element = StaticElement::mounted(rect).class("c-resize ps-rl");
        let bounds = safe_bounds(&element, &PickerConfig::default());
        assert!((bounds.x - 25.0).abs() < f32::EPSILON);
        assert!((bounds.y - 20.0).abs() < f32::EPSILON);
        assert!((bounds.width - 294.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resize_handle_class_must_match_exactly() {
        let rect = Rect::new(10.0, 20.0, 294.0, 18.0);
        let element = StaticElement::mounted(rect).class("c-resize");
        assert_eq!(safe_bounds(&element, &PickerConfig::default()), rect);
    }

    #[test]
    fn test_custom_offset() {
        let config = PickerConfig {
            resize_handle_offset: 4.0,
            ..PickerConfig::default()
        };
        let element = StaticElement::mounted(Rect::new(0.0, 0.0, 100.0, 10.0)).class("c-resize ps-rl");
        assert!((safe_bounds(&element, &config).x - 4.0).abs() < f32::EPSILON);
    }
}
