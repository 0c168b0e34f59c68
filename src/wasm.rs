//! WebAssembly bindings for gradient-picker.
//!
//! Exposes the mappers to JavaScript and reads element geometry straight from
//! the DOM.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PickerOptions, SquarePicker, format_gradient } from 'gradient-picker';
//!
//! await init();
//!
//! const options = new PickerOptions().square_size(250, 120);
//! const square = new SquarePicker(210, 80, 50, 1, options);
//! square.pointer_down(e.clientX, e.clientY, e.timeStamp, squareEl);
//! document.addEventListener('mousemove', (e) => {
//!   const css = square.pointer_move(e.clientX, e.clientY, e.timeStamp, squareEl);
//!   if (css) onChange(css);
//! });
//! ```
//!
//! Touch entry points take the active touches as a flat `Float32Array` of
//! `clientX, clientY` pairs; an empty array means no active touch.

use wasm_bindgen::prelude::*;

use crate::bounds::{safe_bounds, ElementGeometry};
use crate::color::{Hsva, Rgba};
use crate::config::PickerConfig;
use crate::geometry::Rect;
use crate::gradient::{gradient_details as read_details, ColorValue, CurrentColor, Gradient};
use crate::pointer::{self, PointerEvent, TouchPoint};
use crate::slider;
use crate::square::{self, SquareGesture};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module.
///
/// Routes Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

impl ElementGeometry for web_sys::Element {
    fn parent_rect(&self) -> Option<Rect> {
        self.parent_element().map(|parent| {
            let r = parent.get_bounding_client_rect();
            Rect::new(r.x() as f32, r.y() as f32, r.width() as f32, r.height() as f32)
        })
    }

    fn class_name(&self) -> String {
        web_sys::Element::class_name(self)
    }
}

fn to_js_error(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// Picker Options
// ============================================================================

/// Geometry and timing options for the bindings.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    config: PickerConfig,
}

#[wasm_bindgen]
impl PickerOptions {
    /// Create default picker options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered square size in pixels.
    pub fn square_size(mut self, width: f32, height: f32) -> Self {
        self.config.square_width = width;
        self.config.square_height = height;
        self
    }

    /// Set the square's cross size in pixels.
    pub fn cross_size(mut self, size: f32) -> Self {
        self.config.cross_size = size;
        self
    }

    /// Set the slider handle size in pixels.
    pub fn bar_size(mut self, size: f32) -> Self {
        self.config.bar_size = size;
        self
    }

    /// Set the minimum spacing between handled moves.
    pub fn move_throttle_ms(mut self, ms: f64) -> Self {
        self.config.move_throttle_ms = ms;
        self
    }

    /// Set the gradient handed out when a value has no usable color.
    pub fn default_gradient(mut self, css: &str) -> Self {
        self.config.default_gradient = css.to_string();
        self
    }
}

fn config_of(options: Option<PickerOptions>) -> PickerConfig {
    options.map(|o| o.config).unwrap_or_default()
}

fn touch_event(touches: &[f32], timestamp_ms: f64) -> PointerEvent {
    let points = touches
        .chunks_exact(2)
        .map(|xy| TouchPoint::new(xy[0], xy[1]))
        .collect();
    PointerEvent::touch(points).at(timestamp_ms)
}

fn position_in(event: &PointerEvent, bounds: Rect, config: &PickerConfig) -> Vec<f32> {
    let pos = pointer::picker_position(event, bounds, config.cross_size);
    vec![pos.x, pos.y]
}

fn current_of(value: &str, selected: usize, config: &PickerConfig) -> CurrentColor {
    let value = match ColorValue::from_css(value) {
        ColorValue::Gradient(gradient) => ColorValue::Gradient(gradient.with_selected(selected)),
        other => other,
    };
    value.current(config)
}

// ============================================================================
// Mappers
// ============================================================================

/// Resolved bounds of `element` as `[x, y, width, height]`.
#[wasm_bindgen]
pub fn element_bounds(element: &web_sys::Element, options: Option<PickerOptions>) -> Vec<f32> {
    let r = safe_bounds(element, &config_of(options));
    vec![r.x, r.y, r.width, r.height]
}

/// Handle position `[x, y]` for a mouse at the given client coordinates.
#[wasm_bindgen]
pub fn picker_position(
    client_x: f32,
    client_y: f32,
    element: &web_sys::Element,
    options: Option<PickerOptions>,
) -> Vec<f32> {
    let config = config_of(options);
    let bounds = safe_bounds(element, &config);
    position_in(&PointerEvent::mouse(client_x, client_y), bounds, &config)
}

/// Handle position `[x, y]` for a touch event; the first touch counts.
#[wasm_bindgen]
pub fn touch_position(
    touches: &[f32],
    element: &web_sys::Element,
    options: Option<PickerOptions>,
) -> Vec<f32> {
    let config = config_of(options);
    let bounds = safe_bounds(element, &config);
    position_in(&touch_event(touches, 0.0), bounds, &config)
}

/// Bar value (0-100) for a pointer at `client_x` over a slider element.
#[wasm_bindgen]
pub fn handle_value(client_x: f32, element: &web_sys::Element, options: Option<PickerOptions>) -> u8 {
    let config = config_of(options);
    slider::handle_value(client_x, safe_bounds(element, &config), config.bar_size)
}

/// Square handle position `[x, y]` for saturation and value (0-100).
#[wasm_bindgen]
pub fn square_xy(s: f32, v: f32, options: Option<PickerOptions>) -> Vec<f32> {
    let config = config_of(options);
    let pos = square::square_xy(
        s,
        v,
        config.square_width,
        config.square_height,
        config.cross_size,
    );
    vec![pos.x, pos.y]
}

/// Convert any CSS color to `[h, s, v, a]`.
///
/// # Errors
///
/// Returns an error string if the color cannot be parsed.
#[wasm_bindgen]
pub fn css_to_hsva(css: &str) -> Result<Vec<f32>, JsValue> {
    let hsva = Rgba::parse_css(css).map_err(to_js_error)?.to_hsva();
    Ok(vec![hsva.h, hsva.s, hsva.v, hsva.a])
}

// ============================================================================
// Gradients
// ============================================================================

/// Normalize a color or gradient string; gradients get their stops sorted.
#[wasm_bindgen]
pub fn format_color(value: &str) -> String {
    ColorValue::from_css(value).to_css_string()
}

/// Parse and reserialize a gradient, sorting its stops.
///
/// # Errors
///
/// Returns an error string if the gradient is malformed.
#[wasm_bindgen]
pub fn format_gradient(value: &str) -> Result<String, JsValue> {
    Gradient::parse(value)
        .map(|g| g.to_css_string())
        .map_err(to_js_error)
}

/// Quick summary of a color string as
/// `{ degrees, degreeStr, isGradient, gradientType }`.
///
/// # Errors
///
/// Returns an error if the result object cannot be populated.
#[wasm_bindgen]
pub fn gradient_details(value: &str) -> Result<js_sys::Object, JsValue> {
    let details = read_details(value);
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"degrees".into(), &details.degrees.into())?;
    js_sys::Reflect::set(&obj, &"degreeStr".into(), &details.degree_str.into())?;
    js_sys::Reflect::set(&obj, &"isGradient".into(), &details.is_gradient.into())?;
    js_sys::Reflect::set(&obj, &"gradientType".into(), &details.gradient_type.into())?;
    Ok(obj)
}

/// Color being edited in `value` as `{ color, selected, left }`.
///
/// `selected` picks the gradient stop; values without a usable color report
/// the configured default gradient.
///
/// # Errors
///
/// Returns an error if the result object cannot be populated.
#[wasm_bindgen]
pub fn current_color(
    value: &str,
    selected: usize,
    options: Option<PickerOptions>,
) -> Result<js_sys::Object, JsValue> {
    let current = current_of(value, selected, &config_of(options));
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"color".into(), &current.color.into())?;
    js_sys::Reflect::set(&obj, &"selected".into(), &(current.selected as u32).into())?;
    js_sys::Reflect::set(&obj, &"left".into(), &current.left.into())?;
    Ok(obj)
}

// ============================================================================
// Square gesture
// ============================================================================

/// Stateful saturation/value square for one mounted picker.
///
/// Methods that can change the color return the new CSS string, or
/// `undefined` when nothing changed.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SquarePicker {
    config: PickerConfig,
    gesture: SquareGesture,
}

#[wasm_bindgen]
impl SquarePicker {
    /// Create a square showing the given HSVA color.
    #[wasm_bindgen(constructor)]
    pub fn new(h: f32, s: f32, v: f32, a: f32, options: Option<PickerOptions>) -> Self {
        let config = config_of(options);
        let gesture = SquareGesture::new(&config, Hsva::new(h, s, v, a));
        Self { config, gesture }
    }

    /// Handle position `[x, y]`.
    pub fn handle_position(&self) -> Vec<f32> {
        let pos = self.gesture.handle_position();
        vec![pos.x, pos.y]
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Follow a color set elsewhere.
    pub fn sync(&mut self, h: f32, s: f32, v: f32, a: f32) {
        self.gesture.sync(Hsva::new(h, s, v, a));
    }

    /// Mouse press inside the square.
    pub fn pointer_down(
        &mut self,
        client_x: f32,
        client_y: f32,
        timestamp_ms: f64,
        element: &web_sys::Element,
    ) -> Option<String> {
        let event = PointerEvent::mouse(client_x, client_y).at(timestamp_ms);
        self.down(&event, safe_bounds(element, &self.config))
    }

    /// Touch start inside the square.
    pub fn touch_start(
        &mut self,
        touches: &[f32],
        timestamp_ms: f64,
        element: &web_sys::Element,
    ) -> Option<String> {
        let event = touch_event(touches, timestamp_ms);
        self.down(&event, safe_bounds(element, &self.config))
    }

    /// Press on the cross itself.
    pub fn handle_down(&mut self) {
        self.gesture.handle_down();
    }

    /// Document-level mouse move.
    pub fn pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        timestamp_ms: f64,
        element: &web_sys::Element,
    ) -> Option<String> {
        let event = PointerEvent::mouse(client_x, client_y).at(timestamp_ms);
        self.moved(&event, safe_bounds(element, &self.config))
    }

    /// Document-level touch move.
    pub fn touch_move(
        &mut self,
        touches: &[f32],
        timestamp_ms: f64,
        element: &web_sys::Element,
    ) -> Option<String> {
        let event = touch_event(touches, timestamp_ms);
        self.moved(&event, safe_bounds(element, &self.config))
    }

    /// Document-level release (mouse up or touch end).
    pub fn pointer_up(&mut self) -> Option<String> {
        self.gesture.pointer_up().map(|c| c.css)
    }

    /// Click inside the square.
    pub fn click(
        &mut self,
        client_x: f32,
        client_y: f32,
        timestamp_ms: f64,
        element: &web_sys::Element,
    ) -> Option<String> {
        let event = PointerEvent::mouse(client_x, client_y).at(timestamp_ms);
        let bounds = safe_bounds(element, &self.config);
        self.gesture.click(&event, bounds).map(|c| c.css)
    }
}

impl SquarePicker {
    fn down(&mut self, event: &PointerEvent, bounds: Rect) -> Option<String> {
        self.gesture.pointer_down(event, bounds).map(|c| c.css)
    }

    fn moved(&mut self, event: &PointerEvent, bounds: Rect) -> Option<String> {
        self.gesture.pointer_move(event, bounds).map(|c| c.css)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_square_xy_binding() {
        assert_eq!(square_xy(0.0, 100.0, None), vec![-9.0, -9.0]);
    }

    #[test]
    fn test_square_xy_uses_options() {
        let options = PickerOptions::new().square_size(250.0, 100.0).cross_size(10.0);
        assert_eq!(square_xy(100.0, 0.0, Some(options)), vec![245.0, 95.0]);
    }

    #[test]
    fn test_square_picker_uses_options() {
        let options = PickerOptions::new().square_size(250.0, 120.0);
        let mut picker = SquarePicker::new(0.0, 0.0, 100.0, 1.0, Some(options));
        assert_eq!(picker.handle_position(), vec![-9.0, -9.0]);

        let bounds = Rect::new(0.0, 0.0, 250.0, 120.0);
        picker.down(&PointerEvent::mouse(250.0, 0.0), bounds);
        let s = picker.gesture.color().s;
        assert!((s - 249.0 / 250.0 * 100.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_touches_map_from_origin() {
        let event = touch_event(&[], 0.0);
        assert_eq!(event.client_position(), Point::ORIGIN);

        let bounds = Rect::new(-50.0, -50.0, 200.0, 200.0);
        assert_eq!(position_in(&event, bounds, &PickerConfig::default()), vec![41.0, 41.0]);
    }

    #[test]
    fn test_touch_pairs_use_first_touch() {
        let event = touch_event(&[30.0, 40.0, 300.0, 400.0, 7.0], 12.0);
        assert_eq!(event.client_position(), Point::new(30.0, 40.0));
        assert_eq!(event.timestamp_ms, 12.0);
    }

    #[test]
    fn test_touch_drag_through_picker() {
        let mut picker = SquarePicker::new(0.0, 0.0, 100.0, 1.0, None);
        let bounds = Rect::new(0.0, 0.0, 294.0, 151.0);
        assert!(picker.down(&touch_event(&[9.0, 9.0], 0.0), bounds).is_some());
        assert!(picker.moved(&touch_event(&[159.0, 9.0], 20.0), bounds).is_some());
        assert_eq!(picker.handle_position(), vec![150.0, 0.0]);
    }

    #[test]
    fn test_current_color_uses_configured_default() {
        let options = PickerOptions::new().default_gradient("linear-gradient(0deg, red 0%)");
        let config = config_of(Some(options));
        assert_eq!(current_of("", 0, &config).color, "linear-gradient(0deg, red 0%)");

        let current = current_of("linear-gradient(90deg, red 0%, blue 60%)", 1, &config);
        assert_eq!(current.color, "blue");
        assert_eq!(current.selected, 1);
    }

    #[test]
    fn test_format_color() {
        assert_eq!(
            format_color("linear-gradient(90deg, red 50%, blue 0%)"),
            "linear-gradient(90deg, blue 0%, red 50%)"
        );
        assert_eq!(format_color("#fff"), "#fff");
    }

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
