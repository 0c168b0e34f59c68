//! Solid color and gradient descriptors and their CSS strings.
//!
//! Serialization is total: a descriptor always produces a usable CSS value,
//! falling back to [`FALLBACK_COLOR`] when it has no stops. The light-weight
//! [`gradient_details`] reader is total as well; only the full
//! [`Gradient::parse`] reports malformed input.

use std::fmt;
use std::str::FromStr;

use crate::config::PickerConfig;
use crate::error::{Error, Result};

/// CSS value used when a descriptor has no stops.
pub const FALLBACK_COLOR: &str = "rgba(175, 51, 242, 1)";

// ============================================================================
// Color stops
// ============================================================================

/// A single color and position pair within a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    /// CSS color of the stop.
    pub value: String,
    /// Position along the gradient line, 0-100.
    pub left: f32,
}

impl ColorStop {
    /// Create a stop.
    #[must_use]
    pub fn new(value: impl Into<String>, left: f32) -> Self {
        Self {
            value: value.into(),
            left,
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 would print as "-0"
        let left = if self.left == 0.0 { 0.0 } else { self.left };
        write!(f, "{} {}%", self.value, left)
    }
}

// ============================================================================
// Orientation
// ============================================================================

/// Gradient function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientKind {
    /// `linear-gradient`
    Linear,
    /// `radial-gradient`
    Radial,
}

impl GradientKind {
    /// CSS function name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
        }
    }

    /// Kind for a CSS function name.
    #[must_use]
    pub fn from_css_name(name: &str) -> Option<Self> {
        match name.trim() {
            "linear-gradient" => Some(GradientKind::Linear),
            "radial-gradient" => Some(GradientKind::Radial),
            _ => None,
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// CSS `to <side>` / `to <corner>` direction keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `to top`, 0deg
    ToTop,
    /// `to top right`, 45deg
    ToTopRight,
    /// `to right`, 90deg
    ToRight,
    /// `to bottom right`, 135deg
    ToBottomRight,
    /// `to bottom`, 180deg
    ToBottom,
    /// `to bottom left`, 225deg
    ToBottomLeft,
    /// `to left`, 270deg
    ToLeft,
    /// `to top left`, 315deg
    ToTopLeft,
}

impl Direction {
    /// All directions, clockwise from `to top`.
    pub const ALL: [Direction; 8] = [
        Direction::ToTop,
        Direction::ToTopRight,
        Direction::ToRight,
        Direction::ToBottomRight,
        Direction::ToBottom,
        Direction::ToBottomLeft,
        Direction::ToLeft,
        Direction::ToTopLeft,
    ];

    /// The CSS keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Direction::ToTop => "to top",
            Direction::ToTopRight => "to top right",
            Direction::ToRight => "to right",
            Direction::ToBottomRight => "to bottom right",
            Direction::ToBottom => "to bottom",
            Direction::ToBottomLeft => "to bottom left",
            Direction::ToLeft => "to left",
            Direction::ToTopLeft => "to top left",
        }
    }

    /// Equivalent angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Direction::ToTop => 0,
            Direction::ToTopRight => 45,
            Direction::ToRight => 90,
            Direction::ToBottomRight => 135,
            Direction::ToBottom => 180,
            Direction::ToBottomLeft => 225,
            Direction::ToLeft => 270,
            Direction::ToTopLeft => 315,
        }
    }

    /// Direction for an exact CSS keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.keyword() == keyword)
    }
}

/// Leading integer of `s`, the way `parseInt` reads it.
///
/// Magnitudes beyond `i32` saturate instead of failing.
fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i32, |acc, b| {
        acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
    });
    Some(if negative { magnitude.saturating_neg() } else { magnitude })
}

/// Degrees for a CSS angle with a unit (`45deg`, `0.25turn`, `1rad`, `100grad`).
///
/// Fractions truncate toward zero.
fn angle_degrees(token: &str) -> Option<i32> {
    // Units per full turn; `grad` before `rad`, which it ends with
    const UNITS: [(&str, f32); 4] = [
        ("deg", 360.0),
        ("grad", 400.0),
        ("rad", std::f32::consts::TAU),
        ("turn", 1.0),
    ];

    let token = token.trim();
    UNITS.iter().find_map(|&(unit, per_turn)| {
        let number = token.strip_suffix(unit)?.parse::<f32>().ok()?;
        Some((number * 360.0 / per_turn) as i32)
    })
}

/// Radial arguments that describe shape, size or position rather than a stop.
const RADIAL_SHAPE_WORDS: [&str; 7] = [
    "circle",
    "ellipse",
    "closest-side",
    "closest-corner",
    "farthest-side",
    "farthest-corner",
    "at",
];

/// Whether a word starts like a length or percentage rather than a color.
fn is_numeric_word(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
}

/// Degrees for a direction keyword or a numeric angle.
///
/// Keywords map per [`Direction::degrees`]; anything else is read as a leading
/// integer. Missing, empty or non-numeric input yields 0.
#[must_use]
pub fn shorthand_degrees(dir: Option<&str>) -> i32 {
    let Some(dir) = dir.map(str::trim).filter(|d| !d.is_empty()) else {
        return 0;
    };
    Direction::from_keyword(dir)
        .map(Direction::degrees)
        .or_else(|| parse_leading_int(dir))
        .unwrap_or(0)
}

/// Orientation of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// A `to <side>` keyword.
    Direction(Direction),
    /// An explicit angle.
    Degrees(i32),
    /// Radial `circle` shape.
    Circle,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Degrees(90)
    }
}

impl Orientation {
    /// Angle in degrees; `Circle` has none and reads as 0.
    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Orientation::Direction(d) => d.degrees(),
            Orientation::Degrees(deg) => deg,
            Orientation::Circle => 0,
        }
    }

    /// Read an orientation token (`to right`, `90deg`, `0.5turn`, `90`, `circle`).
    ///
    /// Never fails: unreadable angles become `Degrees(0)`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token == "circle" {
            return Orientation::Circle;
        }
        match Direction::from_keyword(token) {
            Some(d) => Orientation::Direction(d),
            None => Orientation::Degrees(
                angle_degrees(token).unwrap_or_else(|| shorthand_degrees(Some(token))),
            ),
        }
    }

    /// Whether the first argument of a gradient of `kind` is its orientation
    /// (or radial shape) rather than the first stop.
    fn is_token(kind: GradientKind, token: &str) -> bool {
        let token = token.trim();
        match kind {
            GradientKind::Linear => token.starts_with("to ") || angle_degrees(token).is_some(),
            GradientKind::Radial => token.split_whitespace().next().is_some_and(|word| {
                RADIAL_SHAPE_WORDS.contains(&word) || is_numeric_word(word)
            }),
        }
    }
}

// ============================================================================
// Gradient
// ============================================================================

/// The color a picker is currently editing within a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentColor {
    /// CSS color of the selected stop.
    pub color: String,
    /// Index of the selected stop.
    pub selected: usize,
    /// Position of the selected stop.
    pub left: f32,
}

/// A multi-stop gradient with an explicit selected stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Gradient function.
    pub kind: GradientKind,
    /// Direction or angle; radial gradients always serialize as `circle`.
    pub orientation: Orientation,
    /// Stops in editing order (not necessarily sorted).
    pub stops: Vec<ColorStop>,
    /// Index into `stops` of the stop being edited.
    pub selected: usize,
}

impl Gradient {
    /// Create a gradient with the first stop selected.
    #[must_use]
    pub fn new(kind: GradientKind, orientation: Orientation, stops: Vec<ColorStop>) -> Self {
        Self {
            kind,
            orientation,
            stops,
            selected: 0,
        }
    }

    /// Linear gradient at `degrees`.
    #[must_use]
    pub fn linear(degrees: i32, stops: Vec<ColorStop>) -> Self {
        Self::new(GradientKind::Linear, Orientation::Degrees(degrees), stops)
    }

    /// Circular radial gradient.
    #[must_use]
    pub fn radial(stops: Vec<ColorStop>) -> Self {
        Self::new(GradientKind::Radial, Orientation::Circle, stops)
    }

    /// Builder form of [`Gradient::select`].
    #[must_use]
    pub fn with_selected(mut self, index: usize) -> Self {
        self.select(index);
        self
    }

    /// Select the stop at `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.stops.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// The selected stop, if the selection is valid.
    #[must_use]
    pub fn selected_stop(&self) -> Option<&ColorStop> {
        self.stops.get(self.selected)
    }

    /// Color currently being edited.
    ///
    /// Falls back to the first stop when the selection is stale, and to
    /// `default_gradient` when there are no stops.
    #[must_use]
    pub fn current(&self, default_gradient: &str) -> CurrentColor {
        let found = self
            .selected_stop()
            .map(|stop| (self.selected, stop))
            .or_else(|| self.stops.first().map(|stop| (0, stop)));

        match found {
            Some((selected, stop)) if !stop.value.is_empty() => CurrentColor {
                color: stop.value.clone(),
                selected,
                left: stop.left,
            },
            Some((selected, stop)) => CurrentColor {
                color: default_gradient.to_string(),
                selected,
                left: stop.left,
            },
            None => CurrentColor {
                color: default_gradient.to_string(),
                selected: 0,
                left: 0.0,
            },
        }
    }

    /// Stops ordered by position; ties keep their editing order.
    #[must_use]
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.left.total_cmp(&b.left));
        sorted
    }

    /// Sort stops by position in place, keeping the same stop selected.
    pub fn sort_stops(&mut self) {
        let mut order: Vec<usize> = (0..self.stops.len()).collect();
        order.sort_by(|&a, &b| self.stops[a].left.total_cmp(&self.stops[b].left));

        if let Some(new_index) = order.iter().position(|&i| i == self.selected) {
            self.selected = new_index;
        }
        let mut old: Vec<Option<ColorStop>> = std::mem::take(&mut self.stops)
            .into_iter()
            .map(Some)
            .collect();
        self.stops = order.iter().filter_map(|&i| old[i].take()).collect();
    }

    /// Orientation as written inside the CSS function.
    #[must_use]
    pub fn orientation_css(&self) -> String {
        match self.kind {
            GradientKind::Linear => format!("{}deg", self.orientation.degrees()),
            GradientKind::Radial => "circle".to_string(),
        }
    }

    /// CSS gradient string, or [`FALLBACK_COLOR`] without stops.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        if self.stops.is_empty() {
            return FALLBACK_COLOR.to_string();
        }

        let stops = self
            .sorted_stops()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({}, {})", self.kind, self.orientation_css(), stops)
    }

    /// Parse a complete `linear-gradient(...)` or `radial-gradient(...)`.
    ///
    /// Stops without a position are spread evenly, as CSS does. The first stop
    /// is selected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGradient`] for an unknown function, unbalanced
    /// parentheses, a gradient without stops, or a stop that is not a color
    /// followed by at most one percentage. Color hints (`red, 30%, blue`) are
    /// rejected. Radial shape, size and position arguments are read as
    /// `circle`.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        let invalid = |why: &str| Error::InvalidGradient(format!("{why}: {input}"));

        let open = s.find('(').ok_or_else(|| invalid("missing '('"))?;
        let kind = GradientKind::from_css_name(&s[..open])
            .ok_or_else(|| invalid("unknown gradient function"))?;
        let inner = s[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| invalid("missing ')'"))?;

        let parts = split_top_level(inner, |c| c == ',').ok_or_else(|| invalid("unbalanced parentheses"))?;
        let mut parts = parts.into_iter().map(str::trim).filter(|p| !p.is_empty()).peekable();

        let orientation = match parts.peek() {
            Some(first) if Orientation::is_token(kind, first) => {
                let token = parts.next().unwrap_or_default();
                match kind {
                    GradientKind::Linear => Orientation::parse(token),
                    GradientKind::Radial => Orientation::Circle,
                }
            }
            _ => match kind {
                GradientKind::Linear => Orientation::Direction(Direction::ToBottom),
                GradientKind::Radial => Orientation::Circle,
            },
        };

        let raw: Vec<(String, Option<f32>)> = parts.map(parse_stop).collect::<Result<_>>()?;
        if raw.is_empty() {
            return Err(invalid("no color stops"));
        }

        let last = raw.len().saturating_sub(1).max(1) as f32;
        let stops = raw
            .into_iter()
            .enumerate()
            .map(|(i, (value, left))| {
                ColorStop::new(value, left.unwrap_or(i as f32 / last * 100.0))
            })
            .collect();

        Ok(Self::new(kind, orientation, stops))
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

impl FromStr for Gradient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split on separators that are not nested inside parentheses.
///
/// `None` if the parentheses do not balance.
fn split_top_level(s: &str, is_sep: impl Fn(char) -> bool) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            _ if depth == 0 && is_sep(c) => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    parts.push(&s[start..]);
    Some(parts)
}

/// Split a stop into its color and optional `N%` position.
fn parse_stop(part: &str) -> Result<(String, Option<f32>)> {
    let invalid = |why: &str| Error::InvalidGradient(format!("{why}: {part}"));

    let words = split_top_level(part, char::is_whitespace).ok_or_else(|| invalid("unbalanced stop"))?;
    let mut words = words.into_iter().filter(|w| !w.is_empty());

    let color = words.next().ok_or_else(|| invalid("empty color stop"))?;
    if is_numeric_word(color) {
        return Err(invalid("expected a color, found a length or color hint"));
    }

    let left = match words.next() {
        None => None,
        Some(position) => Some(
            position
                .strip_suffix('%')
                .and_then(|p| p.parse::<f32>().ok())
                .ok_or_else(|| invalid("expected a percentage position"))?,
        ),
    };
    if words.next().is_some() {
        return Err(invalid("unexpected tokens after stop position"));
    }

    Ok((color.to_string(), left))
}

// ============================================================================
// Color values
// ============================================================================

/// What a picker exchanges with its host: a CSS string or a stop descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// Any CSS color or gradient string, passed through untouched.
    Css(String),
    /// A solid color described by stops; the first stop is the color.
    Solid(Vec<ColorStop>),
    /// A gradient descriptor.
    Gradient(Gradient),
}

impl ColorValue {
    /// Interpret a host string: gradients are parsed, everything else is kept
    /// as CSS.
    ///
    /// A gradient string that fails to parse is kept as CSS too.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        if value.contains("gradient") {
            match Gradient::parse(value) {
                Ok(gradient) => return ColorValue::Gradient(gradient),
                Err(e) => log::debug!("keeping gradient as plain CSS: {e}"),
            }
        }
        ColorValue::Css(value.to_string())
    }

    /// Whether this value is a gradient.
    #[must_use]
    pub fn is_gradient(&self) -> bool {
        match self {
            ColorValue::Css(s) => s.contains("gradient"),
            ColorValue::Solid(_) => false,
            ColorValue::Gradient(_) => true,
        }
    }

    /// Color a picker should start editing for this value.
    ///
    /// Gradients report their selected stop and solid descriptors their first
    /// stop. A value without a usable color falls back to
    /// `config.default_gradient`.
    #[must_use]
    pub fn current(&self, config: &PickerConfig) -> CurrentColor {
        let fallback = || CurrentColor {
            color: config.default_gradient.clone(),
            selected: 0,
            left: 0.0,
        };

        match self {
            ColorValue::Css(s) if !s.trim().is_empty() => CurrentColor {
                color: s.clone(),
                selected: 0,
                left: 0.0,
            },
            ColorValue::Css(_) => fallback(),
            ColorValue::Solid(stops) => match stops.first() {
                Some(stop) if !stop.value.is_empty() => CurrentColor {
                    color: stop.value.clone(),
                    selected: 0,
                    left: stop.left,
                },
                _ => fallback(),
            },
            ColorValue::Gradient(gradient) => gradient.current(&config.default_gradient),
        }
    }

    /// CSS string for the host's style value.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        match self {
            ColorValue::Css(s) => s.clone(),
            ColorValue::Solid(stops) => stops
                .first()
                .map(|stop| stop.value.as_str())
                .filter(|value| !value.is_empty())
                .unwrap_or(FALLBACK_COLOR)
                .to_string(),
            ColorValue::Gradient(gradient) => gradient.to_css_string(),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

// ============================================================================
// Quick inspection
// ============================================================================

/// Summary of a color string, read without a full parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientDetails {
    /// Angle read from the first argument.
    pub degrees: i32,
    /// `"{degrees}deg"` for linear gradients, `"circle"` otherwise.
    pub degree_str: String,
    /// Whether the string mentions `gradient`.
    pub is_gradient: bool,
    /// Text before the first `(`.
    pub gradient_type: String,
}

impl GradientDetails {
    /// Typed gradient kind, if the prefix names one.
    #[must_use]
    pub fn kind(&self) -> Option<GradientKind> {
        GradientKind::from_css_name(&self.gradient_type)
    }
}

/// Read degrees and type from a color string. Never fails.
#[must_use]
pub fn gradient_details(value: &str) -> GradientDetails {
    let is_gradient = value.contains("gradient");
    let gradient_type = value.split('(').next().unwrap_or_default().to_string();

    let first_arg = value
        .split(',')
        .next()
        .and_then(|s| s.split('(').nth(1))
        .map(|s| s.replacen("deg", "", 1));
    let degrees = shorthand_degrees(first_arg.as_deref());

    let degree_str = if gradient_type == GradientKind::Linear.css_name() {
        format!("{degrees}deg")
    } else {
        "circle".to_string()
    };

    GradientDetails {
        degrees,
        degree_str,
        is_gradient,
        gradient_type,
    }
}
