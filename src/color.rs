//! Color types and the conversions the picker widgets need.
//!
//! Provides an 8-bit RGB color with a fractional alpha (the shape CSS uses) and
//! the HSVA working representation the square and sliders edit. This is not a
//! general color-space library: only HSV, RGB and the CSS notations a picker
//! exchanges with its host are covered.

use std::fmt;

use crate::error::{Error, Result};

/// RGB color with 8-bit channels and a 0.0-1.0 alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0-1.0, 1.0 = fully opaque).
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Alpha rounded to two decimals, the precision CSS strings carry.
    #[must_use]
    pub fn rounded_alpha(&self) -> f32 {
        (self.a.clamp(0.0, 1.0) * 100.0).round() / 100.0
    }

    /// Format as `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        let a = self.rounded_alpha();
        if a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            self.to_rgba_string()
        }
    }

    /// Format as `rgba(r, g, b, a)` regardless of alpha.
    #[must_use]
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.rounded_alpha()
        )
    }

    /// Convert to HSVA (h 0-360, s/v 0-100, a 0-1).
    #[must_use]
    pub fn to_hsva(self) -> Hsva {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        let h = if h < 0.0 { h + 360.0 } else { h };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsva::new(h, s * 100.0, max * 100.0, self.a)
    }

    /// Parse a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`,
    /// `rgba()` or one of a few named colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string is none of those.
    pub fn parse_css(input: &str) -> Result<Self> {
        let s = input.trim().to_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| Error::InvalidColor(input.to_string()));
        }
        if let Some(args) = function_args(&s, "rgba").or_else(|| function_args(&s, "rgb")) {
            return parse_rgb_args(args).ok_or_else(|| Error::InvalidColor(input.to_string()));
        }
        named_color(&s).ok_or_else(|| Error::InvalidColor(input.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_string())
    }
}

/// Strip `name(` ... `)` and return the inner argument list.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..=i)?, 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

    match hex.len() {
        3 => Some(Rgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba::new(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            f32::from(nibble(3)?) / 255.0,
        )),
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f32::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Rgba> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |p: &str| -> Option<u8> {
        let v = match p.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? * 2.55,
            None => p.parse::<f32>().ok()?,
        };
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let alpha = |p: &str| -> Option<f32> {
        let v = match p.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? / 100.0,
            None => p.parse::<f32>().ok()?,
        };
        Some(v.clamp(0.0, 1.0))
    };

    let a = match parts.get(3) {
        Some(p) => alpha(p)?,
        None => 1.0,
    };
    Some(Rgba::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        a,
    ))
}

fn named_color(s: &str) -> Option<Rgba> {
    let color = match s {
        "red" => Rgba::RED,
        "green" => Rgba::rgb(0, 128, 0),
        "lime" => Rgba::GREEN,
        "blue" => Rgba::BLUE,
        "black" => Rgba::BLACK,
        "white" => Rgba::WHITE,
        "yellow" => Rgba::rgb(255, 255, 0),
        "cyan" => Rgba::rgb(0, 255, 255),
        "magenta" => Rgba::rgb(255, 0, 255),
        "orange" => Rgba::rgb(255, 165, 0),
        "purple" => Rgba::rgb(128, 0, 128),
        "pink" => Rgba::rgb(255, 192, 203),
        "gray" | "grey" => Rgba::rgb(128, 128, 128),
        "transparent" => Rgba::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

/// HSVA color in picker units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    /// Hue (0.0-360.0 degrees).
    pub h: f32,
    /// Saturation (0.0-100.0).
    pub s: f32,
    /// Value/brightness (0.0-100.0).
    pub v: f32,
    /// Alpha (0.0-1.0).
    pub a: f32,
}

impl Default for Hsva {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Hsva {
    /// Create a new HSVA color.
    #[must_use]
    pub const fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    /// Same hue and alpha with a new saturation and value.
    #[must_use]
    pub const fn with_sv(self, s: f32, v: f32) -> Self {
        Self::new(self.h, s, v, self.a)
    }

    /// Convert to RGBA, clamping out-of-range channels.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.v / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgba::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
            self.a.clamp(0.0, 1.0),
        )
    }

    /// CSS string of this color, as handed to the host on change.
    #[must_use]
    pub fn to_rgb_string(self) -> String {
        self.to_rgba().to_rgb_string()
    }
}

impl From<Hsva> for Rgba {
    fn from(hsva: Hsva) -> Self {
        hsva.to_rgba()
    }
}

impl From<Rgba> for Hsva {
    fn from(rgba: Rgba) -> Self {
        rgba.to_hsva()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// RGB survives a trip through HSVA.
        #[test]
        fn prop_rgb_hsva_rgb(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let original = Rgba::rgb(r, g, b);
            let back = original.to_hsva().to_rgba();
            prop_assert!((i16::from(back.r) - i16::from(r)).abs() <= 1);
            prop_assert!((i16::from(back.g) - i16::from(g)).abs() <= 1);
            prop_assert!((i16::from(back.b) - i16::from(b)).abs() <= 1);
        }

        /// The formatted string parses back to the same color.
        #[test]
        fn prop_rgb_string_parses(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let original = Rgba::rgb(r, g, b);
            let parsed = Rgba::parse_css(&original.to_rgb_string()).unwrap();
            prop_assert_eq!(parsed, original);
        }
    }
}
