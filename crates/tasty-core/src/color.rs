//! Color value types and conversions between color models.
//!
//! All components are `f64` in `[0, 1]`. Hue is stored as a fraction of a
//! full turn, so `h = 0.5` is cyan and `h = 1.0` is the same as `h = 0.0`.
//!
//! # Types
//!
//! - [`Rgb`] - red, green, blue
//! - [`Rgba`] - red, green, blue, alpha (the storage type of every palette)
//! - [`Hsv`] - hue, saturation, value
//!
//! # Example
//!
//! ```
//! use tasty_core::{Hsv, Rgb};
//!
//! let orange = Rgb::new(1.0, 0.5, 0.0);
//! let hsv = orange.to_hsv();
//! assert!((hsv.h - 30.0 / 360.0).abs() < 1e-12);
//!
//! let back = hsv.to_rgb();
//! assert!((back.g - 0.5).abs() < 1e-12);
//! assert_eq!(orange.to_hex(), "#ff8000");
//! ```
//!
//! # Used By
//!
//! - `tasty-math` - color interpolation
//! - `tastymap` - colormap lookup tables and exports

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Checks that a component is finite and inside `[0, 1]`.
#[inline]
pub(crate) fn check_unit(component: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::component_out_of_range(component, value))
    }
}

/// Quantizes a unit value to a byte, clamping first.
#[inline]
fn to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ============================================================================
// Rgb
// ============================================================================

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel value.
    pub r: f64,
    /// Green channel value.
    pub g: f64,
    /// Blue channel value.
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a grey with equal channel values.
    #[inline]
    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Create from an array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Create from an array, rejecting components outside `[0, 1]`.
    pub fn try_from_array(arr: [f64; 3]) -> Result<Self> {
        Ok(Self::new(
            check_unit("r", arr[0])?,
            check_unit("g", arr[1])?,
            check_unit("b", arr[2])?,
        ))
    }

    /// Get RGB values as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to HSV using the hexcone model.
    ///
    /// Achromatic colors (all channels equal) get `h = 0` and `s = 0`.
    pub fn to_hsv(self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let s = if max > 0.0 { delta / max } else { 0.0 };
        let h = if delta > 0.0 {
            let sector = if self.b == max {
                4.0 + (self.r - self.g) / delta
            } else if self.g == max {
                2.0 + (self.b - self.r) / delta
            } else {
                (self.g - self.b) / delta
            };
            (sector / 6.0).rem_euclid(1.0)
        } else {
            0.0
        };

        Hsv::new(h, s, max)
    }

    /// Formats as `#rrggbb` (lowercase).
    ///
    /// Channels are clamped to `[0, 1]` and rounded to the nearest byte.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }

    /// Returns a copy with every channel clamped to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

// ============================================================================
// Rgba
// ============================================================================

/// An RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel value.
    pub r: f64,
    /// Green channel value.
    pub g: f64,
    /// Blue channel value.
    pub b: f64,
    /// Alpha (1.0 is opaque).
    pub a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Rgba {
    /// Fully transparent black, the default color for bad values.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a new RGBA color.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from an RGB color and an alpha value.
    #[inline]
    pub const fn from_rgb(rgb: Rgb, a: f64) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Create an opaque color from RGB.
    #[inline]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self::from_rgb(rgb, 1.0)
    }

    /// Create from an array.
    #[inline]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Create from an array, rejecting components outside `[0, 1]`.
    pub fn try_from_array(arr: [f64; 4]) -> Result<Self> {
        Ok(Self::new(
            check_unit("r", arr[0])?,
            check_unit("g", arr[1])?,
            check_unit("b", arr[2])?,
            check_unit("a", arr[3])?,
        ))
    }

    /// Get RGBA values as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Drops alpha.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Returns a copy with a different alpha.
    #[inline]
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Converts the color channels to HSV, dropping alpha.
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        self.rgb().to_hsv()
    }

    /// Formats as `#rrggbb`, dropping alpha.
    #[inline]
    pub fn to_hex(self) -> String {
        self.rgb().to_hex()
    }

    /// Formats as `#rrggbbaa`.
    pub fn to_hex_alpha(self) -> String {
        format!("{}{:02x}", self.rgb().to_hex(), to_byte(self.a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[f64; 4]> for Rgba {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb)
    }
}

// ============================================================================
// Hsv
// ============================================================================

/// An HSV color. Hue is a fraction of a turn in `[0, 1)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value (brightness).
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV color.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Create from an array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Create from an array, rejecting components outside `[0, 1]`.
    pub fn try_from_array(arr: [f64; 3]) -> Result<Self> {
        Ok(Self::new(
            check_unit("h", arr[0])?,
            check_unit("s", arr[1])?,
            check_unit("v", arr[2])?,
        ))
    }

    /// Get HSV values as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    /// Converts to RGB.
    ///
    /// Hue wraps modulo 1; saturation and value are used as given.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let v = self.v;
        let p = v * (1.0 - self.s);
        let q = v * (1.0 - self.s * f);
        let t = v * (1.0 - self.s * (1.0 - f));

        match (sector as u8) % 6 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }

    /// Returns a copy with every component clamped to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.h.clamp(0.0, 1.0),
            self.s.clamp(0.0, 1.0),
            self.v.clamp(0.0, 1.0),
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV({}, {}, {})", self.h, self.s, self.v)
    }
}
