//! Color specification parsing.
//!
//! A color can be written as:
//!
//! - a hashed hex code: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - a grey level between 0 and 1 given as a string: `"0.75"`
//! - a single-letter base color: `b g r c m y k w`
//! - a Tableau name: `tab:blue`, `tab:orange`, ...
//! - any CSS color: `firebrick`, `rgb(255 0 0)`, `hsl(120deg 100% 50%)`
//! - a numeric 3- or 4-tuple, read as RGB(A) or HSV(A) depending on the
//!   [`ColorModel`] it is resolved with
//!
//! Bare hex digits without `#` are rejected so that short words are never
//! silently read as hex codes.
//!
//! # Dependencies
//!
//! - [`csscolorparser`] - CSS named colors and functional notation

use crate::color::{Hsv, Rgb, Rgba};
use crate::error::{Error, Result};
use crate::model::ColorModel;
use serde::{Deserialize, Serialize};

/// Base colors addressable by a single letter.
const BASE_COLORS: [(&str, [f64; 3]); 8] = [
    ("b", [0.0, 0.0, 1.0]),
    ("g", [0.0, 0.5, 0.0]),
    ("r", [1.0, 0.0, 0.0]),
    ("c", [0.0, 0.75, 0.75]),
    ("m", [0.75, 0.0, 0.75]),
    ("y", [0.75, 0.75, 0.0]),
    ("k", [0.0, 0.0, 0.0]),
    ("w", [1.0, 1.0, 1.0]),
];

/// Tableau 10 colors under their `tab:` names.
const TABLEAU_COLORS: [(&str, &str); 10] = [
    ("tab:blue", "#1f77b4"),
    ("tab:orange", "#ff7f0e"),
    ("tab:green", "#2ca02c"),
    ("tab:red", "#d62728"),
    ("tab:purple", "#9467bd"),
    ("tab:brown", "#8c564b"),
    ("tab:pink", "#e377c2"),
    ("tab:gray", "#7f7f7f"),
    ("tab:olive", "#bcbd22"),
    ("tab:cyan", "#17becf"),
];

/// Parses a hashed hex code. Accepts 3, 4, 6 or 8 digits.
fn parse_hashed(s: &str) -> Result<Rgba> {
    let digits = &s[1..];
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid_color(s, "malformed hex code"));
    }

    let width = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(Error::invalid_color(s, "hex code must have 3, 4, 6 or 8 digits")),
    };

    let mut channels = [1.0; 4];
    for (index, slot) in channels.iter_mut().enumerate().take(digits.len() / width) {
        let t = &digits[index * width..(index + 1) * width];
        let n = u8::from_str_radix(t, 16).map_err(|_| Error::invalid_color(s, "malformed hex code"))?;
        let n = if width == 1 { 16 * n + n } else { n };
        *slot = f64::from(n) / 255.0;
    }

    Ok(Rgba::from_array(channels))
}

/// Parses a single color string.
///
/// # Example
///
/// ```
/// use tasty_core::{parse_color, Rgba};
///
/// assert_eq!(parse_color("#ff0000").unwrap(), Rgba::new(1.0, 0.0, 0.0, 1.0));
/// assert_eq!(parse_color("k").unwrap(), Rgba::BLACK);
/// assert_eq!(parse_color("0.5").unwrap().g, 0.5);
/// assert!(parse_color("not_a_color").is_err());
/// ```
pub fn parse_color(s: &str) -> Result<Rgba> {
    if s.is_empty() {
        return Err(Error::invalid_color(s, "empty color string"));
    }

    if s.starts_with('#') {
        return parse_hashed(s);
    }

    if let Some((_, rgb)) = BASE_COLORS.iter().find(|(name, _)| *name == s) {
        return Ok(Rgba::opaque(Rgb::from_array(*rgb)));
    }

    let lower = s.to_ascii_lowercase();
    if let Some((_, hex)) = TABLEAU_COLORS.iter().find(|(name, _)| *name == lower) {
        return parse_hashed(hex);
    }

    if let Ok(level) = s.parse::<f64>() {
        return if level.is_finite() && (0.0..=1.0).contains(&level) {
            Ok(Rgba::opaque(Rgb::gray(level)))
        } else {
            Err(Error::invalid_color(s, "grey level must be within 0-1"))
        };
    }

    if s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid_color(s, "hex codes must start with '#'"));
    }

    let parsed = csscolorparser::parse(s)
        .map_err(|e| Error::invalid_color(s, e.to_string()))?;
    Ok(Rgba::new(
        f64::from(parsed.r),
        f64::from(parsed.g),
        f64::from(parsed.b),
        f64::from(parsed.a),
    ))
}

/// A single color as supplied by the user.
///
/// Strings are parsed with [`parse_color`]. Numeric tuples are interpreted
/// according to the [`ColorModel`] passed to [`ColorSpec::resolve`].
///
/// Deserializes from either a string or a list of numbers:
///
/// ```
/// use tasty_core::ColorSpec;
///
/// let specs: Vec<ColorSpec> = serde_json::from_str(r##"["red", [0.0, 1.0, 0.0]]"##).unwrap();
/// assert!(!specs[0].is_numeric());
/// assert!(specs[1].is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color, hex code, grey level or CSS color.
    Str(String),
    /// Numeric components, 3 or 4 of them.
    Tuple(Vec<f64>),
}

impl ColorSpec {
    /// Returns `true` for numeric tuples.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Tuple(_))
    }

    /// Resolves the spec to an RGBA color.
    ///
    /// With [`ColorModel::Hsv`], tuples are `(h, s, v)` or `(h, s, v, a)`;
    /// with any other model they are `(r, g, b)` or `(r, g, b, a)`.
    /// Every component must be finite and inside `[0, 1]`.
    pub fn resolve(&self, model: ColorModel) -> Result<Rgba> {
        match self {
            Self::Str(s) => parse_color(s),
            Self::Tuple(values) => {
                let (head, alpha) = match values.as_slice() {
                    [a, b, c] => ([*a, *b, *c], 1.0),
                    [a, b, c, d] => ([*a, *b, *c], *d),
                    other => return Err(Error::WrongArity { got: other.len() }),
                };
                let alpha = crate::color::check_unit("a", alpha)?;
                let rgb = match model {
                    ColorModel::Hsv => Hsv::try_from_array(head)?.to_rgb(),
                    ColorModel::Rgba | ColorModel::Rgb | ColorModel::Hex => {
                        Rgb::try_from_array(head)?
                    }
                };
                Ok(Rgba::from_rgb(rgb, alpha))
            }
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for ColorSpec {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<[f64; 3]> for ColorSpec {
    fn from(arr: [f64; 3]) -> Self {
        Self::Tuple(arr.to_vec())
    }
}

impl From<[f64; 4]> for ColorSpec {
    fn from(arr: [f64; 4]) -> Self {
        Self::Tuple(arr.to_vec())
    }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::Tuple(vec![a, b, c])
    }
}

impl From<(f64, f64, f64, f64)> for ColorSpec {
    fn from((a, b, c, d): (f64, f64, f64, f64)) -> Self {
        Self::Tuple(vec![a, b, c, d])
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        Self::from(rgb.to_array())
    }
}

impl From<Rgba> for ColorSpec {
    fn from(rgba: Rgba) -> Self {
        Self::from(rgba.to_array())
    }
}
