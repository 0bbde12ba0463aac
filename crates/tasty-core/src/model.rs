//! Color model identifiers.
//!
//! A [`ColorModel`] names how a list of colors is written down: as RGBA or
//! RGB tuples, as HSV tuples, or as hex codes. It is used in both
//! directions, to interpret numeric input and to select an export format.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of supported color models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
    /// Red, green, blue.
    Rgb,
    /// Hue, saturation, value.
    Hsv,
    /// Hex code, `#rrggbb`.
    Hex,
}

impl ColorModel {
    /// All models, in declaration order.
    pub const ALL: [ColorModel; 4] = [Self::Rgba, Self::Rgb, Self::Hsv, Self::Hex];

    /// Lowercase name used for parsing and display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgba => "rgba",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Hex => "hex",
        }
    }

    /// Returns `true` for models that describe numeric tuples.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Hex)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| Error::InvalidColorModel {
                model: s.to_string(),
                choices: Self::ALL.iter().map(|m| m.as_str()).collect(),
            })
    }
}
