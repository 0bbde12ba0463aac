//! # tasty-core
//!
//! Core color types for palette authoring.
//!
//! This crate provides the foundational types used throughout tastymap:
//!
//! - [`Rgb`], [`Rgba`], [`Hsv`] - color values with `f64` components in `[0, 1]`
//! - [`ColorModel`] - how a list of colors is written (RGBA, RGB, HSV, hex)
//! - [`ColorSpec`] and [`parse_color`] - turning user input into colors
//! - [`Error`] - failures while parsing or validating colors
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other crates build on it:
//!
//! ```text
//! tasty-core (this crate)
//!    ^
//!    |
//!    +-- tasty-math (interpolation, resampling)
//!    +-- tasty-palettes (built-in palette data)
//!    +-- tastymap (colormaps, palettes, registry, colorbars)
//! ```
//!
//! ## Conversions
//!
//! RGB and HSV convert losslessly in both directions within floating-point
//! tolerance:
//!
//! ```
//! use tasty_core::Rgb;
//!
//! let rgb = Rgb::new(0.2, 0.4, 0.6);
//! let back = rgb.to_hsv().to_rgb();
//! assert!((back.b - rgb.b).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod model;
pub mod parse;

pub use color::{Hsv, Rgb, Rgba};
pub use error::{Error, Result};
pub use model::ColorModel;
pub use parse::{parse_color, ColorSpec};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{Hsv, Rgb, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::model::ColorModel;
    pub use crate::parse::{parse_color, ColorSpec};
}
