//! Build, tweak and register color palettes.
//!
//! This crate turns names, color lists and existing colormaps into
//! palettes you can edit and hand to a plotting layer:
//! - Look up built-in palettes by name, with `_r` for reversed
//! - Resize, reverse, merge and subset palettes
//! - Shift hue, saturation and value
//! - Keep named palettes in a [`Registry`]
//! - Load palette recipes from YAML
//! - Pair a palette with data bounds for a colorbar
//!
//! # Quick Start
//!
//! ```
//! use tastymap::{cook_tmap, ColorModel, CookOptions, TastyMap};
//!
//! // Start from a built-in palette
//! let tmap = TastyMap::from_name("viridis")?;
//!
//! // Resize, reverse and shift the hue
//! let edited = ((!(&tmap | 10)?) + 30.0)? << "warm_viridis";
//! assert_eq!(edited.to_string(), "warm_viridis (10 colors)");
//!
//! // Or all at once, from a spec string
//! let cooked = cook_tmap("viridis_n10_r", &CookOptions::new().name("rev10"))?;
//! assert_eq!(cooked.len(), 10);
//!
//! // Export for a plotting library
//! let hex = &cooked % ColorModel::Hex;
//! assert_eq!(hex.as_hex().map(|h| h.len()), Some(10));
//! # Ok::<(), tastymap::MapError>(())
//! ```
//!
//! # Spec Strings
//!
//! `TastyMap::from_str` and [`Registry::tmap`] read
//! `base[_n<count>][_r][_i<indices>]`:
//!
//! ```
//! use tastymap::TastyMap;
//!
//! let tmap: TastyMap = "RdBu_n9_i2:7".parse()?;
//! assert_eq!(tmap.len(), 5);
//! # Ok::<(), tastymap::MapError>(())
//! ```
//!
//! # Recipes
//!
//! ```ignore
//! use tastymap::{RecipeBook, Registry};
//!
//! let book = RecipeBook::from_file("palettes.yaml")?;
//! let mut registry = Registry::with_builtins();
//! book.cook_all(&mut registry)?;
//! let sunset = registry.tmap("sunset_r")?;
//! ```
//!
//! # Dependencies
//!
//! - [`tasty-core`] - Color types and parsing
//! - [`tasty-math`] - Interpolation and resampling
//! - [`tasty-palettes`] - Built-in palette data

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod colorbar;
mod colormap;
mod cook;
mod error;
mod indices;
mod recipe;
mod registry;
mod spec;
mod tmap;

// Re-exports
pub use colorbar::{pair_tbar, BarOptions, Bounds, BoundaryNorm, Extend, Norm, Spacing, TastyBar};
pub use colormap::{Colormap, Extremes};
pub use cook::{cook_tmap, CookOptions, Source};
pub use error::{MapError, MapResult};
pub use indices::Indices;
pub use recipe::{Recipe, RecipeBook};
pub use registry::Registry;
pub use spec::PaletteSpec;
pub use tmap::{ColorArray, HsvTweak, Interpolation, TastyMap, DEFAULT_NAME};

pub use tasty_core::{parse_color, ColorModel, ColorSpec, Hsv, Rgb, Rgba};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        cook_tmap, pair_tbar, BarOptions, Bounds, ColorModel, ColorSpec, Colormap, CookOptions,
        HsvTweak, MapError, MapResult, Registry, Rgba, TastyBar, TastyMap,
    };
}
