//! One-call palette construction.
//!
//! [`cook_tmap`] takes a palette from any [`Source`] and applies the usual
//! edits in a fixed order:
//!
//! 1. sentinels (`bad`, `under`, `over`)
//! 2. resize to `num_colors`
//! 3. reverse
//! 4. HSV tweak
//! 5. rename
//!
//! ```rust
//! use tastymap::{cook_tmap, CookOptions};
//!
//! let opts = CookOptions::new().num_colors(6).reverse(true).name("rev_blues");
//! let tmap = cook_tmap("Blues", &opts)?;
//! assert_eq!(tmap.to_string(), "rev_blues (6 colors)");
//! # Ok::<(), tastymap::MapError>(())
//! ```

use serde::Deserialize;
use tasty_core::{ColorModel, ColorSpec};
use tracing::debug;

use crate::colormap::{Colormap, Extremes};
use crate::error::{MapError, MapResult};
use crate::registry::Registry;
use crate::tmap::{HsvTweak, Interpolation, TastyMap};

/// Where a cooked palette starts from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A palette name or spec string such as `viridis_n8_r`.
    Spec(String),
    /// An existing colormap.
    Colormap(Colormap),
    /// Individual colors.
    Colors(Vec<ColorSpec>),
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Self::Spec(s.to_string())
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Self::Spec(s)
    }
}

impl From<Colormap> for Source {
    fn from(cmap: Colormap) -> Self {
        Self::Colormap(cmap)
    }
}

impl From<TastyMap> for Source {
    fn from(tmap: TastyMap) -> Self {
        Self::Colormap(tmap.into_colormap())
    }
}

impl From<&TastyMap> for Source {
    fn from(tmap: &TastyMap) -> Self {
        Self::Colormap(tmap.cmap().clone())
    }
}

impl<C: Into<ColorSpec>> From<Vec<C>> for Source {
    fn from(colors: Vec<C>) -> Self {
        Self::Colors(colors.into_iter().map(Into::into).collect())
    }
}

/// Edits applied by [`cook_tmap`]. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CookOptions {
    /// Resize to this many colors.
    pub num_colors: Option<usize>,
    /// Reverse after resizing.
    pub reverse: bool,
    /// Final name. [`Registry::cook`] registers under it.
    pub name: Option<String>,
    /// Color for NaN.
    pub bad: Option<ColorSpec>,
    /// Color below the range.
    pub under: Option<ColorSpec>,
    /// Color above the range.
    pub over: Option<ColorSpec>,
    /// How numeric color tuples are read. Required when any are given.
    #[serde(alias = "color_model")]
    pub from_color_model: Option<ColorModel>,
    /// Interpolation used by the resize step.
    pub interpolation: Interpolation,
    /// Hue/saturation/value adjustment applied after reversing.
    pub tweak: Option<HsvTweak>,
}

impl CookOptions {
    /// No edits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target size.
    pub fn num_colors(mut self, n: usize) -> Self {
        self.num_colors = Some(n);
        self
    }

    /// Sets whether to reverse.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Sets the final name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the NaN color.
    pub fn bad(mut self, color: impl Into<ColorSpec>) -> Self {
        self.bad = Some(color.into());
        self
    }

    /// Sets the below-range color.
    pub fn under(mut self, color: impl Into<ColorSpec>) -> Self {
        self.under = Some(color.into());
        self
    }

    /// Sets the above-range color.
    pub fn over(mut self, color: impl Into<ColorSpec>) -> Self {
        self.over = Some(color.into());
        self
    }

    /// Sets the model for numeric color tuples.
    pub fn from_color_model(mut self, model: ColorModel) -> Self {
        self.from_color_model = Some(model);
        self
    }

    /// Sets the resize interpolation.
    pub fn interpolation(mut self, interp: Interpolation) -> Self {
        self.interpolation = interp;
        self
    }

    /// Sets the HSV tweak.
    pub fn tweak(mut self, tweak: HsvTweak) -> Self {
        self.tweak = Some(tweak);
        self
    }
}

/// Builds a palette from `source` and applies `options`.
///
/// Names and spec strings resolve against the built-in palettes. Use
/// [`Registry::cook`] to resolve against registered palettes too.
///
/// # Errors
///
/// - [`MapError::MissingColorModel`] if numeric tuples come without
///   `from_color_model`
/// - [`MapError::EmptyPalette`] for an empty color list
/// - [`MapError::UnknownColormap`] for an unknown name
/// - [`MapError::OutOfRange`] for `num_colors == 0` or a bad tweak
pub fn cook_tmap(source: impl Into<Source>, options: &CookOptions) -> MapResult<TastyMap> {
    cook_with(&Registry::with_builtins(), source.into(), options)
}

pub(crate) fn cook_with(
    registry: &Registry,
    source: Source,
    options: &CookOptions,
) -> MapResult<TastyMap> {
    let mut tmap = match source {
        Source::Spec(spec) => registry.tmap(&spec)?,
        Source::Colormap(cmap) => TastyMap::from_colormap(cmap),
        Source::Colors(colors) => {
            if colors.is_empty() {
                return Err(MapError::EmptyPalette);
            }
            let numeric = colors.iter().any(ColorSpec::is_numeric);
            let model = match options.from_color_model {
                Some(model) => model,
                None if numeric => return Err(MapError::MissingColorModel),
                None => ColorModel::Rgb,
            };
            TastyMap::from_list(colors, model)?
        }
    };

    let extremes = Extremes::from_specs(
        options.bad.as_ref(),
        options.under.as_ref(),
        options.over.as_ref(),
    )?;
    if !extremes.is_empty() {
        tmap = tmap.with_extremes(extremes);
    }
    if let Some(n) = options.num_colors {
        tmap = tmap.resize_with(n, options.interpolation)?;
    }
    if options.reverse {
        tmap = tmap.reverse();
    }
    if let Some(tweak) = &options.tweak {
        tmap = tmap.tweak_hsv(tweak)?;
    }
    if let Some(name) = &options.name {
        tmap = tmap.rename(name.as_str());
    }

    debug!(name = tmap.name(), len = tmap.len(), "cooked palette");
    Ok(tmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasty_core::Rgba;

    #[test]
    fn test_cook_name_only_renames() {
        let tmap = cook_tmap("viridis", &CookOptions::new().name("mine")).unwrap();
        assert_eq!(tmap.name(), "mine");
        assert_eq!(tmap.len(), 256);
    }

    #[test]
    fn test_cook_spec_string() {
        let tmap = cook_tmap("Greys_n3", &CookOptions::new()).unwrap();
        assert_eq!(tmap.len(), 3);
        assert_eq!(tmap.name(), "Greys_n3");
    }

    #[test]
    fn test_cook_numeric_needs_model() {
        let colors = vec![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(matches!(
            cook_tmap(colors.clone(), &CookOptions::new()),
            Err(MapError::MissingColorModel)
        ));
        let tmap = cook_tmap(colors, &CookOptions::new().from_color_model(ColorModel::Rgb)).unwrap();
        assert_eq!(tmap.colors()[0], Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_cook_strings_need_no_model() {
        let tmap = cook_tmap(vec!["red", "blue"], &CookOptions::new()).unwrap();
        assert_eq!(tmap.len(), 2);
        assert_eq!(tmap.name(), crate::tmap::DEFAULT_NAME);
    }

    #[test]
    fn test_cook_empty_list() {
        let empty: Vec<ColorSpec> = Vec::new();
        assert!(matches!(cook_tmap(empty, &CookOptions::new()), Err(MapError::EmptyPalette)));
    }

    #[test]
    fn test_cook_order_resize_then_reverse() {
        let opts = CookOptions::new()
            .num_colors(3)
            .reverse(true)
            .interpolation(Interpolation::Rgb)
            .under("red");
        let tmap = cook_tmap(vec!["black", "white"], &opts).unwrap();
        assert_eq!(tmap.colors()[0], Rgba::WHITE);
        assert_eq!(tmap.colors()[2], Rgba::BLACK);
        assert_eq!(tmap.cmap().under(), Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_cook_tweak() {
        let opts = CookOptions::new().tweak(HsvTweak::new().value(0.0));
        let tmap = cook_tmap(vec!["red", "lime"], &opts).unwrap();
        assert!(tmap.iter().all(|c| *c == Rgba::BLACK));
    }

    #[test]
    fn test_cook_zero_colors_fails() {
        assert!(matches!(
            cook_tmap("viridis", &CookOptions::new().num_colors(0)),
            Err(MapError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_options_from_yaml() {
        let opts: CookOptions = serde_yaml::from_str(
            "num_colors: 4\ncolor_model: hsv\nbad: [0.0, 0.0, 0.0]\ntweak: {hue: 10}\n",
        )
        .unwrap();
        assert_eq!(opts.num_colors, Some(4));
        assert_eq!(opts.from_color_model, Some(ColorModel::Hsv));
        assert_eq!(opts.tweak.and_then(|t| t.hue), Some(10.0));
        assert!(serde_yaml::from_str::<CookOptions>("colour: red").is_err());
    }

    #[test]
    fn test_registry_cook_registers() {
        let mut registry = Registry::with_builtins();
        registry.cook("RdBu", &CookOptions::new().num_colors(4).name("rdbu4")).unwrap();
        assert_eq!(registry.get("rdbu4").unwrap().len(), 4);
        registry.cook("rdbu4_r", &CookOptions::new()).unwrap();
        assert_eq!(registry.len(), 1);
    }
}
