//! Colormap: a scalar-to-color lookup table.
//!
//! A [`Colormap`] stores `N >= 1` RGBA entries covering `[0, 1]` plus three
//! optional sentinel colors:
//!
//! - `bad` - returned for NaN (default: transparent black)
//! - `under` - returned below 0 (default: first entry)
//! - `over` - returned above 1 (default: last entry)
//!
//! Values inside `[0, 1]` select entry `min(floor(x * N), N - 1)`, which is
//! how plotting libraries index their lookup tables.
//!
//! # Example
//!
//! ```rust
//! use tasty_core::Rgba;
//! use tastymap::Colormap;
//!
//! let anchors = [Rgba::BLACK, Rgba::WHITE];
//! let cmap = Colormap::from_list("ramp", &anchors, 5).unwrap();
//!
//! assert_eq!(cmap.len(), 5);
//! assert_eq!(cmap.sample(0.0), Rgba::BLACK);
//! assert_eq!(cmap.sample(1.0), Rgba::WHITE);
//! assert_eq!(cmap.sample(f64::NAN), Rgba::TRANSPARENT);
//! ```

use serde::{Deserialize, Serialize};
use tasty_core::{ColorModel, ColorSpec, Rgba};
use tasty_math::{lerp_rgba, sample_positions};
use tasty_palettes::Builtin;

use crate::error::{MapError, MapResult};

/// Sentinel colors for values outside the colormap's domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    /// Color for NaN.
    pub bad: Option<Rgba>,
    /// Color for values below 0.
    pub under: Option<Rgba>,
    /// Color for values above 1.
    pub over: Option<Rgba>,
}

impl Extremes {
    /// Creates extremes from already-resolved colors.
    pub const fn new(bad: Option<Rgba>, under: Option<Rgba>, over: Option<Rgba>) -> Self {
        Self { bad, under, over }
    }

    /// Resolves user color specs. Tuples are read as RGB(A).
    pub fn from_specs(
        bad: Option<&ColorSpec>,
        under: Option<&ColorSpec>,
        over: Option<&ColorSpec>,
    ) -> MapResult<Self> {
        let resolve = |spec: Option<&ColorSpec>| -> MapResult<Option<Rgba>> {
            spec.map(|s| s.resolve(ColorModel::Rgba)).transpose().map_err(MapError::from)
        };
        Ok(Self::new(resolve(bad)?, resolve(under)?, resolve(over)?))
    }

    /// Returns true if no sentinel is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bad.is_none() && self.under.is_none() && self.over.is_none()
    }

    /// Overlays `other` on top of `self`; sentinels set in `other` win.
    pub fn overlay(self, other: Extremes) -> Self {
        Self {
            bad: other.bad.or(self.bad),
            under: other.under.or(self.under),
            over: other.over.or(self.over),
        }
    }
}

/// A named lookup table of colors with out-of-range sentinels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colormap {
    name: String,
    lut: Vec<Rgba>,
    extremes: Extremes,
}

impl Colormap {
    /// Builds an `n`-entry table by linear RGBA interpolation between anchors.
    ///
    /// Anchors are spread evenly over `[0, 1]`. A single anchor is repeated.
    ///
    /// # Errors
    ///
    /// [`MapError::EmptyPalette`] for no anchors, [`MapError::OutOfRange`]
    /// for `n == 0`.
    pub fn from_list(name: impl Into<String>, anchors: &[Rgba], n: usize) -> MapResult<Self> {
        if anchors.is_empty() {
            return Err(MapError::EmptyPalette);
        }
        if n == 0 {
            return Err(MapError::out_of_range("number of colors", 0.0, ">= 1"));
        }
        let lut = sample_positions(anchors.len(), n)
            .into_iter()
            .map(|p| lerp_rgba(anchors[p.lo], anchors[p.hi], p.t))
            .collect();
        Ok(Self {
            name: name.into(),
            lut,
            extremes: Extremes::default(),
        })
    }

    /// Uses `colors` verbatim as the lookup table.
    pub fn listed(name: impl Into<String>, colors: Vec<Rgba>) -> MapResult<Self> {
        if colors.is_empty() {
            return Err(MapError::EmptyPalette);
        }
        Ok(Self {
            name: name.into(),
            lut: colors,
            extremes: Extremes::default(),
        })
    }

    /// Assembles a colormap from parts the caller has already validated.
    pub(crate) fn from_parts(name: String, lut: Vec<Rgba>, extremes: Extremes) -> Self {
        debug_assert!(!lut.is_empty());
        Self { name, lut, extremes }
    }

    /// Expands a built-in palette.
    ///
    /// Continuous palettes are interpolated to their lookup table size,
    /// qualitative ones are used as listed.
    pub fn from_builtin(builtin: &Builtin) -> MapResult<Self> {
        let anchors = builtin.anchors()?;
        if builtin.kind.is_continuous() {
            Self::from_list(builtin.name, &anchors, builtin.lut_size())
        } else {
            Self::listed(builtin.name, anchors)
        }
    }

    /// Colormap name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lookup table entries.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.lut
    }

    /// Number of entries. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.lut.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// Sentinels as set by the user.
    #[inline]
    pub fn extremes(&self) -> Extremes {
        self.extremes
    }

    /// Color for NaN.
    pub fn bad(&self) -> Rgba {
        self.extremes.bad.unwrap_or(Rgba::TRANSPARENT)
    }

    /// Color below the domain.
    pub fn under(&self) -> Rgba {
        self.extremes.under.unwrap_or_else(|| self.first())
    }

    /// Color above the domain.
    pub fn over(&self) -> Rgba {
        self.extremes.over.unwrap_or_else(|| self.last())
    }

    fn first(&self) -> Rgba {
        self.lut.first().copied().unwrap_or_default()
    }

    fn last(&self) -> Rgba {
        self.lut.last().copied().unwrap_or_default()
    }

    /// Maps a normalized value to a color.
    pub fn sample(&self, x: f64) -> Rgba {
        if x.is_nan() {
            return self.bad();
        }
        if x < 0.0 {
            return self.under();
        }
        if x > 1.0 {
            return self.over();
        }
        let n = self.lut.len();
        let idx = ((x * n as f64).floor() as usize).min(n - 1);
        self.lut[idx]
    }

    /// Maps a table index to a color; negatives are under, past-the-end is over.
    pub fn at(&self, index: isize) -> Rgba {
        if index < 0 {
            return self.under();
        }
        self.lut.get(index as usize).copied().unwrap_or_else(|| self.over())
    }

    /// Samples many values at once.
    pub fn sample_many(&self, xs: &[f64]) -> Vec<Rgba> {
        xs.iter().map(|&x| self.sample(x)).collect()
    }

    /// Returns a copy with the given sentinels set; unset ones are kept.
    pub fn with_extremes(mut self, extremes: Extremes) -> Self {
        self.extremes = self.extremes.overlay(extremes);
        self
    }

    /// Returns a copy under a new name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns a copy with the table reversed.
    ///
    /// Sentinels stay where they are: `under` still means below 0.
    pub fn reversed(&self) -> Self {
        let mut lut = self.lut.clone();
        lut.reverse();
        Self {
            name: self.name.clone(),
            lut,
            extremes: self.extremes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp(n: usize) -> Colormap {
        Colormap::from_list("ramp", &[Rgba::BLACK, Rgba::WHITE], n).unwrap()
    }

    #[test]
    fn test_from_list_interpolates() {
        let cmap = ramp(5);
        assert_eq!(cmap.len(), 5);
        assert_abs_diff_eq!(cmap.colors()[2].r, 0.5);
        assert_abs_diff_eq!(cmap.colors()[1].g, 0.25);
        assert_eq!(cmap.colors()[4], Rgba::WHITE);
    }

    #[test]
    fn test_from_list_single_anchor() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let cmap = Colormap::from_list("red", &[red], 3).unwrap();
        assert!(cmap.colors().iter().all(|c| *c == red));
    }

    #[test]
    fn test_from_list_rejects_empty() {
        assert!(matches!(Colormap::from_list("x", &[], 3), Err(MapError::EmptyPalette)));
        assert!(matches!(
            Colormap::from_list("x", &[Rgba::BLACK], 0),
            Err(MapError::OutOfRange { .. })
        ));
        assert!(matches!(Colormap::listed("x", vec![]), Err(MapError::EmptyPalette)));
    }

    #[test]
    fn test_sample_bins() {
        let cmap = ramp(4);
        assert_eq!(cmap.sample(0.0), cmap.colors()[0]);
        assert_eq!(cmap.sample(0.24), cmap.colors()[0]);
        assert_eq!(cmap.sample(0.25), cmap.colors()[1]);
        assert_eq!(cmap.sample(0.99), cmap.colors()[3]);
        assert_eq!(cmap.sample(1.0), cmap.colors()[3]);
    }

    #[test]
    fn test_sample_extremes_defaults() {
        let cmap = ramp(4);
        assert_eq!(cmap.sample(f64::NAN), Rgba::TRANSPARENT);
        assert_eq!(cmap.sample(-0.1), Rgba::BLACK);
        assert_eq!(cmap.sample(1.1), Rgba::WHITE);
        assert_eq!(cmap.at(-1), Rgba::BLACK);
        assert_eq!(cmap.at(4), Rgba::WHITE);
        assert_eq!(cmap.at(1), cmap.colors()[1]);
    }

    #[test]
    fn test_with_extremes_overlays() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);
        let cmap = ramp(4)
            .with_extremes(Extremes::new(None, Some(red), None))
            .with_extremes(Extremes::new(Some(blue), None, None));
        assert_eq!(cmap.sample(-1.0), red);
        assert_eq!(cmap.sample(f64::NAN), blue);
        assert_eq!(cmap.sample(2.0), Rgba::WHITE);
    }

    #[test]
    fn test_reversed_keeps_extremes() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let cmap = ramp(3).with_extremes(Extremes::new(None, Some(red), None));
        let rev = cmap.reversed();
        assert_eq!(rev.colors()[0], Rgba::WHITE);
        assert_eq!(rev.extremes().under, Some(red));
        assert_eq!(rev.reversed(), cmap);
    }

    #[test]
    fn test_extremes_from_specs() {
        let bad = ColorSpec::from("k");
        let over = ColorSpec::from([1.0, 1.0, 1.0]);
        let ext = Extremes::from_specs(Some(&bad), None, Some(&over)).unwrap();
        assert_eq!(ext.bad, Some(Rgba::BLACK));
        assert_eq!(ext.over, Some(Rgba::WHITE));
        assert!(ext.under.is_none());

        let broken = ColorSpec::from("not_a_color");
        assert!(Extremes::from_specs(Some(&broken), None, None).is_err());
    }

    #[test]
    fn test_serializes_sentinels() {
        let cmap = ramp(2).with_extremes(Extremes::new(Some(Rgba::WHITE), None, None));
        let json = serde_json::to_value(&cmap).unwrap();
        assert_eq!(json["name"], "ramp");
        assert_eq!(json["extremes"]["bad"]["r"], 1.0);
        assert!(json["extremes"]["under"].is_null());
    }

    #[test]
    fn test_builtin_sizes() {
        let viridis = Colormap::from_builtin(tasty_palettes::find("viridis").unwrap()).unwrap();
        assert_eq!(viridis.len(), 256);
        assert_eq!(viridis.name(), "viridis");
        let set1 = Colormap::from_builtin(tasty_palettes::find("Set1").unwrap()).unwrap();
        assert_eq!(set1.len(), 9);
    }
}
