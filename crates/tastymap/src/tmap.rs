//! The palette value object and its operators.
//!
//! A [`TastyMap`] wraps a [`Colormap`] and never changes in place: every
//! edit returns a new palette. The common edits also have operator forms:
//!
//! | operator | method | notes |
//! |----------|--------|-------|
//! | `tmap \| n` | [`TastyMap::resize`] | fallible |
//! | `tmap << "name"` | [`TastyMap::rename`] | |
//! | `!tmap` | [`TastyMap::reverse`] | |
//! | `tmap % model` | [`TastyMap::to_model`] | |
//! | `tmap + h`, `tmap - h` | hue shift | fallible |
//! | `tmap * s`, `tmap / s` | saturation factor | fallible |
//! | `tmap ^ v` | value factor | fallible |
//! | `&a & &b` | [`TastyMap::merge`] | |
//!
//! Operators are implemented for both `TastyMap` and `&TastyMap`.
//!
//! # Example
//!
//! ```rust
//! use tastymap::{ColorModel, TastyMap};
//!
//! let tmap = TastyMap::from_name("viridis")?;
//! let small = (&tmap | 8)? << "small_viridis";
//! assert_eq!(small.to_string(), "small_viridis (8 colors)");
//!
//! let warmer = (&small + 20.0)?;
//! let hex = &warmer % ColorModel::Hex;
//! assert_eq!(hex.len(), 8);
//! # Ok::<(), tastymap::MapError>(())
//! ```

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tasty_core::{ColorModel, ColorSpec, Rgba};
use tasty_math::{lerp_hsva, lerp_rgba, sample_positions};
use tracing::{debug, info, trace};

use crate::colormap::{Colormap, Extremes};
use crate::error::{MapError, MapResult};
use crate::indices::Indices;
use crate::registry::{lookup_builtin, Registry};

/// Name given to palettes built from a bare color list.
pub const DEFAULT_NAME: &str = "custom_tastymap";

/// Color space used when resampling a palette to a new length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Hue on the shorter arc, saturation and value linearly.
    #[default]
    Hsv,
    /// Component-wise in RGBA.
    Rgb,
}

/// Hue, saturation and value adjustments for [`TastyMap::tweak_hsv`].
///
/// ```rust
/// use tastymap::HsvTweak;
///
/// let tweak = HsvTweak::new().hue(30.0).saturation(1.5).name("punchy");
/// assert_eq!(tweak.value, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HsvTweak {
    /// Hue shift in `[-255, 255]`, applied as `hue / 255` of a turn.
    pub hue: Option<f64>,
    /// Saturation factor in `[-10, 10]`.
    pub saturation: Option<f64>,
    /// Value (brightness) factor in `[0, 3]`.
    pub value: Option<f64>,
    /// Name for the tweaked palette.
    pub name: Option<String>,
}

impl HsvTweak {
    /// No adjustment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hue shift.
    pub fn hue(mut self, hue: f64) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets the saturation factor.
    pub fn saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Sets the value factor.
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the output name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if nothing would change the colors.
    pub fn is_identity(&self) -> bool {
        self.hue.is_none() && self.saturation.is_none() && self.value.is_none()
    }

    /// Checks every set factor against its range.
    pub fn validate(&self) -> MapResult<()> {
        if let Some(h) = self.hue {
            if h.is_nan() || h.abs() > 255.0 {
                return Err(MapError::out_of_range("hue", h, "[-255, 255]"));
            }
        }
        if let Some(s) = self.saturation {
            if s.is_nan() || s.abs() > 10.0 {
                return Err(MapError::out_of_range("saturation", s, "[-10, 10]"));
            }
        }
        if let Some(v) = self.value {
            if !(0.0..=3.0).contains(&v) {
                return Err(MapError::out_of_range("value", v, "[0, 3]"));
            }
        }
        Ok(())
    }

    fn apply(&self, color: Rgba) -> Rgba {
        let mut hsv = color.to_hsv();
        if let Some(h) = self.hue {
            hsv.h = (hsv.h + h / 255.0).rem_euclid(1.0);
        }
        if let Some(s) = self.saturation {
            hsv.s *= s;
        }
        if let Some(v) = self.value {
            hsv.v *= v;
        }
        Rgba::from_rgb(hsv.clamped().to_rgb(), color.a)
    }
}

/// Colors exported in one color model, as returned by [`TastyMap::to_model`].
///
/// Serializes as a plain list: `[[r, g, b, a], ...]`, `["#rrggbb", ...]`, etc.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorArray {
    /// `[r, g, b, a]` rows.
    Rgba(Vec<[f64; 4]>),
    /// `[r, g, b]` rows.
    Rgb(Vec<[f64; 3]>),
    /// `[h, s, v]` rows.
    Hsv(Vec<[f64; 3]>),
    /// `#rrggbb` strings.
    Hex(Vec<String>),
}

impl ColorArray {
    /// Number of colors.
    pub fn len(&self) -> usize {
        match self {
            Self::Rgba(v) => v.len(),
            Self::Rgb(v) | Self::Hsv(v) => v.len(),
            Self::Hex(v) => v.len(),
        }
    }

    /// Returns true if there are no colors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Model the colors are written in.
    pub fn model(&self) -> ColorModel {
        match self {
            Self::Rgba(_) => ColorModel::Rgba,
            Self::Rgb(_) => ColorModel::Rgb,
            Self::Hsv(_) => ColorModel::Hsv,
            Self::Hex(_) => ColorModel::Hex,
        }
    }

    /// Hex strings, if this is a hex export.
    pub fn as_hex(&self) -> Option<&[String]> {
        match self {
            Self::Hex(v) => Some(v),
            _ => None,
        }
    }
}

/// A palette: an ordered, fixed-length list of colors with a name and
/// optional out-of-range sentinels.
///
/// Equality compares colors only.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TastyMap {
    cmap: Colormap,
}

impl TastyMap {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wraps an existing colormap.
    pub fn from_colormap(cmap: Colormap) -> Self {
        Self { cmap }
    }

    /// Looks up a built-in palette by name, ignoring case.
    ///
    /// A trailing `_r` gives the reversed palette. Unknown names fail with
    /// up to five close matches.
    pub fn from_name(name: &str) -> MapResult<Self> {
        let cmap = lookup_builtin(name)?.renamed(name);
        debug!(name, len = cmap.len(), "palette from name");
        Ok(Self::from_colormap(cmap))
    }

    /// Builds a palette with one entry per color, named [`DEFAULT_NAME`].
    ///
    /// Numeric tuples are read according to `model`; strings are parsed
    /// as color names or hex codes whatever the model.
    pub fn from_list<I, C>(colors: I, model: ColorModel) -> MapResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorSpec>,
    {
        Self::from_list_named(DEFAULT_NAME, colors, model)
    }

    /// Like [`from_list`](Self::from_list) with an explicit name.
    pub fn from_list_named<I, C>(name: &str, colors: I, model: ColorModel) -> MapResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorSpec>,
    {
        let lut = colors
            .into_iter()
            .map(|c| c.into().resolve(model))
            .collect::<Result<Vec<_>, _>>()?;
        let cmap = Colormap::listed(name, lut)?;
        debug!(name, len = cmap.len(), ?model, "palette from list");
        Ok(Self::from_colormap(cmap))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Palette name.
    #[inline]
    pub fn name(&self) -> &str {
        self.cmap.name()
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.cmap.len()
    }

    /// Always false: a palette has at least one color.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmap.is_empty()
    }

    /// Colors as RGBA.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        self.cmap.colors()
    }

    /// Iterates over colors.
    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> {
        self.cmap.colors().iter()
    }

    /// The underlying colormap.
    #[inline]
    pub fn cmap(&self) -> &Colormap {
        &self.cmap
    }

    /// Unwraps into the underlying colormap.
    pub fn into_colormap(self) -> Colormap {
        self.cmap
    }

    // ========================================================================
    // Edits
    // ========================================================================

    /// Resamples to `n` colors in HSV, keeping name and sentinels.
    pub fn resize(&self, n: usize) -> MapResult<Self> {
        self.resize_with(n, Interpolation::Hsv)
    }

    /// Resamples to `n` colors with the given interpolation.
    ///
    /// The first and last colors are kept exactly.
    pub fn resize_with(&self, n: usize, interp: Interpolation) -> MapResult<Self> {
        if n == 0 {
            return Err(MapError::out_of_range("number of colors", 0.0, ">= 1"));
        }
        let src = self.colors();
        let lerp: fn(Rgba, Rgba, f64) -> Rgba = match interp {
            Interpolation::Hsv => lerp_hsva,
            Interpolation::Rgb => lerp_rgba,
        };
        let lut = sample_positions(src.len(), n)
            .into_iter()
            .map(|p| lerp(src[p.lo], src[p.hi], p.t))
            .collect();
        debug!(name = self.name(), from = src.len(), to = n, ?interp, "resize");
        self.with_lut(self.name(), lut)
    }

    /// Returns a copy under a new name.
    pub fn rename(&self, name: impl Into<String>) -> Self {
        Self::from_colormap(self.cmap.clone().renamed(name))
    }

    /// Adds the palette to `registry`, optionally under a new name.
    ///
    /// An existing entry of the same name is replaced.
    pub fn register(&self, registry: &mut Registry, name: Option<&str>) -> Self {
        let tmap = match name {
            Some(n) => self.rename(n),
            None => self.clone(),
        };
        registry.register(tmap.cmap.clone());
        info!(
            name = tmap.name(),
            "registered the colormap; to use, set cmap='{}' in your plot",
            tmap.name()
        );
        tmap
    }

    /// Reverses color order. Sentinels are kept as they are.
    pub fn reverse(&self) -> Self {
        Self::from_colormap(self.cmap.reversed())
    }

    /// Exports colors in the requested model.
    pub fn to_model(&self, model: ColorModel) -> ColorArray {
        let colors = self.colors().iter();
        match model {
            ColorModel::Rgba => ColorArray::Rgba(colors.map(|c| c.to_array()).collect()),
            ColorModel::Rgb => ColorArray::Rgb(colors.map(|c| c.rgb().to_array()).collect()),
            ColorModel::Hsv => ColorArray::Hsv(colors.map(|c| c.to_hsv().to_array()).collect()),
            ColorModel::Hex => ColorArray::Hex(colors.map(|c| c.to_hex()).collect()),
        }
    }

    /// Sets sentinel colors; `None` leaves a sentinel unchanged.
    pub fn set_extremes(&self, bad: Option<Rgba>, under: Option<Rgba>, over: Option<Rgba>) -> Self {
        self.with_extremes(Extremes::new(bad, under, over))
    }

    /// Sets sentinel colors from an [`Extremes`] value.
    pub fn with_extremes(&self, extremes: Extremes) -> Self {
        Self::from_colormap(self.cmap.clone().with_extremes(extremes))
    }

    /// Adjusts hue, saturation and value of every color.
    ///
    /// Out-of-range factors fail before anything is computed. Results are
    /// clipped to `[0, 1]` in HSV. Alpha and sentinels are kept.
    pub fn tweak_hsv(&self, tweak: &HsvTweak) -> MapResult<Self> {
        tweak.validate()?;
        let lut = self.colors().iter().map(|&c| tweak.apply(c)).collect();
        let name = tweak.name.as_deref().unwrap_or(self.name());
        trace!(name, ?tweak, "tweak hsv");
        self.with_lut(name, lut)
    }

    /// Concatenates two palettes. The name is `a_b`; sentinels come from `self`.
    pub fn merge(&self, other: &TastyMap) -> Self {
        let name = format!("{}_{}", self.name(), other.name());
        let mut lut = self.colors().to_vec();
        lut.extend_from_slice(other.colors());
        debug!(%name, len = lut.len(), "merge");
        Self::from_colormap(Colormap::from_parts(name, lut, self.cmap.extremes()))
    }

    /// Selects entries by index. The name gets an `_i<indices>` suffix.
    ///
    /// A single selected color is doubled so the result still spans a range.
    pub fn subset(&self, indices: &Indices) -> MapResult<Self> {
        let positions = indices.resolve(self.len())?;
        let mut lut: Vec<Rgba> = positions.iter().map(|&i| self.colors()[i]).collect();
        match lut.len() {
            0 => {
                return Err(MapError::invalid_indices(format!(
                    "'{indices}' selects nothing from {} colors",
                    self.len()
                )));
            }
            1 => lut.push(lut[0]),
            _ => {}
        }
        let name = format!("{}_i{indices}", self.name());
        self.with_lut(&name, lut)
    }

    fn with_lut(&self, name: &str, lut: Vec<Rgba>) -> MapResult<Self> {
        let cmap = Colormap::listed(name, lut)?.with_extremes(self.cmap.extremes());
        Ok(Self::from_colormap(cmap))
    }
}

impl PartialEq for TastyMap {
    fn eq(&self, other: &Self) -> bool {
        self.colors() == other.colors()
    }
}

impl fmt::Display for TastyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} colors)", self.name(), self.len())
    }
}

impl FromStr for TastyMap {
    type Err = MapError;

    /// Parses `base[_n<count>][_r][_i<indices>]` against the built-ins.
    fn from_str(s: &str) -> MapResult<Self> {
        Registry::with_builtins().tmap(s)
    }
}

impl From<Colormap> for TastyMap {
    fn from(cmap: Colormap) -> Self {
        Self::from_colormap(cmap)
    }
}

impl<'a> IntoIterator for &'a TastyMap {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Operators
// ============================================================================

// tmap + hue
impl Add<f64> for &TastyMap {
    type Output = MapResult<TastyMap>;

    fn add(self, hue: f64) -> Self::Output {
        self.tweak_hsv(&HsvTweak::new().hue(hue))
    }
}

// tmap - hue
impl Sub<f64> for &TastyMap {
    type Output = MapResult<TastyMap>;

    fn sub(self, hue: f64) -> Self::Output {
        self.tweak_hsv(&HsvTweak::new().hue(-hue))
    }
}

// tmap * saturation
impl Mul<f64> for &TastyMap {
    type Output = MapResult<TastyMap>;

    fn mul(self, saturation: f64) -> Self::Output {
        self.tweak_hsv(&HsvTweak::new().saturation(saturation))
    }
}

// tmap / saturation
impl Div<f64> for &TastyMap {
    type Output = MapResult<TastyMap>;

    fn div(self, saturation: f64) -> Self::Output {
        if saturation == 0.0 {
            return Err(MapError::out_of_range("saturation divisor", saturation, "non-zero"));
        }
        self.tweak_hsv(&HsvTweak::new().saturation(1.0 / saturation))
    }
}

// tmap ^ value
impl BitXor<f64> for &TastyMap {
    type Output = MapResult<TastyMap>;

    fn bitxor(self, value: f64) -> Self::Output {
        self.tweak_hsv(&HsvTweak::new().value(value))
    }
}

// tmap | num_colors
impl BitOr<usize> for &TastyMap {
    type Output = MapResult<TastyMap>;

    fn bitor(self, n: usize) -> Self::Output {
        self.resize(n)
    }
}

// tmap << name
impl Shl<&str> for &TastyMap {
    type Output = TastyMap;

    fn shl(self, name: &str) -> TastyMap {
        self.rename(name)
    }
}

// tmap % model
impl Rem<ColorModel> for &TastyMap {
    type Output = ColorArray;

    fn rem(self, model: ColorModel) -> ColorArray {
        self.to_model(model)
    }
}

// !tmap
impl Not for &TastyMap {
    type Output = TastyMap;

    fn not(self) -> TastyMap {
        self.reverse()
    }
}

// tmap & other
impl BitAnd<&TastyMap> for &TastyMap {
    type Output = TastyMap;

    fn bitand(self, other: &TastyMap) -> TastyMap {
        self.merge(other)
    }
}

/// Forwards an operator on an owned palette to the borrowed impl.
macro_rules! forward_owned {
    ($Trait:ident, $method:ident, $Rhs:ty, $Out:ty) => {
        impl $Trait<$Rhs> for TastyMap {
            type Output = $Out;

            fn $method(self, rhs: $Rhs) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

forward_owned!(Add, add, f64, MapResult<TastyMap>);
forward_owned!(Sub, sub, f64, MapResult<TastyMap>);
forward_owned!(Mul, mul, f64, MapResult<TastyMap>);
forward_owned!(Div, div, f64, MapResult<TastyMap>);
forward_owned!(BitXor, bitxor, f64, MapResult<TastyMap>);
forward_owned!(BitOr, bitor, usize, MapResult<TastyMap>);
forward_owned!(Rem, rem, ColorModel, ColorArray);

impl Shl<&str> for TastyMap {
    type Output = TastyMap;

    fn shl(self, name: &str) -> TastyMap {
        Self::from_colormap(self.cmap.renamed(name))
    }
}

impl Not for TastyMap {
    type Output = TastyMap;

    fn not(self) -> TastyMap {
        self.reverse()
    }
}

impl BitAnd<&TastyMap> for TastyMap {
    type Output = TastyMap;

    fn bitand(self, other: &TastyMap) -> TastyMap {
        self.merge(other)
    }
}

impl BitAnd for TastyMap {
    type Output = TastyMap;

    fn bitand(self, other: TastyMap) -> TastyMap {
        self.merge(&other)
    }
}
