//! Colorbars: pairing a palette with data bounds.
//!
//! [`pair_tbar`] turns a palette, a set of bounds, and a few options into a
//! [`TastyBar`]: a plotting-library-agnostic description of a colorbar.
//! It carries everything a plotting layer needs:
//!
//! - a [`Norm`] that maps data values onto the palette
//! - tick positions and labels
//! - categorical factors and label overrides for factor-based colorbars
//! - the palette as hex strings and the color limits
//!
//! # Bounds
//!
//! | bounds | ticks |
//! |--------|-------|
//! | `Range { start, stop, step: None }` | `min(N - 1, 11)` evenly spaced values |
//! | `Range { start, stop, step: Some(s) }` | `start, start + s, ...` below `stop + s` |
//! | `Values(v)` | the sorted values |
//!
//! # Centering
//!
//! - unset (the default for ranges): a linear norm over `[start, stop]`; ticks
//!   are left to the plotting library
//! - `true`: each tick gets its own color bin centered on it, and the tick
//!   values become the labels
//! - `false` (the default for values): ticks are bin boundaries
//!
//! # Example
//!
//! ```rust
//! use tastymap::{pair_tbar, BarOptions, Bounds, TastyMap};
//!
//! let tmap = TastyMap::from_name("viridis")?;
//! let bar = pair_tbar(&tmap, Bounds::values(vec![0.0, 4.0, 18.0]), BarOptions::new().center(true))?;
//!
//! assert_eq!(bar.ticks(), Some(&[0.0, 2.5, 11.5][..]));
//! assert_eq!(bar.label_for(1), "4");
//! assert_eq!(bar.color_for(4.0), bar.color_for(4.4));
//! # Ok::<(), tastymap::MapError>(())
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tasty_core::Rgba;
use tasty_math::{arange, linspace};
use tracing::debug;

use crate::error::{MapError, MapResult};
use crate::tmap::TastyMap;

/// Most ticks generated for a range without a step.
const MAX_AUTO_TICKS: usize = 11;

/// Most ticks a stepped range may produce.
const MAX_TICKS: usize = 10_000;

// ============================================================================
// Options
// ============================================================================

/// Data bounds for a colorbar.
#[derive(Debug, Clone, PartialEq)]
pub enum Bounds {
    /// `start..=stop`, optionally stepped.
    Range {
        /// Lower bound.
        start: f64,
        /// Upper bound.
        stop: f64,
        /// Tick spacing.
        step: Option<f64>,
    },
    /// Explicit tick values.
    Values(Vec<f64>),
}

impl Bounds {
    /// Range without a step.
    pub fn range(start: f64, stop: f64) -> Self {
        Self::Range { start, stop, step: None }
    }

    /// Range with tick spacing `step`.
    pub fn stepped(start: f64, stop: f64, step: f64) -> Self {
        Self::Range {
            start,
            stop,
            step: Some(step),
        }
    }

    /// Explicit values, sorted ascending.
    pub fn values(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Self::Values(values)
    }

    fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

impl From<Range<f64>> for Bounds {
    fn from(r: Range<f64>) -> Self {
        Self::range(r.start, r.end)
    }
}

impl From<Vec<f64>> for Bounds {
    fn from(values: Vec<f64>) -> Self {
        Self::values(values)
    }
}

impl From<&[f64]> for Bounds {
    fn from(values: &[f64]) -> Self {
        Self::values(values.to_vec())
    }
}

/// Which ends of the colorbar get out-of-range triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extend {
    /// Both ends.
    #[default]
    Both,
    /// Neither end.
    Neither,
    /// Low end only.
    Min,
    /// High end only.
    Max,
}

impl Extend {
    fn extends_min(self) -> bool {
        matches!(self, Self::Both | Self::Min)
    }

    fn extends_max(self) -> bool {
        matches!(self, Self::Both | Self::Max)
    }
}

/// How color bins are laid out along the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Every bin the same length.
    #[default]
    Uniform,
    /// Bin length proportional to its data interval.
    Proportional,
}

/// Options for [`pair_tbar`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarOptions {
    /// Tick labels.
    pub labels: Option<Vec<String>>,
    /// Bin layout.
    pub spacing: Spacing,
    /// Center bins on ticks. Unset means "decide from the bounds".
    pub center: Option<bool>,
    /// Out-of-range triangles.
    pub extend: Extend,
    /// Clamp values into range. Unset means `extend == Neither`.
    pub clip: Option<bool>,
}

impl BarOptions {
    /// Defaults: uniform spacing, extended both ways.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets tick labels.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Sets bin layout.
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets centering.
    pub fn center(mut self, center: bool) -> Self {
        self.center = Some(center);
        self
    }

    /// Sets out-of-range triangles.
    pub fn extend(mut self, extend: Extend) -> Self {
        self.extend = extend;
        self
    }

    /// Sets clipping.
    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = Some(clip);
        self
    }
}

// ============================================================================
// Norms
// ============================================================================

/// Maps data values onto discrete color bins.
///
/// Boundaries `b0 < b1 < ... < bk` define `k` regions, plus one more on
/// each extended end. Regions are spread across all `ncolors` palette
/// entries, so the first and last region always get the first and last
/// color.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryNorm {
    boundaries: Vec<f64>,
    ncolors: usize,
    clip: bool,
    extend: Extend,
    n_regions: usize,
    offset: i64,
}

impl BoundaryNorm {
    /// Creates a norm over `boundaries` for a palette of `ncolors` entries.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidBounds`] if there are fewer than two boundaries,
    /// they are not strictly increasing, there are more regions than colors,
    /// or `clip` is combined with an extended end.
    pub fn new(boundaries: Vec<f64>, ncolors: usize, clip: bool, extend: Extend) -> MapResult<Self> {
        if clip && extend != Extend::Neither {
            return Err(MapError::invalid_bounds("clipping is not compatible with extended ends"));
        }
        if boundaries.len() < 2 {
            return Err(MapError::invalid_bounds(format!(
                "need at least 2 boundaries, got {}",
                boundaries.len()
            )));
        }
        if boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(MapError::invalid_bounds("boundaries must be strictly increasing"));
        }

        let mut n_regions = boundaries.len() - 1;
        let mut offset = 0;
        if extend.extends_min() {
            n_regions += 1;
            offset = 1;
        }
        if extend.extends_max() {
            n_regions += 1;
        }
        if n_regions > ncolors {
            return Err(MapError::invalid_bounds(format!(
                "{n_regions} color bins need more than the {ncolors} colors available"
            )));
        }

        Ok(Self {
            boundaries,
            ncolors,
            clip,
            extend,
            n_regions,
            offset,
        })
    }

    /// Bin edges.
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Lowest boundary.
    pub fn vmin(&self) -> f64 {
        self.boundaries[0]
    }

    /// Highest boundary.
    pub fn vmax(&self) -> f64 {
        self.boundaries[self.boundaries.len() - 1]
    }

    /// Number of color bins, counting extended ends.
    pub fn n_regions(&self) -> usize {
        self.n_regions
    }

    /// Whether values are clamped into range.
    pub fn clip(&self) -> bool {
        self.clip
    }

    /// Extended ends.
    pub fn extend(&self) -> Extend {
        self.extend
    }

    /// Palette index for `x`: `-1` below range, `ncolors` above range
    /// (unless clipping), `None` for NaN.
    pub fn index(&self, x: f64) -> Option<isize> {
        if x.is_nan() {
            return None;
        }
        let (vmin, vmax) = (self.vmin(), self.vmax());
        let ncolors = self.ncolors as i64;
        let (x, max_col) = if self.clip {
            (x.clamp(vmin, vmax), ncolors - 1)
        } else {
            (x, ncolors)
        };

        if x < vmin {
            return Some(-1);
        }
        if x >= vmax {
            return Some(max_col as isize);
        }

        let region = self.boundaries.partition_point(|&b| b <= x) as i64 - 1 + self.offset;
        let n_regions = self.n_regions as i64;
        let index = if ncolors > n_regions {
            if n_regions == 1 {
                if region == 0 { (ncolors - 1) / 2 } else { region }
            } else {
                ((ncolors - 1) as f64 / (n_regions - 1) as f64 * region as f64) as i64
            }
        } else {
            region
        };
        Some(index as isize)
    }
}

/// How a colorbar maps data values onto its palette.
#[derive(Debug, Clone, PartialEq)]
pub enum Norm {
    /// `(x - vmin) / (vmax - vmin)`, then sampled continuously.
    Linear {
        /// Maps to 0.
        vmin: f64,
        /// Maps to 1.
        vmax: f64,
        /// Clamp into `[0, 1]`.
        clip: bool,
    },
    /// Discrete bins.
    Boundary(BoundaryNorm),
}

impl Norm {
    /// Lowest mapped value.
    pub fn vmin(&self) -> f64 {
        match self {
            Self::Linear { vmin, .. } => *vmin,
            Self::Boundary(b) => b.vmin(),
        }
    }

    /// Highest mapped value.
    pub fn vmax(&self) -> f64 {
        match self {
            Self::Linear { vmax, .. } => *vmax,
            Self::Boundary(b) => b.vmax(),
        }
    }

    /// Whether values are clamped into range.
    pub fn clip(&self) -> bool {
        match self {
            Self::Linear { clip, .. } => *clip,
            Self::Boundary(b) => b.clip(),
        }
    }

    /// Linear position of `x`; only meaningful for [`Norm::Linear`].
    fn scale(vmin: f64, vmax: f64, clip: bool, x: f64) -> f64 {
        let t = (x - vmin) / (vmax - vmin);
        if clip { t.clamp(0.0, 1.0) } else { t }
    }
}

// ============================================================================
// TastyBar
// ============================================================================

/// A palette paired with data bounds. Built by [`pair_tbar`].
#[derive(Debug, Clone)]
pub struct TastyBar {
    tmap: TastyMap,
    norm: Norm,
    edges: Vec<f64>,
    ticks: Option<Vec<f64>>,
    labels: Option<Vec<String>>,
    tick_labels: Option<Vec<String>>,
    spacing: Spacing,
    extend: Extend,
}

/// Pairs a palette with data bounds.
///
/// # Errors
///
/// [`MapError::InvalidBounds`] for non-finite or empty bounds, an empty or
/// reversed range, a non-positive step, a step that yields too many ticks,
/// or more bins than colors.
pub fn pair_tbar(tmap: &TastyMap, bounds: impl Into<Bounds>, options: BarOptions) -> MapResult<TastyBar> {
    let bounds = bounds.into();
    let num_colors = tmap.len();

    let (vmin, vmax, edges) = match &bounds {
        Bounds::Range { start, stop, step } => {
            let (start, stop) = (*start, *stop);
            if !start.is_finite() || !stop.is_finite() {
                return Err(MapError::invalid_bounds("range ends must be finite"));
            }
            if start >= stop {
                return Err(MapError::invalid_bounds(format!(
                    "range start {start} must be below stop {stop}"
                )));
            }
            let edges = match step {
                None => linspace(start, stop, num_colors.saturating_sub(1).min(MAX_AUTO_TICKS)),
                Some(step) if step.is_finite() && *step > 0.0 => {
                    let count = ((stop + step - start) / step).ceil();
                    if !count.is_finite() || count > MAX_TICKS as f64 {
                        return Err(MapError::invalid_bounds(format!(
                            "step {step} gives too many ticks over [{start}, {stop}], at most {MAX_TICKS} allowed"
                        )));
                    }
                    arange(start, stop + step, *step)
                }
                Some(step) => {
                    return Err(MapError::invalid_bounds(format!("step must be positive, got {step}")));
                }
            };
            (start, stop, edges)
        }
        Bounds::Values(values) => {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(MapError::invalid_bounds("values must be finite"));
            }
            let mut edges = values.clone();
            edges.sort_by(f64::total_cmp);
            match (edges.first(), edges.last()) {
                (Some(&lo), Some(&hi)) => (lo, hi, edges),
                _ => return Err(MapError::invalid_bounds("no values given")),
            }
        }
    };

    let center = match options.center {
        None if !bounds.is_range() => Some(false),
        other => other,
    };
    let clip = options.clip.unwrap_or(options.extend == Extend::Neither);

    let mut tick_labels = options.labels.clone();
    let (norm, ticks) = match center {
        None => (Norm::Linear { vmin, vmax, clip }, None),
        Some(true) => {
            let first = edges
                .first()
                .copied()
                .ok_or_else(|| MapError::invalid_bounds("no ticks to center on"))?;
            let mut bins = Vec::with_capacity(edges.len() + 1);
            bins.push(first + 0.5 - 1.0);
            bins.extend(edges.iter().map(|t| t + 0.5));
            let norm = BoundaryNorm::new(bins, num_colors, clip, options.extend)?;
            let mids: Vec<f64> = norm.boundaries().windows(2).map(|w| w[0] + (w[1] - w[0]) / 2.0).collect();
            if tick_labels.is_none() {
                tick_labels = Some(edges.iter().map(|t| t.to_string()).collect());
            }
            (Norm::Boundary(norm), Some(mids))
        }
        Some(false) => {
            let norm = BoundaryNorm::new(edges.clone(), num_colors, clip, options.extend)?;
            (Norm::Boundary(norm), Some(edges.clone()))
        }
    };

    debug!(
        name = tmap.name(),
        ?center,
        clip,
        ticks = edges.len(),
        "paired colorbar"
    );

    Ok(TastyBar {
        tmap: tmap.clone(),
        norm,
        edges,
        ticks,
        labels: options.labels,
        tick_labels,
        spacing: options.spacing,
        extend: options.extend,
    })
}

impl TastyBar {
    /// The palette.
    pub fn tmap(&self) -> &TastyMap {
        &self.tmap
    }

    /// The value-to-color mapping.
    pub fn norm(&self) -> &Norm {
        &self.norm
    }

    /// Tick positions, or `None` to let the plotting library choose.
    pub fn ticks(&self) -> Option<&[f64]> {
        self.ticks.as_deref()
    }

    /// Tick values derived from the bounds, before any centering.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Bin layout.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Out-of-range triangles.
    pub fn extend(&self) -> Extend {
        self.extend
    }

    /// Label for the `index`-th tick, or `""` past the last label.
    pub fn label_for(&self, index: usize) -> &str {
        self.tick_labels
            .as_ref()
            .and_then(|l| l.get(index))
            .map_or("", String::as_str)
    }

    /// Tick labels, if any were given or derived from centering.
    pub fn tick_labels(&self) -> Option<&[String]> {
        self.tick_labels.as_deref()
    }

    /// Color for a data value.
    pub fn color_for(&self, value: f64) -> Rgba {
        let cmap = self.tmap.cmap();
        match &self.norm {
            Norm::Linear { vmin, vmax, clip } => cmap.sample(Norm::scale(*vmin, *vmax, *clip, value)),
            Norm::Boundary(norm) => match norm.index(value) {
                Some(i) => cmap.at(i),
                None => cmap.bad(),
            },
        }
    }

    /// Colors for many data values.
    pub fn colors_for(&self, values: &[f64]) -> Vec<Rgba> {
        values.iter().map(|&v| self.color_for(v)).collect()
    }

    /// Palette as `#rrggbb` strings.
    pub fn palette(&self) -> Vec<String> {
        self.tmap.iter().map(|c| c.to_hex()).collect()
    }

    /// Color limits: first and last tick, or the norm range without ticks.
    pub fn clim(&self) -> (f64, f64) {
        match (self.edges.first(), self.edges.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (self.norm.vmin(), self.norm.vmax()),
        }
    }

    /// Category names for a factor-based colorbar with uniform spacing.
    ///
    /// Given labels are used as they are and must number one less than the
    /// ticks; otherwise each factor is the `"a - b"` interval between two
    /// consecutive ticks. `None` with proportional spacing.
    pub fn factors(&self) -> MapResult<Option<Vec<String>>> {
        if self.spacing != Spacing::Uniform {
            return Ok(None);
        }
        match &self.labels {
            Some(labels) => {
                let expected = self.edges.len().saturating_sub(1);
                if labels.len() != expected {
                    return Err(MapError::invalid_labels(format!(
                        "number of labels must be one less than the number of ticks; \
                         received {} labels and {} ticks",
                        labels.len(),
                        self.edges.len()
                    )));
                }
                Ok(Some(labels.clone()))
            }
            None => Ok(Some(
                self.edges
                    .windows(2)
                    .map(|w| format!("{} - {}", w[0], w[1]))
                    .collect(),
            )),
        }
    }

    /// Tick-to-label overrides for a colorbar with proportional spacing.
    ///
    /// Labels must number exactly the ticks. `None` with uniform spacing or
    /// without labels.
    pub fn label_overrides(&self) -> MapResult<Option<Vec<(f64, String)>>> {
        let labels = match (&self.labels, self.spacing) {
            (Some(labels), Spacing::Proportional) => labels,
            _ => return Ok(None),
        };
        if labels.len() != self.edges.len() {
            return Err(MapError::invalid_labels(format!(
                "number of labels must be equal to the number of ticks; \
                 received {} labels and {} ticks",
                labels.len(),
                self.edges.len()
            )));
        }
        Ok(Some(self.edges.iter().copied().zip(labels.iter().cloned()).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tasty_core::ColorModel;

    fn rgb256() -> TastyMap {
        TastyMap::from_list(["red", "green", "blue"], ColorModel::Rgba)
            .and_then(|t| t.resize_with(256, crate::tmap::Interpolation::Rgb))
            .unwrap()
    }

    #[test]
    fn test_values_default_to_boundaries() {
        let bar = pair_tbar(&rgb256(), vec![0.0, 4.0, 18.0], BarOptions::new()).unwrap();
        assert_eq!(bar.ticks(), Some(&[0.0, 4.0, 18.0][..]));
        assert!(bar.tick_labels().is_none());
        match bar.norm() {
            Norm::Boundary(norm) => {
                assert!(!norm.clip());
                assert_eq!(norm.extend(), Extend::Both);
                assert_eq!(norm.n_regions(), 4);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_values_centered() {
        let bar = pair_tbar(&rgb256(), vec![18.0, 0.0, 4.0], BarOptions::new().center(true)).unwrap();
        assert_eq!(bar.ticks(), Some(&[0.0, 2.5, 11.5][..]));
        match bar.norm() {
            Norm::Boundary(norm) => assert_eq!(norm.boundaries(), &[-0.5, 0.5, 4.5, 18.5]),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(bar.label_for(0), "0");
        assert_eq!(bar.label_for(2), "18");
        assert_eq!(bar.label_for(3), "");
    }

    #[test]
    fn test_range_is_linear() {
        for bounds in [Bounds::stepped(0.0, 18.0, 4.0), Bounds::range(0.0, 18.0)] {
            let bar = pair_tbar(&rgb256(), bounds, BarOptions::new()).unwrap();
            assert!(bar.ticks().is_none());
            assert_eq!(bar.norm(), &Norm::Linear { vmin: 0.0, vmax: 18.0, clip: false });
        }
    }

    #[test]
    fn test_range_ticks() {
        let bar = pair_tbar(&rgb256(), Bounds::stepped(0.0, 18.0, 4.0), BarOptions::new()).unwrap();
        assert_eq!(bar.edges(), &[0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);

        let bar = pair_tbar(&rgb256(), 0.0..10.0, BarOptions::new()).unwrap();
        assert_eq!(bar.edges().len(), 11);
        assert_abs_diff_eq!(bar.edges()[1], 1.0, epsilon = 1e-12);

        let small = TastyMap::from_list(["red", "green", "blue", "black"], ColorModel::Rgba).unwrap();
        let bar = pair_tbar(&small, 0.0..1.0, BarOptions::new()).unwrap();
        assert_eq!(bar.edges().len(), 3);
    }

    #[test]
    fn test_clip_follows_extend() {
        let bar = pair_tbar(&rgb256(), 0.0..1.0, BarOptions::new().extend(Extend::Neither)).unwrap();
        assert!(bar.norm().clip());
        assert_eq!(bar.color_for(5.0), bar.color_for(1.0));
        assert_eq!(bar.color_for(-5.0), bar.color_for(0.0));
    }

    #[test]
    fn test_linear_colors() {
        let tmap = rgb256().set_extremes(None, Some(Rgba::BLACK), Some(Rgba::WHITE));
        let bar = pair_tbar(&tmap, 0.0..10.0, BarOptions::new()).unwrap();
        assert_eq!(bar.color_for(0.0), tmap.colors()[0]);
        assert_eq!(bar.color_for(10.0), tmap.colors()[255]);
        assert_eq!(bar.color_for(-1.0), Rgba::BLACK);
        assert_eq!(bar.color_for(11.0), Rgba::WHITE);
        assert_eq!(bar.color_for(f64::NAN), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_boundary_index_spreads_regions() {
        // 3 boundaries + both extends = 4 regions over 256 colors
        let norm = BoundaryNorm::new(vec![0.0, 4.0, 18.0], 256, false, Extend::Both).unwrap();
        assert_eq!(norm.index(-1.0), Some(-1));
        assert_eq!(norm.index(0.0), Some(85));
        assert_eq!(norm.index(3.9), Some(85));
        assert_eq!(norm.index(4.0), Some(170));
        assert_eq!(norm.index(18.0), Some(256));
        assert_eq!(norm.index(f64::NAN), None);

        let plain = BoundaryNorm::new(vec![0.0, 1.0, 2.0], 2, false, Extend::Neither).unwrap();
        assert_eq!(plain.index(0.5), Some(0));
        assert_eq!(plain.index(1.5), Some(1));
        assert_eq!(plain.index(2.0), Some(2));

        let single = BoundaryNorm::new(vec![0.0, 1.0], 5, true, Extend::Neither).unwrap();
        assert_eq!(single.index(0.5), Some(2));
        assert_eq!(single.index(7.0), Some(4));
    }

    #[test]
    fn test_boundary_colors_use_sentinels() {
        let tmap = TastyMap::from_list(["red", "green", "blue", "black"], ColorModel::Rgba)
            .unwrap()
            .set_extremes(None, Some(Rgba::WHITE), None);
        let bar = pair_tbar(&tmap, vec![0.0, 1.0, 2.0], BarOptions::new()).unwrap();
        assert_eq!(bar.color_for(-1.0), Rgba::WHITE);
        assert_eq!(bar.color_for(0.5), tmap.colors()[1]);
        assert_eq!(bar.color_for(1.5), tmap.colors()[2]);
        assert_eq!(bar.color_for(2.5), tmap.colors()[3]);
    }

    #[test]
    fn test_invalid_bounds() {
        let tmap = rgb256();
        let bad = |b: Bounds, o: BarOptions| matches!(pair_tbar(&tmap, b, o), Err(MapError::InvalidBounds { .. }));
        assert!(bad(Bounds::range(1.0, 1.0), BarOptions::new()));
        assert!(bad(Bounds::range(0.0, f64::INFINITY), BarOptions::new()));
        assert!(bad(Bounds::stepped(0.0, 1.0, 0.0), BarOptions::new()));
        assert!(bad(Bounds::stepped(0.0, 1.0, 1e-300), BarOptions::new()));
        assert!(bad(Bounds::stepped(0.0, 1e308, 1e308), BarOptions::new()));
        assert!(bad(Bounds::values(vec![]), BarOptions::new()));
        assert!(bad(Bounds::values(vec![1.0]), BarOptions::new()));
        assert!(bad(Bounds::values(vec![0.0, f64::NAN]), BarOptions::new()));
        assert!(bad(Bounds::values(vec![0.0, 1.0]), BarOptions::new().clip(true)));

        let two = TastyMap::from_list(["red", "blue"], ColorModel::Rgba).unwrap();
        assert!(matches!(
            pair_tbar(&two, vec![0.0, 1.0, 2.0], BarOptions::new()),
            Err(MapError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_factors() {
        let tmap = rgb256();
        let bar = pair_tbar(&tmap, vec![0.0, 1.5, 3.0], BarOptions::new()).unwrap();
        assert_eq!(
            bar.factors().unwrap(),
            Some(vec!["0 - 1.5".to_string(), "1.5 - 3".to_string()])
        );

        let bar = pair_tbar(&tmap, vec![0.0, 1.0, 2.0], BarOptions::new().labels(["low", "high"])).unwrap();
        assert_eq!(bar.factors().unwrap(), Some(vec!["low".to_string(), "high".to_string()]));

        let bar = pair_tbar(&tmap, vec![0.0, 1.0, 2.0], BarOptions::new().labels(["a"])).unwrap();
        assert!(matches!(bar.factors(), Err(MapError::InvalidLabels { .. })));
    }

    #[test]
    fn test_label_overrides() {
        let tmap = rgb256();
        let opts = BarOptions::new().spacing(Spacing::Proportional).labels(["a", "b", "c"]);
        let bar = pair_tbar(&tmap, vec![0.0, 1.0, 5.0], opts).unwrap();
        assert_eq!(bar.factors().unwrap(), None);
        assert_eq!(
            bar.label_overrides().unwrap(),
            Some(vec![(0.0, "a".to_string()), (1.0, "b".to_string()), (5.0, "c".to_string())])
        );

        let opts = BarOptions::new().spacing(Spacing::Proportional).labels(["a"]);
        let bar = pair_tbar(&tmap, vec![0.0, 1.0, 5.0], opts).unwrap();
        assert!(bar.label_overrides().is_err());
    }

    #[test]
    fn test_palette_and_clim() {
        let tmap = TastyMap::from_list(["red", "blue"], ColorModel::Rgba).unwrap();
        let bar = pair_tbar(&tmap, Bounds::stepped(0.0, 1.0, 0.5), BarOptions::new()).unwrap();
        assert_eq!(bar.palette(), vec!["#ff0000".to_string(), "#0000ff".to_string()]);
        assert_eq!(bar.clim(), (0.0, 1.0));

        let bar = pair_tbar(&tmap, 2.0..3.0, BarOptions::new()).unwrap();
        assert!(bar.edges().len() == 1);
        assert_eq!(bar.clim(), (2.0, 2.0));
    }

    #[test]
    fn test_options_from_yaml() {
        let opts: BarOptions =
            serde_yaml::from_str("labels: [a, b]\nspacing: proportional\nextend: neither\n").unwrap();
        assert_eq!(opts.spacing, Spacing::Proportional);
        assert_eq!(opts.extend, Extend::Neither);
        assert_eq!(opts.labels.map(|l| l.len()), Some(2));
    }
}
