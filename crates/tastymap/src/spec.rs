//! Palette spec strings: `base[_n<count>][_r][_i<indices>]`.
//!
//! A spec names a palette and optionally edits it in one string:
//!
//! - `_n<count>` - resize to `count` colors
//! - `_r` - reverse (`_rr` reverses twice, i.e. not at all)
//! - `_i<indices>` - subset, see [`Indices`] for the index syntax
//!
//! Modifiers may come in any order after the base name and each may appear
//! at most once. Underscore-separated tokens that are not modifiers belong
//! to the base name, so `custom_tastymap_n8` has base `custom_tastymap`.
//!
//! ```rust
//! use tastymap::PaletteSpec;
//!
//! let spec: PaletteSpec = "Blues_n8_r_i0:4".parse()?;
//! assert_eq!(spec.base, "Blues");
//! assert_eq!(spec.num_colors, Some(8));
//! assert!(spec.reverse);
//! assert_eq!(spec.name(), "Blues_n8_r");
//! # Ok::<(), tastymap::MapError>(())
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::colormap::Colormap;
use crate::error::{MapError, MapResult};
use crate::indices::Indices;
use crate::tmap::TastyMap;

static RESIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^n(\d+)$").expect("valid regex"));

static REVERSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^r+$").expect("valid regex"));

static SUBSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^i(-?\d+(?:,-?\d+)*|-?\d*:-?\d*(?::-?\d*)?)$").expect("valid regex")
});

/// A parsed palette spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSpec {
    /// Palette to look up.
    pub base: String,
    /// Target size from `_n<count>`.
    pub num_colors: Option<usize>,
    /// Whether `_r` flips the order.
    pub reverse: bool,
    /// Selection from `_i<indices>`.
    pub indices: Option<Indices>,
    name: String,
}

impl PaletteSpec {
    /// Name of the built palette before subsetting: the base plus the
    /// `_n` and `_r` tokens as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if any modifier was given.
    pub fn has_modifiers(&self) -> bool {
        self.num_colors.is_some() || self.name.len() > self.base.len() || self.indices.is_some()
    }

    /// Applies the modifiers to `base`: reverse, then resize, then subset.
    ///
    /// Sentinels of `base` carry over.
    pub fn build(&self, base: Colormap) -> MapResult<TastyMap> {
        let extremes = base.extremes();
        let mut colors = base.colors().to_vec();
        if self.reverse {
            colors.reverse();
        }
        let mut tmap =
            TastyMap::from_colormap(Colormap::listed(&self.name, colors)?.with_extremes(extremes));
        if let Some(n) = self.num_colors {
            tmap = tmap.resize(n)?;
        }
        match &self.indices {
            Some(indices) => tmap.subset(indices),
            None => Ok(tmap),
        }
    }
}

fn at_most_one<'a>(modifier: &'static str, found: &[&'a str], spec: &str) -> MapResult<Option<&'a str>> {
    match found {
        [] => Ok(None),
        [one] => Ok(Some(*one)),
        many => Err(MapError::DuplicateModifier {
            modifier,
            found: many.iter().map(|t| format!("_{t}")).collect(),
            spec: spec.to_string(),
        }),
    }
}

impl FromStr for PaletteSpec {
    type Err = MapError;

    fn from_str(s: &str) -> MapResult<Self> {
        let mut tokens = s.split('_');
        let mut base: Vec<&str> = tokens.next().into_iter().collect();
        let (mut resize, mut reverse, mut subset) = (Vec::new(), Vec::new(), Vec::new());

        for tok in tokens {
            if RESIZE_RE.is_match(tok) {
                resize.push(tok);
            } else if REVERSE_RE.is_match(tok) {
                reverse.push(tok);
            } else if SUBSET_RE.is_match(tok) {
                subset.push(tok);
            } else {
                base.push(tok);
            }
        }

        let resize = at_most_one("_n", &resize, s)?;
        let reverse = at_most_one("_r", &reverse, s)?;
        let subset = at_most_one("_i", &subset, s)?;

        let num_colors = resize
            .map(|t| {
                t[1..]
                    .parse::<usize>()
                    .map_err(|_| MapError::out_of_range("number of colors", f64::INFINITY, ">= 1"))
            })
            .transpose()?;
        let indices = subset.map(|t| t[1..].parse::<Indices>()).transpose()?;

        let base = base.join("_");
        let mut name = base.clone();
        for tok in resize.iter().chain(reverse.iter()) {
            name.push('_');
            name.push_str(tok);
        }

        Ok(Self {
            base,
            num_colors,
            reverse: reverse.is_some_and(|t| t.len() % 2 == 1),
            indices,
            name,
        })
    }
}
