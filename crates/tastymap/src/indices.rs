//! Index selections for subsetting palettes.
//!
//! Three forms, with the usual sequence-indexing rules (negative indices
//! count from the end):
//!
//! | form | text | selects |
//! |------|------|---------|
//! | single | `3`, `-1` | one entry |
//! | list | `0,2,-1` | entries in the given order |
//! | slice | `2:`, `:5`, `1:8:2`, `::-1` | a stepped range |
//!
//! The text form is what follows `_i` in a palette spec string.

use std::fmt;
use std::str::FromStr;

use crate::error::{MapError, MapResult};

/// A selection of palette entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indices {
    /// One entry.
    Single(i64),
    /// Several entries, in order.
    List(Vec<i64>),
    /// `start:stop:step`, each part optional.
    Slice {
        /// First index (inclusive).
        start: Option<i64>,
        /// Last index (exclusive).
        stop: Option<i64>,
        /// Stride; must not be zero.
        step: Option<i64>,
    },
}

impl Indices {
    /// Slice from `start` to `stop` with step 1.
    pub fn range(start: i64, stop: i64) -> Self {
        Self::Slice {
            start: Some(start),
            stop: Some(stop),
            step: None,
        }
    }

    /// Resolves to concrete positions in a sequence of `len` entries.
    ///
    /// Single and list indices must lie inside the sequence; slices are
    /// clamped like any sequence slice and may come out empty.
    pub fn resolve(&self, len: usize) -> MapResult<Vec<usize>> {
        match self {
            Self::Single(i) => Ok(vec![absolute(*i, len)?]),
            Self::List(items) => items.iter().map(|&i| absolute(i, len)).collect(),
            Self::Slice { start, stop, step } => slice_positions(*start, *stop, *step, len),
        }
    }
}

fn absolute(index: i64, len: usize) -> MapResult<usize> {
    let n = len as i64;
    let abs = if index < 0 { index + n } else { index };
    if (0..n).contains(&abs) {
        Ok(abs as usize)
    } else {
        Err(MapError::IndexOutOfRange { index, len })
    }
}

fn slice_positions(
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
    len: usize,
) -> MapResult<Vec<usize>> {
    let n = len as i64;
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(MapError::invalid_indices("slice step cannot be zero"));
    }

    let adjust = |i: i64, lo: i64, hi: i64| {
        let i = if i < 0 { i + n } else { i };
        i.clamp(lo, hi)
    };

    let mut out = Vec::new();
    if step > 0 {
        let start = start.map_or(0, |i| adjust(i, 0, n));
        let stop = stop.map_or(n, |i| adjust(i, 0, n));
        let mut i = start;
        while i < stop {
            out.push(i as usize);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    } else {
        let start = start.map_or(n - 1, |i| adjust(i, -1, n - 1));
        let stop = stop.map_or(-1, |i| adjust(i, -1, n - 1));
        let mut i = start;
        while i > stop {
            out.push(i as usize);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    }
    Ok(out)
}

fn parse_index(s: &str, whole: &str) -> MapResult<i64> {
    s.trim()
        .parse()
        .map_err(|_| MapError::invalid_indices(format!("'{s}' is not an integer in '{whole}'")))
}

impl FromStr for Indices {
    type Err = MapError;

    fn from_str(s: &str) -> MapResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::invalid_indices("empty selection"));
        }

        if s.contains(':') {
            let parts: Vec<&str> = s.split(':').collect();
            if parts.len() > 3 {
                return Err(MapError::invalid_indices(format!("too many ':' in '{s}'")));
            }
            let part = |k: usize| -> MapResult<Option<i64>> {
                match parts.get(k).map(|p| p.trim()) {
                    None | Some("") => Ok(None),
                    Some(p) => parse_index(p, s).map(Some),
                }
            };
            let step = part(2)?;
            if step == Some(0) {
                return Err(MapError::invalid_indices("slice step cannot be zero"));
            }
            return Ok(Self::Slice {
                start: part(0)?,
                stop: part(1)?,
                step,
            });
        }

        if s.contains(',') {
            let items = s
                .split(',')
                .map(|p| parse_index(p, s))
                .collect::<MapResult<Vec<_>>>()?;
            return Ok(Self::List(items));
        }

        parse_index(s, s).map(Self::Single)
    }
}

impl fmt::Display for Indices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(i) => write!(f, "{i}"),
            Self::List(items) => {
                for (k, i) in items.iter().enumerate() {
                    if k > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{i}")?;
                }
                Ok(())
            }
            Self::Slice { start, stop, step } => {
                if let Some(s) = start {
                    write!(f, "{s}")?;
                }
                f.write_str(":")?;
                if let Some(s) = stop {
                    write!(f, "{s}")?;
                }
                if let Some(s) = step {
                    write!(f, ":{s}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for Indices {
    fn from(i: i64) -> Self {
        Self::Single(i)
    }
}

impl From<Vec<i64>> for Indices {
    fn from(items: Vec<i64>) -> Self {
        Self::List(items)
    }
}

impl From<std::ops::Range<i64>> for Indices {
    fn from(r: std::ops::Range<i64>) -> Self {
        Self::range(r.start, r.end)
    }
}
