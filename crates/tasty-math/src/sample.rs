//! Sampling grids and resampling positions.
//!
//! - [`linspace`] / [`arange`] - evenly spaced values, inclusive and half-open
//! - [`sample_positions`] - where each output entry falls when a discrete
//!   sequence is resampled to a new length

/// `n` evenly spaced values from `start` to `stop`, both inclusive.
///
/// `n == 1` yields `[start]`, `n == 0` yields nothing.
///
/// # Example
///
/// ```rust
/// use tasty_math::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Values from `start` towards `stop` (exclusive) in increments of `step`.
///
/// A zero, non-finite, or wrong-signed step yields nothing.
///
/// # Example
///
/// ```rust
/// use tasty_math::arange;
///
/// assert_eq!(arange(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
/// assert!(arange(0.0, 1.0, -0.25).is_empty());
/// ```
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step == 0.0 || !step.is_finite() || (stop - start) * step <= 0.0 {
        return Vec::new();
    }
    let count = ((stop - start) / step).ceil() as usize;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// A resampling position: interpolate between entries `lo` and `hi` by `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePos {
    /// Lower source index.
    pub lo: usize,
    /// Upper source index (`lo` or `lo + 1`).
    pub hi: usize,
    /// Interpolation parameter in `[0, 1]`.
    pub t: f64,
}

/// Positions for resampling a `len`-entry sequence to `n` entries.
///
/// Source and output are both spread evenly over `[0, 1]`, so the first and
/// last outputs land exactly on the first and last sources. Returns nothing
/// when either length is zero.
///
/// # Example
///
/// ```rust
/// use tasty_math::sample_positions;
///
/// let pos = sample_positions(3, 5);
/// assert_eq!(pos.len(), 5);
/// assert_eq!((pos[0].lo, pos[0].t), (0, 0.0));
/// assert_eq!((pos[4].lo, pos[4].hi), (2, 2));
/// ```
pub fn sample_positions(len: usize, n: usize) -> Vec<SamplePos> {
    if len == 0 || n == 0 {
        return Vec::new();
    }
    if len == 1 {
        return vec![SamplePos { lo: 0, hi: 0, t: 0.0 }; n];
    }

    if n == 1 {
        return vec![SamplePos { lo: 0, hi: 1, t: 0.0 }];
    }

    let span = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let idx = (i * (len - 1)) as f64 / span;
            let lo = (idx.floor() as usize).min(len - 1);
            let hi = (lo + 1).min(len - 1);
            let t = if hi == lo { 0.0 } else { (idx - lo as f64).clamp(0.0, 1.0) };
            SamplePos { lo, hi, t }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(5.0, 1.0, 3), vec![5.0, 3.0, 1.0]);
        let v = linspace(0.0, 1.0, 11);
        assert_eq!(v[10], 1.0);
        assert!((v[3] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_arange() {
        assert_eq!(arange(0.0, 10.0, 5.0), vec![0.0, 5.0]);
        assert_eq!(arange(0.0, 10.0 + 5.0, 5.0), vec![0.0, 5.0, 10.0]);
        assert_eq!(arange(3.0, 0.0, -1.0), vec![3.0, 2.0, 1.0]);
        assert!(arange(0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn test_sample_positions_single_source() {
        let pos = sample_positions(1, 4);
        assert_eq!(pos.len(), 4);
        assert!(pos.iter().all(|p| p.lo == 0 && p.hi == 0 && p.t == 0.0));
    }

    #[test]
    fn test_sample_positions_identity() {
        let pos = sample_positions(4, 4);
        for (i, p) in pos.iter().enumerate() {
            assert_eq!(p.lo, i);
            assert!(p.t.abs() < 1e-12 || (p.t - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_positions_midpoints() {
        let pos = sample_positions(2, 3);
        assert_eq!(pos[1].lo, 0);
        assert_eq!(pos[1].hi, 1);
        assert!((pos[1].t - 0.5).abs() < 1e-12);
        assert!(sample_positions(0, 3).is_empty());
        assert!(sample_positions(3, 0).is_empty());
    }
}
