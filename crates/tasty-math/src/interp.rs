//! Scalar interpolation utilities.
//!
//! - Linear interpolation ([`lerp`], [`inverse_lerp`])
//! - Hue interpolation on the unit circle ([`lerp_hue`])
//! - Clamping utilities ([`clamp`], [`saturate`], [`fract`])
//!
//! # Usage
//!
//! ```rust
//! use tasty_math::{lerp, lerp_hue};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//!
//! // 0.9 -> 0.1 goes the short way, through 0.0
//! assert!((lerp_hue(0.9, 0.1, 0.5) - 0.0).abs() < 1e-12);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use tasty_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// A degenerate range yields `0.0`.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-12 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps a value to the range [min, max].
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Fractional part, always in `[0, 1)`.
///
/// # Example
///
/// ```rust
/// use tasty_math::fract;
///
/// assert!((fract(1.75) - 0.75).abs() < 1e-12);
/// assert!((fract(-0.25) - 0.75).abs() < 1e-12);
/// ```
#[inline]
pub fn fract(x: f64) -> f64 {
    let f = x - x.floor();
    // -1e-20 - floor(-1e-20) rounds to 1.0
    if f >= 1.0 { 0.0 } else { f }
}

/// Interpolates between two hues along the shorter arc.
///
/// Hues are fractions of a turn. `t` is clamped to `[0, 1]` and the result
/// wraps into `[0, 1)`.
#[inline]
pub fn lerp_hue(a: f64, b: f64, t: f64) -> f64 {
    let mut delta = fract(b) - fract(a);
    if delta > 0.5 {
        delta -= 1.0;
    } else if delta < -0.5 {
        delta += 1.0;
    }
    fract(a + delta * saturate(t))
}
