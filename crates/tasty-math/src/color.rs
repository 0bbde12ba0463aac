//! Interpolation between colors.
//!
//! Two strategies are provided:
//!
//! - [`lerp_rgba`] - component-wise in RGBA, what plotting libraries do when
//!   they expand a list of anchor colors into a lookup table
//! - [`lerp_hsva`] - in HSV with hue on the shorter arc, used when resizing
//!   palettes so that intermediate colors keep their saturation
//!
//! Both clamp `t` to `[0, 1]`.

use crate::interp::{lerp, lerp_hue, saturate};
use tasty_core::{Hsv, Rgba};

/// Interpolates two colors component-wise in RGBA.
#[inline]
pub fn lerp_rgba(a: Rgba, b: Rgba, t: f64) -> Rgba {
    let t = saturate(t);
    Rgba::new(
        lerp(a.r, b.r, t),
        lerp(a.g, b.g, t),
        lerp(a.b, b.b, t),
        lerp(a.a, b.a, t),
    )
}

/// Interpolates two colors in HSV, carrying alpha linearly.
///
/// Hue takes the shorter way around the circle and wraps modulo 1. When one
/// end is achromatic its hue is meaningless, so the other end's hue is used
/// for the whole segment. The endpoints come back unchanged.
pub fn lerp_hsva(a: Rgba, b: Rgba, t: f64) -> Rgba {
    let t = saturate(t);
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    let (ha, hb) = (a.to_hsv(), b.to_hsv());

    let (from_h, to_h) = match (ha.s > 0.0, hb.s > 0.0) {
        (false, true) => (hb.h, hb.h),
        (true, false) => (ha.h, ha.h),
        _ => (ha.h, hb.h),
    };

    let hsv = Hsv::new(
        lerp_hue(from_h, to_h, t),
        lerp(ha.s, hb.s, t),
        lerp(ha.v, hb.v, t),
    );
    Rgba::from_rgb(hsv.to_rgb(), lerp(a.a, b.a, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rgba_endpoints() {
        let a = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let b = Rgba::new(0.0, 0.0, 1.0, 0.5);
        assert_eq!(lerp_rgba(a, b, 0.0), a);
        assert_eq!(lerp_rgba(a, b, 1.0), b);
        let mid = lerp_rgba(a, b, 0.5);
        assert_abs_diff_eq!(mid.r, 0.5);
        assert_abs_diff_eq!(mid.a, 0.75);
        assert_eq!(lerp_rgba(a, b, 3.0), b);
    }

    #[test]
    fn test_hsva_keeps_saturation() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let green = Rgba::new(0.0, 1.0, 0.0, 1.0);
        let mid = lerp_hsva(red, green, 0.5);
        // Halfway between red and green in hue is pure yellow.
        assert_abs_diff_eq!(mid.r, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.g, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.b, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hsva_endpoints() {
        let a = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let b = Rgba::new(0.9, 0.3, 0.1, 0.0);
        assert_eq!(lerp_hsva(a, b, 0.0), a);
        assert_eq!(lerp_hsva(a, b, 1.0), b);
        assert_eq!(lerp_hsva(a, b, -2.0), a);
        let near = lerp_hsva(a, b, 1e-9);
        assert_abs_diff_eq!(near.r, a.r, epsilon = 1e-6);
        assert_abs_diff_eq!(near.b, a.b, epsilon = 1e-6);
    }

    #[test]
    fn test_hsva_grey_end_uses_other_hue() {
        let grey = Rgba::new(0.5, 0.5, 0.5, 1.0);
        let blue = Rgba::new(0.0, 0.0, 1.0, 1.0);
        let mid = lerp_hsva(grey, blue, 0.5);
        assert!(mid.b > mid.r);
        assert_abs_diff_eq!(mid.r, mid.g, epsilon = 1e-12);
    }
}
