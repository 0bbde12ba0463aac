//! # tasty-math
//!
//! Math utilities for palette resampling.
//!
//! This crate provides the numeric pieces behind resizing and sampling
//! palettes:
//!
//! - Scalar interpolation ([`lerp`], [`inverse_lerp`], [`lerp_hue`])
//! - Color interpolation in RGBA and HSV ([`lerp_rgba`], [`lerp_hsva`])
//! - Sampling grids ([`linspace`], [`arange`]) and resample positions
//!   ([`sample_positions`])
//!
//! # Design
//!
//! Hues are fractions of a turn in `[0, 1)`. Every interpolation parameter is
//! clamped to `[0, 1]` before use, so resampling never extrapolates past the
//! ends of a palette.
//!
//! # Usage
//!
//! ```rust
//! use tasty_core::Rgba;
//! use tasty_math::{lerp_hsva, sample_positions};
//!
//! let anchors = [Rgba::new(1.0, 0.0, 0.0, 1.0), Rgba::new(0.0, 0.0, 1.0, 1.0)];
//! let resized: Vec<Rgba> = sample_positions(anchors.len(), 5)
//!     .into_iter()
//!     .map(|p| lerp_hsva(anchors[p.lo], anchors[p.hi], p.t))
//!     .collect();
//!
//! assert_eq!(resized.len(), 5);
//! assert_eq!(resized[4], anchors[1]);
//! ```
//!
//! # Dependencies
//!
//! - [`tasty-core`] - Color types
//!
//! # Used By
//!
//! - `tastymap` - Colormap construction, palette resizing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod interp;
mod sample;

pub use color::*;
pub use interp::*;
pub use sample::*;
