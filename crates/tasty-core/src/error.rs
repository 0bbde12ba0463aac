//! Error types for tasty-core operations.
//!
//! Every failure in this crate happens while turning user input into a
//! color: an unparseable string, a tuple with too many or too few
//! components, a component outside `[0, 1]`, or an unknown color model name.
//!
//! # Usage
//!
//! ```rust
//! use tasty_core::{Error, Result};
//!
//! fn channel(value: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(Error::component_out_of_range("r", value));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(channel(1.5).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::parse`] - Color string parsing
//! - `tastymap` - wrapped in `MapError::Color`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or converting colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A color string could not be understood.
    ///
    /// Returned for unknown color names, malformed hex codes and grey
    /// levels outside `[0, 1]`.
    #[error("invalid color {spec:?}: {reason}")]
    InvalidColor {
        /// The offending input
        spec: String,
        /// Why it was rejected
        reason: String,
    },

    /// A numeric component is NaN, infinite, or outside `[0, 1]`.
    #[error("color component {component} = {value} is outside [0, 1]")]
    ComponentOutOfRange {
        /// Component name (`r`, `g`, `b`, `a`, `h`, `s`, `v`)
        component: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// A numeric color tuple has the wrong number of components.
    #[error("expected 3 or 4 color components, got {got}")]
    WrongArity {
        /// Number of components supplied
        got: usize,
    },

    /// Unknown color model name.
    #[error("invalid color model: {model:?}; select from: {choices:?}")]
    InvalidColorModel {
        /// Name that was supplied
        model: String,
        /// Accepted names
        choices: Vec<&'static str>,
    },
}

impl Error {
    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ComponentOutOfRange`] error.
    #[inline]
    pub fn component_out_of_range(component: &'static str, value: f64) -> Self {
        Self::ComponentOutOfRange { component, value }
    }

    /// Returns `true` if the input was a string that failed to parse.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidColor { .. })
    }

    /// Returns `true` if a numeric component was rejected.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::ComponentOutOfRange { .. })
    }
}
