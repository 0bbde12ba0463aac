//! Error types for palette construction and editing.
//!
//! This module provides error handling for:
//! - Color parsing (wrapped from [`tasty_core::Error`])
//! - Colormap lookup by name
//! - Option validation (sizes, tweak factors, indices, bounds)
//! - Recipe file loading (YAML and I/O)

use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for palette operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while building or editing palettes.
#[derive(Debug, Error)]
pub enum MapError {
    /// Invalid color specification.
    #[error(transparent)]
    Color(#[from] tasty_core::Error),

    /// No colormap is known under this name.
    #[error("unknown colormap '{name}'{}", did_you_mean(.suggestions))]
    UnknownColormap {
        /// Name that was looked up.
        name: String,
        /// Close matches among the known names.
        suggestions: Vec<String>,
    },

    /// Numeric option outside its valid range.
    #[error("{what} must be within {range}; got {value}")]
    OutOfRange {
        /// Option name.
        what: &'static str,
        /// Offending value.
        value: f64,
        /// Human-readable valid range.
        range: &'static str,
    },

    /// A palette needs at least one color.
    #[error("must provide at least one color")]
    EmptyPalette,

    /// Index outside the palette.
    #[error("index {index} out of range for palette of {len} colors")]
    IndexOutOfRange {
        /// Requested index (may be negative).
        index: i64,
        /// Palette length.
        len: usize,
    },

    /// Malformed or empty index selection.
    #[error("invalid indices: {reason}")]
    InvalidIndices {
        /// Description of what's wrong.
        reason: String,
    },

    /// A palette spec string repeats a modifier.
    #[error("should only contain one '{modifier}' but found {found:?} in '{spec}'")]
    DuplicateModifier {
        /// Modifier prefix, e.g. `_n`.
        modifier: &'static str,
        /// Every matching token.
        found: Vec<String>,
        /// Full spec string.
        spec: String,
    },

    /// Numeric colors were given without saying how to read them.
    #[error("please specify from_color_model to differentiate between RGB and HSV color models")]
    MissingColorModel,

    /// Colorbar bounds that cannot be normalized.
    #[error("invalid bounds: {reason}")]
    InvalidBounds {
        /// Description of what's wrong.
        reason: String,
    },

    /// Colorbar labels that don't line up with the ticks.
    #[error("invalid labels: {reason}")]
    InvalidLabels {
        /// Description of what's wrong.
        reason: String,
    },

    /// Recipe entry that cannot be cooked.
    #[error("invalid recipe '{name}': {reason}")]
    InvalidRecipe {
        /// Recipe name.
        name: String,
        /// Description of what's wrong.
        reason: String,
    },

    /// Recipe file not found.
    #[error("recipe file not found: {path}")]
    RecipeNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading recipe files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let mut out = String::from(". Did you mean one of these: ");
    for (i, s) in suggestions.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "'{s}'");
    }
    out.push('?');
    out
}

impl MapError {
    /// Creates an out-of-range error.
    pub fn out_of_range(what: &'static str, value: f64, range: &'static str) -> Self {
        Self::OutOfRange { what, value, range }
    }

    /// Creates an invalid-indices error.
    pub fn invalid_indices(reason: impl Into<String>) -> Self {
        Self::InvalidIndices { reason: reason.into() }
    }

    /// Creates an invalid-bounds error.
    pub fn invalid_bounds(reason: impl Into<String>) -> Self {
        Self::InvalidBounds { reason: reason.into() }
    }

    /// Creates an invalid-labels error.
    pub fn invalid_labels(reason: impl Into<String>) -> Self {
        Self::InvalidLabels { reason: reason.into() }
    }

    /// Creates an invalid-recipe error.
    pub fn invalid_recipe(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecipe {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if a name lookup failed.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::UnknownColormap { .. })
    }

    /// Returns true if user input was rejected before any palette was built.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::Color(_)
                | Self::OutOfRange { .. }
                | Self::EmptyPalette
                | Self::IndexOutOfRange { .. }
                | Self::InvalidIndices { .. }
                | Self::DuplicateModifier { .. }
                | Self::MissingColorModel
                | Self::InvalidBounds { .. }
                | Self::InvalidLabels { .. }
        )
    }
}
