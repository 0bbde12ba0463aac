//! Palette recipes loaded from YAML.
//!
//! A recipe file lists named palettes and how to cook each one:
//!
//! ```yaml
//! recipes:
//!   - name: sunset
//!     colors: ["#ff7e5f", "#feb47b", gold]
//!     num_colors: 32
//!     bad: black
//!   - name: ocean
//!     cmap: Blues_r
//!     num_colors: 12
//!     tweak: { hue: -10, saturation: 1.2 }
//!   - name: deep_sunset
//!     cmap: sunset_n8
//!     color_model: rgb
//! ```
//!
//! Each recipe has either `colors` or `cmap`. Recipes are cooked in file
//! order by [`RecipeBook::cook_all`], so a later `cmap` may refer to an
//! earlier recipe.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tasty_core::{ColorModel, ColorSpec};
use tracing::{debug, info};

use crate::cook::{CookOptions, Source};
use crate::error::{MapError, MapResult};
use crate::registry::Registry;
use crate::tmap::{HsvTweak, Interpolation, TastyMap};

/// One named palette definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Where the palette starts from.
    pub source: Source,
    /// Edits to apply. `options.name` is the recipe name.
    pub options: CookOptions,
}

impl Recipe {
    /// Recipe name.
    pub fn name(&self) -> &str {
        self.options.name.as_deref().unwrap_or_default()
    }
}

/// An ordered set of recipes with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    /// Where the book was loaded from, if it came from a file.
    source_path: Option<PathBuf>,
}

impl RecipeBook {
    /// Loads recipes from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> MapResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MapError::RecipeNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let mut book = Self::from_yaml_str(&content)?;
        book.source_path = Some(path.to_path_buf());
        info!(path = %path.display(), recipes = book.len(), "loaded recipe file");
        Ok(book)
    }

    /// Parses recipes from YAML text.
    pub fn from_yaml_str(yaml: &str) -> MapResult<Self> {
        let raw: RawRecipeBook = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawRecipeBook) -> MapResult<Self> {
        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(raw.recipes.len());
        for r in raw.recipes {
            if !seen.insert(r.name.to_lowercase()) {
                return Err(MapError::invalid_recipe(&r.name, "duplicate name"));
            }
            recipes.push(r.into_recipe()?);
        }
        Ok(Self {
            recipes,
            source_path: None,
        })
    }

    /// All recipes in file order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Finds a recipe by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if there are no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// File the book was read from.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Cooks every recipe in order and registers the results.
    ///
    /// Stops at the first failure; palettes cooked before it stay registered.
    pub fn cook_all(&self, registry: &mut Registry) -> MapResult<Vec<TastyMap>> {
        self.recipes
            .iter()
            .map(|r| {
                debug!(name = r.name(), "cooking recipe");
                registry.cook(r.source.clone(), &r.options)
            })
            .collect()
    }
}

// ============================================================================
// Raw YAML structures for serde
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecipeBook {
    #[serde(default)]
    recipes: Vec<RawRecipe>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecipe {
    name: String,
    colors: Option<Vec<ColorSpec>>,
    cmap: Option<String>,
    color_model: Option<ColorModel>,
    num_colors: Option<usize>,
    #[serde(default)]
    reverse: bool,
    #[serde(default)]
    interpolation: Interpolation,
    bad: Option<ColorSpec>,
    under: Option<ColorSpec>,
    over: Option<ColorSpec>,
    tweak: Option<HsvTweak>,
}

impl RawRecipe {
    fn into_recipe(self) -> MapResult<Recipe> {
        if self.name.trim().is_empty() {
            return Err(MapError::invalid_recipe(&self.name, "name is empty"));
        }
        let source = match (self.colors, self.cmap) {
            (Some(_), Some(_)) => {
                return Err(MapError::invalid_recipe(&self.name, "set either 'colors' or 'cmap', not both"));
            }
            (None, None) => {
                return Err(MapError::invalid_recipe(&self.name, "one of 'colors' or 'cmap' is required"));
            }
            (Some(colors), None) => {
                if colors.is_empty() {
                    return Err(MapError::invalid_recipe(&self.name, "'colors' is empty"));
                }
                if self.color_model.is_none() && colors.iter().any(ColorSpec::is_numeric) {
                    return Err(MapError::invalid_recipe(
                        &self.name,
                        "numeric colors need 'color_model'",
                    ));
                }
                Source::Colors(colors)
            }
            (None, Some(cmap)) => Source::Spec(cmap),
        };
        if self.num_colors == Some(0) {
            return Err(MapError::invalid_recipe(&self.name, "'num_colors' must be at least 1"));
        }
        if let Some(tweak) = &self.tweak {
            tweak
                .validate()
                .map_err(|e| MapError::invalid_recipe(&self.name, e.to_string()))?;
        }

        let options = CookOptions {
            num_colors: self.num_colors,
            reverse: self.reverse,
            name: Some(self.name),
            bad: self.bad,
            under: self.under,
            over: self.over,
            from_color_model: self.color_model,
            interpolation: self.interpolation,
            tweak: self.tweak,
        };
        Ok(Recipe { source, options })
    }
}
