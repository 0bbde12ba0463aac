//! Named colormap registry.
//!
//! A [`Registry`] is an owned name-to-colormap table. There is no global
//! registry: create one, register palettes into it, and pass it to whatever
//! needs to resolve names.
//!
//! Lookups ignore case, fall back to the built-in palettes when the
//! registry was created with [`Registry::with_builtins`], and understand a
//! trailing `_r` as "reversed". Misses fail with up to five close matches.
//!
//! # Example
//!
//! ```rust
//! use tastymap::{CookOptions, Registry};
//!
//! let mut registry = Registry::with_builtins();
//! registry.cook("Blues", &CookOptions::new().num_colors(5).name("blues5"))?;
//!
//! let blues5 = registry.get("BLUES5")?;
//! assert_eq!(blues5.len(), 5);
//! assert_eq!(registry.get("blues5_r")?.colors()[0], blues5.colors()[4]);
//! # Ok::<(), tastymap::MapError>(())
//! ```

use std::collections::BTreeMap;

use strsim::normalized_levenshtein;
use tracing::{debug, warn};

use crate::colormap::Colormap;
use crate::cook::{cook_with, CookOptions, Source};
use crate::error::{MapError, MapResult};
use crate::spec::PaletteSpec;
use crate::tmap::TastyMap;

/// Maximum number of close matches reported for an unknown name.
const MAX_SUGGESTIONS: usize = 5;

/// Minimum similarity for a name to be suggested.
const SUGGESTION_CUTOFF: f64 = 0.4;

/// An owned table of named colormaps.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Keyed by lowercase name.
    maps: BTreeMap<String, Colormap>,
    builtins: bool,
}

impl Registry {
    /// Creates an empty registry without built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that falls back to the built-in palettes.
    pub fn with_builtins() -> Self {
        Self {
            maps: BTreeMap::new(),
            builtins: true,
        }
    }

    /// Adds a colormap under its own name, replacing any previous entry.
    ///
    /// Returns the replaced colormap.
    pub fn register(&mut self, cmap: Colormap) -> Option<Colormap> {
        let key = cmap.name().to_lowercase();
        let name = cmap.name().to_string();
        let previous = self.maps.insert(key, cmap);
        if previous.is_some() {
            warn!(%name, "overwriting registered colormap");
        } else {
            debug!(%name, "registered colormap");
        }
        previous
    }

    /// Removes a registered colormap.
    pub fn remove(&mut self, name: &str) -> Option<Colormap> {
        self.maps.remove(&name.to_lowercase())
    }

    /// Number of registered colormaps, not counting built-ins.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Returns true if `name` resolves, with or without `_r`.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Registered names followed by built-in names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.maps.values().map(|c| c.name().to_string()).collect();
        if self.builtins {
            names.extend(
                tasty_palettes::names()
                    .filter(|n| !self.maps.contains_key(&n.to_lowercase()))
                    .map(str::to_string),
            );
        }
        names
    }

    /// Looks up a colormap by name.
    ///
    /// Registered entries shadow built-ins. A name ending in `_r` that is not
    /// itself known resolves to the reversed colormap, named as asked.
    pub fn get(&self, name: &str) -> MapResult<Colormap> {
        match self.find(name) {
            Some(found) => found,
            None => Err(MapError::UnknownColormap {
                name: name.to_string(),
                suggestions: self.suggest(name),
            }),
        }
    }

    fn find(&self, name: &str) -> Option<MapResult<Colormap>> {
        if let Some(cmap) = self.maps.get(&name.to_lowercase()) {
            return Some(Ok(cmap.clone()));
        }
        if self.builtins {
            if let Some(builtin) = tasty_palettes::find(name) {
                return Some(Colormap::from_builtin(builtin));
            }
        }
        let stem = strip_reverse_suffix(name)?;
        let found = self.find(stem)?;
        Some(found.map(|c| c.reversed().renamed(name)))
    }

    /// Resolves a palette spec string such as `viridis_n8_r`.
    ///
    /// A name registered verbatim wins over reading it as a spec.
    pub fn tmap(&self, spec: &str) -> MapResult<TastyMap> {
        if let Some(found) = self.find(spec) {
            return Ok(TastyMap::from_colormap(found?.renamed(spec)));
        }
        let parsed: PaletteSpec = spec.parse()?;
        if !parsed.has_modifiers() {
            return self.get(spec).map(TastyMap::from_colormap);
        }
        let base = self.get(&parsed.base)?;
        parsed.build(base)
    }

    /// Cooks a palette against this registry and registers it when
    /// `options.name` is set.
    pub fn cook(&mut self, source: impl Into<Source>, options: &CookOptions) -> MapResult<TastyMap> {
        let tmap = cook_with(self, source.into(), options)?;
        if options.name.is_some() {
            return Ok(tmap.register(self, None));
        }
        Ok(tmap)
    }

    fn suggest(&self, name: &str) -> Vec<String> {
        let mut candidates = self.names();
        let reversed: Vec<String> = candidates.iter().map(|n| format!("{n}_r")).collect();
        candidates.extend(reversed);
        close_matches(name, &candidates, MAX_SUGGESTIONS, SUGGESTION_CUTOFF)
    }
}

/// Looks up a built-in palette, honoring `_r`.
pub(crate) fn lookup_builtin(name: &str) -> MapResult<Colormap> {
    Registry::with_builtins().get(name)
}

fn strip_reverse_suffix(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(2)?;
    let (stem, suffix) = name.split_at_checked(split)?;
    (suffix.eq_ignore_ascii_case("_r") && !stem.is_empty()).then_some(stem)
}

/// Up to `n` candidates whose similarity to `word` is at least `cutoff`,
/// best first.
fn close_matches(word: &str, candidates: &[String], n: usize, cutoff: f64) -> Vec<String> {
    let word = word.to_lowercase();
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|c| (normalized_levenshtein(&word, &c.to_lowercase()), c))
        .filter(|(score, _)| *score >= cutoff)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(n).map(|(_, c)| c.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasty_core::Rgba;

    fn bw() -> Colormap {
        Colormap::listed("BlackWhite", vec![Rgba::BLACK, Rgba::WHITE]).unwrap()
    }

    #[test]
    fn test_empty_registry_has_no_builtins() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.get("viridis").unwrap_err().is_lookup_error());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_register_and_get_ignores_case() {
        let mut registry = Registry::new();
        assert!(registry.register(bw()).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("blackwhite").unwrap().name(), "BlackWhite");
        assert!(registry.contains("BLACKWHITE"));
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = Registry::new();
        registry.register(bw());
        let replaced = registry.register(bw().reversed());
        assert_eq!(replaced, Some(bw()));
        assert_eq!(registry.get("BlackWhite").unwrap().colors()[0], Rgba::WHITE);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reverse_suffix() {
        let mut registry = Registry::new();
        registry.register(bw());
        let rev = registry.get("BlackWhite_R").unwrap();
        assert_eq!(rev.colors()[0], Rgba::WHITE);
        assert_eq!(rev.name(), "BlackWhite_R");
        assert!(registry.get("_r").is_err());
    }

    #[test]
    fn test_registered_shadows_builtin() {
        let mut registry = Registry::with_builtins();
        registry.register(bw().renamed("viridis"));
        assert_eq!(registry.get("viridis").unwrap().len(), 2);
        assert_eq!(registry.names().iter().filter(|n| n.eq_ignore_ascii_case("viridis")).count(), 1);
    }

    #[test]
    fn test_builtin_fallback() {
        let registry = Registry::with_builtins();
        assert_eq!(registry.get("magma").unwrap().len(), 256);
        assert_eq!(registry.get("Dark2_r").unwrap().len(), 8);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_suggestions() {
        let registry = Registry::with_builtins();
        match registry.get("virdis") {
            Err(MapError::UnknownColormap { suggestions, .. }) => {
                assert_eq!(suggestions.first().map(String::as_str), Some("viridis"));
                assert!(suggestions.len() <= MAX_SUGGESTIONS);
            }
            other => panic!("unexpected {other:?}"),
        }
        match registry.get("qqqqqqqqqqqq") {
            Err(MapError::UnknownColormap { suggestions, .. }) => assert!(suggestions.is_empty()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_tmap_specs() {
        let mut registry = Registry::with_builtins();
        registry.register(bw());
        let tmap = registry.tmap("blackwhite_n5_r").unwrap();
        assert_eq!(tmap.len(), 5);
        assert_eq!(tmap.colors()[0], Rgba::WHITE);
        assert_eq!(registry.tmap("viridis").unwrap().name(), "viridis");
        assert!(registry.tmap("nope_n5").unwrap_err().is_lookup_error());
    }

    #[test]
    fn test_close_matches() {
        let names: Vec<String> = ["viridis", "Blues", "magma", "plasma", "inferno", "cividis", "twilight"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let found = close_matches("VIRDIS", &names, MAX_SUGGESTIONS, SUGGESTION_CUTOFF);
        assert_eq!(found.first().map(String::as_str), Some("viridis"));
        assert!(found.len() <= MAX_SUGGESTIONS);
        assert!(close_matches("zzzzzzzz", &names, MAX_SUGGESTIONS, SUGGESTION_CUTOFF).is_empty());
        assert_eq!(close_matches("blues", &names, 1, SUGGESTION_CUTOFF), ["Blues"]);
    }

    #[test]
    fn test_strip_reverse_suffix() {
        assert_eq!(strip_reverse_suffix("viridis_r"), Some("viridis"));
        assert_eq!(strip_reverse_suffix("viridis_R"), Some("viridis"));
        assert_eq!(strip_reverse_suffix("viridis"), None);
        assert_eq!(strip_reverse_suffix("_r"), None);
        assert_eq!(strip_reverse_suffix("r"), None);
    }
}
