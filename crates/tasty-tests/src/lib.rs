//! Integration tests for tastymap crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the color types, the math helpers, the built-in palettes and
//! the palette API: recipe files on disk, JSON export, and colorbars built
//! from cooked palettes.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    use tasty_core::{ColorModel, Rgba};
    use tastymap::{
        pair_tbar, BarOptions, Bounds, CookOptions, MapError, RecipeBook, Registry, TastyMap,
    };

    const RECIPES: &str = r##"
recipes:
  - name: sunset
    colors: ["#ff7e5f", "#feb47b", "gold"]
    num_colors: 16
    bad: black
  - name: ocean
    cmap: Blues_r
    num_colors: 12
    interpolation: rgb
  - name: hsv_ramp
    colors: [[0.0, 1.0, 1.0], [0.66, 1.0, 1.0]]
    color_model: hsv
    num_colors: 5
  - name: sunset_rev
    cmap: sunset_r
    tweak: { saturation: 0.5 }
"##;

    /// Test loading recipes from disk and cooking them into a registry
    #[test]
    fn test_recipe_file_to_registry() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(RECIPES.as_bytes()).unwrap();

        let book = RecipeBook::from_file(file.path()).unwrap();
        assert_eq!(book.len(), 4);
        assert_eq!(book.source_path(), Some(file.path()));

        let mut registry = Registry::with_builtins();
        let cooked = book.cook_all(&mut registry).unwrap();
        let names: Vec<&str> = cooked.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["sunset", "ocean", "hsv_ramp", "sunset_rev"]);

        let sunset = registry.get("sunset").unwrap();
        assert_eq!(sunset.len(), 16);
        assert_eq!(sunset.bad(), Rgba::BLACK);

        let ramp = registry.tmap("hsv_ramp").unwrap();
        assert_abs_diff_eq!(ramp.colors()[0].r, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ramp.colors()[4].to_hsv().h, 0.66, epsilon = 1e-9);

        // sunset_rev starts where sunset ends, desaturated
        let rev = registry.get("sunset_rev").unwrap();
        assert!(rev.colors()[0].to_hsv().s < sunset.colors()[15].to_hsv().s);
    }

    #[test]
    fn test_recipe_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            RecipeBook::from_file(&missing),
            Err(MapError::RecipeNotFound { .. })
        ));

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "recipes: [ {name: x, cmap: ").unwrap();
        assert!(matches!(RecipeBook::from_file(&broken), Err(MapError::Yaml(_))));

        let unknown = dir.path().join("unknown.yaml");
        std::fs::write(&unknown, "recipes:\n  - {name: x, cmap: no_such_map}\n").unwrap();
        let book = RecipeBook::from_file(&unknown).unwrap();
        let mut registry = Registry::with_builtins();
        assert!(book.cook_all(&mut registry).unwrap_err().is_lookup_error());
    }

    /// Exported arrays serialize as plain JSON lists
    #[test]
    fn test_json_export() {
        let tmap = TastyMap::from_list(["red", "blue"], ColorModel::Rgba).unwrap();

        let hex = serde_json::to_value(tmap.to_model(ColorModel::Hex)).unwrap();
        assert_eq!(hex, serde_json::json!(["#ff0000", "#0000ff"]));

        let rgb = serde_json::to_value(tmap.to_model(ColorModel::Rgb)).unwrap();
        assert_eq!(rgb, serde_json::json!([[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]));

        let whole = serde_json::to_value(&tmap).unwrap();
        assert_eq!(whole["name"], "custom_tastymap");
        assert_eq!(whole["lut"].as_array().map(Vec::len), Some(2));
        assert!(whole["extremes"]["bad"].is_null());
    }

    /// Built-in expansion agrees with direct interpolation of the anchors
    #[test]
    fn test_builtin_expansion_matches_math() {
        let builtin = tasty_palettes::find("RdBu").unwrap();
        let anchors = builtin.anchors().unwrap();
        let tmap = TastyMap::from_name("RdBu").unwrap();
        assert_eq!(tmap.len(), tasty_palettes::LUT_SIZE);

        let positions = tasty_math::sample_positions(anchors.len(), tmap.len());
        for (p, got) in positions.iter().zip(tmap.iter()) {
            let want = tasty_math::lerp_rgba(anchors[p.lo], anchors[p.hi], p.t);
            assert_abs_diff_eq!(want.r, got.r, epsilon = 1e-12);
            assert_abs_diff_eq!(want.b, got.b, epsilon = 1e-12);
        }
    }

    /// Colorbar over a cooked, registered palette
    #[test]
    fn test_colorbar_pipeline() {
        let mut registry = Registry::with_builtins();
        let opts = CookOptions::new().num_colors(7).under("black").over("white").name("bins");
        let tmap = registry.cook("viridis", &opts).unwrap();

        let bar = pair_tbar(&tmap, Bounds::stepped(0.0, 100.0, 25.0), BarOptions::new().center(false)).unwrap();
        assert_eq!(bar.edges(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(bar.color_for(-1.0), Rgba::BLACK);
        assert_eq!(bar.color_for(200.0), Rgba::WHITE);
        assert_eq!(bar.clim(), (0.0, 100.0));

        let linear = pair_tbar(&tmap, Bounds::range(0.0, 100.0), BarOptions::new()).unwrap();
        assert_eq!(linear.color_for(50.0), tmap.colors()[3]);
        assert_eq!(linear.edges().len(), 6);
    }
}
