//! Properties that hold for every built-in palette.

use approx::assert_abs_diff_eq;
use tastymap::{ColorArray, ColorModel, Registry, TastyMap};

fn builtins() -> Vec<TastyMap> {
    let registry = Registry::with_builtins();
    registry
        .names()
        .iter()
        .map(|n| registry.tmap(n).unwrap())
        .collect()
}

#[test]
fn hsv_export_roundtrips() {
    for tmap in builtins() {
        let hsv = match tmap.to_model(ColorModel::Hsv) {
            ColorArray::Hsv(rows) => rows,
            other => panic!("unexpected {other:?}"),
        };
        let back = TastyMap::from_list(hsv, ColorModel::Hsv).unwrap();
        for (a, b) in tmap.iter().zip(back.iter()) {
            assert_abs_diff_eq!(a.r, b.r, epsilon = 1e-9);
            assert_abs_diff_eq!(a.g, b.g, epsilon = 1e-9);
            assert_abs_diff_eq!(a.b, b.b, epsilon = 1e-9);
        }
    }
}

#[test]
fn resize_and_back_keeps_endpoints() {
    for tmap in builtins() {
        let there = tmap.resize(37).unwrap();
        let back = there.resize(tmap.len()).unwrap();
        assert_eq!(back.len(), tmap.len());
        let last = tmap.len() - 1;
        for (a, b) in [(tmap.colors()[0], back.colors()[0]), (tmap.colors()[last], back.colors()[last])] {
            assert_abs_diff_eq!(a.r, b.r, epsilon = 1e-9);
            assert_abs_diff_eq!(a.g, b.g, epsilon = 1e-9);
            assert_abs_diff_eq!(a.b, b.b, epsilon = 1e-9);
        }
    }
}

#[test]
fn reverse_twice_is_identity() {
    for tmap in builtins() {
        assert_eq!(!!&tmap, tmap, "{}", tmap.name());
    }
}

#[test]
fn merge_length_is_sum() {
    let all = builtins();
    for pair in all.windows(2) {
        let merged = &pair[0] & &pair[1];
        assert_eq!(merged.len(), pair[0].len() + pair[1].len());
        assert_eq!(merged.name(), format!("{}_{}", pair[0].name(), pair[1].name()));
    }
}

#[test]
fn hex_export_is_lowercase_rrggbb() {
    for tmap in builtins() {
        let hex = tmap.to_model(ColorModel::Hex);
        for h in hex.as_hex().unwrap() {
            assert_eq!(h.len(), 7);
            assert!(h.starts_with('#'));
            assert!(h[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
