//! # tasty-palettes
//!
//! Built-in named palettes.
//!
//! Each palette is a short list of anchor colors written as hex codes.
//! Continuous palettes (sequential and diverging) are meant to be expanded
//! into a [`LUT_SIZE`]-entry lookup table by interpolating between anchors;
//! qualitative palettes are used at their listed length.
//!
//! # Included Palettes
//!
//! | Kind | Palettes |
//! |------|----------|
//! | Sequential | viridis, plasma, magma, inferno, cividis, Greys, gray, Blues, Greens, Oranges, Reds, Purples |
//! | Diverging | RdBu, RdYlBu, RdYlGn, Spectral, BrBG, PRGn, PiYG |
//! | Qualitative | tab10, Set1, Set2, Set3, Pastel1, Pastel2, Dark2, Paired, Accent |
//!
//! # Usage
//!
//! ```rust
//! use tasty_palettes::{find, PaletteKind};
//!
//! let viridis = find("VIRIDIS").unwrap();
//! assert_eq!(viridis.name, "viridis");
//! assert_eq!(viridis.kind, PaletteKind::Sequential);
//! assert_eq!(viridis.lut_size(), 256);
//!
//! let set1 = find("set1").unwrap();
//! assert_eq!(set1.lut_size(), set1.colors.len());
//! ```
//!
//! # Dependencies
//!
//! - [`tasty-core`] - Color parsing
//!
//! # Used By
//!
//! - `tastymap` - Named colormap lookup and the default registry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use tasty_core::{parse_color, Result, Rgba};

/// Lookup table size for continuous palettes.
pub const LUT_SIZE: usize = 256;

/// How a palette is meant to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    /// Ordered, low to high.
    Sequential,
    /// Two ramps meeting at a neutral midpoint.
    Diverging,
    /// Distinct colors for categories.
    Qualitative,
}

impl PaletteKind {
    /// Continuous palettes are interpolated into a lookup table.
    #[inline]
    pub const fn is_continuous(self) -> bool {
        !matches!(self, Self::Qualitative)
    }
}

/// A named built-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    /// Canonical name.
    pub name: &'static str,
    /// Palette kind.
    pub kind: PaletteKind,
    /// Anchor colors as `#rrggbb`.
    pub colors: &'static [&'static str],
}

impl Builtin {
    /// Number of entries in the palette's lookup table.
    #[inline]
    pub const fn lut_size(&self) -> usize {
        if self.kind.is_continuous() {
            LUT_SIZE
        } else {
            self.colors.len()
        }
    }

    /// Anchor colors parsed to RGBA.
    pub fn anchors(&self) -> Result<Vec<Rgba>> {
        self.colors.iter().map(|c| parse_color(c)).collect()
    }
}

// ============================================================================
// Sequential
// ============================================================================

/// Viridis
pub const VIRIDIS: &[&str] = &[
    "#440154", "#482878", "#3e4a89", "#31688e", "#26828e",
    "#1f9e89", "#35b779", "#6ece58", "#b5de2b", "#fde725",
];

/// Plasma
pub const PLASMA: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786",
    "#d8576b", "#ed7953", "#fb9f3a", "#fdca26", "#f0f921",
];

/// Magma
pub const MAGMA: &[&str] = &[
    "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f",
    "#cd4071", "#f1605d", "#fd9668", "#feca8d", "#fcfdbf",
];

/// Inferno
pub const INFERNO: &[&str] = &[
    "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60",
    "#cf4446", "#ed6925", "#fb9b06", "#f7d13d", "#fcffa4",
];

/// Cividis
pub const CIVIDIS: &[&str] = &[
    "#00224e", "#123570", "#3b496c", "#575d6d", "#707173",
    "#8a8678", "#a59c74", "#c3b369", "#e1cc55", "#fdea45",
];

/// Greys, white to black
pub const GREYS: &[&str] = &[
    "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696",
    "#737373", "#525252", "#252525", "#000000",
];

/// Gray, black to white
pub const GRAY: &[&str] = &["#000000", "#ffffff"];

/// Blues
pub const BLUES: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6",
    "#4292c6", "#2171b5", "#08519c", "#08306b",
];

/// Greens
pub const GREENS: &[&str] = &[
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476",
    "#41ab5d", "#238b45", "#006d2c", "#00441b",
];

/// Oranges
pub const ORANGES: &[&str] = &[
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c",
    "#f16913", "#d94801", "#a63603", "#7f2704",
];

/// Reds
pub const REDS: &[&str] = &[
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a",
    "#ef3b2c", "#cb181d", "#a50f15", "#67000d",
];

/// Purples
pub const PURPLES: &[&str] = &[
    "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8",
    "#807dba", "#6a51a3", "#54278f", "#3f007d",
];

// ============================================================================
// Diverging
// ============================================================================

/// Red-Blue
pub const RDBU: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7",
    "#f7f7f7", "#d1e5f0", "#92c5de", "#4393c3", "#2166ac", "#053061",
];

/// Red-Yellow-Blue
pub const RDYLBU: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090",
    "#ffffbf", "#e0f3f8", "#abd9e9", "#74add1", "#4575b4", "#313695",
];

/// Red-Yellow-Green
pub const RDYLGN: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b",
    "#ffffbf", "#d9ef8b", "#a6d96a", "#66bd63", "#1a9850", "#006837",
];

/// Spectral
pub const SPECTRAL: &[&str] = &[
    "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b",
    "#ffffbf", "#e6f598", "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2",
];

/// Brown-Blue-Green
pub const BRBG: &[&str] = &[
    "#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3",
    "#f5f5f5", "#c7eae5", "#80cdc1", "#35978f", "#01665e", "#003c30",
];

/// Purple-Green
pub const PRGN: &[&str] = &[
    "#40004b", "#762a83", "#9970ab", "#c2a5cf", "#e7d4e8",
    "#f7f7f7", "#d9f0d3", "#a6dba0", "#5aae61", "#1b7837", "#00441b",
];

/// Pink-Yellow-Green
pub const PIYG: &[&str] = &[
    "#8e0152", "#c51b7d", "#de77ae", "#f1b6da", "#fde0ef",
    "#f7f7f7", "#e6f5d0", "#b8e186", "#7fbc41", "#4d9221", "#276419",
];

// ============================================================================
// Qualitative
// ============================================================================

/// Tableau 10
pub const TAB10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// ColorBrewer Set1
pub const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00",
    "#ffff33", "#a65628", "#f781bf", "#999999",
];

/// ColorBrewer Set2
pub const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854",
    "#ffd92f", "#e5c494", "#b3b3b3",
];

/// ColorBrewer Set3
pub const SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3",
    "#fdb462", "#b3de69", "#fccde5", "#d9d9d9", "#bc80bd",
    "#ccebc5", "#ffed6f",
];

/// ColorBrewer Pastel1
pub const PASTEL1: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6",
    "#ffffcc", "#e5d8bd", "#fddaec", "#f2f2f2",
];

/// ColorBrewer Pastel2
pub const PASTEL2: &[&str] = &[
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9",
    "#fff2ae", "#f1e2cc", "#cccccc",
];

/// ColorBrewer Dark2
pub const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e",
    "#e6ab02", "#a6761d", "#666666",
];

/// ColorBrewer Paired
pub const PAIRED: &[&str] = &[
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99",
    "#e31a1c", "#fdbf6f", "#ff7f00", "#cab2d6", "#6a3d9a",
    "#ffff99", "#b15928",
];

/// ColorBrewer Accent
pub const ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0",
    "#f0027f", "#bf5b17", "#666666",
];

// ============================================================================
// Lookup
// ============================================================================

const fn builtin(name: &'static str, kind: PaletteKind, colors: &'static [&'static str]) -> Builtin {
    Builtin { name, kind, colors }
}

/// Every built-in palette, in display order.
pub const BUILTINS: &[Builtin] = &[
    builtin("viridis", PaletteKind::Sequential, VIRIDIS),
    builtin("plasma", PaletteKind::Sequential, PLASMA),
    builtin("magma", PaletteKind::Sequential, MAGMA),
    builtin("inferno", PaletteKind::Sequential, INFERNO),
    builtin("cividis", PaletteKind::Sequential, CIVIDIS),
    builtin("Greys", PaletteKind::Sequential, GREYS),
    builtin("gray", PaletteKind::Sequential, GRAY),
    builtin("Blues", PaletteKind::Sequential, BLUES),
    builtin("Greens", PaletteKind::Sequential, GREENS),
    builtin("Oranges", PaletteKind::Sequential, ORANGES),
    builtin("Reds", PaletteKind::Sequential, REDS),
    builtin("Purples", PaletteKind::Sequential, PURPLES),
    builtin("RdBu", PaletteKind::Diverging, RDBU),
    builtin("RdYlBu", PaletteKind::Diverging, RDYLBU),
    builtin("RdYlGn", PaletteKind::Diverging, RDYLGN),
    builtin("Spectral", PaletteKind::Diverging, SPECTRAL),
    builtin("BrBG", PaletteKind::Diverging, BRBG),
    builtin("PRGn", PaletteKind::Diverging, PRGN),
    builtin("PiYG", PaletteKind::Diverging, PIYG),
    builtin("tab10", PaletteKind::Qualitative, TAB10),
    builtin("Set1", PaletteKind::Qualitative, SET1),
    builtin("Set2", PaletteKind::Qualitative, SET2),
    builtin("Set3", PaletteKind::Qualitative, SET3),
    builtin("Pastel1", PaletteKind::Qualitative, PASTEL1),
    builtin("Pastel2", PaletteKind::Qualitative, PASTEL2),
    builtin("Dark2", PaletteKind::Qualitative, DARK2),
    builtin("Paired", PaletteKind::Qualitative, PAIRED),
    builtin("Accent", PaletteKind::Qualitative, ACCENT),
];

/// Finds a built-in palette by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Canonical names of all built-in palettes.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("rdbu").map(|b| b.name), Some("RdBu"));
        assert_eq!(find("BLUES").map(|b| b.name), Some("Blues"));
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_names_unique() {
        let mut lower: Vec<String> = names().map(str::to_ascii_lowercase).collect();
        let total = lower.len();
        lower.sort();
        lower.dedup();
        assert_eq!(lower.len(), total);
    }

    #[test]
    fn test_all_anchors_parse() {
        for b in BUILTINS {
            let anchors = b.anchors().unwrap();
            assert!(anchors.len() >= 2, "{} too short", b.name);
            assert!(anchors.iter().all(|c| c.a == 1.0));
        }
    }

    #[test]
    fn test_lut_sizes() {
        assert_eq!(find("viridis").unwrap().lut_size(), LUT_SIZE);
        assert_eq!(find("Spectral").unwrap().lut_size(), LUT_SIZE);
        assert_eq!(find("tab10").unwrap().lut_size(), 10);
        assert_eq!(find("Paired").unwrap().lut_size(), 12);
    }

    #[test]
    fn test_gray_and_greys_run_opposite_ways() {
        let gray = find("gray").unwrap().anchors().unwrap();
        let greys = find("Greys").unwrap().anchors().unwrap();
        assert_eq!(gray[0], Rgba::BLACK);
        assert_eq!(greys[0], Rgba::WHITE);
    }
}
