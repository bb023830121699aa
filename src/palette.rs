//! Named color palettes applied consistently across a card set.

use crate::foundation::core::Rgb;

/// Palette key used whenever the requested key is absent or unknown.
pub const DEFAULT_PALETTE: &str = "neon_surge";

/// Resolved `{primary, secondary, background}` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CardPalette {
    /// Accent color for badges, dividers and the first wordmark segment.
    pub primary: Rgb,
    /// Second accent color (gradient end stop).
    pub secondary: Rgb,
    /// Base background color.
    pub background: Rgb,
}

struct PaletteEntry {
    key: &'static str,
    palette: CardPalette,
}

const fn entry(key: &'static str, primary: Rgb, secondary: Rgb, background: Rgb) -> PaletteEntry {
    PaletteEntry {
        key,
        palette: CardPalette {
            primary,
            secondary,
            background,
        },
    }
}

static PALETTES: [PaletteEntry; 8] = [
    entry(
        "neon_surge",
        Rgb::new(0x00, 0xff, 0x88),
        Rgb::new(0x00, 0xd4, 0xff),
        Rgb::new(0x0a, 0x0a, 0x0f),
    ),
    entry(
        "cyber_sunset",
        Rgb::new(0xff, 0x6b, 0x35),
        Rgb::new(0xf7, 0x93, 0x1e),
        Rgb::new(0x1a, 0x0a, 0x0f),
    ),
    entry(
        "plasma_purple",
        Rgb::new(0xa8, 0x55, 0xf7),
        Rgb::new(0xec, 0x48, 0x99),
        Rgb::new(0x0f, 0x0a, 0x1a),
    ),
    entry(
        "arctic_frost",
        Rgb::new(0x38, 0xbd, 0xf8),
        Rgb::new(0xe0, 0xf2, 0xfe),
        Rgb::new(0x0a, 0x14, 0x20),
    ),
    entry(
        "toxic_green",
        Rgb::new(0x84, 0xcc, 0x16),
        Rgb::new(0x22, 0xc5, 0x5e),
        Rgb::new(0x0a, 0x14, 0x0a),
    ),
    entry(
        "crimson_fury",
        Rgb::new(0xef, 0x44, 0x44),
        Rgb::new(0xf9, 0x73, 0x16),
        Rgb::new(0x14, 0x0a, 0x0a),
    ),
    entry(
        "golden_legend",
        Rgb::new(0xfb, 0xbf, 0x24),
        Rgb::new(0xf5, 0x9e, 0x0b),
        Rgb::new(0x14, 0x10, 0x0a),
    ),
    entry(
        "midnight_void",
        Rgb::new(0x63, 0x66, 0xf1),
        Rgb::new(0x8b, 0x5c, 0xf6),
        Rgb::new(0x0a, 0x0a, 0x14),
    ),
];

fn lookup(key: &str) -> Option<CardPalette> {
    PALETTES.iter().find(|e| e.key == key).map(|e| e.palette)
}

/// Resolve a palette key, substituting [`DEFAULT_PALETTE`] when absent or unknown.
pub fn resolve(id: Option<&str>) -> CardPalette {
    id.map(str::trim)
        .filter(|k| !k.is_empty())
        .and_then(lookup)
        .or_else(|| lookup(DEFAULT_PALETTE))
        .unwrap_or(PALETTES[0].palette)
}

/// All palette keys in table order.
pub fn palette_keys() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|e| e.key)
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
