//! The palette catalog: named 12-shade scales plus neutral pairings
//!
//! A [`PaletteCatalog`] is built once from static data and never mutated
//! afterwards, so it can be shared freely across threads behind an `Arc`.
//! Iteration order is construction order; the matcher relies on that order
//! to break ties deterministically.

mod error;
mod gray_pairs;
mod palette;
mod variant;

use std::collections::{BTreeMap, HashSet};

pub use error::CatalogError;
pub use gray_pairs::{GrayPairTable, DEFAULT_NEUTRAL};
pub use palette::{Palette, PaletteKind, Shade, ShadeScale, SHADE_COUNT};
pub use variant::Variant;

/// Returned by the shade lookups when nothing better exists.
pub const FALLBACK_HEX: &str = "#000000";

/// The shade every palette is represented by: the solid, interactive step.
pub const DEFAULT_SHADE: u8 = 9;

/// The full set of palettes plus the color → neutral pairing table.
///
/// # Example
///
/// ```
/// use oklch_match::catalog::{GrayPairTable, Palette, PaletteCatalog, ShadeScale, Variant};
///
/// let indigo = Palette::new(
///     "indigo",
///     ShadeScale::from_hex(&["#fdfdfe", "#f7f9ff", "#edf2fe"]),
///     ShadeScale::default(),
/// );
/// let catalog = PaletteCatalog::new(vec![indigo], GrayPairTable::default()).unwrap();
///
/// assert_eq!(catalog.shade_hex("indigo", 2, Variant::Light), "#f7f9ff");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaletteCatalog {
    palettes: Vec<Palette>,
    gray_pairs: GrayPairTable,
}

impl PaletteCatalog {
    /// Build a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicatePalette`] when two palettes share a
    /// name. Gray-pair invariants are checked separately by
    /// [`validate_gray_pairs`](Self::validate_gray_pairs) so partial catalogs
    /// remain usable for matching.
    pub fn new(palettes: Vec<Palette>, gray_pairs: GrayPairTable) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for palette in &palettes {
            if !seen.insert(palette.name()) {
                return Err(CatalogError::DuplicatePalette(palette.name().to_string()));
            }
        }
        Ok(Self {
            palettes,
            gray_pairs,
        })
    }

    /// Number of palettes, variant entries included.
    #[inline]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// All palettes in catalog order.
    #[inline]
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Palettes that take part in matching (alpha and P3 entries excluded).
    pub fn base_palettes(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter().filter(|p| p.kind() == PaletteKind::Base)
    }

    /// Names of the matchable palettes, in catalog order.
    pub fn base_palette_names(&self) -> Vec<&str> {
        self.base_palettes().map(Palette::name).collect()
    }

    /// Look up a palette by exact name.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name() == name)
    }

    #[inline]
    pub fn gray_pairs(&self) -> &GrayPairTable {
        &self.gray_pairs
    }

    /// The neutral family paired with `family`.
    ///
    /// Neutral families pair with themselves; unknown names fall back to
    /// [`DEFAULT_NEUTRAL`].
    pub fn get_gray_pair<'a>(&'a self, family: &'a str) -> &'a str {
        if let Some(gray) = self.gray_pairs.get(family) {
            return gray;
        }
        match self.get(family) {
            Some(palette) if palette.is_neutral() => family,
            _ => DEFAULT_NEUTRAL,
        }
    }

    /// Check the pairing invariant: every base color family has exactly one
    /// neutral partner, and every partner is a neutral palette in the catalog.
    ///
    /// # Errors
    ///
    /// The first violation found, in catalog order.
    pub fn validate_gray_pairs(&self) -> Result<(), CatalogError> {
        for palette in self.base_palettes().filter(|p| !p.is_neutral()) {
            if self.gray_pairs.get(palette.name()).is_none() {
                return Err(CatalogError::MissingGrayPair(palette.name().to_string()));
            }
        }
        for (family, neutral) in self.gray_pairs.iter() {
            match self.get(neutral) {
                Some(palette) if palette.is_neutral() => {}
                _ => {
                    return Err(CatalogError::UnknownNeutral {
                        family: family.to_string(),
                        neutral: neutral.to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Display hex for one shade of a palette.
    ///
    /// An unknown palette yields [`FALLBACK_HEX`]; a missing shade falls back
    /// to [`DEFAULT_SHADE`] of the same palette, then to [`FALLBACK_HEX`].
    pub fn shade_hex(&self, name: &str, shade: u8, variant: Variant) -> &str {
        let Some(scale) = self.get(name).map(|p| p.scale(variant)) else {
            return FALLBACK_HEX;
        };
        scale
            .get(shade)
            .or_else(|| scale.get(DEFAULT_SHADE))
            .map_or(FALLBACK_HEX, Shade::hex)
    }

    /// A representative color for a palette: shade 9, else its first shade.
    pub fn palette_color(&self, name: &str, variant: Variant) -> &str {
        let Some(scale) = self.get(name).map(|p| p.scale(variant)) else {
            return FALLBACK_HEX;
        };
        scale
            .get(DEFAULT_SHADE)
            .or_else(|| scale.iter().next().map(|(_, shade)| shade))
            .map_or(FALLBACK_HEX, Shade::hex)
    }

    /// Every present shade of a palette, keyed by shade number.
    pub fn color_scale(&self, name: &str, variant: Variant) -> Option<BTreeMap<u8, String>> {
        self.get(name).map(|palette| {
            palette
                .scale(variant)
                .iter()
                .map(|(key, shade)| (key, shade.hex().to_string()))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> PaletteCatalog {
        let gray = Palette::new(
            "gray",
            ShadeScale::from_hex(&["#fcfcfc", "#f9f9f9", "#f0f0f0"]),
            ShadeScale::default(),
        )
        .neutral();
        let slate = Palette::new("slate", ShadeScale::from_hex(&["#fcfcfd"]), ShadeScale::default())
            .neutral();
        let indigo = Palette::new(
            "indigo",
            ShadeScale::from_pairs([(1, "#fdfdfe"), (9, "#3e63dd"), (12, "#1f2d5c")]).unwrap(),
            ShadeScale::from_pairs([(9, "#3e63dd")]).unwrap(),
        );
        let indigo_alpha = Palette::new(
            "indigoA",
            ShadeScale::from_pairs([(9, "#0034dcc1")]).unwrap(),
            ShadeScale::default(),
        )
        .with_kind(PaletteKind::Alpha);

        let mut pairs = GrayPairTable::default();
        pairs.insert("indigo", "slate");

        PaletteCatalog::new(vec![gray, slate, indigo, indigo_alpha], pairs).unwrap()
    }

    #[test]
    fn test_duplicate_palette_rejected() {
        let a = Palette::new("red", ShadeScale::default(), ShadeScale::default());
        let b = Palette::new("red", ShadeScale::default(), ShadeScale::default());
        let result = PaletteCatalog::new(vec![a, b], GrayPairTable::default());
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicatePalette("red".to_string())
        );
    }

    #[test]
    fn test_base_palettes_exclude_variants() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.base_palette_names(), vec!["gray", "slate", "indigo"]);
    }

    #[test]
    fn test_shade_hex_lookups() {
        let catalog = sample_catalog();
        assert_eq!(catalog.shade_hex("indigo", 12, Variant::Light), "#1f2d5c");
        // Missing shade falls back to shade 9
        assert_eq!(catalog.shade_hex("indigo", 4, Variant::Light), "#3e63dd");
        // Missing shade and no shade 9
        assert_eq!(catalog.shade_hex("gray", 11, Variant::Light), FALLBACK_HEX);
        // Unknown palette
        assert_eq!(catalog.shade_hex("nope", 9, Variant::Light), FALLBACK_HEX);
    }

    #[test]
    fn test_palette_color() {
        let catalog = sample_catalog();
        assert_eq!(catalog.palette_color("indigo", Variant::Light), "#3e63dd");
        // No shade 9: first available shade
        assert_eq!(catalog.palette_color("gray", Variant::Light), "#fcfcfc");
        // Empty dark scale
        assert_eq!(catalog.palette_color("gray", Variant::Dark), FALLBACK_HEX);
        assert_eq!(catalog.palette_color("nope", Variant::Dark), FALLBACK_HEX);
    }

    #[test]
    fn test_color_scale() {
        let catalog = sample_catalog();
        let scale = catalog.color_scale("indigo", Variant::Light).unwrap();
        assert_eq!(scale.keys().copied().collect::<Vec<_>>(), vec![1, 9, 12]);
        assert_eq!(scale[&9], "#3e63dd");
        assert!(catalog.color_scale("nope", Variant::Light).is_none());
    }

    #[test]
    fn test_get_gray_pair() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get_gray_pair("indigo"), "slate");
        assert_eq!(catalog.get_gray_pair("slate"), "slate");
        assert_eq!(catalog.get_gray_pair("unknown"), DEFAULT_NEUTRAL);
    }

    #[test]
    fn test_validate_gray_pairs() {
        let catalog = sample_catalog();
        assert_eq!(catalog.validate_gray_pairs(), Ok(()));

        let red = Palette::new("red", ShadeScale::default(), ShadeScale::default());
        let catalog = PaletteCatalog::new(vec![red], GrayPairTable::default()).unwrap();
        assert_eq!(
            catalog.validate_gray_pairs(),
            Err(CatalogError::MissingGrayPair("red".to_string()))
        );

        let red = Palette::new("red", ShadeScale::default(), ShadeScale::default());
        let mut pairs = GrayPairTable::default();
        pairs.insert("red", "mauve");
        let catalog = PaletteCatalog::new(vec![red], pairs).unwrap();
        assert_eq!(
            catalog.validate_gray_pairs(),
            Err(CatalogError::UnknownNeutral {
                family: "red".to_string(),
                neutral: "mauve".to_string(),
            })
        );
    }
}
