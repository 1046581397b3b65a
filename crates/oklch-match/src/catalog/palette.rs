//! Named palettes and their 12-step shade scales

use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use super::variant::Variant;
use crate::color::{hex_to_oklch, Oklch};

/// Number of steps in every scale. Shade keys run `1..=SHADE_COUNT`.
pub const SHADE_COUNT: u8 = 12;

/// What a catalog entry is. Only `Base` palettes take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// A regular opaque scale
    #[default]
    Base,
    /// Translucent companion scale
    Alpha,
    /// Display-P3 companion scale
    P3,
}

/// One step of a scale: the stored hex and its OKLCH coordinates.
///
/// The OKLCH value is computed once at construction. It is `None` when the
/// stored string is not a 6-digit hex color, which makes the shade invisible
/// to the matcher without being an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Shade {
    hex: String,
    oklch: Option<Oklch>,
}

impl Shade {
    pub fn new(hex: impl Into<String>) -> Self {
        let hex = hex.into();
        let oklch = hex_to_oklch(&hex);
        Self { hex, oklch }
    }

    /// The hex string exactly as stored in the catalog.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    #[inline]
    pub fn oklch(&self) -> Option<Oklch> {
        self.oklch
    }
}

/// A 12-step scale. Steps may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadeScale {
    shades: [Option<Shade>; SHADE_COUNT as usize],
}

impl ShadeScale {
    /// Build a scale from consecutive hex strings starting at shade 1.
    ///
    /// Entries past shade 12 are ignored.
    pub fn from_hex(hexes: &[&str]) -> Self {
        let mut scale = Self::default();
        for (slot, hex) in scale.shades.iter_mut().zip(hexes) {
            *slot = Some(Shade::new(*hex));
        }
        scale
    }

    /// Build a scale from `(shade, hex)` pairs.
    ///
    /// # Errors
    ///
    /// [`CatalogError::ShadeOutOfRange`] for keys outside `1..=12`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let mut scale = Self::default();
        for (shade, hex) in pairs {
            let index = slot_index(shade).ok_or(CatalogError::ShadeOutOfRange { shade })?;
            scale.shades[index] = Some(Shade::new(hex));
        }
        Ok(scale)
    }

    /// The step with key `shade`, if present.
    #[inline]
    pub fn get(&self, shade: u8) -> Option<&Shade> {
        slot_index(shade).and_then(|i| self.shades[i].as_ref())
    }

    /// Present steps in ascending shade order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Shade)> {
        (1..=SHADE_COUNT)
            .zip(self.shades.iter())
            .filter_map(|(key, shade)| shade.as_ref().map(|s| (key, s)))
    }

    /// Number of present steps.
    pub fn len(&self) -> usize {
        self.shades.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn slot_index(shade: u8) -> Option<usize> {
    (1..=SHADE_COUNT)
        .contains(&shade)
        .then(|| usize::from(shade - 1))
}

/// An immutable named palette with a light and a dark scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    kind: PaletteKind,
    neutral: bool,
    light: ShadeScale,
    dark: ShadeScale,
}

impl Palette {
    /// A base, non-neutral palette.
    pub fn new(name: impl Into<String>, light: ShadeScale, dark: ShadeScale) -> Self {
        Self {
            name: name.into(),
            kind: PaletteKind::Base,
            neutral: false,
            light,
            dark,
        }
    }

    /// Mark this palette as a neutral (gray) family.
    pub fn neutral(mut self) -> Self {
        self.neutral = true;
        self
    }

    pub fn with_kind(mut self, kind: PaletteKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.neutral
    }

    /// The scale for one variant.
    #[inline]
    pub fn scale(&self, variant: Variant) -> &ShadeScale {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_is_sequential() {
        let scale = ShadeScale::from_hex(&["#111111", "#222222", "#333333"]);
        assert_eq!(scale.len(), 3);
        assert_eq!(scale.get(1).unwrap().hex(), "#111111");
        assert_eq!(scale.get(3).unwrap().hex(), "#333333");
        assert!(scale.get(4).is_none());
    }

    #[test]
    fn test_from_hex_ignores_extra_entries() {
        let hexes = ["#101010"; 14];
        let scale = ShadeScale::from_hex(&hexes);
        assert_eq!(scale.len(), 12);
    }

    #[test]
    fn test_from_pairs_range() {
        let scale = ShadeScale::from_pairs([(1, "#ffffff"), (12, "#000000")]).unwrap();
        assert_eq!(scale.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec![1, 12]);

        assert_eq!(
            ShadeScale::from_pairs([(0, "#ffffff")]),
            Err(CatalogError::ShadeOutOfRange { shade: 0 })
        );
        assert_eq!(
            ShadeScale::from_pairs([(13, "#ffffff")]),
            Err(CatalogError::ShadeOutOfRange { shade: 13 })
        );
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let scale = ShadeScale::from_hex(&["#111111"; 12]);
        assert!(scale.get(0).is_none());
        assert!(scale.get(13).is_none());
        assert!(scale.get(255).is_none());
    }

    #[test]
    fn test_unparseable_shade_has_no_oklch() {
        let shade = Shade::new("#0034dcc1");
        assert_eq!(shade.hex(), "#0034dcc1");
        assert!(shade.oklch().is_none());

        let shade = Shade::new("#3e63dd");
        assert!(shade.oklch().is_some());
    }

    #[test]
    fn test_palette_builders() {
        let palette = Palette::new("slate", ShadeScale::default(), ShadeScale::default())
            .neutral()
            .with_kind(PaletteKind::P3);
        assert_eq!(palette.name(), "slate");
        assert!(palette.is_neutral());
        assert_eq!(palette.kind(), PaletteKind::P3);
        assert!(palette.scale(Variant::Dark).is_empty());
    }
}
