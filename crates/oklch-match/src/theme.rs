//! Theme resolution: an accent shade plus the neutral family that goes
//! with it, with both full scales for one variant.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{PaletteCatalog, Variant, DEFAULT_SHADE};
use crate::color::hex_to_oklch;
use crate::matcher::{closest_match, MatchResult};
use crate::mood::{transform_for_variant, MoodTarget};

/// Everything a UI needs to paint with one brand color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub variant: Variant,
    pub accent: MatchResult,
    /// Display hex of the accent shade
    pub accent_hex: String,
    /// Neutral family paired with the accent palette
    pub gray: String,
    pub accent_scale: BTreeMap<u8, String>,
    pub gray_scale: BTreeMap<u8, String>,
}

impl Theme {
    /// Build a theme around an already resolved accent.
    ///
    /// Scales of palettes missing from the catalog come back empty.
    pub fn for_accent(catalog: &PaletteCatalog, accent: MatchResult, variant: Variant) -> Self {
        let accent_hex = catalog
            .shade_hex(&accent.palette_name, accent.shade, variant)
            .to_string();
        let gray = catalog.get_gray_pair(&accent.palette_name).to_string();
        let accent_scale = catalog
            .color_scale(&accent.palette_name, variant)
            .unwrap_or_default();
        let gray_scale = catalog.color_scale(&gray, variant).unwrap_or_default();

        Self {
            variant,
            accent,
            accent_hex,
            gray,
            accent_scale,
            gray_scale,
        }
    }
}

/// The accent for `hex`: the mood transform when a target is given,
/// otherwise the closest palette at shade 9. Invalid input yields the
/// default match.
pub fn resolve_accent(
    catalog: &PaletteCatalog,
    hex: &str,
    mood: Option<MoodTarget>,
    variant: Variant,
) -> MatchResult {
    match mood {
        Some(target) => {
            transform_for_variant(catalog, hex, target.chroma, target.lightness, variant)
        }
        None => hex_to_oklch(hex).map_or_else(MatchResult::default, |target| {
            closest_match(catalog, target, variant, DEFAULT_SHADE)
        }),
    }
}

/// [`resolve_accent`] followed by [`Theme::for_accent`].
pub fn resolve_theme(
    catalog: &PaletteCatalog,
    hex: &str,
    mood: Option<MoodTarget>,
    variant: Variant,
) -> Theme {
    let accent = resolve_accent(catalog, hex, mood, variant);
    Theme::for_accent(catalog, accent, variant)
}
