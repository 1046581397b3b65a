use std::sync::Arc;

use oklch_match::catalog::DEFAULT_SHADE;
use oklch_match::color::{hex_to_rgb, Oklch};
use oklch_match::matcher::{closest_match, find_closest_palette_by_rgb, find_closest_shade};
use oklch_match::mood::{self, MoodPreview, MoodTarget};
use oklch_match::theme::{resolve_accent, Theme};
use oklch_match::{MatchResult, PaletteCatalog, Variant};

use super::match_cache::{MatchCache, MatchKey, MatchOp};
use crate::models::CacheConfig;

/// Matching over one catalog, memoized
///
/// Every method gives the same answer as the corresponding engine function;
/// the cache only saves the search.
pub struct MatchService {
    catalog: Arc<PaletteCatalog>,
    cache: MatchCache,
}

impl MatchService {
    pub fn new(catalog: Arc<PaletteCatalog>, cache: MatchCache) -> Self {
        Self { catalog, cache }
    }

    pub fn from_config(catalog: Arc<PaletteCatalog>, config: &CacheConfig) -> Self {
        Self::new(catalog, MatchCache::new(config.enabled, config.max_entries))
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    /// Closest palette for `hex`, reported at `shade`.
    pub async fn match_palette(&self, hex: &str, variant: Variant, shade: u8) -> MatchResult {
        self.memoized(hex, MatchOp::Palette { shade }, variant, |_, target| {
            closest_match(&self.catalog, target, variant, shade)
        })
        .await
    }

    /// Closest single shade for `hex`.
    pub async fn match_shade(&self, hex: &str, variant: Variant) -> MatchResult {
        self.memoized(hex, MatchOp::Shade, variant, |_, target| {
            find_closest_shade(&self.catalog, target, variant)
        })
        .await
    }

    /// Mood transform of `hex` towards `target`.
    pub async fn transform(&self, hex: &str, target: MoodTarget, variant: Variant) -> MatchResult {
        let op = MatchOp::mood(target.chroma, target.lightness);
        self.memoized(hex, op, variant, |hex, _| {
            mood::transform_for_variant(
                &self.catalog,
                hex,
                target.chroma,
                target.lightness,
                variant,
            )
        })
        .await
    }

    /// Every archetype resolved for `hex`; not memoized.
    pub fn preview_moods(&self, hex: &str, variant: Variant) -> Vec<MoodPreview> {
        mood::preview_moods(&self.catalog, hex, variant)
    }

    /// Accent plus paired neutral for `hex`, optionally through a mood.
    ///
    /// Shares cache entries with [`Self::match_palette`] at shade 9 and with
    /// [`Self::transform`].
    pub async fn resolve_theme(
        &self,
        hex: &str,
        mood: Option<MoodTarget>,
        variant: Variant,
    ) -> Theme {
        let op = mood.map_or(MatchOp::Palette { shade: DEFAULT_SHADE }, |target| {
            MatchOp::mood(target.chroma, target.lightness)
        });
        let accent = self
            .memoized(hex, op, variant, |hex, _| {
                resolve_accent(&self.catalog, hex, mood, variant)
            })
            .await;
        Theme::for_accent(&self.catalog, accent, variant)
    }

    /// Nearest palette by plain RGB distance; not memoized.
    pub fn quick_pick(&self, hex: &str, variant: Variant) -> &str {
        find_closest_palette_by_rgb(&self.catalog, hex, variant)
    }

    /// Display hex of a match result.
    pub fn display_hex(&self, result: &MatchResult, variant: Variant) -> &str {
        self.catalog
            .shade_hex(&result.palette_name, result.shade, variant)
    }

    /// `compute` gets the normalized hex and its OKLCH value. Invalid input
    /// short-circuits to the default result and is not cached.
    async fn memoized<F>(&self, hex: &str, op: MatchOp, variant: Variant, compute: F) -> MatchResult
    where
        F: FnOnce(&str, Oklch) -> MatchResult,
    {
        let Some(rgb) = hex_to_rgb(hex) else {
            tracing::debug!(hex, "Unparseable color, using default match");
            return MatchResult::default();
        };
        let key = MatchKey {
            hex: rgb.to_hex(),
            op,
            variant,
        };

        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!(hex = %key.hex, ?op, %variant, result = %hit, "Match cache hit");
            return hit;
        }

        let result = compute(&key.hex, Oklch::from(rgb));
        tracing::debug!(hex = %key.hex, ?op, %variant, result = %result, "Computed match");
        self.cache.insert(key, result.clone()).await;
        result
    }
}
