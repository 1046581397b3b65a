//! Nearest palette / shade search in OKLCH
//!
//! Two searches share one distance metric:
//!
//! - [`find_closest_palette`] scores each palette by the mean distance to a
//!   fixed sample of its shades, and answers "which family is this color?"
//!   for the color picker.
//! - [`find_closest_shade`] checks every shade of every palette and answers
//!   "which exact step is closest?" for mood transforms.
//!
//! Both only consider base palettes, skip shades that are missing or fail to
//! parse, break ties in favour of the earlier palette in catalog order, and
//! fall back to [`MatchResult::default`] (`indigo` / `9`) when nothing
//! qualifies.

mod distance;
mod rgb;
mod search;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use distance::{
    extreme_lightness_distance, is_extreme_lightness, oklch_distance, CHROMA_WEIGHT,
    EXTREME_HUE_CHROMA_WEIGHT, EXTREME_LIGHTNESS_WEIGHT, HUE_WEIGHT, LIGHTNESS_WEIGHT,
};
pub use rgb::{find_closest_palette_by_rgb, rgb_distance};
pub use search::{closest_match, find_closest_palette, find_closest_shade, SAMPLE_SHADES};

use crate::catalog::DEFAULT_SHADE;

/// Palette returned when no candidate can be scored.
pub const DEFAULT_PALETTE: &str = "indigo";

/// A resolved palette and shade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Name of the winning palette
    pub palette_name: String,
    /// Shade key, 1..=12
    pub shade: u8,
}

impl MatchResult {
    pub fn new(palette_name: impl Into<String>, shade: u8) -> Self {
        Self {
            palette_name: palette_name.into(),
            shade,
        }
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE, DEFAULT_SHADE)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.palette_name, self.shade)
    }
}
