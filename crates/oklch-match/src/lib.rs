#![allow(clippy::excessive_precision)]

//! oklch-match: perceptual matching of brand colors to named palettes
//!
//! Given any sRGB color, this library answers two questions against a
//! catalog of named 12-shade scales (Radix-style):
//!
//! - which palette family does this color belong to?
//! - which exact shade is closest, once the color has been pushed towards a
//!   brand mood's chroma and lightness?
//!
//! # Quick Start
//!
//! ```
//! use oklch_match::catalog::{GrayPairTable, Palette, PaletteCatalog, ShadeScale, Variant};
//! use oklch_match::color::hex_to_oklch;
//! use oklch_match::matcher::find_closest_palette;
//! use oklch_match::mood::{transform_color_by_mood, MoodProfile};
//!
//! let teal = Palette::new(
//!     "teal",
//!     ShadeScale::from_hex(&["#fafefd", "#f3fbf9", "#e0f8f3", "#ccf3ea", "#b8eae0"]),
//!     ShadeScale::default(),
//! );
//! let catalog = PaletteCatalog::new(vec![teal], GrayPairTable::default()).unwrap();
//!
//! let target = hex_to_oklch("#12a594").unwrap();
//! assert_eq!(find_closest_palette(&catalog, target, Variant::Light), "teal");
//!
//! let caregiver = MoodProfile::Caregiver.target();
//! let result = transform_color_by_mood(&catalog, "#12a594", caregiver.chroma, caregiver.lightness);
//! assert_eq!(result.palette_name, "teal");
//! ```
//!
//! # Modules
//!
//! - [`color`]: hex parsing and the sRGB → OKLCH pipeline
//! - [`catalog`]: palettes, shade scales, light/dark variants and gray pairs
//! - [`matcher`]: the weighted OKLCH distance and the nearest palette/shade searches
//! - [`mood`]: brand archetypes and the mood transform
//! - [`theme`]: accent plus paired neutral, ready for a UI
//!
//! # Color Science
//!
//! ## Why OKLCH
//!
//! Palette scales are designed along perceived lightness: step 1 is an app
//! background, step 9 the solid brand color, step 12 high-contrast text.
//! Comparing colors in sRGB would put equal weight on channels the eye
//! treats very differently, so a saturated blue and a dull gray of very
//! different brightness could look "close". OKLCH (Björn Ottosson, 2020)
//! is the polar form of Oklab, a space where Euclidean distance tracks
//! perceived difference. Its three axes map directly onto what a mood
//! changes:
//!
//! | Axis | Meaning | Mood effect |
//! |------|---------|-------------|
//! | L | Perceived lightness, 0..1 | replaced by the mood's lightness |
//! | C | Chroma, distance from gray | replaced by the mood's chroma |
//! | H | Hue angle in degrees | kept, so the brand's family survives |
//!
//! ## Pipeline
//!
//! ```text
//! "#rrggbb"
//!     |
//!     v
//! Rgb            (8-bit sRGB)
//!     |  gamma decode: v/12.92 below 0.04045, ((v+0.055)/1.055)^2.4 above
//!     v
//! LinearRgb
//!     |  sRGB → XYZ matrix (D65 white)
//!     v
//! Xyz
//!     |  XYZ → LMS, cube root, LMS' → Lab
//!     v
//! Oklab
//!     |  C = sqrt(a² + b²), H = atan2(b, a) in [0, 360)
//!     v
//! Oklch
//! ```
//!
//! Everything is `f64` and nothing is rounded along the way; rounding to
//! three decimals only happens when an [`Oklch`](color::Oklch) is displayed.
//!
//! ## Distance
//!
//! ```text
//! d = sqrt(dL² · 1.0 + dC² · 0.5 + (dH / 360 · 2π)² · 0.3)
//! ```
//!
//! with `dH` the shorter way around the hue circle. Lightness weighs most
//! because it decides which step of a scale fits; hue weighs least because
//! neighbouring families (iris, indigo, violet) sit only a few degrees
//! apart and chroma separates them better.
//!
//! When scoring whole palettes for a target with `L > 0.9` or `L < 0.1`,
//! the lightness term would dominate every comparison and all near-whites
//! would tie. Those targets are scored with
//! `0.8 · |chroma vector difference| + 0.2 · |dL|` instead. See
//! [`matcher::extreme_lightness_distance`].
//!
//! # Determinism
//!
//! All operations are synchronous and pure. A [`PaletteCatalog`] is built
//! once and never mutated; its palette order is the tie-breaker for equal
//! distances, so identical inputs always give identical results.
//!
//! [`PaletteCatalog`]: catalog::PaletteCatalog

pub mod catalog;
pub mod color;
pub mod matcher;
pub mod mood;
pub mod theme;


pub use catalog::{Palette, PaletteCatalog, Variant};
pub use color::{Oklch, Rgb};
pub use matcher::MatchResult;
pub use mood::{MoodProfile, MoodTarget};
pub use theme::Theme;
