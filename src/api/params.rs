//! Query parameter validation shared by the API handlers.

use oklch_match::catalog::{DEFAULT_SHADE, SHADE_COUNT};
use oklch_match::{MoodTarget, Variant};

use crate::error::ApiError;

/// Parse an optional `variant` parameter, falling back to `default`.
pub fn resolve_variant(raw: Option<&str>, default: Variant) -> Result<Variant, ApiError> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(ApiError::InvalidParameter),
    }
}

/// Shade from an optional parameter, default 9, must lie in 1..=12.
pub fn resolve_shade(raw: Option<u8>) -> Result<u8, ApiError> {
    let shade = raw.unwrap_or(DEFAULT_SHADE);
    if (1..=SHADE_COUNT).contains(&shade) {
        Ok(shade)
    } else {
        Err(ApiError::InvalidParameter(format!(
            "shade must be between 1 and {SHADE_COUNT}, got {shade}"
        )))
    }
}

fn require_finite(name: &str, value: f64) -> Result<f64, ApiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::InvalidParameter(format!("{name} must be a finite number")))
    }
}

/// Target for a mood request.
///
/// Starts from the named mood (unknown or absent names use the neutral
/// fallback) and lets explicit `chroma`/`lightness` override either value.
pub fn resolve_mood_target(
    mood: Option<&str>,
    chroma: Option<f64>,
    lightness: Option<f64>,
) -> Result<MoodTarget, ApiError> {
    let base = mood.map_or(MoodTarget::FALLBACK, MoodTarget::for_name);
    Ok(MoodTarget::new(
        chroma
            .map(|c| require_finite("chroma", c))
            .transpose()?
            .unwrap_or(base.chroma),
        lightness
            .map(|l| require_finite("lightness", l))
            .transpose()?
            .unwrap_or(base.lightness),
    ))
}
