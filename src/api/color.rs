use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use oklch_match::color::{hex_to_rgb, Oklch};
use oklch_match::{MatchResult, Variant};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::params::{resolve_shade, resolve_variant};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::MatchService;

/// Query parameters for /api/oklch
#[derive(Debug, Deserialize)]
pub struct OklchQuery {
    pub hex: String,
}

/// Query parameters for /api/match and /api/match/shade
#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub hex: String,
    #[serde(default)]
    pub variant: Option<String>,
    /// Shade to report for the palette match (default 9)
    #[serde(default)]
    pub shade: Option<u8>,
}

/// 8-bit sRGB channels
#[derive(Debug, Serialize, ToSchema)]
pub struct RgbValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// OKLCH coordinates, full precision
#[derive(Debug, Serialize, ToSchema)]
pub struct OklchValue {
    /// Lightness, 0 to 1
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue in degrees, 0 to 360
    pub h: f64,
}

impl From<Oklch> for OklchValue {
    fn from(oklch: Oklch) -> Self {
        Self {
            l: oklch.l,
            c: oklch.c,
            h: oklch.h,
        }
    }
}

/// Response from /api/oklch
#[derive(Debug, Serialize, ToSchema)]
pub struct OklchResponse {
    /// Normalized `#rrggbb`
    pub hex: String,
    pub rgb: RgbValue,
    pub oklch: OklchValue,
    /// CSS form, three decimals
    pub css: String,
}

/// A resolved palette and shade, with what a UI needs to show it
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub palette_name: String,
    pub shade: u8,
    /// Display hex of the resolved shade
    pub hex: String,
    /// Neutral family paired with the palette
    pub gray: String,
    pub variant: String,
}

impl MatchResponse {
    pub fn new(service: &MatchService, result: MatchResult, variant: Variant) -> Self {
        let hex = service.display_hex(&result, variant).to_string();
        let gray = service
            .catalog()
            .get_gray_pair(&result.palette_name)
            .to_string();
        Self {
            palette_name: result.palette_name,
            shade: result.shade,
            hex,
            gray,
            variant: variant.to_string(),
        }
    }
}

/// Convert a hex color to OKLCH
#[utoipa::path(
    get,
    path = "/api/oklch",
    responses(
        (status = 200, description = "Color converted", body = OklchResponse),
        (status = 400, description = "Invalid or missing hex color"),
    ),
    params(
        ("hex" = String, Query, description = "Color as #rrggbb or rrggbb"),
    ),
    tag = "Color"
)]
pub async fn handle_oklch(
    query: Result<Query<OklchQuery>, QueryRejection>,
) -> Result<Json<OklchResponse>, ApiError> {
    let Query(query) = query?;
    let rgb = hex_to_rgb(&query.hex).ok_or_else(|| ApiError::InvalidColor(query.hex.clone()))?;
    let oklch = Oklch::from(rgb);

    Ok(Json(OklchResponse {
        hex: rgb.to_hex(),
        rgb: RgbValue {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
        css: oklch.to_string(),
        oklch: oklch.into(),
    }))
}

/// Find the closest palette for a color
///
/// Palettes are scored by their average distance over a sample of shades.
/// An unparseable color yields the default match (indigo 9).
#[utoipa::path(
    get,
    path = "/api/match",
    responses(
        (status = 200, description = "Closest palette", body = MatchResponse),
        (status = 400, description = "Invalid variant or shade"),
    ),
    params(
        ("hex" = String, Query, description = "Color as #rrggbb or rrggbb"),
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
        ("shade" = Option<u8>, Query, description = "Shade to report, 1-12 (default 9)"),
    ),
    tag = "Color"
)]
pub async fn handle_match(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Json<MatchResponse>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let shade = resolve_shade(query.shade)?;

    let result = service.match_palette(&query.hex, variant, shade).await;
    tracing::debug!(hex = %query.hex, %variant, result = %result, "Palette match");

    Ok(Json(MatchResponse::new(&service, result, variant)))
}

/// Find the single closest shade for a color
#[utoipa::path(
    get,
    path = "/api/match/shade",
    responses(
        (status = 200, description = "Closest shade", body = MatchResponse),
        (status = 400, description = "Invalid variant"),
    ),
    params(
        ("hex" = String, Query, description = "Color as #rrggbb or rrggbb"),
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
    ),
    tag = "Color"
)]
pub async fn handle_match_shade(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Json<MatchResponse>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let result = service.match_shade(&query.hex, variant).await;
    Ok(Json(MatchResponse::new(&service, result, variant)))
}

/// Response from /api/match/quick
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuickPickResponse {
    pub palette_name: String,
    /// Representative color of the palette
    pub color: String,
    pub variant: String,
}

/// Pick a palette by plain RGB distance
///
/// A cheap preview for live color pickers; use /api/match for the
/// perceptual answer.
#[utoipa::path(
    get,
    path = "/api/match/quick",
    responses(
        (status = 200, description = "Nearest palette in RGB", body = QuickPickResponse),
        (status = 400, description = "Invalid variant"),
    ),
    params(
        ("hex" = String, Query, description = "Color as #rrggbb or rrggbb"),
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
    ),
    tag = "Color"
)]
pub async fn handle_quick_pick(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Json<QuickPickResponse>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let palette_name = service.quick_pick(&query.hex, variant);

    Ok(Json(QuickPickResponse {
        palette_name: palette_name.to_string(),
        color: service.catalog().palette_color(palette_name, variant).to_string(),
        variant: variant.to_string(),
    }))
}
