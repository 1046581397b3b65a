use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
};
use oklch_match::catalog::PaletteKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

use super::params::resolve_variant;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::MatchService;

/// Query parameters for palette listing and lookup
#[derive(Debug, Deserialize)]
pub struct VariantQuery {
    #[serde(default)]
    pub variant: Option<String>,
}

/// A matchable palette with its representative color
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteSummary {
    pub name: String,
    /// Shade 9, or the first present shade
    pub color: String,
    pub neutral: bool,
    pub gray: String,
}

/// A palette with its full scale for one variant
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteDetail {
    pub name: String,
    /// base, alpha or p3
    pub kind: String,
    pub neutral: bool,
    pub gray: String,
    pub variant: String,
    /// Shade key to hex
    #[schema(value_type = Object)]
    pub shades: BTreeMap<u8, String>,
}

/// Response from /api/gray-pair/{name}
#[derive(Debug, Serialize, ToSchema)]
pub struct GrayPairResponse {
    pub family: String,
    pub gray: String,
}

fn kind_name(kind: PaletteKind) -> &'static str {
    match kind {
        PaletteKind::Base => "base",
        PaletteKind::Alpha => "alpha",
        PaletteKind::P3 => "p3",
    }
}

/// List matchable palettes in catalog order
#[utoipa::path(
    get,
    path = "/api/palettes",
    responses(
        (status = 200, description = "Base palettes", body = [PaletteSummary]),
        (status = 400, description = "Invalid variant"),
    ),
    params(
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
    ),
    tag = "Palette"
)]
pub async fn handle_palettes(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<VariantQuery>, QueryRejection>,
) -> Result<Json<Vec<PaletteSummary>>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let catalog = service.catalog();

    let palettes = catalog
        .base_palettes()
        .map(|palette| PaletteSummary {
            name: palette.name().to_string(),
            color: catalog.palette_color(palette.name(), variant).to_string(),
            neutral: palette.is_neutral(),
            gray: catalog.get_gray_pair(palette.name()).to_string(),
        })
        .collect();

    Ok(Json(palettes))
}

/// Get one palette's full scale
#[utoipa::path(
    get,
    path = "/api/palettes/{name}",
    responses(
        (status = 200, description = "Palette scale", body = PaletteDetail),
        (status = 400, description = "Invalid variant"),
        (status = 404, description = "Unknown palette"),
    ),
    params(
        ("name" = String, Path, description = "Palette name, e.g. indigo"),
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    Path(name): Path<String>,
    query: Result<Query<VariantQuery>, QueryRejection>,
) -> Result<Json<PaletteDetail>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let catalog = service.catalog();
    let palette = catalog
        .get(&name)
        .ok_or_else(|| ApiError::PaletteNotFound(name.clone()))?;

    let shades = catalog
        .color_scale(&name, variant)
        .ok_or_else(|| ApiError::Internal(format!("No scale for palette {name}")))?;

    Ok(Json(PaletteDetail {
        name: palette.name().to_string(),
        kind: kind_name(palette.kind()).to_string(),
        neutral: palette.is_neutral(),
        gray: catalog.get_gray_pair(palette.name()).to_string(),
        variant: variant.to_string(),
        shades,
    }))
}

/// Get the neutral family paired with a color family
///
/// Unknown families pair with gray.
#[utoipa::path(
    get,
    path = "/api/gray-pair/{name}",
    responses(
        (status = 200, description = "Paired neutral", body = GrayPairResponse),
    ),
    params(
        ("name" = String, Path, description = "Color family, e.g. tomato"),
    ),
    tag = "Palette"
)]
pub async fn handle_gray_pair(
    State(service): State<Arc<MatchService>>,
    Path(name): Path<String>,
) -> Json<GrayPairResponse> {
    let gray = service.catalog().get_gray_pair(&name).to_string();
    Json(GrayPairResponse { family: name, gray })
}
