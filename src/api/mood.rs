use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use oklch_match::mood::MoodPreview;
use oklch_match::MoodProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::color::MatchResponse;
use super::params::{resolve_mood_target, resolve_variant};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::MatchService;

/// Query parameters for /api/mood
#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub hex: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub chroma: Option<f64>,
    #[serde(default)]
    pub lightness: Option<f64>,
    #[serde(default)]
    pub variant: Option<String>,
}

/// Query parameters for /api/moods/preview
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub hex: String,
    #[serde(default)]
    pub variant: Option<String>,
}

/// A brand archetype and the chroma/lightness it targets
#[derive(Debug, Serialize, ToSchema)]
pub struct MoodInfo {
    pub mood: String,
    pub chroma: f64,
    pub lightness: f64,
}

impl From<MoodProfile> for MoodInfo {
    fn from(mood: MoodProfile) -> Self {
        let target = mood.target();
        Self {
            mood: mood.name().to_string(),
            chroma: target.chroma,
            lightness: target.lightness,
        }
    }
}

/// Response from /api/mood
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodResponse {
    /// The mood name as requested, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Chroma actually applied
    pub chroma: f64,
    /// Lightness actually applied
    pub lightness: f64,
    #[serde(flatten)]
    pub result: MatchResponse,
}

/// One swatch of the archetype grid
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodPreviewResponse {
    pub mood: String,
    pub chroma: f64,
    pub lightness: f64,
    pub palette_name: String,
    pub shade: u8,
    pub hex: String,
}

impl From<MoodPreview> for MoodPreviewResponse {
    fn from(preview: MoodPreview) -> Self {
        Self {
            mood: preview.mood.name().to_string(),
            chroma: preview.target.chroma,
            lightness: preview.target.lightness,
            palette_name: preview.result.palette_name,
            shade: preview.result.shade,
            hex: preview.hex,
        }
    }
}

/// List the brand archetypes
#[utoipa::path(
    get,
    path = "/api/moods",
    responses(
        (status = 200, description = "All archetypes in presentation order", body = [MoodInfo]),
    ),
    tag = "Mood"
)]
pub async fn handle_moods() -> Json<Vec<MoodInfo>> {
    Json(MoodProfile::ALL.into_iter().map(MoodInfo::from).collect())
}

/// Transform a color by mood
///
/// The hue of the input is kept; chroma and lightness come from the named
/// mood, and explicit `chroma`/`lightness` values override it. Unknown mood
/// names use a neutral target. The result is the closest catalog shade.
#[utoipa::path(
    get,
    path = "/api/mood",
    responses(
        (status = 200, description = "Transformed color", body = MoodResponse),
        (status = 400, description = "Invalid variant or non-finite chroma/lightness"),
    ),
    params(
        ("hex" = String, Query, description = "Color as #rrggbb or rrggbb"),
        ("mood" = Option<String>, Query, description = "Archetype name, e.g. caregiver"),
        ("chroma" = Option<f64>, Query, description = "Target chroma, overrides the mood"),
        ("lightness" = Option<f64>, Query, description = "Target lightness, overrides the mood"),
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
    ),
    tag = "Mood"
)]
pub async fn handle_mood(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<MoodQuery>, QueryRejection>,
) -> Result<Json<MoodResponse>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let target = resolve_mood_target(query.mood.as_deref(), query.chroma, query.lightness)?;

    let result = service.transform(&query.hex, target, variant).await;
    tracing::debug!(
        hex = %query.hex,
        mood = ?query.mood,
        chroma = target.chroma,
        lightness = target.lightness,
        result = %result,
        "Mood transform"
    );

    Ok(Json(MoodResponse {
        mood: query.mood,
        chroma: target.chroma,
        lightness: target.lightness,
        result: MatchResponse::new(&service, result, variant),
    }))
}

/// Resolve every archetype for one color
#[utoipa::path(
    get,
    path = "/api/moods/preview",
    responses(
        (status = 200, description = "One swatch per archetype", body = [MoodPreviewResponse]),
        (status = 400, description = "Invalid variant"),
    ),
    params(
        ("hex" = String, Query, description = "Color as #rrggbb or rrggbb"),
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
    ),
    tag = "Mood"
)]
pub async fn handle_mood_preview(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Json<Vec<MoodPreviewResponse>>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let previews = service.preview_moods(&query.hex, variant);
    Ok(Json(previews.into_iter().map(Into::into).collect()))
}
