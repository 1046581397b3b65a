use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use oklch_match::theme::Theme;
use oklch_match::MoodTarget;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

use super::params::resolve_variant;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::MatchService;

/// Query parameters for /api/theme
#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub hex: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
}

/// Accent and neutral scales for one brand color
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub variant: String,
    pub accent: String,
    pub accent_shade: u8,
    pub accent_hex: String,
    pub gray: String,
    #[schema(value_type = Object)]
    pub accent_scale: BTreeMap<u8, String>,
    #[schema(value_type = Object)]
    pub gray_scale: BTreeMap<u8, String>,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            variant: theme.variant.to_string(),
            accent: theme.accent.palette_name,
            accent_shade: theme.accent.shade,
            accent_hex: theme.accent_hex,
            gray: theme.gray,
            accent_scale: theme.accent_scale,
            gray_scale: theme.gray_scale,
        }
    }
}

/// Resolve a theme for a brand color
///
/// Without `mood` the accent is the closest palette at shade 9. With a mood
/// the accent is the mood transform of the color.
#[utoipa::path(
    get,
    path = "/api/theme",
    responses(
        (status = 200, description = "Resolved theme", body = ThemeResponse),
        (status = 400, description = "Invalid variant"),
    ),
    params(
        ("hex" = String, Query, description = "Color as #rrggbb or rrggbb"),
        ("mood" = Option<String>, Query, description = "Archetype name, e.g. sage"),
        ("variant" = Option<String>, Query, description = "light or dark (default from config)"),
    ),
    tag = "Theme"
)]
pub async fn handle_theme(
    State(service): State<Arc<MatchService>>,
    State(config): State<Arc<AppConfig>>,
    query: Result<Query<ThemeQuery>, QueryRejection>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let Query(query) = query?;
    let variant = resolve_variant(query.variant.as_deref(), config.default_variant)?;
    let mood = query.mood.as_deref().map(MoodTarget::for_name);

    let theme = service.resolve_theme(&query.hex, mood, variant).await;
    tracing::debug!(
        hex = %query.hex,
        accent = %theme.accent,
        gray = %theme.gray,
        "Theme resolved"
    );

    Ok(Json(theme.into()))
}
