//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{extract::FromRef, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::assets::AssetLoader;
use crate::models::{load_catalog, AppConfig};
use crate::services::MatchService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service: Arc<MatchService>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<MatchService> {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

/// Create application state from an asset loader.
///
/// Fails when the catalog cannot be read or does not validate; a broken
/// config only logs a warning and falls back to defaults.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    let catalog = load_catalog(&asset_loader)
        .map_err(|e| anyhow::anyhow!("Failed to load palette catalog: {e}"))?;
    let service = Arc::new(MatchService::from_config(Arc::new(catalog), &config.cache));

    Ok(AppState { config, service })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Color conversion and matching
        .route("/api/oklch", get(api::handle_oklch))
        .route("/api/match", get(api::handle_match))
        .route("/api/match/shade", get(api::handle_match_shade))
        .route("/api/match/quick", get(api::handle_quick_pick))
        // Mood transforms
        .route("/api/moods", get(api::handle_moods))
        .route("/api/moods/preview", get(api::handle_mood_preview))
        .route("/api/mood", get(api::handle_mood))
        .route("/api/theme", get(api::handle_theme))
        // Catalog
        .route("/api/palettes", get(api::handle_palettes))
        .route("/api/palettes/:name", get(api::handle_palette))
        .route("/api/gray-pair/:name", get(api::handle_gray_pair))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Browser color pickers call the API from other origins
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
