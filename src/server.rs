use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::constants::{DEFAULT_LANGUAGE, MAX_TEXT_LENGTH};
use crate::engine::cache::engine_for;
use crate::error::{NormalizationError, Result};
use crate::logging::{access_log_middleware, request_id_middleware};
use crate::models::{HealthResponse, LanguagesResponse, NormalizeRequest, NormalizeResponse};
use crate::recognizers::Category;
use crate::resources;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub request_timeout: Duration,
}

// HTTP Handlers

/// Normalize text into spoken form plus SSML.
///
/// Bare digit sequences normalize as currency whenever `currency` is in
/// the active category set, since currency outranks cardinal; drop
/// `currency` from the set to read plain numbers as cardinals.
async fn normalize_text(Json(req): Json<NormalizeRequest>) -> Result<Json<NormalizeResponse>> {
    tracing::debug!(
        "normalize request - text_len={}, categories={}, language='{}'",
        req.text.len(),
        req.categories.len(),
        req.language
    );

    if req.text.trim().is_empty() {
        return Err(NormalizationError::EmptyText);
    }

    let char_count = req.text.chars().count();
    if char_count > MAX_TEXT_LENGTH {
        return Err(NormalizationError::TextTooLong(char_count));
    }

    let engine = engine_for(&req.language)?;
    let output = engine.normalize(&req.text, &req.categories);

    Ok(Json(NormalizeResponse {
        success: true,
        normalized_text: output.normalized_text,
        ssml: output.ssml,
        dfa_info: output.diagnostics,
    }))
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        language: DEFAULT_LANGUAGE.to_string(),
        available_categories: crate::engine::PRIORITY
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
    })
}

/// Languages a resource bundle is available for
async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: resources::available_languages(),
    })
}

/// Create and configure the HTTP server router
pub fn create_router(state: AppState) -> Router<()> {
    // Allow all origins so browser frontends can call the API directly
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/normalize", post(normalize_text))
        .route("/api/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .layer(middleware::from_fn(access_log_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(cors)
}

/// Parse category names for the CLI path, rejecting unknown names
pub fn parse_categories(names: &[String]) -> Result<Vec<Category>> {
    names
        .iter()
        .map(|name| {
            serde_json::from_value(serde_json::Value::String(name.clone())).map_err(|_| {
                NormalizationError::InvalidRequest(format!("unknown category '{}'", name))
            })
        })
        .collect()
}
