//! HTTP layer: routes, request/response schemas, and error mapping.
//!
//! The router exposes the translation endpoint plus the root and health
//! probes the frontend polls. CORS is restricted to the configured frontend
//! origins; request tracing comes from `tower-http`.

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::Config;
use crate::engine::{self, TranslateError};
use crate::i18n::Language;

/// Body of `POST /translate-page`.
#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub html_content: String,
    pub target_lang: String,
}

/// Success response of `POST /translate-page`.
///
/// Field names and the display-name spellings are a compatibility contract
/// with existing frontend callers.
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub translated_html: String,
    pub target_language: String,
    pub target_language_code: String,
    pub translation_count: usize,
    pub status: String,
    pub message: String,
}

/// Error body returned for both client and server failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = match &self {
            TranslateError::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
            TranslateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Build the application router.
///
/// Fails only if a configured CORS origin is not a valid header value.
pub fn router(config: &Config) -> Result<Router> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/translate-page", post(translate_page))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// `POST /translate-page`: substitute known phrases for the target language.
async fn translate_page(
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    // Validation happens before any processing; unsupported codes never
    // reach the substitution pass.
    let lang = Language::from_code(&request.target_lang)?;

    let result = engine::substitute(&request.html_content, lang);
    info!(
        target_lang = lang.code(),
        substitutions = result.count,
        "translated page"
    );

    Ok(Json(TranslationResponse {
        translated_html: result.html,
        target_language: lang.name().to_string(),
        target_language_code: lang.code().to_string(),
        translation_count: result.count,
        status: "success".to_string(),
        message: format!("Successfully translated to {}", lang.name()),
    }))
}

/// `GET /`: liveness message for manual checks.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Translation API is running",
        "status": "ok"
    }))
}

/// `GET /health`: health probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "translation-api"
    }))
}
