use crate::config::Config;
use crate::detector::detect_doc_type;
use crate::document::process_optional_document;
use crate::errors::AppError;
use crate::models::*;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies only ever carry one short document string.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
}

/// Reject documents longer than the configured maximum before processing.
fn ensure_length(document: Option<&str>, config: &Config) -> Result<(), AppError> {
    if let Some(doc) = document {
        let len = doc.chars().count();
        if len > config.max_document_length {
            return Err(AppError::PayloadTooLarge(format!(
                "document has {} characters, maximum is {}",
                len, config.max_document_length
            )));
        }
    }
    Ok(())
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /api/v1/documents/validate
///
/// Classifies and validates the `document` field of the JSON body. An invalid
/// document is still a 200 response, with `is_valid = false`.
///
/// # Returns
///
/// * `Result<Json<DocumentResult>, AppError>` - The processed document or a request error.
pub async fn validate_document(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateDocumentRequest>, JsonRejection>,
) -> Result<Json<DocumentResult>, AppError> {
    let Json(request) = payload?;
    let document = request.document.as_deref();
    ensure_length(document, &state.config)?;

    let result = process_optional_document(document);
    tracing::info!(
        "Validated document via POST: type={}, valid={}",
        result.doc_type,
        result.is_valid
    );

    Ok(Json(result))
}

/// GET /api/v1/documents/validate?document=...
///
/// Same as the POST variant, for callers that can only issue GET requests.
pub async fn validate_document_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DocumentQuery>, QueryRejection>,
) -> Result<Json<DocumentResult>, AppError> {
    let Query(params) = query?;
    let document = params.document.as_deref();
    ensure_length(document, &state.config)?;

    let result = process_optional_document(document);
    tracing::info!(
        "Validated document via GET: type={}, valid={}",
        result.doc_type,
        result.is_valid
    );

    Ok(Json(result))
}

/// GET /api/v1/documents/detect?document=...
///
/// Shape-only classification, without running the checksum validators.
pub async fn detect_document(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DocumentQuery>, QueryRejection>,
) -> Result<Json<DetectResponse>, AppError> {
    let Query(params) = query?;
    ensure_length(params.document.as_deref(), &state.config)?;

    let doc_type = params
        .document
        .as_deref()
        .map(detect_doc_type)
        .unwrap_or(DocType::Unknown);
    tracing::info!("Detected document type: {}", doc_type);

    Ok(Json(DetectResponse {
        document: params.document,
        doc_type,
    }))
}

/// Build the application router with tracing, CORS and body-size middleware.
///
/// Rate limiting is layered on in `main`, since it needs the peer address
/// that only a real listener provides.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/documents/validate",
            post(validate_document).get(validate_document_query),
        )
        .route("/api/v1/documents/detect", get(detect_document))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_length() {
        let config = Config {
            max_document_length: 5,
            ..Config::default()
        };

        assert!(ensure_length(None, &config).is_ok());
        assert!(ensure_length(Some("12345"), &config).is_ok());
        // Counted in characters, not bytes
        assert!(ensure_length(Some("ççççç"), &config).is_ok());
        assert!(matches!(
            ensure_length(Some("123456"), &config),
            Err(AppError::PayloadTooLarge(_))
        ));
    }
}
