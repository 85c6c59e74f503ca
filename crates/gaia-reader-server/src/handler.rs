use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use gaia_reader_core::DiskReader;

/// Shared handler state: the resolver, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub reader: Arc<DiskReader>,
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "gaia-reader-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Resolution handler for `HEAD /read/:bucket/*path`.
///
/// Maps the resolver's outcome onto the wire: a present object answers 200
/// with its effective content type, an absent one 404, a failed primary
/// probe 500. No response carries a body; object bytes are never served.
pub async fn read_handler(
    State(state): State<AppState>,
    Path((bucket, path)): Path<(String, String)>,
) -> Response {
    match state.reader.resolve(&bucket, &path).await {
        Ok(resolution) => match resolution.content_type() {
            Some(content_type) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type.to_string())],
            )
                .into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        },
        Err(err) => {
            tracing::error!(%bucket, %path, %err, "primary probe failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
