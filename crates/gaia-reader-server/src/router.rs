use axum::routing::{get, head};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all reader endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/read/:bucket/*path", head(handler::read_handler))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
