pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::document::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route(
            "/api/v1/documents/assemble",
            post(handlers::handle_assemble),
        )
        .route(
            "/api/v1/documents/assemble/batch",
            post(handlers::handle_assemble_batch),
        )
        .route("/api/v1/documents/preview", post(handlers::handle_preview))
        .with_state(state)
}
