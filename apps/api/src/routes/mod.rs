pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-content",
            post(handlers::handle_generate_content),
        )
        .route(
            "/api/content-request/:id",
            get(handlers::handle_get_content_request),
        )
        .with_state(state)
}
