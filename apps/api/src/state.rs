use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::ModelProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Model provider behind the trait seam so handlers and the pipeline can
    /// be tested against deterministic stubs.
    pub llm: Arc<dyn ModelProvider>,
    pub config: Config,
}
