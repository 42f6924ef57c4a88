//! HTTP surface: the pre-rendered page, a health check, and the front-end
//! bundle served from disk.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    response::Html,
    routing::get,
    Router,
};
use marketplace_core::link::linked_id;
use marketplace_http::{load_seed, SharedCatalog};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::AppError;
use crate::render::render_document;

/// Shared, read-only server state.
pub struct AppState {
    pub api: SharedCatalog,
    /// API root handed to the browser in the seed.
    pub api_base: String,
    /// Document the page is rendered into.
    pub template: String,
}

pub fn build_router(state: Arc<AppState>, dist_dir: &Path) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(dist_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// `GET /?id=..`, the pre-rendered page.
pub async fn page(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, AppError> {
    let linked = linked_id(query.as_deref().unwrap_or_default());
    debug!(linked = linked.as_deref(), "Rendering page");
    let seed = load_seed(state.api.as_ref(), &state.api_base, linked.as_deref()).await;
    Ok(Html(render_document(&state.template, &seed)?))
}

pub async fn healthz() -> &'static str {
    "ok"
}
