pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::state::AppState;
use crate::surface::handlers as surface;

/// Request body cap. Sized to the model's ~1M-token input window rather than axum's 2 MB default.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Report page
        .route("/", get(surface::handle_page))
        .route("/submit", post(surface::handle_submit))
        // JSON API
        .route("/api/v1/surface", get(surface::handle_surface))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
