pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Interactive form
        .route("/", get(handlers::handle_form))
        .route("/screen", post(handlers::handle_screen_page))
        // Screening API
        .route("/api/v1/screen", post(handlers::handle_screen))
        .route("/api/v1/screen/export", post(handlers::handle_export))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
