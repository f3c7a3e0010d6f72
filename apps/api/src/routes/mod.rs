pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::candidates::handlers;
use crate::extraction::handlers::handle_upload_cv;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        // Resume parsing
        .route("/upload-cv", post(handle_upload_cv))
        // Candidate records
        .route(
            "/candidates",
            get(handlers::handle_list_candidates).post(handlers::handle_create_candidate),
        )
        .route(
            "/candidates/:id",
            get(handlers::handle_get_candidate)
                .put(handlers::handle_update_candidate)
                .delete(handlers::handle_delete_candidate),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
