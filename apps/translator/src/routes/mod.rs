pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::translation::handlers;
use crate::ui::page;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser form
        .route("/", get(page::handle_index))
        .route("/mode", post(page::handle_mode))
        .route("/translate", post(page::handle_translate))
        // JSON API
        .route("/api/v1/options", get(handlers::handle_options))
        .route("/api/v1/prompt", post(handlers::handle_prompt))
        .route("/api/v1/translate", post(handlers::handle_translate))
        .with_state(state)
}
