pub mod health;

use axum::{routing::get, Router};

use crate::export::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Export API
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route(
            "/api/v1/resumes/:id/export",
            get(handlers::handle_export),
        )
        .route(
            "/api/v1/resumes/:id/preview",
            get(handlers::handle_preview),
        )
        .route(
            "/api/v1/resumes/:id/render-model",
            get(handlers::handle_render_model),
        )
        .with_state(state)
}
