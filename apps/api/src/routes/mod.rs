pub mod health;
pub mod pages;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::check::handlers;
use crate::state::AppState;

/// The check endpoint accepts POST only. Other methods get an explicit 405
/// with a plain-text body before any body processing happens.
async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/script.js", get(pages::script))
        .route("/health", get(health::health_handler))
        .route(
            "/check-teammates",
            post(handlers::handle_check).fallback(method_not_allowed),
        )
        .with_state(state)
}
