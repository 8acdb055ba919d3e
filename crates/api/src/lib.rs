pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;

use crate::state::AppState;

/// Build the application router with its middleware stack.
pub fn build_app(state: AppState) -> Router {
    let max_body_bytes = state.config().max_body_bytes;
    routes::build_router(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer())
}
