use axum::{extract::State, routing::get, Json, Router};
use kaylari_core::content::query::ContentStats;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check: storage readability, loaded content and listener count.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.check_storage().await?;

    let store = state.read().await;
    Ok(Json(json!({
        "status": "ok",
        "storageKey": store.key(),
        "content": ContentStats::from(store.content()),
        "subscribers": state.event_bus().subscriber_count(),
    })))
}

/// Lightweight ping that does not touch the store.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
