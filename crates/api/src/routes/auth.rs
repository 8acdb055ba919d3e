use std::time::Duration;

use axum::{extract::State, routing::get, routing::post, Extension, Json, Router};
use axum_extra::extract::WithRejection;
use kaylari_core::auth::{issue_token, verify_password, AdminClaims};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Public login route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/auth/login", post(login))
}

/// Routes that require an admin session.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/v1/auth/session", get(session))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

async fn login(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> ApiResult<Json<LoginResponse>> {
    let hash = state.config().admin_password_hash.clone();
    // Argon2 is deliberately slow; keep it off the async workers.
    tokio::task::spawn_blocking(move || verify_password(&req.password, &hash))
        .await
        .map_err(|e| ApiError::Internal(format!("password check failed: {e}")))?
        .inspect_err(|_| tracing::warn!("Rejected admin login"))?;

    let ttl = state.config().session_ttl_secs;
    let token = issue_token(&state.config().jwt_secret, Duration::from_secs(ttl))?;
    tracing::info!("Admin session started");

    Ok(Json(LoginResponse {
        token,
        expires_in: ttl,
    }))
}

/// Echo the caller's session, so a client can check a stored token is still good.
async fn session(Extension(claims): Extension<AdminClaims>) -> Json<AdminClaims> {
    Json(claims)
}
