use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kaylari_core::auth::verify_token;

use crate::error::ApiError;
use crate::state::AppState;

/// Require a valid admin bearer token. Verified claims are stored in the
/// request extensions for handlers that want them.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized)?;

    let claims = verify_token(&state.config().jwt_secret, bearer.token())?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
