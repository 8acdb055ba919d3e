pub mod auth;
pub mod collections;
pub mod content;
pub mod health;
pub mod listen;
pub mod media;

use axum::{middleware::from_fn_with_state, Router};

use crate::middleware::auth::require_admin;
use crate::state::AppState;

/// Assemble the full router with all route groups.
/// Everything that mutates content sits behind the admin gate.
pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        .merge(auth::admin_routes())
        .merge(media::routes())
        .merge(collections::routes())
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(listen::routes())
        .merge(auth::routes())
        .merge(admin)
        .with_state(state)
}
