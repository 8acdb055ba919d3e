use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use kaylari_core::{Collection, CollectionPatch, ContentId, NewCollection};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Collection management (admin only).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/collections", post(create_collection))
        .route(
            "/v1/collections/{id}",
            patch(update_collection).delete(delete_collection),
        )
}

async fn create_collection(
    State(state): State<AppState>,
    WithRejection(Json(fields), _): WithRejection<Json<NewCollection>, ApiError>,
) -> ApiResult<(StatusCode, Json<Collection>)> {
    let collection = state
        .mutate(move |store| store.add_collection(fields))
        .await?;
    tracing::info!(id = %collection.id, name = %collection.name, "Collection added");
    Ok((StatusCode::CREATED, Json(collection)))
}

/// The store treats an unknown id as a no-op; over HTTP that is a 404 so the
/// client can tell nothing changed. A patch with no fields is a 400.
async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(patch), _): WithRejection<Json<CollectionPatch>, ApiError>,
) -> ApiResult<Json<Collection>> {
    if patch.is_empty() {
        return Err(ApiError::BadRequest("patch must set at least one field".to_string()));
    }
    let id = ContentId::from(id);
    let target = id.clone();
    let updated = state
        .mutate(move |store| store.update_collection(&target, patch))
        .await?;
    updated
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("collection {id}")))
}

async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = ContentId::from(id);
    let target = id.clone();
    let removed = state
        .mutate(move |store| store.delete_collection(&target))
        .await?;
    tracing::info!(%id, removed, "Collection delete");
    Ok(StatusCode::NO_CONTENT)
}
