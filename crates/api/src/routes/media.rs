use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use kaylari_core::content::model::{GalleryImage, GalleryVideo};
use kaylari_core::{ContentId, NewImage, NewVideo};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Gallery image and video management (admin only).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/images", post(create_image))
        .route("/v1/images/{id}", delete(delete_image))
        .route("/v1/videos", post(create_video))
        .route("/v1/videos/{id}", delete(delete_video))
}

async fn create_image(
    State(state): State<AppState>,
    WithRejection(Json(fields), _): WithRejection<Json<NewImage>, ApiError>,
) -> ApiResult<(StatusCode, Json<GalleryImage>)> {
    let image = state.mutate(move |store| store.add_image(fields)).await?;
    tracing::info!(id = %image.id, "Image added");
    Ok((StatusCode::CREATED, Json(image)))
}

/// Deleting an unknown id succeeds; the result is the same either way.
async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = ContentId::from(id);
    let target = id.clone();
    let removed = state
        .mutate(move |store| store.delete_image(&target))
        .await?;
    tracing::info!(%id, removed, "Image delete");
    Ok(StatusCode::NO_CONTENT)
}

async fn create_video(
    State(state): State<AppState>,
    WithRejection(Json(fields), _): WithRejection<Json<NewVideo>, ApiError>,
) -> ApiResult<(StatusCode, Json<GalleryVideo>)> {
    let video = state.mutate(move |store| store.add_video(fields)).await?;
    tracing::info!(id = %video.id, "Video added");
    Ok((StatusCode::CREATED, Json(video)))
}

async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = ContentId::from(id);
    let target = id.clone();
    let removed = state
        .mutate(move |store| store.delete_video(&target))
        .await?;
    tracing::info!(%id, removed, "Video delete");
    Ok(StatusCode::NO_CONTENT)
}
