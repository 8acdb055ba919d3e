use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use kaylari_core::content::model::{GalleryImage, SiteContent};
use kaylari_core::content::query::{self, ContentStats, ALL_CATEGORIES};
use serde::Deserialize;

use crate::state::AppState;

/// Public read-only routes used by the site's sections.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/content", get(get_content))
        .route("/v1/content/stats", get(get_stats))
        .route("/v1/gallery/categories", get(get_categories))
        .route("/v1/gallery/images", get(get_gallery_images))
}

async fn get_content(State(state): State<AppState>) -> Json<SiteContent> {
    Json(state.read().await.snapshot())
}

async fn get_stats(State(state): State<AppState>) -> Json<ContentStats> {
    Json(ContentStats::from(state.read().await.content()))
}

async fn get_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(query::categories(state.read().await.content()))
}

#[derive(Debug, Deserialize)]
struct GalleryQuery {
    category: Option<String>,
}

async fn get_gallery_images(
    State(state): State<AppState>,
    Query(params): Query<GalleryQuery>,
) -> Json<Vec<GalleryImage>> {
    let filter = params.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let store = state.read().await;
    let images = query::images_in_category(store.content(), filter)
        .into_iter()
        .cloned()
        .collect();
    Json(images)
}
