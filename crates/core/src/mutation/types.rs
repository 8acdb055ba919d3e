//! Inputs accepted by the content store's mutators.
//! Nothing here is validated; empty strings pass through as given.
use serde::{Deserialize, Serialize};

use crate::content::model::Collection;

/// Fields of a new gallery image; the store assigns `id` and `createdAt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImage {
    pub src: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields of a new gallery video. A missing or empty `thumbnail` becomes `src`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewVideo {
    /// The thumbnail to store: the given one, or `src` when none was given.
    pub fn resolved_thumbnail(&self) -> String {
        match self.thumbnail.as_deref() {
            Some(thumbnail) if !thumbnail.is_empty() => thumbnail.to_string(),
            _ => self.src.clone(),
        }
    }
}

/// Fields of a new collection; the store assigns `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollection {
    pub name: String,
    pub description: String,
    pub image: String,
    pub item_count: u32,
}

/// Partial update of a collection. `None` leaves the field untouched.
/// The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,
}

impl CollectionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.item_count.is_none()
    }

    /// Merge the present fields into `collection`.
    pub fn apply_to(self, collection: &mut Collection) {
        if let Some(name) = self.name {
            collection.name = name;
        }
        if let Some(description) = self.description {
            collection.description = description;
        }
        if let Some(image) = self.image {
            collection.image = image;
        }
        if let Some(item_count) = self.item_count {
            collection.item_count = item_count;
        }
    }
}
