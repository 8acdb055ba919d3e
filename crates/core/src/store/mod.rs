//! The content store: single source of truth for site content.
//!
//! The store owns the current [`SiteContent`] and writes the whole aggregate
//! back to storage after every mutation. It is a plain single-writer value;
//! callers that share it across tasks wrap it in their own lock.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::content::id::{ContentId, IdGenerator, UuidIdGenerator};
use crate::content::model::{Collection, GalleryImage, GalleryVideo, SiteContent};
use crate::content::seed::default_content;
use crate::events::bus::EventBus;
use crate::events::types::{ChangeAction, ChangeEvent, ContentEvent, ContentKind};
use crate::mutation::types::{CollectionPatch, NewCollection, NewImage, NewVideo};
use crate::storage::{validate_key, KeyValueStorage, StorageError};

/// Storage key the aggregate lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "rang-site-content";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize site content: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct ContentStore {
    content: SiteContent,
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    ids: Arc<dyn IdGenerator>,
    events: EventBus,
}

impl fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStore")
            .field("key", &self.key)
            .field("images", &self.content.images.len())
            .field("videos", &self.content.videos.len())
            .field("collections", &self.content.collections.len())
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Load the saved aggregate under `key`, or fall back to the seed content
    /// when nothing usable is stored. Only an invalid key is an error.
    pub fn open(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        validate_key(&key)?;
        let content = load_or_seed(storage.as_ref(), &key);
        Ok(Self {
            content,
            storage,
            key,
            ids: Arc::new(UuidIdGenerator),
            events: EventBus::default(),
        })
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current aggregate.
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Owned copy of the current aggregate.
    pub fn snapshot(&self) -> SiteContent {
        self.content.clone()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.events.subscribe()
    }

    /// Create an image and put it first in the gallery.
    pub fn add_image(&mut self, fields: NewImage) -> Result<GalleryImage, StoreError> {
        let image = GalleryImage {
            id: self.ids.next_id(),
            src: fields.src,
            title: fields.title,
            category: fields.category,
            description: fields.description,
            created_at: Utc::now(),
        };
        debug!(id = %image.id, category = %image.category, "adding image");
        self.content.images.insert(0, image.clone());
        self.commit(Some((ContentKind::Image, ChangeAction::Created, image.id.clone())))?;
        Ok(image)
    }

    /// Create a video and put it first in the list.
    pub fn add_video(&mut self, fields: NewVideo) -> Result<GalleryVideo, StoreError> {
        let thumbnail = fields.resolved_thumbnail();
        let video = GalleryVideo {
            id: self.ids.next_id(),
            src: fields.src,
            thumbnail,
            title: fields.title,
            category: fields.category,
            description: fields.description,
            created_at: Utc::now(),
        };
        debug!(id = %video.id, category = %video.category, "adding video");
        self.content.videos.insert(0, video.clone());
        self.commit(Some((ContentKind::Video, ChangeAction::Created, video.id.clone())))?;
        Ok(video)
    }

    /// Create a collection and append it.
    pub fn add_collection(&mut self, fields: NewCollection) -> Result<Collection, StoreError> {
        let collection = Collection {
            id: self.ids.next_id(),
            name: fields.name,
            description: fields.description,
            image: fields.image,
            item_count: fields.item_count,
        };
        debug!(id = %collection.id, name = %collection.name, "adding collection");
        self.content.collections.push(collection.clone());
        self.commit(Some((
            ContentKind::Collection,
            ChangeAction::Created,
            collection.id.clone(),
        )))?;
        Ok(collection)
    }

    /// Remove the image with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op.
    pub fn delete_image(&mut self, id: &ContentId) -> Result<bool, StoreError> {
        let removed = remove_by_id(&mut self.content.images, id, |i| &i.id);
        self.commit_delete(ContentKind::Image, id, removed)
    }

    pub fn delete_video(&mut self, id: &ContentId) -> Result<bool, StoreError> {
        let removed = remove_by_id(&mut self.content.videos, id, |v| &v.id);
        self.commit_delete(ContentKind::Video, id, removed)
    }

    pub fn delete_collection(&mut self, id: &ContentId) -> Result<bool, StoreError> {
        let removed = remove_by_id(&mut self.content.collections, id, |c| &c.id);
        self.commit_delete(ContentKind::Collection, id, removed)
    }

    /// Merge `patch` into the collection with `id`, returning the updated
    /// collection. An unknown id is a no-op returning `None`.
    pub fn update_collection(
        &mut self,
        id: &ContentId,
        patch: CollectionPatch,
    ) -> Result<Option<Collection>, StoreError> {
        let updated = match self.content.collections.iter_mut().find(|c| &c.id == id) {
            Some(collection) => {
                patch.apply_to(collection);
                Some(collection.clone())
            }
            None => None,
        };
        debug!(%id, found = updated.is_some(), "updating collection");
        let change = updated
            .as_ref()
            .map(|_| (ContentKind::Collection, ChangeAction::Updated, id.clone()));
        self.commit(change)?;
        Ok(updated)
    }

    /// Write the current aggregate to storage. Called on shutdown; mutators
    /// already persist on their own.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.persist()?;
        info!(key = %self.key, "Site content flushed");
        Ok(())
    }

    /// Read the stored blob back to confirm the backend is reachable.
    pub fn check_storage(&self) -> Result<(), StoreError> {
        self.storage.read(&self.key)?;
        Ok(())
    }

    fn commit_delete(
        &mut self,
        kind: ContentKind,
        id: &ContentId,
        removed: bool,
    ) -> Result<bool, StoreError> {
        debug!(?kind, %id, removed, "deleting");
        let change = removed.then(|| (kind, ChangeAction::Deleted, id.clone()));
        self.commit(change)?;
        Ok(removed)
    }

    /// Notify subscribers of `change` (if any), then persist the aggregate.
    /// The in-memory change stands even when the write fails.
    fn commit(
        &mut self,
        change: Option<(ContentKind, ChangeAction, ContentId)>,
    ) -> Result<(), StoreError> {
        if let Some((kind, action, id)) = change {
            self.events
                .publish(ContentEvent::Changed(ChangeEvent::now(kind, action, id)));
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.content)?;
        self.storage.write(&self.key, &blob)?;
        Ok(())
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &ContentId, id_of: impl Fn(&T) -> &ContentId) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

fn load_or_seed(storage: &dyn KeyValueStorage, key: &str) -> SiteContent {
    let saved = match storage.read(key) {
        Ok(saved) => saved,
        Err(e) => {
            warn!(%key, error = %e, "Could not read saved site content, using defaults");
            return default_content();
        }
    };
    let Some(blob) = saved else {
        info!(%key, "No saved site content, using defaults");
        return default_content();
    };
    match serde_json::from_str::<SiteContent>(&blob) {
        Ok(content) => {
            info!(
                %key,
                images = content.images.len(),
                videos = content.videos.len(),
                collections = content.collections.len(),
                "Loaded saved site content"
            );
            content
        }
        Err(e) => {
            warn!(%key, error = %e, "Discarding unreadable site content, using defaults");
            default_content()
        }
    }
}
