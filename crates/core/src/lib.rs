//! Content store for the Kaylari site: gallery images, videos and collections
//! persisted as a single JSON aggregate in key-value storage.

pub mod auth;
pub mod content;
pub mod events;
pub mod mutation;
pub mod storage;
pub mod store;

pub use content::id::{ContentId, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use content::model::{Collection, GalleryImage, GalleryVideo, SiteContent};
pub use mutation::types::{CollectionPatch, NewCollection, NewImage, NewVideo};
pub use store::{ContentStore, StoreError, DEFAULT_STORAGE_KEY};
