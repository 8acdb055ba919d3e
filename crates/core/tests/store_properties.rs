//! End-to-end behaviour of the content store over real storage backends.

use std::sync::Arc;

use kaylari_core::content::seed::default_content;
use kaylari_core::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use kaylari_core::{
    CollectionPatch, ContentStore, NewCollection, NewImage, NewVideo, SiteContent,
    DEFAULT_STORAGE_KEY,
};

fn open_over(storage: Arc<dyn KeyValueStorage>) -> ContentStore {
    ContentStore::open(storage, DEFAULT_STORAGE_KEY).unwrap()
}

#[test]
fn first_open_yields_seed_and_reload_keeps_new_collection_last() {
    let tmp = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(tmp.path()).unwrap());

    let mut store = open_over(storage.clone());
    assert_eq!(store.snapshot(), default_content());

    let added = store
        .add_collection(NewCollection {
            name: "Winter Edit".into(),
            description: "Velvet and wool".into(),
            image: "/winter.jpg".into(),
            item_count: 12,
        })
        .unwrap();
    drop(store);

    let reloaded = open_over(storage);
    let collections = &reloaded.content().collections;
    assert_eq!(collections.len(), default_content().collections.len() + 1);
    assert_eq!(collections.last(), Some(&added));
}

#[test]
fn reload_round_trips_every_field() {
    let storage = MemoryStorage::new();
    let mut store = open_over(Arc::new(storage.clone()));

    store
        .add_image(NewImage {
            src: "data:image/jpeg;base64,/9j/4AAQ".into(),
            title: "Upload".into(),
            category: "Bridal".into(),
            description: None,
        })
        .unwrap();
    store
        .add_video(NewVideo {
            src: "https://cdn.example/show.mp4".into(),
            thumbnail: None,
            title: "Show".into(),
            category: "Runway".into(),
            description: Some("Spring show".into()),
        })
        .unwrap();
    let before = store.snapshot();

    let reloaded = open_over(Arc::new(storage));
    assert_eq!(reloaded.snapshot(), before);
    assert_eq!(reloaded.content().images[0].description, None);
}

#[test]
fn deleting_every_video_leaves_an_empty_sequence() {
    let storage = MemoryStorage::new();
    let mut store = open_over(Arc::new(storage.clone()));

    let ids: Vec<_> = (0..3)
        .map(|n| {
            store
                .add_video(NewVideo {
                    src: format!("v{n}.mp4"),
                    ..Default::default()
                })
                .unwrap()
                .id
        })
        .collect();
    let images = store.content().images.clone();
    let collections = store.content().collections.clone();

    for id in &ids {
        assert!(store.delete_video(id).unwrap());
    }

    assert!(store.content().videos.is_empty());
    assert_eq!(store.content().images, images);
    assert_eq!(store.content().collections, collections);

    let blob = storage.read(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let raw: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(raw["videos"], serde_json::json!([]));
}

#[test]
fn patch_then_reload_keeps_untouched_fields() {
    let storage = MemoryStorage::new();
    let mut store = open_over(Arc::new(storage.clone()));
    let target = store.content().collections[0].id.clone();

    store
        .update_collection(
            &target,
            CollectionPatch {
                item_count: Some(99),
                ..Default::default()
            },
        )
        .unwrap();

    let reloaded: SiteContent = open_over(Arc::new(storage)).snapshot();
    let collection = &reloaded.collections[0];
    assert_eq!(collection.item_count, 99);
    assert_eq!(collection.name, "Bridal Wear");
    assert_eq!(collection.image, "/collection-bridal.jpg");
}
