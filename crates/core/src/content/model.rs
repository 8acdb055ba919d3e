use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ContentId;

/// A gallery image. `src` is either a URL or a `data:` URI of an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: ContentId,
    pub src: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A gallery video. `thumbnail` falls back to `src` when none is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryVideo {
    pub id: ContentId,
    pub src: String,
    pub thumbnail: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A named collection shown on the landing page.
/// `item_count` is entered by the operator, not derived from the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: ContentId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub item_count: u32,
}

/// The full persisted aggregate. Written and read as one blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub images: Vec<GalleryImage>,
    pub videos: Vec<GalleryVideo>,
    pub collections: Vec<Collection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SiteContent {
        let at = DateTime::parse_from_rfc3339("2024-03-05T10:15:30.250Z")
            .unwrap()
            .with_timezone(&Utc);
        SiteContent {
            images: vec![
                GalleryImage {
                    id: "a".into(),
                    src: "data:image/png;base64,AAAA".into(),
                    title: "Lehenga".into(),
                    category: "Bridal".into(),
                    description: Some("Red and gold".into()),
                    created_at: at,
                },
                GalleryImage {
                    id: "b".into(),
                    src: "/b.jpg".into(),
                    title: "Saree".into(),
                    category: "Festive".into(),
                    description: None,
                    created_at: at,
                },
            ],
            videos: vec![GalleryVideo {
                id: "v".into(),
                src: "https://cdn.example/v.mp4".into(),
                thumbnail: "https://cdn.example/v.jpg".into(),
                title: "Runway".into(),
                category: "Show".into(),
                description: None,
                created_at: at,
            }],
            collections: vec![Collection {
                id: "c".into(),
                name: "Menswear".into(),
                description: "Kurtas".into(),
                image: "/mens.jpg".into(),
                item_count: 28,
            }],
        }
    }

    #[test]
    fn uses_camel_case_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["images"][0]["createdAt"], json!("2024-03-05T10:15:30.250Z"));
        assert_eq!(value["collections"][0]["itemCount"], json!(28));
        assert!(value["images"][1].get("description").is_none());
    }

    #[test]
    fn serialize_then_deserialize_is_lossless() {
        let original = sample();
        let blob = serde_json::to_string(&original).unwrap();
        let back: SiteContent = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, original);

        let empty = SiteContent::default();
        let blob = serde_json::to_string(&empty).unwrap();
        let back: SiteContent = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, empty);
        assert!(back.videos.is_empty());
    }

    #[test]
    fn reads_blobs_written_by_the_browser_site() {
        let blob = r#"{
            "images": [{
                "id": "1712345678901",
                "src": "/collection-bridal.jpg",
                "title": "Bridal Lehenga",
                "category": "Bridal",
                "description": "",
                "createdAt": "2024-04-05T19:34:38.901Z"
            }],
            "videos": [],
            "collections": [{
                "id": "1",
                "name": "Bridal Wear",
                "description": "Exquisite bridal lehengas",
                "image": "/collection-bridal.jpg",
                "itemCount": 24
            }]
        }"#;
        let content: SiteContent = serde_json::from_str(blob).unwrap();
        assert_eq!(content.images[0].id.as_str(), "1712345678901");
        assert_eq!(content.images[0].description.as_deref(), Some(""));
        assert_eq!(content.collections[0].item_count, 24);
    }
}
