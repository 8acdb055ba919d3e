//! Default content used when storage holds no saved aggregate.

use chrono::{DateTime, TimeZone, Utc};

use super::model::{Collection, GalleryImage, SiteContent};

/// Timestamp stamped on every seed image, so the seed is a constant value.
pub fn seed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn image(id: &str, src: &str, title: &str, category: &str, description: &str) -> GalleryImage {
    GalleryImage {
        id: id.into(),
        src: src.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        description: Some(description.to_string()),
        created_at: seed_timestamp(),
    }
}

fn collection(id: &str, name: &str, description: &str, image: &str, item_count: u32) -> Collection {
    Collection {
        id: id.into(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        item_count,
    }
}

pub fn default_content() -> SiteContent {
    SiteContent {
        images: vec![
            image(
                "1",
                "/collection-bridal.jpg",
                "Bridal Lehenga",
                "Bridal",
                "Traditional red and gold embroidered bridal lehenga",
            ),
            image(
                "2",
                "/collection-festive.jpg",
                "Festive Saree",
                "Festive",
                "Royal blue silk saree with gold zari border",
            ),
            image(
                "3",
                "/collection-fusion.jpg",
                "Fusion Anarkali",
                "Fusion",
                "Contemporary pastel pink anarkali with modern cut",
            ),
            image(
                "4",
                "/collection-saree.jpg",
                "Banarasi Saree",
                "Traditional",
                "Emerald green Banarasi silk with gold brocade",
            ),
            image(
                "5",
                "/collection-mens.jpg",
                "Men's Kurta Set",
                "Menswear",
                "Cream embroidered kurta with nehru jacket",
            ),
            image(
                "6",
                "/collection-accessories.jpg",
                "Bridal Jewelry",
                "Accessories",
                "Traditional jhumkas, maang tikka, and bangles",
            ),
        ],
        videos: Vec::new(),
        collections: vec![
            collection(
                "1",
                "Bridal Wear",
                "Exquisite bridal lehengas and sarees for your special day",
                "/collection-bridal.jpg",
                24,
            ),
            collection(
                "2",
                "Festive Collection",
                "Vibrant outfits perfect for celebrations and festivals",
                "/collection-festive.jpg",
                36,
            ),
            collection(
                "3",
                "Contemporary Fusion",
                "Modern silhouettes with traditional Indian craftsmanship",
                "/collection-fusion.jpg",
                18,
            ),
            collection(
                "4",
                "Traditional Sarees",
                "Handwoven sarees from across India",
                "/collection-saree.jpg",
                42,
            ),
            collection(
                "5",
                "Menswear",
                "Elegant kurtas, sherwanis, and accessories for men",
                "/collection-mens.jpg",
                28,
            ),
            collection(
                "6",
                "Accessories",
                "Complete your look with our jewelry and accessories",
                "/collection-accessories.jpg",
                56,
            ),
        ],
    }
}
