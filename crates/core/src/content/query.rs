// Read-side helpers used by the gallery and the admin dashboard.

use serde::{Deserialize, Serialize};

use super::model::{GalleryImage, SiteContent};

/// Filter value that matches every category.
pub const ALL_CATEGORIES: &str = "All";

/// `"All"` followed by each distinct image category, in first-appearance order.
pub fn categories(content: &SiteContent) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for image in &content.images {
        if !out.iter().any(|c| c == &image.category) {
            out.push(image.category.clone());
        }
    }
    out
}

/// Images whose category equals `filter` exactly; `"All"` returns every image.
pub fn images_in_category<'a>(content: &'a SiteContent, filter: &str) -> Vec<&'a GalleryImage> {
    content
        .images
        .iter()
        .filter(|image| filter == ALL_CATEGORIES || image.category == filter)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    pub images: usize,
    pub videos: usize,
    pub collections: usize,
}

impl From<&SiteContent> for ContentStats {
    fn from(content: &SiteContent) -> Self {
        Self {
            images: content.images.len(),
            videos: content.videos.len(),
            collections: content.collections.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::seed::default_content;

    #[test]
    fn categories_start_with_all_and_skip_duplicates() {
        let mut content = default_content();
        let mut extra = content.images[0].clone();
        extra.id = "7".into();
        content.images.push(extra);

        let cats = categories(&content);
        assert_eq!(
            cats,
            vec!["All", "Bridal", "Festive", "Fusion", "Traditional", "Menswear", "Accessories"]
        );
    }

    #[test]
    fn categories_of_empty_gallery_is_just_all() {
        assert_eq!(categories(&SiteContent::default()), vec!["All"]);
    }

    #[test]
    fn filter_by_category() {
        let content = default_content();
        assert_eq!(images_in_category(&content, "All").len(), 6);

        let bridal = images_in_category(&content, "Bridal");
        assert_eq!(bridal.len(), 1);
        assert_eq!(bridal[0].title, "Bridal Lehenga");

        assert!(images_in_category(&content, "bridal").is_empty());
        assert!(images_in_category(&content, "Nope").is_empty());
    }

    #[test]
    fn stats_count_each_sequence() {
        let stats = ContentStats::from(&default_content());
        assert_eq!(
            stats,
            ContentStats {
                images: 6,
                videos: 0,
                collections: 6
            }
        );
    }
}
