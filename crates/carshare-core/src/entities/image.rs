//! Image entity - an uploaded car photograph with metadata

use chrono::{DateTime, Utc};

use crate::value_objects::{Category, Snowflake};

/// Uploaded image with metadata and server-authoritative counters.
///
/// `download_count` and `like_count` are only ever mutated by the backend;
/// any locally maintained value is a rendering aid, never authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub storage_path: String,
    pub image_name: String,
    pub description: Option<String>,
    pub category: Category,
    pub hashtags: Option<Vec<String>>,
    pub download_count: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Image {
    /// Public URL path the raw file is served from
    pub fn file_url(&self) -> String {
        format!("/api/v1/images/{}/file", self.id)
    }

    /// Check whether the image carries a given hashtag
    pub fn has_hashtag(&self, tag: &str) -> bool {
        self.hashtags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
    }
}

/// An image annotated for a particular viewer: uploader name for display
/// and whether the viewer has liked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageWithMeta {
    pub image: Image,
    pub uploader_name: String,
    pub liked_by_viewer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> Image {
        Image {
            id: Snowflake::new(10),
            user_id: Snowflake::new(1),
            storage_path: "1/1700000000.jpg".to_string(),
            image_name: "Night GT3".to_string(),
            description: None,
            category: Category::SportsCar,
            hashtags: Some(vec!["porsche".to_string(), "nightshoot".to_string()]),
            download_count: 0,
            like_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_file_url() {
        assert_eq!(sample_image().file_url(), "/api/v1/images/10/file");
    }

    #[test]
    fn test_has_hashtag_case_insensitive() {
        let image = sample_image();
        assert!(image.has_hashtag("Porsche"));
        assert!(!image.has_hashtag("jdm"));
    }
}
