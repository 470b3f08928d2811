//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use carshare_core::entities::{Image, ImageWithMeta, LikeToggle, User};

use super::responses::{CurrentUserResponse, ImageResponse, LikeToggleResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Image Mappers
// ============================================================================

impl From<&ImageWithMeta> for ImageResponse {
    fn from(meta: &ImageWithMeta) -> Self {
        let image = &meta.image;
        Self {
            id: image.id.to_string(),
            user_id: image.user_id.to_string(),
            image_name: image.image_name.clone(),
            description: image.description.clone(),
            category: image.category.label().to_string(),
            hashtags: image.hashtags.clone(),
            file_url: image.file_url(),
            uploader_name: meta.uploader_name.clone(),
            like_count: image.like_count,
            download_count: image.download_count,
            liked_by_viewer: meta.liked_by_viewer,
            created_at: image.created_at,
        }
    }
}

impl From<ImageWithMeta> for ImageResponse {
    fn from(meta: ImageWithMeta) -> Self {
        Self::from(&meta)
    }
}

impl ImageResponse {
    /// Builds a response for an image listed outside the annotated gallery
    /// query, where uploader name and viewer like state are known separately.
    pub fn with_context(image: &Image, uploader_name: &str, liked_by_viewer: bool) -> Self {
        Self {
            id: image.id.to_string(),
            user_id: image.user_id.to_string(),
            image_name: image.image_name.clone(),
            description: image.description.clone(),
            category: image.category.label().to_string(),
            hashtags: image.hashtags.clone(),
            file_url: image.file_url(),
            uploader_name: uploader_name.to_string(),
            like_count: image.like_count,
            download_count: image.download_count,
            liked_by_viewer,
            created_at: image.created_at,
        }
    }
}

// ============================================================================
// Like Mappers
// ============================================================================

impl From<LikeToggle> for LikeToggleResponse {
    fn from(toggle: LikeToggle) -> Self {
        Self {
            is_liked: toggle.is_liked,
            like_count: toggle.like_count,
        }
    }
}
