//! Image service
//!
//! Handles gallery browsing, uploads, deletion, and quality-tiered
//! downloads of car images.

use carshare_core::entities::Image;
use carshare_core::error::DomainError;
use carshare_core::traits::ImageSearch;
use carshare_core::{Category, QualityTier, Snowflake};
use carshare_storage::{render_quality, Rendered};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{DownloadCountResponse, ImageResponse, SearchImagesRequest, UploadImageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Image bytes ready to serve, with download metadata
#[derive(Debug)]
pub struct DownloadPayload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: String,
}

/// Image service
pub struct ImageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageService<'a> {
    /// Create a new ImageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the gallery, newest first, annotated for the viewer
    #[instrument(skip(self))]
    pub async fn gallery(
        &self,
        viewer: Option<Snowflake>,
        request: SearchImagesRequest,
    ) -> ServiceResult<Vec<ImageResponse>> {
        let search = ImageSearch {
            query: request.q.filter(|q| !q.trim().is_empty()),
            category: parse_category_filter(request.category.as_deref())?,
        };

        let images = self.ctx.image_repo().search(&search, viewer).await?;

        Ok(images.iter().map(ImageResponse::from).collect())
    }

    /// Get a single gallery image annotated for the viewer
    #[instrument(skip(self))]
    pub async fn get_image(
        &self,
        image_id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<ImageResponse> {
        let image = self.require_image(image_id).await?;

        let uploader = self
            .ctx
            .user_repo()
            .find_by_id(image.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", image.user_id.to_string()))?;

        let liked = match viewer {
            Some(user_id) => self
                .ctx
                .like_repo()
                .find(user_id, image_id)
                .await?
                .is_some(),
            None => false,
        };

        Ok(ImageResponse::with_context(&image, &uploader.username, liked))
    }

    /// List a user's own uploads, newest first
    #[instrument(skip(self))]
    pub async fn list_user_images(&self, user_id: Snowflake) -> ServiceResult<Vec<ImageResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let images = self.ctx.image_repo().list_by_user(user_id).await?;
        let liked: std::collections::HashSet<Snowflake> = self
            .ctx
            .like_repo()
            .liked_image_ids(user_id)
            .await?
            .into_iter()
            .collect();

        Ok(images
            .iter()
            .map(|image| {
                ImageResponse::with_context(image, &user.username, liked.contains(&image.id))
            })
            .collect())
    }

    /// Upload a new image with its metadata
    #[instrument(skip(self, request, data), fields(image_name = %request.image_name, size = data.len()))]
    pub async fn upload(
        &self,
        user_id: Snowflake,
        request: UploadImageRequest,
        content_type: &str,
        data: Vec<u8>,
    ) -> ServiceResult<ImageResponse> {
        let config = self.ctx.storage_config();

        if data.is_empty() {
            return Err(ServiceError::validation("Image file is empty"));
        }

        if data.len() > config.max_file_size_bytes() {
            return Err(ServiceError::from(DomainError::FileTooLarge {
                max_mb: config.max_file_size_mb,
            }));
        }

        if !content_type.starts_with("image/") {
            return Err(ServiceError::from(DomainError::UnsupportedMediaType(
                content_type.to_string(),
            )));
        }

        let category: Category = request
            .category
            .parse()
            .map_err(|_| DomainError::UnknownCategory(request.category.clone()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let image_id = self.ctx.generate_id();
        let now = Utc::now();
        let storage_path = format!(
            "{}/{}_{}.{}",
            user_id,
            now.timestamp(),
            image_id,
            extension_for(content_type)
        );

        let image = Image {
            id: image_id,
            user_id,
            storage_path: storage_path.clone(),
            image_name: request.image_name,
            description: request.description.filter(|d| !d.trim().is_empty()),
            category,
            hashtags: request
                .hashtags
                .map(normalize_hashtags)
                .filter(|tags| !tags.is_empty()),
            download_count: 0,
            like_count: 0,
            created_at: now,
        };

        // Write the file first so the database row never points at
        // bytes that were not persisted
        self.ctx
            .object_store()
            .put(&storage_path, &data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if let Err(e) = self.ctx.image_repo().create(&image).await {
            // Remove the orphaned file before surfacing the error
            if let Err(cleanup) = self.ctx.object_store().delete(&storage_path).await {
                warn!(path = %storage_path, error = %cleanup, "Failed to clean up orphaned upload");
            }
            return Err(e.into());
        }

        info!(image_id = %image_id, user_id = %user_id, "Image uploaded");

        Ok(ImageResponse::with_context(&image, &user.username, false))
    }

    /// Delete an image owned by the requesting user
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, image_id: Snowflake) -> ServiceResult<()> {
        let image = self.require_image(image_id).await?;

        if image.user_id != user_id {
            return Err(ServiceError::permission_denied(
                "Only the uploader can delete an image",
            ));
        }

        self.ctx.image_repo().delete(image_id).await?;

        // The row is gone; a failed file delete only leaks disk space
        if let Err(e) = self.ctx.object_store().delete(&image.storage_path).await {
            warn!(path = %image.storage_path, error = %e, "Failed to remove image file");
        }

        info!(image_id = %image_id, user_id = %user_id, "Image deleted");
        Ok(())
    }

    /// Record one download and return the new count
    #[instrument(skip(self))]
    pub async fn increment_download(
        &self,
        image_id: Snowflake,
    ) -> ServiceResult<DownloadCountResponse> {
        let download_count = self
            .ctx
            .image_repo()
            .increment_download_count(image_id)
            .await?;

        Ok(DownloadCountResponse { download_count })
    }

    /// Fetch image bytes rendered at the requested quality tier
    #[instrument(skip(self))]
    pub async fn download(
        &self,
        image_id: Snowflake,
        tier: QualityTier,
    ) -> ServiceResult<DownloadPayload> {
        let image = self.require_image(image_id).await?;

        let stored = self
            .ctx
            .object_store()
            .get(&image.storage_path)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let rendered = render_quality(&stored, tier)
            .map_err(|e| ServiceError::from(DomainError::ImageProcessingError(e.to_string())))?;

        let base_name = safe_file_stem(&image.image_name);
        Ok(match rendered {
            Rendered::Passthrough => DownloadPayload {
                content_type: content_type_for(&image.storage_path),
                file_name: format!("{}.{}", base_name, stored_extension(&image.storage_path)),
                bytes: stored,
            },
            Rendered::Jpeg { bytes, .. } => DownloadPayload {
                content_type: "image/jpeg".to_string(),
                file_name: format!("{}_{}.jpg", base_name, tier),
                bytes,
            },
        })
    }

    /// Raw stored bytes for inline gallery display
    #[instrument(skip(self))]
    pub async fn file(&self, image_id: Snowflake) -> ServiceResult<DownloadPayload> {
        self.download(image_id, QualityTier::Original).await
    }

    async fn require_image(&self, image_id: Snowflake) -> ServiceResult<Image> {
        self.ctx
            .image_repo()
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Image", image_id.to_string()))
    }
}

/// Parse a category query parameter; absent or "all" disables the filter
fn parse_category_filter(raw: Option<&str>) -> ServiceResult<Option<Category>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() || s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s
            .parse::<Category>()
            .map(Some)
            .map_err(|_| ServiceError::from(DomainError::UnknownCategory(s.to_string()))),
    }
}

/// Trim hashtags, strip a leading '#', and drop empties
fn normalize_hashtags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .filter_map(|tag| {
            let trimmed = tag.trim().trim_start_matches('#').to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect()
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        _ => "jpg",
    }
}

fn stored_extension(storage_path: &str) -> &str {
    storage_path.rsplit('.').next().unwrap_or("jpg")
}

fn content_type_for(storage_path: &str) -> String {
    match stored_extension(storage_path) {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    }
    .to_string()
}

/// Keep only filesystem-safe characters for a download file name
fn safe_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "image".to_string()
    } else {
        stem
    }
}
