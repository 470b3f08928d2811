//! Image entity <-> model mapper

use carshare_core::entities::{Image, ImageWithMeta};
use carshare_core::error::DomainError;
use carshare_core::value_objects::{Category, Snowflake};

use crate::models::{ImageModel, ImageWithMetaModel};

/// Convert ImageModel to Image entity
///
/// Fails if the stored category string is not one of the known labels,
/// which would indicate a row written outside the application.
impl TryFrom<ImageModel> for Image {
    type Error = DomainError;

    fn try_from(model: ImageModel) -> Result<Self, Self::Error> {
        let category: Category = model
            .category
            .parse()
            .map_err(|_| DomainError::UnknownCategory(model.category.clone()))?;

        Ok(Image {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            storage_path: model.storage_path,
            image_name: model.image_name,
            description: model.description,
            category,
            hashtags: model.hashtags,
            download_count: model.download_count,
            like_count: model.like_count,
            created_at: model.created_at,
        })
    }
}

/// Convert a joined gallery row to the annotated entity
impl TryFrom<ImageWithMetaModel> for ImageWithMeta {
    type Error = DomainError;

    fn try_from(model: ImageWithMetaModel) -> Result<Self, Self::Error> {
        Ok(ImageWithMeta {
            image: Image::try_from(model.image)?,
            uploader_name: model.uploader_name,
            liked_by_viewer: model.liked_by_viewer,
        })
    }
}

/// Convert Image entity reference to values for database insertion
pub struct ImageInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub storage_path: &'a str,
    pub image_name: &'a str,
    pub description: Option<&'a str>,
    pub category: &'static str,
    pub hashtags: Option<&'a [String]>,
}

impl<'a> ImageInsert<'a> {
    pub fn new(image: &'a Image) -> Self {
        Self {
            id: image.id.into_inner(),
            user_id: image.user_id.into_inner(),
            storage_path: &image.storage_path,
            image_name: &image.image_name,
            description: image.description.as_deref(),
            category: image.category.label(),
            hashtags: image.hashtags.as_deref(),
        }
    }
}
