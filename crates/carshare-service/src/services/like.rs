//! Like service
//!
//! Toggles likes on gallery images. The actual flip and counter update
//! happen in a single database transaction so concurrent toggles can
//! never desynchronize the count from the rows.

use carshare_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::LikeToggleResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the user's like on an image, returning the authoritative state
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        image_id: Snowflake,
    ) -> ServiceResult<LikeToggleResponse> {
        // Distinguish a missing image from a toggle failure up front
        self.ctx
            .image_repo()
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Image", image_id.to_string()))?;

        let toggle = self.ctx.like_repo().toggle(user_id, image_id).await?;

        info!(
            user_id = %user_id,
            image_id = %image_id,
            is_liked = toggle.is_liked,
            like_count = toggle.like_count,
            "Like toggled"
        );

        Ok(LikeToggleResponse::from(toggle))
    }

    /// IDs of all images the user has liked
    #[instrument(skip(self))]
    pub async fn liked_image_ids(&self, user_id: Snowflake) -> ServiceResult<Vec<Snowflake>> {
        Ok(self.ctx.like_repo().liked_image_ids(user_id).await?)
    }
}
