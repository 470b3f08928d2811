//! User service
//!
//! Current-user profile and upload statistics.

use carshare_core::Snowflake;
use tracing::instrument;

use crate::dto::{CurrentUserResponse, UserStatsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Aggregate likes and downloads across the user's uploads
    #[instrument(skip(self))]
    pub async fn stats(&self, user_id: Snowflake) -> ServiceResult<UserStatsResponse> {
        let images = self.ctx.image_repo().list_by_user(user_id).await?;

        let mut stats = UserStatsResponse {
            image_count: images.len() as i64,
            total_likes: 0,
            total_downloads: 0,
        };
        for image in &images {
            stats.total_likes += image.like_count;
            stats.total_downloads += image.download_count;
        }

        Ok(stats)
    }
}
