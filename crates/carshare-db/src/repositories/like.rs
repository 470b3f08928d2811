//! PostgreSQL implementation of LikeRepository
//!
//! The toggle runs as a single transaction so the like row and the image
//! counter can never drift apart, and two clients racing on the same image
//! serialize on the image row update.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use carshare_core::entities::{Like, LikeToggle};
use carshare_core::traits::{LikeRepository, RepoResult};
use carshare_core::value_objects::Snowflake;

use crate::models::LikeModel;

use super::error::{image_not_found, map_db_error};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn toggle(&self, user_id: Snowflake, image_id: Snowflake) -> RepoResult<LikeToggle> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Try to like first. ON CONFLICT DO NOTHING affects zero rows when
        // the like already exists, in which case this is an unlike.
        let inserted = sqlx::query(
            r"
            INSERT INTO likes (user_id, image_id, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id, image_id) DO NOTHING
            ",
        )
        .bind(user_id.into_inner())
        .bind(image_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected()
            == 1;

        if !inserted {
            sqlx::query(
                r"
                DELETE FROM likes WHERE user_id = $1 AND image_id = $2
                ",
            )
            .bind(user_id.into_inner())
            .bind(image_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        let delta: i64 = if inserted { 1 } else { -1 };

        let like_count = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE images
            SET like_count = GREATEST(like_count + $2, 0)
            WHERE id = $1
            RETURNING like_count
            ",
        )
        .bind(image_id.into_inner())
        .bind(delta)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| image_not_found(image_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(LikeToggle {
            is_liked: inserted,
            like_count,
        })
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, image_id: Snowflake) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT user_id, image_id, created_at
            FROM likes
            WHERE user_id = $1 AND image_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(image_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self))]
    async fn liked_image_ids(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT image_id
            FROM likes
            WHERE user_id = $1
            ORDER BY created_at
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }
}
