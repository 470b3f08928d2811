//! PostgreSQL implementation of ImageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use carshare_core::entities::{Image, ImageWithMeta};
use carshare_core::traits::{ImageRepository, ImageSearch, RepoResult};
use carshare_core::value_objects::Snowflake;

use crate::mappers::ImageInsert;
use crate::models::{ImageModel, ImageWithMetaModel};

use super::error::{image_not_found, map_db_error};

const IMAGE_COLUMNS: &str = "i.id, i.user_id, i.storage_path, i.image_name, i.description, \
     i.category, i.hashtags, i.download_count, i.like_count, i.created_at";

/// PostgreSQL implementation of ImageRepository
#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    /// Create a new PgImageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a gallery query: image columns joined with the uploader name and
    /// the viewer's like state, newest first.
    ///
    /// For an anonymous viewer the like subquery is bound to id 0, which
    /// matches no likes, so `liked_by_viewer` comes back false everywhere.
    async fn fetch_gallery(
        &self,
        filter: &ImageSearch,
        viewer: Option<Snowflake>,
    ) -> RepoResult<Vec<ImageWithMeta>> {
        let viewer_id = viewer.map_or(0, Snowflake::into_inner);
        let pattern = filter.query.as_deref().map(|q| format!("%{q}%"));
        let category = filter.category.map(|c| c.label());

        let rows = sqlx::query_as::<_, ImageWithMetaModel>(&format!(
            r"
            SELECT {IMAGE_COLUMNS},
                   u.username AS uploader_name,
                   (l.user_id IS NOT NULL) AS liked_by_viewer
            FROM images i
            JOIN users u ON u.id = i.user_id
            LEFT JOIN likes l ON l.image_id = i.id AND l.user_id = $1
            WHERE ($2::TEXT IS NULL OR i.image_name ILIKE $2 OR i.description ILIKE $2)
              AND ($3::TEXT IS NULL OR i.category = $3)
            ORDER BY i.created_at DESC
            ",
        ))
        .bind(viewer_id)
        .bind(pattern)
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ImageWithMeta::try_from).collect()
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Image>> {
        let result = sqlx::query_as::<_, ImageModel>(&format!(
            r"
            SELECT {IMAGE_COLUMNS}
            FROM images i
            WHERE i.id = $1
            ",
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Image::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self, viewer: Option<Snowflake>) -> RepoResult<Vec<ImageWithMeta>> {
        self.fetch_gallery(&ImageSearch::default(), viewer).await
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        filter: &ImageSearch,
        viewer: Option<Snowflake>,
    ) -> RepoResult<Vec<ImageWithMeta>> {
        self.fetch_gallery(filter, viewer).await
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Image>> {
        let rows = sqlx::query_as::<_, ImageModel>(&format!(
            r"
            SELECT {IMAGE_COLUMNS}
            FROM images i
            WHERE i.user_id = $1
            ORDER BY i.created_at DESC
            ",
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Image::try_from).collect()
    }

    #[instrument(skip(self, image))]
    async fn create(&self, image: &Image) -> RepoResult<()> {
        let insert = ImageInsert::new(image);

        sqlx::query(
            r"
            INSERT INTO images (id, user_id, storage_path, image_name, description,
                                category, hashtags, download_count, like_count, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, 0, $8)
            ",
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.storage_path)
        .bind(insert.image_name)
        .bind(insert.description)
        .bind(insert.category)
        .bind(insert.hashtags)
        .bind(image.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM images WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(image_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_download_count(&self, id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE images
            SET download_count = download_count + 1
            WHERE id = $1
            RETURNING download_count
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        count.ok_or_else(|| image_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgImageRepository>();
    }
}
