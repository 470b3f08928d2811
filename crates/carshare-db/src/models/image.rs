//! Image database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for images table
#[derive(Debug, Clone, FromRow)]
pub struct ImageModel {
    pub id: i64,
    pub user_id: i64,
    pub storage_path: String,
    pub image_name: String,
    pub description: Option<String>,
    pub category: String,
    pub hashtags: Option<Vec<String>>,
    pub download_count: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Gallery row: image columns joined with uploader name and the viewer's
/// like state (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ImageWithMetaModel {
    #[sqlx(flatten)]
    pub image: ImageModel,
    pub uploader_name: String,
    pub liked_by_viewer: bool,
}
