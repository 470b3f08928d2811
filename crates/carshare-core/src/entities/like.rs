//! Like entity - a (user, image) join record

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Like join record.
///
/// At most one Like exists per (user, image) pair at any time; the pair is
/// the primary key. Likes are created and deleted by the toggle operation,
/// never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user_id: Snowflake,
    pub image_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like
    pub fn new(user_id: Snowflake, image_id: Snowflake) -> Self {
        Self {
            user_id,
            image_id,
            created_at: Utc::now(),
        }
    }
}

/// Authoritative result of a toggle: the post-toggle liked state and the
/// post-toggle counter as stored by the backend. Always wins over any
/// optimistic local value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub is_liked: bool,
    pub like_count: i64,
}
