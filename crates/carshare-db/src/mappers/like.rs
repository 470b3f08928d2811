//! Like entity <-> model mapper

use carshare_core::entities::Like;
use carshare_core::value_objects::Snowflake;

use crate::models::LikeModel;

/// Convert LikeModel to Like entity
impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            user_id: Snowflake::new(model.user_id),
            image_id: Snowflake::new(model.image_id),
            created_at: model.created_at,
        }
    }
}
