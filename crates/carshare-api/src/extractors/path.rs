//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use carshare_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with image_id
#[derive(Debug, serde::Deserialize)]
pub struct ImageIdPath {
    pub image_id: String,
}

impl ImageIdPath {
    /// Parse image_id as Snowflake
    pub fn image_id(&self) -> Result<Snowflake, ApiError> {
        self.image_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid image_id format"))
    }
}
