//! # carshare-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the optimistic like view-state. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;
pub mod view;

// Re-export commonly used types at crate root
pub use entities::{Image, ImageWithMeta, Like, LikeToggle, User};
pub use error::DomainError;
pub use traits::{ImageRepository, ImageSearch, LikeRepository, RepoResult, UserRepository};
pub use value_objects::{
    Category, CategoryParseError, QualityTier, QualityTierParseError, Snowflake,
    SnowflakeGenerator, SnowflakeParseError,
};
pub use view::{LikeSnapshot, LikeView, PendingToggle, ToggleRefusal};
