//! Value objects - immutable domain values with validation

mod category;
mod quality;
mod snowflake;

pub use category::{Category, CategoryParseError};
pub use quality::{QualityTier, QualityTierParseError};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
