//! Entity to model mappers
//!
//! This module provides conversions between domain entities (carshare-core)
//! and database models.
//! - `From<Model>`/`TryFrom<Model>` impls: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod image;
mod like;
mod user;

pub use image::ImageInsert;
