//! Database models - SQLx-compatible structs for PostgreSQL tables

mod image;
mod like;
mod user;

pub use image::{ImageModel, ImageWithMetaModel};
pub use like::LikeModel;
pub use user::UserModel;
