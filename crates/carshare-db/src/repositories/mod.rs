//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in carshare-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod image;
mod like;
mod user;

pub use image::PgImageRepository;
pub use like::PgLikeRepository;
pub use user::PgUserRepository;
