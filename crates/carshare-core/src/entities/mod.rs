//! Domain entities

mod image;
mod like;
mod user;

pub use image::{Image, ImageWithMeta};
pub use like::{Like, LikeToggle};
pub use user::User;
