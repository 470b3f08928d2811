//! Repository traits (ports)

mod repositories;

pub use repositories::{ImageRepository, ImageSearch, LikeRepository, RepoResult, UserRepository};
