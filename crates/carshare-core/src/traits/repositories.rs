//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Image, ImageWithMeta, Like, LikeToggle, User};
use crate::error::DomainError;
use crate::value_objects::{Category, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user with the given password hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get the stored password hash for a user
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Image Repository
// ============================================================================

/// Gallery search filter: substring query over name/description plus an
/// optional category. Empty filter means "everything".
#[derive(Debug, Clone, Default)]
pub struct ImageSearch {
    pub query: Option<String>,
    pub category: Option<Category>,
}

#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Find image by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Image>>;

    /// All images, newest first, annotated for the given viewer.
    ///
    /// `liked_by_viewer` is false everywhere for anonymous viewers.
    async fn list_all(&self, viewer: Option<Snowflake>) -> RepoResult<Vec<ImageWithMeta>>;

    /// Filtered gallery, newest first, annotated for the given viewer
    async fn search(
        &self,
        filter: &ImageSearch,
        viewer: Option<Snowflake>,
    ) -> RepoResult<Vec<ImageWithMeta>>;

    /// Images owned by a user, newest first
    async fn list_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Image>>;

    /// Insert a new image row
    async fn create(&self, image: &Image) -> RepoResult<()>;

    /// Delete an image row (likes cascade)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Atomically bump the download counter, returning the new value.
    /// The counter is monotonic; it never decreases from a client action.
    async fn increment_download_count(&self, id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Atomically toggle the (user, image) like and adjust the image's
    /// counter in the same transaction.
    ///
    /// Returns the authoritative post-toggle state. Concurrent toggles
    /// against the same image serialize on the image row; the returned
    /// count is final.
    async fn toggle(&self, user_id: Snowflake, image_id: Snowflake) -> RepoResult<LikeToggle>;

    /// Find the like record for a (user, image) pair
    async fn find(&self, user_id: Snowflake, image_id: Snowflake) -> RepoResult<Option<Like>>;

    /// IDs of all images liked by a user
    async fn liked_image_ids(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}
