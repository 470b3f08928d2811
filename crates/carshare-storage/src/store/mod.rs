//! Object store abstraction and implementations

mod local;

use async_trait::async_trait;

pub use local::LocalObjectStore;

/// Error type for object store operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for object store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage backend for raw uploaded files, keyed by a relative path like
/// `{user_id}/{timestamp}.{ext}`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store an object, overwriting any existing one at the same key
    async fn put(&self, key: &str, data: &[u8]) -> StorageResult<()>;

    /// Read an object's bytes
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete an object. Deleting a missing object is not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether an object exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
