//! # carshare-cache
//!
//! Redis caching layer for authentication sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Refresh token storage with automatic expiration
//!
//! ## Example
//!
//! ```ignore
//! use carshare_cache::{RedisPool, RedisPoolConfig, RefreshTokenStore, RefreshTokenData};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let store = RefreshTokenStore::new(pool);
//!
//! let data = RefreshTokenData::new(user_id);
//! store.store("token-id", &data).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{RefreshTokenData, RefreshTokenStore};
