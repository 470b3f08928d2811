//! # carshare-storage
//!
//! Object storage layer for uploaded image files.
//!
//! ## Features
//!
//! - **Object Store**: `ObjectStore` trait with a local-disk implementation
//! - **Quality Processing**: decode, downscale, and re-encode images for
//!   quality-tier downloads
//!
//! ## Example
//!
//! ```ignore
//! use carshare_storage::{LocalObjectStore, ObjectStore, render_quality};
//! use carshare_core::QualityTier;
//!
//! let store = LocalObjectStore::new("./uploads").await?;
//! store.put("1/1700000000.jpg", &bytes).await?;
//!
//! let stored = store.get("1/1700000000.jpg").await?;
//! let rendered = render_quality(&stored, QualityTier::Medium)?;
//! ```

pub mod processing;
pub mod store;

pub use processing::{render_quality, ProcessError, Rendered};
pub use store::{LocalObjectStore, ObjectStore, StorageError, StorageResult};
