//! Client-facing view-state

mod like_view;

pub use like_view::{LikeSnapshot, LikeView, PendingToggle, ToggleRefusal};
