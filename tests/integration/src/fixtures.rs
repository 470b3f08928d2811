//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A valid 1x1 RGBA PNG, small enough to upload quickly but decodable
/// by the resize pipeline.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0xFC,
    0xCF, 0xC0, 0x50, 0x0F, 0x00, 0x04, 0x85, 0x01, 0x80, 0x84, 0xA9, 0x8C, 0x21, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

// ============================================================================
// Requests
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "testpass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request
#[derive(Debug, Serialize)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

/// Image upload form data
#[derive(Debug, Clone)]
pub struct UploadFixture {
    pub image_name: String,
    pub description: Option<String>,
    pub category: String,
    pub hashtags: Option<Vec<String>>,
    pub file_name: String,
    pub content_type: String,
    pub file_bytes: Vec<u8>,
}

impl UploadFixture {
    /// A unique, valid upload
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            image_name: format!("Test Car {suffix}"),
            description: Some("A car photographed for testing".to_string()),
            category: "Sedan".to_string(),
            hashtags: Some(vec!["test".to_string(), "v8".to_string()]),
            file_name: "car.png".to_string(),
            content_type: "image/png".to_string(),
            file_bytes: TINY_PNG.to_vec(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.image_name = name.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// Gallery image response
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    pub id: String,
    pub user_id: String,
    pub image_name: String,
    pub description: Option<String>,
    pub category: String,
    pub hashtags: Option<Vec<String>>,
    pub file_url: String,
    pub uploader_name: String,
    pub like_count: i64,
    pub download_count: i64,
    pub liked_by_viewer: bool,
}

/// Like toggle response
#[derive(Debug, Deserialize)]
pub struct LikeToggleResponse {
    pub is_liked: bool,
    pub like_count: i64,
}

/// Download count response
#[derive(Debug, Deserialize)]
pub struct DownloadCountResponse {
    pub download_count: i64,
}

/// User statistics response
#[derive(Debug, Deserialize)]
pub struct UserStatsResponse {
    pub image_count: i64,
    pub total_likes: i64,
    pub total_downloads: i64,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
