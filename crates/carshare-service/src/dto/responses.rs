//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics for a user's uploads
#[derive(Debug, Clone, Serialize)]
pub struct UserStatsResponse {
    pub image_count: i64,
    pub total_likes: i64,
    pub total_downloads: i64,
}

// ============================================================================
// Image Responses
// ============================================================================

/// Gallery image response with uploader and viewer context
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: String,
    pub user_id: String,
    pub image_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    /// Relative URL for fetching the image bytes
    pub file_url: String,
    pub uploader_name: String,
    pub like_count: i64,
    pub download_count: i64,
    /// Whether the requesting user has liked this image (false for anonymous)
    pub liked_by_viewer: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Like / Download Responses
// ============================================================================

/// Result of a like toggle, carrying the authoritative count
#[derive(Debug, Clone, Serialize)]
pub struct LikeToggleResponse {
    pub is_liked: bool,
    pub like_count: i64,
}

/// Result of a download count increment
#[derive(Debug, Clone, Serialize)]
pub struct DownloadCountResponse {
    pub download_count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

/// Individual dependency health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
    pub redis: bool,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            checks: HealthChecks {
                database: database_healthy,
                redis: redis_healthy,
            },
        }
    }
}
