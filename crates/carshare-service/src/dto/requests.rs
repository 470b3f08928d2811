//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Image Requests
// ============================================================================

/// Image upload metadata (the file itself arrives as a multipart part)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadImageRequest {
    #[validate(length(min = 1, max = 100, message = "Image name must be 1-100 characters"))]
    pub image_name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Category label, e.g. "Sports Car"
    pub category: String,

    #[validate(length(max = 20, message = "At most 20 hashtags"))]
    pub hashtags: Option<Vec<String>>,
}

/// Gallery search query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchImagesRequest {
    /// Substring matched against image name and description
    pub q: Option<String>,

    /// Category label filter; absent or "all" means every category
    pub category: Option<String>,
}
