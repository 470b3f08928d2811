//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Image not found: {0}")]
    ImageNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown quality tier: {0}")]
    UnknownQualityTier(String),

    #[error("File too large: max {max_mb} MB")]
    FileTooLarge { max_mb: u32 },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the image owner")]
    NotImageOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Image processing error: {0}")]
    ImageProcessingError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ImageNotFound(_) => "UNKNOWN_IMAGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::UnknownQualityTier(_) => "UNKNOWN_QUALITY_TIER",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",

            // Authorization
            Self::NotImageOwner => "NOT_IMAGE_OWNER",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::ImageProcessingError(_) => "IMAGE_PROCESSING_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ImageNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::UnknownCategory(_)
                | Self::UnknownQualityTier(_)
                | Self::FileTooLarge { .. }
                | Self::UnsupportedMediaType(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotImageOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::EmailAlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ImageNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_IMAGE");

        let err = DomainError::UsernameAlreadyExists;
        assert_eq!(err.code(), "USERNAME_ALREADY_EXISTS");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::FileTooLarge { max_mb: 5 }.is_validation());
        assert!(DomainError::NotImageOwner.is_authorization());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(!DomainError::DatabaseError("x".to_string()).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ImageNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Image not found: 123");

        let err = DomainError::FileTooLarge { max_mb: 5 };
        assert_eq!(err.to_string(), "File too large: max 5 MB");
    }
}
