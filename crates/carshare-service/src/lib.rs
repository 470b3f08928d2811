//! # carshare-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, CurrentUserResponse, DownloadCountResponse, HealthResponse, ImageResponse,
    LikeToggleResponse, LoginRequest, LogoutRequest, ReadinessResponse, RefreshTokenRequest,
    RegisterRequest, SearchImagesRequest, UploadImageRequest, UserStatsResponse,
};
pub use services::{
    AuthService, DownloadPayload, ImageService, LikeService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
