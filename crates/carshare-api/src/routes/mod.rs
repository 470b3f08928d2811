//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, health, images, likes, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(image_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/images", get(users::get_current_user_images))
        .route("/users/@me/stats", get(users::get_current_user_stats))
}

/// Image and gallery routes
fn image_routes() -> Router<AppState> {
    Router::new()
        // Gallery and upload
        .route("/images", get(images::list_images))
        .route("/images", post(images::upload_image))
        // Image CRUD
        .route("/images/:image_id", get(images::get_image))
        .route("/images/:image_id", delete(images::delete_image))
        // File serving at quality tiers
        .route("/images/:image_id/file", get(images::get_image_file))
        // Download tracking
        .route("/images/:image_id/downloads", post(images::increment_download))
        // Likes
        .route("/images/:image_id/like", post(likes::toggle_like))
}
