//! User handlers
//!
//! Endpoints for the current user's profile, uploads, and statistics.

use axum::{extract::State, Json};
use carshare_service::{
    CurrentUserResponse, ImageResponse, ImageService, UserService, UserStatsResponse,
};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current authenticated user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}

/// List the current user's uploads
///
/// GET /users/@me/images
pub async fn get_current_user_images(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ImageResponse>>> {
    let service = ImageService::new(state.service_context());
    let response = service.list_user_images(auth.user_id).await?;
    Ok(Json(response))
}

/// Aggregate statistics over the current user's uploads
///
/// GET /users/@me/stats
pub async fn get_current_user_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserStatsResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.stats(auth.user_id).await?;
    Ok(Json(response))
}
