//! Like handlers
//!
//! Toggling likes on gallery images.

use axum::{extract::Path, extract::State, Json};
use carshare_service::{LikeService, LikeToggleResponse};

use crate::extractors::{AuthUser, ImageIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle the current user's like on an image
///
/// POST /images/:image_id/like
///
/// The response carries the authoritative like state and count, which
/// clients use to reconcile any optimistic UI update.
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ImageIdPath>,
) -> ApiResult<Json<LikeToggleResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.toggle(auth.user_id, path.image_id()?).await?;
    Ok(Json(response))
}
