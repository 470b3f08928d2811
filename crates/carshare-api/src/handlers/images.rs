//! Image handlers
//!
//! Gallery browsing, uploads, deletion, and file serving at quality tiers.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use carshare_core::QualityTier;
use carshare_service::{
    DownloadCountResponse, ImageResponse, ImageService, SearchImagesRequest, UploadImageRequest,
};
use validator::Validate;

use crate::extractors::{AuthUser, ImageIdPath, OptionalAuthUser};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Browse or search the gallery
///
/// GET /images?q=...&category=...
pub async fn list_images(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Query(request): Query<SearchImagesRequest>,
) -> ApiResult<Json<Vec<ImageResponse>>> {
    let service = ImageService::new(state.service_context());
    let response = service.gallery(viewer.user_id(), request).await?;
    Ok(Json(response))
}

/// Get a single image's metadata
///
/// GET /images/:image_id
pub async fn get_image(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(path): Path<ImageIdPath>,
) -> ApiResult<Json<ImageResponse>> {
    let service = ImageService::new(state.service_context());
    let response = service.get_image(path.image_id()?, viewer.user_id()).await?;
    Ok(Json(response))
}

/// Upload a new image
///
/// POST /images (multipart/form-data with a `file` part and metadata fields)
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Created<Json<ImageResponse>>> {
    let (request, content_type, data) = read_upload(multipart).await?;
    request.validate()?;

    let service = ImageService::new(state.service_context());
    let response = service
        .upload(auth.user_id, request, &content_type, data)
        .await?;
    Ok(Created(Json(response)))
}

/// Delete an image owned by the current user
///
/// DELETE /images/:image_id
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ImageIdPath>,
) -> ApiResult<NoContent> {
    let service = ImageService::new(state.service_context());
    service.delete(auth.user_id, path.image_id()?).await?;
    Ok(NoContent)
}

/// Quality tier query parameter
#[derive(Debug, Default, serde::Deserialize)]
pub struct QualityQuery {
    pub quality: Option<String>,
}

/// Serve the image bytes, optionally resized to a quality tier
///
/// GET /images/:image_id/file?quality=high
pub async fn get_image_file(
    State(state): State<AppState>,
    Path(path): Path<ImageIdPath>,
    Query(query): Query<QualityQuery>,
) -> ApiResult<Response> {
    let tier = match query.quality.as_deref() {
        None => QualityTier::Original,
        Some(raw) => raw
            .parse::<QualityTier>()
            .map_err(|_| ApiError::invalid_query(format!("Unknown quality tier: {raw}")))?,
    };

    let service = ImageService::new(state.service_context());
    let payload = service.download(path.image_id()?, tier).await?;

    let disposition = format!("inline; filename=\"{}\"", payload.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, payload.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload.bytes,
    )
        .into_response())
}

/// Record a completed download
///
/// POST /images/:image_id/downloads
pub async fn increment_download(
    State(state): State<AppState>,
    Path(path): Path<ImageIdPath>,
) -> ApiResult<Json<DownloadCountResponse>> {
    let service = ImageService::new(state.service_context());
    let response = service.increment_download(path.image_id()?).await?;
    Ok(Json(response))
}

/// Pull the metadata fields and file bytes out of the multipart body
async fn read_upload(
    mut multipart: Multipart,
) -> ApiResult<(UploadImageRequest, String, Vec<u8>)> {
    let mut image_name = None;
    let mut description = None;
    let mut category = None;
    let mut hashtags = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_multipart(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;
                file = Some((content_type, bytes.to_vec()));
            }
            "image_name" => image_name = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "category" => category = Some(read_text(field).await?),
            "hashtags" => {
                let raw = read_text(field).await?;
                hashtags = Some(
                    raw.split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>(),
                );
            }
            _ => {}
        }
    }

    let (content_type, data) =
        file.ok_or_else(|| ApiError::invalid_multipart("Missing file part"))?;

    let request = UploadImageRequest {
        image_name: image_name
            .ok_or_else(|| ApiError::invalid_multipart("Missing image_name field"))?,
        description,
        category: category.ok_or_else(|| ApiError::invalid_multipart("Missing category field"))?,
        hashtags,
    };

    Ok((request, content_type, data))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::invalid_multipart(e.to_string()))
}
