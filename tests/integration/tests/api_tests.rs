//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.email, request.email);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &first).await.unwrap();

    // Same username, different email
    let mut second = RegisterRequest::unique();
    second.username = first.username.clone();

    let response = server.post("/api/v1/auth/register", &second).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // The rejected registration must not leave a usable account behind
    let login = LoginRequest::from_register(&second);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Refresh
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!refreshed.access_token.is_empty());
    assert!(!refreshed.refresh_token.is_empty());

    // The used refresh token is rotated out
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Logout with the refresh token
    let logout_req = LogoutRequest {
        refresh_token: Some(auth.refresh_token.clone()),
    };
    let response = server
        .post_auth("/api/v1/auth/logout", &auth.access_token, &logout_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Refreshing with the revoked token fails even though the JWT is valid
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, auth.user.username);
}

#[tokio::test]
async fn test_current_user_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Image Upload and Gallery Tests
// ============================================================================

#[tokio::test]
async fn test_upload_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(image.image_name, upload.image_name);
    assert_eq!(image.category, "Sedan");
    assert_eq!(image.uploader_name, auth.user.username);
    assert_eq!(image.like_count, 0);
    assert_eq!(image.download_count, 0);
    assert!(!image.liked_by_viewer);
    assert_eq!(image.file_url, format!("/api/v1/images/{}/file", image.id));
}

#[tokio::test]
async fn test_upload_rejects_unknown_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique().with_category("Minivan");
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let upload = UploadFixture::unique();
    let response = server.upload_image("not-a-token", &upload).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_gallery_lists_uploaded_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let uploaded: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Anonymous browse sees the image with liked_by_viewer false
    let response = server.get("/api/v1/images").await.unwrap();
    let gallery: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let found = gallery
        .iter()
        .find(|img| img.id == uploaded.id)
        .expect("Uploaded image missing from gallery");
    assert_eq!(found.uploader_name, auth.user.username);
    assert!(!found.liked_by_viewer);
}

#[tokio::test]
async fn test_gallery_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let marker = format!("Zonda{}", unique_suffix());
    let upload = UploadFixture::unique()
        .with_name(&marker)
        .with_category("Classic");
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let uploaded: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Name substring match
    let response = server
        .get(&format!("/api/v1/images?q={}", marker.to_lowercase()))
        .await
        .unwrap();
    let results: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.iter().any(|img| img.id == uploaded.id));

    // Category filter
    let response = server.get("/api/v1/images?category=Classic").await.unwrap();
    let results: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.iter().any(|img| img.id == uploaded.id));
    assert!(results.iter().all(|img| img.category == "Classic"));

    // "all" disables the category filter
    let response = server.get("/api/v1/images?category=all").await.unwrap();
    let results: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.iter().any(|img| img.id == uploaded.id));

    // Non-matching query excludes it
    let response = server
        .get("/api/v1/images?q=nosuchcaranywhere")
        .await
        .unwrap();
    let results: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!results.iter().any(|img| img.id == uploaded.id));
}

#[tokio::test]
async fn test_delete_own_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/images/{}", image.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/images/{}", image.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_other_users_image_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register_user(&server).await;
    let other = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&owner.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/images/{}", image.id), &other.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_toggle_alternates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let like_path = format!("/api/v1/images/{}/like", image.id);

    // First toggle likes
    let response = server
        .post_auth_empty(&like_path, &auth.access_token)
        .await
        .unwrap();
    let toggle: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggle.is_liked);
    assert_eq!(toggle.like_count, 1);

    // Second toggle unlikes
    let response = server
        .post_auth_empty(&like_path, &auth.access_token)
        .await
        .unwrap();
    let toggle: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggle.is_liked);
    assert_eq!(toggle.like_count, 0);
}

#[tokio::test]
async fn test_like_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let url = format!("{}/api/v1/images/{}/like", server.base_url(), image.id);
    let response = server.client.post(&url).send().await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_liked_state_visible_to_viewer_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let liker = register_user(&server).await;
    let other = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&liker.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/api/v1/images/{}/like", image.id),
            &liker.access_token,
        )
        .await
        .unwrap();

    // The liker sees their like in the gallery
    let response = server
        .get_auth("/api/v1/images", &liker.access_token)
        .await
        .unwrap();
    let gallery: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let found = gallery.iter().find(|img| img.id == image.id).unwrap();
    assert!(found.liked_by_viewer);
    assert_eq!(found.like_count, 1);

    // Another user sees the count but not a personal like
    let response = server
        .get_auth("/api/v1/images", &other.access_token)
        .await
        .unwrap();
    let gallery: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let found = gallery.iter().find(|img| img.id == image.id).unwrap();
    assert!(!found.liked_by_viewer);
    assert_eq!(found.like_count, 1);
}

// ============================================================================
// Download Tests
// ============================================================================

#[tokio::test]
async fn test_download_count_increments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/images/{}/downloads", image.id);

    let response = server.post(&path, &serde_json::json!({})).await.unwrap();
    let count: DownloadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.download_count, 1);

    let response = server.post(&path, &serde_json::json!({})).await.unwrap();
    let count: DownloadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.download_count, 2);
}

#[tokio::test]
async fn test_file_download_original_and_tiered() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Original bytes come back unchanged
    let response = server
        .get(&format!("/api/v1/images/{}/file", image.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/png"
    );
    let bytes = response.bytes().await.unwrap();
    assert_eq!(bytes.as_ref(), TINY_PNG);

    // Tiered download re-encodes as JPEG
    let response = server
        .get(&format!("/api/v1/images/{}/file?quality=low", image.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/jpeg"
    );

    // Unknown tier is rejected
    let response = server
        .get(&format!("/api/v1/images/{}/file?quality=ultra", image.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_user_stats_aggregate_uploads() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await;
    let fan = register_user(&server).await;

    let upload = UploadFixture::unique();
    let response = server.upload_image(&auth.access_token, &upload).await.unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/api/v1/images/{}/like", image.id),
            &fan.access_token,
        )
        .await
        .unwrap();
    server
        .post(
            &format!("/api/v1/images/{}/downloads", image.id),
            &serde_json::json!({}),
        )
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/stats", &auth.access_token)
        .await
        .unwrap();
    let stats: UserStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.image_count, 1);
    assert_eq!(stats.total_likes, 1);
    assert_eq!(stats.total_downloads, 1);
}

// ============================================================================
// Helpers
// ============================================================================

async fn register_user(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .expect("Register request failed");
    assert_json(response, StatusCode::CREATED)
        .await
        .expect("Registration failed")
}
