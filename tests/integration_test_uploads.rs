mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn png_bytes() -> Vec<u8> {
    // magic header followed by junk is enough for storage tests
    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&[0u8; 128]);
    data
}

fn stored_file_count(app: &TestApp) -> usize {
    std::fs::read_dir(app.upload_dir.path()).unwrap().count()
}

#[tokio::test]
async fn test_upload_single_stores_file_and_serves_it() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, body) = app
        .upload(
            "/api/upload/single",
            Some(&token),
            &[("image", "beach.png", "image/png", png_bytes())],
        )
        .await;

    assert_eq!(status, StatusCode::OK, "upload failed: {body}");
    let stored = &body["data"];
    assert_eq!(stored["originalName"], json!("beach.png"));
    assert_eq!(stored["size"], json!(136));
    let filename = stored["filename"].as_str().unwrap();
    assert!(filename.ends_with(".png"));
    assert_eq!(
        stored["url"],
        json!(format!("http://localhost:3000/uploads/{filename}"))
    );

    // the stored file is publicly reachable
    let (status, _) = app.send("GET", &format!("/uploads/{filename}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_upload_requires_auth() {
    let app = TestApp::new().await;

    let (status, _) = app
        .upload(
            "/api/upload/single",
            None,
            &[("image", "beach.png", "image/png", png_bytes())],
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(stored_file_count(&app), 0);
}

#[tokio::test]
async fn test_non_image_content_type_is_rejected_before_write() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, body) = app
        .upload(
            "/api/upload/single",
            Some(&token),
            &[("image", "notes.txt", "text/plain", b"hello".to_vec())],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(stored_file_count(&app), 0);
}

#[tokio::test]
async fn test_oversize_image_is_rejected_before_write() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let oversized = vec![0u8; 5 * 1024 * 1024 + 1];
    let (status, _) = app
        .upload(
            "/api/upload/single",
            Some(&token),
            &[("image", "huge.png", "image/png", oversized)],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(stored_file_count(&app), 0);
}

#[tokio::test]
async fn test_upload_multiple_stores_every_file() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, body) = app
        .upload(
            "/api/upload/multiple",
            Some(&token),
            &[
                ("images", "one.png", "image/png", png_bytes()),
                ("images", "two.jpg", "image/jpeg", png_bytes()),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let stored = body["data"].as_array().unwrap();
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0]["filename"], stored[1]["filename"]);
    assert_eq!(stored_file_count(&app), 2);
}

#[tokio::test]
async fn test_one_bad_file_fails_the_whole_batch() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, _) = app
        .upload(
            "/api/upload/multiple",
            Some(&token),
            &[
                ("images", "one.png", "image/png", png_bytes()),
                ("images", "virus.exe", "application/octet-stream", b"MZ".to_vec()),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(stored_file_count(&app), 0);
}

#[tokio::test]
async fn test_delete_upload_then_second_delete_is_not_found() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (_, body) = app
        .upload(
            "/api/upload/single",
            Some(&token),
            &[("image", "beach.png", "image/png", png_bytes())],
        )
        .await;
    let filename = body["data"]["filename"].as_str().unwrap().to_string();

    let (status, _) = app
        .send("DELETE", &format!("/api/upload/{filename}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored_file_count(&app), 0);

    let (status, _) = app
        .send("DELETE", &format!("/api/upload/{filename}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_upload_requires_auth() {
    let app = TestApp::new().await;

    let (status, _) = app.send("DELETE", "/api/upload/some.png", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
