mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;

    let (_, user_id) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "asha@example.com", "password": "s3cret-pass" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["id"], json!(user_id));
    assert!(body["data"]["token"].as_str().is_some());
    // the password hash must never appear in a response
    assert!(body["data"]["user"].get("passwordHash").is_none());
    assert!(body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let app = TestApp::new().await;
    app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "asha@example.com", "password": "wrong-pass" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new().await;
    app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Another Asha",
                "email": "asha@example.com",
                "password": "other-pass",
                "phone": "9123456780"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_register_validation_violations_are_listed() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "",
                "email": "not-an-email",
                "password": "ab",
                "phone": "12"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let violations = body["errors"].as_array().expect("field violations");
    assert!(violations.len() >= 3);
    assert!(violations.iter().all(|v| v["field"].is_string() && v["message"].is_string()));
}

#[tokio::test]
async fn test_me_resolves_token_to_same_user() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, body) = app.send("GET", "/api/auth/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!(user_id));
    assert_eq!(body["data"]["email"], json!("asha@example.com"));
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, body) = app.send("GET", "/api/auth/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("no token"));
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    // flip the last character of the signature
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let (status, body) = app.send("GET", "/api/auth/me", Some(&tampered), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("invalid token"));
}

#[tokio::test]
async fn test_valid_token_for_deleted_user_is_rejected() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(&user_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, body) = app.send("GET", "/api/auth/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("user not found"));
}

#[tokio::test]
async fn test_user_listing_is_admin_only() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let (status, _) = app.send("GET", "/api/auth/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    sqlx::query("UPDATE users SET role = 'admin' WHERE id = ?")
        .bind(&user_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, body) = app.send("GET", "/api/auth/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
