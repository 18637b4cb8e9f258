mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{sample_hotel, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_create_then_fetch_roundtrip() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let created = app.create_hotel(&token, sample_hotel("Grand Pune", "Pune", 5000)).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.send("GET", &format!("/api/hotels/{id}"), None, None).await;

    assert_eq!(status, StatusCode::OK);
    let fetched = &body["data"];
    assert_eq!(fetched["name"], json!("Grand Pune"));
    assert_eq!(fetched["ownerId"], json!(user_id));
    assert_eq!(fetched["address"]["city"], json!("Pune"));
    assert_eq!(fetched["address"]["zipCode"], json!("411001"));
    assert_eq!(fetched["amenities"], json!(["wifi", "parking"]));
    assert_eq!(fetched["images"], json!(["http://img.example/1.jpg"]));
    assert_eq!(fetched["priceRange"], json!({ "min": 2500, "max": 5000 }));
    assert_eq!(fetched["rating"], json!(0.0));
}

#[tokio::test]
async fn test_create_requires_auth() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send("POST", "/api/hotels", None, Some(sample_hotel("Grand Pune", "Pune", 5000)))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_without_images_is_rejected_before_persistence() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let mut payload = sample_hotel("Grand Pune", "Pune", 5000);
    payload["images"] = json!([]);

    let (status, _) = app.send("POST", "/api/hotels", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.send("GET", "/api/hotels", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_with_location_string_fills_placeholders() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let payload = json!({
        "name": "Two Part Inn",
        "description": "Address given as free text",
        "location": "12 FC Road, Pune",
        "images": ["http://img.example/1.jpg"],
        "priceRange": { "min": 1000, "max": 2000 }
    });

    let created = app.create_hotel(&token, payload).await;
    assert_eq!(created["address"]["street"], json!("12 FC Road"));
    assert_eq!(created["address"]["city"], json!("Pune"));
    assert_eq!(created["address"]["state"], json!("Unknown State"));
    assert_eq!(created["address"]["zipCode"], json!("00000"));
    assert_eq!(created["address"]["country"], json!("Unknown Country"));
}

#[tokio::test]
async fn test_create_with_insufficient_location_is_rejected() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let payload = json!({
        "name": "One Part Inn",
        "description": "Not enough location detail",
        "location": "Pune",
        "images": ["http://img.example/1.jpg"]
    });

    let (status, _) = app.send("POST", "/api/hotels", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.send("GET", "/api/hotels", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_without_address_or_location_is_rejected() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let payload = json!({
        "name": "Nowhere Inn",
        "description": "No address at all",
        "images": ["http://img.example/1.jpg"]
    });

    let (status, _) = app.send("POST", "/api/hotels", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_owner_only() {
    let app = TestApp::new().await;
    let (owner_token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;
    let (other_token, _) = app.register("Bela Shah", "bela@example.com", "s3cret-pass").await;

    let created = app.create_hotel(&owner_token, sample_hotel("Grand Pune", "Pune", 5000)).await;
    let id = created["id"].as_str().unwrap();

    // non-owner update is forbidden
    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/hotels/{id}"),
            Some(&other_token),
            Some(json!({ "name": "Hijacked" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // owner update succeeds and is visible on fetch
    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/hotels/{id}"),
            Some(&owner_token),
            Some(json!({ "name": "Grand Pune Deluxe", "rating": 4.5 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Grand Pune Deluxe"));

    let (_, body) = app.send("GET", &format!("/api/hotels/{id}"), None, None).await;
    assert_eq!(body["data"]["name"], json!("Grand Pune Deluxe"));
    assert_eq!(body["data"]["rating"], json!(4.5));
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    let created = app.create_hotel(&token, sample_hotel("Grand Pune", "Pune", 5000)).await;
    let id = created["id"].as_str().unwrap();

    let (_, body) = app
        .send(
            "PUT",
            &format!("/api/hotels/{id}"),
            Some(&token),
            Some(json!({ "description": "Renovated in 2026" })),
        )
        .await;

    assert_eq!(body["data"]["description"], json!("Renovated in 2026"));
    assert_eq!(body["data"]["name"], json!("Grand Pune"));
    assert_eq!(body["data"]["address"]["city"], json!("Pune"));
    assert_eq!(body["data"]["amenities"], json!(["wifi", "parking"]));
}

#[tokio::test]
async fn test_ownerless_hotel_is_not_editable() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    // legacy record created before ownership existed
    sqlx::query(
        "INSERT INTO hotels (id, owner_id, name, description, street, city, state, zip_code, country, \
         amenities, images, rating, price_min, price_max, created_at, updated_at) \
         VALUES (?, NULL, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind("legacy-1")
    .bind("Legacy Lodge")
    .bind("Imported from the old system")
    .bind("1 Old Road")
    .bind("Pune")
    .bind("Maharashtra")
    .bind("411001")
    .bind("India")
    .bind("[]")
    .bind("[\"http://img.example/legacy.jpg\"]")
    .bind(3.0_f64)
    .bind(1000_i64)
    .bind(2000_i64)
    .bind(Utc::now())
    .bind(Utc::now())
    .execute(&app.pool)
    .await
    .unwrap();

    let (status, _) = app
        .send(
            "PUT",
            "/api/hotels/legacy-1",
            Some(&token),
            Some(json!({ "name": "Claimed" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.send("DELETE", "/api/hotels/legacy-1", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_owner_only_and_second_delete_is_not_found() {
    let app = TestApp::new().await;
    let (owner_token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;
    let (other_token, _) = app.register("Bela Shah", "bela@example.com", "s3cret-pass").await;

    let created = app.create_hotel(&owner_token, sample_hotel("Grand Pune", "Pune", 5000)).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = app
        .send("DELETE", &format!("/api/hotels/{id}"), Some(&other_token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send("DELETE", &format!("/api/hotels/{id}"), Some(&owner_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .send("DELETE", &format!("/api/hotels/{id}"), Some(&owner_token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send("GET", &format!("/api/hotels/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_all_is_newest_first() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;

    app.create_hotel(&token, sample_hotel("First", "Pune", 1000)).await;
    app.create_hotel(&token, sample_hotel("Second", "Pune", 2000)).await;
    app.create_hotel(&token, sample_hotel("Third", "Pune", 3000)).await;

    let (status, body) = app.send("GET", "/api/hotels", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_my_hotels_only_lists_callers_records() {
    let app = TestApp::new().await;
    let (a_token, _) = app.register("Asha Rao", "asha@example.com", "s3cret-pass").await;
    let (b_token, _) = app.register("Bela Shah", "bela@example.com", "s3cret-pass").await;

    app.create_hotel(&a_token, sample_hotel("Asha's Place", "Pune", 2000)).await;
    app.create_hotel(&b_token, sample_hotel("Bela's Place", "Mumbai", 3000)).await;

    let (status, body) = app.send("GET", "/api/hotels/mine", Some(&a_token), None).await;
    assert_eq!(status, StatusCode::OK);

    let hotels = body["data"].as_array().unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0]["name"], json!("Asha's Place"));
}
