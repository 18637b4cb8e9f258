use std::path::Path;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::types::{AuthData, Envelope, HotelDto, HotelPayload, StoredImageDto, UserInfo};

fn authed(config: &ClientConfig, request: RequestBuilder) -> RequestBuilder {
    match config.token() {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Sends a request and unwraps the API envelope, preferring the server's
/// own error message over the bare HTTP status.
fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, String> {
    let response = request.send().map_err(|e| format!("Network error: {e}"))?;
    let status = response.status();

    let envelope: Envelope<T> = response
        .json()
        .map_err(|e| format!("Failed to parse response: {e}"))?;

    if !status.is_success() || !envelope.success {
        return Err(envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| format!("Request failed: {status}")));
    }

    envelope
        .data
        .ok_or_else(|| "Response was missing data".to_string())
}

pub fn signup(
    config: &ClientConfig,
    name: String,
    email: String,
    password: String,
    phone: String,
) -> Result<AuthData, String> {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": password,
        "phone": phone,
    });

    send(
        Client::new()
            .post(config.api_url("/api/auth/register"))
            .json(&body),
    )
}

pub fn login(config: &ClientConfig, email: String, password: String) -> Result<AuthData, String> {
    let body = serde_json::json!({ "email": email, "password": password });

    send(
        Client::new()
            .post(config.api_url("/api/auth/login"))
            .json(&body),
    )
}

pub fn me(config: &ClientConfig) -> Result<UserInfo, String> {
    send(authed(
        config,
        Client::new().get(config.api_url("/api/auth/me")),
    ))
}

pub fn list_hotels(config: &ClientConfig) -> Result<Vec<HotelDto>, String> {
    send(Client::new().get(config.api_url("/api/hotels")))
}

pub fn my_hotels(config: &ClientConfig) -> Result<Vec<HotelDto>, String> {
    send(authed(
        config,
        Client::new().get(config.api_url("/api/hotels/mine")),
    ))
}

pub fn get_hotel(config: &ClientConfig, id: &str) -> Result<HotelDto, String> {
    send(Client::new().get(config.api_url(&format!("/api/hotels/{id}"))))
}

pub fn create_hotel(config: &ClientConfig, payload: &HotelPayload) -> Result<HotelDto, String> {
    send(authed(
        config,
        Client::new()
            .post(config.api_url("/api/hotels"))
            .json(payload),
    ))
}

pub fn update_hotel(
    config: &ClientConfig,
    id: &str,
    payload: &HotelPayload,
) -> Result<HotelDto, String> {
    send(authed(
        config,
        Client::new()
            .put(config.api_url(&format!("/api/hotels/{id}")))
            .json(payload),
    ))
}

pub fn delete_hotel(config: &ClientConfig, id: &str) -> Result<(), String> {
    let _: serde_json::Value = send(authed(
        config,
        Client::new().delete(config.api_url(&format!("/api/hotels/{id}"))),
    ))?;
    Ok(())
}

pub fn upload_image(config: &ClientConfig, path: &Path) -> Result<StoredImageDto, String> {
    let form = reqwest::blocking::multipart::Form::new()
        .file("image", path)
        .map_err(|e| format!("Could not read {}: {e}", path.display()))?;

    send(authed(
        config,
        Client::new()
            .post(config.api_url("/api/upload/single"))
            .multipart(form),
    ))
}
