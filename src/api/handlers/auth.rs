use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::dtos::responses::{ApiEnvelope, AuthData};
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::domain::models::user::User;
use crate::domain::services::auth_service::AuthService;
use crate::error::AppError;
use crate::state::AppState;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = AuthService::hash_password(&payload.password)?;
    let user = User::new(payload.name, payload.email, password_hash, payload.phone);
    let created = state.user_repo.create(&user).await?;

    let token = state.auth_service.issue(&created.id)?;

    info!("User registered: {}", created.id);

    Ok(Json(ApiEnvelope::with_message(
        "Account created",
        AuthData { user: created, token },
    )))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state
        .user_repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid credentials".into()))?;

    if !AuthService::verify_password(&user.password_hash, &payload.password) {
        return Err(AppError::Unauthorized("invalid credentials".into()));
    }

    let token = state.auth_service.issue(&user.id)?;

    info!("User logged in: {}", user.id);

    Ok(Json(ApiEnvelope::with_message(
        "Login successful",
        AuthData { user, token },
    )))
}

pub async fn me(AuthUser(user): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(ApiEnvelope::data(user)))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    Ok(Json(ApiEnvelope::data(users)))
}
