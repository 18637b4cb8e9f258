use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::responses::ApiEnvelope;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const MAX_FILES_PER_UPLOAD: usize = 10;

// Per-file limit times the batch size, plus multipart framing slack.
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_IMAGE_BYTES * MAX_FILES_PER_UPLOAD + 1024 * 1024;

pub async fn upload_single(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut files = collect_images(&mut multipart, 1).await?;
    let (original_name, content_type, data) = files
        .pop()
        .ok_or_else(|| AppError::Validation("no image file in request".into()))?;

    let stored = state
        .image_store
        .store(&original_name, &content_type, &data)
        .await?;

    info!("User {} uploaded {}", user.id, stored.filename);

    Ok(Json(ApiEnvelope::with_message("Image uploaded", stored)))
}

pub async fn upload_multiple(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let files = collect_images(&mut multipart, MAX_FILES_PER_UPLOAD).await?;
    if files.is_empty() {
        return Err(AppError::Validation("no image files in request".into()));
    }

    // Every file was validated during collection, so nothing is written
    // unless the whole batch is acceptable.
    let mut stored = Vec::with_capacity(files.len());
    for (original_name, content_type, data) in &files {
        stored.push(
            state
                .image_store
                .store(original_name, content_type, data)
                .await?,
        );
    }

    info!("User {} uploaded {} images", user.id, stored.len());

    Ok(Json(ApiEnvelope::with_message("Images uploaded", stored)))
}

pub async fn delete_upload(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.image_store.delete(&filename).await?;

    info!("User {} deleted upload {}", user.id, filename);

    Ok(Json(ApiEnvelope::with_message(
        "Image deleted",
        json!({ "filename": filename }),
    )))
}

fn validate_image(name: &str, content_type: &str, size: usize) -> Result<(), AppError> {
    if !content_type.starts_with("image/") {
        return Err(AppError::Validation(format!(
            "{name}: only image uploads are allowed"
        )));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(AppError::Validation(format!(
            "{name}: file exceeds the 5 MB limit"
        )));
    }
    Ok(())
}

async fn collect_images(
    multipart: &mut Multipart,
    limit: usize,
) -> Result<Vec<(String, String, Bytes)>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        validate_image(&original_name, &content_type, data.len())?;

        files.push((original_name, content_type, data));
        if files.len() > limit {
            return Err(AppError::Validation(format!(
                "at most {limit} file(s) per upload"
            )));
        }
    }

    Ok(files)
}
