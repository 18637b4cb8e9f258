use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::api::dtos::requests::{CreateHotelRequest, SearchParams, UpdateHotelRequest};
use crate::api::dtos::responses::ApiEnvelope;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::hotel::{Address, Hotel, NewHotelParams, PriceRange};
use crate::domain::models::user::User;
use crate::domain::services::location::parse_location;
use crate::domain::services::search::{
    self, SearchCriteria, SortField, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_hotels(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.hotel_repo.list_all().await?;
    Ok(Json(ApiEnvelope::data(hotels)))
}

pub async fn search_hotels(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let criteria = criteria_from(params)?;
    let candidates = state.hotel_repo.filter(&criteria).await?;
    let page = search::apply(&criteria, candidates);

    Ok(Json(ApiEnvelope::page(page.items, page.pagination)))
}

pub async fn my_hotels(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.hotel_repo.list_by_owner(&user.id).await?;
    Ok(Json(ApiEnvelope::data(hotels)))
}

pub async fn get_hotel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state
        .hotel_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".into()))?;

    Ok(Json(ApiEnvelope::data(hotel)))
}

pub async fn create_hotel(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateHotelRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let address: Address = match (payload.address, payload.location.as_deref()) {
        (Some(input), _) => input.into(),
        (None, Some(location)) => parse_location(location)?,
        (None, None) => {
            return Err(AppError::Validation(
                "either address or location is required".into(),
            ))
        }
    };

    let hotel = Hotel::new(NewHotelParams {
        owner_id: user.id,
        name: payload.name,
        description: payload.description,
        address,
        amenities: payload.amenities.unwrap_or_default(),
        images: payload.images,
        price_range: payload
            .price_range
            .map(Into::into)
            .unwrap_or(PriceRange { min: 0, max: 0 }),
    });

    let created = state.hotel_repo.create(&hotel).await?;

    info!("Hotel created: {}", created.id);

    Ok(Json(ApiEnvelope::with_message("Hotel created", created)))
}

pub async fn update_hotel(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateHotelRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut hotel = state
        .hotel_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".into()))?;

    ensure_owned_by(&hotel, &user)?;

    if let Some(name) = payload.name {
        hotel.name = name;
    }
    if let Some(description) = payload.description {
        hotel.description = description;
    }
    if let Some(address) = payload.address {
        hotel.address = address.into();
    }
    if let Some(amenities) = payload.amenities {
        hotel.amenities = amenities;
    }
    if let Some(images) = payload.images {
        hotel.images = images;
    }
    if let Some(rating) = payload.rating {
        hotel.rating = rating;
    }
    if let Some(price_range) = payload.price_range {
        hotel.price_range = price_range.into();
    }
    hotel.updated_at = Utc::now();

    let updated = state.hotel_repo.update(&hotel).await?;

    info!("Hotel updated: {}", updated.id);

    Ok(Json(ApiEnvelope::with_message("Hotel updated", updated)))
}

pub async fn delete_hotel(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state
        .hotel_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".into()))?;

    ensure_owned_by(&hotel, &user)?;

    state.hotel_repo.delete(&hotel.id).await?;

    info!("Hotel deleted: {}", hotel.id);

    Ok(Json(ApiEnvelope::with_message(
        "Hotel deleted",
        json!({ "id": hotel.id }),
    )))
}

fn ensure_owned_by(hotel: &Hotel, user: &User) -> Result<(), AppError> {
    match hotel.owner_id.as_deref() {
        None => Err(AppError::Forbidden(
            "hotel has no owner and cannot be edited".into(),
        )),
        Some(owner) if owner != user.id => Err(AppError::Forbidden(
            "only the owner can modify this hotel".into(),
        )),
        Some(_) => Ok(()),
    }
}

fn criteria_from(params: SearchParams) -> Result<SearchCriteria, AppError> {
    let sort = match params.sort_by.as_deref() {
        None => SortField::CreatedAt,
        Some(raw) => SortField::parse(raw)
            .ok_or_else(|| AppError::Validation(format!("unknown sort field: {raw}")))?,
    };
    let order = match params.order.as_deref() {
        None => SortOrder::Desc,
        Some(raw) => SortOrder::parse(raw)
            .ok_or_else(|| AppError::Validation(format!("unknown sort order: {raw}")))?,
    };

    if let Some(min_rating) = params.min_rating {
        if !(0.0..=5.0).contains(&min_rating) {
            return Err(AppError::Validation("minRating must be between 0 and 5".into()));
        }
    }

    let non_empty = |value: Option<String>| value.filter(|s| !s.trim().is_empty());

    let amenities = params
        .amenities
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(SearchCriteria {
        query: non_empty(params.q),
        city: non_empty(params.city),
        state: non_empty(params.state),
        country: non_empty(params.country),
        min_rating: params.min_rating,
        max_price: params.max_price,
        amenities,
        sort,
        order,
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
    })
}
