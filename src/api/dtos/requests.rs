use serde::Deserialize;
use validator::Validate;

use crate::domain::models::hotel::{Address, PriceRange};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 7, max = 20, message = "a valid phone number is required"))]
    pub phone: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "zipCode is required"))]
    pub zip_code: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
}

impl From<AddressInput> for Address {
    fn from(input: AddressInput) -> Self {
        Address {
            street: input.street,
            city: input.city,
            state: input.state,
            zip_code: input.zip_code,
            country: input.country,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeInput {
    pub min: i64,
    pub max: i64,
}

impl From<PriceRangeInput> for PriceRange {
    fn from(input: PriceRangeInput) -> Self {
        PriceRange {
            min: input.min,
            max: input.max,
        }
    }
}

/// Either a structured `address` or a free-text `location` must be present;
/// the handler enforces that and the comma-splitting policy.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(nested)]
    pub address: Option<AddressInput>,
    pub location: Option<String>,
    pub amenities: Option<Vec<String>>,
    #[validate(length(min = 1, message = "at least one image is required"))]
    pub images: Vec<String>,
    pub price_range: Option<PriceRangeInput>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotelRequest {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(nested)]
    pub address: Option<AddressInput>,
    pub amenities: Option<Vec<String>>,
    #[validate(length(min = 1, message = "at least one image is required"))]
    pub images: Option<Vec<String>>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    pub price_range: Option<PriceRangeInput>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub min_rating: Option<f64>,
    pub max_price: Option<i64>,
    /// Comma-separated list, e.g. `amenities=wifi,pool`.
    pub amenities: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
