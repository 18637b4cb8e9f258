use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::hotel::{Address, Hotel, PriceRange};
use crate::error::AppError;

/// Flat database image of a hotel. The nested/array fields (amenities,
/// images) live in JSON-encoded text columns; both backends share this
/// row shape.
#[derive(Debug, FromRow)]
pub struct HotelRow {
    pub id: String,
    pub owner_id: Option<String>,
    pub name: String,
    pub description: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub amenities: String,
    pub images: String,
    pub rating: f64,
    pub price_min: i64,
    pub price_max: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const HOTEL_COLUMNS: &str = "id, owner_id, name, description, street, city, state, zip_code, country, amenities, images, rating, price_min, price_max, created_at, updated_at";

impl HotelRow {
    pub fn into_hotel(self) -> Result<Hotel, AppError> {
        let amenities: Vec<String> = serde_json::from_str(&self.amenities).map_err(|_| {
            AppError::InternalWithMsg(format!("corrupt amenities column on hotel {}", self.id))
        })?;
        let images: Vec<String> = serde_json::from_str(&self.images).map_err(|_| {
            AppError::InternalWithMsg(format!("corrupt images column on hotel {}", self.id))
        })?;

        Ok(Hotel {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            address: Address {
                street: self.street,
                city: self.city,
                state: self.state,
                zip_code: self.zip_code,
                country: self.country,
            },
            amenities,
            images,
            rating: self.rating,
            price_range: PriceRange {
                min: self.price_min,
                max: self.price_max,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

pub fn rows_into_hotels(rows: Vec<HotelRow>) -> Result<Vec<Hotel>, AppError> {
    rows.into_iter().map(HotelRow::into_hotel).collect()
}

pub fn encode_json_list(values: &[String]) -> Result<String, AppError> {
    serde_json::to_string(values).map_err(|_| AppError::Internal)
}
