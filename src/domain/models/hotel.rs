use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    // Absent on legacy records created before ownership existed; such
    // records are not editable through the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub name: String,
    pub description: String,
    pub address: Address,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub rating: f64,
    pub price_range: PriceRange,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewHotelParams {
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub address: Address,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub price_range: PriceRange,
}

impl Hotel {
    pub fn new(params: NewHotelParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: Some(params.owner_id),
            name: params.name,
            description: params.description,
            address: params.address,
            amenities: params.amenities,
            images: params.images,
            rating: 0.0,
            price_range: params.price_range,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id.as_deref() == Some(user_id)
    }
}
