use crate::domain::{models::hotel::Hotel, ports::HotelRepository};
use crate::domain::services::search::SearchCriteria;
use crate::error::AppError;
use crate::infra::repositories::hotel_row::{encode_json_list, rows_into_hotels, HotelRow, HOTEL_COLUMNS};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

pub struct SqliteHotelRepo {
    pool: SqlitePool,
}

impl SqliteHotelRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for SqliteHotelRepo {
    async fn create(&self, hotel: &Hotel) -> Result<Hotel, AppError> {
        let row = sqlx::query_as::<_, HotelRow>(&format!(
            "INSERT INTO hotels ({HOTEL_COLUMNS}) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {HOTEL_COLUMNS}"
        ))
            .bind(&hotel.id)
            .bind(&hotel.owner_id)
            .bind(&hotel.name)
            .bind(&hotel.description)
            .bind(&hotel.address.street)
            .bind(&hotel.address.city)
            .bind(&hotel.address.state)
            .bind(&hotel.address.zip_code)
            .bind(&hotel.address.country)
            .bind(encode_json_list(&hotel.amenities)?)
            .bind(encode_json_list(&hotel.images)?)
            .bind(hotel.rating)
            .bind(hotel.price_range.min)
            .bind(hotel.price_range.max)
            .bind(hotel.created_at)
            .bind(hotel.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.into_hotel()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError> {
        let row = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = ?"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.map(HotelRow::into_hotel).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Hotel>, AppError> {
        let rows = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY created_at DESC"
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        rows_into_hotels(rows)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Hotel>, AppError> {
        let rows = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels WHERE owner_id = ? ORDER BY created_at DESC"
        ))
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        rows_into_hotels(rows)
    }

    async fn filter(&self, criteria: &SearchCriteria) -> Result<Vec<Hotel>, AppError> {
        let rows = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels \
             WHERE (?1 IS NULL OR LOWER(name) LIKE '%' || LOWER(?1) || '%' OR LOWER(description) LIKE '%' || LOWER(?1) || '%') \
               AND (?2 IS NULL OR LOWER(city) LIKE '%' || LOWER(?2) || '%') \
               AND (?3 IS NULL OR LOWER(state) LIKE '%' || LOWER(?3) || '%') \
               AND (?4 IS NULL OR LOWER(country) LIKE '%' || LOWER(?4) || '%') \
               AND (?5 IS NULL OR rating >= ?5) \
               AND (?6 IS NULL OR price_max <= ?6) \
             ORDER BY created_at DESC"
        ))
            .bind(criteria.query.as_deref())
            .bind(criteria.city.as_deref())
            .bind(criteria.state.as_deref())
            .bind(criteria.country.as_deref())
            .bind(criteria.min_rating)
            .bind(criteria.max_price)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        rows_into_hotels(rows)
    }

    async fn update(&self, hotel: &Hotel) -> Result<Hotel, AppError> {
        let row = sqlx::query_as::<_, HotelRow>(&format!(
            "UPDATE hotels SET name = ?, description = ?, street = ?, city = ?, state = ?, \
             zip_code = ?, country = ?, amenities = ?, images = ?, rating = ?, \
             price_min = ?, price_max = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING {HOTEL_COLUMNS}"
        ))
            .bind(&hotel.name)
            .bind(&hotel.description)
            .bind(&hotel.address.street)
            .bind(&hotel.address.city)
            .bind(&hotel.address.state)
            .bind(&hotel.address.zip_code)
            .bind(&hotel.address.country)
            .bind(encode_json_list(&hotel.amenities)?)
            .bind(encode_json_list(&hotel.images)?)
            .bind(hotel.rating)
            .bind(hotel.price_range.min)
            .bind(hotel.price_range.max)
            .bind(hotel.updated_at)
            .bind(&hotel.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.into_hotel()
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM hotels WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("SQLite hotel deletion failed: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }
}
