use crate::domain::models::{hotel::Hotel, upload::StoredImage, user::User};
use crate::domain::services::search::SearchCriteria;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn create(&self, hotel: &Hotel) -> Result<Hotel, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError>;
    async fn list_all(&self) -> Result<Vec<Hotel>, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Hotel>, AppError>;
    /// Pre-filters on the criteria's scalar fields; amenity matching,
    /// sorting and pagination happen in `services::search::apply`.
    async fn filter(&self, criteria: &SearchCriteria) -> Result<Vec<Hotel>, AppError>;
    async fn update(&self, hotel: &Hotel) -> Result<Hotel, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<StoredImage, AppError>;
    async fn delete(&self, filename: &str) -> Result<(), AppError>;
}
