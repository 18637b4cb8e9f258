use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{HotelRepository, ImageStore, UserRepository};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub hotel_repo: Arc<dyn HotelRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub auth_service: Arc<AuthService>,
}
