pub mod auth_service;
pub mod location;
pub mod search;
