use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    classify::ServerErrorsFailureClass,
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::api::handlers::{auth, health, hotel, upload};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_dir = state.config.upload_dir.clone();

    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/users", get(auth::list_users))

        // Hotels
        .route("/api/hotels", get(hotel::list_hotels).post(hotel::create_hotel))
        .route("/api/hotels/search", get(hotel::search_hotels))
        .route("/api/hotels/mine", get(hotel::my_hotels))
        .route("/api/hotels/{id}", get(hotel::get_hotel).put(hotel::update_hotel).delete(hotel::delete_hotel))

        // Uploads
        .route("/api/upload/single", post(upload::upload_single))
        .route("/api/upload/multiple", post(upload::upload_multiple))
        .route("/api/upload/{filename}", delete(upload::delete_upload))

        // Stored images are public once uploaded
        .nest_service("/uploads", ServeDir::new(upload_dir))

        .layer(DefaultBodyLimit::max(upload::MAX_UPLOAD_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
