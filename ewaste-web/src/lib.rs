//! HTTP front end for the ewaste household survey.

/// Server settings.
pub mod config;
/// Survey form parsing.
pub mod form;
/// Request handlers.
pub mod handlers;
/// HTML rendering.
pub mod views;

use axum::{
    Router,
    routing::{get, post},
};
use ewaste_core::EwasteService;
use tower_http::trace::TraceLayer;

/// Build the application router around a loaded service.
pub fn router(service: EwasteService) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calculate", post(handlers::calculate))
        .route("/api/estimate", post(handlers::api_estimate))
        .route("/api/reference", get(handlers::api_reference))
        .route("/health", get(handlers::health))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}
