//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: stock service construction (store, clock, pricing policy)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and input parsing
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, http::HeaderValue, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(cfg: &AppConfig) -> Router {
    let services = Arc::new(services::build_services(cfg.pricing.clone()));
    build_router(services, &cfg.cors_origins())
}

/// Router over pre-built services (tests inject a fixed clock here).
pub fn build_router(services: Arc<services::AppServices>, cors_origins: &[HeaderValue]) -> Router {
    Router::new()
        .route("/", get(routes::system::banner))
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origins)),
        )
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    if origins.is_empty() {
        tracing::info!("no CORS origins configured; allowing any origin");
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(origins.to_vec())
        .allow_methods(Any)
        .allow_headers(Any)
}
