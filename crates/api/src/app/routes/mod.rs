use axum::Router;

pub mod stock;
pub mod system;

/// Router for the `/api` surface.
pub fn router() -> Router {
    Router::new().nest("/stock", stock::router())
}
