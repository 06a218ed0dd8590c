use axum::{routing::get, Router};

pub mod common;
pub mod damage;
pub mod dispatch;
pub mod inventory;
pub mod ordersheet;
pub mod products;
pub mod returns;
pub mod status;
pub mod system;
pub mod track;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/track", get(track::report))
        .route("/track/:barcode", get(track::timeline))
        .nest("/dispatch", dispatch::router())
        .nest("/inventory", inventory::router())
        .nest("/products", products::router())
        .nest("/returns", returns::router())
        .nest("/damage", damage::router())
        .nest("/status", status::router())
        .nest("/ordersheet", ordersheet::router())
}
