//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: injected storage client + reconciliation orchestration
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use stockpilot_store::Store;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Store) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
