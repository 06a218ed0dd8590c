use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockpilot_core::DomainError;
use stockpilot_store::StoreError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::UnknownWarehouse(token) => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_warehouse",
            format!("unknown warehouse: {token}"),
        ),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!("storage failure: {err}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", err.to_string())
}
