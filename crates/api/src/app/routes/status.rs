//! Dispatch status override and AWB lookup.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::app::routes::common::resolve_warehouse;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/update", post(update))
        .route("/fetch-awb", get(fetch_awb))
}

pub async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StatusUpdateRequest>,
) -> axum::response::Response {
    let awb = body.awb.as_deref().map(str::trim).unwrap_or("");
    let status = body.new_status.as_deref().map(str::trim).unwrap_or("");
    if awb.is_empty() || status.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "awb, warehouse, and newStatus are required",
        );
    }

    let warehouse = match resolve_warehouse(body.warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    match services.store().update_status(warehouse, awb, status).await {
        Ok(0) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "AWB not found in selected warehouse",
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "success": true, "message": "status updated" })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn fetch_awb(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::AwbQuery>,
) -> axum::response::Response {
    let awb = q.awb.as_deref().map(str::trim).unwrap_or("");
    if awb.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "awb and warehouse are required",
        );
    }

    let warehouse = match resolve_warehouse(q.warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    match services.store().awb_details(warehouse, awb).await {
        Ok(rows) if rows.is_empty() => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "AWB not found in selected warehouse",
        ),
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
