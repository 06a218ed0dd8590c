//! Barcode tracking: the reconciliation report and the flat event timeline.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::routes::common::resolve_warehouse;
use crate::app::services::{AppServices, ReportError};
use crate::app::{dto, errors};

/// `GET /track?barcode=<code>&warehouse=<token>` — derived totals plus the
/// raw per-source detail.
pub async fn report(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::TrackQuery>,
) -> axum::response::Response {
    let warehouse = match resolve_warehouse(q.warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    let barcode = q.barcode.as_deref().map(str::trim).unwrap_or("");
    if barcode.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "barcode parameter is required",
        );
    }

    match services.track_report(warehouse, barcode).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(ReportError::NotFound) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "barcode not found in inventory for this warehouse",
        ),
        Err(ReportError::Store(e)) => errors::store_error_to_response(e),
    }
}

/// `GET /track/:barcode?warehouse=<token>` — chronologically sorted flat
/// event log across all sources.
pub async fn timeline(
    Extension(services): Extension<Arc<AppServices>>,
    Path(barcode): Path<String>,
    Query(q): Query<dto::WarehouseQuery>,
) -> axum::response::Response {
    let warehouse = match resolve_warehouse(q.warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    match services.track_timeline(warehouse, barcode.trim()).await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
