//! Inventory snapshot endpoints: insert, full listing, date filter.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::json;

use stockpilot_store::SnapshotInsert;

use crate::app::routes::common::resolve_warehouse;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/insert", post(insert))
        .route("/all", get(all))
        .route("/filter", get(filter))
}

pub async fn insert(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::InventoryInsertRequest>,
) -> axum::response::Response {
    let warehouse = match resolve_warehouse(body.warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    let Some(payload) = body.payload else {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "missing payload");
    };

    if payload.name.trim().is_empty() || payload.code.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "payload name and code are required",
        );
    }

    let created_at = match parse_entry_timestamp(&payload.date, &payload.time) {
        Some(ts) => ts,
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "date/time must be YYYY-MM-DD and HH:MM[:SS]",
            );
        }
    };

    let row = SnapshotInsert {
        product: payload.name.trim().to_string(),
        variant: payload.variant.trim().to_string(),
        code: payload.code.trim().to_string(),
        stock: payload.stock,
        warehouse: warehouse.stored_label().to_string(),
        opening: payload.opening,
        returned: payload.returned,
        created_at: Utc.from_utc_datetime(&created_at),
    };

    match services.store().insert_snapshot(warehouse, &row).await {
        Ok(id) => (
            StatusCode::OK,
            Json(json!({ "success": true, "insertedId": id })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn all(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::WarehouseQuery>,
) -> axum::response::Response {
    let warehouse = match resolve_warehouse(q.warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    match services.store().list_inventory(warehouse).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn filter(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::InventoryFilterQuery>,
) -> axum::response::Response {
    let warehouse = match resolve_warehouse(q.warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    let date = match q
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d"))
    {
        Some(Ok(date)) => date,
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "date is required and must be YYYY-MM-DD",
            );
        }
    };

    match services
        .store()
        .filter_inventory(warehouse, date, q.product.as_deref())
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn parse_entry_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let joined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&joined, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&joined, "%Y-%m-%d %H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::parse_entry_timestamp;

    #[test]
    fn parses_with_and_without_seconds() {
        assert!(parse_entry_timestamp("2024-03-01", "10:30").is_some());
        assert!(parse_entry_timestamp("2024-03-01", "10:30:15").is_some());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_entry_timestamp("01-03-2024", "10:30").is_none());
        assert!(parse_entry_timestamp("2024-03-01", "").is_none());
    }
}
