//! Dispatch submission and its entry-form lookups.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use stockpilot_core::Warehouse;
use stockpilot_store::{CatalogRow, DispatchLineInsert};

use crate::app::dto::{self, AdjustmentOutcome};
use crate::app::routes::common::resolve_warehouse;
use crate::app::services::AppServices;
use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/warehouses", get(warehouses))
        .route("/logistics", get(logistics))
        .route("/payment-modes", get(payment_modes))
        .route("/processed-persons", get(processed_persons))
        .route("/search-products", get(search_products))
        .route("/push", post(push))
}

pub async fn warehouses() -> impl IntoResponse {
    let names: Vec<&'static str> = Warehouse::ALL.iter().map(|w| w.display_name()).collect();
    Json(names)
}

pub async fn logistics(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().logistics_names().await {
        Ok(names) => Json(names).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn payment_modes(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().payment_modes().await {
        Ok(modes) => Json(modes).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn processed_persons(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().processed_persons().await {
        Ok(names) => Json(names).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Gap-tolerant catalog search for the dispatch entry form.
pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let query = q.query.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        return Json(Vec::<CatalogRow>::new()).into_response();
    }
    match services.store().search_catalog_fuzzy(query).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `POST /dispatch/push` — submit one shipment (one or more lines under a
/// single AWB).
///
/// The AWB must be unique across every warehouse; a duplicate rejects the
/// whole submission before any insert. For Gurgaon, each inserted line also
/// decrements the snapshot stock as a best-effort side effect whose outcome
/// is reported per line.
pub async fn push(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DispatchSubmission>,
) -> axum::response::Response {
    let warehouse = match resolve_warehouse(body.selected_warehouse.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    if body.products.is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "no products provided");
    }

    let awb = body.awb_number.trim().to_string();
    if !awb.is_empty() {
        match services.store().awb_exists(&awb).await {
            Ok(true) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "duplicate_awb",
                    "AWB already exists; provide a unique AWB",
                );
            }
            Ok(false) => {}
            Err(e) => return errors::store_error_to_response(e),
        }
    }

    let mut inserted = 0usize;
    let mut adjustments: Vec<serde_json::Value> = Vec::new();

    for line in &body.products {
        let (name, barcode) = split_product_name(&line.name, &line.barcode);
        if name.is_empty() || line.qty <= 0 {
            tracing::warn!(product = %line.name, "skipping dispatch line with missing name or qty");
            continue;
        }

        let insert = DispatchLineInsert {
            order_ref: body.order_ref.clone(),
            customer: body.customer_name.clone(),
            product_name: name,
            qty: line.qty,
            variant: line.variant.clone(),
            barcode: barcode.clone(),
            awb: awb.clone(),
            logistics: body.selected_logistics.clone(),
            length: body.dimensions.length.clone(),
            width: body.dimensions.width.clone(),
            height: body.dimensions.height.clone(),
            actual_weight: body.weight.clone(),
            payment_mode: body.selected_payment_mode.clone(),
            invoice_amount: body.invoice_amount.clone(),
            processed_by: body.selected_executive.clone(),
            remarks: body.remarks.clone(),
        };

        if let Err(e) = services.store().insert_dispatch_line(warehouse, &insert).await {
            return errors::store_error_to_response(e);
        }
        inserted += 1;

        // Gurgaon keeps a live stock counter on its snapshot; the decrement
        // is best-effort and reported per line, never fatal.
        if warehouse == Warehouse::Gurgaon && !barcode.is_empty() {
            let outcome = match services
                .store()
                .adjust_stock(warehouse, &barcode, -line.qty)
                .await
            {
                Ok(0) => {
                    tracing::warn!(%barcode, "no snapshot row matched for dispatch decrement");
                    AdjustmentOutcome::NoMatchingRow
                }
                Ok(_) => AdjustmentOutcome::Applied,
                Err(e) => {
                    tracing::warn!(%barcode, "stock decrement failed: {e}");
                    AdjustmentOutcome::Failed
                }
            };
            adjustments.push(json!({ "barcode": barcode, "outcome": outcome }));
        }
    }

    if inserted == 0 {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "no valid product lines",
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "dispatch entry submitted",
            "inserted": inserted,
            "adjustments": adjustments,
        })),
    )
        .into_response()
}

/// Entry forms submit `"Product Name | BARCODE"` when no separate barcode
/// field is filled; split it apart in that case.
fn split_product_name(name: &str, barcode: &str) -> (String, String) {
    let barcode = barcode.trim();
    if !barcode.is_empty() {
        return (name.trim().to_string(), barcode.to_string());
    }
    if name.contains('|') {
        let parts: Vec<&str> = name.split('|').map(str::trim).collect();
        let extracted = parts.last().copied().unwrap_or("");
        return (parts[0].to_string(), extracted.to_string());
    }
    (name.trim().to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::split_product_name;

    #[test]
    fn explicit_barcode_wins() {
        assert_eq!(
            split_product_name("Cot Mobile | IGNORED", " HH-1001 "),
            ("Cot Mobile | IGNORED".to_string(), "HH-1001".to_string())
        );
    }

    #[test]
    fn extracts_barcode_from_piped_name() {
        assert_eq!(
            split_product_name("Cot Mobile | HH-1001", ""),
            ("Cot Mobile".to_string(), "HH-1001".to_string())
        );
    }

    #[test]
    fn plain_name_yields_empty_barcode() {
        assert_eq!(
            split_product_name("  Cot Mobile  ", ""),
            ("Cot Mobile".to_string(), String::new())
        );
    }
}
