//! Multi-warehouse order sheet filter.

use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use stockpilot_core::Warehouse;
use stockpilot_store::OrdersheetFilter;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/filter", post(filter))
}

/// `POST /ordersheet/filter` — dispatch rows across the selected
/// warehouses. Unknown warehouse tokens are dropped; an empty selection
/// means all warehouses.
pub async fn filter(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::OrdersheetFilterRequest>,
) -> axum::response::Response {
    let warehouses: Vec<Warehouse> = body
        .warehouse
        .iter()
        .filter_map(|token| Warehouse::resolve(token))
        .collect();

    fn non_empty(s: String) -> Option<String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    let filter = OrdersheetFilter {
        warehouses,
        order_ref: non_empty(body.order_ref),
        product_name: non_empty(body.product_name),
        variant: non_empty(body.variant),
        barcode_awb: non_empty(body.barcode_awb),
        logistics: body.logistics,
        parcel_type: non_empty(body.parcel_type),
        payment_mode: non_empty(body.payment_mode),
        processed_by: non_empty(body.processed_by),
    };

    match services.store().ordersheet(&filter).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
