//! Damage/recovery submission: append the log row, then adjust the
//! snapshot's stock as a best-effort side effect with a named outcome.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::json;

use stockpilot_core::ActionKind;
use stockpilot_store::DamageInsert;

use crate::app::dto::{self, AdjustmentOutcome};
use crate::app::routes::common::{resolve_warehouse, strip_invisible};
use crate::app::services::AppServices;
use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/entry", post(entry))
}

pub async fn entry(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DamageSubmission>,
) -> axum::response::Response {
    let product_type = strip_invisible(body.product_type.as_deref().unwrap_or(""))
        .trim()
        .to_string();
    let barcode = strip_invisible(body.barcode.as_deref().unwrap_or(""))
        .trim()
        .to_string();
    let inventory = body.inventory.as_deref().map(str::trim).unwrap_or("");
    let action_raw = body.action_type.as_deref().map(str::trim).unwrap_or("");

    let mut missing = Vec::new();
    if product_type.is_empty() {
        missing.push("productType");
    }
    if barcode.is_empty() {
        missing.push("barcode");
    }
    if inventory.is_empty() {
        missing.push("inventory");
    }
    if action_raw.is_empty() {
        missing.push("actionType");
    }
    if !missing.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("missing required fields: {}", missing.join(", ")),
        );
    }

    let warehouse = match resolve_warehouse(Some(inventory)) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    let action = match ActionKind::parse(action_raw) {
        Some(a) => a,
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "actionType must be one of: damage, recover",
            );
        }
    };

    if body.quantity <= 0 {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "quantity must be positive",
        );
    }

    let insert = DamageInsert {
        product_type,
        barcode: barcode.clone(),
        inventory_location: warehouse.canonical_name().to_ascii_lowercase(),
        action_type: action.as_str().to_string(),
        quantity: body.quantity,
    };

    let entry_id = match services.store().insert_damage(&insert).await {
        Ok(id) => id,
        Err(e) => return errors::store_error_to_response(e),
    };

    // The log row is committed; the snapshot adjustment is best-effort and
    // its outcome is reported rather than propagated.
    let adjustment = match services
        .store()
        .adjust_stock(warehouse, &barcode, action.stock_delta(body.quantity))
        .await
    {
        Ok(0) => {
            tracing::warn!(%barcode, warehouse = %warehouse, "no snapshot row matched for adjustment");
            AdjustmentOutcome::NoMatchingRow
        }
        Ok(_) => AdjustmentOutcome::Applied,
        Err(e) => {
            tracing::warn!(%barcode, warehouse = %warehouse, "stock adjustment failed: {e}");
            AdjustmentOutcome::Failed
        }
    };

    (
        StatusCode::CREATED,
        Json(json!({
            "message": "damage/recovery entry logged",
            "entryId": entry_id,
            "adjustment": adjustment,
        })),
    )
        .into_response()
}
