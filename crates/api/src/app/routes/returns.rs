//! Return submission: audit row first, snapshot increment second.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::json;

use stockpilot_store::ReturnInsert;

use crate::app::routes::common::{resolve_warehouse, strip_invisible};
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/submit", post(submit))
}

pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ReturnSubmission>,
) -> axum::response::Response {
    let order_ref = body.order_ref.as_deref().map(str::trim).unwrap_or("");
    let awb = body.awb.as_deref().map(str::trim).unwrap_or("");
    let product_type = body.product_type.as_deref().map(str::trim).unwrap_or("");
    let quantity = body.quantity.unwrap_or(0);

    if order_ref.is_empty() || awb.is_empty() || product_type.is_empty() || quantity <= 0 {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "missing required fields",
        );
    }

    let warehouse = match resolve_warehouse(body.inventory.as_deref()) {
        Ok(w) => w,
        Err(resp) => return resp,
    };

    let (name, barcode) = match split_return_product(product_type) {
        Some(parts) => parts,
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "productType must be \"<name> – <barcode>\"",
            );
        }
    };

    let entry = ReturnInsert {
        order_ref: order_ref.to_string(),
        awb: awb.to_string(),
        product_type: name,
        barcode: barcode.clone(),
        inventory: warehouse.canonical_name().to_ascii_lowercase(),
        quantity,
    };

    if let Err(e) = services.store().insert_return(&entry).await {
        return errors::store_error_to_response(e);
    }

    match services.store().apply_return(warehouse, &barcode, quantity).await {
        Ok(0) => {
            tracing::warn!(%barcode, warehouse = %warehouse, "no snapshot row matched for return increment");
        }
        Ok(_) => {}
        Err(e) => return errors::store_error_to_response(e),
    }

    (
        StatusCode::OK,
        Json(json!({ "message": "return processed and inventory updated" })),
    )
        .into_response()
}

/// Return forms submit `"<name> – <barcode>"` (en or em dash). Yields the
/// cleaned name and barcode, or `None` when the barcode half is absent.
fn split_return_product(raw: &str) -> Option<(String, String)> {
    let mut parts = raw.splitn(2, ['–', '—']);
    let name = parts.next()?;
    let barcode = parts.next()?;

    let name = strip_invisible(name)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let barcode: String = strip_invisible(barcode)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if name.is_empty() || barcode.is_empty() {
        return None;
    }
    Some((name, barcode))
}

#[cfg(test)]
mod tests {
    use super::split_return_product;

    #[test]
    fn splits_on_en_and_em_dash() {
        assert_eq!(
            split_return_product("Cot Mobile – HH-1001"),
            Some(("Cot Mobile".to_string(), "HH-1001".to_string()))
        );
        assert_eq!(
            split_return_product("Cot Mobile — HH-1001"),
            Some(("Cot Mobile".to_string(), "HH-1001".to_string()))
        );
    }

    #[test]
    fn cleans_invisible_characters_and_extra_spaces() {
        assert_eq!(
            split_return_product("Cot\u{00A0}  Mobile – HH\u{200B}-1001 "),
            Some(("Cot Mobile".to_string(), "HH-1001".to_string()))
        );
    }

    #[test]
    fn missing_barcode_half_is_rejected() {
        assert_eq!(split_return_product("Cot Mobile"), None);
        assert_eq!(split_return_product("Cot Mobile – "), None);
    }
}
