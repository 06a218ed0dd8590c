//! Request/response DTOs and JSON mapping helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockpilot_ledger::{DamageRecord, DispatchRecord, SnapshotRecord, Totals};

// -------------------------
// Track (reconciler) responses
// -------------------------

#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub barcode: String,
    pub warehouse: String,
    pub totals: Totals,
    pub details: TrackDetails,
}

#[derive(Debug, Serialize)]
pub struct TrackDetails {
    pub dispatch: BTreeMap<String, Vec<DispatchRecord>>,
    #[serde(rename = "damageRecovery")]
    pub damage_recovery: Vec<DamageRecord>,
    pub inventory: Vec<SnapshotRecord>,
}

// -------------------------
// Query DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub barcode: Option<String>,
    pub warehouse: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WarehouseQuery {
    pub warehouse: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryFilterQuery {
    pub warehouse: Option<String>,
    pub date: Option<String>,
    pub product: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AwbQuery {
    pub awb: Option<String>,
    pub warehouse: Option<String>,
}

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchSubmission {
    pub selected_warehouse: Option<String>,
    #[serde(default)]
    pub selected_logistics: String,
    #[serde(default)]
    pub selected_executive: String,
    #[serde(default)]
    pub selected_payment_mode: String,
    #[serde(default)]
    pub order_ref: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub awb_number: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub invoice_amount: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub products: Vec<ProductLine>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductLine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub qty: i64,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub barcode: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnSubmission {
    pub order_ref: Option<String>,
    pub awb: Option<String>,
    pub product_type: Option<String>,
    pub inventory: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageSubmission {
    pub product_type: Option<String>,
    pub barcode: Option<String>,
    pub inventory: Option<String>,
    pub action_type: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct InventoryInsertRequest {
    pub warehouse: Option<String>,
    pub payload: Option<InventoryPayload>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryPayload {
    pub name: String,
    #[serde(default)]
    pub variant: String,
    pub code: String,
    pub stock: i64,
    #[serde(default)]
    pub opening: i64,
    #[serde(rename = "return", default)]
    pub returned: i64,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub awb: Option<String>,
    pub warehouse: Option<String>,
    pub new_status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersheetFilterRequest {
    #[serde(default)]
    pub warehouse: Vec<String>,
    #[serde(default)]
    pub order_ref: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub barcode_awb: String,
    #[serde(default)]
    pub logistics: Vec<String>,
    #[serde(default)]
    pub parcel_type: String,
    #[serde(default)]
    pub payment_mode: String,
    #[serde(default)]
    pub processed_by: String,
}

// -------------------------
// Write-side outcomes
// -------------------------

/// Explicit outcome of a best-effort snapshot adjustment that rides along
/// with an audit insert. The insert itself has already succeeded when this
/// is reported; `Failed`/`NoMatchingRow` mean the ledger and the snapshot
/// have drifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentOutcome {
    Applied,
    NoMatchingRow,
    Failed,
}
