//! Ledger input records.
//!
//! These mirror the persisted row shapes the reconciler reads. The store
//! decodes straight into them; the reconciler treats them as read-only
//! facts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Current-stock row for one (product code, warehouse) pair.
///
/// Mutated in place by the write-side handlers; the reconciler never
/// touches it. `returned` is the cumulative returned count maintained by
/// return submission, trusted as-is rather than recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SnapshotRecord {
    pub product: String,
    pub variant: Option<String>,
    pub code: String,
    pub stock: i64,
    pub warehouse: String,
    pub opening: Option<i64>,
    #[sqlx(rename = "return")]
    #[serde(rename = "return")]
    pub returned: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One shipped unit-line. Several records may share an AWB (multi-item
/// shipment); AWB uniqueness holds at the shipment level, not per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DispatchRecord {
    pub awb: Option<String>,
    pub barcode: String,
    pub product_name: String,
    pub variant: Option<String>,
    pub qty: Option<i64>,
    pub status: Option<String>,
    pub processed_by: Option<String>,
    pub warehouse: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// One damage/recovery adjustment event, append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DamageRecord {
    pub product_type: String,
    pub barcode: String,
    pub inventory_location: String,
    pub action_type: String,
    pub quantity: Option<i64>,
    pub timestamp: Option<DateTime<Utc>>,
}
