//! The unified event timeline: tagging, label folding, chronological sort.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockpilot_core::{ActionKind, Warehouse};

use crate::records::{DamageRecord, DispatchRecord, SnapshotRecord};

/// One tagged entry in the merged event log.
///
/// The warehouse label is already folded to its canonical name; `kind` is
/// `"dispatch"`, `"inventory"`, or the damage row's own action kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: i64,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub returned: Option<i64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub warehouse: String,
    pub processed_by: Option<String>,
    pub awb: Option<String>,
}

impl TimelineEvent {
    pub fn dispatch(row: &DispatchRecord) -> Self {
        Self {
            kind: "dispatch".to_string(),
            quantity: row.qty.unwrap_or(0),
            returned: None,
            timestamp: row.created_at,
            warehouse: Warehouse::fold_label(&row.warehouse),
            processed_by: row.processed_by.clone(),
            awb: row.awb.clone(),
        }
    }

    pub fn inventory(row: &SnapshotRecord) -> Self {
        Self {
            kind: "inventory".to_string(),
            quantity: row.stock,
            returned: Some(row.returned),
            timestamp: row.created_at,
            warehouse: Warehouse::fold_label(&row.warehouse),
            processed_by: None,
            awb: None,
        }
    }

    pub fn damage(row: &DamageRecord) -> Self {
        let kind = match ActionKind::parse(&row.action_type) {
            Some(action) => action.as_str().to_string(),
            // Unknown historical kinds pass through as stored.
            None => row.action_type.clone(),
        };
        Self {
            kind,
            quantity: row.quantity.unwrap_or(0),
            returned: None,
            timestamp: row.timestamp,
            warehouse: Warehouse::fold_label(&row.inventory_location),
            processed_by: None,
            awb: None,
        }
    }
}

/// Sort events ascending by timestamp.
///
/// Rows without a parseable timestamp sort before every dated row; equal
/// keys keep their insertion order (stable sort), so callers control the
/// tie order by the order they append the per-source batches.
pub fn sort_chronologically(events: &mut [TimelineEvent]) {
    events.sort_by_key(|e| e.timestamp.map(|t| t.timestamp_millis()).unwrap_or(i64::MIN));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> Option<DateTime<Utc>> {
        Some(Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn event(kind: &str, ts: Option<DateTime<Utc>>, quantity: i64) -> TimelineEvent {
        TimelineEvent {
            kind: kind.to_string(),
            quantity,
            returned: None,
            timestamp: ts,
            warehouse: "Gurgaon".to_string(),
            processed_by: None,
            awb: None,
        }
    }

    #[test]
    fn sorts_non_decreasing_by_timestamp() {
        let mut events = vec![
            event("dispatch", at(300), 1),
            event("damage", at(100), 2),
            event("inventory", at(200), 3),
        ];
        sort_chronologically(&mut events);
        let order: Vec<i64> = events.iter().map(|e| e.quantity).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn missing_timestamps_sort_first() {
        let mut events = vec![
            event("dispatch", at(100), 1),
            event("damage", None, 2),
            event("inventory", at(50), 3),
        ];
        sort_chronologically(&mut events);
        assert_eq!(events[0].quantity, 2);
        assert_eq!(events[1].quantity, 3);
        assert_eq!(events[2].quantity, 1);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let mut events = vec![
            event("inventory", at(100), 1),
            event("dispatch", at(100), 2),
            event("damage", at(100), 3),
        ];
        sort_chronologically(&mut events);
        let order: Vec<i64> = events.iter().map(|e| e.quantity).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn dispatch_events_fold_warehouse_labels() {
        let row = DispatchRecord {
            awb: Some("AWB1".to_string()),
            barcode: "HH-1001".to_string(),
            product_name: "Cot Mobile".to_string(),
            variant: None,
            qty: Some(2),
            status: None,
            processed_by: Some("Asha".to_string()),
            warehouse: "Gurgaon Warehouse".to_string(),
            created_at: at(10),
        };
        let ev = TimelineEvent::dispatch(&row);
        assert_eq!(ev.kind, "dispatch");
        assert_eq!(ev.warehouse, "Gurgaon");
        assert_eq!(ev.quantity, 2);
    }

    #[test]
    fn damage_events_use_the_action_kind_as_type() {
        let row = DamageRecord {
            product_type: "Cot Mobile".to_string(),
            barcode: "HH-1001".to_string(),
            inventory_location: "Gurgon".to_string(),
            action_type: "RECOVER".to_string(),
            quantity: Some(1),
            timestamp: None,
        };
        let ev = TimelineEvent::damage(&row);
        assert_eq!(ev.kind, "recover");
        assert_eq!(ev.warehouse, "Gurgaon");
    }

    #[test]
    fn inventory_events_carry_the_returned_counter() {
        let row = SnapshotRecord {
            product: "Cot Mobile".to_string(),
            variant: None,
            code: "HH-1001".to_string(),
            stock: 7,
            warehouse: "Gurgon".to_string(),
            opening: None,
            returned: 4,
            created_at: at(5),
            updated_at: None,
        };
        let ev = TimelineEvent::inventory(&row);
        assert_eq!(ev.kind, "inventory");
        assert_eq!(ev.returned, Some(4));
        assert_eq!(ev.warehouse, "Gurgaon");
    }
}
