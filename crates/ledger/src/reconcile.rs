//! Totals aggregation and dispatch grouping.

use std::collections::BTreeMap;

use serde::Serialize;

use stockpilot_core::ActionKind;

use crate::records::{DamageRecord, DispatchRecord, SnapshotRecord};

/// Grouping key for dispatch lines that carry no air waybill number.
pub const NO_AWB_KEY: &str = "No AWB";

/// Derived stock totals for one (product code, warehouse) pair.
///
/// Never persisted; recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub stock: i64,
    pub dispatch: i64,
    #[serde(rename = "return")]
    pub returned: i64,
    pub damage: i64,
    pub recover: i64,
    #[serde(rename = "finalStock")]
    pub final_stock: i64,
}

/// Aggregate the three record sets into derived totals.
///
/// `finalStock = stock − Σ dispatchQty + returnQty − Σ damageQty + Σ recoverQty`.
/// Missing quantities count as zero; action kinds match case-insensitively
/// and unknown kinds contribute to no total. `returned` is read from the
/// snapshot's stored counter, not recomputed from the returns audit trail.
pub fn totals(
    snapshot: &SnapshotRecord,
    dispatch: &[DispatchRecord],
    damage: &[DamageRecord],
) -> Totals {
    let dispatch_qty: i64 = dispatch.iter().map(|r| r.qty.unwrap_or(0)).sum();

    let mut damage_qty = 0i64;
    let mut recover_qty = 0i64;
    for row in damage {
        let qty = row.quantity.unwrap_or(0);
        match ActionKind::parse(&row.action_type) {
            Some(ActionKind::Damage) => damage_qty += qty,
            Some(ActionKind::Recover) => recover_qty += qty,
            None => {}
        }
    }

    Totals {
        stock: snapshot.stock,
        dispatch: dispatch_qty,
        returned: snapshot.returned,
        damage: damage_qty,
        recover: recover_qty,
        final_stock: snapshot.stock - dispatch_qty + snapshot.returned - damage_qty + recover_qty,
    }
}

/// Group dispatch lines by AWB for presentation.
///
/// Lines without an AWB group under [`NO_AWB_KEY`]; within a key, lines
/// keep their fetch order.
pub fn group_by_awb(rows: Vec<DispatchRecord>) -> BTreeMap<String, Vec<DispatchRecord>> {
    let mut grouped: BTreeMap<String, Vec<DispatchRecord>> = BTreeMap::new();
    for row in rows {
        let key = match row.awb.as_deref() {
            Some(awb) if !awb.trim().is_empty() => awb.to_string(),
            _ => NO_AWB_KEY.to_string(),
        };
        grouped.entry(key).or_default().push(row);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(stock: i64, returned: i64) -> SnapshotRecord {
        SnapshotRecord {
            product: "Cot Mobile".to_string(),
            variant: None,
            code: "HH-1001".to_string(),
            stock,
            warehouse: "Gurgon".to_string(),
            opening: Some(stock),
            returned,
            created_at: None,
            updated_at: None,
        }
    }

    fn dispatch_line(awb: Option<&str>, qty: Option<i64>) -> DispatchRecord {
        DispatchRecord {
            awb: awb.map(str::to_string),
            barcode: "HH-1001".to_string(),
            product_name: "Cot Mobile".to_string(),
            variant: None,
            qty,
            status: Some("Pending".to_string()),
            processed_by: Some("Asha".to_string()),
            warehouse: "Gurgaon Warehouse".to_string(),
            created_at: None,
        }
    }

    fn damage_row(action: &str, qty: Option<i64>) -> DamageRecord {
        DamageRecord {
            product_type: "Cot Mobile".to_string(),
            barcode: "HH-1001".to_string(),
            inventory_location: "gurgaon".to_string(),
            action_type: action.to_string(),
            quantity: qty,
            timestamp: None,
        }
    }

    #[test]
    fn final_stock_follows_the_ledger_formula() {
        // stock 100, dispatch 30, return 5, damage 4, recover 1 -> 72
        let snap = snapshot(100, 5);
        let dispatch = vec![
            dispatch_line(Some("AWB1"), Some(10)),
            dispatch_line(Some("AWB2"), Some(20)),
        ];
        let damage = vec![damage_row("damage", Some(4)), damage_row("recover", Some(1))];

        let t = totals(&snap, &dispatch, &damage);
        assert_eq!(t.stock, 100);
        assert_eq!(t.dispatch, 30);
        assert_eq!(t.returned, 5);
        assert_eq!(t.damage, 4);
        assert_eq!(t.recover, 1);
        assert_eq!(t.final_stock, 72);
    }

    #[test]
    fn missing_quantities_count_as_zero() {
        let snap = snapshot(10, 0);
        let dispatch = vec![dispatch_line(None, None), dispatch_line(None, Some(3))];
        let damage = vec![damage_row("damage", None)];

        let t = totals(&snap, &dispatch, &damage);
        assert_eq!(t.dispatch, 3);
        assert_eq!(t.damage, 0);
        assert_eq!(t.final_stock, 7);
    }

    #[test]
    fn action_kinds_match_case_insensitively_and_unknown_kinds_are_ignored() {
        let snap = snapshot(50, 0);
        let damage = vec![
            damage_row("DAMAGE", Some(2)),
            damage_row("Recover", Some(1)),
            damage_row("misplaced", Some(9)),
        ];

        let t = totals(&snap, &[], &damage);
        assert_eq!(t.damage, 2);
        assert_eq!(t.recover, 1);
        assert_eq!(t.final_stock, 49);
    }

    #[test]
    fn shared_awb_lines_group_under_one_key_in_fetch_order() {
        let rows = vec![
            dispatch_line(Some("AWB123"), Some(1)),
            dispatch_line(Some("AWB999"), Some(5)),
            dispatch_line(Some("AWB123"), Some(2)),
        ];

        let grouped = group_by_awb(rows);
        let awb123 = &grouped["AWB123"];
        assert_eq!(awb123.len(), 2);
        assert_eq!(awb123[0].qty, Some(1));
        assert_eq!(awb123[1].qty, Some(2));
        assert_eq!(grouped["AWB999"].len(), 1);
    }

    #[test]
    fn lines_without_awb_group_under_the_sentinel_key() {
        let rows = vec![dispatch_line(None, Some(1)), dispatch_line(Some("  "), Some(2))];

        let grouped = group_by_awb(rows);
        assert_eq!(grouped[NO_AWB_KEY].len(), 2);
    }

    #[test]
    fn totals_serialize_with_wire_field_names() {
        let snap = snapshot(1, 2);
        let t = totals(&snap, &[], &[]);
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json["return"], 2);
        assert_eq!(json["finalStock"], 3);
    }
}
