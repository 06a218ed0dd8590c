//! Write-side statements: dispatch, return, damage/recovery, snapshot
//! inserts, and the snapshot stock adjustments that ride along with them.
//!
//! The adjustments deliberately return the matched row count instead of
//! failing: the callers treat a missed or failed adjustment as a named
//! outcome, not an error (the audit row has already been committed).

use chrono::{DateTime, Utc};

use stockpilot_core::Warehouse;

use crate::error::StoreResult;
use crate::store::Store;

/// One dispatch line, ready for insertion into a warehouse partition.
#[derive(Debug, Clone)]
pub struct DispatchLineInsert {
    pub order_ref: String,
    pub customer: String,
    pub product_name: String,
    pub qty: i64,
    pub variant: String,
    pub barcode: String,
    pub awb: String,
    pub logistics: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub actual_weight: String,
    pub payment_mode: String,
    pub invoice_amount: String,
    pub processed_by: String,
    pub remarks: String,
}

/// One returns-audit row.
#[derive(Debug, Clone)]
pub struct ReturnInsert {
    pub order_ref: String,
    pub awb: String,
    pub product_type: String,
    pub barcode: String,
    pub inventory: String,
    pub quantity: i64,
}

/// One damage/recovery log row.
#[derive(Debug, Clone)]
pub struct DamageInsert {
    pub product_type: String,
    pub barcode: String,
    pub inventory_location: String,
    pub action_type: String,
    pub quantity: i64,
}

/// One new inventory snapshot row.
#[derive(Debug, Clone)]
pub struct SnapshotInsert {
    pub product: String,
    pub variant: String,
    pub code: String,
    pub stock: i64,
    pub warehouse: String,
    pub opening: i64,
    pub returned: i64,
    pub created_at: DateTime<Utc>,
}

impl Store {
    /// Append one dispatch line to the warehouse's partition. New lines
    /// always start `Pending` with parcel type `Forward`.
    pub async fn insert_dispatch_line(
        &self,
        warehouse: Warehouse,
        line: &DispatchLineInsert,
    ) -> StoreResult<()> {
        let sql = format!(
            "INSERT INTO {} (\
             status, warehouse, order_ref, customer, \
             product_name, qty, variant, barcode, \
             awb, logistics, parcel_type, \
             length, width, height, actual_weight, \
             payment_mode, invoice_amount, processed_by, remarks\
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            warehouse.dispatch_table(),
        );
        sqlx::query(&sql)
            .bind("Pending")
            .bind(warehouse.display_name())
            .bind(&line.order_ref)
            .bind(&line.customer)
            .bind(&line.product_name)
            .bind(line.qty)
            .bind(&line.variant)
            .bind(&line.barcode)
            .bind(&line.awb)
            .bind(&line.logistics)
            .bind("Forward")
            .bind(&line.length)
            .bind(&line.width)
            .bind(&line.height)
            .bind(&line.actual_weight)
            .bind(&line.payment_mode)
            .bind(&line.invoice_amount)
            .bind(&line.processed_by)
            .bind(&line.remarks)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Adjust a snapshot's stock by a signed delta, keyed on the label
    /// actually stored on the warehouse's rows (Gurgaon's legacy
    /// `"Gurgon"`). Returns the number of rows matched.
    pub async fn adjust_stock(
        &self,
        warehouse: Warehouse,
        code: &str,
        delta: i64,
    ) -> StoreResult<u64> {
        let sql = format!(
            "UPDATE {} SET stock = stock + ? WHERE code = ? AND warehouse = ?",
            warehouse.inventory_table(),
        );
        let result = sqlx::query(&sql)
            .bind(delta)
            .bind(code)
            .bind(warehouse.stored_label())
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Append one returns-audit row.
    pub async fn insert_return(&self, entry: &ReturnInsert) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO returns (order_ref, awb, product_type, barcode, inventory, quantity, submitted_at) \
             VALUES (?, ?, ?, ?, ?, ?, NOW())",
        )
        .bind(&entry.order_ref)
        .bind(&entry.awb)
        .bind(&entry.product_type)
        .bind(&entry.barcode)
        .bind(&entry.inventory)
        .bind(entry.quantity)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Increment a snapshot's stock and cumulative `return` counter by the
    /// returned quantity. Keyed on code alone: the table is already the
    /// warehouse's own partition.
    pub async fn apply_return(
        &self,
        warehouse: Warehouse,
        code: &str,
        quantity: i64,
    ) -> StoreResult<u64> {
        let sql = format!(
            "UPDATE {} SET stock = stock + ?, `return` = `return` + ? WHERE code = ?",
            warehouse.inventory_table(),
        );
        let result = sqlx::query(&sql)
            .bind(quantity)
            .bind(quantity)
            .bind(code)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Append one damage/recovery log row; returns the new entry id.
    pub async fn insert_damage(&self, entry: &DamageInsert) -> StoreResult<u64> {
        let result = sqlx::query(
            "INSERT INTO damage_recovery_log \
             (product_type, barcode, inventory_location, action_type, quantity) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&entry.product_type)
        .bind(&entry.barcode)
        .bind(&entry.inventory_location)
        .bind(&entry.action_type)
        .bind(entry.quantity)
        .execute(self.pool())
        .await?;
        Ok(result.last_insert_id())
    }

    /// Insert one snapshot row into the warehouse's inventory partition.
    pub async fn insert_snapshot(
        &self,
        warehouse: Warehouse,
        row: &SnapshotInsert,
    ) -> StoreResult<u64> {
        let sql = format!(
            "INSERT INTO {} (product, variant, code, stock, warehouse, opening, `return`, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            warehouse.inventory_table(),
        );
        let result = sqlx::query(&sql)
            .bind(&row.product)
            .bind(&row.variant)
            .bind(&row.code)
            .bind(row.stock)
            .bind(&row.warehouse)
            .bind(row.opening)
            .bind(row.returned)
            .bind(row.created_at)
            .execute(self.pool())
            .await?;
        Ok(result.last_insert_id())
    }

    /// Override the status of every line under one AWB in one warehouse.
    /// Returns the number of rows matched.
    pub async fn update_status(
        &self,
        warehouse: Warehouse,
        awb: &str,
        status: &str,
    ) -> StoreResult<u64> {
        let sql = format!(
            "UPDATE {} SET status = ? WHERE awb = ?",
            warehouse.dispatch_table(),
        );
        let result = sqlx::query(&sql)
            .bind(status)
            .bind(awb)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
