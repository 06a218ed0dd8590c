//! Pool ownership and the ledger's read-side fetches.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use stockpilot_core::Warehouse;
use stockpilot_ledger::{DamageRecord, DispatchRecord, SnapshotRecord};

use crate::error::StoreResult;

/// Injected storage client. Opened once at process start, cloned cheaply
/// per request (the pool is internally shared).
#[derive(Debug, Clone)]
pub struct Store {
    pool: MySqlPool,
}

fn in_placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

fn lowered_aliases(warehouse: Warehouse) -> Vec<String> {
    warehouse
        .aliases()
        .iter()
        .map(|a| a.to_ascii_lowercase())
        .collect()
}

impl Store {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Open a pooled connection from a database URL.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(10))
            .connect(url)
            .await?;
        tracing::info!("connected to MySQL");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Snapshot rows for one product code in one warehouse, matched against
    /// the warehouse's full alias set (legacy labels included).
    pub async fn snapshot_rows(
        &self,
        warehouse: Warehouse,
        code: &str,
    ) -> StoreResult<Vec<SnapshotRecord>> {
        let aliases = lowered_aliases(warehouse);
        let sql = format!(
            "SELECT product, variant, code, stock, warehouse, opening, `return`, created_at, updated_at \
             FROM {} WHERE code = ? AND LOWER(TRIM(warehouse)) IN ({})",
            warehouse.inventory_table(),
            in_placeholders(aliases.len()),
        );
        let mut query = sqlx::query_as::<_, SnapshotRecord>(&sql).bind(code);
        for alias in &aliases {
            query = query.bind(alias);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Dispatch lines for one product code from one warehouse's partition,
    /// filtered by the alias set, newest first.
    pub async fn dispatch_rows(
        &self,
        warehouse: Warehouse,
        code: &str,
    ) -> StoreResult<Vec<DispatchRecord>> {
        let aliases = lowered_aliases(warehouse);
        let sql = format!(
            "SELECT awb, barcode, product_name, variant, qty, status, processed_by, warehouse, created_at \
             FROM {} WHERE barcode = ? AND LOWER(TRIM(warehouse)) IN ({}) \
             ORDER BY created_at DESC",
            warehouse.dispatch_table(),
            in_placeholders(aliases.len()),
        );
        let mut query = sqlx::query_as::<_, DispatchRecord>(&sql).bind(code);
        for alias in &aliases {
            query = query.bind(alias);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Dispatch lines for one product code across every warehouse
    /// partition, in the fixed warehouse scan order. Used by the global
    /// event timeline.
    pub async fn dispatch_rows_global(&self, code: &str) -> StoreResult<Vec<DispatchRecord>> {
        let mut rows = Vec::new();
        for warehouse in Warehouse::ALL {
            let sql = format!(
                "SELECT awb, barcode, product_name, variant, qty, status, processed_by, warehouse, created_at \
                 FROM {} WHERE barcode = ?",
                warehouse.dispatch_table(),
            );
            let batch = sqlx::query_as::<_, DispatchRecord>(&sql)
                .bind(code)
                .fetch_all(&self.pool)
                .await?;
            rows.extend(batch);
        }
        Ok(rows)
    }

    /// Damage/recovery rows for one product code whose location matches the
    /// warehouse's alias set, newest first.
    pub async fn damage_rows(
        &self,
        warehouse: Warehouse,
        code: &str,
    ) -> StoreResult<Vec<DamageRecord>> {
        let aliases = lowered_aliases(warehouse);
        let sql = format!(
            "SELECT product_type, barcode, inventory_location, action_type, quantity, timestamp \
             FROM damage_recovery_log \
             WHERE barcode = ? AND LOWER(TRIM(inventory_location)) IN ({}) \
             ORDER BY timestamp DESC",
            in_placeholders(aliases.len()),
        );
        let mut query = sqlx::query_as::<_, DamageRecord>(&sql).bind(code);
        for alias in &aliases {
            query = query.bind(alias);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// All damage/recovery rows for one product code, any location. Used by
    /// the global event timeline.
    pub async fn damage_rows_global(&self, code: &str) -> StoreResult<Vec<DamageRecord>> {
        let rows = sqlx::query_as::<_, DamageRecord>(
            "SELECT product_type, barcode, inventory_location, action_type, quantity, timestamp \
             FROM damage_recovery_log WHERE barcode = ?",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Whether an AWB exists in any warehouse's dispatch partition.
    /// Uniqueness holds globally, so the probe spans all five tables.
    pub async fn awb_exists(&self, awb: &str) -> StoreResult<bool> {
        let sql = Warehouse::ALL
            .iter()
            .map(|w| format!("SELECT awb FROM {} WHERE awb = ?", w.dispatch_table()))
            .collect::<Vec<_>>()
            .join(" UNION ALL ");
        let mut query = sqlx::query_scalar::<_, String>(&sql);
        for _ in Warehouse::ALL {
            query = query.bind(awb);
        }
        Ok(query.fetch_optional(&self.pool).await?.is_some())
    }

    /// Dispatch rows for one AWB within one warehouse partition.
    pub async fn awb_details(
        &self,
        warehouse: Warehouse,
        awb: &str,
    ) -> StoreResult<Vec<DispatchRecord>> {
        let sql = format!(
            "SELECT awb, barcode, product_name, variant, qty, status, processed_by, warehouse, created_at \
             FROM {} WHERE awb = ?",
            warehouse.dispatch_table(),
        );
        Ok(sqlx::query_as::<_, DispatchRecord>(&sql)
            .bind(awb)
            .fetch_all(&self.pool)
            .await?)
    }
}
