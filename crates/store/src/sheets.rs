//! Sheet-style reads: inventory listings, catalog search, dropdown
//! lookups, and the multi-warehouse order sheet filter.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use stockpilot_core::Warehouse;
use stockpilot_ledger::{DispatchRecord, SnapshotRecord};

use crate::error::StoreResult;
use crate::store::Store;

/// Product catalog suggestion row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CatalogRow {
    pub p_id: i64,
    pub product_name: String,
    pub product_variant: Option<String>,
    pub barcode: Option<String>,
}

/// Order sheet filter. Empty/`None` fields are not applied; an empty
/// warehouse list means all warehouses.
#[derive(Debug, Clone, Default)]
pub struct OrdersheetFilter {
    pub warehouses: Vec<Warehouse>,
    pub order_ref: Option<String>,
    pub product_name: Option<String>,
    pub variant: Option<String>,
    pub barcode_awb: Option<String>,
    pub logistics: Vec<String>,
    pub parcel_type: Option<String>,
    pub payment_mode: Option<String>,
    pub processed_by: Option<String>,
}

const DISPATCH_COLUMNS: &str =
    "awb, barcode, product_name, variant, qty, status, processed_by, warehouse, created_at";

impl Store {
    /// Full inventory for one warehouse, newest rows first.
    pub async fn list_inventory(&self, warehouse: Warehouse) -> StoreResult<Vec<SnapshotRecord>> {
        let sql = format!(
            "SELECT product, variant, code, stock, warehouse, opening, `return`, created_at, updated_at \
             FROM {} ORDER BY created_at DESC",
            warehouse.inventory_table(),
        );
        Ok(sqlx::query_as::<_, SnapshotRecord>(&sql)
            .fetch_all(self.pool())
            .await?)
    }

    /// Inventory rows created on one calendar date, optionally narrowed by
    /// a product-name/code substring.
    pub async fn filter_inventory(
        &self,
        warehouse: Warehouse,
        date: NaiveDate,
        product: Option<&str>,
    ) -> StoreResult<Vec<SnapshotRecord>> {
        let mut sql = format!(
            "SELECT product, variant, code, stock, warehouse, opening, `return`, created_at, updated_at \
             FROM {} WHERE DATE(created_at) = ?",
            warehouse.inventory_table(),
        );
        let product = product.map(str::trim).filter(|p| !p.is_empty());
        if product.is_some() {
            sql.push_str(" AND (LOWER(product) LIKE ? OR code LIKE ?)");
        }

        let mut query = sqlx::query_as::<_, SnapshotRecord>(&sql).bind(date);
        if let Some(p) = product {
            query = query
                .bind(format!("%{}%", p.to_ascii_lowercase()))
                .bind(format!("%{p}%"));
        }
        Ok(query.fetch_all(self.pool()).await?)
    }

    /// Catalog suggestions by product-name substring, capped at 10.
    pub async fn search_catalog(&self, query: &str) -> StoreResult<Vec<CatalogRow>> {
        let rows = sqlx::query_as::<_, CatalogRow>(
            "SELECT DISTINCT p_id, product_name, product_variant, barcode \
             FROM dispatch_product WHERE LOWER(product_name) LIKE ? LIMIT 10",
        )
        .bind(format!("%{}%", query.trim().to_ascii_lowercase()))
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Catalog suggestions tolerant of space/dash/underscore gaps between
    /// the query's words, matched against name or barcode.
    pub async fn search_catalog_fuzzy(&self, query: &str) -> StoreResult<Vec<CatalogRow>> {
        let cleaned = query.trim().to_ascii_lowercase();
        let pattern = format!(
            ".*{}.*",
            cleaned.split_whitespace().collect::<Vec<_>>().join("[ -_]?")
        );
        let rows = sqlx::query_as::<_, CatalogRow>(
            "SELECT p_id, product_name, product_variant, barcode \
             FROM dispatch_product \
             WHERE LOWER(product_name) REGEXP ? OR LOWER(barcode) REGEXP ?",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn logistics_names(&self) -> StoreResult<Vec<String>> {
        Ok(sqlx::query_scalar::<_, String>("SELECT name FROM logistics")
            .fetch_all(self.pool())
            .await?)
    }

    pub async fn payment_modes(&self) -> StoreResult<Vec<String>> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT mode_name FROM payment_mode")
                .fetch_all(self.pool())
                .await?,
        )
    }

    pub async fn processed_persons(&self) -> StoreResult<Vec<String>> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT name FROM processed_persons")
                .fetch_all(self.pool())
                .await?,
        )
    }

    /// Order sheet: dispatch rows across the selected warehouses matching
    /// the filter, as one `UNION ALL` scan with bound parameters.
    pub async fn ordersheet(&self, filter: &OrdersheetFilter) -> StoreResult<Vec<DispatchRecord>> {
        let warehouses: &[Warehouse] = if filter.warehouses.is_empty() {
            &Warehouse::ALL
        } else {
            &filter.warehouses
        };

        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        fn like(
            column: &str,
            value: &Option<String>,
            conditions: &mut Vec<String>,
            params: &mut Vec<String>,
        ) {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                conditions.push(format!("{column} LIKE ?"));
                params.push(format!("%{v}%"));
            }
        }

        like("order_ref", &filter.order_ref, &mut conditions, &mut params);
        like("product_name", &filter.product_name, &mut conditions, &mut params);
        like("variant", &filter.variant, &mut conditions, &mut params);

        if let Some(v) = filter
            .barcode_awb
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            conditions.push("(barcode LIKE ? OR awb LIKE ?)".to_string());
            params.push(format!("%{v}%"));
            params.push(format!("%{v}%"));
        }

        if !filter.logistics.is_empty() {
            let placeholders = vec!["?"; filter.logistics.len()].join(", ");
            conditions.push(format!("logistics IN ({placeholders})"));
            params.extend(filter.logistics.iter().cloned());
        }

        like("parcel_type", &filter.parcel_type, &mut conditions, &mut params);

        if let Some(v) = filter
            .payment_mode
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            conditions.push("payment_mode = ?".to_string());
            params.push(v.to_string());
        }
        if let Some(v) = filter
            .processed_by
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            conditions.push("processed_by = ?".to_string());
            params.push(v.to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let sql = warehouses
            .iter()
            .map(|w| {
                format!(
                    "SELECT {DISPATCH_COLUMNS} FROM {}{}",
                    w.dispatch_table(),
                    where_clause
                )
            })
            .collect::<Vec<_>>()
            .join(" UNION ALL ");

        let mut query = sqlx::query_as::<_, DispatchRecord>(&sql);
        for _ in warehouses {
            for param in &params {
                query = query.bind(param);
            }
        }
        Ok(query.fetch_all(self.pool()).await?)
    }
}
