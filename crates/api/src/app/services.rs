//! Injected storage client + the reconciliation orchestration the track
//! endpoints run.

use stockpilot_core::Warehouse;
use stockpilot_ledger::{group_by_awb, sort_chronologically, totals, TimelineEvent};
use stockpilot_store::{Store, StoreError};

use crate::app::dto::{TrackDetails, TrackResponse};

/// Reconciliation failure: either the code has no snapshot row in the
/// warehouse (untrackable) or a fetch failed.
#[derive(Debug)]
pub enum ReportError {
    NotFound,
    Store(StoreError),
}

impl From<StoreError> for ReportError {
    fn from(err: StoreError) -> Self {
        ReportError::Store(err)
    }
}

pub struct AppServices {
    store: Store,
}

impl AppServices {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Full reconciliation report: derived totals plus the raw per-source
    /// detail, for one product code in one warehouse.
    ///
    /// The three fetches have no ordering dependency and run concurrently;
    /// the first failure aborts the whole reconciliation (no partial
    /// results).
    pub async fn track_report(
        &self,
        warehouse: Warehouse,
        barcode: &str,
    ) -> Result<TrackResponse, ReportError> {
        let (inventory, dispatch, damage) = tokio::try_join!(
            self.store.snapshot_rows(warehouse, barcode),
            self.store.dispatch_rows(warehouse, barcode),
            self.store.damage_rows(warehouse, barcode),
        )?;

        // A code with no snapshot row for this warehouse is not trackable.
        let Some(snapshot) = inventory.first() else {
            return Err(ReportError::NotFound);
        };

        let totals = totals(snapshot, &dispatch, &damage);

        Ok(TrackResponse {
            barcode: barcode.to_string(),
            warehouse: warehouse.canonical_name().to_string(),
            totals,
            details: TrackDetails {
                dispatch: group_by_awb(dispatch),
                damage_recovery: damage,
                inventory,
            },
        })
    }

    /// Unified event timeline for one product code: snapshot rows scoped to
    /// the warehouse, dispatch and damage history read globally, merged and
    /// sorted ascending by timestamp.
    ///
    /// Batches are appended inventory-first, then dispatch (fixed warehouse
    /// scan order), then damage; the stable sort preserves that order on
    /// timestamp ties.
    pub async fn track_timeline(
        &self,
        warehouse: Warehouse,
        barcode: &str,
    ) -> Result<Vec<TimelineEvent>, StoreError> {
        let (inventory, dispatch, damage) = tokio::try_join!(
            self.store.snapshot_rows(warehouse, barcode),
            self.store.dispatch_rows_global(barcode),
            self.store.damage_rows_global(barcode),
        )?;

        let mut events: Vec<TimelineEvent> = Vec::new();
        events.extend(inventory.iter().map(TimelineEvent::inventory));
        events.extend(dispatch.iter().map(TimelineEvent::dispatch));
        events.extend(damage.iter().map(TimelineEvent::damage));
        sort_chronologically(&mut events);

        Ok(events)
    }
}
