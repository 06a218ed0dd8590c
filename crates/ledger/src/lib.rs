//! `stockpilot-ledger` — the stock ledger reconciler.
//!
//! Combines a warehouse's inventory snapshot with its append-only dispatch
//! and damage/recovery history into derived totals and a unified,
//! chronologically ordered event log. This crate is pure computation over
//! already-fetched rows; all IO lives in `stockpilot-store`.

pub mod records;
pub mod reconcile;
pub mod timeline;

pub use records::{DamageRecord, DispatchRecord, SnapshotRecord};
pub use reconcile::{group_by_awb, totals, Totals, NO_AWB_KEY};
pub use timeline::{sort_chronologically, TimelineEvent};
