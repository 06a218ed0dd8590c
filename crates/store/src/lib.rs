//! `stockpilot-store` — MySQL access layer.
//!
//! The five-per-warehouse table layout is an internal detail here: callers
//! hand over a resolved [`stockpilot_core::Warehouse`] and this crate
//! translates it to the right partition. SQL identifiers only ever come
//! from the closed warehouse enum; all values are bound parameters.

pub mod error;
pub mod sheets;
pub mod store;
pub mod writes;

pub use error::{StoreError, StoreResult};
pub use sheets::{CatalogRow, OrdersheetFilter};
pub use store::Store;
pub use writes::{DamageInsert, DispatchLineInsert, ReturnInsert, SnapshotInsert};
