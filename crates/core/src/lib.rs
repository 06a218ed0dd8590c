//! `stockpilot-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the warehouse identity model, damage/recovery action kinds, and the domain
//! error type.

pub mod action;
pub mod error;
pub mod warehouse;

pub use action::ActionKind;
pub use error::{DomainError, DomainResult};
pub use warehouse::Warehouse;
