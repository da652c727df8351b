//! In-memory inventory ledger with JSON-file persistence.
//!
//! [`InventoryStore`] owns a mapping from item name to non-negative quantity.
//! Mutations validate their input before touching state, so every call is
//! all-or-nothing. Loading is best-effort and never fails the caller; saving
//! reports every I/O failure.

pub mod audit;
pub mod persistence;
pub mod report;
pub mod store;

#[cfg(test)]
mod log_capture;

pub use audit::{AuditEntry, AuditLog};
pub use persistence::LoadOutcome;
pub use store::InventoryStore;

pub use stockledger_core::{
    DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD, InventoryError, InventoryResult,
    ItemName, Quantity, Threshold,
};
