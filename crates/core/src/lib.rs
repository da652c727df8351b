//! `stockledger-core`: validated building blocks for the stock ledger.
//!
//! This crate contains **pure** primitives (no IO, no logging): the error model
//! shared by every operation and the newtypes that carry already-validated
//! input into the store.

pub mod error;
pub mod item;
pub mod quantity;

pub use error::{InventoryError, InventoryResult};
pub use item::ItemName;
pub use quantity::{Quantity, Threshold};

/// Conventional location of the persisted inventory file.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Threshold used by low-stock reports when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;
