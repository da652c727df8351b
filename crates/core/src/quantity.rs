//! Quantities and thresholds.
//!
//! Callers hand the ledger signed integers; these types are where negative or
//! otherwise out-of-range values are turned away.

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};

/// A non-negative stock count.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Quantity for an addition: zero is allowed.
    pub fn non_negative(raw: i64) -> InventoryResult<Self> {
        u64::try_from(raw).map(Self).map_err(|_| {
            InventoryError::invalid_argument(format!(
                "qty must be a non-negative integer (got {raw})"
            ))
        })
    }

    /// Quantity for a removal: must be at least one.
    pub fn positive(raw: i64) -> InventoryResult<Self> {
        if raw <= 0 {
            return Err(InventoryError::invalid_argument(format!(
                "qty must be a positive integer (got {raw})"
            )));
        }
        Ok(Self(raw as u64))
    }

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Quantity) -> InventoryResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| InventoryError::invalid_argument("qty overflows the stored total"))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// Low-stock threshold. Items strictly below it are reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u64);

impl Threshold {
    pub fn parse(raw: i64) -> InventoryResult<Self> {
        u64::try_from(raw).map(Self).map_err(|_| {
            InventoryError::invalid_argument(format!("threshold must be non-negative (got {raw})"))
        })
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_low(self, quantity: u64) -> bool {
        quantity < self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(crate::DEFAULT_LOW_STOCK_THRESHOLD as u64)
    }
}
