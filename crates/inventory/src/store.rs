//! The inventory store: mutations and queries.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};

use stockledger_core::{InventoryError, InventoryResult, ItemName, Quantity, Threshold};

use crate::audit::AuditEntry;

/// In-memory mapping from item name to stock quantity.
///
/// Keys are kept in name order, which is also the reporting order. A removal
/// that would take an item to zero (or below) deletes the key instead of
/// storing zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    stock_data: BTreeMap<String, u64>,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing mapping.
    pub fn from_stock(stock_data: BTreeMap<String, u64>) -> Self {
        Self { stock_data }
    }

    /// Add `qty` units of `item`, stamped with the current local time.
    ///
    /// Returns the audit entry describing the addition; keeping it is up to
    /// the caller.
    pub fn add_item(&mut self, item: &str, qty: i64) -> InventoryResult<AuditEntry> {
        self.add_item_at(item, qty, Local::now().naive_local())
    }

    /// Add `qty` units of `item`, recording the addition at `occurred_at`.
    pub fn add_item_at(
        &mut self,
        item: &str,
        qty: i64,
        occurred_at: NaiveDateTime,
    ) -> InventoryResult<AuditEntry> {
        let name = ItemName::parse(item)?;
        let qty = Quantity::non_negative(qty)?;

        let current = Quantity::new(self.stock_data.get(name.as_str()).copied().unwrap_or(0));
        let total = current.checked_add(qty)?;

        // Adding nothing to an unknown item must not leave a zero entry behind.
        if total != Quantity::ZERO || self.stock_data.contains_key(name.as_str()) {
            self.stock_data.insert(name.as_str().to_owned(), total.get());
        }

        tracing::debug!(item = %name, delta = qty.get(), total = total.get(), "added stock");

        Ok(AuditEntry::new(name, qty, occurred_at))
    }

    /// Remove `qty` units of an existing `item`.
    ///
    /// The item is deleted once its quantity would reach zero or below.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> InventoryResult<()> {
        let name = ItemName::parse(item)?;
        let qty = Quantity::positive(qty)?;

        let Some(current) = self.stock_data.get(name.as_str()).copied() else {
            return Err(InventoryError::not_found(name));
        };

        match current.checked_sub(qty.get()).filter(|remaining| *remaining > 0) {
            Some(remaining) => {
                self.stock_data.insert(name.as_str().to_owned(), remaining);
                tracing::debug!(item = %name, removed = qty.get(), remaining, "removed stock");
            }
            None => {
                self.stock_data.remove(name.as_str());
                tracing::debug!(
                    item = %name,
                    removed = qty.get(),
                    remaining = "absent",
                    "removed stock"
                );
            }
        }

        Ok(())
    }

    /// Quantity on hand for `item`, or 0 when it is not stocked.
    pub fn get_qty(&self, item: &str) -> InventoryResult<u64> {
        let name = ItemName::parse(item)?;
        Ok(self.stock_data.get(name.as_str()).copied().unwrap_or(0))
    }

    /// Names of all items whose quantity is strictly below `threshold`.
    ///
    /// Callers must not rely on the order of the returned names.
    pub fn check_low_items(&self, threshold: i64) -> InventoryResult<Vec<String>> {
        let threshold = Threshold::parse(threshold)?;
        Ok(self
            .stock_data
            .iter()
            .filter(|(_, qty)| threshold.is_low(**qty))
            .map(|(name, _)| name.clone())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.stock_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock_data.is_empty()
    }

    /// Whether `item` has an entry (possibly a loaded zero).
    pub fn contains(&self, item: &str) -> bool {
        self.stock_data.contains_key(item)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.stock_data.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.stock_data.clone()
    }

    pub(crate) fn stock(&self) -> &BTreeMap<String, u64> {
        &self.stock_data
    }

    pub(crate) fn replace_stock(&mut self, stock_data: BTreeMap<String, u64>) {
        self.stock_data = stock_data;
    }
}
