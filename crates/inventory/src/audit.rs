//! Audit trail of stock additions.
//!
//! The store never keeps an audit trail of its own. `add_item` hands back an
//! [`AuditEntry`] and the caller decides whether to keep it, typically by
//! pushing it onto an [`AuditLog`] it owns.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockledger_core::{ItemName, Quantity};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One recorded addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub item: ItemName,
    pub qty: Quantity,
    /// Local wall-clock time of the addition.
    pub occurred_at: NaiveDateTime,
}

impl AuditEntry {
    pub fn new(item: ItemName, qty: Quantity, occurred_at: NaiveDateTime) -> Self {
        Self {
            item,
            qty,
            occurred_at,
        }
    }
}

/// Renders as `<timestamp>: Added <qty> of <item>` with a second-precision
/// ISO-8601 timestamp.
impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.occurred_at.format(TIMESTAMP_FORMAT),
            self.qty,
            self.item
        )
    }
}

/// Caller-owned, append-only list of audit entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    /// Formatted lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a AuditLog {
    type Item = &'a AuditEntry;
    type IntoIter = std::slice::Iter<'a, AuditEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
