//! Item names.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};

/// Name of an inventory item.
///
/// Names are opaque and case-sensitive. The only rule is that a name must not
/// be blank once surrounding whitespace is ignored; the stored text is kept
/// exactly as given, so `" apple"` and `"apple"` are different items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> InventoryResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InventoryError::invalid_argument(
                "item must be a non-empty string",
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemName {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}
