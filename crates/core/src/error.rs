//! Inventory error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the ledger.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Ledger-level error.
///
/// Validation and lookup failures are raised before any mutation, so a caller
/// receiving one of these can rely on the store being unchanged.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An input failed validation (blank name, negative quantity, overflow).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The named item is not present in the store.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// Persisting the store failed.
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
