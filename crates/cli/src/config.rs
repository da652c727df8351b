//! Driver configuration, read from the environment.

use std::path::PathBuf;

use stockledger_core::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

pub const INVENTORY_FILE_ENV: &str = "STOCKLEDGER_FILE";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKLEDGER_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub inventory_file: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl DemoConfig {
    /// Read configuration from the process environment.
    ///
    /// Invalid values are logged and replaced by defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let inventory_file = match lookup(INVENTORY_FILE_ENV) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            Some(_) => {
                tracing::warn!("{INVENTORY_FILE_ENV} is blank; using {DEFAULT_INVENTORY_FILE}");
                defaults.inventory_file
            }
            None => defaults.inventory_file,
        };

        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_ENV) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(value) if value >= 0 => value,
                _ => {
                    tracing::warn!(
                        "{LOW_STOCK_THRESHOLD_ENV}={raw:?} is not a non-negative integer; using {DEFAULT_LOW_STOCK_THRESHOLD}"
                    );
                    defaults.low_stock_threshold
                }
            },
            None => defaults.low_stock_threshold,
        };

        Self {
            inventory_file,
            low_stock_threshold,
        }
    }
}
