//! Scripted walk through every store operation.

use std::io::Write;

use anyhow::Context;

use stockledger_core::InventoryError;
use stockledger_inventory::{AuditLog, InventoryStore};

use crate::config::DemoConfig;

/// Run the demo against `config.inventory_file`, writing output to `out`.
///
/// Expected rejections (negative quantity, unknown item) are logged and the
/// run continues; a failed save aborts it.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<()> {
    let mut logs = AuditLog::new();
    let mut store = InventoryStore::new();

    logs.push(store.add_item("apple", 10)?);

    match store.add_item("banana", -2) {
        Err(InventoryError::InvalidArgument(_)) => {
            tracing::info!("Rejected negative quantity for banana");
        }
        Err(err) => return Err(err.into()),
        Ok(entry) => logs.push(entry),
    }

    let removals = store
        .remove_item("apple", 3)
        .and_then(|()| store.remove_item("orange", 1));
    match removals {
        Err(err @ InventoryError::NotFound(_)) => {
            tracing::info!("Tried to remove non-existent item: {err}");
        }
        other => other?,
    }

    writeln!(out, "Apple stock: {}", store.get_qty("apple")?)?;
    writeln!(
        out,
        "Low items: {:?}",
        store.check_low_items(config.low_stock_threshold)?
    )?;

    store
        .save_data(&config.inventory_file)
        .with_context(|| format!("failed to save {}", config.inventory_file.display()))?;
    store.load_data(&config.inventory_file);
    store.write_report(out)?;

    if !logs.is_empty() {
        writeln!(out, "\nAudit trail:")?;
        for entry in &logs {
            writeln!(out, "{entry}")?;
        }
    }

    Ok(())
}
