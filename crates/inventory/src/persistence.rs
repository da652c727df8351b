//! JSON-file persistence.
//!
//! The file is a single JSON object mapping item names to non-negative
//! integers. Loading is best-effort: a missing file means "start empty" and a
//! broken file is logged and skipped, leaving the store as it was. Saving
//! overwrites the whole file and reports every failure.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde_json::Value as JsonValue;

use stockledger_core::{InventoryError, InventoryResult};

use crate::store::InventoryStore;

/// What a call to [`InventoryStore::load_data`] ended up doing.
///
/// This is informational only; loading never fails the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and its valid entries replaced the store.
    Loaded { accepted: usize, rejected: usize },
    /// No file at the path; the store was reset to empty.
    Missing,
    /// The file could not be used; the store is unchanged.
    Failed { reason: String },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

impl InventoryStore {
    /// Replace the store with the contents of the JSON file at `path`.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No inventory file found at {}; starting fresh",
                    path.display()
                );
                self.replace_stock(BTreeMap::new());
                return LoadOutcome::Missing;
            }
            Err(err) => return load_failed(path, err.to_string()),
        };

        let entries = match serde_json::from_str::<JsonValue>(&text) {
            Ok(JsonValue::Object(entries)) => entries,
            Ok(_) => {
                return load_failed(path, "Inventory file must contain a JSON object".to_string());
            }
            Err(err) => return load_failed(path, err.to_string()),
        };

        let mut cleaned = BTreeMap::new();
        let mut rejected = 0;
        for (name, value) in entries {
            match record_quantity(&value) {
                Some(qty) => {
                    cleaned.insert(name, qty);
                }
                None => {
                    tracing::warn!(item = %name, value = %value, "Ignoring invalid record");
                    rejected += 1;
                }
            }
        }

        let accepted = cleaned.len();
        self.replace_stock(cleaned);
        tracing::info!("Loaded {accepted} items from {}", path.display());

        LoadOutcome::Loaded { accepted, rejected }
    }

    /// Write the whole store to `path` as pretty-printed JSON.
    pub fn save_data(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let path = path.as_ref();

        let file = File::create(path).map_err(|err| InventoryError::io(path, err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self.stock())
            .map_err(|err| InventoryError::io(path, err.into()))?;
        writer.flush().map_err(|err| InventoryError::io(path, err))?;

        tracing::info!("Saved {} items to {}", self.len(), path.display());
        Ok(())
    }
}

/// Quantity held by a record: a non-negative JSON integer. The literal `-0`
/// is an integer zero, while `-0.0` and `3.0` are floats and do not count.
fn record_quantity(value: &JsonValue) -> Option<u64> {
    let JsonValue::Number(number) = value else {
        return None;
    };
    number
        .as_u64()
        .or_else(|| (number.to_string() == "-0").then_some(0))
}

fn load_failed(path: &Path, reason: String) -> LoadOutcome {
    tracing::error!("Failed to load from {}: {reason}", path.display());
    LoadOutcome::Failed { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_capture::{capture_logs, line_containing};

    fn store_with(entries: &[(&str, u64)]) -> InventoryStore {
        InventoryStore::from_stock(
            entries
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect(),
        )
    }

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_filters_invalid_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "mixed.json",
            r#"{"x": 3, "y": -1, "z": "bad", "w": 2.5, "v": null, "u": [1], "t": -0, "s": -0.0, "r": 3.0}"#,
        );

        let mut store = InventoryStore::new();
        let outcome = store.load_data(&path);

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                accepted: 2,
                rejected: 7
            }
        );
        assert_eq!(
            store.snapshot(),
            BTreeMap::from([("t".to_string(), 0), ("x".to_string(), 3)])
        );
    }

    #[test]
    fn load_keeps_zero_quantities() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "zero.json", r#"{"bolt": 0}"#);

        let mut store = InventoryStore::new();
        store.load_data(&path);

        assert!(store.contains("bolt"));
        assert_eq!(store.check_low_items(1).unwrap(), vec!["bolt".to_string()]);
    }

    #[test]
    fn load_replaces_rather_than_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "inv.json", r#"{"pear": 2}"#);

        let mut store = store_with(&[("apple", 9)]);
        store.load_data(&path);

        assert_eq!(store.snapshot(), BTreeMap::from([("pear".to_string(), 2)]));
    }

    #[test]
    fn load_missing_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&[("apple", 9)]);

        let outcome = store.load_data(dir.path().join("absent.json"));

        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn load_malformed_json_keeps_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "broken.json", r#"{"apple": 3"#);
        let mut store = store_with(&[("apple", 9)]);

        let outcome = store.load_data(&path);

        assert!(matches!(outcome, LoadOutcome::Failed { .. }));
        assert_eq!(store.get_qty("apple").unwrap(), 9);
    }

    #[test]
    fn load_non_object_keeps_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "list.json", r#"[["apple", 3]]"#);
        let mut store = store_with(&[("apple", 9)]);

        match store.load_data(&path) {
            LoadOutcome::Failed { reason } => assert!(reason.contains("JSON object")),
            other => panic!("Expected Failed outcome, got {other:?}"),
        }
        assert_eq!(store.get_qty("apple").unwrap(), 9);
    }

    #[test]
    fn load_invalid_utf8_keeps_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let mut store = store_with(&[("apple", 9)]);

        assert!(!store.load_data(&path).is_loaded());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_directory_path_keeps_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&[("apple", 9)]);

        assert!(matches!(
            store.load_data(dir.path()),
            LoadOutcome::Failed { .. }
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_writes_indented_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let store = store_with(&[("pear", 2), ("apple", 7)]);

        store.save_data(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"apple\": 7,\n  \"pear\": 2\n}");
    }

    #[test]
    fn save_empty_store_writes_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        InventoryStore::new().save_data(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn save_keeps_non_ascii_names_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utf8.json");
        let store = store_with(&[("café", 1)]);

        store.save_data(&path).unwrap();

        assert!(std::fs::read_to_string(&path).unwrap().contains("café"));
    }

    #[test]
    fn save_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("inv.json");
        let store = store_with(&[("apple", 1)]);

        match store.save_data(&path).unwrap_err() {
            InventoryError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_warns_once_per_rejected_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "mixed.json", r#"{"x": 3, "y": -1, "z": "bad"}"#);
        let mut store = InventoryStore::new();

        let (_, lines) = capture_logs(|| store.load_data(&path));

        let rejected_y = line_containing(&lines, "item=y");
        assert!(rejected_y.contains("WARN"));
        assert!(rejected_y.contains("Ignoring invalid record"));
        assert!(rejected_y.contains("value=-1"));

        let rejected_z = line_containing(&lines, "item=z");
        assert!(rejected_z.contains("WARN"));
        assert!(rejected_z.contains(r#"value="bad""#));

        assert_eq!(lines.iter().filter(|l| l.contains("WARN")).count(), 2);
        assert!(line_containing(&lines, "Loaded 1 items from").contains("INFO"));
    }

    #[test]
    fn load_of_missing_file_logs_info() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new();

        let (_, lines) = capture_logs(|| store.load_data(dir.path().join("absent.json")));

        let line = line_containing(&lines, "No inventory file found at");
        assert!(line.contains("INFO"));
        assert!(line.contains("starting fresh"));
    }

    #[test]
    fn load_failure_logs_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&[("apple", 9)]);

        let (_, lines) = capture_logs(|| store.load_data(dir.path()));

        assert!(line_containing(&lines, "Failed to load from").contains("ERROR"));
        assert!(!lines.iter().any(|l| l.contains("Loaded")));
    }

    #[test]
    fn save_logs_item_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let store = store_with(&[("pear", 2), ("apple", 7)]);

        let (result, lines) = capture_logs(|| store.save_data(&path));

        result.unwrap();
        assert!(line_containing(&lines, "Saved 2 items to").contains("INFO"));
    }
}
