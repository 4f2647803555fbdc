use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use snip_types::SnipRecord;

/// Snip history persisted as a JSON array, oldest first.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all records; a missing file is an empty history.
    pub fn load(&self) -> Result<Vec<SnipRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data)
                .with_context(|| format!("Malformed history file {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).context("Failed to read history file"),
        }
    }

    /// Append a record, dropping the oldest entries past `max_entries`.
    /// Returns the stored history, newest last.
    pub fn append(&self, record: SnipRecord, max_entries: usize) -> Result<Vec<SnipRecord>> {
        let mut records = self.load()?;
        records.push(record);
        if records.len() > max_entries {
            let excess = records.len() - max_entries;
            records.drain(..excess);
        }
        self.save(&records)?;
        Ok(records)
    }

    /// Delete the record with the given timestamp, if present.
    pub fn remove(&self, timestamp: &str) -> Result<Vec<SnipRecord>> {
        let mut records = self.load()?;
        records.retain(|r| r.timestamp != timestamp);
        self.save(&records)?;
        Ok(records)
    }

    fn save(&self, records: &[SnipRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write history file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u32) -> SnipRecord {
        SnipRecord {
            timestamp: format!("2026-01-01 00:00:{n:02}"),
            text: format!("text {n}"),
        }
    }

    fn temp_store(tag: &str) -> HistoryStore {
        let path = std::env::temp_dir().join(format!(
            "snipgrab-history-{}-{tag}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        HistoryStore::new(path)
    }

    #[test]
    fn missing_file_is_empty_history() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order_and_trims_oldest() {
        let store = temp_store("trim");

        for n in 0..5 {
            store.append(record(n), 3).unwrap();
        }

        let records = store.load().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], record(2));
        assert_eq!(records[2], record(4));

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn remove_deletes_by_timestamp() {
        let store = temp_store("remove");
        store.append(record(1), 10).unwrap();
        store.append(record(2), 10).unwrap();

        let left = store.remove(&record(1).timestamp).unwrap();
        assert_eq!(left, vec![record(2)]);

        // Removing an unknown timestamp is a no-op.
        let left = store.remove("1999-01-01 00:00:00").unwrap();
        assert_eq!(left, vec![record(2)]);

        let _ = fs::remove_file(&store.path);
    }
}
