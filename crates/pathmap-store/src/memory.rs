use std::collections::BTreeMap;
use std::sync::RwLock;

use pathmap_types::FileRecord;

use crate::error::{StoreError, StoreResult};
use crate::traits::PathDb;

type PathKey = (String, String);

/// In-memory, `BTreeMap`-based metadata index.
///
/// Intended for tests and embedding. Records are keyed by
/// `(filesystem, path)`; inserting an existing key replaces the record, so
/// the latest committed write for a path wins.
pub struct InMemoryPathDb {
    records: RwLock<BTreeMap<PathKey, FileRecord>>,
}

impl InMemoryPathDb {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Look up the record for a logical path.
    pub fn get(&self, filesystem: &str, path: &str) -> Option<FileRecord> {
        let map = self.records.read().expect("lock poisoned");
        map.get(&(filesystem.to_string(), path.to_string())).cloned()
    }

    /// Returns `true` if a record exists for the logical path.
    pub fn contains(&self, filesystem: &str, path: &str) -> bool {
        self.get(filesystem, path).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no records exist.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// All records, ordered by `(filesystem, path)`.
    pub fn records(&self) -> Vec<FileRecord> {
        self.records
            .read()
            .expect("lock poisoned")
            .values()
            .cloned()
            .collect()
    }

}

impl Default for InMemoryPathDb {
    fn default() -> Self {
        Self::new()
    }
}

impl PathDb for InMemoryPathDb {
    fn insert(&self, record: &FileRecord) -> StoreResult<()> {
        record
            .validate()
            .map_err(|e| StoreError::MetadataInsert(e.to_string()))?;
        let key = (record.filesystem.clone(), record.path.clone());
        let mut map = self.records.write().expect("lock poisoned");
        map.insert(key, record.clone());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryPathDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPathDb")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pathmap_types::FileInfo;
    use std::sync::Arc;

    fn record(fs: &str, path: &str, size: u64) -> FileRecord {
        let info = FileInfo::new(format!("id-{path}"), "aa/bb").unwrap();
        FileRecord::committed(fs, path, &info, size, None, Utc::now(), 0)
    }

    #[test]
    fn insert_and_get() {
        let db = InMemoryPathDb::new();
        let rec = record("maven", "/org/foo.pom", 10);
        db.insert(&rec).unwrap();
        assert_eq!(db.get("maven", "/org/foo.pom"), Some(rec));
        assert!(db.contains("maven", "/org/foo.pom"));
    }

    #[test]
    fn filesystems_are_separate_namespaces() {
        let db = InMemoryPathDb::new();
        db.insert(&record("a", "/x", 1)).unwrap();
        db.insert(&record("b", "/x", 2)).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.get("a", "/x").unwrap().size, 1);
        assert_eq!(db.get("b", "/x").unwrap().size, 2);
    }

    #[test]
    fn reinsert_replaces() {
        let db = InMemoryPathDb::new();
        db.insert(&record("fs", "/x", 1)).unwrap();
        db.insert(&record("fs", "/x", 5)).unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.get("fs", "/x").unwrap().size, 5);
    }

    #[test]
    fn rejects_invalid_record() {
        let db = InMemoryPathDb::new();
        let err = db.insert(&record("fs", "", 1)).unwrap_err();
        assert!(matches!(err, StoreError::MetadataInsert(ref msg) if msg.contains("path")));
        assert!(db.is_empty());
    }

    #[test]
    fn records_are_ordered() {
        let db = InMemoryPathDb::new();
        db.insert(&record("fs", "/b", 1)).unwrap();
        db.insert(&record("fs", "/a", 1)).unwrap();
        let paths: Vec<_> = db.records().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/a", "/b"]);
    }

    #[test]
    fn concurrent_inserts_for_distinct_paths() {
        let db = Arc::new(InMemoryPathDb::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let db = Arc::clone(&db);
                std::thread::spawn(move || {
                    for j in 0..25 {
                        db.insert(&record("fs", &format!("/t{i}/f{j}"), 1)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(db.len(), 200);
    }
}
