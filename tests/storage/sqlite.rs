//! File-backed SQLite store tests

use std::path::PathBuf;

use chillbox_foundation::{ItemId, OperationKind};
use chillbox_storage::{InventoryStore, PendingChange, SqliteStore, StoreTransaction};
use chrono::Utc;

/// A database file removed when dropped.
struct TempDb(PathBuf);

impl TempDb {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "chillbox-{name}-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn quantities_and_history_survive_reopen() {
    let db = TempDb::new("reopen");
    let steak = ItemId::new("steak").unwrap();
    {
        let mut store = SqliteStore::open(&db.0).unwrap();
        let mut tx = store.begin().unwrap();
        tx.write_quantity(&steak, 3, Utc::now()).unwrap();
        tx.append_history(&PendingChange {
            item: steak.clone(),
            previous_quantity: 0,
            new_quantity: 3,
            kind: OperationKind::Add,
            timestamp: Utc::now(),
        })
        .unwrap();
        tx.commit().unwrap();
    }

    let store = SqliteStore::open(&db.0).unwrap();
    assert_eq!(store.quantity(&steak).unwrap(), 3);
    let history = store.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, OperationKind::Add);
    assert!(store.list_all().unwrap().records()[0].last_modified.is_some());
}

#[test]
fn reopening_does_not_rerun_migrations() {
    let db = TempDb::new("migrations");
    drop(SqliteStore::open(&db.0).unwrap());
    let store = SqliteStore::open(&db.0).unwrap();
    let count: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}
