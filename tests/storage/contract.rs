//! Behaviour every `InventoryStore` must share

use chillbox_foundation::{ItemId, OperationKind};
use chillbox_storage::{
    InventoryStore, MemoryStore, PendingChange, SqliteStore, StoreTransaction,
};
use chrono::Utc;

fn id(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

fn change(item: &ItemId, previous: u32, new: u32, kind: OperationKind) -> PendingChange {
    PendingChange {
        item: item.clone(),
        previous_quantity: previous,
        new_quantity: new,
        kind,
        timestamp: Utc::now(),
    }
}

fn write<S: InventoryStore>(store: &mut S, item: &ItemId, previous: u32, new: u32) {
    let mut tx = store.begin().unwrap();
    tx.write_quantity(item, new, Utc::now()).unwrap();
    tx.append_history(&change(item, previous, new, OperationKind::Set))
        .unwrap();
    tx.commit().unwrap();
}

// =============================================================================
// Shared Checks
// =============================================================================

fn snapshot_is_ordered_and_keeps_zero_rows<S: InventoryStore>(mut store: S) {
    write(&mut store, &id("steak"), 0, 2);
    write(&mut store, &id("ice_cream"), 0, 0);
    write(&mut store, &id("salmon"), 0, 5);

    let snapshot = store.list_all().unwrap();
    let rows: Vec<(&str, u32)> = snapshot.iter().map(|(i, q)| (i.as_str(), q)).collect();
    assert_eq!(rows, vec![("ice_cream", 0), ("salmon", 5), ("steak", 2)]);
    assert_eq!(snapshot.in_stock().count(), 2);
}

fn history_is_oldest_first_with_increasing_ids<S: InventoryStore>(mut store: S) {
    write(&mut store, &id("steak"), 0, 1);
    write(&mut store, &id("salmon"), 0, 3);
    write(&mut store, &id("steak"), 1, 4);

    let history = store.history().unwrap();
    let items: Vec<&str> = history.iter().map(|e| e.item.as_str()).collect();
    assert_eq!(items, vec!["steak", "salmon", "steak"]);
    assert!(history.windows(2).all(|w| w[0].id < w[1].id));
}

fn rollback_discards_quantity_and_history<S: InventoryStore>(mut store: S) {
    write(&mut store, &id("steak"), 0, 1);
    {
        let mut tx = store.begin().unwrap();
        tx.write_quantity(&id("steak"), 9, Utc::now()).unwrap();
        let latest = tx.latest_history().unwrap().unwrap();
        tx.delete_history(latest.id).unwrap();
        tx.append_history(&change(&id("steak"), 1, 9, OperationKind::Add))
            .unwrap();
    }
    assert_eq!(store.quantity(&id("steak")).unwrap(), 1);
    let history = store.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].new_quantity, 1);
}

fn transaction_sees_its_own_writes<S: InventoryStore>(mut store: S) {
    let mut tx = store.begin().unwrap();
    assert_eq!(tx.quantity(&id("salmon")).unwrap(), 0);
    tx.write_quantity(&id("salmon"), 6, Utc::now()).unwrap();
    assert_eq!(tx.quantity(&id("salmon")).unwrap(), 6);
    let entry = tx
        .append_history(&change(&id("salmon"), 0, 6, OperationKind::Add))
        .unwrap();
    assert_eq!(tx.latest_history().unwrap(), Some(entry));
    tx.commit().unwrap();
}

// =============================================================================
// Memory Store
// =============================================================================

#[test]
fn memory_snapshot() {
    snapshot_is_ordered_and_keeps_zero_rows(MemoryStore::new());
}

#[test]
fn memory_history() {
    history_is_oldest_first_with_increasing_ids(MemoryStore::new());
}

#[test]
fn memory_rollback() {
    rollback_discards_quantity_and_history(MemoryStore::new());
}

#[test]
fn memory_read_your_writes() {
    transaction_sees_its_own_writes(MemoryStore::new());
}

// =============================================================================
// SQLite Store
// =============================================================================

#[test]
fn sqlite_snapshot() {
    snapshot_is_ordered_and_keeps_zero_rows(SqliteStore::open_in_memory().unwrap());
}

#[test]
fn sqlite_history() {
    history_is_oldest_first_with_increasing_ids(SqliteStore::open_in_memory().unwrap());
}

#[test]
fn sqlite_rollback() {
    rollback_discards_quantity_and_history(SqliteStore::open_in_memory().unwrap());
}

#[test]
fn sqlite_read_your_writes() {
    transaction_sees_its_own_writes(SqliteStore::open_in_memory().unwrap());
}
