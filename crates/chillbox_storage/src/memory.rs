//! In-process store built on persistent data structures.
//!
//! Beginning a transaction clones the current state in O(1) through
//! structural sharing. Commit swaps the working copy in; drop discards it.

use chrono::{DateTime, Utc};
use im::{OrdMap, Vector};

use chillbox_foundation::{Error, ItemId, Result};

use crate::record::{HistoryEntry, InventoryRecord, PendingChange};
use crate::snapshot::Snapshot;
use crate::store::{InventoryStore, StoreTransaction};

#[derive(Clone, Debug)]
struct State {
    records: OrdMap<ItemId, InventoryRecord>,
    history: Vector<HistoryEntry>,
    next_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            records: OrdMap::new(),
            history: Vector::new(),
            next_id: 1,
        }
    }
}

impl State {
    fn quantity(&self, item: &ItemId) -> u32 {
        self.records.get(item).map_or(0, |r| r.quantity)
    }
}

/// Non-durable store; useful for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: State,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryStore for MemoryStore {
    type Transaction<'a> = MemoryTransaction<'a>;

    fn begin(&mut self) -> Result<MemoryTransaction<'_>> {
        let working = self.state.clone();
        Ok(MemoryTransaction {
            live: &mut self.state,
            working,
        })
    }

    fn quantity(&self, item: &ItemId) -> Result<u32> {
        Ok(self.state.quantity(item))
    }

    fn list_all(&self) -> Result<Snapshot> {
        Ok(Snapshot::new(self.state.records.values().cloned().collect()))
    }

    fn history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.state.history.iter().cloned().collect())
    }
}

/// Working copy of a [`MemoryStore`].
pub struct MemoryTransaction<'a> {
    live: &'a mut State,
    working: State,
}

impl StoreTransaction for MemoryTransaction<'_> {
    fn quantity(&self, item: &ItemId) -> Result<u32> {
        Ok(self.working.quantity(item))
    }

    fn write_quantity(&mut self, item: &ItemId, quantity: u32, at: DateTime<Utc>) -> Result<()> {
        self.working.records.insert(
            item.clone(),
            InventoryRecord {
                item: item.clone(),
                quantity,
                last_modified: Some(at),
            },
        );
        Ok(())
    }

    fn append_history(&mut self, change: &PendingChange) -> Result<HistoryEntry> {
        let entry = HistoryEntry::from_pending(self.working.next_id, change);
        self.working.next_id += 1;
        self.working.history.push_back(entry.clone());
        Ok(entry)
    }

    fn latest_history(&self) -> Result<Option<HistoryEntry>> {
        Ok(self.working.history.last().cloned())
    }

    fn delete_history(&mut self, id: i64) -> Result<()> {
        let idx = self
            .working
            .history
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| Error::storage(format!("history entry {id} not found")))?;
        self.working.history.remove(idx);
        Ok(())
    }

    fn commit(self) -> Result<()> {
        *self.live = self.working;
        Ok(())
    }
}
