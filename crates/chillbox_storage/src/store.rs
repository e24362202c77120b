//! Storage traits.
//!
//! The inventory controller is the only writer. Every mutation happens
//! inside one [`StoreTransaction`]: the quantity write and the history append
//! for an operation commit together or not at all. Dropping a transaction
//! without calling [`StoreTransaction::commit`] rolls it back.

use chrono::{DateTime, Utc};

use chillbox_foundation::{ItemId, Result};

use crate::record::{HistoryEntry, PendingChange};
use crate::snapshot::Snapshot;

/// A durable holder of inventory records and history.
pub trait InventoryStore {
    /// Transaction type borrowed from this store.
    type Transaction<'a>: StoreTransaction
    where
        Self: 'a;

    /// Begins a write transaction.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the transaction cannot be started.
    fn begin(&mut self) -> Result<Self::Transaction<'_>>;

    /// Reads an item's committed quantity, zero if unseen.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    fn quantity(&self, item: &ItemId) -> Result<u32>;

    /// Reads every committed record, ordered by item id.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    fn list_all(&self) -> Result<Snapshot>;

    /// Reads the live history, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    fn history(&self) -> Result<Vec<HistoryEntry>>;
}

/// Reads and writes that commit atomically.
pub trait StoreTransaction {
    /// Reads an item's quantity as seen by this transaction.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    fn quantity(&self, item: &ItemId) -> Result<u32>;

    /// Writes an item's quantity, creating its record on first write.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the write fails.
    fn write_quantity(&mut self, item: &ItemId, quantity: u32, at: DateTime<Utc>) -> Result<()>;

    /// Appends a history entry and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the write fails.
    fn append_history(&mut self, change: &PendingChange) -> Result<HistoryEntry>;

    /// Reads the most recently created history entry across all items.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the read fails.
    fn latest_history(&self) -> Result<Option<HistoryEntry>>;

    /// Deletes a history entry so it cannot be undone twice.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the entry does not exist or the write fails.
    fn delete_history(&mut self, id: i64) -> Result<()>;

    /// Commits every change made in this transaction.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the commit fails; nothing is applied then.
    fn commit(self) -> Result<()>;
}
