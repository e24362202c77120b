//! Rows held by the inventory store.

use chrono::{DateTime, Utc};

use chillbox_foundation::{ItemId, OperationKind};

/// Current quantity of one canonical item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryRecord {
    /// Canonical item
    pub item: ItemId,
    /// Current quantity, never negative
    pub quantity: u32,
    /// When the quantity last changed
    pub last_modified: Option<DateTime<Utc>>,
}

/// A history row that has not been written yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingChange {
    /// Item that changed
    pub item: ItemId,
    /// Quantity before the change
    pub previous_quantity: u32,
    /// Quantity after the change
    pub new_quantity: u32,
    /// What kind of command caused it
    pub kind: OperationKind,
    /// When it happened
    pub timestamp: DateTime<Utc>,
}

/// One applied mutation, append-only.
///
/// Entries are never modified; undo deletes the newest one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    /// Store-assigned, strictly increasing in creation order
    pub id: i64,
    /// Item that changed
    pub item: ItemId,
    /// Quantity before the change
    pub previous_quantity: u32,
    /// Quantity after the change
    pub new_quantity: u32,
    /// What kind of command caused it
    pub kind: OperationKind,
    /// When it happened
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Attaches a store-assigned id to a pending change.
    #[must_use]
    pub fn from_pending(id: i64, change: &PendingChange) -> Self {
        Self {
            id,
            item: change.item.clone(),
            previous_quantity: change.previous_quantity,
            new_quantity: change.new_quantity,
            kind: change.kind,
            timestamp: change.timestamp,
        }
    }
}
