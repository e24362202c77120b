//! Point-in-time view of every item's quantity.

use chillbox_foundation::ItemId;

use crate::record::InventoryRecord;

/// Full inventory at one moment, ordered by canonical id.
///
/// This is what display collaborators redraw from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    records: Vec<InventoryRecord>,
}

impl Snapshot {
    /// Creates a snapshot, sorting records by item id.
    #[must_use]
    pub fn new(mut records: Vec<InventoryRecord>) -> Self {
        records.sort_by(|a, b| a.item.cmp(&b.item));
        Self { records }
    }

    /// Quantity of an item; zero if it has never been stocked.
    #[must_use]
    pub fn quantity(&self, item: &ItemId) -> u32 {
        self.records
            .binary_search_by(|record| record.item.cmp(item))
            .map_or(0, |idx| self.records[idx].quantity)
    }

    /// All records, including items at zero.
    #[must_use]
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    /// Iterates over `(item, quantity)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.records.iter().map(|r| (&r.item, r.quantity))
    }

    /// Records with a positive quantity; what the freezer grid shows.
    pub fn in_stock(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.iter().filter(|r| r.quantity > 0)
    }

    /// In-stock records at or below `threshold`.
    pub fn low_stock(&self, threshold: u32) -> impl Iterator<Item = &InventoryRecord> {
        self.in_stock().filter(move |r| r.quantity <= threshold)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no item has ever been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
