//! Durable inventory records, change history and schema migrations for Chillbox.
//!
//! This crate provides:
//! - [`InventoryStore`] / [`StoreTransaction`] - Transactional storage primitives
//! - [`SqliteStore`] - The on-device SQLite store
//! - [`MemoryStore`] - An in-process store with snapshot transactions
//! - [`migration`] - Versioned schema scripts applied at open
//! - [`Snapshot`] - Current quantities for display collaborators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod memory;
pub mod migration;
pub mod record;
pub mod snapshot;
pub mod sqlite;
pub mod store;

pub use memory::MemoryStore;
pub use record::{HistoryEntry, InventoryRecord, PendingChange};
pub use snapshot::Snapshot;
pub use sqlite::SqliteStore;
pub use store::{InventoryStore, StoreTransaction};
