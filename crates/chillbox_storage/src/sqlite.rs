//! The on-device SQLite store.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, Transaction, TransactionBehavior, params};

use chillbox_foundation::{Error, ItemId, OperationKind, Result};

use crate::migration;
use crate::record::{HistoryEntry, InventoryRecord, PendingChange};
use crate::snapshot::Snapshot;
use crate::store::{InventoryStore, StoreTransaction};

/// Inventory store backed by a single SQLite database.
///
/// Opening a store applies any pending migrations.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the file cannot be opened, or a migration
    /// error if the schema cannot be brought up to date.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(storage)?;
        tracing::info!(path = %path.display(), "opened inventory database");
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// See [`SqliteStore::open`].
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage)?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(storage)?;
        migration::run_pending(&mut conn)?;
        Ok(Self { conn })
    }

    /// The underlying connection, for diagnostics.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl InventoryStore for SqliteStore {
    type Transaction<'a> = SqliteTransaction<'a>;

    fn begin(&mut self) -> Result<SqliteTransaction<'_>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(storage)?;
        Ok(SqliteTransaction { tx })
    }

    fn quantity(&self, item: &ItemId) -> Result<u32> {
        read_quantity(&self.conn, item)
    }

    fn list_all(&self) -> Result<Snapshot> {
        let mut stmt = self
            .conn
            .prepare("SELECT item_name, quantity, last_modified FROM inventory ORDER BY item_name")
            .map_err(storage)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, Option<DateTime<Utc>>>(2)?,
                ))
            })
            .map_err(storage)?;

        let mut records = Vec::new();
        for row in rows {
            let (name, quantity, last_modified) = row.map_err(storage)?;
            records.push(InventoryRecord {
                item: stored_item(&name)?,
                quantity: stored_quantity(quantity)?,
                last_modified,
            });
        }
        Ok(Snapshot::new(records))
    }

    fn history(&self) -> Result<Vec<HistoryEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_HISTORY} ORDER BY id"))
            .map_err(storage)?;
        let rows = stmt.query_map([], RawHistory::from_row).map_err(storage)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(storage)?.into_entry()?);
        }
        Ok(entries)
    }
}

/// An immediate-mode SQLite transaction; rolls back when dropped.
pub struct SqliteTransaction<'a> {
    tx: Transaction<'a>,
}

impl StoreTransaction for SqliteTransaction<'_> {
    fn quantity(&self, item: &ItemId) -> Result<u32> {
        read_quantity(&self.tx, item)
    }

    fn write_quantity(&mut self, item: &ItemId, quantity: u32, at: DateTime<Utc>) -> Result<()> {
        self.tx
            .execute(
                "INSERT INTO inventory (item_name, quantity, last_modified)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(item_name) DO UPDATE
                 SET quantity = excluded.quantity, last_modified = excluded.last_modified",
                params![item.as_str(), i64::from(quantity), at],
            )
            .map_err(storage)?;
        Ok(())
    }

    fn append_history(&mut self, change: &PendingChange) -> Result<HistoryEntry> {
        self.tx
            .execute(
                "INSERT INTO inventory_history
                 (item_name, previous_quantity, new_quantity, operation_type, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    change.item.as_str(),
                    i64::from(change.previous_quantity),
                    i64::from(change.new_quantity),
                    change.kind.as_str(),
                    change.timestamp,
                ],
            )
            .map_err(storage)?;
        let id = self.tx.last_insert_rowid();
        Ok(HistoryEntry::from_pending(id, change))
    }

    fn latest_history(&self) -> Result<Option<HistoryEntry>> {
        self.tx
            .query_row(
                &format!("{SELECT_HISTORY} ORDER BY id DESC LIMIT 1"),
                [],
                RawHistory::from_row,
            )
            .optional()
            .map_err(storage)?
            .map(RawHistory::into_entry)
            .transpose()
    }

    fn delete_history(&mut self, id: i64) -> Result<()> {
        let deleted = self
            .tx
            .execute("DELETE FROM inventory_history WHERE id = ?1", params![id])
            .map_err(storage)?;
        if deleted == 1 {
            Ok(())
        } else {
            Err(Error::storage(format!("history entry {id} not found")))
        }
    }

    fn commit(self) -> Result<()> {
        self.tx.commit().map_err(storage)
    }
}

const SELECT_HISTORY: &str = "SELECT id, item_name, previous_quantity, new_quantity, operation_type, timestamp
     FROM inventory_history";

/// A history row as SQLite returns it, before domain validation.
struct RawHistory {
    id: i64,
    item: String,
    previous: i64,
    new: i64,
    kind: String,
    timestamp: DateTime<Utc>,
}

impl RawHistory {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            item: row.get(1)?,
            previous: row.get(2)?,
            new: row.get(3)?,
            kind: row.get(4)?,
            timestamp: row.get(5)?,
        })
    }

    fn into_entry(self) -> Result<HistoryEntry> {
        Ok(HistoryEntry {
            id: self.id,
            item: stored_item(&self.item)?,
            previous_quantity: stored_quantity(self.previous)?,
            new_quantity: stored_quantity(self.new)?,
            kind: self.kind.parse::<OperationKind>()?,
            timestamp: self.timestamp,
        })
    }
}

fn read_quantity(conn: &Connection, item: &ItemId) -> Result<u32> {
    let quantity: Option<i64> = conn
        .query_row(
            "SELECT quantity FROM inventory WHERE item_name = ?1",
            params![item.as_str()],
            |row| row.get(0),
        )
        .optional()
        .map_err(storage)?;
    quantity.map_or(Ok(0), stored_quantity)
}

fn stored_quantity(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::storage(format!("stored quantity {value} out of range")))
}

fn stored_item(name: &str) -> Result<ItemId> {
    ItemId::new(name).map_err(|e| Error::storage(format!("corrupt item name in database: {e}")))
}

#[allow(clippy::needless_pass_by_value)]
fn storage(err: rusqlite::Error) -> Error {
    Error::storage(err.to_string())
}
