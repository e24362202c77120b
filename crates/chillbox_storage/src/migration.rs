//! Versioned schema migrations.
//!
//! Migrations are plain SQL scripts named `NNN_description.sql`, embedded at
//! build time. They run in ascending numeric-prefix order when a store is
//! opened, each inside its own transaction, and are recorded in the
//! `migrations` table so they apply at most once.

use std::collections::HashSet;

use chrono::Utc;
use rusqlite::{Connection, params};

use chillbox_foundation::{Error, Result};

/// One schema migration script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Migration {
    /// File name, e.g. `001_create_inventory.sql`
    pub name: &'static str,
    /// SQL executed as a batch
    pub sql: &'static str,
}

impl Migration {
    /// Parses the numeric prefix of the file name.
    #[must_use]
    pub fn version(&self) -> Option<u32> {
        let (prefix, _) = self.name.split_once('_')?;
        prefix.parse().ok()
    }
}

/// Migrations shipped with this crate, in any order.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "001_create_inventory.sql",
        sql: include_str!("../migrations/001_create_inventory.sql"),
    },
    Migration {
        name: "002_create_inventory_history.sql",
        sql: include_str!("../migrations/002_create_inventory_history.sql"),
    },
];

const CREATE_MIGRATIONS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS migrations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        migration_name TEXT NOT NULL UNIQUE,
        applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );
";

/// Applies every shipped migration not yet recorded.
///
/// Returns how many were applied.
///
/// # Errors
///
/// See [`run_migrations`].
pub fn run_pending(conn: &mut Connection) -> Result<usize> {
    run_migrations(conn, MIGRATIONS)
}

/// Applies the given migrations that are not yet recorded.
///
/// # Errors
///
/// Returns a migration error if a name lacks a numeric prefix, two scripts
/// share a version, or a script fails. A failing script is rolled back in
/// full and later scripts are not attempted.
pub fn run_migrations(conn: &mut Connection, migrations: &[Migration]) -> Result<usize> {
    conn.execute_batch(CREATE_MIGRATIONS_TABLE)
        .map_err(|e| Error::migration("migrations", e.to_string()))?;

    let ordered = ordered(migrations)?;
    let applied = applied_names(conn)?;

    let mut count = 0;
    for migration in ordered {
        if applied.contains(migration.name) {
            continue;
        }
        apply(conn, migration)?;
        tracing::info!(migration = migration.name, "applied migration");
        count += 1;
    }

    if count == 0 {
        tracing::debug!("no pending migrations");
    }
    Ok(count)
}

/// Lists recorded migration names in the order they were applied.
///
/// # Errors
///
/// Returns a storage fault if the table cannot be read.
pub fn applied(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT migration_name FROM migrations ORDER BY id")
        .map_err(|e| Error::storage(e.to_string()))?;
    let names = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| Error::storage(e.to_string()))?
        .collect::<rusqlite::Result<Vec<String>>>()
        .map_err(|e| Error::storage(e.to_string()))?;
    Ok(names)
}

fn ordered(migrations: &[Migration]) -> Result<Vec<&Migration>> {
    let mut versioned = Vec::with_capacity(migrations.len());
    for migration in migrations {
        let version = migration
            .version()
            .ok_or_else(|| Error::migration(migration.name, "name has no numeric prefix"))?;
        versioned.push((version, migration));
    }
    versioned.sort_by_key(|(version, _)| *version);

    for pair in versioned.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(Error::migration(
                pair[1].1.name,
                format!("version {} already used by {}", pair[0].0, pair[0].1.name),
            ));
        }
    }

    Ok(versioned.into_iter().map(|(_, m)| m).collect())
}

fn applied_names(conn: &Connection) -> Result<HashSet<String>> {
    Ok(applied(conn)?.into_iter().collect())
}

fn apply(conn: &mut Connection, migration: &Migration) -> Result<()> {
    let fail = |e: rusqlite::Error| Error::migration(migration.name, e.to_string());

    let tx = conn.transaction().map_err(fail)?;
    tx.execute_batch(migration.sql).map_err(fail)?;
    tx.execute(
        "INSERT INTO migrations (migration_name, applied_at) VALUES (?1, ?2)",
        params![migration.name, Utc::now()],
    )
    .map_err(fail)?;
    tx.commit().map_err(fail)
}
