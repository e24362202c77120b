//! Schema migration tests

use chillbox_storage::SqliteStore;
use chillbox_storage::migration::{self, MIGRATIONS, Migration};
use rusqlite::Connection;

fn columns(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("SELECT name FROM pragma_table_info('{table}') ORDER BY cid"))
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<Vec<String>>>()
        .unwrap()
}

#[test]
fn shipped_migrations_are_numbered() {
    let mut versions: Vec<u32> = MIGRATIONS.iter().map(|m| m.version().unwrap()).collect();
    versions.sort_unstable();
    versions.dedup();
    assert_eq!(versions.len(), MIGRATIONS.len());
}

#[test]
fn opening_a_store_creates_the_schema() {
    let store = SqliteStore::open_in_memory().unwrap();
    let conn = store.connection();

    assert_eq!(
        columns(conn, "inventory"),
        vec!["id", "item_name", "quantity", "last_modified"]
    );
    assert_eq!(
        columns(conn, "inventory_history"),
        vec![
            "id",
            "item_name",
            "previous_quantity",
            "new_quantity",
            "operation_type",
            "timestamp"
        ]
    );
    assert_eq!(
        migration::applied(conn).unwrap().len(),
        MIGRATIONS.len()
    );
}

#[test]
fn history_rejects_unknown_operation_types() {
    let store = SqliteStore::open_in_memory().unwrap();
    let result = store.connection().execute(
        "INSERT INTO inventory_history (item_name, previous_quantity, new_quantity, operation_type)
         VALUES ('steak', 0, 1, 'multiply')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn later_migrations_apply_on_top() {
    let mut conn = Connection::open_in_memory().unwrap();
    assert_eq!(migration::run_pending(&mut conn).unwrap(), MIGRATIONS.len());

    let mut extended: Vec<Migration> = MIGRATIONS.to_vec();
    extended.push(Migration {
        name: "003_add_location.sql",
        sql: "ALTER TABLE inventory ADD COLUMN location TEXT;",
    });
    assert_eq!(migration::run_migrations(&mut conn, &extended).unwrap(), 1);
    assert!(columns(&conn, "inventory").contains(&"location".to_string()));
}

#[test]
fn failed_migration_reports_its_name() {
    let mut conn = Connection::open_in_memory().unwrap();
    let broken = [Migration {
        name: "001_broken.sql",
        sql: "CREATE TABLE oops (",
    }];
    let err = migration::run_migrations(&mut conn, &broken).unwrap_err();
    assert!(err.to_string().contains("001_broken.sql"));
}
