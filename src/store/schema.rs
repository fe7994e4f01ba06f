//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for diary entries and the full-text
//! index over them. All tables are created with the indexes the query paths
//! rely on.

use crate::errors::StoreError;
use crate::store::StoreResult;
use rusqlite::Connection;
use tracing::debug;

/// Current schema version.
///
/// Increment this whenever schema changes are made to support future migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Creates all database tables and indexes.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Tables
///
/// - `entries`: diary entries, one row per owner per calendar day. The
///   `UNIQUE(owner_id, year, month, day)` index is what makes the per-day
///   write path an atomic upsert rather than a racy check-then-act.
/// - `entries_fts`: external-content FTS5 index over subject/content, kept in
///   sync by triggers.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> StoreResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL,
            subject TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL,
            year INTEGER NOT NULL,
            month INTEGER NOT NULL,
            day INTEGER NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(owner_id, year, month, day)
        );

        CREATE INDEX IF NOT EXISTS idx_entries_owner_created
            ON entries(owner_id, created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_entries_owner_id
            ON entries(owner_id, id DESC);
        "#,
    )
    .map_err(StoreError::Sqlite)?;

    // Full-text search over subject and content. External-content table backed
    // by `entries`; the triggers keep it in sync across the upsert and the
    // bulk delete.
    conn.execute_batch(
        r#"
        CREATE VIRTUAL TABLE IF NOT EXISTS entries_fts USING fts5(
            subject,
            content,
            content='entries',
            content_rowid='rowid',
            tokenize='unicode61'
        );

        CREATE TRIGGER IF NOT EXISTS entries_fts_insert AFTER INSERT ON entries BEGIN
            INSERT INTO entries_fts(rowid, subject, content)
            VALUES (new.rowid, new.subject, new.content);
        END;

        CREATE TRIGGER IF NOT EXISTS entries_fts_delete AFTER DELETE ON entries BEGIN
            INSERT INTO entries_fts(entries_fts, rowid, subject, content)
            VALUES ('delete', old.rowid, old.subject, old.content);
        END;

        CREATE TRIGGER IF NOT EXISTS entries_fts_update AFTER UPDATE ON entries BEGIN
            INSERT INTO entries_fts(entries_fts, rowid, subject, content)
            VALUES ('delete', old.rowid, old.subject, old.content);
            INSERT INTO entries_fts(rowid, subject, content)
            VALUES (new.rowid, new.subject, new.content);
        END;
        "#,
    )
    .map_err(StoreError::Sqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }

    #[test]
    fn test_per_day_uniqueness_enforced() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        conn.execute(
            "INSERT INTO entries (id, owner_id, content, year, month, day) \
             VALUES ('a', 'u1', 'first', 2024, 1, 15)",
            [],
        )
        .unwrap();

        let duplicate = conn.execute(
            "INSERT INTO entries (id, owner_id, content, year, month, day) \
             VALUES ('b', 'u1', 'second', 2024, 1, 15)",
            [],
        );
        assert!(duplicate.is_err(), "same owner and day must conflict");

        // A different owner on the same day is fine.
        conn.execute(
            "INSERT INTO entries (id, owner_id, content, year, month, day) \
             VALUES ('c', 'u2', 'other', 2024, 1, 15)",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_fts_index_tracks_rows() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        conn.execute(
            "INSERT INTO entries (id, owner_id, subject, content, year, month, day) \
             VALUES ('a', 'u1', 'rainy day', 'it poured all morning', 2024, 1, 15)",
            [],
        )
        .unwrap();

        let hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM entries_fts WHERE entries_fts MATCH 'poured'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(hits, 1);

        conn.execute("DELETE FROM entries WHERE id = 'a'", []).unwrap();
        let hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM entries_fts WHERE entries_fts MATCH 'poured'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(hits, 0);
    }
}
