//! SQLite-backed entry store.
//!
//! Reference implementation of [`EntryStore`] over a pooled rusqlite
//! connection. The per-day invariant is enforced here with
//! `ON CONFLICT ... DO UPDATE` against the unique `(owner_id, year, month,
//! day)` index, so the write path is atomic at the database and never races
//! a separate existence check.

use crate::errors::StoreError;
use crate::store::{schema, DiaryEntry, EntryStore, StoreResult, WriteStatus};
use chrono::NaiveDate;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Row};
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

const ENTRY_COLUMNS: &str = "id, owner_id, subject, content, year, month, day, created_at, updated_at";

/// Entry store handle with connection pooling.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    /// Opens or creates the entry database at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the
    /// connection pool cannot be initialized.
    pub fn open(db_path: &Path) -> StoreResult<Self> {
        debug!("Opening entry database at {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(5)
            .build(manager)
            .map_err(StoreError::Pool)?;

        info!("Entry database opened");
        Ok(SqliteStore { pool })
    }

    /// Initializes the database schema.
    ///
    /// Idempotent and safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> StoreResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Entry database schema initialized");
        Ok(())
    }

    fn get_conn(&self) -> StoreResult<PooledConnection> {
        self.pool.get().map_err(StoreError::Pool)
    }

    fn query_entries(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> StoreResult<Vec<DiaryEntry>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(sql).map_err(StoreError::Sqlite)?;
        let rows = stmt
            .query_map(params, map_entry)
            .map_err(StoreError::Sqlite)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(StoreError::Sqlite)?);
        }
        Ok(entries)
    }
}

fn map_entry(row: &Row<'_>) -> rusqlite::Result<DiaryEntry> {
    Ok(DiaryEntry {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        subject: row.get(2)?,
        content: row.get(3)?,
        year: row.get(4)?,
        month: row.get(5)?,
        day: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

/// Quotes a user-supplied keyword as an FTS5 phrase so query syntax
/// characters in diary text cannot break the match expression.
fn fts_phrase(keyword: &str) -> String {
    format!("\"{}\"", keyword.replace('"', "\"\""))
}

impl EntryStore for SqliteStore {
    fn upsert_for_day(&self, candidate: &DiaryEntry) -> StoreResult<WriteStatus> {
        debug!(
            "Upserting entry for owner on {}-{:02}-{:02}",
            candidate.year, candidate.month, candidate.day
        );

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO entries (id, owner_id, subject, content, year, month, day)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(owner_id, year, month, day) DO UPDATE SET
                subject = excluded.subject,
                content = excluded.content,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![
                candidate.id,
                candidate.owner_id,
                candidate.subject,
                candidate.content,
                candidate.year,
                candidate.month,
                candidate.day
            ],
        )
        .map_err(StoreError::Sqlite)?;

        // The surviving row keeps the first writer's id; comparing it against
        // the candidate id tells the two outcomes apart.
        let surviving_id: String = conn
            .query_row(
                "SELECT id FROM entries WHERE owner_id = ?1 AND year = ?2 AND month = ?3 AND day = ?4",
                params![candidate.owner_id, candidate.year, candidate.month, candidate.day],
                |row| row.get(0),
            )
            .map_err(StoreError::Sqlite)?;

        if surviving_id == candidate.id {
            Ok(WriteStatus::Created)
        } else {
            Ok(WriteStatus::Updated)
        }
    }

    fn list_recent(&self, owner_id: &str, limit: usize) -> StoreResult<Vec<DiaryEntry>> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries \
             WHERE owner_id = ?1 \
             ORDER BY created_at DESC, id DESC LIMIT ?2"
        );
        self.query_entries(&sql, &[&owner_id, &(limit as i64)])
    }

    fn list_before(
        &self,
        owner_id: &str,
        cursor_id: &str,
        limit: usize,
    ) -> StoreResult<Vec<DiaryEntry>> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries \
             WHERE owner_id = ?1 AND id < ?2 \
             ORDER BY created_at DESC, id DESC LIMIT ?3"
        );
        self.query_entries(&sql, &[&owner_id, &cursor_id, &(limit as i64)])
    }

    fn search(&self, owner_id: &str, keyword: &str) -> StoreResult<Vec<DiaryEntry>> {
        let sql = format!(
            "SELECT e.{} FROM entries e \
             JOIN entries_fts ON entries_fts.rowid = e.rowid \
             WHERE e.owner_id = ?1 AND entries_fts MATCH ?2 \
             ORDER BY e.created_at DESC, e.id DESC",
            ENTRY_COLUMNS.replace(", ", ", e.")
        );
        self.query_entries(&sql, &[&owner_id, &fts_phrase(keyword)])
    }

    fn list_through(&self, owner_id: &str, through: NaiveDate) -> StoreResult<Vec<DiaryEntry>> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries \
             WHERE owner_id = ?1 AND date(created_at) <= ?2 \
             ORDER BY created_at DESC, id DESC"
        );
        self.query_entries(&sql, &[&owner_id, &through.to_string()])
    }

    fn count_for_owner(&self, owner_id: &str) -> StoreResult<u64> {
        let conn = self.get_conn()?;
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM entries WHERE owner_id = ?1",
                params![owner_id],
                |row| row.get(0),
            )
            .map_err(StoreError::Sqlite)?;
        Ok(count as u64)
    }

    fn delete_for_owner(&self, owner_id: &str) -> StoreResult<u64> {
        debug!("Deleting all entries for owner");
        let conn = self.get_conn()?;
        let removed = conn
            .execute("DELETE FROM entries WHERE owner_id = ?1", params![owner_id])
            .map_err(StoreError::Sqlite)?;
        Ok(removed as u64)
    }
}
