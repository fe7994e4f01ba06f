//! Entry store contract and persisted entry model.
//!
//! The diary service depends on the [`EntryStore`] trait rather than on a
//! concrete database, keeping the core storage-agnostic and testable. The
//! reference implementation lives in [`sqlite`].
//!
//! # Query contract
//!
//! Implementations must support exact-match filtering on the owner and on the
//! `(year, month, day)` triple, lexicographic comparison on the entry id,
//! date comparison on the creation timestamp, text search over the subject and
//! content fields, descending creation-order sort, and result limiting.

pub mod schema;
pub mod sqlite;

use crate::errors::StoreError;
use chrono::NaiveDate;
use serde::Serialize;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A persisted diary entry.
///
/// The id is a UUIDv7 in hyphenated lowercase form. UUIDv7 leads with a
/// timestamp, so lexicographic order on the textual id matches creation order
/// and the id can serve directly as a pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    /// Opaque unique identifier, assigned at creation and never changed.
    pub id: String,
    /// Identifier of the owning user. Scopes every query.
    pub owner_id: String,
    /// Entry title. May be empty.
    pub subject: String,
    /// Entry body. Never empty for a persisted entry.
    pub content: String,
    /// Local calendar year the entry belongs to.
    pub year: i32,
    /// Local calendar month (1-12).
    pub month: u32,
    /// Local calendar day of month (1-31).
    pub day: u32,
    /// Store-managed creation timestamp.
    pub created_at: String,
    /// Store-managed last-modification timestamp.
    pub updated_at: String,
}

/// Outcome of the per-day write path.
///
/// Serializes as `"created"` / `"updated"`, which is also the status string
/// surfaced to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    /// No entry existed for the owner on that date; a new one was inserted.
    Created,
    /// An entry already existed; its subject and content were overwritten.
    Updated,
}

/// Persistence capability consumed by the diary service.
///
/// At most one entry may exist per `(owner_id, year, month, day)`;
/// [`EntryStore::upsert_for_day`] enforces this atomically, so two concurrent
/// same-day writes cannot both insert.
pub trait EntryStore {
    /// Inserts `candidate` or, if the owner already has an entry on the same
    /// `(year, month, day)`, overwrites that entry's subject and content in
    /// place. The existing entry keeps its id and date fields.
    fn upsert_for_day(&self, candidate: &DiaryEntry) -> StoreResult<WriteStatus>;

    /// Returns up to `limit` entries for the owner, newest first.
    fn list_recent(&self, owner_id: &str, limit: usize) -> StoreResult<Vec<DiaryEntry>>;

    /// Returns up to `limit` entries for the owner whose id is strictly less
    /// than `cursor_id`, newest first.
    fn list_before(
        &self,
        owner_id: &str,
        cursor_id: &str,
        limit: usize,
    ) -> StoreResult<Vec<DiaryEntry>>;

    /// Returns every entry for the owner whose subject or content matches
    /// `keyword`, newest first.
    fn search(&self, owner_id: &str, keyword: &str) -> StoreResult<Vec<DiaryEntry>>;

    /// Returns every entry for the owner created on or before `through`,
    /// newest first.
    fn list_through(&self, owner_id: &str, through: NaiveDate) -> StoreResult<Vec<DiaryEntry>>;

    /// Counts the owner's entries.
    fn count_for_owner(&self, owner_id: &str) -> StoreResult<u64>;

    /// Deletes every entry for the owner, returning how many were removed.
    /// Removing zero entries is a success.
    fn delete_for_owner(&self, owner_id: &str) -> StoreResult<u64>;
}
