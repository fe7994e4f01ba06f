//! Core diary service.
//!
//! Orchestrates the entry store and the clock to implement the
//! create-or-update-for-today write path, fixed-window and cursor listing,
//! keyword search, date-bounded listing, counting, and bulk deletion. All
//! business logic lives here; callers (route handlers, the CLI) only supply an
//! already-authenticated owner id and operation parameters, and translate the
//! returned errors.
//!
//! Every operation validates its arguments before touching the store, logs
//! failures, and propagates them unchanged. No operation recovers, retries, or
//! returns a partial result.

use crate::clock::Clock;
use crate::constants::{DATE_FORMAT_ISO, PAGE_SIZE};
use crate::errors::{AppError, AppResult, StoreError};
use crate::store::{DiaryEntry, EntryStore, WriteStatus};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Caller-facing reason attached to read-path store failures.
const GET_DIARY_FAIL: &str = "Get diary fail";

/// Subject and content of a diary entry as submitted by the caller.
#[derive(Debug, Clone)]
pub struct DiaryDraft {
    /// Entry title. May be empty.
    pub subject: String,
    /// Entry body. Must be non-empty.
    pub content: String,
}

/// Output-ready form of a stored entry.
///
/// `date` is composed from the entry's calendar fields as `YYYY-MM-DD` with
/// zero-padded month and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiaryOutputForm {
    pub id: String,
    pub subject: String,
    pub content: String,
    pub date: String,
}

/// A list of formatted entries together with an end-of-results flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// `true` when no further page can exist beyond this one.
    pub end: bool,
    pub list: Vec<DiaryOutputForm>,
}

impl Page {
    /// Wraps the result of a windowed query. A short window means the caller
    /// has reached the end.
    fn window(list: Vec<DiaryOutputForm>) -> Self {
        Page {
            end: list.len() < PAGE_SIZE,
            list,
        }
    }

    /// Wraps a complete, unwindowed result set; there is never a next page.
    fn complete(list: Vec<DiaryOutputForm>) -> Self {
        Page { end: true, list }
    }
}

/// Number of entries an owner has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryCount {
    pub count: u64,
}

/// Confirmation of a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteReceipt {
    pub deleted: u64,
}

/// Transforms a stored entry into its output form.
///
/// Pure function: copies id, subject, and content, and composes the date
/// string from the calendar fields.
pub fn format_entry(raw: &DiaryEntry) -> DiaryOutputForm {
    DiaryOutputForm {
        id: raw.id.clone(),
        subject: raw.subject.clone(),
        content: raw.content.clone(),
        date: format!("{}-{:02}-{:02}", raw.year, raw.month, raw.day),
    }
}

/// The diary service.
///
/// Stateless between calls; holds only the injected store and clock
/// capabilities.
///
/// # Examples
///
/// ```no_run
/// use daybook::clock::KstClock;
/// use daybook::diary::{DiaryDraft, DiaryService};
/// use daybook::store::sqlite::SqliteStore;
/// use std::path::Path;
///
/// let store = SqliteStore::open(Path::new("/tmp/diary.db"))?;
/// store.initialize_schema()?;
/// let service = DiaryService::new(store, KstClock);
///
/// let draft = DiaryDraft {
///     subject: "first".to_string(),
///     content: "wrote a diary".to_string(),
/// };
/// let status = service.write_today("u1", &draft)?;
/// # Ok::<(), daybook::AppError>(())
/// ```
pub struct DiaryService<S, C> {
    store: S,
    clock: C,
}

impl<S: EntryStore, C: Clock> DiaryService<S, C> {
    /// Creates a service over the given store and clock.
    pub fn new(store: S, clock: C) -> Self {
        DiaryService { store, clock }
    }

    /// Creates today's entry for the owner, or overwrites its subject and
    /// content if one already exists for today's local calendar date.
    ///
    /// At most one store write is issued; the per-day invariant is enforced
    /// atomically by the store.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty owner id or empty content; store
    /// failures propagate unchanged.
    pub fn write_today(&self, owner_id: &str, draft: &DiaryDraft) -> AppResult<WriteStatus> {
        require("user_id", owner_id)?;
        require("content", &draft.content)?;

        let today = self.clock.today();
        debug!("Writing entry for {}", today);

        let candidate = DiaryEntry {
            id: Uuid::now_v7().to_string(),
            owner_id: owner_id.to_string(),
            subject: draft.subject.clone(),
            content: draft.content.clone(),
            year: today.year(),
            month: today.month(),
            day: today.day(),
            created_at: String::new(),
            updated_at: String::new(),
        };

        self.store.upsert_for_day(&candidate).map_err(|e| {
            error!("Diary write failed: {}", e);
            AppError::Store(e)
        })
    }

    /// Returns the owner's newest entries, at most one page.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty owner id; `QueryFailed` if the store
    /// query fails.
    pub fn list_recent(&self, owner_id: &str) -> AppResult<Page> {
        require("user_id", owner_id)?;

        let entries = self
            .store
            .list_recent(owner_id, PAGE_SIZE)
            .map_err(query_failed)?;
        Ok(Page::window(format_all(&entries)))
    }

    /// Returns the page of entries older than the cursor entry.
    ///
    /// The cursor is an entry id used as an exclusive upper bound; ids are
    /// time-ordered, so "less than" means "older".
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty owner id or cursor; `QueryFailed` if the
    /// store query fails.
    pub fn list_before(&self, owner_id: &str, cursor_id: &str) -> AppResult<Page> {
        require("user_id", owner_id)?;
        require("diary_id", cursor_id)?;

        let entries = self
            .store
            .list_before(owner_id, cursor_id, PAGE_SIZE)
            .map_err(query_failed)?;
        Ok(Page::window(format_all(&entries)))
    }

    /// Returns every entry of the owner whose subject or content matches the
    /// keyword. An empty match list is a success, not an error.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty owner id or keyword; `QueryFailed` if
    /// the store query fails.
    pub fn search(&self, owner_id: &str, keyword: &str) -> AppResult<Page> {
        require("user_id", owner_id)?;
        require("keyword", keyword)?;

        let entries = self.store.search(owner_id, keyword).map_err(query_failed)?;
        Ok(Page::complete(format_all(&entries)))
    }

    /// Returns every entry of the owner created on or before `target_date`
    /// (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty owner id or an empty/unparseable date;
    /// `QueryFailed` if the store query fails.
    pub fn list_through(&self, owner_id: &str, target_date: &str) -> AppResult<Page> {
        require("user_id", owner_id)?;
        require("target_date", target_date)?;
        let through = NaiveDate::parse_from_str(target_date, DATE_FORMAT_ISO).map_err(|e| {
            warn!("Rejected unparseable target date: {}", e);
            AppError::InvalidArgument("target_date")
        })?;

        let entries = self
            .store
            .list_through(owner_id, through)
            .map_err(query_failed)?;
        Ok(Page::complete(format_all(&entries)))
    }

    /// Counts the owner's entries. An owner with no entries yields zero,
    /// never an error.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty owner id; `QueryFailed` if the store
    /// query fails.
    pub fn count(&self, owner_id: &str) -> AppResult<EntryCount> {
        require("user_id", owner_id)?;

        let count = self.store.count_for_owner(owner_id).map_err(query_failed)?;
        Ok(EntryCount { count })
    }

    /// Deletes every entry of the owner (account closure). Succeeds
    /// regardless of how many entries existed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty owner id; store failures propagate
    /// unchanged.
    pub fn delete_all(&self, owner_id: &str) -> AppResult<DeleteReceipt> {
        require("user_id", owner_id)?;

        let deleted = self.store.delete_for_owner(owner_id).map_err(|e| {
            error!("Diary bulk delete failed: {}", e);
            AppError::Store(e)
        })?;
        Ok(DeleteReceipt { deleted })
    }
}

fn format_all(entries: &[DiaryEntry]) -> Vec<DiaryOutputForm> {
    entries.iter().map(format_entry).collect()
}

fn require(field: &'static str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        warn!("Rejected request with empty {}", field);
        return Err(AppError::InvalidArgument(field));
    }
    Ok(())
}

fn query_failed(source: StoreError) -> AppError {
    error!("Diary query failed: {}", source);
    AppError::QueryFailed {
        reason: GET_DIARY_FAIL,
        source,
    }
}
