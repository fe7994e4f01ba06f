//! Integration tests for the diary service over the real SQLite store.

use chrono::NaiveDate;
use daybook::clock::FixedClock;
use daybook::diary::{DiaryDraft, DiaryService};
use daybook::store::sqlite::SqliteStore;
use daybook::store::{DiaryEntry, EntryStore};
use daybook::WriteStatus;
use tempfile::TempDir;

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 9, 26).unwrap()
}

fn setup_store() -> (SqliteStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&temp_dir.path().join("diary.db")).unwrap();
    store.initialize_schema().unwrap();
    (store, temp_dir)
}

fn setup_service() -> (DiaryService<SqliteStore, FixedClock>, TempDir) {
    let (store, temp_dir) = setup_store();
    (DiaryService::new(store, FixedClock(fixed_date())), temp_dir)
}

fn draft(subject: &str, content: &str) -> DiaryDraft {
    DiaryDraft {
        subject: subject.to_string(),
        content: content.to_string(),
    }
}

/// Seeds an entry directly through the store, with a pinned id so ordering
/// is deterministic even when every row lands in the same second.
fn seed(store: &SqliteStore, owner: &str, seq: u32, day: u32) {
    let entry = DiaryEntry {
        id: format!("{:08}-0000-7000-8000-000000000000", seq),
        owner_id: owner.to_string(),
        subject: format!("subject {seq}"),
        content: format!("content {seq}"),
        year: 2022,
        month: 9,
        day,
        created_at: String::new(),
        updated_at: String::new(),
    };
    store.upsert_for_day(&entry).unwrap();
}

#[test]
fn test_same_day_write_scenario() {
    let (service, _dir) = setup_service();

    // First write of the day creates, second overwrites in place.
    assert_eq!(
        service.write_today("u1", &draft("s", "c")).unwrap(),
        WriteStatus::Created
    );
    let first_id = service.list_recent("u1").unwrap().list[0].id.clone();

    assert_eq!(
        service.write_today("u1", &draft("s2", "c2")).unwrap(),
        WriteStatus::Updated
    );

    assert_eq!(service.count("u1").unwrap().count, 1);

    let page = service.list_recent("u1").unwrap();
    assert!(page.end);
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.list[0].id, first_id);
    assert_eq!(page.list[0].subject, "s2");
    assert_eq!(page.list[0].content, "c2");
    assert_eq!(page.list[0].date, "2022-09-26");
}

#[test]
fn test_pagination_end_signal_across_pages() {
    let (store, _dir) = setup_store();
    for seq in 1..=8 {
        seed(&store, "u1", seq, seq);
    }
    let service = DiaryService::new(store, FixedClock(fixed_date()));

    let first_page = service.list_recent("u1").unwrap();
    assert_eq!(first_page.list.len(), 7);
    assert!(!first_page.end, "a full window may have more pages");
    assert_eq!(first_page.list[0].content, "content 8");

    let cursor = &first_page.list[6].id;
    let second_page = service.list_before("u1", cursor).unwrap();
    assert_eq!(second_page.list.len(), 1);
    assert!(second_page.end);
    assert_eq!(second_page.list[0].content, "content 1");

    let third_page = service.list_before("u1", &second_page.list[0].id).unwrap();
    assert!(third_page.end);
    assert!(third_page.list.is_empty());
}

#[test]
fn test_exactly_one_page_still_signals_more() {
    let (store, _dir) = setup_store();
    for seq in 1..=7 {
        seed(&store, "u1", seq, seq);
    }
    let service = DiaryService::new(store, FixedClock(fixed_date()));

    // Seven rows fill the window, so the heuristic cannot rule out a next page.
    let page = service.list_recent("u1").unwrap();
    assert_eq!(page.list.len(), 7);
    assert!(!page.end);
}

#[test]
fn test_search_scopes_to_owner_and_formats() {
    let (store, _dir) = setup_store();
    seed(&store, "u1", 1, 1);
    seed(&store, "u1", 2, 2);
    seed(&store, "u2", 3, 1);
    let service = DiaryService::new(store, FixedClock(fixed_date()));

    let page = service.search("u1", "subject").unwrap();
    assert!(page.end);
    assert_eq!(page.list.len(), 2);
    assert!(page.list.iter().all(|f| f.date.starts_with("2022-09-")));

    let empty = service.search("u1", "absent").unwrap();
    assert!(empty.end);
    assert!(empty.list.is_empty());
}

#[test]
fn test_list_through_includes_today_and_excludes_past_bound() {
    let (store, _dir) = setup_store();
    seed(&store, "u1", 1, 1);
    let service = DiaryService::new(store, FixedClock(fixed_date()));

    // Rows were created "now", so any future bound includes them and a bound
    // far in the past excludes them.
    let page = service.list_through("u1", "2999-12-31").unwrap();
    assert_eq!(page.list.len(), 1);
    assert!(page.end);

    let empty = service.list_through("u1", "2000-01-01").unwrap();
    assert!(empty.end);
    assert!(empty.list.is_empty());
}

#[test]
fn test_count_and_purge_lifecycle() {
    let (store, _dir) = setup_store();
    seed(&store, "u1", 1, 1);
    seed(&store, "u1", 2, 2);
    seed(&store, "u2", 3, 1);
    let service = DiaryService::new(store, FixedClock(fixed_date()));

    assert_eq!(service.count("u1").unwrap().count, 2);
    assert_eq!(service.delete_all("u1").unwrap().deleted, 2);
    assert_eq!(service.count("u1").unwrap().count, 0);

    // Purging an owner twice is not an error.
    assert_eq!(service.delete_all("u1").unwrap().deleted, 0);

    // The other owner is untouched.
    assert_eq!(service.count("u2").unwrap().count, 1);
}

#[test]
fn test_count_unknown_owner_is_zero() {
    let (service, _dir) = setup_service();
    assert_eq!(service.count("nobody").unwrap().count, 0);
}
