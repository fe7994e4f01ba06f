/*!
# Daybook

Daybook is the core of a personal-diary backend: one entry per owner per
calendar day, with a same-day upsert write path, cursor-based pagination,
keyword search, and date-bounded range queries over a SQLite entry store.

## Core Features

- Create today's entry, or overwrite it in place on a second same-day write
- Page through entries newest-first, seven at a time, with an explicit
  end-of-results flag
- Search entries by keyword over subject and content
- List entries created up to a given date
- Count and bulk-delete an owner's entries

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `clock`: Injected local-date capability (Korea Standard Time)
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `store`: Entry store contract and its SQLite implementation
- `diary`: The diary service itself

## Usage Example

```rust,no_run
use daybook::clock::KstClock;
use daybook::diary::{DiaryDraft, DiaryService};
use daybook::store::sqlite::SqliteStore;
use daybook::Config;

fn main() -> daybook::AppResult<()> {
    let config = Config::load()?;
    let store = SqliteStore::open(&config.db_path)?;
    store.initialize_schema()?;

    let service = DiaryService::new(store, KstClock);
    let page = service.list_recent("u1")?;
    println!("{} entries, end={}", page.list.len(), page.end);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Clock capability for local calendar date computation
pub mod clock;
/// Configuration loading and management
pub mod config;
/// Constants used across the application
pub mod constants;
/// The diary service and its output forms
pub mod diary;
/// Error types and utilities for error handling
pub mod errors;
/// Entry store contract and SQLite implementation
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use diary::{DiaryDraft, DiaryService, Page};
pub use errors::{AppError, AppResult};
pub use store::{DiaryEntry, EntryStore, WriteStatus};
