/*!
# Daybook - A Personal Diary Service

Command-line front end for the daybook diary service. It stands in for an
authenticated caller: every invocation names the owner the operation is scoped
to, runs one service operation, and prints the JSON result.

## Usage

```
daybook --owner <OWNER> <COMMAND>

Commands:
  write    Create or overwrite today's entry
  list     List the newest entries, or the page older than a cursor entry
  search   Search entries by keyword over subject and content
  through  List entries created on or before a date (YYYY-MM-DD)
  count    Count the owner's entries
  purge    Delete every entry of the owner
```

## Configuration

- `DAYBOOK_DB`: Path to the SQLite database file (defaults to
  ~/.daybook/diary.db)
- `RUST_LOG`: Log filter directives (defaults to "daybook=info")
*/

use clap::Parser;
use daybook::cli::{CliArgs, Command};
use daybook::clock::KstClock;
use daybook::constants::DEFAULT_LOG_FILTER;
use daybook::diary::{DiaryDraft, DiaryService};
use daybook::store::sqlite::SqliteStore;
use daybook::{AppError, AppResult, Config};
use serde::Serialize;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let args = CliArgs::parse();
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;

    if let Some(parent) = config.db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let store = SqliteStore::open(&config.db_path).map_err(AppError::Store)?;
    store.initialize_schema().map_err(AppError::Store)?;
    let service = DiaryService::new(store, KstClock);

    info!("Running diary operation");
    match args.command {
        Command::Write { subject, content } => {
            let status = service.write_today(&args.owner, &DiaryDraft { subject, content })?;
            print_json(&status)
        }
        Command::List { before: Some(cursor) } => {
            print_json(&service.list_before(&args.owner, &cursor)?)
        }
        Command::List { before: None } => print_json(&service.list_recent(&args.owner)?),
        Command::Search { keyword } => print_json(&service.search(&args.owner, &keyword)?),
        Command::Through { date } => print_json(&service.list_through(&args.owner, &date)?),
        Command::Count => print_json(&service.count(&args.owner)?),
        Command::Purge => print_json(&service.delete_all(&args.owner)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{}", rendered);
    Ok(())
}
