//! Constants used throughout the application.
//!
//! This module centralizes the fixed values of the diary service so they are
//! easy to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal diary service with one entry per day";

// Configuration Keys & Environment Variables
/// Environment variable for overriding the database file location.
pub const ENV_VAR_DAYBOOK_DB: &str = "DAYBOOK_DB";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default database path relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".daybook/diary.db";

// Pagination
/// Number of entries returned by the windowed listing paths.
///
/// The `end` flag of a windowed page is derived from this: fewer than
/// `PAGE_SIZE` rows means no further page exists.
pub const PAGE_SIZE: usize = 7;

// Date/Time Logic
/// Offset of Korea Standard Time from UTC, in seconds. KST observes no DST.
pub const KST_UTC_OFFSET_SECS: i32 = 9 * 3600;
/// Date format accepted by the date-bounded listing path (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Logging Configuration
/// Default directive handed to the EnvFilter when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "daybook=info";
