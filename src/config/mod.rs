//! Configuration management for the daybook application.
//!
//! This module handles loading configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DB`: Path to the SQLite database file (defaults to
//!   ~/.daybook/diary.db). A leading `~` is expanded.
//! - `HOME`: Used for expanding the default database path.

use crate::constants::{DEFAULT_DB_SUBPATH, ENV_VAR_DAYBOOK_DB, ENV_VAR_HOME};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the daybook application.
///
/// Holds the location of the entry database. Loaded from environment
/// variables via [`Config::load`], or constructed directly in tests.
///
/// # Examples
///
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/tmp/diary.db"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Path to the SQLite database file holding diary entries.
    pub db_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to `~/.daybook/diary.db` when `DAYBOOK_DB` is unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if neither `DAYBOOK_DB` nor `HOME` is set,
    /// or if tilde expansion fails.
    pub fn load() -> AppResult<Self> {
        let db_path = match env::var(ENV_VAR_DAYBOOK_DB) {
            Ok(raw) => {
                let expanded = shellexpand::full(&raw).map_err(|e| {
                    AppError::Config(format!("Failed to expand database path: {}", e))
                })?;
                PathBuf::from(expanded.as_ref())
            }
            Err(_) => {
                let home = env::var(ENV_VAR_HOME).map_err(|_| {
                    AppError::Config(format!(
                        "Neither {} nor {} is set; cannot locate the database",
                        ENV_VAR_DAYBOOK_DB, ENV_VAR_HOME
                    ))
                })?;
                PathBuf::from(home).join(DEFAULT_DB_SUBPATH)
            }
        };

        Ok(Config { db_path })
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the database path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Database path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
