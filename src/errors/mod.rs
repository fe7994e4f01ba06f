//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents failures surfaced by the entry store itself.
///
/// These are infrastructure failures (connection, pool exhaustion, constraint
/// violations), never "no rows matched" — an empty result set is a successful
/// query and is represented as an empty `Vec` by the store.
///
/// # Examples
///
/// ```
/// use daybook::errors::StoreError;
///
/// let error = StoreError::Sqlite(rusqlite::Error::InvalidQuery);
/// assert!(format!("{}", error).contains("Database error"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}. This may indicate database connection issues. Try closing other daybook instances.")]
    Pool(#[from] r2d2::Error),
}

/// Represents all possible errors that can occur in the daybook application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
///
/// Callers (route handlers, the CLI) are responsible for mapping variants to
/// user-facing messages or status codes; the service itself only logs and
/// propagates.
///
/// # Examples
///
/// Creating a validation error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::InvalidArgument("user_id");
/// assert_eq!(format!("{}", error), "Invalid argument: user_id");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// A caller supplied a missing or empty required parameter.
    ///
    /// Always detected before any store call is made; the field name identifies
    /// the offending parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A read query against the entry store failed.
    ///
    /// Distinct from an empty result, which is a success. The underlying store
    /// error is preserved as the source.
    #[error("Query failed: {reason}")]
    QueryFailed {
        /// Short caller-facing description of the failed query path.
        reason: &'static str,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },

    /// A store failure on a write path, propagated unchanged.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::InvalidArgument("user_id"));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
