//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Note that empty input is never an error anywhere in this crate: an empty
//! entry list, an empty filtered result, or a degenerate calendar range all
//! produce explicit "no data" values instead.

use std::io;
use thiserror::Error;

/// Represents validation failures when constructing a mood entry.
///
/// Entry construction is the only place in the core where input is rejected;
/// every failure here is local and recoverable. Values are never silently
/// coerced into range.
///
/// # Examples
///
/// ```
/// use moodlog::errors::EntryError;
///
/// let error = EntryError::ValueOutOfRange { value: 11.5 };
/// assert!(format!("{}", error).contains("11.5"));
/// ```
#[derive(Debug, Error)]
pub enum EntryError {
    /// The category key and glyph must both be present; they always travel as a pair.
    #[error("Mood category is incomplete: both the category key and its glyph are required")]
    MissingCategory,

    /// The mood value is outside the inclusive [0, 10] scale or is not a finite number.
    #[error("Mood value {value} is outside the valid range 0.0-10.0")]
    ValueOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// A stored date string could not be parsed with the canonical format.
    #[error("Invalid entry date '{text}': {source}")]
    InvalidDate {
        /// The date text that failed to parse.
        text: String,
        /// The underlying chrono parse error.
        #[source]
        source: chrono::ParseError,
    },
}

/// Represents specific error cases that can occur during storage operations.
///
/// The storage collaborator owns the persisted entry collection; the
/// aggregation core only ever receives read snapshots from it.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StorageError;
///
/// let error = StorageError::NotFound("entry abc123 not found".to_string());
/// assert!(format!("{}", error).contains("abc123"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error from the underlying SQLite database.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored record could not be serialized or deserialized.
    #[error("Record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The requested entry does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Validation errors raised when constructing mood entries.
    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),

    /// Errors raised by the storage collaborator.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors in journal-level logic (e.g. malformed date arguments).
    #[error("Journal logic error: {0}")]
    Journal(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
