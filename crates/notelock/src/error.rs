//! Error types for notelock.
//!
//! This module defines all error types used throughout the notelock crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for notelock operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to open or create the store database.
    #[error("failed to open store at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A store query failed.
    #[error("store query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to initialize the store schema.
    #[error("store schema initialization failed: {message}")]
    SchemaInit {
        /// Description of what went wrong.
        message: String,
    },

    /// The store could not be reached.
    ///
    /// Covers transient backend failures; the caller is expected to surface
    /// this as a notice and let the user retry manually.
    #[error("note store unavailable: {0}")]
    StoreUnavailable(String),

    /// The singleton pin document does not exist.
    #[error("pin document is not set")]
    PinMissing,

    /// A note referenced by a batch update does not exist in the store.
    #[error("note not found: {id}")]
    NoteMissing {
        /// Identifier of the missing note.
        id: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for notelock operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new store-unavailable error.
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a missing-note error.
    #[must_use]
    pub fn note_missing(id: impl Into<String>) -> Self {
        Self::NoteMissing { id: id.into() }
    }

    /// Check if this error means the pin document has never been set.
    #[must_use]
    pub fn is_pin_missing(&self) -> bool {
        matches!(self, Self::PinMissing)
    }

    /// Check if this error is a transient store failure worth retrying
    /// manually.
    #[must_use]
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PinMissing;
        assert_eq!(err.to_string(), "pin document is not set");

        let err = Error::store_unavailable("connection reset");
        assert_eq!(err.to_string(), "note store unavailable: connection reset");
    }

    #[test]
    fn test_error_is_pin_missing() {
        assert!(Error::PinMissing.is_pin_missing());
        assert!(!Error::internal("test").is_pin_missing());
    }

    #[test]
    fn test_error_is_store_unavailable() {
        assert!(Error::store_unavailable("down").is_store_unavailable());
        assert!(!Error::PinMissing.is_store_unavailable());
    }

    #[test]
    fn test_note_missing_display() {
        let err = Error::note_missing("abc-123");
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn test_internal_error() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::DatabaseQuery(_)));
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_schema_init_error_display() {
        let err = Error::SchemaInit {
            message: "version mismatch".to_string(),
        };
        assert!(err.to_string().contains("version mismatch"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "pin_length must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("pin_length"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_database_open_error_display() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err = Error::DatabaseOpen {
                path: PathBuf::from("/nonexistent/path/db.sqlite"),
                source: sqlite_err,
            };
            assert!(err.to_string().contains("/nonexistent/path/db.sqlite"));
        }
    }
}
