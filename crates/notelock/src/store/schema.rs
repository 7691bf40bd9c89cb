//! `SQLite` schema definitions for the note store.
//!
//! This module contains the SQL statements for creating and managing
//! the store schema.

/// SQL statement to create the notes table.
///
/// `content` is nullable on purpose: documents written by other clients may
/// omit it, and reads substitute the empty string.
pub const CREATE_NOTES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
";

/// SQL statement to create an index on `updated_at` for the ordered
/// collection query.
pub const CREATE_UPDATED_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_notes_updated ON notes(updated_at DESC)
";

/// SQL statement to create the pin table holding the singleton secret.
pub const CREATE_PIN_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS pin (
    id TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_NOTES_TABLE,
    CREATE_UPDATED_INDEX,
    CREATE_PIN_TABLE,
    CREATE_METADATA_TABLE,
];
