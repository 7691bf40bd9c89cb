//! `SQLite`-backed note store.
//!
//! Stands in for the hosted document database: one `notes` collection, one
//! singleton `pin` document, an ordered collection query, and a
//! transaction-backed atomic batch update.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::note::{Note, NoteDraft, NoteUpdate};

use super::{migrations, NoteStore, PIN_DOC_ID};

/// Note store backed by a `SQLite` database file.
///
/// The connection is wrapped in a mutex so the store can be shared behind
/// the async [`NoteStore`] trait; no lock is held across an await point.
#[derive(Debug)]
pub struct SqliteStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a store database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening store at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Store opened successfully at {}", path.display());
        Ok(Self {
            path,
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn: Mutex::new(conn),
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::internal("store connection mutex poisoned"))
    }

    /// Convert a database row to a [`Note`].
    fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
        let id: String = row.get(0)?;
        let title: String = row.get(1)?;
        // Never surface a missing content field; substitute the empty string.
        let content: Option<String> = row.get(2)?;
        let created_at_str: String = row.get(3)?;
        let updated_at_str: String = row.get(4)?;

        Ok(Note {
            id,
            title,
            content: content.unwrap_or_default(),
            created_at: parse_timestamp(&created_at_str),
            updated_at: parse_timestamp(&updated_at_str),
        })
    }
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}

#[async_trait::async_trait]
impl NoteStore for SqliteStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn list_notes(&self) -> Result<Vec<Note>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r"
            SELECT id, title, content, created_at, updated_at
            FROM notes ORDER BY updated_at DESC, created_at DESC
            ",
        )?;

        let notes = stmt
            .query_map([], Self::row_to_note)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Listed {} notes", notes.len());
        Ok(notes)
    }

    async fn read_pin(&self) -> Result<String> {
        let conn = self.lock()?;
        let value: Option<String> = conn
            .query_row("SELECT value FROM pin WHERE id = ?1", [PIN_DOC_ID], |row| {
                row.get(0)
            })
            .optional()?;

        value.ok_or(Error::PinMissing)
    }

    async fn write_pin(&self, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO pin (id, value) VALUES (?1, ?2)",
            params![PIN_DOC_ID, value],
        )?;
        info!("Pin document written");
        Ok(())
    }

    async fn create_note(&self, draft: NoteDraft) -> Result<Note> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };

        let conn = self.lock()?;
        conn.execute(
            r"
            INSERT INTO notes (id, title, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
            params![
                note.id,
                note.title,
                note.content,
                note.created_at.to_rfc3339(),
                note.updated_at.to_rfc3339(),
            ],
        )?;

        debug!("Created note {}", note.id);
        Ok(note)
    }

    async fn commit_batch(&self, updates: &[NoteUpdate]) -> Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        for update in updates {
            let affected = tx.execute(
                r"
                UPDATE notes SET title = ?2, content = ?3, updated_at = ?4
                WHERE id = ?1
                ",
                params![
                    update.id,
                    update.title,
                    update.content,
                    update.updated_at.to_rfc3339(),
                ],
            )?;

            if affected == 0 {
                // Dropping the transaction rolls back every staged update.
                return Err(Error::note_missing(update.id.clone()));
            }
        }

        tx.commit()?;
        info!("Committed batch of {} note updates", updates.len());
        Ok(())
    }
}
