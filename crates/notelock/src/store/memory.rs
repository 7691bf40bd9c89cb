//! In-memory note store.
//!
//! Backend used by tests and throwaway sessions. Mirrors the `SQLite`
//! backend's semantics exactly, and adds failure injection so error paths
//! can be exercised deterministically.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::note::{Note, NoteDraft, NoteUpdate};

use super::NoteStore;

#[derive(Debug, Default)]
struct Inner {
    notes: Vec<Note>,
    pin: Option<String>,
    unavailable: bool,
}

/// Note store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle failure injection.
    ///
    /// While set, every trait operation fails with
    /// [`crate::Error::StoreUnavailable`] and leaves state untouched.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = unavailable;
        }
    }

    /// Insert a note directly, bypassing id and timestamp assignment.
    ///
    /// Intended for tests that need notes with explicit timestamps.
    pub fn seed_note(&self, note: Note) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.notes.push(note);
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| Error::internal("memory store mutex poisoned"))?;
        if inner.unavailable {
            return Err(Error::store_unavailable("injected failure"));
        }
        Ok(inner)
    }
}

#[async_trait::async_trait]
impl NoteStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_notes(&self) -> Result<Vec<Note>> {
        let inner = self.lock()?;
        let mut notes = inner.notes.clone();
        notes.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(notes)
    }

    async fn read_pin(&self) -> Result<String> {
        let inner = self.lock()?;
        inner.pin.clone().ok_or(Error::PinMissing)
    }

    async fn write_pin(&self, value: &str) -> Result<()> {
        let mut inner = self.lock()?;
        inner.pin = Some(value.to_string());
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

        let mut inner = self.lock()?;
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn commit_batch(&self, updates: &[NoteUpdate]) -> Result<()> {
        let mut inner = self.lock()?;

        // Validate the whole batch before touching anything, so a bad row
        // never leaves a partial commit behind.
        for update in updates {
            if !inner.notes.iter().any(|n| n.id == update.id) {
                return Err(Error::note_missing(update.id.clone()));
            }
        }

        for update in updates {
            if let Some(note) = inner.notes.iter_mut().find(|n| n.id == update.id) {
                note.title = update.title.clone();
                note.content = update.content.clone();
                note.updated_at = update.updated_at;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn note_at(id: &str, minutes_ago: i64) -> Note {
        let stamp = Utc::now() - Duration::minutes(minutes_ago);
        Note {
            id: id.to_string(),
            title: format!("Note {id}"),
            content: String::new(),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.list_notes().await.unwrap().is_empty());
        assert!(matches!(store.read_pin().await, Err(Error::PinMissing)));
    }

    #[tokio::test]
    async fn test_list_orders_by_updated_at_desc() {
        let store = MemoryStore::new();
        store.seed_note(note_at("old", 10));
        store.seed_note(note_at("new", 1));

        let notes = store.list_notes().await.unwrap();
        assert_eq!(notes[0].id, "new");
        assert_eq!(notes[1].id, "old");
    }

    #[tokio::test]
    async fn test_pin_round_trip() {
        let store = MemoryStore::new();
        store.write_pin("123456").await.unwrap();
        assert_eq!(store.read_pin().await.unwrap(), "123456");
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let store = MemoryStore::new();
        let note = store.create_note(NoteDraft::default()).await.unwrap();

        assert!(!note.id.is_empty());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[tokio::test]
    async fn test_commit_batch_all_or_nothing() {
        let store = MemoryStore::new();
        store.seed_note(note_at("a", 5));

        let stamp = Utc::now();
        let updates = vec![
            NoteUpdate {
                id: "a".to_string(),
                title: "Changed".to_string(),
                content: String::new(),
                updated_at: stamp,
            },
            NoteUpdate {
                id: "ghost".to_string(),
                title: String::new(),
                content: String::new(),
                updated_at: stamp,
            },
        ];

        assert!(store.commit_batch(&updates).await.is_err());

        let notes = store.list_notes().await.unwrap();
        assert_eq!(notes[0].title, "Note a");
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        assert!(store.list_notes().await.unwrap_err().is_store_unavailable());
        assert!(store.read_pin().await.unwrap_err().is_store_unavailable());
        assert!(store
            .create_note(NoteDraft::default())
            .await
            .unwrap_err()
            .is_store_unavailable());
        assert!(store
            .commit_batch(&[])
            .await
            .unwrap_err()
            .is_store_unavailable());

        store.set_unavailable(false);
        assert!(store.list_notes().await.is_ok());
    }
}
