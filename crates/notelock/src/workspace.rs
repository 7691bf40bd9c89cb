//! In-memory session cache over the note store.
//!
//! The workspace mirrors the remote collection for one session: notes load
//! once, edits land only in the cache, and a manual sync pushes every cached
//! note back in a single atomic batch. The cached order is fixed at load
//! time (newly created notes are prepended); local edits never re-sort it.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::note::{Note, NoteDraft, NoteUpdate};
use crate::store::NoteStore;

/// Session cache of notes with a current selection.
///
/// All operations that touch the store take it as an argument rather than
/// owning it, so one store can back several short-lived workspaces in tests.
#[derive(Debug, Default)]
pub struct NoteWorkspace {
    notes: Vec<Note>,
    selected: Option<String>,
    loaded: bool,
    loading: bool,
    syncing: bool,
}

impl NoteWorkspace {
    /// Create an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached notes, in display order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The id of the currently selected note, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The currently selected note, if any.
    #[must_use]
    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// Whether the initial load has already run this session.
    #[must_use]
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a sync is in flight.
    #[must_use]
    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    /// Fetch the note collection and replace the cache with it.
    ///
    /// Runs at most once per workspace: repeat calls are no-ops even after a
    /// failed first attempt, which leaves the cache empty for the rest of
    /// the session. On success the head of the fetched order (most recently
    /// updated) becomes the selection, or nothing when the collection is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be fetched.
    pub async fn load(&mut self, store: &dyn NoteStore) -> Result<()> {
        if self.loaded {
            debug!("Load skipped: already ran this session");
            return Ok(());
        }
        self.loaded = true;
        self.loading = true;

        let result = store.list_notes().await;
        self.loading = false;

        match result {
            Ok(notes) => {
                info!("Loaded {} notes", notes.len());
                self.selected = notes.first().map(|n| n.id.clone());
                self.notes = notes;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load notes: {e}");
                Err(e)
            }
        }
    }

    /// Select a note by id.
    ///
    /// Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) {
        if self.notes.iter().any(|n| n.id == id) {
            self.selected = Some(id.to_string());
        } else {
            debug!("Select ignored: unknown note {id}");
        }
    }

    /// Replace a cached note's title.
    ///
    /// Local only: the store sees nothing until the next sync, and the
    /// note's `updated_at` stays at its last-synced value. Unknown ids are
    /// ignored.
    pub fn edit_title(&mut self, id: &str, title: &str) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.title = title.to_string();
        }
    }

    /// Replace a cached note's content.
    ///
    /// Same contract as [`edit_title`](Self::edit_title): cache only,
    /// timestamp untouched, unknown ids ignored.
    pub fn edit_content(&mut self, id: &str, content: &str) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.content = content.to_string();
        }
    }

    /// Create a note in the store and make it the selection.
    ///
    /// The write happens immediately, not at sync time. The cache is only
    /// touched after the store confirms, so a failed create leaves no
    /// phantom entry behind. The new note is prepended regardless of the
    /// cached order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub async fn create(&mut self, store: &dyn NoteStore) -> Result<&Note> {
        let note = store.create_note(NoteDraft::default()).await?;
        info!("Created note {}", note.id);

        self.selected = Some(note.id.clone());
        self.notes.insert(0, note);
        Ok(&self.notes[0])
    }

    /// Push every cached note back to the store in one atomic batch.
    ///
    /// All notes are staged with their current title and content and one
    /// fresh timestamp, edited or not. The cache keeps its old timestamps
    /// afterwards; only the store sees the new ones. On failure nothing is
    /// assumed about the store and the cache is left exactly as it was, so
    /// the user can simply retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch commit fails.
    pub async fn sync(&mut self, store: &dyn NoteStore) -> Result<()> {
        let stamp = Utc::now();
        let updates: Vec<NoteUpdate> = self
            .notes
            .iter()
            .map(|note| NoteUpdate::staged(note, stamp))
            .collect();

        self.syncing = true;
        let result = store.commit_batch(&updates).await;
        self.syncing = false;

        match result {
            Ok(()) => {
                info!("Synced {} notes", updates.len());
                Ok(())
            }
            Err(e) => {
                warn!("Sync failed: {e}");
                Err(e)
            }
        }
    }
}
