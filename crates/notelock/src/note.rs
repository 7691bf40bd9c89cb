//! Core note types for notelock.
//!
//! This module defines the data structures shared between the remote note
//! store and the in-memory session cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to every freshly created note.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// A note as held in the remote store and mirrored by the session cache.
///
/// The `id` is assigned by the store at creation and never changes.
/// `updated_at` reflects the last successful sync, not local edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque identifier assigned by the store.
    pub id: String,

    /// Free-text title.
    pub title: String,

    /// Rich-text content serialized as a markup string.
    ///
    /// Never null in storage; missing content reads back as the empty string.
    pub content: String,

    /// When the note was created (set once by the store).
    pub created_at: DateTime<Utc>,

    /// When the note was last written by a sync.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Check if the note still carries the creation defaults.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.title == DEFAULT_TITLE && self.content.is_empty()
    }
}

/// The fields a caller supplies when creating a note.
///
/// Identifiers and timestamps are assigned by the store, so a draft only
/// carries the mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Initial title.
    pub title: String,
    /// Initial content markup.
    pub content: String,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
        }
    }
}

/// One staged row of a batch sync.
///
/// Every note in the cache is re-stamped on every sync, so an update always
/// carries a fresh `updated_at` alongside the current title and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    /// Identifier of the note to update.
    pub id: String,
    /// Title to write.
    pub title: String,
    /// Content to write. Always a concrete string, possibly empty.
    pub content: String,
    /// The new last-synced timestamp.
    pub updated_at: DateTime<Utc>,
}

impl NoteUpdate {
    /// Stage an update for a cached note with a fresh timestamp.
    #[must_use]
    pub fn staged(note: &Note, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        let now = Utc::now();
        Note {
            id: "n-1".to_string(),
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_draft_default_fields() {
        let draft = NoteDraft::default();
        assert_eq!(draft.title, "Untitled Note");
        assert!(draft.content.is_empty());
    }

    #[test]
    fn test_note_is_untouched() {
        let mut note = sample_note();
        assert!(note.is_untouched());

        note.title = "Groceries".to_string();
        assert!(!note.is_untouched());
    }

    #[test]
    fn test_staged_update_carries_current_fields() {
        let mut note = sample_note();
        note.title = "Edited".to_string();
        note.content = "<p>hello</p>".to_string();

        let stamp = Utc::now();
        let update = NoteUpdate::staged(&note, stamp);

        assert_eq!(update.id, note.id);
        assert_eq!(update.title, "Edited");
        assert_eq!(update.content, "<p>hello</p>");
        assert_eq!(update.updated_at, stamp);
    }

    #[test]
    fn test_staged_update_does_not_touch_note() {
        let note = sample_note();
        let before = note.updated_at;

        let _ = NoteUpdate::staged(&note, Utc::now());
        assert_eq!(note.updated_at, before);
    }

    #[test]
    fn test_note_serialization_round_trip() {
        let note = sample_note();
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();

        assert_eq!(note, back);
    }
}
