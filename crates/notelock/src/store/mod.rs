//! Remote note store abstraction.
//!
//! This module defines the trait every note store backend must fulfill,
//! along with the backends themselves. The store owns durable state; the
//! session cache in [`crate::workspace`] only mirrors it between an initial
//! load and explicit syncs.

pub mod memory;
pub mod migrations;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::note::{Note, NoteDraft, NoteUpdate};

/// Identifier of the singleton pin document.
pub const PIN_DOC_ID: &str = "default";

/// A backend holding the durable note collection and the pin document.
///
/// All operations are asynchronous and may fail transiently; callers are
/// expected to surface failures to the user and never retry automatically.
#[async_trait::async_trait]
pub trait NoteStore: Send + Sync {
    /// The name of this backend (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Fetch the full note collection, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Read the singleton pin document's value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PinMissing`] if the document has never been
    /// set, or another error if the read fails.
    async fn read_pin(&self) -> Result<String>;

    /// Create or replace the singleton pin document.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn write_pin(&self, value: &str) -> Result<()>;

    /// Create a single note, assigning an id and both timestamps.
    ///
    /// This is the one write that is not deferred to a sync: the created
    /// note exists remotely before the caller ever sees it.
    ///
    /// # Errors
    ///
    /// Returns an error if the create fails; no document is left behind.
    async fn create_note(&self, draft: NoteDraft) -> Result<Note>;

    /// Apply a batch of note updates atomically.
    ///
    /// Either every staged update is applied or none is. An update for an
    /// unknown id fails the whole batch.
    ///
    /// # Errors
    ///
    /// Returns an error if any update cannot be applied; the store is left
    /// unchanged in that case.
    async fn commit_batch(&self, updates: &[NoteUpdate]) -> Result<()>;
}
