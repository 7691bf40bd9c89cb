//! `notelock` - PIN-gated notes with manual batch sync
//!
//! This library provides the core functionality for a shared note
//! collection: a PIN gate over a remote document store, a per-session note
//! cache with local-only edits, and an atomic batch sync that pushes the
//! whole cache back at once.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod note;
pub mod store;
pub mod workspace;

pub use auth::{unlock, Session, VerifyOutcome};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use note::{Note, NoteDraft, NoteUpdate};
pub use store::{MemoryStore, NoteStore, SqliteStore};
pub use workspace::NoteWorkspace;
