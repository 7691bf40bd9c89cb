//! Editor surface abstraction.
//!
//! The note body is edited through a capability interface rather than a
//! concrete widget, so the rendering layer can be swapped without touching
//! the session logic. A surface is created per note: callers must build a
//! fresh instance whenever the selected note changes so no editing state
//! leaks between notes.

/// A surface that can display and edit a single note body.
///
/// Implementations hold whatever widget state they need; the contract is
/// just "show this content" and "report the content back after edits".
pub trait EditorSurface {
    /// Replace the displayed content.
    fn render(&mut self, content: &str);

    /// Accept an edit made on the surface.
    fn on_change(&mut self, content: &str);

    /// The current content, including any edits made on the surface.
    fn content(&self) -> &str;
}

/// Plain-text editor surface.
///
/// The simplest possible implementation: a string buffer. Edits are applied
/// by replacing the buffer wholesale, which matches how line-oriented input
/// arrives from the shell.
#[derive(Debug, Default)]
pub struct PlainEditor {
    buffer: String,
}

impl PlainEditor {
    /// Create an empty editor surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface pre-loaded with content.
    #[must_use]
    pub fn with_content(content: &str) -> Self {
        Self {
            buffer: content.to_string(),
        }
    }

}

impl EditorSurface for PlainEditor {
    fn render(&mut self, content: &str) {
        self.buffer = content.to_string();
    }

    fn on_change(&mut self, content: &str) {
        self.buffer = content.to_string();
    }

    fn content(&self) -> &str {
        &self.buffer
    }
}
