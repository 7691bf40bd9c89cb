//! Interactive note session.
//!
//! Implements the `shell` subcommand: a PIN prompt followed by a small
//! line-oriented command loop over the session workspace. The loop reads
//! from and writes to generic handles so scripted sessions can drive it in
//! tests.
//!
//! Store failures inside the loop are printed as notices and never end the
//! session; the cache keeps the user's edits so a retry is always possible.

use std::io::{BufRead, Write};

use crate::auth::{unlock, Session, VerifyOutcome};
use crate::config::Config;
use crate::editor::{EditorSurface, PlainEditor};
use crate::error::Result;
use crate::store::NoteStore;
use crate::workspace::NoteWorkspace;

const HELP: &str = "\
Commands:
  list           show all notes
  select <n>     select a note by list position or id
  show           print the selected note
  title <text>   rename the selected note (local until sync)
  edit <text>    replace the selected note's content (local until sync)
  new            create a note and select it
  sync           push all notes to the store
  help           show this help
  quit           end the session";

/// Run an interactive session against the given store.
///
/// Prompts for the PIN until it verifies or input ends, then loops over
/// note commands until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only when reading input or writing output fails; store
/// failures are reported inline and the loop continues.
pub async fn run_shell<R, W>(
    store: &dyn NoteStore,
    config: &Config,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();

    while !session.is_authenticated() {
        write!(output, "PIN: ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        let candidate = line.trim();

        // A candidate of the wrong length can never match; skip the store
        // round trip, same message as a mismatch.
        if candidate.len() != config.auth.pin_length {
            writeln!(output, "{}", VerifyOutcome::InvalidPin.message())?;
            continue;
        }

        let outcome = unlock(&mut session, store, candidate).await;
        writeln!(output, "{}", outcome.message())?;
    }

    let mut workspace = NoteWorkspace::new();
    if workspace.load(store).await.is_err() {
        writeln!(output, "Error loading notes")?;
    }

    let mut editor = PlainEditor::new();
    let mut surface_for: Option<String> = None;
    refresh_editor(&workspace, &mut editor, &mut surface_for);

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "list" => {
                if workspace.notes().is_empty() {
                    writeln!(output, "No notes.")?;
                }
                for (index, note) in workspace.notes().iter().enumerate() {
                    let marker = if workspace.selected_id() == Some(note.id.as_str()) {
                        '*'
                    } else {
                        ' '
                    };
                    writeln!(output, "{marker} {}. {}", index + 1, note.title)?;
                }
            }
            "select" => {
                if let Some(id) = resolve_note(&workspace, rest) {
                    workspace.select(&id);
                    refresh_editor(&workspace, &mut editor, &mut surface_for);
                } else {
                    writeln!(output, "No such note: {rest}")?;
                }
            }
            "show" => match workspace.selected_note() {
                Some(note) => {
                    writeln!(output, "{}", note.title)?;
                    writeln!(output, "{}", editor.content())?;
                }
                None => writeln!(output, "No note selected.")?,
            },
            "title" => {
                if let Some(id) = workspace.selected_id().map(str::to_string) {
                    workspace.edit_title(&id, rest);
                } else {
                    writeln!(output, "No note selected.")?;
                }
            }
            "edit" => {
                if let Some(id) = workspace.selected_id().map(str::to_string) {
                    editor.on_change(rest);
                    workspace.edit_content(&id, editor.content());
                } else {
                    writeln!(output, "No note selected.")?;
                }
            }
            "new" => match workspace.create(store).await {
                Ok(note) => {
                    writeln!(output, "Created \"{}\"", note.title)?;
                    refresh_editor(&workspace, &mut editor, &mut surface_for);
                }
                Err(_) => writeln!(output, "Error creating note")?,
            },
            "sync" => match workspace.sync(store).await {
                Ok(()) => writeln!(output, "Synced {} notes.", workspace.notes().len())?,
                Err(_) => writeln!(output, "Error syncing notes")?,
            },
            "help" => writeln!(output, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(output, "Unknown command: {other} (try \"help\")")?,
        }
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Resolve a user-supplied note reference to an id.
///
/// Accepts a 1-based list position or a literal id.
fn resolve_note(workspace: &NoteWorkspace, reference: &str) -> Option<String> {
    if let Ok(position) = reference.parse::<usize>() {
        if let Some(note) = position.checked_sub(1).and_then(|i| workspace.notes().get(i)) {
            return Some(note.id.clone());
        }
    }
    workspace
        .notes()
        .iter()
        .find(|n| n.id == reference)
        .map(|n| n.id.clone())
}

/// Rebuild the editor surface when the selected note's identity changes.
///
/// A fresh surface per note keeps edits from one note out of another; a
/// repeat call for the same selection leaves in-progress state alone.
fn refresh_editor(workspace: &NoteWorkspace, editor: &mut PlainEditor, surface_for: &mut Option<String>) {
    let current = workspace.selected_id().map(str::to_string);
    if *surface_for != current {
        *editor = match workspace.selected_note() {
            Some(note) => PlainEditor::with_content(&note.content),
            None => PlainEditor::new(),
        };
        *surface_for = current;
    }
}
