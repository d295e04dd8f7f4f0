// Rust guideline compliant 2026-10-19

//! Implementation of the `import`, `export` and `log` actions.

use flashcards_core::{
    CardStore, Dialogue, Notice, Prompt, Prompter, Result, Transcript,
};
use std::path::{Path, PathBuf};

fn resolve_path(path: Option<&Path>, dialogue: &mut Dialogue<'_>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(PathBuf::from(dialogue.ask(Prompt::FileName)?)),
    }
}

/// Imports a card file, asking for the file name when `path` is `None`.
///
/// # Errors
///
/// Returns an error if a line of the file is malformed, and propagates
/// dialogue failures. A file that cannot be opened is reported to the user.
pub fn import(
    store: &mut CardStore,
    dialogue: &mut Dialogue<'_>,
    path: Option<&Path>,
) -> Result<()> {
    let path = resolve_path(path, dialogue)?;
    let outcome = store.import(&path, dialogue)?;
    dialogue.tell(Notice::from(&outcome))
}

/// Exports every card, asking for the file name when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export(store: &CardStore, dialogue: &mut Dialogue<'_>, path: Option<&Path>) -> Result<()> {
    let path = resolve_path(path, dialogue)?;
    let count = store.export(&path)?;
    dialogue.tell(Notice::Saved { count })
}

/// Writes the session transcript to a file chosen by the user.
///
/// The saved file holds everything up to and including the file name
/// answer; the confirmation is recorded afterwards.
///
/// # Errors
///
/// Returns an error if the transcript cannot be written.
pub fn log(transcript: &mut Transcript, prompter: &mut dyn Prompter) -> Result<()> {
    let file_name = Dialogue::new(prompter, transcript).ask(Prompt::FileName)?;
    transcript.save(Path::new(&file_name))?;
    Dialogue::new(prompter, transcript).tell(Notice::LogSaved)
}
