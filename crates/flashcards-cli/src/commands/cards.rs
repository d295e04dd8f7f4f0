// Rust guideline compliant 2026-10-19

//! Implementation of the `add` and `remove` actions.

use flashcards_core::{CardStore, Dialogue, Notice, Prompt, Result};

/// Adds a single card, asking for its term and definition.
///
/// # Errors
///
/// Propagates dialogue failures.
pub fn add(store: &mut CardStore, dialogue: &mut Dialogue<'_>) -> Result<()> {
    store.add_cards(Some(1), dialogue)?;
    Ok(())
}

/// Asks which card to remove and removes it.
///
/// A missing term is reported to the user, not returned as an error.
///
/// # Errors
///
/// Propagates dialogue failures.
pub fn remove(store: &mut CardStore, dialogue: &mut Dialogue<'_>) -> Result<()> {
    let term = dialogue.ask(Prompt::RemoveWhich)?;
    let removal = store.remove(&term);
    dialogue.tell(Notice::from(&removal))
}
