// Rust guideline compliant 2026-10-19

//! Implementation of the `ask`, `hardest card` and `reset stats` actions.

use flashcards_core::{CardStore, Dialogue, Notice, Prompt, Result};

/// Asks how many questions to run, then runs the quiz.
///
/// # Errors
///
/// Returns an error if the count is not a number, and propagates dialogue
/// failures.
pub fn ask(store: &mut CardStore, dialogue: &mut Dialogue<'_>) -> Result<()> {
    let count = dialogue.ask_count(Prompt::QuestionCount)?;
    store.run_quiz(Some(count), dialogue)?;
    Ok(())
}

/// Reports the card or cards answered wrong most often.
///
/// # Errors
///
/// Propagates dialogue failures.
pub fn hardest(store: &CardStore, dialogue: &mut Dialogue<'_>) -> Result<()> {
    let hardest = store.hardest();
    dialogue.tell(Notice::Hardest(&hardest))
}

/// Clears every error count.
///
/// # Errors
///
/// Propagates dialogue failures.
pub fn reset_stats(store: &mut CardStore, dialogue: &mut Dialogue<'_>) -> Result<()> {
    store.reset_stats();
    dialogue.tell(Notice::StatsReset)
}
