// Rust guideline compliant 2026-10-19

//! Structured prompts and notices exchanged with the user.
//!
//! The engine never formats user-facing text inline. It hands a [`Prompt`]
//! or [`Notice`] to the front end, and the `Display` impls here provide the
//! canonical English rendering that is also written to the transcript.

use crate::quiz::Grade;
use crate::store::{Hardest, ImportOutcome, Removal};
use std::fmt;

/// A question the engine needs answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    /// Main menu listing the available actions.
    Action {
        /// Action names in display order.
        actions: &'a [&'a str],
    },
    /// How many cards an interactive add should collect.
    CardCount,
    /// Term for the `n`th card of an interactive add (1-based).
    Term {
        /// Card number within the current add.
        n: usize,
    },
    /// Definition for the `n`th card of an interactive add (1-based).
    Definition {
        /// Card number within the current add.
        n: usize,
    },
    /// Replacement for a term that is already present.
    RetryTerm {
        /// The rejected term.
        term: &'a str,
    },
    /// Replacement for a definition that is already present.
    RetryDefinition {
        /// The rejected definition.
        definition: &'a str,
    },
    /// Quiz question for a term.
    Question {
        /// The term being asked.
        term: &'a str,
    },
    /// How many quiz questions to ask.
    QuestionCount,
    /// Which card to remove.
    RemoveWhich,
    /// A file path for import, export or transcript saving.
    FileName,
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Action { actions } => {
                write!(f, "Input the action ({}):", actions.join(", "))
            }
            Prompt::CardCount => f.write_str("Input the number of cards:"),
            Prompt::Term { n } => write!(f, "The term for card #{n}:"),
            Prompt::Definition { n } => write!(f, "The definition for card #{n}:"),
            Prompt::RetryTerm { term } => {
                write!(f, "The term \"{term}\" already exists. Try again:")
            }
            Prompt::RetryDefinition { definition } => {
                write!(f, "The definition \"{definition}\" already exists. Try again:")
            }
            Prompt::Question { term } => write!(f, "Print the definition of \"{term}\""),
            Prompt::QuestionCount => f.write_str("How many times to ask?"),
            Prompt::RemoveWhich => f.write_str("Which card?"),
            Prompt::FileName => f.write_str("File name:"),
        }
    }
}

/// An informational line for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    /// A card was stored.
    CardAdded {
        /// Term of the new card.
        term: &'a str,
        /// Definition of the new card.
        definition: &'a str,
    },
    /// A card was removed.
    Removed,
    /// Removal target does not exist.
    NoSuchCard {
        /// The requested term.
        term: &'a str,
    },
    /// An import finished.
    Loaded {
        /// Number of cards read from the file.
        count: usize,
    },
    /// An export finished.
    Saved {
        /// Number of cards written.
        count: usize,
    },
    /// An import source could not be opened.
    FileNotFound,
    /// Outcome of one quiz answer.
    Graded(&'a Grade),
    /// Result of the hardest-card query.
    Hardest(&'a Hardest),
    /// All error counts were cleared.
    StatsReset,
    /// The transcript was written to disk.
    LogSaved,
    /// A recoverable failure, already rendered.
    Failure(&'a str),
    /// Session end.
    Farewell,
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CardAdded { term, definition } => {
                write!(f, "The pair (\"{term}\":\"{definition}\") has been added.")
            }
            Notice::Removed => f.write_str("The card has been removed."),
            Notice::NoSuchCard { term } => {
                write!(f, "Can't remove \"{term}\": there is no such card.")
            }
            Notice::Loaded { count } => write!(f, "{count} cards have been loaded."),
            Notice::Saved { count } => write!(f, "{count} cards have been saved."),
            Notice::FileNotFound => f.write_str("File not found."),
            Notice::Graded(grade) => fmt::Display::fmt(grade, f),
            Notice::Hardest(hardest) => fmt::Display::fmt(hardest, f),
            Notice::StatsReset => f.write_str("Card statistics have been reset."),
            Notice::LogSaved => f.write_str("The log has been saved."),
            Notice::Failure(message) => f.write_str(message),
            Notice::Farewell => f.write_str("Bye bye!"),
        }
    }
}

impl<'a> From<&'a Removal> for Notice<'a> {
    fn from(removal: &'a Removal) -> Self {
        match removal {
            Removal::Removed(_) => Notice::Removed,
            Removal::NotFound(term) => Notice::NoSuchCard { term },
        }
    }
}

impl From<&ImportOutcome> for Notice<'_> {
    fn from(outcome: &ImportOutcome) -> Self {
        match outcome {
            ImportOutcome::Loaded(count) => Notice::Loaded { count: *count },
            ImportOutcome::FileNotFound(_) => Notice::FileNotFound,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Correct => f.write_str("Correct!"),
            Grade::Swapped { expected, matches } => write!(
                f,
                "Wrong. The right answer is \"{expected}\", but your definition is correct for \"{matches}\"."
            ),
            Grade::Wrong { expected } => write!(f, "Wrong. The right answer is \"{expected}\"."),
        }
    }
}

impl fmt::Display for Hardest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hardest::NoErrors => f.write_str("There are no cards with errors."),
            Hardest::Single { term, errors } => write!(
                f,
                "The hardest card is \"{term}\". You have {errors} errors answering it."
            ),
            Hardest::Tied(terms) => {
                f.write_str("The hardest cards are ")?;
                for (idx, term) in terms.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{term}\"")?;
                }
                f.write_str(".")
            }
        }
    }
}
