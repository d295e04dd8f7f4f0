// Rust guideline compliant 2026-10-19

//! Core data models for flashcards.

/// A single flashcard: a term, its definition and how often it was missed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Prompt side of the card. Unique within a store.
    pub term: String,
    /// Answer side of the card. Unique within a store.
    pub definition: String,
    /// Cumulative number of wrong quiz answers for this term.
    pub errors: u32,
}

impl Card {
    /// Creates a card with a zero error count.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_errors(term, definition, 0)
    }

    /// Creates a card carrying an existing error count.
    pub fn with_errors(term: impl Into<String>, definition: impl Into<String>, errors: u32) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            errors,
        }
    }
}

/// Per-term payload held by the store.
///
/// Definition and error count live in one record so a term can never have
/// one without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardRecord {
    pub(crate) definition: String,
    pub(crate) errors: u32,
}

impl CardRecord {
    pub(crate) fn to_card(&self, term: &str) -> Card {
        Card {
            term: term.to_string(),
            definition: self.definition.clone(),
            errors: self.errors,
        }
    }
}
