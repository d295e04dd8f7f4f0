// Rust guideline compliant 2026-10-19

//! Error types for the flashcards core library.

use thiserror::Error;

/// Result type alias for flashcards operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flashcards operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of a card file did not decode into a card.
    #[error("Malformed card on line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the source file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The term is already present in the store.
    #[error("Duplicate term: {0}")]
    DuplicateTerm(String),

    /// The definition already belongs to another card.
    #[error("Duplicate definition: {0}")]
    DuplicateDefinition(String),

    /// An answer that should have been a count was not a number.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The input source was exhausted while an answer was expected.
    #[error("Input closed")]
    InputClosed,

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns true for insert rejections that are resolved by asking again.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateTerm(_) | Error::DuplicateDefinition(_))
    }
}
