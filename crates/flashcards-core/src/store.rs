// Rust guideline compliant 2026-10-19

//! The card store.
//!
//! [`CardStore`] owns every card of a session in insertion order and
//! enforces that both terms and definitions are unique.

use crate::dialogue::Dialogue;
use crate::messages::{Notice, Prompt};
use crate::models::CardRecord;
use crate::storage::CardFile;
use crate::{Card, Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Result of removing a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The card existed and is gone.
    Removed(Card),
    /// No card had the requested term.
    NotFound(String),
}

/// Result of importing a card file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The file was read; carries the number of cards loaded.
    Loaded(usize),
    /// The file could not be opened.
    FileNotFound(PathBuf),
}

/// Result of the hardest-card query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hardest {
    /// The store is empty or every error count is zero.
    NoErrors,
    /// Exactly one term has the maximum error count.
    Single {
        /// The hardest term.
        term: String,
        /// Its error count.
        errors: u32,
    },
    /// Several terms share the maximum error count, in insertion order.
    Tied(Vec<String>),
}

/// Ordered collection of cards with unique terms and unique definitions.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    pub(crate) cards: IndexMap<String, CardRecord>,
}

impl CardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the store holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a copy of every card in insertion order.
    pub fn cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .map(|(term, record)| record.to_card(term))
            .collect()
    }

    /// Looks up a card by term.
    pub fn get(&self, term: &str) -> Option<Card> {
        self.cards.get(term).map(|record| record.to_card(term))
    }

    /// Returns true if `term` is present.
    pub fn check_term(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    /// Returns true if any card has `definition`.
    pub fn check_definition(&self, definition: &str) -> bool {
        self.cards
            .values()
            .any(|record| record.definition == definition)
    }

    /// Builds the definition → term mapping from the current cards.
    ///
    /// Definitions are unique, so the mapping is total and injective.
    pub fn reverse_map(&self) -> HashMap<String, String> {
        self.cards
            .iter()
            .map(|(term, record)| (record.definition.clone(), term.clone()))
            .collect()
    }

    /// Appends a card.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTerm`] or [`Error::DuplicateDefinition`] if
    /// the card collides with an existing one. The store is left unchanged.
    pub fn insert(&mut self, card: Card) -> Result<()> {
        if self.check_term(&card.term) {
            return Err(Error::DuplicateTerm(card.term));
        }
        if self.check_definition(&card.definition) {
            return Err(Error::DuplicateDefinition(card.definition));
        }
        tracing::debug!(term = %card.term, errors = card.errors, "card inserted");
        self.cards.insert(
            card.term,
            CardRecord {
                definition: card.definition,
                errors: card.errors,
            },
        );
        Ok(())
    }

    /// Removes a card by term.
    pub fn remove(&mut self, term: &str) -> Removal {
        match self.cards.shift_remove(term) {
            Some(record) => {
                tracing::debug!(term, "card removed");
                Removal::Removed(record.to_card(term))
            }
            None => Removal::NotFound(term.to_string()),
        }
    }

    /// Finds the term or terms with the highest error count.
    pub fn hardest(&self) -> Hardest {
        let max = self
            .cards
            .values()
            .map(|record| record.errors)
            .max()
            .unwrap_or(0);
        if max == 0 {
            return Hardest::NoErrors;
        }

        let mut terms: Vec<String> = self
            .cards
            .iter()
            .filter(|(_, record)| record.errors == max)
            .map(|(term, _)| term.clone())
            .collect();

        if terms.len() == 1 {
            Hardest::Single {
                term: terms.remove(0),
                errors: max,
            }
        } else {
            Hardest::Tied(terms)
        }
    }

    /// Sets every error count to zero.
    ///
    /// # Returns
    ///
    /// The number of cards whose counts were reset.
    pub fn reset_stats(&mut self) -> usize {
        for record in self.cards.values_mut() {
            record.errors = 0;
        }
        tracing::debug!(cards = self.cards.len(), "statistics reset");
        self.cards.len()
    }
}

impl CardStore {
    /// Adds a card, asking for replacements while it collides.
    ///
    /// A duplicate term is re-asked first, then a duplicate definition. The
    /// confirmation notice is sent once the card is stored.
    ///
    /// # Errors
    ///
    /// Propagates dialogue failures.
    pub fn add_card(&mut self, card: Card, dialogue: &mut Dialogue<'_>) -> Result<Card> {
        let Card {
            mut term,
            mut definition,
            errors,
        } = card;

        while self.check_term(&term) {
            term = dialogue.ask(Prompt::RetryTerm { term: &term })?;
        }
        while self.check_definition(&definition) {
            definition = dialogue.ask(Prompt::RetryDefinition {
                definition: &definition,
            })?;
        }

        let card = Card::with_errors(term, definition, errors);
        self.insert(card.clone())?;
        dialogue.tell(Notice::CardAdded {
            term: &card.term,
            definition: &card.definition,
        })?;
        Ok(card)
    }

    /// Collects cards interactively.
    ///
    /// When `count` is `None` the user is asked how many cards to add. Each
    /// term is checked before its definition is asked for.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumber`] if the count answer is not a number,
    /// and propagates dialogue failures.
    pub fn add_cards(
        &mut self,
        count: Option<usize>,
        dialogue: &mut Dialogue<'_>,
    ) -> Result<Vec<Card>> {
        let count = match count {
            Some(count) => count,
            None => dialogue.ask_count(Prompt::CardCount)?,
        };

        let mut added = Vec::with_capacity(count);
        for n in 1..=count {
            let mut term = dialogue.ask(Prompt::Term { n })?;
            while self.check_term(&term) {
                term = dialogue.ask(Prompt::RetryTerm { term: &term })?;
            }
            let definition = dialogue.ask(Prompt::Definition { n })?;
            added.push(self.add_card(Card::new(term, definition), dialogue)?);
        }
        Ok(added)
    }

    /// Imports cards from a card file.
    ///
    /// Any failure to open the source, including an empty path or a
    /// directory, is reported as [`ImportOutcome::FileNotFound`]. Every card
    /// goes through [`CardStore::add_card`], so colliding cards are re-asked
    /// exactly like interactive ones. Cards added before a
    /// malformed line stay in the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLine`] for the first line that does not
    /// decode, and propagates read and dialogue failures.
    pub fn import(&mut self, path: &Path, dialogue: &mut Dialogue<'_>) -> Result<ImportOutcome> {
        let reader = match CardFile::new(path).and_then(|file| file.open().map_err(Error::from)) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot open card file");
                return Ok(ImportOutcome::FileNotFound(path.to_path_buf()));
            }
        };

        let mut loaded = 0;
        for card in reader {
            let card = card.inspect_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "import aborted");
            })?;
            self.add_card(card, dialogue)?;
            loaded += 1;
        }
        tracing::debug!(path = %path.display(), loaded, "import finished");
        Ok(ImportOutcome::Loaded(loaded))
    }

    /// Writes every card to `path` in insertion order, replacing the file.
    ///
    /// # Returns
    ///
    /// The number of cards written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export(&self, path: &Path) -> Result<usize> {
        let file = CardFile::new(path)?;
        let cards = self.cards();
        let count = file.save_all(&cards)?;
        tracing::debug!(path = %path.display(), count, "export finished");
        Ok(count)
    }
}
