// Rust guideline compliant 2026-10-19

//! Quiz engine.
//!
//! Asks for definitions in insertion order, wrapping around when more
//! questions are requested than there are cards, and scores each answer.

use crate::dialogue::Dialogue;
use crate::messages::{Notice, Prompt};
use crate::store::CardStore;
use crate::Result;
use std::collections::HashMap;

/// Outcome of a single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    /// The answer is the card's definition.
    Correct,
    /// The answer is the definition of another card.
    Swapped {
        /// The asked card's definition.
        expected: String,
        /// The term whose definition was given.
        matches: String,
    },
    /// The answer matches no definition.
    Wrong {
        /// The asked card's definition.
        expected: String,
    },
}

impl Grade {
    /// Scores `answer` against `expected`.
    ///
    /// `reverse` maps every known definition to its term.
    pub fn score(expected: &str, answer: &str, reverse: &HashMap<String, String>) -> Self {
        if answer == expected {
            Grade::Correct
        } else if let Some(term) = reverse.get(answer) {
            Grade::Swapped {
                expected: expected.to_string(),
                matches: term.clone(),
            }
        } else {
            Grade::Wrong {
                expected: expected.to_string(),
            }
        }
    }

    /// Returns true for a correct answer.
    pub fn is_correct(&self) -> bool {
        matches!(self, Grade::Correct)
    }
}

/// One asked question with the given answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    /// The asked term.
    pub term: String,
    /// What the user answered.
    pub answer: String,
    /// How the answer was scored.
    pub grade: Grade,
}

/// Summary of a finished quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSummary {
    /// Every answer in the order asked.
    pub answers: Vec<QuizAnswer>,
}

impl QuizSummary {
    /// Number of questions asked.
    pub fn asked(&self) -> usize {
        self.answers.len()
    }

    /// Number of correct answers.
    pub fn correct(&self) -> usize {
        self.answers.iter().filter(|a| a.grade.is_correct()).count()
    }
}

impl CardStore {
    /// Runs a quiz of `count` questions, defaulting to one per card.
    ///
    /// The question order and the definition lookup are snapshotted when the
    /// quiz starts. Every wrong answer increments the asked term's error
    /// count, including answers that match another card. An empty store or
    /// a zero count asks nothing.
    ///
    /// # Errors
    ///
    /// Propagates dialogue failures. Scores recorded before the failure are
    /// kept.
    pub fn run_quiz(
        &mut self,
        count: Option<usize>,
        dialogue: &mut Dialogue<'_>,
    ) -> Result<QuizSummary> {
        let count = count.unwrap_or(self.len());
        let reverse = self.reverse_map();
        let order: Vec<(String, String)> = self
            .cards
            .iter()
            .map(|(term, record)| (term.clone(), record.definition.clone()))
            .collect();

        let mut summary = QuizSummary::default();
        for (term, definition) in order.iter().cycle().take(count) {
            let answer = dialogue.ask(Prompt::Question { term })?;
            let grade = Grade::score(definition, &answer, &reverse);
            if !grade.is_correct() {
                if let Some(record) = self.cards.get_mut(term) {
                    record.errors = record.errors.saturating_add(1);
                }
            }
            dialogue.tell(Notice::Graded(&grade))?;
            summary.answers.push(QuizAnswer {
                term: term.clone(),
                answer,
                grade,
            });
        }

        tracing::debug!(
            asked = summary.asked(),
            correct = summary.correct(),
            "quiz finished"
        );
        Ok(summary)
    }
}
