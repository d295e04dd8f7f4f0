// Rust guideline compliant 2026-10-19

//! Interactive plumbing between the engine, the user and the transcript.

use crate::messages::{Notice, Prompt};
use crate::transcript::TranscriptSink;
use crate::{Error, Result};
use std::collections::VecDeque;

/// Source of user answers and destination of notices.
///
/// Implemented by the console front end and by [`ScriptedPrompter`].
pub trait Prompter {
    /// Shows `prompt` and returns the user's answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] when no more input is available.
    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<String>;

    /// Shows an informational line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn notify(&mut self, notice: &Notice<'_>) -> Result<()>;
}

/// A prompter paired with a transcript sink.
///
/// Every prompt, answer and notice routed through a `Dialogue` is recorded,
/// so engine operations never talk to the prompter directly.
pub struct Dialogue<'a> {
    prompter: &'a mut dyn Prompter,
    transcript: &'a mut dyn TranscriptSink,
}

impl<'a> Dialogue<'a> {
    /// Creates a dialogue over the given prompter and sink.
    pub fn new(prompter: &'a mut dyn Prompter, transcript: &'a mut dyn TranscriptSink) -> Self {
        Self {
            prompter,
            transcript,
        }
    }

    /// Asks a question and records both sides of the exchange.
    ///
    /// # Errors
    ///
    /// Propagates prompter failures, including [`Error::InputClosed`].
    pub fn ask(&mut self, prompt: Prompt<'_>) -> Result<String> {
        self.transcript.write(&prompt.to_string(), true);
        let answer = self.prompter.ask(&prompt)?;
        self.transcript.write(&answer, false);
        Ok(answer)
    }

    /// Asks a question whose answer must be a non-negative count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumber`] if the answer does not parse.
    pub fn ask_count(&mut self, prompt: Prompt<'_>) -> Result<usize> {
        let answer = self.ask(prompt)?;
        answer
            .trim()
            .parse()
            .map_err(|_| Error::InvalidNumber(answer))
    }

    /// Shows and records a notice.
    ///
    /// # Errors
    ///
    /// Propagates prompter output failures.
    pub fn tell(&mut self, notice: Notice<'_>) -> Result<()> {
        self.transcript.write(&notice.to_string(), true);
        self.prompter.notify(&notice)
    }
}

/// Prompter that replays canned answers and records what it was shown.
///
/// Runs out with [`Error::InputClosed`] once the answers are exhausted.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedPrompter {
    /// Creates a prompter that answers with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Rendered prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Rendered notices shown so far.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(Error::InputClosed)
    }

    fn notify(&mut self, notice: &Notice<'_>) -> Result<()> {
        self.notices.push(notice.to_string());
        Ok(())
    }
}
