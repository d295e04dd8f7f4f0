// Rust guideline compliant 2026-10-19

//! Terminal front end for the flashcards CLI.
//!
//! This module provides colour detection and the console [`Prompter`] that
//! reads answers from stdin and prints prompts and notices to stdout.

use flashcards_core::{Error, Grade, Notice, Prompt, Prompter, Result};
use std::env;
use std::io::{self, BufRead, StdinLock, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    // Check NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    atty::is(atty::Stream::Stdout)
}

/// Returns the highlight colour for a notice, if it has one.
pub fn notice_color(notice: &Notice<'_>) -> Option<Color> {
    match notice {
        Notice::Graded(Grade::Correct) => Some(Color::Green),
        Notice::Graded(_) => Some(Color::Red),
        Notice::NoSuchCard { .. } | Notice::FileNotFound | Notice::Failure(_) => {
            Some(Color::Yellow)
        }
        _ => None,
    }
}

/// Console prompter reading answers line by line.
pub struct ConsolePrompter<R> {
    input: R,
    out: StandardStream,
}

impl ConsolePrompter<StdinLock<'static>> {
    /// Creates a prompter over the process stdin and stdout.
    pub fn stdin(use_color: bool) -> Self {
        Self::new(io::stdin().lock(), use_color)
    }
}

impl<R: BufRead> ConsolePrompter<R> {
    /// Creates a prompter reading from `input` and writing to stdout.
    pub fn new(input: R, use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            input,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<R: BufRead> Prompter for ConsolePrompter<R> {
    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<String> {
        writeln!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn notify(&mut self, notice: &Notice<'_>) -> Result<()> {
        match notice_color(notice) {
            Some(color) => {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
                writeln!(self.out, "{notice}")?;
                self.out.reset()?;
            }
            None => writeln!(self.out, "{notice}")?,
        }
        Ok(())
    }
}
