// Rust guideline compliant 2026-10-19

//! Session transcript recording.
//!
//! Every prompt, answer and notice of a session is forwarded to a
//! [`TranscriptSink`]. The in-memory [`Transcript`] keeps those lines until
//! the user asks for them to be written to a file.

use crate::Result;
use std::path::Path;

/// Default prefix marking lines the user typed.
pub const DEFAULT_INPUT_MARKER: &str = "> ";

/// Receiver for transcript lines.
pub trait TranscriptSink {
    /// Records one line. `is_output` is false for user-supplied input.
    fn write(&mut self, line: &str, is_output: bool);
}

/// In-memory transcript of a session.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<String>,
    input_marker: String,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Creates an empty transcript using the default input marker.
    pub fn new() -> Self {
        Self::with_input_marker(DEFAULT_INPUT_MARKER)
    }

    /// Creates an empty transcript with a custom input marker.
    pub fn with_input_marker(marker: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            input_marker: marker.into(),
        }
    }

    /// Returns the recorded lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the accumulated transcript, one line per recorded entry.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Writes the accumulated transcript verbatim to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.contents())?;
        tracing::debug!(path = %path.display(), lines = self.lines.len(), "transcript saved");
        Ok(())
    }
}

impl TranscriptSink for Transcript {
    fn write(&mut self, line: &str, is_output: bool) {
        if is_output {
            self.lines.push(line.to_string());
        } else {
            self.lines.push(format!("{}{}", self.input_marker, line));
        }
    }
}
