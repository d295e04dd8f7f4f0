// Rust guideline compliant 2026-10-19

//! Storage module for card files.
//!
//! A card file is UTF-8 text with one card per line, fields separated by
//! `", "` in the order `term, definition, errors`. Fields are not escaped:
//! a term or definition containing `", "` cannot be read back. Existing
//! saved files depend on this exact layout, so it is kept as is.

use crate::{Card, Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Field separator used on every line of a card file.
pub const FIELD_SEPARATOR: &str = ", ";

/// Encodes a card as a single line, without the trailing newline.
pub fn encode_line(card: &Card) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        card.term,
        card.definition,
        card.errors,
        sep = FIELD_SEPARATOR
    )
}

/// Decodes one line into a card.
///
/// # Errors
///
/// Returns a description of the problem if the line does not have exactly
/// three fields or the error count is not a non-negative base-10 integer.
pub fn decode_line(line: &str) -> std::result::Result<Card, String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [term, definition, errors] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };
    let errors = errors
        .parse::<u32>()
        .map_err(|e| format!("invalid error count {errors:?}: {e}"))?;
    Ok(Card::with_errors(*term, *definition, errors))
}

/// A card file on disk.
#[derive(Debug, Clone)]
pub struct CardFile {
    path: PathBuf,
}

impl CardFile {
    /// Creates a handle for the card file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns the card file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file for streaming reads.
    ///
    /// Cards are decoded lazily so a caller can act on every card that
    /// precedes a malformed line.
    ///
    /// # Errors
    ///
    /// Returns the raw IO error if the file cannot be opened or is not a
    /// regular file.
    pub fn open(&self) -> std::io::Result<CardReader<BufReader<File>>> {
        let file = File::open(&self.path)?;
        if !file.metadata()?.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", self.path.display()),
            ));
        }
        Ok(CardReader::new(BufReader::new(file)))
    }

    /// Reads every card in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any line is malformed.
    pub fn load_all(&self) -> Result<Vec<Card>> {
        self.open()?.collect()
    }

    /// Replaces the file contents with `cards`, in iteration order.
    ///
    /// Writes to a uniquely named temp file in the destination directory and
    /// persists it over the destination, so an interrupted export never
    /// leaves a truncated file behind. The temp file is removed if any step
    /// fails. The destination is overwritten without confirmation.
    ///
    /// # Returns
    ///
    /// The number of cards written.
    ///
    /// # Errors
    ///
    /// Returns an error if the temp file cannot be written or persisted.
    pub fn save_all<'a, I>(&self, cards: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;

        let mut count = 0;
        for card in cards {
            temp.write_all(encode_line(card).as_bytes())?;
            temp.write_all(b"\n")?;
            count += 1;
        }
        temp.as_file().sync_all()?;

        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(count)
    }
}

/// Iterator decoding cards line by line from a reader.
pub struct CardReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> CardReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for CardReader<R> {
    type Item = Result<Card>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };
        self.line_no += 1;
        Some(decode_line(&line).map_err(|reason| Error::MalformedLine {
            line: self.line_no,
            reason,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_line_layout() {
        let card = Card::with_errors("cat", "gato", 2);
        assert_eq!(encode_line(&card), "cat, gato, 2");
    }

    #[test]
    fn test_decode_line_parses_three_fields() {
        let card = decode_line("dog, perro, 0").expect("valid line");
        assert_eq!(card, Card::new("dog", "perro"));
    }

    #[test]
    fn test_decode_line_rejects_wrong_field_count() {
        let err = decode_line("dog, perro").unwrap_err();
        assert!(err.contains("expected 3 fields, found 2"));

        let err = decode_line("a, b, c, 1").unwrap_err();
        assert!(err.contains("found 4"));
    }

    #[test]
    fn test_decode_line_rejects_bad_count() {
        assert!(decode_line("dog, perro, many").is_err());
        assert!(decode_line("dog, perro, -1").is_err());
    }

    #[test]
    fn test_embedded_separator_misparses() {
        let card = Card::new("salt, pepper", "condiments");
        assert!(decode_line(&encode_line(&card)).is_err());
    }

    #[test]
    fn test_reader_reports_line_number() {
        let input = "cat, gato, 0\nbroken\n";
        let results: Vec<_> = CardReader::new(input.as_bytes()).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::MalformedLine { line: 2, .. })));
    }
}
