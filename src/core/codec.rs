//! Line-oriented text codec for persisted records
//!
//! Each entity writes its fields one per line in a fixed order and reads them
//! back in the same order. Collections are prefixed by a count line. There is
//! no schema version; the field order is the format.

use std::str::FromStr;

use thiserror::Error;

use crate::core::validation::ValidationError;

/// A malformed or truncated persisted record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: unexpected end of data, expected {field}")]
    Truncated { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: more data than the {record} declares")]
    TrailingData { line: usize, record: &'static str },

    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

/// Sequential reader over the lines of a persisted file
pub struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineReader<'a> {
    /// Create a reader over the given text
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    /// 1-based number of the last line read (0 before any read)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next line verbatim
    pub fn text(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        match self.lines.next() {
            Some(line) => {
                self.line += 1;
                Ok(line)
            }
            None => Err(ParseError::Truncated {
                line: self.line + 1,
                field,
            }),
        }
    }

    /// Read the next line and parse it as a number, ignoring surrounding whitespace
    pub fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let raw = self.text(field)?;
        raw.trim().parse().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            field,
            value: raw.to_string(),
        })
    }

    /// Attach the current line number to a validation failure
    pub fn invalid(&self, source: ValidationError) -> ParseError {
        ParseError::Invalid {
            line: self.line,
            source,
        }
    }

    /// Line number of the first non-blank line left unread, if any
    pub fn first_trailing_line(&mut self) -> Option<usize> {
        for line in self.lines.by_ref() {
            self.line += 1;
            if !line.trim().is_empty() {
                return Some(self.line);
            }
        }
        None
    }
}

/// Sequential writer producing one field per line
#[derive(Debug, Default)]
pub struct LineWriter {
    buf: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a text field
    pub fn text(&mut self, value: &str) -> &mut Self {
        self.buf.push_str(value);
        self.buf.push('\n');
        self
    }

    /// Write a numeric field using its shortest round-trip rendering
    pub fn number(&mut self, value: impl std::fmt::Display) -> &mut Self {
        self.buf.push_str(&value.to_string());
        self.buf.push('\n');
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// An entity with a fixed line-oriented text layout
pub trait Record: Sized {
    /// Field name used in error messages for this record's count line
    const NAME: &'static str;

    /// Append this record's lines to the writer
    fn encode(&self, w: &mut LineWriter);

    /// Read exactly one record from the reader
    fn decode(r: &mut LineReader<'_>) -> Result<Self, ParseError>;
}

/// Encode a collection: a count line followed by each record
pub fn encode_all<T: Record>(items: &[T]) -> String {
    let mut w = LineWriter::new();
    w.number(items.len());
    for item in items {
        item.encode(&mut w);
    }
    w.finish()
}

/// Decode a collection written by [`encode_all`]
///
/// Fails on the first truncated or invalid record, and on any non-blank
/// line after the declared number of records; nothing is returned for a
/// partially readable file.
pub fn decode_all<T: Record>(text: &str) -> Result<Vec<T>, ParseError> {
    let mut r = LineReader::new(text);
    let count: usize = r.number(T::NAME)?;
    let mut items = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        items.push(T::decode(&mut r)?);
    }

    if let Some(line) = r.first_trailing_line() {
        return Err(ParseError::TrailingData {
            line,
            record: T::NAME,
        });
    }

    Ok(items)
}
