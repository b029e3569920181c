use std::fmt;

use thiserror::Error;

use super::types::{CursorPosition, LineSample};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("line {line} is out of range (document has {count} lines)")]
    LineOutOfRange { line: usize, count: usize },
}

const LF: &str = "\n";
const CRLF: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    /// `"\r\n"`, `"\n"`, or empty for the last line.
    ending: &'static str,
}

impl Line {
    fn new(text: impl Into<String>, ending: &'static str) -> Self {
        Self { text: text.into(), ending }
    }
}

/// Line buffer over a text file.
///
/// Every line keeps its own terminator, so writing the buffer back leaves
/// untouched lines byte-for-byte as they were loaded. Text ending in a
/// newline has an empty last line, as in an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<Line>,
}

impl TextDocument {
    pub fn parse(content: &str) -> Self {
        let mut pieces: Vec<&str> = content.split('\n').collect();
        let last = pieces.pop().unwrap_or_default();

        let mut lines: Vec<Line> = pieces
            .into_iter()
            .map(|piece| match piece.strip_suffix('\r') {
                Some(text) => Line::new(text, CRLF),
                None => Line::new(piece, LF),
            })
            .collect();
        lines.push(Line::new(last, ""));

        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, n: usize) -> Option<LineSample> {
        self.lines.get(n).map(|l| LineSample::from(l.text.as_str()))
    }

    /// Terminator used for line breaks inside inserted text when the caret
    /// line has none of its own: the first one in the document, else LF.
    fn default_ending(&self) -> &'static str {
        self.lines.iter().map(|l| l.ending).find(|e| !e.is_empty()).unwrap_or(LF)
    }

    /// Insert `text` at `cursor`, returning the caret position after the
    /// inserted text.
    ///
    /// A column past the end of the line is treated as virtual space: the
    /// line is padded with spaces up to the caret before inserting. New line
    /// breaks take the terminator of the line being split.
    pub fn insert(
        &mut self,
        cursor: CursorPosition,
        text: &str,
    ) -> Result<CursorPosition, DocumentError> {
        let count = self.lines.len();
        let fallback = self.default_ending();
        let line = self
            .lines
            .get_mut(cursor.line)
            .ok_or(DocumentError::LineOutOfRange { line: cursor.line, count })?;

        let original_ending = line.ending;
        let break_ending = if original_ending.is_empty() { fallback } else { original_ending };

        let len = line.text.chars().count();
        if cursor.column > len {
            line.text.push_str(&" ".repeat(cursor.column - len));
        }

        let split_at =
            line.text.char_indices().nth(cursor.column).map_or(line.text.len(), |(i, _)| i);
        let suffix = line.text.split_off(split_at);

        let fragments: Vec<&str> = text.split('\n').collect();
        let last_index = fragments.len() - 1;

        line.text.push_str(fragments[0]);
        let mut tail: Vec<Line> =
            fragments[1..].iter().map(|f| Line::new(*f, break_ending)).collect();

        let end = match tail.last_mut() {
            None => {
                let column = line.text.chars().count();
                line.text.push_str(&suffix);
                CursorPosition::new(cursor.line, column)
            }
            Some(last) => {
                let column = last.text.chars().count();
                last.text.push_str(&suffix);
                last.ending = original_ending;
                line.ending = break_ending;
                CursorPosition::new(cursor.line + last_index, column)
            }
        };

        let at = cursor.line + 1;
        self.lines.splice(at..at, tail.drain(..));

        Ok(end)
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(&line.text)?;
            f.write_str(line.ending)?;
        }
        Ok(())
    }
}
