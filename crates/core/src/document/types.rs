use std::fmt;

/// Caret location at invocation time (zero-based, columns in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// True when the caret sits at the very start of the document.
    pub fn is_document_start(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Read-only snapshot of one document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSample {
    pub text: String,
    /// Character index of the first non-whitespace character, or the line's
    /// character length when the line is whitespace only.
    pub first_non_whitespace_column: usize,
    pub is_blank: bool,
}

impl LineSample {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let first_non_whitespace_column = text
            .chars()
            .position(|c| !c.is_whitespace())
            .unwrap_or_else(|| text.chars().count());
        let is_blank = text.trim().is_empty();
        Self { text, first_non_whitespace_column, is_blank }
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.text.contains(marker)
    }

    /// Whether a caret at `column` lines up with this line's content.
    pub fn aligns_with(&self, column: usize) -> bool {
        self.first_non_whitespace_column == column
    }
}

impl From<&str> for LineSample {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
