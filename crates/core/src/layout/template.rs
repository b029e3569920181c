use std::fmt;

use super::{COLUMN_END, ROW_END, ROW_START};

/// Indent of a column block inside its row.
pub const COLUMN_INDENT: &str = "   ";

/// The layout scaffolds offered to the user, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChoice {
    TwoColumnRow,
    NewColumn,
    NewColumnWithSpan,
}

impl LayoutChoice {
    pub const ALL: [LayoutChoice; 3] =
        [Self::TwoColumnRow, Self::NewColumn, Self::NewColumnWithSpan];

    pub fn label(self) -> &'static str {
        match self {
            Self::TwoColumnRow => "Two-column structure",
            Self::NewColumn => "New column",
            Self::NewColumnWithSpan => "New column with span",
        }
    }

    /// Identifier used on the command line and in recorded events.
    pub fn tag(self) -> &'static str {
        match self {
            Self::TwoColumnRow => "two-column",
            Self::NewColumn => "column",
            Self::NewColumnWithSpan => "column-span",
        }
    }

    pub fn is_row(self) -> bool {
        matches!(self, Self::TwoColumnRow)
    }
}

impl fmt::Display for LayoutChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Plain,
    Span,
}

impl ColumnKind {
    fn opening(self) -> &'static str {
        match self {
            Self::Plain => ":::column:::",
            Self::Span => ":::column span=\"\":::",
        }
    }
}

/// Render a row holding `columns` empty columns.
///
/// `indent` is the caret column; every line after the first is shifted by it
/// so the block keeps its shape wherever it is inserted.
pub fn render_row(columns: usize, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut lines = vec![ROW_START.to_string()];
    for _ in 0..columns {
        lines.push(format!("{pad}{COLUMN_INDENT}{}", ColumnKind::Plain.opening()));
        lines.push(String::new());
        lines.push(format!("{pad}{COLUMN_INDENT}{COLUMN_END}"));
    }
    lines.push(format!("{pad}{ROW_END}"));
    lines.join("\n")
}

/// Render a single empty column whose closing marker lines up with the caret.
pub fn render_column(kind: ColumnKind, indent: usize) -> String {
    format!("{}\n\n{}{COLUMN_END}", kind.opening(), " ".repeat(indent))
}
