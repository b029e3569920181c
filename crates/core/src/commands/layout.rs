use std::path::Path;

use tracing::info;

use super::{CommandError, CommandEvent, CommandOption, LAYOUT_EVENT, finish, surfaced};
use crate::document::LineSample;
use crate::host::{ChoiceItem, EditorHost};
use crate::layout::{
    ColumnKind, LayoutChoice, LayoutPlacement, check_placement, render_column, render_row,
    scan_context,
};

const PICK_LAYOUT_PROMPT: &str = "Select a layout block";

/// Offer the row/column scaffolds and insert the picked one.
pub fn insert_rows_and_columns<H: EditorHost + ?Sized>(
    host: &mut H,
) -> Result<CommandEvent, CommandError> {
    let result = layout_flow(host);
    surfaced(host, result)
}

pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
}

fn layout_flow<H: EditorHost + ?Sized>(host: &mut H) -> Result<CommandEvent, CommandError> {
    let cursor = host.cursor().ok_or(CommandError::NoActiveEditor)?;
    if !host.document_path().is_some_and(is_markdown_path) {
        return Err(CommandError::NotMarkdown);
    }

    let items: Vec<ChoiceItem> =
        LayoutChoice::ALL.iter().map(|c| ChoiceItem::new(c.label())).collect();
    let choice = host
        .present_choice(PICK_LAYOUT_PROMPT, &items)
        .and_then(|i| LayoutChoice::ALL.get(i).copied())
        .ok_or(CommandError::SelectionCancelled)?;

    let above: Vec<LineSample> =
        (0..cursor.line).rev().map_while(|n| host.line(n)).collect();
    let ctx = scan_context(above.iter().map(|l| l.text.as_str()));

    let reason = match check_placement(choice, ctx) {
        LayoutPlacement::Proceed => None,
        LayoutPlacement::RejectNestedRow => Some("rows cannot be nested"),
        LayoutPlacement::RejectOutsideRow => Some("columns must be inside a row"),
        LayoutPlacement::RejectInsideColumn => Some("columns cannot be nested"),
    };
    if let Some(reason) = reason {
        return Err(CommandError::InvalidLayoutPosition { choice: choice.label(), reason });
    }

    let (text, option) = match choice {
        LayoutChoice::TwoColumnRow => (render_row(2, cursor.column), CommandOption::TwoColumnRow),
        LayoutChoice::NewColumn => {
            (render_column(ColumnKind::Plain, cursor.column), CommandOption::NewColumn)
        }
        LayoutChoice::NewColumnWithSpan => {
            (render_column(ColumnKind::Span, cursor.column), CommandOption::NewColumnWithSpan)
        }
    };

    host.insert_text_at_cursor(LAYOUT_EVENT, &text)?;
    info!(choice = choice.tag(), %cursor, "inserted layout block");
    host.report_status(&format!("Inserted {}.", choice.label().to_lowercase()));

    Ok(finish(host, LAYOUT_EVENT, option))
}
