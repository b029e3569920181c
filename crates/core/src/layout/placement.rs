use tracing::debug;

use super::template::LayoutChoice;
use super::{COLUMN_END, COLUMN_START, ROW_END, ROW_START};

/// Which blocks are open at the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutContext {
    pub in_row: bool,
    pub in_column: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPlacement {
    Proceed,
    /// A row cannot be opened inside another row.
    RejectNestedRow,
    /// Columns only live inside a row.
    RejectOutsideRow,
    /// Columns cannot be nested.
    RejectInsideColumn,
}

/// Work out the open blocks from the lines above the caret, nearest first.
///
/// Scanning stops at the nearest row marker. A column is open when the
/// nearest column marker seen before that row marker is an opening one.
pub fn scan_context<'a, I>(lines_above: I) -> LayoutContext
where
    I: IntoIterator<Item = &'a str>,
{
    let mut in_column = None;

    for line in lines_above {
        let marker = line.trim();
        if marker == ROW_END {
            return LayoutContext::default();
        }
        if marker == ROW_START {
            return LayoutContext { in_row: true, in_column: in_column.unwrap_or(false) };
        }
        if in_column.is_none() {
            if marker == COLUMN_END {
                in_column = Some(false);
            } else if marker.starts_with(COLUMN_START) {
                in_column = Some(true);
            }
        }
    }

    LayoutContext::default()
}

pub fn check_placement(choice: LayoutChoice, ctx: LayoutContext) -> LayoutPlacement {
    let placement = if choice.is_row() {
        if ctx.in_row { LayoutPlacement::RejectNestedRow } else { LayoutPlacement::Proceed }
    } else if !ctx.in_row {
        LayoutPlacement::RejectOutsideRow
    } else if ctx.in_column {
        LayoutPlacement::RejectInsideColumn
    } else {
        LayoutPlacement::Proceed
    };

    debug!(?choice, ?ctx, ?placement, "checked layout placement");
    placement
}
