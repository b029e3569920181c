//! Decides whether a TOC entry may be inserted at the caret.
//!
//! The decision looks only at the line directly above the caret (and, after
//! an `href:` line, the one above that). Rules are evaluated in a fixed order
//! and the first rule that recognises the context wins. Markers are plain
//! substring checks, so a line carrying several markers is classified by the
//! earliest rule: name, then items, then href, then blank.

use tracing::debug;

use super::{HREF_MARKER, ITEMS_MARKER, NAME_MARKER};
use crate::document::{CursorPosition, LineSample};

/// Outcome of a placement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationResult {
    /// The caret is a valid insertion point.
    Proceed,
    /// The caret does not line up with the anchor line.
    RejectMisaligned,
    /// The line above is blank, so there is nothing to align with.
    RejectBlankContext,
    /// The line above is not a structure the rules understand.
    RejectUnrecognizedContext,
}

struct Placement<'a> {
    cursor: CursorPosition,
    above: Option<&'a LineSample>,
    two_above: Option<&'a LineSample>,
}

type Rule = fn(&Placement<'_>) -> Option<ClassificationResult>;

const RULES: &[(&str, Rule)] = &[
    ("document-start", document_start),
    ("name-marker", name_marker),
    ("items-marker", items_marker),
    ("href-marker", href_marker),
    ("blank-line", blank_line),
];

/// Classify the caret position against its neighbouring lines.
///
/// `line_above` is `None` only when the caret is on the first line (or the
/// host could not sample it); `line_two_above` is `None` when the caret is
/// on one of the first two lines.
pub fn classify(
    cursor: CursorPosition,
    line_above: Option<&LineSample>,
    line_two_above: Option<&LineSample>,
) -> ClassificationResult {
    let placement = Placement { cursor, above: line_above, two_above: line_two_above };

    for (name, rule) in RULES {
        if let Some(result) = rule(&placement) {
            debug!(rule = *name, %cursor, ?result, "classified toc placement");
            return result;
        }
    }

    debug!(%cursor, "no placement rule matched");
    ClassificationResult::RejectUnrecognizedContext
}

fn aligned(anchor: &LineSample, column: usize) -> ClassificationResult {
    if anchor.aligns_with(column) {
        ClassificationResult::Proceed
    } else {
        ClassificationResult::RejectMisaligned
    }
}

fn document_start(p: &Placement<'_>) -> Option<ClassificationResult> {
    if p.cursor.line != 0 {
        return None;
    }
    Some(if p.cursor.is_document_start() {
        ClassificationResult::Proceed
    } else {
        ClassificationResult::RejectMisaligned
    })
}

fn name_marker(p: &Placement<'_>) -> Option<ClassificationResult> {
    let above = p.above.filter(|l| l.contains(NAME_MARKER))?;
    Some(aligned(above, p.cursor.column))
}

fn items_marker(p: &Placement<'_>) -> Option<ClassificationResult> {
    let above = p.above.filter(|l| l.contains(ITEMS_MARKER))?;
    Some(aligned(above, p.cursor.column))
}

// A sibling goes under the previous entry's name, skipping its href line.
fn href_marker(p: &Placement<'_>) -> Option<ClassificationResult> {
    p.above.filter(|l| l.contains(HREF_MARKER))?;
    Some(match p.two_above.filter(|l| l.contains(NAME_MARKER)) {
        Some(name_line) => aligned(name_line, p.cursor.column),
        None => ClassificationResult::RejectUnrecognizedContext,
    })
}

fn blank_line(p: &Placement<'_>) -> Option<ClassificationResult> {
    p.above.filter(|l| l.is_blank).map(|_| ClassificationResult::RejectBlankContext)
}
