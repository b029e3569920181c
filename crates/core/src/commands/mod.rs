//! Command flows driven by the editor's command palette.
//!
//! Every entry point takes the host, runs to completion or to the first
//! error, reports that error through the host the way its kind demands, and
//! hands back either the recorded [`CommandEvent`] or the error.

pub mod layout;
pub mod toc;

use std::fmt;

use thiserror::Error;

use crate::host::{EditorHost, HostError};

pub use layout::insert_rows_and_columns;
pub use toc::{insert_expandable_parent_node, insert_toc_entry, insert_toc_entry_with_options};

/// Event name recorded for TOC edits.
pub const TOC_EVENT: &str = "updateTOC";
/// Event name recorded for row/column edits.
pub const LAYOUT_EVENT: &str = "insertRowsAndColumns";

/// Which variant of a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOption {
    TocEntry,
    TocEntryWithOptions,
    ExpandableParentNode,
    TwoColumnRow,
    NewColumn,
    NewColumnWithSpan,
}

impl CommandOption {
    pub fn tag(self) -> &'static str {
        match self {
            Self::TocEntry => "tocEntry",
            Self::TocEntryWithOptions => "tocEntryWithOptions",
            Self::ExpandableParentNode => "expandableParentNode",
            Self::TwoColumnRow => "twoColumnRow",
            Self::NewColumn => "newColumn",
            Self::NewColumnWithSpan => "newColumnWithSpan",
        }
    }
}

impl fmt::Display for CommandOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Payload recorded after a successful edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEvent {
    pub command: &'static str,
    pub option: CommandOption,
}

impl CommandEvent {
    pub fn new(command: &'static str, option: CommandOption) -> Self {
        Self { command, option }
    }
}

/// How an error is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Error,
    Status,
    Info,
    Silent,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No active editor. Open a document first.")]
    NoActiveEditor,

    #[error("Invalid TOC entry position. Align the cursor with the previous entry.")]
    InvalidPosition,

    #[error("No previous entry and not at the top of the toc.")]
    NoAnchorContext,

    #[error("Cannot place a TOC entry here: the line above is not a name, items or href line.")]
    UnrecognizedContext,

    #[error("No top-level heading found in {0}.")]
    NoHeadingFound(String),

    #[error("selection cancelled")]
    SelectionCancelled,

    #[error("The active document is not a Markdown file.")]
    NotMarkdown,

    #[error("No docs root is available to search for Markdown files.")]
    NoWorkspace,

    #[error("No Markdown files found under {0}.")]
    NoMarkdownFiles(String),

    #[error("Cannot insert {choice} here: {reason}.")]
    InvalidLayoutPosition { choice: &'static str, reason: &'static str },

    #[error(transparent)]
    Host(#[from] HostError),
}

impl CommandError {
    pub fn surface(&self) -> Surface {
        match self {
            Self::SelectionCancelled => Surface::Silent,
            Self::NoActiveEditor => Surface::Info,
            Self::NoAnchorContext | Self::NoMarkdownFiles(_) => Surface::Status,
            Self::InvalidPosition
            | Self::UnrecognizedContext
            | Self::NoHeadingFound(_)
            | Self::NotMarkdown
            | Self::NoWorkspace
            | Self::InvalidLayoutPosition { .. }
            | Self::Host(_) => Surface::Error,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::SelectionCancelled)
    }

    /// Show this error through the host.
    pub fn report<H: EditorHost + ?Sized>(&self, host: &mut H) {
        let message = self.to_string();
        match self.surface() {
            Surface::Error => host.report_error(&message),
            Surface::Status => host.report_status(&message),
            Surface::Info => host.report_info(&message),
            Surface::Silent => {}
        }
    }
}

fn surfaced<H: EditorHost + ?Sized>(
    host: &mut H,
    result: Result<CommandEvent, CommandError>,
) -> Result<CommandEvent, CommandError> {
    if let Err(ref e) = result {
        tracing::debug!(error = %e, surface = ?e.surface(), "command aborted");
        e.report(host);
    }
    result
}

fn finish<H: EditorHost + ?Sized>(
    host: &mut H,
    command: &'static str,
    option: CommandOption,
) -> CommandEvent {
    let event = CommandEvent::new(command, option);
    host.record_event(&event);
    tracing::info!(command, option = option.tag(), "command completed");
    event
}
