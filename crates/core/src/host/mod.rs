//! Capabilities the commands need from the editor they run in.
//!
//! Prompts are synchronous calls that return `None` when the user dismisses
//! them. Dismissal is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::commands::CommandEvent;
use crate::document::{CursorPosition, DocumentError, LineSample};
use crate::markdown::{DiscoveryError, MarkdownFile, discover_markdown_files};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    Write(String, #[source] std::io::Error),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// One row of a pick-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub label: String,
    pub description: Option<String>,
}

impl ChoiceItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&MarkdownFile> for ChoiceItem {
    fn from(file: &MarkdownFile) -> Self {
        ChoiceItem::new(&file.name).with_description(file.dir.display().to_string())
    }
}

pub trait EditorHost {
    /// Caret of the active document; `None` when no document is open.
    fn cursor(&self) -> Option<CursorPosition>;

    /// Snapshot of line `n` of the active document.
    fn line(&self, n: usize) -> Option<LineSample>;

    /// Path of the active document, when it has one.
    fn document_path(&self) -> Option<&Path>;

    /// Directory searched for link targets.
    fn workspace_root(&self) -> Option<PathBuf>;

    /// Show a single-select list; returns the index of the picked item.
    fn present_choice(&mut self, prompt: &str, items: &[ChoiceItem]) -> Option<usize>;

    /// Ask for free text, pre-filled with `initial`.
    fn present_free_text(&mut self, prompt: &str, initial: &str) -> Option<String>;

    /// Insert `text` at the caret. `label` names the edit for undo history.
    fn insert_text_at_cursor(&mut self, label: &str, text: &str) -> Result<(), HostError>;

    fn report_error(&mut self, message: &str);
    fn report_status(&mut self, message: &str);
    fn report_info(&mut self, message: &str);

    fn record_event(&mut self, event: &CommandEvent);

    fn list_markdown_files(&self, root: &Path) -> Result<Vec<MarkdownFile>, HostError> {
        Ok(discover_markdown_files(root, &[])?)
    }

    fn read_file_text(&self, path: &Path) -> Result<String, HostError> {
        fs::read_to_string(path).map_err(|e| HostError::Read(path.display().to_string(), e))
    }
}
