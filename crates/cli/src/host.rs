//! Editor host backed by a file on disk and terminal prompts.

use std::fs;
use std::path::{Path, PathBuf};

use docpen_core::commands::CommandEvent;
use docpen_core::config::ResolvedConfig;
use docpen_core::document::{CursorPosition, LineSample, TextDocument};
use docpen_core::host::{ChoiceItem, EditorHost, HostError};
use docpen_core::markdown::{discover_markdown_files, MarkdownFile};

use crate::prompt::{self, PromptError, PromptOptions};

pub struct TerminalHost {
    path: PathBuf,
    doc: TextDocument,
    cursor: CursorPosition,
    docs_root: PathBuf,
    excluded: Vec<PathBuf>,
    prompts: PromptOptions,
    prompt_failure: Option<PromptError>,
}

impl TerminalHost {
    /// Open `path` with the caret at `cursor`. A missing file starts empty.
    pub fn open(
        path: &Path,
        cursor: CursorPosition,
        cfg: &ResolvedConfig,
        prompts: PromptOptions,
    ) -> Result<Self, HostError> {
        let content = if path.exists() {
            fs::read_to_string(path)
                .map_err(|e| HostError::Read(path.display().to_string(), e))?
        } else {
            String::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            doc: TextDocument::parse(&content),
            cursor,
            docs_root: cfg.docs_root.clone(),
            excluded: cfg.excluded_folders.clone(),
            prompts,
            prompt_failure: None,
        })
    }

    /// A prompt that failed (as opposed to being dismissed), if any.
    pub fn take_prompt_failure(&mut self) -> Option<PromptError> {
        self.prompt_failure.take()
    }

    fn note_failure(&mut self, e: PromptError) {
        tracing::warn!(error = %e, "prompt failed");
        self.prompt_failure = Some(e);
    }
}

impl EditorHost for TerminalHost {
    fn cursor(&self) -> Option<CursorPosition> {
        Some(self.cursor)
    }

    fn line(&self, n: usize) -> Option<LineSample> {
        self.doc.line(n)
    }

    fn document_path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        Some(self.docs_root.clone())
    }

    fn present_choice(&mut self, prompt_text: &str, items: &[ChoiceItem]) -> Option<usize> {
        match prompt::choose(prompt_text, items, &mut self.prompts) {
            Ok(choice) => choice,
            Err(e) => {
                self.note_failure(e);
                None
            }
        }
    }

    fn present_free_text(&mut self, prompt_text: &str, initial: &str) -> Option<String> {
        match prompt::free_text(prompt_text, initial, &mut self.prompts) {
            Ok(text) => text,
            Err(e) => {
                self.note_failure(e);
                None
            }
        }
    }

    /// Insert and write the file in one step; the buffer only changes once
    /// the write has succeeded.
    fn insert_text_at_cursor(&mut self, label: &str, text: &str) -> Result<(), HostError> {
        let mut doc = self.doc.clone();
        let end = doc.insert(self.cursor, text)?;
        fs::write(&self.path, doc.to_string())
            .map_err(|e| HostError::Write(self.path.display().to_string(), e))?;
        tracing::debug!(
            label,
            from = %self.cursor,
            to = %end,
            path = %self.path.display(),
            "inserted text"
        );
        self.doc = doc;
        self.cursor = end;
        Ok(())
    }

    fn report_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn report_status(&mut self, message: &str) {
        println!("{message}");
    }

    fn report_info(&mut self, message: &str) {
        eprintln!("note: {message}");
    }

    fn record_event(&mut self, event: &CommandEvent) {
        tracing::info!(
            target: "docpen::telemetry",
            command = event.command,
            option = event.option.tag(),
            file = %self.path.display(),
            "command event"
        );
    }

    fn list_markdown_files(&self, root: &Path) -> Result<Vec<MarkdownFile>, HostError> {
        Ok(discover_markdown_files(root, &self.excluded)?)
    }
}
