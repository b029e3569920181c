//! In-memory editor host with scripted prompt answers.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use docpen_core::commands::CommandEvent;
use docpen_core::document::{CursorPosition, LineSample, TextDocument};
use docpen_core::host::{ChoiceItem, EditorHost, HostError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Error(String),
    Status(String),
    Info(String),
}

#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub doc: Option<TextDocument>,
    pub cursor: CursorPosition,
    pub path: Option<PathBuf>,
    pub root: Option<PathBuf>,
    /// Labels to pick, in order; `None` dismisses the list.
    pub picks: VecDeque<Option<String>>,
    /// Free-text answers, in order; `None` dismisses the box.
    pub answers: VecDeque<Option<String>>,
    pub offered: Vec<Vec<ChoiceItem>>,
    pub prefilled: Vec<String>,
    pub inserted: Vec<(String, String)>,
    pub messages: Vec<Message>,
    pub events: Vec<CommandEvent>,
}

impl ScriptedHost {
    pub fn editing(content: &str, line: usize, column: usize) -> Self {
        Self {
            doc: Some(TextDocument::parse(content)),
            cursor: CursorPosition::new(line, column),
            ..Self::default()
        }
    }

    pub fn at(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn rooted(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn pick(mut self, label: Option<&str>) -> Self {
        self.picks.push_back(label.map(str::to_string));
        self
    }

    pub fn answer(mut self, text: Option<&str>) -> Self {
        self.answers.push_back(text.map(str::to_string));
        self
    }

    pub fn text(&self) -> String {
        self.doc.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

impl EditorHost for ScriptedHost {
    fn cursor(&self) -> Option<CursorPosition> {
        self.doc.as_ref().map(|_| self.cursor)
    }

    fn line(&self, n: usize) -> Option<LineSample> {
        self.doc.as_ref()?.line(n)
    }

    fn document_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }

    fn present_choice(&mut self, _prompt: &str, items: &[ChoiceItem]) -> Option<usize> {
        self.offered.push(items.to_vec());
        let label = self.picks.pop_front().flatten()?;
        items.iter().position(|i| i.label == label)
    }

    fn present_free_text(&mut self, _prompt: &str, initial: &str) -> Option<String> {
        self.prefilled.push(initial.to_string());
        self.answers.pop_front().flatten()
    }

    fn insert_text_at_cursor(&mut self, label: &str, text: &str) -> Result<(), HostError> {
        if let Some(doc) = self.doc.as_mut() {
            doc.insert(self.cursor, text)?;
        }
        self.inserted.push((label.to_string(), text.to_string()));
        Ok(())
    }

    fn report_error(&mut self, message: &str) {
        self.messages.push(Message::Error(message.to_string()));
    }

    fn report_status(&mut self, message: &str) {
        self.messages.push(Message::Status(message.to_string()));
    }

    fn report_info(&mut self, message: &str) {
        self.messages.push(Message::Info(message.to_string()));
    }

    fn record_event(&mut self, event: &CommandEvent) {
        self.events.push(*event);
    }
}
