//! Interactive pick-lists and text boxes.
//!
//! Answers can be supplied up front (`--target`, `--name`, `--kind`), which
//! also makes the commands usable from scripts. Without a terminal and
//! without a preset answer, a pick-list counts as dismissed and a text box
//! keeps its initial value.

use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};
use docpen_core::host::ChoiceItem;
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// Never open an interactive prompt.
    pub batch_mode: bool,
    /// Label to pick from the next pick-list.
    pub preset_choice: Option<String>,
    /// Answer for the next text box.
    pub preset_text: Option<String>,
}

impl PromptOptions {
    fn is_interactive(&self) -> bool {
        !self.batch_mode && io::stdin().is_terminal()
    }
}

#[derive(Debug)]
pub enum PromptError {
    /// A preset answer matched none of the offered items.
    UnknownChoice { wanted: String, offered: Vec<String> },
    /// IO error during prompting.
    Io(io::Error),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::UnknownChoice { wanted, offered } => {
                write!(f, "'{wanted}' is not one of the available choices")?;
                if !offered.is_empty() {
                    write!(f, "\n  Available: {}", offered.join(", "))?;
                }
                Ok(())
            }
            PromptError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Pick one item. `Ok(None)` means the list was dismissed.
pub fn choose(
    prompt: &str,
    items: &[ChoiceItem],
    options: &mut PromptOptions,
) -> Result<Option<usize>, PromptError> {
    if let Some(wanted) = options.preset_choice.take() {
        return match items.iter().position(|i| i.label == wanted) {
            Some(idx) => Ok(Some(idx)),
            None => Err(PromptError::UnknownChoice {
                wanted,
                offered: items.iter().map(|i| i.label.clone()).collect(),
            }),
        };
    }

    if !options.is_interactive() {
        return Ok(None);
    }

    let rows: Vec<String> = items.iter().map(display_row).collect();
    FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&rows)
        .default(0)
        .interact_opt()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Ask for text pre-filled with `initial`. `Ok(None)` means dismissed.
pub fn free_text(
    prompt: &str,
    initial: &str,
    options: &mut PromptOptions,
) -> Result<Option<String>, PromptError> {
    if let Some(text) = options.preset_text.take() {
        return Ok(Some(text));
    }

    if !options.is_interactive() {
        return Ok(Some(initial.to_string()));
    }

    let result = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text();

    match result {
        Ok(text) => Ok(Some(text)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(dialoguer_error_to_prompt_error(e)),
    }
}

fn display_row(item: &ChoiceItem) -> String {
    match &item.description {
        Some(desc) => format!("{}  ({desc})", item.label),
        None => item.label.clone(),
    }
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => PromptError::Io(io_err),
    }
}
