//! Commands that edit a document at a caret position.
//!
//! The host writes the file as part of each insertion, so a command that
//! reports success has already saved.

use docpen_core::commands::{
    insert_expandable_parent_node, insert_rows_and_columns, insert_toc_entry,
    insert_toc_entry_with_options, CommandError, CommandEvent,
};
use docpen_core::document::CursorPosition;
use docpen_core::layout::LayoutChoice;
use std::path::Path;

use crate::host::TerminalHost;
use crate::prompt::PromptOptions;
use crate::{CaretArgs, LayoutArgs, TocEntryArgs};

pub fn toc_entry(config: Option<&Path>, profile: Option<&str>, args: &TocEntryArgs) {
    let prompts = PromptOptions {
        batch_mode: args.caret.batch,
        preset_choice: args.target.clone(),
        preset_text: args.name.clone(),
    };
    let flow: EditFlow = if args.with_options {
        insert_toc_entry_with_options::<TerminalHost>
    } else {
        insert_toc_entry::<TerminalHost>
    };
    run(config, profile, "toc-entry", &args.caret, prompts, flow);
}

pub fn toc_parent(config: Option<&Path>, profile: Option<&str>, args: &CaretArgs) {
    let prompts = PromptOptions { batch_mode: args.batch, ..Default::default() };
    run(config, profile, "toc-parent", args, prompts, insert_expandable_parent_node);
}

pub fn layout(config: Option<&Path>, profile: Option<&str>, args: &LayoutArgs) {
    let prompts = PromptOptions {
        batch_mode: args.caret.batch,
        preset_choice: args.kind.map(|k| LayoutChoice::from(k).label().to_string()),
        ..Default::default()
    };
    run(config, profile, "layout", &args.caret, prompts, insert_rows_and_columns);
}

type EditFlow = fn(&mut TerminalHost) -> Result<CommandEvent, CommandError>;

fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    cmd_name: &str,
    caret: &CaretArgs,
    prompts: PromptOptions,
    flow: EditFlow,
) {
    let rc = super::load_config_or_exit(config, profile, cmd_name);
    crate::logging::init(&rc.logging);

    let cursor = CursorPosition::new(caret.line, caret.column);
    let mut host = match TerminalHost::open(&caret.file, cursor, &rc, prompts) {
        Ok(h) => h,
        Err(e) => fail(cmd_name, &e),
    };

    tracing::debug!(cmd = cmd_name, file = %caret.file.display(), %cursor, "running edit command");

    match flow(&mut host) {
        Ok(event) => tracing::debug!(option = event.option.tag(), "edit written"),
        Err(e) if e.is_cancelled() => {
            if let Some(prompt_err) = host.take_prompt_failure() {
                fail(cmd_name, &prompt_err);
            }
        }
        // Already reported through the host.
        Err(_) => exit(1),
    }

    crate::logging::flush();
}

fn fail(cmd_name: &str, e: &dyn std::fmt::Display) -> ! {
    eprintln!("FAIL docpen {cmd_name}");
    eprintln!("{e}");
    exit(1)
}

fn exit(code: i32) -> ! {
    crate::logging::flush();
    std::process::exit(code)
}
