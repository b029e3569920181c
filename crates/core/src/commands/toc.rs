use tracing::{debug, info};

use super::{CommandError, CommandEvent, CommandOption, TOC_EVENT, finish, surfaced};
use crate::document::CursorPosition;
use crate::host::{ChoiceItem, EditorHost};
use crate::markdown::first_heading;
use crate::toc::{ClassificationResult, EntryRequest, IndentLevel, classify, render, render_parent_node};

pub const INSERTED_ENTRY: &str = "Inserted TOC entry.";
pub const INSERTED_PARENT_NODE: &str = "Inserted expandable parent node.";
pub const NO_NAME_ENTERED: &str = "No entry name entered, using the document heading.";

const PICK_FILE_PROMPT: &str = "Select the file to link";
const ENTRY_NAME_PROMPT: &str = "Entry name";

/// Insert a `name`/`href` entry linking a picked Markdown file.
pub fn insert_toc_entry<H: EditorHost + ?Sized>(
    host: &mut H,
) -> Result<CommandEvent, CommandError> {
    let result = entry_flow(host, CommandOption::TocEntry);
    surfaced(host, result)
}

/// Like [`insert_toc_entry`], with placeholders for the optional fields.
pub fn insert_toc_entry_with_options<H: EditorHost + ?Sized>(
    host: &mut H,
) -> Result<CommandEvent, CommandError> {
    let result = entry_flow(host, CommandOption::TocEntryWithOptions);
    surfaced(host, result)
}

/// Insert the skeleton of a parent node with an `items:` list.
pub fn insert_expandable_parent_node<H: EditorHost + ?Sized>(
    host: &mut H,
) -> Result<CommandEvent, CommandError> {
    let result = parent_node_flow(host);
    surfaced(host, result)
}

fn entry_flow<H: EditorHost + ?Sized>(
    host: &mut H,
    option: CommandOption,
) -> Result<CommandEvent, CommandError> {
    let cursor = host.cursor().ok_or(CommandError::NoActiveEditor)?;
    check_position(host, cursor)?;

    let root = host.workspace_root().ok_or(CommandError::NoWorkspace)?;
    let files = host.list_markdown_files(&root)?;
    if files.is_empty() {
        return Err(CommandError::NoMarkdownFiles(root.display().to_string()));
    }

    let items: Vec<ChoiceItem> = files.iter().map(ChoiceItem::from).collect();
    let file = host
        .present_choice(PICK_FILE_PROMPT, &items)
        .and_then(|i| files.get(i))
        .ok_or(CommandError::SelectionCancelled)?;

    let path = file.path();
    let content = host.read_file_text(&path)?;
    let heading = first_heading(&content)
        .ok_or_else(|| CommandError::NoHeadingFound(path.display().to_string()))?;

    let display_name = match host.present_free_text(ENTRY_NAME_PROMPT, &heading) {
        Some(name) if !name.is_empty() => name,
        _ => {
            host.report_info(NO_NAME_ENTERED);
            heading
        }
    };

    let request = EntryRequest::new(display_name, file.name.clone())
        .with_options(option == CommandOption::TocEntryWithOptions)
        .indent_level(IndentLevel::from_column(cursor.column));
    let text = render(&request);

    let label = match option {
        CommandOption::TocEntryWithOptions => "insertTocEntryWithOptions",
        _ => "insertTocEntry",
    };
    host.insert_text_at_cursor(label, &text)?;
    info!(href = %request.href, name = %request.display_name, %cursor, "inserted toc entry");
    host.report_status(INSERTED_ENTRY);

    Ok(finish(host, TOC_EVENT, option))
}

fn check_position<H: EditorHost + ?Sized>(
    host: &H,
    cursor: CursorPosition,
) -> Result<(), CommandError> {
    let above = cursor.line.checked_sub(1).and_then(|n| host.line(n));
    let two_above = cursor.line.checked_sub(2).and_then(|n| host.line(n));

    match classify(cursor, above.as_ref(), two_above.as_ref()) {
        ClassificationResult::Proceed => Ok(()),
        ClassificationResult::RejectMisaligned => Err(CommandError::InvalidPosition),
        ClassificationResult::RejectBlankContext => Err(CommandError::NoAnchorContext),
        ClassificationResult::RejectUnrecognizedContext => {
            Err(CommandError::UnrecognizedContext)
        }
    }
}

fn parent_node_flow<H: EditorHost + ?Sized>(
    host: &mut H,
) -> Result<CommandEvent, CommandError> {
    let cursor = host.cursor().ok_or(CommandError::NoActiveEditor)?;
    let text = render_parent_node(IndentLevel::from_column(cursor.column));
    debug!(%cursor, "rendering parent node");

    host.insert_text_at_cursor("insertExpandableParentNode", &text)?;
    host.report_status(INSERTED_PARENT_NODE);

    Ok(finish(host, TOC_EVENT, CommandOption::ExpandableParentNode))
}
