mod support;

use docpen_core::commands::{
    CommandError, CommandEvent, CommandOption, LAYOUT_EVENT, insert_rows_and_columns,
};
use support::{Message, ScriptedHost};

fn page(content: &str, line: usize, column: usize) -> ScriptedHost {
    ScriptedHost::editing(content, line, column).at("docs/page.md")
}

#[test]
fn offers_three_layouts_in_order() {
    let mut h = page("", 0, 0).pick(None);

    let err = insert_rows_and_columns(&mut h).unwrap_err();

    assert!(err.is_cancelled());
    let labels: Vec<&str> = h.offered[0].iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Two-column structure", "New column", "New column with span"]);
    assert!(h.messages.is_empty());
}

#[test]
fn two_column_row_outside_any_row() {
    let mut h = page("Intro\n\n", 1, 0).pick(Some("Two-column structure"));

    let event = insert_rows_and_columns(&mut h).unwrap();

    assert_eq!(
        h.text(),
        "Intro\n:::row:::\n   :::column:::\n\n   :::column-end:::\n   :::column:::\n\n   :::column-end:::\n:::row-end:::\n"
    );
    assert_eq!(event, CommandEvent::new(LAYOUT_EVENT, CommandOption::TwoColumnRow));
    assert_eq!(h.events, vec![event]);
}

#[test]
fn nested_row_is_rejected() {
    let content = ":::row:::\n   :::column:::\n   :::column-end:::\n\n:::row-end:::\n";
    let mut h = page(content, 3, 0).pick(Some("Two-column structure"));

    let err = insert_rows_and_columns(&mut h).unwrap_err();

    assert!(matches!(err, CommandError::InvalidLayoutPosition { .. }));
    assert!(matches!(h.messages.as_slice(), [Message::Error(_)]));
    assert_eq!(h.text(), content);
}

#[test]
fn column_added_between_columns() {
    let content = ":::row:::\n   :::column:::\n   A\n   :::column-end:::\n\n:::row-end:::\n";
    let mut h = page(content, 4, 3).pick(Some("New column"));

    let event = insert_rows_and_columns(&mut h).unwrap();

    assert_eq!(
        h.text(),
        ":::row:::\n   :::column:::\n   A\n   :::column-end:::\n   :::column:::\n\n   :::column-end:::\n:::row-end:::\n"
    );
    assert_eq!(event.option, CommandOption::NewColumn);
}

#[test]
fn span_column_inside_open_column_is_rejected() {
    let content = ":::row:::\n   :::column:::\n\n   :::column-end:::\n:::row-end:::\n";
    let mut h = page(content, 2, 3).pick(Some("New column with span"));

    let err = insert_rows_and_columns(&mut h).unwrap_err();
    assert!(matches!(err, CommandError::InvalidLayoutPosition { .. }));
}

#[test]
fn column_outside_row_is_rejected() {
    let mut h = page("# Title\n\n", 1, 0).pick(Some("New column"));

    let err = insert_rows_and_columns(&mut h).unwrap_err();

    match err {
        CommandError::InvalidLayoutPosition { reason, .. } => {
            assert_eq!(reason, "columns must be inside a row");
        }
        other => panic!("expected InvalidLayoutPosition, got {other:?}"),
    }
}

#[test]
fn non_markdown_document_is_rejected() {
    let mut h = ScriptedHost::editing("", 0, 0).at("docs/toc.yml");

    let err = insert_rows_and_columns(&mut h).unwrap_err();

    assert!(matches!(err, CommandError::NotMarkdown));
    assert!(h.offered.is_empty());
    assert!(matches!(h.messages.as_slice(), [Message::Error(_)]));
}
