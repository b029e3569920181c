mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn inserts_two_column_row() {
    let tmp = tempdir().unwrap();
    let docs = common::docs_tree(tmp.path());
    let cfg = common::write_config(tmp.path(), &docs, "");
    let page = docs.join("overview.md");

    common::docpen(&cfg)
        .args(["layout", "--batch", "--kind", "two-column", "--line", "1"])
        .arg("--file")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted two-column structure."));

    assert_eq!(
        fs::read_to_string(&page).unwrap(),
        "# Overview\n:::row:::\n   :::column:::\n\n   :::column-end:::\n   :::column:::\n\n   :::column-end:::\n:::row-end:::\nWelcome.\n"
    );
}

#[test]
fn column_outside_row_fails() {
    let tmp = tempdir().unwrap();
    let docs = common::docs_tree(tmp.path());
    let cfg = common::write_config(tmp.path(), &docs, "");
    let page = docs.join("overview.md");

    common::docpen(&cfg)
        .args(["layout", "--batch", "--kind", "column", "--line", "1"])
        .arg("--file")
        .arg(&page)
        .assert()
        .failure()
        .stderr(predicate::str::contains("columns must be inside a row"));

    assert_eq!(fs::read_to_string(&page).unwrap(), "# Overview\n\nWelcome.\n");
}

#[test]
fn non_markdown_file_is_rejected() {
    let tmp = tempdir().unwrap();
    let docs = common::docs_tree(tmp.path());
    let cfg = common::write_config(tmp.path(), &docs, "");

    common::docpen(&cfg)
        .args(["layout", "--batch", "--kind", "column", "--line", "0"])
        .arg("--file")
        .arg(docs.join("toc.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a Markdown file"));
}
