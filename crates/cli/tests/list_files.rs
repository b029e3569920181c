mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn lists_markdown_files_as_table() {
    let tmp = tempdir().unwrap();
    let docs = common::docs_tree(tmp.path());
    common::write(&docs.join("toc.yml"), "- name: x\n");
    let cfg = common::write_config(tmp.path(), &docs, "");

    common::docpen(&cfg)
        .arg("list-files")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup.md"))
        .stdout(predicate::str::contains("overview.md"))
        .stdout(predicate::str::contains("-- 3 files --"))
        .stdout(predicate::str::contains("toc.yml").not());
}

#[test]
fn lists_markdown_files_as_json() {
    let tmp = tempdir().unwrap();
    let docs = common::docs_tree(tmp.path());
    let cfg = common::write_config(tmp.path(), &docs, "");

    let output = common::docpen(&cfg).args(["list-files", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> =
        parsed.as_array().unwrap().iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["setup.md", "overview.md", "scratch.md"]);
}

#[test]
fn empty_docs_root() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    std::fs::create_dir_all(&docs).unwrap();
    let cfg = common::write_config(tmp.path(), &docs, "");

    common::docpen(&cfg)
        .arg("list-files")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no markdown files found)"));
}
