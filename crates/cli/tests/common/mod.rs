#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn write(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Docs tree with two headed pages and one page without a heading.
pub fn docs_tree(root: &Path) -> PathBuf {
    let docs = root.join("docs");
    write(&docs.join("overview.md"), "# Overview\n\nWelcome.\n");
    write(&docs.join("guide").join("setup.md"), "# Setup guide\n");
    write(&docs.join("scratch.md"), "no heading\n");
    docs
}

pub fn write_config(root: &Path, docs: &Path, extra: &str) -> PathBuf {
    let cfg_path = root.join("config.toml");
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
docs_root = "{docs}"
{extra}
"#,
        docs = docs.display(),
    );
    fs::write(&cfg_path, toml).unwrap();
    cfg_path
}

pub fn docpen(cfg_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docpen"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(cfg_path);
    cmd
}
