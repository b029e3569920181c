//! Dynamic shell completions.
//!
//! Enable with e.g. `source <(COMPLETE=bash docpen)`.

use clap_complete::engine::CompletionCandidate;
use docpen_core::config::loader::ConfigLoader;
use docpen_core::markdown::discover_markdown_files;
use std::ffi::OsStr;

/// Complete `--target` with Markdown file names under the docs root.
pub fn complete_targets(current: &OsStr) -> Vec<CompletionCandidate> {
    let current_str = current.to_str().unwrap_or("");

    let Ok(cfg) = ConfigLoader::load(None, None) else {
        return Vec::new();
    };
    let Ok(files) = discover_markdown_files(&cfg.docs_root, &cfg.excluded_folders) else {
        return Vec::new();
    };

    files
        .into_iter()
        .filter(|f| f.name.starts_with(current_str))
        .map(|f| {
            CompletionCandidate::new(f.name).help(Some(f.dir.display().to_string().into()))
        })
        .collect()
}
