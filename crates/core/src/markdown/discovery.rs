//! Markdown files offered as link targets for new TOC entries.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("docs root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk docs directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A Markdown file as shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    /// File name, used as the entry href.
    pub name: String,
    /// Directory holding the file.
    pub dir: PathBuf,
}

impl MarkdownFile {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Recursively list `.md` files under `root`, sorted by full path.
///
/// Hidden directories are skipped, as are `excluded` folders (absolute, or
/// relative to `root`).
pub fn discover_markdown_files(
    root: &Path,
    excluded: &[PathBuf],
) -> Result<Vec<MarkdownFile>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::MissingRoot(root.display().to_string()));
    }

    let excluded: Vec<PathBuf> = excluded
        .iter()
        .map(|p| if p.is_absolute() { p.clone() } else { root.join(p) })
        .collect();

    let mut paths = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_skipped(e, &excluded))
    {
        let entry =
            entry.map_err(|e| DiscoveryError::WalkError(root.display().to_string(), e))?;
        if entry.file_type().is_file() && is_markdown_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    let files: Vec<MarkdownFile> = paths
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            let dir = path.parent()?.to_path_buf();
            Some(MarkdownFile { name, dir })
        })
        .collect();

    debug!(root = %root.display(), count = files.len(), "discovered markdown files");
    Ok(files)
}

fn is_skipped(entry: &DirEntry, excluded: &[PathBuf]) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if entry.file_type().is_dir() {
        let hidden = entry.file_name().to_str().is_some_and(|n| n.starts_with('.'));
        return hidden || excluded.iter().any(|ex| entry.path() == ex);
    }
    false
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}
