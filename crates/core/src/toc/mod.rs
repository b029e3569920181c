//! YAML table-of-contents entries: placement validation and entry templates.

pub mod classifier;
pub mod template;

pub use classifier::{ClassificationResult, classify};
pub use template::{ATTRIBUTE_INDENT, EntryRequest, IndentLevel, render, render_parent_node};

/// Marker opening a TOC entry.
pub const NAME_MARKER: &str = "- name:";
/// Marker opening a nested list of entries.
pub const ITEMS_MARKER: &str = "items:";
/// Marker carrying an entry's link target.
pub const HREF_MARKER: &str = "href:";
