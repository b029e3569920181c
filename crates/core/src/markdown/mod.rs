pub mod discovery;
pub mod headings;

pub use discovery::{DiscoveryError, MarkdownFile, discover_markdown_files};
pub use headings::{HeadingInfo, find_headings, first_heading};
