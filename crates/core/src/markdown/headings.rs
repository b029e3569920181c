//! Heading lookup used to suggest a display name for a linked document.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

/// A heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    pub title: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// All headings in document order.
pub fn find_headings(input: &str) -> Vec<HeadingInfo> {
    let arena = Arena::new();
    let options = parse_options();
    let root = parse_document(&arena, input, &options);

    let mut headings = Vec::new();
    for node in root.descendants() {
        if let NodeValue::Heading(ref heading) = node.data.borrow().value {
            headings.push(HeadingInfo {
                title: collect_text(node).trim().to_string(),
                level: heading.level,
            });
        }
    }
    headings
}

/// Title of the first level-1 heading, if any.
pub fn first_heading(input: &str) -> Option<String> {
    find_headings(input).into_iter().find(|h| h.level == 1).map(|h| h.title)
}

fn parse_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.front_matter_delimiter = Some("---".to_string());
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.parse.smart = false;
    options
}

fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.descendants() {
        match child.data.borrow().value {
            NodeValue::Text(ref t) => text.push_str(t),
            NodeValue::Code(ref c) => text.push_str(&c.literal),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_heading_skips_front_matter() {
        let doc = "---\ntitle: Not this\n---\n\n# Overview\n\nBody\n\n# Second\n";
        assert_eq!(first_heading(doc), Some("Overview".to_string()));
    }

    #[test]
    fn first_heading_ignores_lower_levels() {
        let doc = "## Sub\n\n# Main topic\n";
        assert_eq!(first_heading(doc), Some("Main topic".to_string()));
    }

    #[test]
    fn inline_code_is_kept_in_title() {
        assert_eq!(first_heading("# Using `docpen`\n"), Some("Using docpen".to_string()));
    }

    #[test]
    fn heading_inside_code_block_is_not_a_heading() {
        let doc = "```\n# not a heading\n```\n";
        assert_eq!(first_heading(doc), None);
    }

    #[test]
    fn no_heading() {
        assert_eq!(first_heading("just text\n"), None);
        assert!(find_headings("").is_empty());
    }
}
