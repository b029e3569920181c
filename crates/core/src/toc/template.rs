//! Text blocks for new TOC entries.
//!
//! Templates never look at the document. Callers are expected to have run
//! [`classify`](super::classify) and only render after a `Proceed`.

/// Extra indent applied to attribute lines when the caret is not at column 0.
pub const ATTRIBUTE_INDENT: &str = "  ";

const DISPLAYNAME_PLACEHOLDER: &str = "displayname: #optional string for searching TOC";
const UID_PLACEHOLDER: &str = "uid: #optional string";
const EXPANDED_PLACEHOLDER: &str = "expanded: #true or false, false is default";

/// Which rendering of an entry to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentLevel {
    /// Caret at column 0.
    #[default]
    Flush,
    /// Caret somewhere to the right of column 0.
    Indented,
}

impl IndentLevel {
    pub fn from_column(column: usize) -> Self {
        if column == 0 { Self::Flush } else { Self::Indented }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Flush => "",
            Self::Indented => ATTRIBUTE_INDENT,
        }
    }
}

/// Everything needed to render a leaf entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRequest {
    pub display_name: String,
    pub href: String,
    pub with_options: bool,
    pub indent_level: IndentLevel,
}

impl EntryRequest {
    pub fn new(display_name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            href: href.into(),
            with_options: false,
            indent_level: IndentLevel::Flush,
        }
    }

    pub fn with_options(mut self, value: bool) -> Self {
        self.with_options = value;
        self
    }

    pub fn indent_level(mut self, level: IndentLevel) -> Self {
        self.indent_level = level;
        self
    }
}

/// Render a leaf entry: two lines, or five with the optional fields.
pub fn render(req: &EntryRequest) -> String {
    let pad = req.indent_level.prefix();
    let href = format!("href: {}", req.href);

    let attributes: Vec<&str> = if req.with_options {
        vec![DISPLAYNAME_PLACEHOLDER, href.as_str(), UID_PLACEHOLDER, EXPANDED_PLACEHOLDER]
    } else {
        vec![href.as_str()]
    };

    let mut out = format!("- name: {}", req.display_name);
    for attribute in attributes {
        out.push('\n');
        out.push_str(pad);
        out.push_str(attribute);
    }
    out
}

/// Render the skeleton of an expandable parent node with one child.
pub fn render_parent_node(level: IndentLevel) -> String {
    let pad = level.prefix();
    let child = ATTRIBUTE_INDENT;
    [
        "- name:".to_string(),
        format!("{pad}{child}items:"),
        format!("{pad}{child}- name:"),
        format!("{pad}{child}{child}href:"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview() -> EntryRequest {
        EntryRequest::new("Overview", "overview.md")
    }

    #[test]
    fn flush_plain_entry() {
        assert_eq!(render(&overview()), "- name: Overview\nhref: overview.md");
    }

    #[test]
    fn indented_plain_entry() {
        let req = overview().indent_level(IndentLevel::Indented);
        assert_eq!(render(&req), "- name: Overview\n  href: overview.md");
    }

    #[test]
    fn options_entry_has_five_lines() {
        let flush = render(&overview().with_options(true));
        let indented =
            render(&overview().with_options(true).indent_level(IndentLevel::Indented));

        assert_eq!(flush.lines().count(), 5);
        assert_eq!(indented.lines().count(), 5);
        assert!(flush.lines().skip(1).all(|l| !l.starts_with(' ')));
        assert!(indented.lines().skip(1).all(|l| l.starts_with("  ")));
    }

    #[test]
    fn variants_differ_only_by_attribute_prefix() {
        for with_options in [false, true] {
            let flush = render(&overview().with_options(with_options));
            let indented = render(
                &overview().with_options(with_options).indent_level(IndentLevel::Indented),
            );

            let flush_lines: Vec<&str> = flush.lines().collect();
            let indented_lines: Vec<&str> = indented.lines().collect();
            assert_eq!(flush_lines.len(), indented_lines.len());
            assert_eq!(flush_lines[0], indented_lines[0]);
            for (f, i) in flush_lines.iter().zip(&indented_lines).skip(1) {
                assert_eq!(format!("{ATTRIBUTE_INDENT}{f}"), *i);
            }
        }
    }

    #[test]
    fn render_is_deterministic() {
        let req = overview().with_options(true);
        assert_eq!(render(&req), render(&req.clone()));
    }

    #[test]
    fn parent_node_has_four_lines() {
        assert_eq!(render_parent_node(IndentLevel::Flush).lines().count(), 4);
        assert_eq!(render_parent_node(IndentLevel::Indented).lines().count(), 4);
    }

    #[test]
    fn indent_level_from_column() {
        assert_eq!(IndentLevel::from_column(0), IndentLevel::Flush);
        assert_eq!(IndentLevel::from_column(2), IndentLevel::Indented);
    }
}
