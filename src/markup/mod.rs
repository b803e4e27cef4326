//! Inline markup used by canned responses.
//!
//! Responses carry a tiny subset of HTML (`<b>`, `<a href=..>`, `<br>`).
//! They are parsed once into a flat [`Fragment`] of text runs, elements and
//! line breaks, which the typewriter reveals and the output pane renders.

pub mod parser;

use once_cell::sync::Lazy;
use regex::Regex;

pub use parser::parse;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_link(&self) -> bool {
        self.tag == "a"
    }

    /// Flattened text of all descendants; nested line breaks become `\n`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
            Node::LineBreak => out.push('\n'),
        }
    }
}

/// Parsed sequence of reveal units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Text without markup interpretation; `\n` still becomes a line break.
    pub fn plain(text: &str) -> Self {
        let mut nodes = Vec::new();
        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                nodes.push(Node::LineBreak);
            }
            if !line.is_empty() {
                nodes.push(Node::Text(line.to_string()));
            }
        }
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.nodes, &mut out);
        out
    }
}

/// Removes every `<...>` tag, leaving the visible text.
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_keeps_visible_text() {
        let html = "- <a href='https://www.lua.org/' target='_blank'><b>Lua</b></a>\n\n";
        assert_eq!(strip_tags(html), "- Lua\n\n");
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn plain_fragment_splits_lines() {
        let fragment = Fragment::plain("\nC:\\Users\\Client > help\n");
        assert_eq!(
            fragment.nodes(),
            &[
                Node::LineBreak,
                Node::Text("C:\\Users\\Client > help".into()),
                Node::LineBreak,
            ]
        );
        assert_eq!(fragment.text_content(), "\nC:\\Users\\Client > help\n");
    }

    #[test]
    fn element_text_content_flattens_children() {
        let fragment = parse("<a href='x'><b>Lua</b> rocks</a>");
        match &fragment.nodes()[0] {
            Node::Element(link) => {
                assert!(link.is_link());
                assert_eq!(link.attr("HREF"), Some("x"));
                assert_eq!(link.text_content(), "Lua rocks");
            }
            other => panic!("expected element, got {:?}", other),
        }
    }
}
