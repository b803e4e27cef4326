// src/output/display.rs
use crate::core::config::Theme;
use crate::markup::{Fragment, Node};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Everything printed to the output pane so far, as markup nodes.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    nodes: Vec<Node>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends literal text; markup characters are not interpreted.
    pub fn push_text(&mut self, text: &str) {
        self.nodes.extend(Fragment::plain(text).into_nodes());
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn text_content(&self) -> String {
        Fragment::new(self.nodes.clone()).text_content()
    }
}

struct LineBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    current: String,
    current_style: Style,
    used: usize,
}

impl LineBuilder {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
            spans: Vec::new(),
            current: String::new(),
            current_style: Style::default(),
            used: 0,
        }
    }

    fn flush_span(&mut self) {
        if !self.current.is_empty() {
            let text = std::mem::take(&mut self.current);
            self.spans.push(Span::styled(text, self.current_style));
        }
    }

    fn break_line(&mut self) {
        self.flush_span();
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        self.used = 0;
    }

    fn push_text(&mut self, text: &str, style: Style) {
        if style != self.current_style {
            self.flush_span();
            self.current_style = style;
        }
        for grapheme in text.graphemes(true) {
            if grapheme == "\n" || grapheme == "\r\n" {
                self.break_line();
                self.current_style = style;
                continue;
            }
            let w = grapheme.width();
            if self.used + w > self.width && self.used > 0 {
                self.break_line();
                self.current_style = style;
            }
            self.current.push_str(grapheme);
            self.used += w;
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.break_line();
        self.lines
    }
}

fn element_style(base: Style, tag: &str, theme: &Theme) -> Style {
    match tag {
        "b" | "strong" => base.add_modifier(Modifier::BOLD),
        "i" | "em" => base.add_modifier(Modifier::ITALIC),
        "u" => base.add_modifier(Modifier::UNDERLINED),
        "a" => base
            .fg(theme.link.into())
            .add_modifier(Modifier::UNDERLINED),
        _ => base,
    }
}

fn walk(nodes: &[Node], style: Style, theme: &Theme, out: &mut LineBuilder) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_text(text, style),
            Node::LineBreak => out.break_line(),
            Node::Element(element) => {
                let inner = element_style(style, &element.tag, theme);
                walk(&element.children, inner, theme, out);
            }
        }
    }
}

/// Lays nodes out into display lines no wider than `width` cells.
///
/// Bold elements render bold, links underlined in the link colour. A line
/// break always starts a new line, so a trailing break leaves an empty one.
pub fn render_nodes<'a, I>(chunks: I, width: usize, theme: &Theme) -> Vec<Line<'static>>
where
    I: IntoIterator<Item = &'a [Node]>,
{
    let base = Style::default().fg(theme.output_text.into());
    let mut builder = LineBuilder::new(width);
    for nodes in chunks {
        walk(nodes, base, theme, &mut builder);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(markup: &str, width: usize) -> Vec<Line<'static>> {
        let fragment = parse(markup);
        render_nodes([fragment.nodes()], width, &Theme::default())
    }

    #[test]
    fn breaks_on_line_breaks() {
        let lines = render("one\ntwo\n", 80);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text, vec!["one", "two", ""]);
    }

    #[test]
    fn wraps_by_display_width() {
        let lines = render("abcdefgh", 3);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text, vec!["abc", "def", "gh"]);
    }

    #[test]
    fn styles_bold_and_links() {
        let theme = Theme::default();
        let lines = render("x <b>bold</b> <a href='u'>link</a>", 80);
        let spans = &lines[0].spans;
        let bold = spans.iter().find(|s| s.content == "bold").expect("bold span");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        let link = spans.iter().find(|s| s.content == "link").expect("link span");
        assert!(link.style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(link.style.fg, Some(theme.link.into()));
    }

    #[test]
    fn buffer_keeps_literal_text() {
        let mut buffer = OutputBuffer::new();
        buffer.push_text("\nC:\\Users\\Client > <b>\n");
        assert_eq!(buffer.text_content(), "\nC:\\Users\\Client > <b>\n");
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn chunks_render_as_one_stream() {
        let head = parse("ab");
        let tail = parse("cd\nef");
        let lines = render_nodes([head.nodes(), tail.nodes()], 80, &Theme::default());
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text, vec!["abcd", "ef"]);
    }
}
