// src/markup/parser.rs
use super::{Element, Fragment, Node};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "wbr"];

/// Parses response markup into reveal units.
///
/// `\n` and `<br>` both become [`Node::LineBreak`]. A closing tag for an
/// outer element also closes everything opened inside it. Closing tags with
/// no open element are dropped and unclosed elements end at the end of
/// input. A `<` that does not start a tag is kept as text.
pub fn parse(input: &str) -> Fragment {
    let mut parser = Parser {
        src: input,
        pos: 0,
        open: Vec::new(),
        unwinding: None,
    };
    Fragment::new(parser.parse_nodes())
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    /// Names of the elements currently open, innermost last.
    open: Vec<String>,
    /// Ancestor being closed by a mismatched closing tag.
    unwinding: Option<String>,
}

struct OpenTag {
    name: String,
    attrs: Vec<(String, String)>,
    self_closing: bool,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn parse_nodes(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.rest().chars().next() {
            if c == '\n' {
                flush_text(&mut text, &mut nodes);
                nodes.push(Node::LineBreak);
                self.pos += 1;
                continue;
            }

            if c == '<' {
                if let Some(name) = self.try_close_tag() {
                    if self.open.last() == Some(&name) {
                        flush_text(&mut text, &mut nodes);
                        return nodes;
                    }
                    if self.open.contains(&name) {
                        flush_text(&mut text, &mut nodes);
                        self.unwinding = Some(name);
                        return nodes;
                    }
                    continue;
                }

                if let Some(tag) = self.try_open_tag() {
                    flush_text(&mut text, &mut nodes);
                    if tag.name == "br" {
                        nodes.push(Node::LineBreak);
                    } else if tag.self_closing || VOID_TAGS.contains(&tag.name.as_str()) {
                        nodes.push(Node::Element(Element {
                            tag: tag.name,
                            attrs: tag.attrs,
                            children: Vec::new(),
                        }));
                    } else {
                        self.open.push(tag.name.clone());
                        let children = self.parse_nodes();
                        self.open.pop();
                        nodes.push(Node::Element(Element {
                            tag: tag.name,
                            attrs: tag.attrs,
                            children,
                        }));

                        if self.unwinding.is_some() {
                            if self.open.last() == self.unwinding.as_ref() {
                                self.unwinding = None;
                            }
                            return nodes;
                        }
                    }
                    continue;
                }
            }

            if c == '&' {
                if let Some((decoded, len)) = decode_entity(self.rest()) {
                    text.push(decoded);
                    self.pos += len;
                    continue;
                }
            }

            text.push(c);
            self.pos += c.len_utf8();
        }

        flush_text(&mut text, &mut nodes);
        nodes
    }

    /// Consumes `</name>` and returns the lowercase name.
    fn try_close_tag(&mut self) -> Option<String> {
        let rest = self.rest().strip_prefix("</")?;
        let end = rest.find('>')?;
        let name = rest[..end].trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        let name = name.to_ascii_lowercase();
        self.pos += 2 + end + 1;
        Some(name)
    }

    /// Consumes `<name attr='v' ...>` when the `<` starts a well-formed tag.
    fn try_open_tag(&mut self) -> Option<OpenTag> {
        let rest = self.rest().strip_prefix('<')?;
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }

        let end = find_tag_end(rest)?;
        let mut body = &rest[..end];
        let self_closing = body.trim_end().ends_with('/');
        if self_closing {
            body = body.trim_end().trim_end_matches('/');
        }

        let name_len = body
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());
        let name = body[..name_len].to_ascii_lowercase();
        let attrs = parse_attrs(&body[name_len..]);

        self.pos += 1 + end + 1;
        Some(OpenTag {
            name,
            attrs,
            self_closing,
        })
    }
}

fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}

/// Index of the `>` closing a tag body, skipping quoted attribute values.
fn find_tag_end(body: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '>') => return Some(idx),
            (None, '<' | '\n') => return None,
            _ => {}
        }
    }
    None
}

fn parse_attrs(input: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let name_len = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let name = rest[..name_len].to_ascii_lowercase();
        rest = rest[name_len..].trim_start();

        let value = if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            match after_eq.chars().next() {
                Some(q @ ('\'' | '"')) => {
                    let inner = &after_eq[1..];
                    let close = inner.find(q).unwrap_or(inner.len());
                    rest = inner.get(close + 1..).unwrap_or("");
                    inner[..close].to_string()
                }
                _ => {
                    let len = after_eq
                        .find(char::is_whitespace)
                        .unwrap_or(after_eq.len());
                    rest = &after_eq[len..];
                    after_eq[..len].to_string()
                }
            }
        } else {
            String::new()
        };

        if !name.is_empty() {
            attrs.push((name, value));
        }
        rest = rest.trim_start();
    }

    attrs
}

fn decode_entity(input: &str) -> Option<(char, usize)> {
    const ENTITIES: &[(&str, char)] = &[
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&nbsp;", ' '),
    ];
    ENTITIES
        .iter()
        .find(|(entity, _)| input.starts_with(entity))
        .map(|(entity, c)| (*c, entity.len()))
}
