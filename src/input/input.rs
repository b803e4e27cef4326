// src/input/input.rs
use crate::core::config::Theme;
use crate::core::prelude::*;
use crate::input::keyboard::KeyAction;
use crate::ui::cursor::CursorState;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// The single-line command input under the output pane.
#[derive(Debug)]
pub struct InputState {
    content: String,
    cursor: CursorState,
    prompt: String,
    max_length: usize,
    disabled: bool,
}

impl InputState {
    pub fn new(prompt: &str, max_length: usize) -> Self {
        Self {
            content: String::with_capacity(max_length),
            cursor: CursorState::new(),
            prompt: prompt.to_string(),
            max_length,
            disabled: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.prompt, config.input_max_length)
    }

    /// Applies an editing action. Returns `false` for actions that are not
    /// edits or when the input is disabled.
    pub fn apply(&mut self, action: &KeyAction) -> bool {
        if self.disabled {
            return false;
        }
        match action {
            KeyAction::InsertChar(c) => self.insert_char(*c),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Delete => self.delete(),
            KeyAction::MoveLeft => self.cursor.move_left(),
            KeyAction::MoveRight => self.cursor.move_right(),
            KeyAction::MoveToStart => self.cursor.move_to_start(),
            KeyAction::MoveToEnd => self.cursor.move_to_end(),
            KeyAction::ClearLine => self.clear(),
            _ => return false,
        }
        true
    }

    fn insert_char(&mut self, c: char) {
        if self.content.graphemes(true).count() >= self.max_length {
            return;
        }
        let byte_pos = self.cursor.byte_position(&self.content);
        self.content.insert(byte_pos, c);
        self.cursor.update_text_length(&self.content);
        self.cursor.move_right();
    }

    fn backspace(&mut self) {
        if self.cursor.position() == 0 {
            return;
        }
        self.cursor.move_left();
        let start = self.cursor.byte_position(&self.content);
        let end = self.cursor.next_byte_position(&self.content);
        self.content.replace_range(start..end, "");
        self.cursor.update_text_length(&self.content);
    }

    fn delete(&mut self) {
        if self.cursor.position() >= self.content.graphemes(true).count() {
            return;
        }
        let start = self.cursor.byte_position(&self.content);
        let end = self.cursor.next_byte_position(&self.content);
        self.content.replace_range(start..end, "");
        self.cursor.update_text_length(&self.content);
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor.update_text_length(&self.content);
        self.cursor.move_to_start();
    }

    /// Replaces the line (history recall) and puts the caret at the end.
    pub fn set_content(&mut self, text: &str) {
        self.content = text.graphemes(true).take(self.max_length).collect();
        self.cursor.update_text_length(&self.content);
        self.cursor.move_to_end();
    }

    /// Takes the trimmed line for submission. Blank lines stay in place.
    pub fn submit(&mut self) -> Option<String> {
        if self.disabled {
            return None;
        }
        let cleaned = strip_ansi_escapes::strip(self.content.as_bytes())
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_else(|_| self.content.clone());
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            return None;
        }
        let submitted = trimmed.to_string();
        self.clear();
        Some(submitted)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.cursor.show_cursor();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }

    pub fn update_blink(&mut self, elapsed: Duration) {
        self.cursor.update_blink(elapsed);
    }

    pub fn render(&self, theme: &Theme) -> Paragraph<'_> {
        let text_style = if self.disabled {
            Style::default().fg(theme.input_text.dimmed().into())
        } else {
            Style::default().fg(theme.input_text.into())
        };
        let caret_style = if self.cursor.is_visible() && !self.disabled {
            text_style.add_modifier(Modifier::REVERSED)
        } else {
            text_style
        };

        let graphemes: Vec<&str> = self.content.graphemes(true).collect();
        let pos = self.cursor.position().min(graphemes.len());
        let mut spans = vec![Span::styled(
            self.prompt.as_str(),
            Style::default().fg(theme.accent.into()),
        )];

        if pos > 0 {
            spans.push(Span::styled(graphemes[..pos].concat(), text_style));
        }
        match graphemes.get(pos) {
            Some(current) => {
                spans.push(Span::styled(*current, caret_style));
                if pos + 1 < graphemes.len() {
                    spans.push(Span::styled(graphemes[pos + 1..].concat(), text_style));
                }
            }
            None => spans.push(Span::styled(" ", caret_style)),
        }

        Paragraph::new(Line::from(spans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new("> ", 10);
        for c in text.chars() {
            input.apply(&KeyAction::InsertChar(c));
        }
        input
    }

    #[test]
    fn edits_at_the_caret() {
        let mut input = typed("helo");
        input.apply(&KeyAction::MoveLeft);
        input.apply(&KeyAction::InsertChar('l'));
        assert_eq!(input.content(), "hello");

        input.apply(&KeyAction::MoveToStart);
        input.apply(&KeyAction::Delete);
        assert_eq!(input.content(), "ello");

        input.apply(&KeyAction::MoveToEnd);
        input.apply(&KeyAction::Backspace);
        assert_eq!(input.content(), "ell");
    }

    #[test]
    fn respects_max_length() {
        let input = typed("0123456789abc");
        assert_eq!(input.content(), "0123456789");
    }

    #[test]
    fn submit_trims_and_clears() {
        let mut input = typed("  help ");
        assert_eq!(input.submit().as_deref(), Some("help"));
        assert_eq!(input.content(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn blank_submit_keeps_line() {
        let mut input = typed("   ");
        assert_eq!(input.submit(), None);
        assert_eq!(input.content(), "   ");
    }

    #[test]
    fn disabled_input_ignores_keys() {
        let mut input = typed("ab");
        input.set_disabled(true);
        assert!(!input.apply(&KeyAction::InsertChar('c')));
        assert_eq!(input.submit(), None);
        assert_eq!(input.content(), "ab");
    }

    #[test]
    fn recall_places_caret_at_end() {
        let mut input = InputState::new("> ", 100);
        input.set_content("contact");
        assert_eq!(input.cursor_position(), 7);
        input.apply(&KeyAction::Backspace);
        assert_eq!(input.content(), "contac");
    }
}
