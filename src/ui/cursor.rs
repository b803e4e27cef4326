use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Caret inside the input line, counted in graphemes.
#[derive(Debug)]
pub struct CursorState {
    position: usize,
    text_length: usize,
    visible: bool,
    since_blink: Duration,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            position: 0,
            text_length: 0,
            visible: true,
            since_blink: Duration::ZERO,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn update_blink(&mut self, elapsed: Duration) {
        self.since_blink += elapsed;
        if self.since_blink >= BLINK_INTERVAL {
            self.visible = !self.visible;
            self.since_blink = Duration::ZERO;
        }
    }

    pub fn show_cursor(&mut self) {
        self.visible = true;
        self.since_blink = Duration::ZERO;
    }

    pub fn update_text_length(&mut self, text: &str) {
        self.text_length = text.graphemes(true).count();
        self.position = self.position.min(self.text_length);
        self.show_cursor();
    }

    pub fn move_left(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.show_cursor();
        }
    }

    pub fn move_right(&mut self) {
        if self.position < self.text_length {
            self.position += 1;
            self.show_cursor();
        }
    }

    pub fn move_to_start(&mut self) {
        self.position = 0;
        self.show_cursor();
    }

    pub fn move_to_end(&mut self) {
        self.position = self.text_length;
        self.show_cursor();
    }

    /// Byte offset of the grapheme boundary before the caret.
    pub fn byte_position(&self, text: &str) -> usize {
        text.grapheme_indices(true)
            .nth(self.position)
            .map(|(pos, _)| pos)
            .unwrap_or(text.len())
    }

    /// Byte offset of the grapheme boundary after the caret.
    pub fn next_byte_position(&self, text: &str) -> usize {
        text.grapheme_indices(true)
            .nth(self.position)
            .map(|(pos, grapheme)| pos + grapheme.len())
            .unwrap_or(text.len())
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}
