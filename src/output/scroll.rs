/// Vertical scroll position of the output pane.
///
/// Follows the bottom while new text arrives unless the user scrolled up;
/// scrolling back down to the end re-enables following.
#[derive(Debug)]
pub struct ScrollState {
    pub offset: usize,
    pub window_height: usize,
    content_height: usize,
    auto_scroll: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            window_height: 0,
            content_height: 0,
            auto_scroll: true,
        }
    }

    pub fn update_dimensions(&mut self, window_height: usize, content_height: usize) {
        let max_offset = content_height.saturating_sub(window_height);
        self.window_height = window_height;
        self.content_height = content_height;
        self.offset = if self.auto_scroll {
            max_offset
        } else {
            self.offset.min(max_offset)
        };
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + amount).min(max_offset);
        self.auto_scroll = self.offset >= max_offset;
    }

    pub fn follow_bottom(&mut self) {
        self.auto_scroll = true;
        self.offset = self.max_offset();
    }

    pub fn get_visible_range(&self) -> (usize, usize) {
        if self.content_height <= self.window_height {
            return (0, self.content_height);
        }
        let end = (self.offset + self.window_height).min(self.content_height);
        (self.offset, end)
    }

    pub fn is_auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.window_height)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_new_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 25);
        assert_eq!(scroll.get_visible_range(), (15, 25));
        scroll.update_dimensions(10, 30);
        assert_eq!(scroll.get_visible_range(), (20, 30));
    }

    #[test]
    fn manual_scroll_pins_position_until_bottom() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 30);
        scroll.scroll_up(5);
        assert!(!scroll.is_auto_scroll());
        scroll.update_dimensions(10, 40);
        assert_eq!(scroll.get_visible_range(), (15, 25));

        scroll.scroll_down(100);
        assert!(scroll.is_auto_scroll());
        assert_eq!(scroll.get_visible_range(), (30, 40));
    }

    #[test]
    fn short_content_shows_everything() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 4);
        scroll.scroll_up(3);
        assert_eq!(scroll.get_visible_range(), (0, 4));
    }
}
