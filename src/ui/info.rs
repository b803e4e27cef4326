// src/ui/info.rs
use crate::core::constants::{INFO_COMMAND_MAX, INFO_LINE_WIDTH, STATUS_OK};

const TOP_BORDER: &str = "╔===========[TERMINAL INFO]===========╗";
const BOTTOM_BORDER: &str = "╚=====================================╝";

/// Row of [`TerminalInfo::lines`] holding the status code.
pub const STATUS_ROW: usize = 2;

/// Status box showing history index, last status and last command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalInfo {
    command: String,
    status_code: u16,
    index: Option<usize>,
}

impl TerminalInfo {
    pub fn new() -> Self {
        Self {
            command: "null".into(),
            status_code: STATUS_OK,
            index: None,
        }
    }

    pub fn update(&mut self, command: &str, status_code: u16, index: Option<usize>) {
        self.command = command.to_string();
        self.status_code = status_code;
        self.index = index;
    }

    /// Back to `("null", 200)` with the given cursor.
    pub fn reset(&mut self, index: Option<usize>) {
        *self = Self::new();
        self.index = index;
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn display_command(&self) -> String {
        if self.command.chars().count() > INFO_COMMAND_MAX {
            let head: String = self.command.chars().take(INFO_COMMAND_MAX - 3).collect();
            format!("{}...", head)
        } else {
            self.command.clone()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let index = self
            .index
            .map_or_else(|| "null".to_string(), |i| i.to_string());
        vec![
            TOP_BORDER.to_string(),
            boxed(&format!("- INDEX [^][v]: {}", index)),
            boxed(&format!("- STATUS: {}", self.status_code)),
            boxed(&format!("- COMMAND: {}", self.display_command())),
            BOTTOM_BORDER.to_string(),
        ]
    }
}

impl Default for TerminalInfo {
    fn default() -> Self {
        Self::new()
    }
}

fn boxed(content: &str) -> String {
    format!("║ {:<width$} ║", content, width = INFO_LINE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_box_matches_layout() {
        let lines = TerminalInfo::new().lines();
        assert_eq!(
            lines,
            vec![
                "╔===========[TERMINAL INFO]===========╗",
                "║ - INDEX [^][v]: null                ║",
                "║ - STATUS: 200                       ║",
                "║ - COMMAND: null                     ║",
                "╚=====================================╝",
            ]
        );
        assert!(lines[STATUS_ROW].starts_with("║ - STATUS:"));
    }

    #[test]
    fn rows_line_up_with_borders() {
        let mut info = TerminalInfo::new();
        info.update("projects", 404, Some(12));
        let widths: Vec<usize> = info.lines().iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn long_commands_are_truncated() {
        let mut info = TerminalInfo::new();
        info.update("abcdefghijklmnopqrstuvwxyz", 404, Some(0));
        assert_eq!(info.display_command(), "abcdefghijklmnopq...");
        info.update("abcdefghijklmnopqrst", 404, Some(0));
        assert_eq!(info.display_command(), "abcdefghijklmnopqrst");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut info = TerminalInfo::new();
        info.update("bio", 200, Some(3));
        info.reset(None);
        assert_eq!(info, TerminalInfo::new());
    }
}
