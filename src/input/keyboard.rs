// src/input/keyboard.rs
use crate::core::constants::DOUBLE_ESC_THRESHOLD;
use crate::core::prelude::*;
use crossterm::event::KeyEventKind;

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    MoveToStart,
    MoveToEnd,
    InsertChar(char),
    Backspace,
    Delete,
    ClearLine,
    Submit,
    HistoryUp,
    HistoryDown,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
    NoAction,
}

/// Maps raw key events to terminal actions.
///
/// A single `Esc` is remembered; a second one inside the double-press
/// window quits.
pub struct KeyboardManager {
    double_press_threshold: Duration,
    last_esc_press: Option<Instant>,
}

impl KeyboardManager {
    pub fn new() -> Self {
        Self {
            double_press_threshold: Duration::from_millis(DOUBLE_ESC_THRESHOLD),
            last_esc_press: None,
        }
    }

    pub fn get_action(&mut self, key: &KeyEvent) -> KeyAction {
        self.get_action_at(key, Instant::now())
    }

    pub fn get_action_at(&mut self, key: &KeyEvent, now: Instant) -> KeyAction {
        // Windows reports releases too.
        if key.kind == KeyEventKind::Release {
            return KeyAction::NoAction;
        }

        if key.code == KeyCode::Esc {
            if let Some(prev) = self.last_esc_press.take() {
                if now.duration_since(prev) <= self.double_press_threshold {
                    log::info!("Double ESC, quit requested");
                    return KeyAction::Quit;
                }
            }
            self.last_esc_press = Some(now);
            return KeyAction::NoAction;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Submit,

            (KeyCode::Left, KeyModifiers::NONE) => KeyAction::MoveLeft,
            (KeyCode::Right, KeyModifiers::NONE) => KeyAction::MoveRight,
            (KeyCode::Home, _) => KeyAction::MoveToStart,
            (KeyCode::End, _) => KeyAction::MoveToEnd,
            (KeyCode::Left, KeyModifiers::CONTROL | KeyModifiers::ALT) => KeyAction::MoveToStart,
            (KeyCode::Right, KeyModifiers::CONTROL | KeyModifiers::ALT) => KeyAction::MoveToEnd,

            (KeyCode::Up, KeyModifiers::NONE) => KeyAction::HistoryUp,
            (KeyCode::Down, KeyModifiers::NONE) => KeyAction::HistoryDown,
            (KeyCode::Up, KeyModifiers::SHIFT) => KeyAction::ScrollUp,
            (KeyCode::Down, KeyModifiers::SHIFT) => KeyAction::ScrollDown,
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,

            (KeyCode::Backspace, KeyModifiers::NONE) => KeyAction::Backspace,
            (KeyCode::Backspace, _) => KeyAction::ClearLine,
            (KeyCode::Delete, _) => KeyAction::Delete,

            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                log::info!("Ctrl+C, quit requested");
                KeyAction::Quit
            }
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => KeyAction::MoveToStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => KeyAction::MoveToEnd,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ClearLine,

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if c.is_control() {
                    log::warn!("Blocked control char in input: {:?}", c);
                    KeyAction::NoAction
                } else {
                    KeyAction::InsertChar(c)
                }
            }

            (code, modifiers) => {
                log::trace!("Unmapped key: {:?} + {:?}", code, modifiers);
                KeyAction::NoAction
            }
        }
    }
}

impl Default for KeyboardManager {
    fn default() -> Self {
        Self::new()
    }
}
