// src/ui/terminal.rs
use crate::core::constants::APP_TITLE;
use crate::core::prelude::*;
use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::Stdout;

/// Raw mode and alternate screen lifecycle.
pub struct TerminalManager {
    stdout: Stdout,
    raw_mode_enabled: bool,
}

impl TerminalManager {
    pub async fn new() -> Result<Self> {
        Ok(Self {
            stdout: io::stdout(),
            raw_mode_enabled: false,
        })
    }

    pub async fn setup(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|e| AppError::Terminal(format!("raw mode: {}", e)))?;
        self.raw_mode_enabled = true;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            terminal::DisableLineWrap,
            terminal::SetTitle(APP_TITLE),
            cursor::Hide
        )?;
        log::debug!("Terminal ready");
        Ok(())
    }

    pub async fn cleanup(&mut self) -> Result<()> {
        if !self.raw_mode_enabled {
            return Ok(());
        }
        log::info!("Restoring terminal");

        execute!(
            self.stdout,
            ResetColor,
            terminal::Clear(ClearType::All),
            LeaveAlternateScreen,
            terminal::EnableLineWrap,
            cursor::Show
        )?;
        disable_raw_mode().map_err(|e| AppError::Terminal(format!("raw mode: {}", e)))?;
        self.raw_mode_enabled = false;

        self.stdout.flush()?;
        Ok(())
    }

    pub fn is_raw_mode_enabled(&self) -> bool {
        self.raw_mode_enabled
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.raw_mode_enabled {
            restore_terminal();
            log::warn!("Emergency terminal cleanup in destructor");
        }
    }
}

/// Best-effort restore for panic and drop paths.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        std::io::stdout(),
        LeaveAlternateScreen,
        terminal::EnableLineWrap,
        cursor::Show,
        ResetColor
    );
}
