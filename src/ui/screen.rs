// src/ui/screen.rs
use crate::animation::{AnimationHandle, MatrixRain};
use crate::commands::HistoryDirection;
use crate::content::ContentData;
use crate::core::prelude::*;
use crate::input::{AppEvent, EventHandler, KeyAction, KeyboardManager};
use crate::output::{render_nodes, ScrollState};
use crate::session::{SubmitOutcome, TerminalSession};
use crate::ui::color::AppColor;
use crate::ui::info::STATUS_ROW;
use crate::ui::terminal::TerminalManager;

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::Stdout;
use tokio_util::sync::CancellationToken;

pub type TerminalBackend = Terminal<CrosstermBackend<Stdout>>;

const INFO_PANEL_WIDTH: u16 = 41;
const INFO_PANEL_HEIGHT: u16 = 5;
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 10;

/// Owns the terminal and drives the session from input and tick events.
pub struct ScreenManager {
    terminal: TerminalBackend,
    terminal_mgr: TerminalManager,
    events: EventHandler,
    keyboard_manager: KeyboardManager,
    session: TerminalSession,
    scroll: ScrollState,
    rain: Option<MatrixRain>,
    root: CancellationToken,
    last_tick: Instant,
}

impl ScreenManager {
    pub async fn new(config: Config, content: ContentData) -> Result<Self> {
        let mut terminal_mgr = TerminalManager::new().await?;
        terminal_mgr.setup().await?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        let size = terminal.size()?;

        let root = CancellationToken::new();
        let rain = config.effects.matrix_rain.then(|| {
            MatrixRain::new(
                size.width,
                size.height,
                config.effects.rain_interval,
                AnimationHandle::child_of(&root),
            )
        });
        let events = EventHandler::new(config.poll_rate, &root);
        let session = TerminalSession::new(config, content, root.clone());

        Ok(Self {
            terminal,
            terminal_mgr,
            events,
            keyboard_manager: KeyboardManager::new(),
            session,
            scroll: ScrollState::new(),
            rain,
            root,
            last_tick: Instant::now(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let result = loop {
            let Some(event) = self.events.next().await else {
                break Ok(());
            };
            match event {
                AppEvent::Input(key) => {
                    if self.handle_input_event(key) {
                        break Ok(());
                    }
                }
                AppEvent::Resize(width, height) => self.handle_resize_event(width, height),
                AppEvent::Tick => self.handle_tick_event(),
            }

            if let Err(e) = self.render() {
                break Err(e);
            }
        };

        self.shutdown();
        let cleanup = self.terminal_mgr.cleanup().await;
        merge_cleanup(result, cleanup)
    }

    /// Returns `true` when the user asked to quit.
    fn handle_input_event(&mut self, key: KeyEvent) -> bool {
        let page = self.scroll.window_height.max(1);
        match self.keyboard_manager.get_action(&key) {
            KeyAction::Quit => return true,
            KeyAction::Submit => {
                if self.session.submit() != SubmitOutcome::Busy {
                    self.scroll.follow_bottom();
                }
            }
            KeyAction::HistoryUp => {
                self.session.navigate_history(HistoryDirection::Up);
            }
            KeyAction::HistoryDown => {
                self.session.navigate_history(HistoryDirection::Down);
            }
            KeyAction::ScrollUp => self.scroll.scroll_up(1),
            KeyAction::ScrollDown => self.scroll.scroll_down(1),
            KeyAction::PageUp => self.scroll.scroll_up(page),
            KeyAction::PageDown => self.scroll.scroll_down(page),
            KeyAction::NoAction => {}
            action => {
                self.session.input_mut().apply(&action);
            }
        }
        false
    }

    fn handle_resize_event(&mut self, width: u16, height: u16) {
        if let Some(rain) = self.rain.as_mut() {
            rain.resize(width, height);
        }
        log::trace!("Resized to {}x{}", width, height);
    }

    fn handle_tick_event(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        if let Some(rain) = self.rain.as_mut() {
            rain.advance(elapsed);
        }
        if let Some(outcome) = self.session.tick(elapsed) {
            log::debug!("Reveal resolved: {:?}", outcome);
        }
    }

    fn shutdown(&mut self) {
        if let Some(outcome) = self.session.shutdown() {
            log::info!("Shutdown interrupted a reveal: {:?}", outcome);
        }
        if let Some(rain) = &self.rain {
            rain.stop();
        }
        self.events.shutdown();
        self.root.cancel();
    }

    fn render(&mut self) -> Result<()> {
        let Self {
            terminal,
            session,
            scroll,
            rain,
            ..
        } = self;

        terminal.draw(|frame| {
            let size = frame.size();
            if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
                return;
            }
            if let Some(rain) = rain.as_ref() {
                frame.render_widget(rain.widget(session.config().theme.rain), size);
            }
            draw_session(frame, size, session, scroll);
        })?;
        Ok(())
    }
}

impl Drop for ScreenManager {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

/// A failure inside the loop wins over a failed terminal restore.
fn merge_cleanup(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    if let Err(e) = &cleanup {
        log::error!("Terminal cleanup failed: {}", e);
    }
    result.and(cleanup)
}

fn line_count(text: &str) -> u16 {
    text.lines().count().min(u16::MAX as usize) as u16
}

fn text_lines(text: &str, style: Style) -> Vec<Line<'_>> {
    text.lines().map(|l| Line::styled(l, style)).collect()
}

/// Header (art, paragraph, loading bar | icon, info), output pane, input.
pub fn draw_session(
    frame: &mut Frame,
    area: Rect,
    session: &TerminalSession,
    scroll: &mut ScrollState,
) {
    let config = session.config();
    let theme = &config.theme;

    let left_height = line_count(session.art_visible()).max(1)
        + line_count(session.paragraph_visible()).max(1)
        + 2;
    let right_height = line_count(session.icon_frame()) + INFO_PANEL_HEIGHT;
    let header_height = left_height.max(right_height).min(area.height / 2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(rows[0]);

    let accent = Style::default().fg(theme.accent.into());
    let text = Style::default().fg(theme.output_text.into());
    let mut intro = text_lines(session.art_visible(), accent);
    intro.push(Line::default());
    intro.extend(text_lines(session.paragraph_visible(), text));
    intro.push(Line::styled(session.loading_frame(), accent));
    frame.render_widget(Paragraph::new(intro), header[0]);

    let info = session.info();
    let info_style = Style::default().fg(theme.info.into());
    let status_style = Style::default().fg(AppColor::from_status(info.status_code()).into());
    let mut side = text_lines(session.icon_frame(), accent);
    side.extend(info.lines().into_iter().enumerate().map(|(row, l)| {
        let style = if row == STATUS_ROW {
            status_style
        } else {
            info_style
        };
        Line::styled(l, style)
    }));
    frame.render_widget(Paragraph::new(side), header[1]);

    let output_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.info.dimmed().into()))
        .style(Style::default().bg(theme.output_bg.into()));
    let inner = output_block.inner(rows[1]);
    frame.render_widget(output_block, rows[1]);

    let lines = render_nodes(session.output_chunks(), inner.width as usize, theme);
    scroll.update_dimensions(inner.height as usize, lines.len());
    let (start, end) = scroll.get_visible_range();
    frame.render_widget(Paragraph::new(lines[start..end].to_vec()), inner);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent.dimmed().into()))
        .style(Style::default().bg(theme.output_bg.into()));
    let input_inner = input_block.inner(rows[2]);
    frame.render_widget(input_block, rows[2]);
    frame.render_widget(session.input().render(theme), input_inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn loop_error_survives_failed_cleanup() {
        let merged = merge_cleanup(
            Err(AppError::Terminal("draw failed".into())),
            Err(AppError::Terminal("restore failed".into())),
        );
        assert!(matches!(merged, Err(AppError::Terminal(msg)) if msg == "draw failed"));

        let merged = merge_cleanup(Ok(()), Err(AppError::Terminal("restore failed".into())));
        assert!(matches!(merged, Err(AppError::Terminal(msg)) if msg == "restore failed"));

        assert!(merge_cleanup(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn draws_info_panel_and_output() {
        let content = ContentData::embedded().expect("content");
        let mut session =
            TerminalSession::new(Config::default(), content, CancellationToken::new());
        session.tick(Duration::from_secs(5));
        session.input_mut().set_content("help");
        session.submit();
        session.tick(Duration::from_secs(60));

        let mut scroll = ScrollState::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.size();
                draw_session(frame, area, &session, &mut scroll);
            })
            .expect("draw");

        let screen = buffer_text(&terminal);
        assert!(screen.contains("[TERMINAL INFO]"));
        assert!(screen.contains("- COMMAND: help"));
        assert!(screen.contains("(Use the"));
    }

    /// Finds `needle` in the info column and returns its first cell.
    fn find_in_info_panel(terminal: &Terminal<TestBackend>, needle: &str) -> (u16, u16) {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let left = area.width - INFO_PANEL_WIDTH;
        for y in 0..area.height {
            let row: Vec<&str> = (left..area.width).map(|x| buffer.get(x, y).symbol()).collect();
            let text = row.concat();
            if let Some(idx) = text.find(needle) {
                let column = text[..idx].chars().count() as u16;
                return (left + column, y);
            }
        }
        panic!("{:?} not found in info panel", needle);
    }

    #[test]
    fn status_row_follows_status_code() {
        let content = ContentData::embedded().expect("content");
        let mut session =
            TerminalSession::new(Config::default(), content, CancellationToken::new());
        session.tick(Duration::from_secs(5));
        session.input_mut().set_content("nope");
        session.submit();
        session.tick(Duration::from_secs(60));

        let mut scroll = ScrollState::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).expect("test terminal");
        terminal
            .draw(|frame| {
                let area = frame.size();
                draw_session(frame, area, &session, &mut scroll);
            })
            .expect("draw");

        let (x, y) = find_in_info_panel(&terminal, "- STATUS: 404");
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.get(x, y).fg, Color::LightRed);

        let (x, y) = find_in_info_panel(&terminal, "- COMMAND: nope");
        assert_eq!(terminal.backend().buffer().get(x, y).fg, Color::Gray);
    }
}
