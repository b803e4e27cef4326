// src/session.rs
use crate::animation::{
    AnimationHandle, IconCycler, LoadingBar, RevealOutcome, TextTyper, Typewriter,
};
use crate::commands::{CommandHandler, CommandResult, HistoryDirection, HistoryEntry, HistoryManager};
use crate::content::ContentData;
use crate::core::constants::{ART_CHUNK_SIZE, COMMAND_LOADING_DIVISOR, INTRO_LOADING_DIVISOR};
use crate::core::prelude::*;
use crate::input::InputState;
use crate::markup::{self, Node};
use crate::output::OutputBuffer;
use crate::ui::info::TerminalInfo;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank line; nothing happened.
    Ignored,
    /// A reveal or the intro is still running; the line stays in the input.
    Busy,
    /// `cls` wiped history and output.
    Cleared,
    /// A response is being revealed.
    Started,
}

struct PendingReveal {
    result: CommandResult,
    typewriter: Typewriter,
    done: oneshot::Receiver<RevealOutcome>,
}

struct Intro {
    art: TextTyper,
    paragraph: TextTyper,
    finished: bool,
}

/// One terminal session: history, output, input and every running animation.
///
/// All state lives here and is driven by `tick` and key handling from a single
/// controller, so history length and cursor always change together.
pub struct TerminalSession {
    config: Config,
    content: ContentData,
    handler: CommandHandler,
    history: HistoryManager,
    output: OutputBuffer,
    info: TerminalInfo,
    input: InputState,
    loading: LoadingBar,
    icon: IconCycler,
    intro: Intro,
    pending: Option<PendingReveal>,
    root: CancellationToken,
}

impl TerminalSession {
    pub fn new(config: Config, content: ContentData, root: CancellationToken) -> Self {
        Self::with_handler(config, content, CommandHandler::new(), root)
    }

    pub fn with_handler(
        config: Config,
        content: ContentData,
        handler: CommandHandler,
        root: CancellationToken,
    ) -> Self {
        let paragraph_len = content.paragraph.chars().count();
        let loading = LoadingBar::start(
            &content.loading_frames,
            LoadingBar::interval_for(
                paragraph_len,
                INTRO_LOADING_DIVISOR,
                config.effects.loading_base_delay,
            ),
            AnimationHandle::child_of(&root),
        );
        let icon = IconCycler::new(
            &content.icon_frames,
            config.effects.icon_interval,
            AnimationHandle::child_of(&root),
        );
        let intro = Intro {
            art: TextTyper::new(
                content.art_text.clone(),
                ART_CHUNK_SIZE,
                config.art_delay,
                AnimationHandle::child_of(&root),
            ),
            paragraph: TextTyper::new(
                content.paragraph.clone(),
                1,
                config.paragraph_delay,
                AnimationHandle::child_of(&root),
            ),
            finished: false,
        };

        let mut input = InputState::from_config(&config);
        input.set_disabled(true);

        log::info!("Session started: {}", handler.debug_info());

        Self {
            config,
            content,
            handler,
            history: HistoryManager::new(),
            output: OutputBuffer::new(),
            info: TerminalInfo::new(),
            input,
            loading,
            icon,
            intro,
            pending: None,
            root,
        }
    }

    /// Submits the current input line.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_busy() {
            log::debug!("Submit rejected while busy");
            return SubmitOutcome::Busy;
        }
        let Some(command) = self.input.submit() else {
            return SubmitOutcome::Ignored;
        };

        self.output
            .push_text(&format!("\n{}{}\n", self.config.prompt, command));
        self.process_command(&command)
    }

    /// Resolves a command and starts its reveal. Echo and input handling are
    /// the caller's business.
    pub fn process_command(&mut self, command: &str) -> SubmitOutcome {
        if self.is_busy() {
            return SubmitOutcome::Busy;
        }

        let result = self.handler.resolve(command);

        if result.is_clear_command {
            self.history.clear();
            self.output.clear();
            self.info.reset(self.history.cursor());
            return SubmitOutcome::Cleared;
        }

        self.info
            .update(&result.command, result.status_code, self.history.cursor());

        let visible_len = markup::strip_tags(&result.response_text).chars().count();
        self.loading.cancel();
        self.loading = LoadingBar::start(
            &self.content.loading_frames,
            LoadingBar::interval_for(
                visible_len,
                COMMAND_LOADING_DIVISOR,
                self.config.effects.loading_base_delay,
            ),
            AnimationHandle::child_of(&self.root),
        );

        let (typewriter, done) = Typewriter::new(
            markup::parse(&result.response_text),
            self.config.typewriter_delay,
            AnimationHandle::child_of(&self.root),
        );
        self.input.set_disabled(true);
        self.pending = Some(PendingReveal {
            result,
            typewriter,
            done,
        });
        SubmitOutcome::Started
    }

    /// Advances every animation by `elapsed`. Returns the outcome of a reveal
    /// that resolved during this tick.
    pub fn tick(&mut self, elapsed: Duration) -> Option<RevealOutcome> {
        self.intro.art.advance(elapsed);
        if !self.intro.finished && self.intro.paragraph.advance(elapsed) {
            self.intro.finished = true;
            if self.pending.is_none() {
                self.input.set_disabled(false);
            }
            log::debug!("Intro finished");
        }

        self.icon.advance(elapsed);
        self.loading.advance(elapsed);
        self.input.update_blink(elapsed);

        if let Some(pending) = self.pending.as_mut() {
            pending.typewriter.advance(elapsed);
        }
        self.settle_reveal()
    }

    fn settle_reveal(&mut self) -> Option<RevealOutcome> {
        let pending = self.pending.as_mut()?;
        let outcome = match pending.done.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => RevealOutcome::Cancelled,
        };

        let PendingReveal {
            result, typewriter, ..
        } = self.pending.take()?;
        self.output.extend(typewriter.into_revealed());

        if outcome == RevealOutcome::Completed {
            self.history.append(HistoryEntry::new(
                result.command.clone(),
                result.response_text,
                result.status_code,
            ));
            self.info
                .update(&result.command, result.status_code, self.history.cursor());
        } else {
            log::debug!("Reveal of '{}' cancelled, not recorded", result.command);
        }

        if self.intro.finished {
            self.input.set_disabled(false);
        }
        Some(outcome)
    }

    /// Recalls a history entry into the input. No-op while busy.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> bool {
        if self.is_busy() {
            return false;
        }
        let Some(entry) = self.history.navigate(direction) else {
            return false;
        };
        let (command, status) = (entry.command.clone(), entry.status_code);
        self.input.set_content(&command);
        self.info.update(&command, status, self.history.cursor());
        true
    }

    /// Cancels every animation and resolves a running reveal as cancelled.
    pub fn shutdown(&mut self) -> Option<RevealOutcome> {
        self.root.cancel();
        if let Some(pending) = self.pending.as_mut() {
            pending.typewriter.cancel();
        }
        self.settle_reveal()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || !self.intro.finished
    }

    pub fn is_intro_finished(&self) -> bool {
        self.intro.finished
    }

    /// Output nodes to draw: committed text, then the reveal in progress.
    pub fn output_chunks(&self) -> Vec<&[Node]> {
        let mut chunks = vec![self.output.nodes()];
        if let Some(pending) = &self.pending {
            chunks.push(pending.typewriter.revealed());
        }
        chunks
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn info(&self) -> &TerminalInfo {
        &self.info
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn token(&self) -> &CancellationToken {
        &self.root
    }

    pub fn loading_frame(&self) -> &str {
        self.loading.current_frame()
    }

    pub fn icon_frame(&self) -> &str {
        self.icon.current_frame()
    }

    pub fn art_visible(&self) -> &str {
        self.intro.art.visible()
    }

    pub fn paragraph_visible(&self) -> &str {
        self.intro.paragraph.visible()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
