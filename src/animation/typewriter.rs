// src/animation/typewriter.rs
use super::ticker::{AnimationHandle, Ticker};
use crate::markup::{Fragment, Node};
use std::time::Duration;
use tokio::sync::oneshot;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Running,
    Finished(RevealOutcome),
}

/// Reveals a parsed fragment one unit per tick.
///
/// Text runs grow one grapheme at a time; elements and line breaks are
/// appended whole. The run cannot be restarted: once finished, the
/// completion channel has fired and further advances are no-ops.
#[derive(Debug)]
pub struct Typewriter {
    nodes: Vec<Node>,
    node_index: usize,
    byte_offset: usize,
    output: Vec<Node>,
    ticker: Ticker,
    handle: AnimationHandle,
    outcome: Option<RevealOutcome>,
    done: Option<oneshot::Sender<RevealOutcome>>,
}

impl Typewriter {
    pub fn new(
        fragment: Fragment,
        delay: Duration,
        handle: AnimationHandle,
    ) -> (Self, oneshot::Receiver<RevealOutcome>) {
        let (tx, rx) = oneshot::channel();
        let typewriter = Self {
            nodes: fragment.into_nodes(),
            node_index: 0,
            byte_offset: 0,
            output: Vec::new(),
            ticker: Ticker::new(delay),
            handle,
            outcome: None,
            done: Some(tx),
        };
        (typewriter, rx)
    }

    pub fn advance(&mut self, elapsed: Duration) -> RevealState {
        if let Some(outcome) = self.outcome {
            return RevealState::Finished(outcome);
        }

        if self.handle.is_cancelled() {
            self.finish(RevealOutcome::Cancelled);
            return RevealState::Finished(RevealOutcome::Cancelled);
        }

        for _ in 0..self.ticker.advance(elapsed) {
            if !self.tick() {
                break;
            }
        }

        match self.outcome {
            Some(outcome) => RevealState::Finished(outcome),
            None => RevealState::Running,
        }
    }

    /// One timer tick. Returns `false` once the reveal has finished.
    pub fn tick(&mut self) -> bool {
        if self.outcome.is_some() {
            return false;
        }

        let Some(node) = self.nodes.get(self.node_index) else {
            self.finish(RevealOutcome::Completed);
            return false;
        };

        match node {
            Node::Text(text) => {
                if self.byte_offset == 0 {
                    self.output.push(Node::Text(String::new()));
                }

                match text[self.byte_offset..].graphemes(true).next() {
                    Some(grapheme) => {
                        if let Some(Node::Text(current)) = self.output.last_mut() {
                            current.push_str(grapheme);
                        }
                        self.byte_offset += grapheme.len();
                    }
                    None => {
                        self.node_index += 1;
                        self.byte_offset = 0;
                    }
                }
            }
            Node::Element(_) | Node::LineBreak => {
                self.output.push(node.clone());
                self.node_index += 1;
                self.byte_offset = 0;
            }
        }
        true
    }

    /// Stops the reveal where it is and resolves `Cancelled`.
    pub fn cancel(&mut self) {
        self.handle.cancel();
        self.finish(RevealOutcome::Cancelled);
    }

    pub fn revealed(&self) -> &[Node] {
        &self.output
    }

    pub fn into_revealed(self) -> Vec<Node> {
        self.output
    }

    pub fn outcome(&self) -> Option<RevealOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    fn finish(&mut self, outcome: RevealOutcome) {
        if self.outcome.is_some() {
            return;
        }
        self.outcome = Some(outcome);
        if let Some(tx) = self.done.take() {
            let _ = tx.send(outcome);
        }
        log::debug!(
            "Typewriter finished: {:?} ({} of {} units)",
            outcome,
            self.node_index.min(self.nodes.len()),
            self.nodes.len()
        );
    }
}

/// Plain-text reveal used by the intro art and paragraph.
#[derive(Debug)]
pub struct TextTyper {
    text: String,
    visible_bytes: usize,
    chunk: usize,
    ticker: Ticker,
    handle: AnimationHandle,
    finished: bool,
}

impl TextTyper {
    pub fn new(text: impl Into<String>, chunk: usize, delay: Duration, handle: AnimationHandle) -> Self {
        Self {
            text: text.into(),
            visible_bytes: 0,
            chunk: chunk.max(1),
            ticker: Ticker::new(delay),
            handle,
            finished: false,
        }
    }

    /// Advances by elapsed time; returns `true` once finished.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.finished {
            return true;
        }
        if self.handle.is_cancelled() {
            self.finished = true;
            return true;
        }

        for _ in 0..self.ticker.advance(elapsed) {
            if self.visible_bytes >= self.text.len() {
                self.finished = true;
                break;
            }
            self.visible_bytes += self.text[self.visible_bytes..]
                .graphemes(true)
                .take(self.chunk)
                .map(str::len)
                .sum::<usize>();
        }
        self.finished
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.visible_bytes]
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
