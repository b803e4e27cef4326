use super::ticker::{AnimationHandle, Ticker};
use std::time::Duration;

/// Frame-by-frame loading bar. Purely decorative: nothing waits on it.
#[derive(Debug)]
pub struct LoadingBar {
    frames: Vec<String>,
    shown: usize,
    next: usize,
    ticker: Ticker,
    handle: AnimationHandle,
}

impl LoadingBar {
    /// Starts on the first frame; the last frame stays visible when done.
    pub fn start(frames: &[String], interval: Duration, handle: AnimationHandle) -> Self {
        Self {
            frames: frames.to_vec(),
            shown: 0,
            next: 0,
            ticker: Ticker::new(interval),
            handle,
        }
    }

    /// Tick interval for a bar that covers `text_len` characters.
    ///
    /// The extra delay is `text_len / divisor` milliseconds on top of `base`.
    pub fn interval_for(text_len: usize, divisor: usize, base: Duration) -> Duration {
        let extra_us = (text_len as u64 * 1000) / divisor.max(1) as u64;
        base + Duration::from_micros(extra_us)
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if self.is_finished() || self.handle.is_cancelled() {
            return;
        }

        for _ in 0..self.ticker.advance(elapsed) {
            self.shown = self.next;
            self.next += 1;
            if self.is_finished() {
                break;
            }
        }
    }

    pub fn current_frame(&self) -> &str {
        self.frames
            .get(self.shown)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.frames.len()
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }
}
