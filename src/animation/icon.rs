use super::ticker::{AnimationHandle, Ticker};
use std::time::Duration;

/// Endless frame cycler for the ASCII icon.
#[derive(Debug)]
pub struct IconCycler {
    frames: Vec<String>,
    index: usize,
    ticker: Ticker,
    handle: AnimationHandle,
}

impl IconCycler {
    pub fn new(frames: &[String], interval: Duration, handle: AnimationHandle) -> Self {
        Self {
            frames: frames.to_vec(),
            index: 0,
            ticker: Ticker::new(interval),
            handle,
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if self.frames.is_empty() || self.handle.is_cancelled() {
            return;
        }
        let steps = self.ticker.advance(elapsed) as usize;
        self.index = (self.index + steps % self.frames.len()) % self.frames.len();
    }

    pub fn current_frame(&self) -> &str {
        self.frames
            .get(self.index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn stop(&self) {
        self.handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_and_wraps() {
        let frames: Vec<String> = vec!["=^.^=".into(), "=^-^=".into(), "=^o^=".into()];
        let tick = Duration::from_millis(500);
        let mut icon = IconCycler::new(&frames, tick, AnimationHandle::new());
        assert_eq!(icon.current_frame(), "=^.^=");
        icon.advance(tick);
        assert_eq!(icon.current_frame(), "=^-^=");
        icon.advance(tick * 3);
        assert_eq!(icon.current_frame(), "=^-^=");
        icon.advance(Duration::from_millis(499));
        assert_eq!(icon.current_frame(), "=^-^=");
        icon.advance(Duration::from_millis(1));
        assert_eq!(icon.current_frame(), "=^o^=");
    }

    #[test]
    fn stopped_icon_holds_frame() {
        let frames: Vec<String> = vec!["a".into(), "b".into()];
        let tick = Duration::from_millis(500);
        let mut icon = IconCycler::new(&frames, tick, AnimationHandle::new());
        icon.stop();
        icon.advance(tick);
        assert_eq!(icon.current_frame(), "a");
    }
}
