use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Converts elapsed wall time into whole animation steps.
///
/// The remainder carries over to the next call. A zero interval fires without
/// limit, so the animation finishes on its first advance.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    carried: Duration,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            carried: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return u32::MAX;
        }

        self.carried += elapsed;
        let interval = self.interval.as_nanos();
        let steps = self.carried.as_nanos() / interval;
        self.carried = Duration::from_nanos((self.carried.as_nanos() % interval) as u64);
        u32::try_from(steps).unwrap_or(u32::MAX)
    }
}

/// Owned cancellation handle for a running animation.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    token: CancellationToken,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that is cancelled together with `parent`.
    pub fn child_of(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder_between_advances() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        assert_eq!(ticker.advance(Duration::from_millis(4)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(7)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(9)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(35)), 3);
    }

    #[test]
    fn zero_interval_is_unbounded() {
        let mut ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.advance(Duration::ZERO), u32::MAX);
    }

    #[test]
    fn child_handle_follows_parent() {
        let root = CancellationToken::new();
        let handle = AnimationHandle::child_of(&root);
        assert!(!handle.is_cancelled());
        root.cancel();
        assert!(handle.is_cancelled());
    }
}
