// src/input/event.rs
use crossterm::event::{self as crossterm_event, Event as CrosstermEvent, KeyEvent};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Feeds terminal input and timer ticks into one channel.
///
/// Both producer tasks stop when the token is cancelled or the receiver
/// is dropped.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    token: CancellationToken,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, parent: &CancellationToken) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let token = parent.child_token();

        let input_tx = tx.clone();
        let input_token = token.clone();
        tokio::task::spawn_blocking(move || {
            while !input_token.is_cancelled() {
                match crossterm_event::poll(INPUT_POLL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        log::error!("Input poll failed: {}", e);
                        break;
                    }
                }

                let event = match crossterm_event::read() {
                    Ok(CrosstermEvent::Key(key)) => AppEvent::Input(key),
                    Ok(CrosstermEvent::Resize(width, height)) => AppEvent::Resize(width, height),
                    Ok(_) => continue,
                    Err(e) => {
                        log::error!("Input read failed: {}", e);
                        break;
                    }
                };

                if input_tx.blocking_send(event).is_err() {
                    break;
                }
            }
            log::debug!("Input task stopped");
        });

        let tick_token = token.clone();
        tokio::spawn(async move {
            let mut ticker = interval(tick_rate);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = tick_token.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                }
            }
            log::debug!("Tick task stopped");
        });

        Self { rx, token }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn shutdown(&self) {
        self.token.cancel();
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
