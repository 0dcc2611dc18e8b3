//! Event handling for TUI

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Animation clock tick
    Tick,
}

/// Event handler for the TUI
///
/// Merges terminal input and the animation clock into one channel.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler ticking every `tick_rate`
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick_interval.tick() => {
                        if tx.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                    maybe_event = reader.next() => {
                        let app_event = match maybe_event {
                            // Release/repeat events show up on some platforms
                            Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                                AppEvent::Key(key)
                            }
                            Some(Ok(CrosstermEvent::Resize(w, h))) => AppEvent::Resize(w, h),
                            Some(Ok(_)) => continue,
                            Some(Err(e)) => {
                                tracing::warn!(error = %e, "failed to read terminal event");
                                continue;
                            }
                            None => break,
                        };

                        if tx.send(app_event).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, task }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Helper to check for quit key combinations
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Helper to check for back/escape key
pub fn is_back_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Esc,
            ..
        } | KeyEvent {
            code: KeyCode::Backspace,
            modifiers: KeyModifiers::NONE,
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_back_keys() {
        assert!(is_back_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_back_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
        assert!(!is_back_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
