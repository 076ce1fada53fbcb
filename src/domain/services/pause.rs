#[cfg(test)]
#[path = "pause_test.rs"]
mod tests;

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::QuestionFetcher;
use crate::domain::models::UiState;

const INTERRUPTED: &str = "The request was interrupted.";

/// Bound to a fetch task. Runs after the outcome is published on every exit
/// path, including panics and aborts, so the screen never stays on Loading.
struct SettleGuard {
    state: Arc<watch::Sender<UiState>>,
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        let cleared = self.state.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = UiState::Error(INTERRUPTED.to_string());
            return true;
        });

        if cleared {
            tracing::warn!("Fetch task exited without an outcome");
        }
    }
}

/// Owns the screen state and the single "fetch" trigger.
pub struct Pause {
    fetcher: Arc<QuestionFetcher>,
    state: Arc<watch::Sender<UiState>>,
}

impl Pause {
    pub fn new(fetcher: QuestionFetcher) -> Pause {
        let (tx, _rx) = watch::channel(UiState::Idle);
        return Pause {
            fetcher: Arc::new(fetcher),
            state: Arc::new(tx),
        };
    }

    pub fn state(&self) -> UiState {
        return self.state.borrow().clone();
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        return self.state.subscribe();
    }

    /// Moves to Loading and spawns the request. Returns `None` without
    /// touching anything when a request is already in flight.
    pub fn fetch(&self) -> Option<JoinHandle<()>> {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = UiState::Loading;
            return true;
        });

        if !started {
            tracing::debug!("Fetch ignored, a request is already in flight");
            return None;
        }

        // Built before spawning so it also fires if the task is dropped
        // before its first poll.
        let guard = SettleGuard {
            state: self.state.clone(),
        };
        let fetcher = self.fetcher.clone();
        let state = self.state.clone();
        return Some(tokio::spawn(async move {
            let _guard = guard;

            let outcome = match fetcher.fetch().await {
                Ok(question) => UiState::Success(question),
                Err(err) => {
                    tracing::error!(error = ?err, "Failed to fetch question");
                    UiState::Error(err.to_string())
                }
            };

            state.send_replace(outcome);
        }));
    }
}
