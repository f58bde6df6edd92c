//! Latest-state publisher for the recipe list.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::outcome::Outcome;
use crate::repository::RecipeRepository;
use crate::types::Recipe;

/// Presentation-facing state of the recipe list.
///
/// The richer [`Outcome`] classification collapses into a single message
/// string here; nothing past this boundary needs the distinction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// A fetch attempt is in flight. Also the initial state.
    Loading,
    Loaded(Vec<Recipe>),
    Failed(String),
}

/// Publishes the latest [`FeedState`] to any number of observers.
///
/// One fetch attempt starts at creation; further attempts start on
/// [`refresh`](RecipeFeed::refresh). Observers see transitions in order
/// through a watch channel; a late subscriber sees only the current state.
/// Each attempt publishes `Loading` first and exactly one terminal state
/// after.
pub struct RecipeFeed {
    repository: Arc<RecipeRepository>,
    state: Arc<watch::Sender<FeedState>>,
    attempt: Mutex<Option<JoinHandle<()>>>,
}

impl RecipeFeed {
    /// Create the feed and start the initial fetch attempt.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(repository: Arc<RecipeRepository>) -> Self {
        let (tx, _rx) = watch::channel(FeedState::Loading);
        let feed = Self {
            repository,
            state: Arc::new(tx),
            attempt: Mutex::new(None),
        };
        feed.refresh();
        feed
    }

    /// Subscribe to state transitions. The receiver starts at the current
    /// state.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Trigger a fetch attempt.
    ///
    /// A trigger while an attempt is outstanding is ignored. Returns
    /// whether a new attempt started.
    pub fn refresh(&self) -> bool {
        let mut attempt = self.attempt.lock().unwrap();
        if let Some(handle) = attempt.as_ref() {
            if !handle.is_finished() {
                tracing::debug!("refresh ignored, fetch already in flight");
                return false;
            }
        }

        self.state.send_replace(FeedState::Loading);

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        *attempt = Some(tokio::spawn(async move {
            let next = match repository.get_recipes().await {
                Outcome::Success(recipes) => FeedState::Loaded(recipes),
                Outcome::Error { message, .. } => FeedState::Failed(
                    message.unwrap_or_else(|| "Unknown error occurred".to_string()),
                ),
                Outcome::NetworkUnavailable => {
                    FeedState::Failed("Network error occurred".to_string())
                }
            };
            state.send_replace(next);
        }));
        true
    }
}

impl Drop for RecipeFeed {
    fn drop(&mut self) {
        // Abandon an outstanding attempt so nothing publishes after teardown.
        if let Ok(mut attempt) = self.attempt.lock() {
            if let Some(handle) = attempt.take() {
                handle.abort();
            }
        }
    }
}
