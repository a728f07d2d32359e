//! Action queue and application state.

pub mod actions;
pub mod reducers;
pub mod state;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::warn;

pub use actions::{Action, AuthAction, Credentials, RecipesAction, ShoppingListAction};
pub use state::{AppState, AuthState, ShoppingListState};

/// Handle for enqueueing actions from outside the store, e.g. timers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn dispatch(&self, action: impl Into<Action>) {
        if self.tx.send(action.into()).is_err() {
            warn!("store is gone, action dropped");
        }
    }
}

pub struct Store {
    state: AppState,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
}

impl Store {
    pub fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            state: AppState::default(),
            tx,
            rx,
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            tx: self.tx.clone(),
        }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        // The store holds its own sender, so the queue cannot be closed here.
        let _ = self.tx.send(action.into());
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn reduce(&mut self, action: &Action) {
        reducers::app_reducer(&mut self.state, action);
    }

    /// Next queued action, if one is ready.
    pub fn try_next(&mut self) -> Option<Action> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next action.
    pub async fn next(&mut self) -> Option<Action> {
        self.rx.recv().await
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
