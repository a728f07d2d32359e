use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::{AuthAction, Dispatcher};

/// Owns the single timer that logs the user out when the token expires.
#[derive(Debug)]
pub struct AuthService {
    dispatcher: Dispatcher,
    logout_timer: Option<JoinHandle<()>>,
}

impl AuthService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            logout_timer: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn set_logout_timer(&mut self, expiration: Duration) {
        self.clear_logout_timer();
        debug!(seconds = expiration.as_secs(), "logout timer set");

        let dispatcher = self.dispatcher.clone();
        self.logout_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(expiration).await;
            info!("session expired, logging out");
            dispatcher.dispatch(AuthAction::Logout);
        }));
    }

    pub fn clear_logout_timer(&mut self) {
        if let Some(timer) = self.logout_timer.take() {
            timer.abort();
        }
    }

    pub fn has_logout_timer(&self) -> bool {
        self.logout_timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for AuthService {
    fn drop(&mut self) {
        self.clear_logout_timer();
    }
}
