//! Maps identity-provider session notifications onto the shell state.

use crate::{
    domain::shell_state::ShellState,
    identity::session_notifier::{SessionChange, SessionSubscription},
};

use super::contracts::IdentityProvider;

const SESSION_COORDINATOR_STARTED: &str = "SESSION_COORDINATOR_STARTED";
const SESSION_COORDINATOR_STOPPED: &str = "SESSION_COORDINATOR_STOPPED";
const SESSION_SUBSCRIPTION_CLOSED: &str = "SESSION_SUBSCRIPTION_CLOSED";

/// Owns the only long-lived subscription of the shell.
#[derive(Debug, Default)]
pub struct SessionCoordinator {
    subscription: Option<SessionSubscription>,
}

impl SessionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribes once; later calls keep the existing subscription.
    pub fn start(&mut self, provider: &dyn IdentityProvider) {
        if self.subscription.is_some() {
            return;
        }

        self.subscription = Some(provider.subscribe_session_changes());
        tracing::debug!(code = SESSION_COORDINATOR_STARTED, "session coordinator started");
    }

    /// Applies every pending notification. Returns `true` when any arrived.
    pub fn poll(&mut self, state: &mut ShellState) -> bool {
        let Some(subscription) = &self.subscription else {
            return false;
        };

        let mut changed = false;
        let closed = loop {
            match subscription.try_next() {
                Ok(Some(change)) => {
                    apply_session_change(state, change);
                    changed = true;
                }
                Ok(None) => break false,
                Err(_) => break true,
            }
        };

        if closed {
            tracing::warn!(
                code = SESSION_SUBSCRIPTION_CLOSED,
                "session change stream closed"
            );
            self.subscription = None;
        }

        changed
    }

    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::debug!(code = SESSION_COORDINATOR_STOPPED, "session coordinator stopped");
        }
    }
}

impl Drop for SessionCoordinator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Principal present selects the chat screen; absent selects login.
pub fn apply_session_change(state: &mut ShellState, change: SessionChange) {
    match change {
        SessionChange::SignedIn(session) => state.session_mut().sign_in(session),
        SessionChange::SignedOut => {
            if state.session().session().is_some() {
                state.reset_profile_name();
            }
            state.session_mut().sign_out();
        }
    }
}
