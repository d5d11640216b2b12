use anyhow::Result;

use crate::{
    domain::{auth_error::ProviderError, events::AppEvent, session::Session, shell_state::ShellState},
    identity::session_notifier::SessionSubscription,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    /// Starts session coordination; called once before the first frame.
    fn start(&mut self) -> Result<()>;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
    /// Runs the submission queued by the last event, after a redraw.
    fn process_pending(&mut self) -> Result<()>;
    /// Releases the session subscription; called once at teardown.
    fn stop(&mut self);
}

/// Hosted identity provider operations.
pub trait IdentityProvider {
    fn sign_in_with_password(&mut self, email: &str, password: &str)
        -> Result<Session, ProviderError>;
    fn sign_up_with_password(&mut self, email: &str, password: &str)
        -> Result<Session, ProviderError>;
    fn sign_out(&mut self) -> Result<(), ProviderError>;
    fn send_password_reset_email(&mut self, email: &str) -> Result<(), ProviderError>;
    fn subscribe_session_changes(&self) -> SessionSubscription;
}
