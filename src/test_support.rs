use std::sync::{Mutex, MutexGuard};

use crate::{
    domain::{auth_error::ProviderError, session::Session},
    identity::session_notifier::{SessionNotifier, SessionSubscription},
    usecases::contracts::IdentityProvider,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
    SignOut,
    ResetEmail { email: String },
}

/// Scripted identity provider. Successful sign-in, sign-up and sign-out are
/// published to subscribers the way the real adapter does.
pub struct StubIdentityProvider {
    pub sign_in_result: Result<Session, ProviderError>,
    pub sign_up_result: Result<Session, ProviderError>,
    pub sign_out_result: Result<(), ProviderError>,
    pub reset_result: Result<(), ProviderError>,
    pub calls: Vec<ProviderCall>,
    pub notifier: SessionNotifier,
}

impl Default for StubIdentityProvider {
    fn default() -> Self {
        Self {
            sign_in_result: Ok(Session::new("uid-1")),
            sign_up_result: Ok(Session::new("uid-new")),
            sign_out_result: Ok(()),
            reset_result: Ok(()),
            calls: Vec::new(),
            notifier: SessionNotifier::new(),
        }
    }
}

impl IdentityProvider for StubIdentityProvider {
    fn sign_in_with_password(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Session, ProviderError> {
        self.calls.push(ProviderCall::SignIn {
            email: email.to_owned(),
            password: password.to_owned(),
        });
        if let Ok(session) = &self.sign_in_result {
            self.notifier.publish(Some(session.clone()));
        }
        self.sign_in_result.clone()
    }

    fn sign_up_with_password(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Session, ProviderError> {
        self.calls.push(ProviderCall::SignUp {
            email: email.to_owned(),
            password: password.to_owned(),
        });
        if let Ok(session) = &self.sign_up_result {
            self.notifier.publish(Some(session.clone()));
        }
        self.sign_up_result.clone()
    }

    fn sign_out(&mut self) -> Result<(), ProviderError> {
        self.calls.push(ProviderCall::SignOut);
        if self.sign_out_result.is_ok() {
            self.notifier.publish(None);
        }
        self.sign_out_result.clone()
    }

    fn send_password_reset_email(&mut self, email: &str) -> Result<(), ProviderError> {
        self.calls.push(ProviderCall::ResetEmail {
            email: email.to_owned(),
        });
        self.reset_result.clone()
    }

    fn subscribe_session_changes(&self) -> SessionSubscription {
        self.notifier.subscribe()
    }
}
