//! Identity provider integration: REST account client plus the in-process
//! session-change stream.

mod rest;
pub mod session_notifier;

use crate::{
    domain::{
        auth_error::{ProviderError, ProviderErrorKind},
        session::Session,
    },
    infra::{
        config::IdentityConfig,
        secrets::{redact_text, sanitize_provider_code},
    },
    usecases::contracts::IdentityProvider,
};

use rest::RestAuthBackend;
use session_notifier::{SessionNotifier, SessionSubscription};

const IDENTITY_BACKEND_READY: &str = "IDENTITY_BACKEND_READY";
const IDENTITY_NOT_CONFIGURED: &str = "IDENTITY_NOT_CONFIGURED";
const IDENTITY_BACKEND_INIT_FAILED: &str = "IDENTITY_BACKEND_INIT_FAILED";
const IDENTITY_CALL_FAILED: &str = "IDENTITY_CALL_FAILED";
const IDENTITY_SIGNED_IN: &str = "IDENTITY_SIGNED_IN";
const IDENTITY_SIGNED_OUT: &str = "IDENTITY_SIGNED_OUT";

const OFFLINE_MESSAGE: &str = "identity backend is not configured";

/// Returns the identity module name for smoke checks.
pub fn module_name() -> &'static str {
    "identity"
}

/// Identity provider used by the shell. Without a configured backend every
/// remote operation fails with `NetworkRequestFailed`.
pub struct IdentityAdapter {
    backend: Option<RestAuthBackend>,
    notifier: SessionNotifier,
}

impl IdentityAdapter {
    pub fn connect(config: &IdentityConfig) -> Self {
        if !config.is_configured() {
            tracing::warn!(
                code = IDENTITY_NOT_CONFIGURED,
                "identity api key is missing; authentication is offline"
            );
            return Self::stub();
        }

        match RestAuthBackend::new(config) {
            Ok(backend) => {
                tracing::info!(
                    code = IDENTITY_BACKEND_READY,
                    project_id = %config.project_id,
                    auth_domain = %config.auth_domain,
                    "identity backend ready"
                );
                Self {
                    backend: Some(backend),
                    notifier: SessionNotifier::new(),
                }
            }
            Err(error) => {
                tracing::warn!(
                    code = IDENTITY_BACKEND_INIT_FAILED,
                    error = %redact_text(&error.message),
                    "identity backend failed to initialize; authentication is offline"
                );
                Self::stub()
            }
        }
    }

    pub fn stub() -> Self {
        Self {
            backend: None,
            notifier: SessionNotifier::new(),
        }
    }

    fn backend(&self) -> Result<&RestAuthBackend, ProviderError> {
        self.backend.as_ref().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::NetworkRequestFailed, OFFLINE_MESSAGE)
        })
    }

    fn record_session(&self, operation: &'static str, result: &Result<Session, ProviderError>) {
        match result {
            Ok(session) => {
                tracing::info!(code = IDENTITY_SIGNED_IN, operation, "session established");
                self.notifier.publish(Some(session.clone()));
            }
            Err(error) => log_failure(operation, error),
        }
    }
}

impl IdentityProvider for IdentityAdapter {
    fn sign_in_with_password(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Session, ProviderError> {
        let result = self
            .backend()
            .and_then(|backend| backend.sign_in(email, password));
        self.record_session("sign_in", &result);
        result
    }

    fn sign_up_with_password(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Session, ProviderError> {
        let result = self
            .backend()
            .and_then(|backend| backend.sign_up(email, password));
        self.record_session("sign_up", &result);
        result
    }

    // Tokens are not kept, so signing out is purely local.
    fn sign_out(&mut self) -> Result<(), ProviderError> {
        tracing::info!(code = IDENTITY_SIGNED_OUT, "session cleared");
        self.notifier.publish(None);
        Ok(())
    }

    fn send_password_reset_email(&mut self, email: &str) -> Result<(), ProviderError> {
        let result = self
            .backend()
            .and_then(|backend| backend.send_password_reset(email));
        if let Err(error) = &result {
            log_failure("send_password_reset", error);
        }
        result
    }

    fn subscribe_session_changes(&self) -> SessionSubscription {
        self.notifier.subscribe()
    }
}

fn log_failure(operation: &'static str, error: &ProviderError) {
    tracing::warn!(
        code = IDENTITY_CALL_FAILED,
        operation,
        provider_code = sanitize_provider_code(error.kind.code()),
        message = %redact_text(&error.message),
        "identity provider call failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::session_notifier::SessionChange;

    #[test]
    fn unconfigured_identity_falls_back_to_offline_stub() {
        let mut adapter = IdentityAdapter::connect(&IdentityConfig::default());

        let error = adapter
            .sign_in_with_password("a@b.co", "Abcdef1!")
            .expect_err("offline adapter cannot sign in");

        assert_eq!(error.kind, ProviderErrorKind::NetworkRequestFailed);
        assert_eq!(error.message, OFFLINE_MESSAGE);
    }

    #[test]
    fn offline_reset_and_sign_up_fail_without_publishing() {
        let mut adapter = IdentityAdapter::stub();
        let subscription = adapter.subscribe_session_changes();
        let _ = subscription.try_next();

        assert!(adapter.sign_up_with_password("a@b.co", "Abcdef1!").is_err());
        assert!(adapter.send_password_reset_email("a@b.co").is_err());

        assert_eq!(subscription.try_next(), Ok(None));
    }

    #[test]
    fn sign_out_publishes_signed_out() {
        let mut adapter = IdentityAdapter::stub();
        let subscription = adapter.subscribe_session_changes();
        assert_eq!(subscription.try_next(), Ok(Some(SessionChange::SignedOut)));

        adapter.sign_out().expect("local sign out succeeds");

        assert_eq!(subscription.try_next(), Ok(Some(SessionChange::SignedOut)));
    }

    #[test]
    fn successful_session_is_published_to_subscribers() {
        let adapter = IdentityAdapter::stub();
        let subscription = adapter.subscribe_session_changes();
        let _ = subscription.try_next();

        adapter.record_session("sign_in", &Ok(Session::new("uid-3")));

        assert_eq!(
            subscription.try_next(),
            Ok(Some(SessionChange::SignedIn(Session::new("uid-3"))))
        );
    }
}
