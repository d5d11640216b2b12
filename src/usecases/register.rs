//! Account creation: local validation, then one sign-up call.

use thiserror::Error;

use crate::domain::{
    auth_error::{ProviderError, ProviderErrorKind},
    password_policy::PasswordCheck,
    session::Session,
};

use super::contracts::IdentityProvider;

pub const REGISTER_LOADING_LABEL: &str = "Hesap oluşturuluyor...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("username is empty")]
    UsernameRequired,
    #[error("password does not meet the policy")]
    PasswordPolicy(PasswordCheck),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl RegisterError {
    pub fn user_message(&self) -> String {
        match self {
            Self::UsernameRequired => "Kullanıcı adı boş olamaz".to_owned(),
            Self::PasswordPolicy(_) => "Parola gereksinimleri karşılanmıyor".to_owned(),
            Self::Provider(error) => match error.kind {
                ProviderErrorKind::EmailAlreadyInUse => {
                    "Bu e-posta adresi zaten kullanılıyor".to_owned()
                }
                ProviderErrorKind::InvalidEmail => "Geçersiz e-posta adresi".to_owned(),
                ProviderErrorKind::WeakPassword => "Parola çok zayıf".to_owned(),
                _ => format!("Kayıt olurken bir hata oluştu: {}", error.message),
            },
        }
    }
}

/// A created account together with the display name chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub session: Session,
    pub username: String,
}

pub fn validate(command: &RegisterCommand) -> Result<(), RegisterError> {
    if command.username.trim().is_empty() {
        return Err(RegisterError::UsernameRequired);
    }

    let check = PasswordCheck::evaluate(&command.password);
    if !check.is_valid() {
        return Err(RegisterError::PasswordPolicy(check));
    }

    Ok(())
}

pub fn register(
    provider: &mut dyn IdentityProvider,
    command: &RegisterCommand,
) -> Result<Registration, RegisterError> {
    validate(command)?;

    let session = provider.sign_up_with_password(&command.email, &command.password)?;

    Ok(Registration {
        session,
        username: command.username.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ProviderCall, StubIdentityProvider};

    fn command(username: &str, password: &str) -> RegisterCommand {
        RegisterCommand {
            username: username.to_owned(),
            email: "ayse@example.com".to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn blank_username_is_rejected_without_provider_call() {
        let mut provider = StubIdentityProvider::default();

        let error = register(&mut provider, &command("   ", "Abcdef1!"))
            .expect_err("blank username must fail");

        assert_eq!(error, RegisterError::UsernameRequired);
        assert_eq!(error.user_message(), "Kullanıcı adı boş olamaz");
        assert!(provider.calls.is_empty());
    }

    #[test]
    fn username_is_checked_before_password() {
        let error = validate(&command("", "short")).expect_err("both fields invalid");

        assert_eq!(error, RegisterError::UsernameRequired);
    }

    #[test]
    fn password_without_digit_is_rejected_without_provider_call() {
        let mut provider = StubIdentityProvider::default();

        let error = register(&mut provider, &command("ayse", "Abcdefg!"))
            .expect_err("policy must fail");

        match &error {
            RegisterError::PasswordPolicy(check) => assert!(!check.has_number),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.user_message(), "Parola gereksinimleri karşılanmıyor");
        assert!(provider.calls.is_empty());
    }

    #[test]
    fn valid_registration_signs_up_once_and_keeps_username_as_typed() {
        let mut provider = StubIdentityProvider::default();

        let registration =
            register(&mut provider, &command("  Ayşe  ", "Abcdef1!")).expect("registration");

        assert_eq!(registration.username, "  Ayşe  ");
        assert_eq!(registration.session.uid(), "uid-new");
        assert_eq!(
            provider.calls,
            vec![ProviderCall::SignUp {
                email: "ayse@example.com".to_owned(),
                password: "Abcdef1!".to_owned(),
            }]
        );
    }

    #[test]
    fn provider_errors_map_to_register_messages() {
        let cases = [
            (
                ProviderErrorKind::EmailAlreadyInUse,
                "Bu e-posta adresi zaten kullanılıyor".to_owned(),
            ),
            (ProviderErrorKind::InvalidEmail, "Geçersiz e-posta adresi".to_owned()),
            (ProviderErrorKind::WeakPassword, "Parola çok zayıf".to_owned()),
            (
                ProviderErrorKind::NetworkRequestFailed,
                "Kayıt olurken bir hata oluştu: offline".to_owned(),
            ),
        ];

        for (kind, expected) in cases {
            let mut provider = StubIdentityProvider {
                sign_up_result: Err(ProviderError::new(kind, "offline")),
                ..StubIdentityProvider::default()
            };

            let error = register(&mut provider, &command("ayse", "Abcdef1!"))
                .expect_err("provider failure");

            assert_eq!(error.user_message(), expected);
        }
    }
}
