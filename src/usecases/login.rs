use crate::domain::{
    auth_error::{ProviderError, ProviderErrorKind},
    session::Session,
};

use super::contracts::IdentityProvider;

pub const LOGIN_LOADING_LABEL: &str = "Giriş yapılıyor...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// One sign-in call; credentials are passed through untouched.
pub fn sign_in(
    provider: &mut dyn IdentityProvider,
    command: &LoginCommand,
) -> Result<Session, ProviderError> {
    provider.sign_in_with_password(&command.email, &command.password)
}

pub fn login_error_message(error: &ProviderError) -> String {
    match error.kind {
        ProviderErrorKind::InvalidCredential => "E-posta veya parola hatalı".to_owned(),
        ProviderErrorKind::UserNotFound => "Kullanıcı bulunamadı".to_owned(),
        ProviderErrorKind::WrongPassword => "Parola hatalı".to_owned(),
        ProviderErrorKind::InvalidEmail => "Geçersiz e-posta adresi".to_owned(),
        _ => format!("Giriş yapılırken bir hata oluştu: {}", error.message),
    }
}
