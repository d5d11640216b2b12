use crate::domain::auth_error::{ProviderError, ProviderErrorKind};

use super::contracts::IdentityProvider;

pub const RESET_LOADING_LABEL: &str = "Gönderiliyor...";

pub fn send_reset_email(
    provider: &mut dyn IdentityProvider,
    email: &str,
) -> Result<(), ProviderError> {
    provider.send_password_reset_email(email)
}

// The fallback never echoes provider text.
pub fn reset_error_message(error: &ProviderError) -> &'static str {
    match error.kind {
        ProviderErrorKind::UserNotFound => "Bu e-posta adresine kayıtlı kullanıcı bulunamadı",
        ProviderErrorKind::InvalidEmail => "Geçersiz e-posta adresi",
        _ => "Parola sıfırlama e-postası gönderilirken bir hata oluştu",
    }
}
