use thiserror::Error;

/// Error categories reported by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    InvalidCredential,
    UserNotFound,
    WrongPassword,
    InvalidEmail,
    EmailAlreadyInUse,
    WeakPassword,
    TooManyRequests,
    UserDisabled,
    NetworkRequestFailed,
    Other,
}

impl ProviderErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidCredential => "auth/invalid-credential",
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::InvalidEmail => "auth/invalid-email",
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::TooManyRequests => "auth/too-many-requests",
            Self::UserDisabled => "auth/user-disabled",
            Self::NetworkRequestFailed => "auth/network-request-failed",
            Self::Other => "auth/internal-error",
        }
    }
}

/// A categorized provider failure carrying the provider's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code})", code = .kind.code())]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
