//! Signed-in state and the screen it selects.
//!
//! The screen is derived from [`SessionState`] instead of being stored next to
//! it, so the chat screen can never be selected without a session.

use thiserror::Error;

/// Display name used until the user picks one during registration.
pub const DEFAULT_PROFILE_NAME: &str = "Kullanıcı";

/// Signed-in principal as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    uid: String,
}

impl Session {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }
}

/// Screens reachable without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreen {
    Login,
    Register,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Reset,
    Main,
}

impl Screen {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Reset => "reset",
            Self::Main => "main",
        }
    }
}

impl From<AuthScreen> for Screen {
    fn from(screen: AuthScreen) -> Self {
        match screen {
            AuthScreen::Login => Self::Login,
            AuthScreen::Register => Self::Register,
            AuthScreen::Reset => Self::Reset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("the chat screen requires a signed-in session")]
    SessionRequired,
    #[error("authentication screens are unavailable while signed in")]
    AlreadySignedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the first session notification from the provider.
    #[default]
    Restoring,
    LoggedOut(AuthScreen),
    /// A credential submission is in flight from the given screen.
    LoggingIn(AuthScreen),
    LoggedIn(Session),
}

impl SessionState {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Restoring => Screen::Login,
            Self::LoggedOut(screen) | Self::LoggingIn(screen) => (*screen).into(),
            Self::LoggedIn(_) => Screen::Main,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::LoggedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self, Self::Restoring)
    }

    pub fn is_logging_in(&self) -> bool {
        matches!(self, Self::LoggingIn(_))
    }

    /// Explicit navigation request coming from a screen.
    pub fn navigate(&mut self, target: Screen) -> Result<(), NavigationError> {
        let target = match (&*self, target) {
            (Self::LoggedIn(_), Screen::Main) => return Ok(()),
            (Self::LoggedIn(_), _) => return Err(NavigationError::AlreadySignedIn),
            (_, Screen::Main) => return Err(NavigationError::SessionRequired),
            (_, Screen::Login) => AuthScreen::Login,
            (_, Screen::Register) => AuthScreen::Register,
            (_, Screen::Reset) => AuthScreen::Reset,
        };

        *self = Self::LoggedOut(target);
        Ok(())
    }

    pub fn begin_sign_in(&mut self) {
        if let Self::LoggedOut(screen) = *self {
            *self = Self::LoggingIn(screen);
        }
    }

    pub fn sign_in_failed(&mut self) {
        if let Self::LoggingIn(screen) = *self {
            *self = Self::LoggedOut(screen);
        }
    }

    pub fn sign_in(&mut self, session: Session) {
        *self = Self::LoggedIn(session);
    }

    pub fn sign_out(&mut self) {
        *self = Self::LoggedOut(AuthScreen::Login);
    }
}
