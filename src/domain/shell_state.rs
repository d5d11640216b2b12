use super::{
    chat_list_state::ChatListState,
    forms::{LoginForm, RegisterForm, ResetForm},
    open_chat_state::OpenChatState,
    session::{Screen, Session, SessionState, DEFAULT_PROFILE_NAME},
    text_input_state::TextInputState,
};

/// Which pane of the chat screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    ChatList,
    Search,
    MessageInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatScreenState {
    pub chat_list: ChatListState,
    pub open_chat: OpenChatState,
    pub search: TextInputState,
    pub message_input: TextInputState,
    pub active_pane: ActivePane,
}

/// Root UI state owned by the shell orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    session: SessionState,
    /// In-memory display name; never persisted.
    profile_name: String,
    login: LoginForm,
    register: RegisterForm,
    reset: ResetForm,
    chat: ChatScreenState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            session: SessionState::default(),
            profile_name: DEFAULT_PROFILE_NAME.to_owned(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            reset: ResetForm::default(),
            chat: ChatScreenState::default(),
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn set_profile_name(&mut self, name: impl Into<String>) {
        self.profile_name = name.into();
    }

    pub fn reset_profile_name(&mut self) {
        self.profile_name = DEFAULT_PROFILE_NAME.to_owned();
    }

    /// Login success: record the session and land on the chat screen.
    pub fn complete_login(&mut self, session: Session) {
        self.reset_profile_name();
        self.session.sign_in(session);
        self.login = LoginForm::default();
    }

    /// Logout: forget the session and the display name.
    pub fn complete_logout(&mut self) {
        self.reset_profile_name();
        self.session.sign_out();
    }

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn register(&self) -> &RegisterForm {
        &self.register
    }

    pub fn register_mut(&mut self) -> &mut RegisterForm {
        &mut self.register
    }

    pub fn reset(&self) -> &ResetForm {
        &self.reset
    }

    pub fn reset_mut(&mut self) -> &mut ResetForm {
        &mut self.reset
    }

    pub fn chat(&self) -> &ChatScreenState {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatScreenState {
        &mut self.chat
    }

    pub fn reset_chat(&mut self) {
        self.chat = ChatScreenState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::AuthScreen;

    #[test]
    fn default_state_is_running_and_restoring() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert!(state.session().is_restoring());
        assert_eq!(state.profile_name(), DEFAULT_PROFILE_NAME);
    }

    #[test]
    fn stop_marks_shell_not_running() {
        let mut state = ShellState::default();

        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn complete_login_selects_main_and_resets_profile() {
        let mut state = ShellState::default();
        state.set_profile_name("ayse");
        state.login_mut().email.insert_char('a');

        state.complete_login(Session::new("uid-1"));

        assert_eq!(state.screen(), Screen::Main);
        assert_eq!(state.profile_name(), DEFAULT_PROFILE_NAME);
        assert!(state.login().email.is_empty());
    }

    #[test]
    fn complete_logout_returns_to_login() {
        let mut state = ShellState::default();
        state.complete_login(Session::new("uid-1"));
        state.set_profile_name("ayse");

        state.complete_logout();

        assert_eq!(*state.session(), SessionState::LoggedOut(AuthScreen::Login));
        assert_eq!(state.profile_name(), DEFAULT_PROFILE_NAME);
    }
}
