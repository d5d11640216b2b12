use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    forms::FormStatus,
    session::Screen,
    shell_state::{ActivePane, ShellState},
    text_input_state::TextInputState,
};

use super::{
    contracts::{IdentityProvider, ShellOrchestrator},
    conversations::{open_selected_chat, refresh_chat_list, ConversationRepository, Viewer},
    login::{self, LoginCommand},
    logout,
    register::{self, RegisterCommand},
    reset_password,
    send_message::{send_message, SendMessageCommand, SendMessageError},
    session_coordinator::SessionCoordinator,
};

const NAVIGATION_REJECTED: &str = "NAVIGATION_REJECTED";
const AUTH_SIGN_IN_FAILED: &str = "AUTH_SIGN_IN_FAILED";
const AUTH_SIGN_UP_FAILED: &str = "AUTH_SIGN_UP_FAILED";
const AUTH_RESET_FAILED: &str = "AUTH_RESET_FAILED";
const MESSAGE_SEND_FAILED: &str = "MESSAGE_SEND_FAILED";

/// Provider call queued by a submit; it runs after the loading frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    SignIn,
    Register,
    ResetPassword,
}

pub struct DefaultShellOrchestrator<P, R>
where
    P: IdentityProvider,
    R: ConversationRepository,
{
    state: ShellState,
    provider: P,
    repository: R,
    coordinator: SessionCoordinator,
    pending: Option<PendingAction>,
    /// Uid the chat screen was last loaded for.
    chat_loaded_for: Option<String>,
}

impl<P, R> DefaultShellOrchestrator<P, R>
where
    P: IdentityProvider,
    R: ConversationRepository,
{
    pub fn new(provider: P, repository: R) -> Self {
        Self {
            state: ShellState::default(),
            provider,
            repository,
            coordinator: SessionCoordinator::new(),
            pending: None,
            chat_loaded_for: None,
        }
    }

    fn sync_session(&mut self) {
        self.coordinator.poll(&mut self.state);
        self.sync_chat_screen();
    }

    // Entering the chat screen loads conversations; leaving it drops them.
    fn sync_chat_screen(&mut self) {
        let current_uid = self
            .state
            .session()
            .session()
            .map(|session| session.uid().to_owned());

        if current_uid == self.chat_loaded_for {
            return;
        }

        self.state.reset_chat();
        if current_uid.is_some() {
            refresh_chat_list(&self.repository, &mut self.state.chat_mut().chat_list);
        }
        self.chat_loaded_for = current_uid;
    }

    fn navigate(&mut self, target: Screen) {
        if let Err(error) = self.state.session_mut().navigate(target) {
            tracing::warn!(
                code = NAVIGATION_REJECTED,
                target = target.as_label(),
                error = %error,
                "navigation request rejected"
            );
            return;
        }

        match target {
            Screen::Login => *self.state.login_mut() = Default::default(),
            Screen::Register => *self.state.register_mut() = Default::default(),
            Screen::Reset => *self.state.reset_mut() = Default::default(),
            Screen::Main => {}
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        let session = self.state.session();
        if session.is_restoring() || session.is_logging_in() {
            return;
        }

        match self.state.screen() {
            Screen::Login => self.handle_login_key(&key),
            Screen::Register => self.handle_register_key(&key),
            Screen::Reset => self.handle_reset_key(&key),
            Screen::Main => self.handle_main_key(&key),
        }
    }

    fn handle_login_key(&mut self, key: &KeyInput) {
        if self.state.login().status.loading {
            return;
        }

        if key.ctrl {
            match key.key.as_str() {
                "r" => self.navigate(Screen::Register),
                "f" => self.navigate(Screen::Reset),
                #[cfg(any(test, all(feature = "dev-bypass", debug_assertions)))]
                "d" => super::dev_bypass::apply_dev_bypass(&mut self.state),
                _ => {}
            }
            return;
        }

        let form = self.state.login_mut();
        match key.key.as_str() {
            "tab" | "down" => form.focus_next(),
            "backtab" | "up" => form.focus_previous(),
            "enter" => {
                form.status.begin_submit();
                self.state.session_mut().begin_sign_in();
                self.pending = Some(PendingAction::SignIn);
            }
            _ => {
                edit_input(form.focused_input_mut(), key);
            }
        }
    }

    fn handle_register_key(&mut self, key: &KeyInput) {
        if self.state.register().status.loading || key.ctrl {
            return;
        }

        match key.key.as_str() {
            "esc" => self.navigate(Screen::Login),
            "tab" | "down" => self.state.register_mut().focus_next(),
            "backtab" | "up" => self.state.register_mut().focus_previous(),
            "enter" => self.submit_register(),
            _ => {
                edit_input(self.state.register_mut().focused_input_mut(), key);
            }
        }
    }

    fn submit_register(&mut self) {
        if !self.state.register().can_submit() {
            return;
        }

        let command = register_command(self.state.register());
        let form = self.state.register_mut();
        if let Err(error) = register::validate(&command) {
            form.status.fail(error.user_message());
            return;
        }

        form.status.begin_submit();
        self.state.session_mut().begin_sign_in();
        self.pending = Some(PendingAction::Register);
    }

    fn handle_reset_key(&mut self, key: &KeyInput) {
        if self.state.reset().status.loading || key.ctrl {
            return;
        }

        let sent = self.state.reset().success;
        match key.key.as_str() {
            "esc" => self.navigate(Screen::Login),
            "enter" if sent => self.navigate(Screen::Login),
            "enter" => {
                self.state.reset_mut().begin_submit();
                self.pending = Some(PendingAction::ResetPassword);
            }
            _ if sent => {}
            _ => {
                edit_input(&mut self.state.reset_mut().email, key);
            }
        }
    }

    fn handle_main_key(&mut self, key: &KeyInput) {
        if key.ctrl {
            return;
        }

        match self.state.chat().active_pane {
            ActivePane::ChatList => self.handle_chat_list_key(key),
            ActivePane::Search => self.handle_search_key(key),
            ActivePane::MessageInput => self.handle_message_input_key(key),
        }
    }

    fn handle_chat_list_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "q" => self.state.stop(),
            "j" | "down" => self.state.chat_mut().chat_list.select_next(),
            "k" | "up" => self.state.chat_mut().chat_list.select_previous(),
            "enter" => self.open_selected_chat(),
            "/" => self.state.chat_mut().active_pane = ActivePane::Search,
            "i" if self.state.chat().open_chat.is_open() => {
                self.state.chat_mut().active_pane = ActivePane::MessageInput;
            }
            "l" => logout::logout(&mut self.provider, &mut self.state),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: &KeyInput) {
        let chat = self.state.chat_mut();
        match key.key.as_str() {
            "esc" | "enter" => chat.active_pane = ActivePane::ChatList,
            "down" => chat.chat_list.select_next(),
            "up" => chat.chat_list.select_previous(),
            _ => {
                if edit_input(&mut chat.search, key) {
                    let query = chat.search.text().to_owned();
                    chat.chat_list.set_query(&query);
                }
            }
        }
    }

    fn handle_message_input_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "esc" => self.state.chat_mut().active_pane = ActivePane::ChatList,
            "enter" => self.send_current_message(),
            _ => {
                edit_input(&mut self.state.chat_mut().message_input, key);
            }
        }
    }

    fn open_selected_chat(&mut self) {
        let Some(uid) = self
            .state
            .session()
            .session()
            .map(|session| session.uid().to_owned())
        else {
            return;
        };
        let display_name = self.state.profile_name().to_owned();
        let viewer = Viewer {
            uid: &uid,
            display_name: &display_name,
        };

        open_selected_chat(&self.repository, self.state.chat_mut(), &viewer);
    }

    fn send_current_message(&mut self) {
        let chat = self.state.chat_mut();
        let command = SendMessageCommand {
            chat_id: chat.open_chat.chat_id().map(ToOwned::to_owned),
            text: chat.message_input.text().to_owned(),
        };

        match send_message(&self.repository, command) {
            Ok(_) => chat.message_input.clear(),
            Err(SendMessageError::EmptyMessage | SendMessageError::NoConversationSelected) => {}
            Err(error) => {
                tracing::warn!(code = MESSAGE_SEND_FAILED, error = %error, "message send failed");
            }
        }
    }

    fn run_sign_in(&mut self) {
        let form = self.state.login();
        let command = LoginCommand {
            email: form.email.text().to_owned(),
            password: form.password.text().to_owned(),
        };

        match login::sign_in(&mut self.provider, &command) {
            Ok(session) => self.state.complete_login(session),
            Err(error) => {
                tracing::warn!(
                    code = AUTH_SIGN_IN_FAILED,
                    provider_code = error.kind.code(),
                    "sign in failed"
                );
                self.state.session_mut().sign_in_failed();
                let form = self.state.login_mut();
                form.status.finish_submit();
                form.status.fail(login::login_error_message(&error));
            }
        }
    }

    fn run_register(&mut self) {
        let command = register_command(self.state.register());

        match register::register(&mut self.provider, &command) {
            Ok(registration) => {
                self.state.register_mut().status.finish_submit();
                self.state.set_profile_name(registration.username);
                self.navigate(Screen::Login);
            }
            Err(error) => {
                tracing::warn!(code = AUTH_SIGN_UP_FAILED, error = %error, "sign up failed");
                self.state.session_mut().sign_in_failed();
                fail_form(&mut self.state.register_mut().status, error.user_message());
            }
        }
    }

    fn run_reset_password(&mut self) {
        let email = self.state.reset().email.text().to_owned();
        let result = reset_password::send_reset_email(&mut self.provider, &email);

        let form = self.state.reset_mut();
        form.status.finish_submit();
        match result {
            Ok(()) => form.mark_sent(),
            Err(error) => {
                tracing::warn!(
                    code = AUTH_RESET_FAILED,
                    provider_code = error.kind.code(),
                    "password reset email failed"
                );
                form.status.fail(reset_password::reset_error_message(&error));
            }
        }
    }
}

impl<P, R> ShellOrchestrator for DefaultShellOrchestrator<P, R>
where
    P: IdentityProvider,
    R: ConversationRepository,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn start(&mut self) -> Result<()> {
        self.coordinator.start(&self.provider);
        self.sync_session();
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => {
                if key.ctrl && key.key == "c" {
                    self.state.stop();
                    return Ok(());
                }
                self.handle_key(key);
            }
        }

        self.sync_session();
        Ok(())
    }

    fn process_pending(&mut self) -> Result<()> {
        let Some(action) = self.pending.take() else {
            return Ok(());
        };

        match action {
            PendingAction::SignIn => self.run_sign_in(),
            PendingAction::Register => self.run_register(),
            PendingAction::ResetPassword => self.run_reset_password(),
        }

        self.sync_session();
        Ok(())
    }

    fn stop(&mut self) {
        self.coordinator.stop();
    }
}

fn register_command(form: &crate::domain::forms::RegisterForm) -> RegisterCommand {
    RegisterCommand {
        username: form.username.text().to_owned(),
        email: form.email.text().to_owned(),
        password: form.password.text().to_owned(),
    }
}

fn fail_form(status: &mut FormStatus, message: String) {
    status.finish_submit();
    status.fail(message);
}

/// Applies an editing key to a text field. Returns `true` when the key was an
/// edit.
fn edit_input(input: &mut TextInputState, key: &KeyInput) -> bool {
    match key.key.as_str() {
        "backspace" => input.delete_char_before(),
        "delete" => input.delete_char_at(),
        "left" => input.move_cursor_left(),
        "right" => input.move_cursor_right(),
        "home" => input.move_cursor_home(),
        "end" => input.move_cursor_end(),
        _ => match key.as_char() {
            Some(ch) => {
                input.insert_char(ch);
            }
            None => return false,
        },
    }

    true
}
