//! Field state for the login, registration and password reset screens.

use super::{password_policy::PasswordCheck, text_input_state::TextInputState};

/// Inline feedback shared by every form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormStatus {
    pub error: Option<String>,
    pub loading: bool,
}

impl FormStatus {
    pub fn begin_submit(&mut self) {
        self.error = None;
        self.loading = true;
    }

    pub fn finish_submit(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: TextInputState,
    pub password: TextInputState,
    pub focus: LoginField,
    pub status: FormStatus,
}

impl LoginForm {
    pub fn focused_input_mut(&mut self) -> &mut TextInputState {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus_next();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Username,
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub username: TextInputState,
    pub email: TextInputState,
    pub password: TextInputState,
    pub focus: RegisterField,
    pub status: FormStatus,
}

impl RegisterForm {
    pub fn password_check(&self) -> PasswordCheck {
        PasswordCheck::evaluate(self.password.text())
    }

    /// Submit stays disabled while a request is in flight or the password
    /// does not meet the policy.
    pub fn can_submit(&self) -> bool {
        !self.status.loading && self.password_check().is_valid()
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInputState {
        match self.focus {
            RegisterField::Username => &mut self.username,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            RegisterField::Username => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Username,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            RegisterField::Username => RegisterField::Password,
            RegisterField::Email => RegisterField::Username,
            RegisterField::Password => RegisterField::Email,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResetForm {
    pub email: TextInputState,
    pub status: FormStatus,
    /// Set once the reset email has been sent.
    pub success: bool,
}

impl ResetForm {
    pub fn begin_submit(&mut self) {
        self.success = false;
        self.status.begin_submit();
    }

    pub fn mark_sent(&mut self) {
        self.success = true;
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_focus_cycles_between_fields() {
        let mut form = LoginForm::default();

        form.focus_next();
        assert_eq!(form.focus, LoginField::Password);

        form.focus_next();
        assert_eq!(form.focus, LoginField::Email);
    }

    #[test]
    fn login_typing_goes_to_focused_field() {
        let mut form = LoginForm::default();
        form.focused_input_mut().insert_char('a');
        form.focus_next();
        form.focused_input_mut().insert_char('b');

        assert_eq!(form.email.text(), "a");
        assert_eq!(form.password.text(), "b");
    }

    #[test]
    fn register_focus_wraps_in_both_directions() {
        let mut form = RegisterForm::default();

        form.focus_previous();
        assert_eq!(form.focus, RegisterField::Password);

        form.focus_next();
        assert_eq!(form.focus, RegisterField::Username);
    }

    #[test]
    fn register_submit_requires_valid_password() {
        let mut form = RegisterForm {
            password: TextInputState::from_text("Abcdefg!"),
            ..RegisterForm::default()
        };
        assert!(!form.can_submit());

        form.password = TextInputState::from_text("Abcdefg1!");
        assert!(form.can_submit());

        form.status.loading = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn begin_submit_clears_previous_error() {
        let mut status = FormStatus::default();
        status.fail("Parola hatalı");

        status.begin_submit();

        assert_eq!(status.error, None);
        assert!(status.loading);
    }

    #[test]
    fn reset_mark_sent_clears_email() {
        let mut form = ResetForm {
            email: TextInputState::from_text("ali@example.com"),
            ..ResetForm::default()
        };

        form.begin_submit();
        form.mark_sent();

        assert!(form.success);
        assert!(form.email.is_empty());
    }
}
