//! Domain layer: core entities and screen state.

pub mod auth_error;
pub mod chat;
pub mod chat_list_state;
pub mod events;
pub mod forms;
pub mod message;
pub mod open_chat_state;
pub mod password_policy;
pub mod session;
pub mod shell_state;
pub mod text_input_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
