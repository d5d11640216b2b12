//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod conversations;
#[cfg(any(test, all(feature = "dev-bypass", debug_assertions)))]
pub mod dev_bypass;
pub mod login;
pub mod logout;
pub mod register;
pub mod reset_password;
pub mod send_message;
pub mod session_coordinator;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
