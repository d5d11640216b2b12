//! UI layer: rendering and interaction entry points (TUI).

mod auth_view;
mod chat_view;
pub mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod text_input;
mod view;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
