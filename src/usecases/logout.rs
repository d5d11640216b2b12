use crate::domain::shell_state::ShellState;

use super::contracts::IdentityProvider;

const LOGOUT_COMPLETED: &str = "LOGOUT_COMPLETED";
const LOGOUT_FAILED: &str = "LOGOUT_FAILED";

/// Signs out. On success the shell returns to login with the default profile
/// name; on failure the error is logged and the user stays where they are.
pub fn logout(provider: &mut dyn IdentityProvider, state: &mut ShellState) {
    match provider.sign_out() {
        Ok(()) => {
            state.complete_logout();
            state.reset_chat();
            tracing::info!(code = LOGOUT_COMPLETED, "signed out");
        }
        Err(error) => {
            tracing::error!(
                code = LOGOUT_FAILED,
                provider_code = error.kind.code(),
                "sign out failed"
            );
        }
    }
}
