//! Local sign-in shortcut for development builds. Never reaches the provider.

use crate::domain::{session::Session, shell_state::ShellState};

pub const DEV_BYPASS_SESSION_ID: &str = "dev-test-user-123";

const DEV_BYPASS_USED: &str = "DEV_BYPASS_USED";

pub fn apply_dev_bypass(state: &mut ShellState) {
    tracing::warn!(
        code = DEV_BYPASS_USED,
        session_id = DEV_BYPASS_SESSION_ID,
        "development login bypass used"
    );
    state.complete_login(Session::new(DEV_BYPASS_SESSION_ID));
}
