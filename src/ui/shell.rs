use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

const SHELL_STARTED: &str = "SHELL_STARTED";

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        code = SHELL_STARTED,
        log_level = %context.config.logging.level,
        identity_configured = context.config.identity.is_configured(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    let result = run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    });
    orchestrator.stop();

    result
}

/// Draw, then run the queued submission, then wait for the next event. The
/// extra draw lets loading labels appear before a blocking provider call.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&crate::domain::shell_state::ShellState) -> Result<()>,
{
    orchestrator.start()?;

    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;
        orchestrator.process_pending()?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
