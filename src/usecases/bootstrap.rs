use std::path::Path;

use crate::{
    identity::IdentityAdapter,
    infra::{
        self, error::AppError, mock_conversations::MockConversationRepository,
        storage_layout::StorageLayout,
    },
    ui::event_source::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let mut context = build_context(config_path)?;
    context.layout.ensure_dirs()?;

    let guard = infra::logging::init(&context.config.logging, &context.layout)?;
    context.attach_log_guard(guard);

    Ok(context)
}

/// Wires the identity adapter and the mock conversation repository into the
/// shell.
pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let identity = IdentityAdapter::connect(&context.config.identity);

    ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(DefaultShellOrchestrator::new(
            identity,
            MockConversationRepository,
        )),
    }
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}
