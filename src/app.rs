use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, identity, infra, ui,
    usecases::{self, bootstrap},
};

const APP_STARTED: &str = "APP_STARTED";

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            tracing::info!(
                code = APP_STARTED,
                ui = ui::module_name(),
                domain = domain::module_name(),
                identity = identity::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                log_dir = %context.layout.log_dir.display(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
    }

    Ok(())
}
