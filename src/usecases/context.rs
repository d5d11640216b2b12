use tracing_appender::non_blocking::WorkerGuard;

use crate::infra::{config::AppConfig, storage_layout::StorageLayout};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub layout: StorageLayout,
    /// Flushes the log file on drop; lives as long as the app.
    log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, layout: StorageLayout) -> Self {
        Self {
            config,
            layout,
            log_guard: None,
        }
    }

    pub fn attach_log_guard(&mut self, guard: WorkerGuard) {
        self.log_guard = Some(guard);
    }
}
