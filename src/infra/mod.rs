//! Infrastructure layer: config, logging, storage and local data sources.

pub mod config;
pub mod error;
pub mod logging;
pub mod mock_conversations;
pub mod secrets;
pub mod storage_layout;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
