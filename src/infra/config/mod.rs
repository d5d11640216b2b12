mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, IdentityConfig, LogConfig};
pub use loader::load;
