use serde::Deserialize;

use crate::infra::config::{AppConfig, IdentityConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub identity: Option<FileIdentityConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(identity) = self.identity {
            identity.merge_into(&mut config.identity);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file_prefix: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file_prefix) = self.file_prefix {
            config.file_prefix = file_prefix;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileIdentityConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub auth_domain: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl FileIdentityConfig {
    fn merge_into(self, config: &mut IdentityConfig) {
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }

        if let Some(project_id) = self.project_id {
            config.project_id = project_id;
        }

        if let Some(auth_domain) = self.auth_domain {
            config.auth_domain = auth_domain;
        }

        if let Some(base_url) = self.base_url {
            config.base_url = base_url.trim_end_matches('/').to_owned();
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
    }
}
