use serde::{Deserialize, Serialize};

const PLACEHOLDER_API_KEY: &str = "replace-me";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file_prefix: "sohbet.log".to_owned(),
        }
    }
}

/// Connection descriptor for the hosted identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_domain: String,
    pub base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_owned(),
            project_id: String::new(),
            auth_domain: String::new(),
            base_url: "https://identitytoolkit.googleapis.com".to_owned(),
            request_timeout_ms: 10_000,
        }
    }
}

impl IdentityConfig {
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identity_config_is_not_configured() {
        assert!(!IdentityConfig::default().is_configured());
    }

    #[test]
    fn real_api_key_marks_identity_configured() {
        let config = IdentityConfig {
            api_key: "AIza-test".to_owned(),
            ..IdentityConfig::default()
        };

        assert!(config.is_configured());
    }
}
