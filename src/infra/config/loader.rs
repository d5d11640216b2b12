use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads `path` (or `./config.toml`) over the built-in defaults.
/// A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[identity]
api_key = "AIza-test"
project_id = "sohbet-dev"
base_url = "http://127.0.0.1:9099/"
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_prefix, "sohbet.log");
        assert_eq!(config.identity.api_key, "AIza-test");
        assert_eq!(config.identity.project_id, "sohbet-dev");
        assert_eq!(config.identity.base_url, "http://127.0.0.1:9099");
        assert_eq!(config.identity.request_timeout_ms, 10_000);
    }

    #[test]
    fn rejects_malformed_file_with_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[identity]\nrequest_timeout_ms = \"soon\"\n")
            .expect("must write test config");

        let err = load(Some(&config_path)).expect_err("config must fail");

        assert!(matches!(err, AppError::ConfigParse { .. }));
    }
}
