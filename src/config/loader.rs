//! Configuration loading from disk and the environment.
//!
//! File values are applied first, then environment overrides
//! (`TELEGRAM_BOT_TOKEN`, `OPENAI_API_KEY`, `OPENAI_BASE_URL`), then
//! validation. Running without a file is supported: defaults plus the env
//! credentials are a complete configuration.

use std::fs;
use std::path::Path;

use crate::config::schema::GuardConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load, override from the environment, and validate the configuration.
pub fn load_config(path: Option<&Path>) -> Result<GuardConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => GuardConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply the environment contract on top of file values.
fn apply_env_overrides(config: &mut GuardConfig) {
    if let Some(token) = non_empty_env("TELEGRAM_BOT_TOKEN") {
        config.telegram.bot_token = token;
    }
    if let Some(key) = non_empty_env("OPENAI_API_KEY") {
        config.openai.api_key = key;
    }
    if let Some(base) = non_empty_env("OPENAI_BASE_URL") {
        config.openai.api_base = base;
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = GuardConfig::default();
        config.telegram.bot_token = "from-file".to_string();
        config.openai.api_base = "https://file.example/v1".to_string();

        std::env::set_var("TELEGRAM_BOT_TOKEN", "from-env");
        std::env::set_var("OPENAI_BASE_URL", "https://env.example/v1");
        apply_env_overrides(&mut config);
        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("OPENAI_BASE_URL");

        assert_eq!(config.telegram.bot_token, "from-env");
        assert_eq!(config.openai.api_base, "https://env.example/v1");
    }

    #[test]
    fn test_empty_env_var_does_not_override() {
        let mut config = GuardConfig::default();
        config.openai.api_key = "from-file".to_string();

        std::env::set_var("OPENAI_API_KEY", "");
        apply_env_overrides(&mut config);
        std::env::remove_var("OPENAI_API_KEY");

        assert_eq!(config.openai.api_key, "from-file");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Some(Path::new("/nonexistent/guard.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validation_errors_rendered_together() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyBotToken,
            ValidationError::EmptyApiKey,
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("telegram.bot_token"));
        assert!(rendered.contains("openai.api_key"));
    }
}
