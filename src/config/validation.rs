//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check credentials are present and addresses/URLs parse
//! - Validate value ranges (timeouts > 0, temperature within bounds)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GuardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GuardConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("telegram.bot_token must not be empty (set TELEGRAM_BOT_TOKEN)")]
    EmptyBotToken,

    #[error("openai.api_key must not be empty (set OPENAI_API_KEY)")]
    EmptyApiKey,

    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("{field} '{value}' is not a valid URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("analysis.temperature must be within [0, 2], got {0}")]
    TemperatureOutOfRange(f32),

    #[error("analysis.excerpt_chars must be greater than zero")]
    ZeroExcerpt,

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.telegram.bot_token.is_empty() {
        errors.push(ValidationError::EmptyBotToken);
    }
    if config.openai.api_key.is_empty() {
        errors.push(ValidationError::EmptyApiKey);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    check_url(&mut errors, "telegram.api_base", &config.telegram.api_base);
    check_url(&mut errors, "openai.api_base", &config.openai.api_base);

    if !(0.0..=2.0).contains(&config.analysis.temperature) {
        errors.push(ValidationError::TemperatureOutOfRange(
            config.analysis.temperature,
        ));
    }
    if config.analysis.excerpt_chars == 0 {
        errors.push(ValidationError::ZeroExcerpt);
    }

    check_timeout(
        &mut errors,
        "listener.request_timeout_secs",
        config.listener.request_timeout_secs,
    );
    check_timeout(
        &mut errors,
        "telegram.request_timeout_secs",
        config.telegram.request_timeout_secs,
    );
    check_timeout(
        &mut errors,
        "openai.request_timeout_secs",
        config.openai.request_timeout_secs,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if url::Url::parse(value).is_err() {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

fn check_timeout(errors: &mut Vec<ValidationError>, field: &'static str, value: u64) {
    if value == 0 {
        errors.push(ValidationError::ZeroTimeout { field });
    }
}
