//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from config
//! files; every section is optional and falls back to its `Default`.

use serde::{Deserialize, Serialize};

/// Root configuration for the fraud-guard service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Telegram Bot API settings.
    pub telegram: TelegramConfig,

    /// Model-provider settings.
    pub openai: OpenAiConfig,

    /// Risk-analysis settings.
    pub analysis: AnalysisConfig,

    /// Voice-transcription settings.
    pub transcription: TranscriptionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout_secs: 120,
        }
    }
}

/// Telegram Bot API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot token. Usually supplied via `TELEGRAM_BOT_TOKEN`.
    pub bot_token: String,

    /// Bot API base URL.
    pub api_base: String,

    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_base: "https://api.telegram.org".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Model-provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// API key. Usually supplied via `OPENAI_API_KEY`.
    pub api_key: String,

    /// API base URL; any OpenAI-compatible endpoint works
    /// (`OPENAI_BASE_URL` overrides).
    pub api_base: String,

    /// Outbound request timeout in seconds. Transcription uploads can be
    /// slow, so this is the longest timeout in the system.
    pub request_timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: "https://api.openai.com/v1".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Risk-analysis configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Chat-completion model.
    pub model: String,

    /// Sampling temperature. Kept low for stable JSON output.
    pub temperature: f32,

    /// How many characters of the original message to echo in the reply.
    pub excerpt_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.1,
            excerpt_chars: 800,
        }
    }
}

/// Voice-transcription configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Transcription model.
    pub model: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            model: "whisper-1".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Metrics exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_external_contract() {
        let config = GuardConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert_eq!(config.telegram.api_base, "https://api.telegram.org");
        assert_eq!(config.openai.api_base, "https://api.openai.com/v1");
        assert_eq!(config.analysis.model, "gpt-4o-mini");
        assert_eq!(config.analysis.temperature, 0.1);
        assert_eq!(config.analysis.excerpt_chars, 800);
        assert_eq!(config.transcription.model, "whisper-1");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GuardConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [analysis]
            model = "gpt-4o"
            "#,
        )
        .expect("should parse");
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.listener.request_timeout_secs, 120);
        assert_eq!(config.analysis.model, "gpt-4o");
        assert_eq!(config.analysis.temperature, 0.1);
        assert_eq!(config.transcription.model, "whisper-1");
    }
}
