//! Telegram Bot API client.
//!
//! # Responsibilities
//! - Resolve voice attachments to downloadable file paths (`getFile`)
//! - Download file bodies from the file-serving endpoint
//! - Deliver outbound messages (`sendMessage`, Markdown parse mode)
//!
//! The base URL is configurable so tests can point the client at a local
//! mock; production uses the default `https://api.telegram.org`.

use std::time::Duration;

use thiserror::Error;

use crate::config::schema::TelegramConfig;
use crate::telegram::types::{ChatId, FileInfo, FileInfoResponse, OutgoingMessage};

/// Parse mode for outbound messages.
const PARSE_MODE: &str = "Markdown";

/// How much of an upstream error body to keep in error messages.
const ERROR_BODY_EXCERPT: usize = 200;

/// Errors from Bot API calls.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("telegram request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered but refused the call (`ok: false` or missing result).
    #[error("telegram rejected {method}")]
    Rejected { method: &'static str },

    /// Non-success HTTP status with a body excerpt.
    #[error("telegram returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type for Bot API operations.
pub type TelegramResult<T> = Result<T, TelegramError>;

/// Typed client for the handful of Bot API methods this service uses.
///
/// No `Debug` impl: the token must not leak into logs.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl TelegramClient {
    /// Create a new client from configuration.
    pub fn new(config: &TelegramConfig) -> TelegramResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.bot_token.clone(),
        })
    }

    /// Resolve a `file_id` to a path on Telegram's file servers.
    pub async fn get_file(&self, file_id: &str) -> TelegramResult<FileInfo> {
        let url = format!("{}/bot{}/getFile", self.api_base, self.token);
        let response = self
            .http
            .get(url)
            .query(&[("file_id", file_id)])
            .send()
            .await?;
        let response = check_status(response).await?;

        let info: FileInfoResponse = response.json().await?;
        if !info.ok {
            return Err(TelegramError::Rejected { method: "getFile" });
        }
        info.result
            .ok_or(TelegramError::Rejected { method: "getFile" })
    }

    /// Download a file body by the path `getFile` returned.
    pub async fn download_file(&self, file_path: &str) -> TelegramResult<Vec<u8>> {
        let url = format!("{}/file/bot{}/{}", self.api_base, self.token, file_path);
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Post a Markdown message to a chat.
    pub async fn send_message(&self, chat_id: ChatId, text: &str) -> TelegramResult<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let payload = OutgoingMessage {
            chat_id,
            text,
            parse_mode: PARSE_MODE,
        };
        let response = self.http.post(url).json(&payload).send().await?;
        check_status(response).await?;

        tracing::debug!(chat_id = %chat_id, chars = text.chars().count(), "Reply delivered");
        Ok(())
    }
}

/// Map a non-success response to an error carrying a body excerpt.
async fn check_status(response: reqwest::Response) -> TelegramResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
    Err(TelegramError::Status {
        status: status.as_u16(),
        body: excerpt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_base: &str) -> TelegramConfig {
        TelegramConfig {
            bot_token: "123:TEST".to_string(),
            api_base: api_base.to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client =
            TelegramClient::new(&test_config("https://api.telegram.org/")).expect("client");
        assert_eq!(client.api_base, "https://api.telegram.org");
    }

    #[test]
    fn test_error_display() {
        let err = TelegramError::Rejected { method: "getFile" };
        assert_eq!(err.to_string(), "telegram rejected getFile");

        let err = TelegramError::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(err.to_string().contains("404"));
    }
}
