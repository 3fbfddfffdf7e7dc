//! Client for the OpenAI-compatible API.
//!
//! # Responsibilities
//! - Chat completions for risk analysis
//! - Audio transcription (multipart file upload)
//! - Bearer auth and per-request timeout from configuration
//!
//! The base URL is configurable (`OPENAI_BASE_URL`) so the service can run
//! against any OpenAI-compatible endpoint, including test mocks.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use thiserror::Error;

use crate::config::schema::OpenAiConfig;
use crate::openai::types::{ChatCompletionRequest, ChatCompletionResponse, TranscriptionResponse};

/// How much of an upstream error body to keep in error messages.
const ERROR_BODY_EXCERPT: usize = 200;

/// Errors from model-provider calls.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status with a body excerpt.
    #[error("model API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Reading the local audio file failed.
    #[error("reading audio file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for model-provider operations.
pub type OpenAiResult<T> = Result<T, OpenAiError>;

/// Typed client for the two endpoints this service uses.
///
/// No `Debug` impl: the API key must not leak into logs.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a new client from configuration.
    pub fn new(config: &OpenAiConfig) -> OpenAiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Request a chat completion.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> OpenAiResult<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.api_base);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Transcribe an audio file with the given transcription model.
    pub async fn transcribe_file(&self, path: &Path, model: &str) -> OpenAiResult<String> {
        let audio = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "voice.ogg".to_string());

        let form = Form::new()
            .part("file", Part::bytes(audio).file_name(file_name))
            .text("model", model.to_string());

        let url = format!("{}/audio/transcriptions", self.api_base);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let transcription: TranscriptionResponse = response.json().await?;
        Ok(transcription.text)
    }
}

/// Map a non-success response to an error carrying a body excerpt.
async fn check_status(response: reqwest::Response) -> OpenAiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
    Err(OpenAiError::Api {
        status: status.as_u16(),
        body: excerpt,
    })
}
