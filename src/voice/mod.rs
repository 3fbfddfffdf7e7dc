//! Voice-message transcription pipeline.
//!
//! # Responsibilities
//! - Resolve the attachment to a remote path (`getFile`)
//! - Download the audio into a uniquely-named temporary file
//! - Submit it to the transcription endpoint and trim the result
//!
//! The temp file is a scoped resource: `NamedTempFile` gives each request
//! its own name and deletes the file when it drops, so concurrent webhook
//! calls never collide.

use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::TranscriptionConfig;
use crate::openai::{OpenAiClient, OpenAiError};
use crate::telegram::{TelegramClient, TelegramError};

/// Errors from the transcription pipeline.
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error(transparent)]
    Telegram(#[from] TelegramError),

    #[error(transparent)]
    Transcription(#[from] OpenAiError),

    #[error("temporary audio file: {0}")]
    Io(#[from] std::io::Error),

    /// Transcription succeeded but produced no speech.
    #[error("transcription returned no speech")]
    EmptyTranscript,
}

/// Result type for the transcription pipeline.
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Linear getFile → download → transcribe pipeline.
#[derive(Clone)]
pub struct VoicePipeline {
    telegram: Arc<TelegramClient>,
    openai: Arc<OpenAiClient>,
    model: String,
}

impl VoicePipeline {
    pub fn new(
        telegram: Arc<TelegramClient>,
        openai: Arc<OpenAiClient>,
        config: &TranscriptionConfig,
    ) -> Self {
        Self {
            telegram,
            openai,
            model: config.model.clone(),
        }
    }

    /// Transcribe the voice attachment behind `file_id`.
    ///
    /// Returns the trimmed transcript, or [`VoiceError::EmptyTranscript`]
    /// when the result is empty or whitespace-only.
    pub async fn transcribe(&self, file_id: &str) -> VoiceResult<String> {
        let info = self.telegram.get_file(file_id).await?;
        let audio = self.telegram.download_file(&info.file_path).await?;

        tracing::debug!(bytes = audio.len(), "Voice file downloaded");

        let temp = tempfile::Builder::new()
            .prefix("voice-")
            .suffix(".ogg")
            .tempfile()?;
        tokio::fs::write(temp.path(), &audio).await?;

        let text = self.openai.transcribe_file(temp.path(), &self.model).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(VoiceError::EmptyTranscript);
        }
        Ok(text.to_string())
    }
}
