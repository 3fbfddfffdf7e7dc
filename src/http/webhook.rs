//! Inbound webhook handler.
//!
//! # Responsibilities
//! - Parse the update payload (leniently: garbage is acknowledged and
//!   dropped, never bounced back to the platform)
//! - Dispatch on content: text, voice, or neither
//! - Drive analysis / transcription and send the formatted reply
//!
//! # Design Decisions
//! - The handler always answers 200. The chat platform retries failed
//!   webhook deliveries; surfacing internal errors would only make it
//!   re-send updates we already know we cannot handle better.
//! - Outbound delivery failures are logged and dropped.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::reply;
use crate::telegram::{ChatId, Message, MessageContent, Update};

/// Handle one webhook delivery.
pub async fn handle_webhook(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(error) => {
            tracing::debug!(error = %error, "Discarding unparseable update");
            metrics::record_update("invalid");
            return StatusCode::OK;
        }
    };

    let Some(message) = update.message else {
        metrics::record_update("no_message");
        return StatusCode::OK;
    };

    process_message(&state, &message).await;
    StatusCode::OK
}

async fn process_message(state: &AppState, message: &Message) {
    let chat_id = message.chat.id;

    match message.content() {
        MessageContent::Text(text) => {
            metrics::record_update("text");
            tracing::info!(chat_id = %chat_id, chars = text.chars().count(), "Analyzing text message");
            assess_and_reply(state, chat_id, text).await;
        }
        MessageContent::Voice(file_id) => {
            metrics::record_update("voice");
            tracing::info!(chat_id = %chat_id, "Transcribing voice message");
            match state.voice.transcribe(file_id).await {
                Ok(transcript) => {
                    assess_and_reply(state, chat_id, &transcript).await;
                }
                Err(error) => {
                    tracing::warn!(chat_id = %chat_id, error = %error, "Voice transcription failed");
                    send_reply(state, chat_id, reply::VOICE_APOLOGY).await;
                }
            }
        }
        MessageContent::Unsupported => {
            metrics::record_update("unsupported");
            send_reply(state, chat_id, reply::UNSUPPORTED_HINT).await;
        }
    }
}

/// Run the risk assessment and deliver the formatted verdict.
async fn assess_and_reply(state: &AppState, chat_id: ChatId, text: &str) {
    let assessment = state.engine.assess(text).await;
    tracing::info!(
        chat_id = %chat_id,
        score = assessment.score,
        level = %assessment.level,
        "Assessment complete"
    );

    let message = reply::format_assessment(text, &assessment, state.excerpt_chars);
    send_reply(state, chat_id, &message).await;
}

/// Deliver a message, logging instead of propagating failures.
async fn send_reply(state: &AppState, chat_id: ChatId, text: &str) {
    match state.telegram.send_message(chat_id, text).await {
        Ok(()) => metrics::record_reply("sent"),
        Err(error) => {
            tracing::warn!(chat_id = %chat_id, error = %error, "Failed to deliver reply");
            metrics::record_reply("failed");
        }
    }
}
