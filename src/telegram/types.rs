//! Wire types for the Telegram Bot API.
//!
//! Only the fields this service reads are modeled; serde ignores the rest
//! of the (large) update payload.

use serde::{Deserialize, Serialize};

/// Telegram chat id (numeric).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inbound webhook update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// The message, if this update carries one. Edited messages, channel
    /// posts and service updates arrive without it.
    pub message: Option<Message>,
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<Voice>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: ChatId,
}

/// A voice note attachment.
#[derive(Debug, Clone, Deserialize)]
pub struct Voice {
    pub file_id: String,
}

/// What a message asks the service to do.
///
/// Text wins over voice when both are present; an empty text string does
/// not count as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageContent<'a> {
    Text(&'a str),
    Voice(&'a str),
    Unsupported,
}

impl Message {
    /// Classify this message for dispatch.
    pub fn content(&self) -> MessageContent<'_> {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => MessageContent::Text(text),
            _ => match &self.voice {
                Some(voice) => MessageContent::Voice(&voice.file_id),
                None => MessageContent::Unsupported,
            },
        }
    }
}

/// Envelope returned by `getFile`.
#[derive(Debug, Deserialize)]
pub struct FileInfoResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<FileInfo>,
}

/// Remote file location on Telegram's file servers.
#[derive(Debug, Clone, Deserialize)]
pub struct FileInfo {
    pub file_path: String,
}

/// Payload for `sendMessage`.
#[derive(Debug, Serialize)]
pub struct OutgoingMessage<'a> {
    pub chat_id: ChatId,
    pub text: &'a str,
    pub parse_mode: &'a str,
}
