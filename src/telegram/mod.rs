//! Telegram Bot API integration: wire types and a typed client.

pub mod client;
pub mod types;

pub use client::{TelegramClient, TelegramError, TelegramResult};
pub use types::{ChatId, Message, MessageContent, Update};
