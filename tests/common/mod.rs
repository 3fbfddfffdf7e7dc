//! Shared utilities for integration testing.
//!
//! Spins up in-process mock Telegram and OpenAI servers so the full
//! webhook flow can run against real sockets without touching the network.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use fraud_guard::{GuardConfig, HttpServer};

/// Bot token used by all mock-backed tests.
pub const BOT_TOKEN: &str = "123:TEST";

/// Serve a router on an ephemeral port, returning its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Mock Telegram Bot API
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MockTelegramState {
    /// Raw `sendMessage` payloads, in delivery order.
    pub sent: Arc<Mutex<Vec<Value>>>,
}

pub struct MockTelegram {
    pub base_url: String,
    pub state: MockTelegramState,
}

/// Start a mock Bot API: `getFile` resolves every id, downloads return a
/// fixed body, `sendMessage` payloads are captured.
pub async fn start_mock_telegram() -> MockTelegram {
    let state = MockTelegramState::default();

    async fn send_message(
        State(state): State<MockTelegramState>,
        Json(payload): Json<Value>,
    ) -> Json<Value> {
        state.sent.lock().await.push(payload);
        Json(json!({"ok": true, "result": {"message_id": 1}}))
    }

    async fn get_file() -> Json<Value> {
        Json(json!({"ok": true, "result": {"file_path": "voice/file_7.oga"}}))
    }

    async fn download() -> Vec<u8> {
        b"OggS-fake-audio".to_vec()
    }

    // The client hits /bot<token>/<method>; "bot<token>" is one path
    // segment, captured whole.
    let router = Router::new()
        .route("/{bot}/sendMessage", post(send_message))
        .route("/{bot}/getFile", get(get_file))
        .route("/file/{bot}/{*path}", get(download))
        .with_state(state.clone());

    let base_url = serve(router).await;
    MockTelegram { base_url, state }
}

impl MockTelegram {
    /// Texts of all captured messages.
    pub async fn sent_texts(&self) -> Vec<String> {
        self.state
            .sent
            .lock()
            .await
            .iter()
            .map(|p| p["text"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Mock OpenAI-compatible API
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: Value,
}

#[derive(Clone)]
pub struct MockOpenAiState {
    pub chat_reply: Arc<Mutex<MockReply>>,
    pub transcription_reply: Arc<Mutex<MockReply>>,
    pub chat_calls: Arc<Mutex<usize>>,
}

pub struct MockOpenAi {
    pub base_url: String,
    pub state: MockOpenAiState,
}

/// Start a mock model provider with programmable replies.
pub async fn start_mock_openai() -> MockOpenAi {
    let state = MockOpenAiState {
        chat_reply: Arc::new(Mutex::new(MockReply {
            status: 200,
            body: completion_body("{}"),
        })),
        transcription_reply: Arc::new(Mutex::new(MockReply {
            status: 200,
            body: json!({"text": ""}),
        })),
        chat_calls: Arc::new(Mutex::new(0)),
    };

    async fn chat(State(state): State<MockOpenAiState>) -> (StatusCode, Json<Value>) {
        *state.chat_calls.lock().await += 1;
        let reply = state.chat_reply.lock().await.clone();
        (
            StatusCode::from_u16(reply.status).expect("valid status"),
            Json(reply.body),
        )
    }

    async fn transcribe(State(state): State<MockOpenAiState>) -> (StatusCode, Json<Value>) {
        let reply = state.transcription_reply.lock().await.clone();
        (
            StatusCode::from_u16(reply.status).expect("valid status"),
            Json(reply.body),
        )
    }

    let router = Router::new()
        .route("/chat/completions", post(chat))
        .route("/audio/transcriptions", post(transcribe))
        .with_state(state.clone());

    let base_url = serve(router).await;
    MockOpenAi { base_url, state }
}

impl MockOpenAi {
    pub async fn set_chat_reply(&self, status: u16, body: Value) {
        *self.state.chat_reply.lock().await = MockReply { status, body };
    }

    pub async fn set_chat_content(&self, content: &str) {
        self.set_chat_reply(200, completion_body(content)).await;
    }

    pub async fn set_transcription_reply(&self, status: u16, body: Value) {
        *self.state.transcription_reply.lock().await = MockReply { status, body };
    }

    pub async fn set_transcript(&self, text: &str) {
        self.set_transcription_reply(200, json!({"text": text})).await;
    }

    pub async fn chat_calls(&self) -> usize {
        *self.state.chat_calls.lock().await
    }
}

/// A well-formed `/chat/completions` body with the given message content.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}}
        ]
    })
}

// ---------------------------------------------------------------------------
// Service under test
// ---------------------------------------------------------------------------

/// Start the service wired to the given mocks, returning its base URL.
pub async fn start_app(telegram: &MockTelegram, openai: &MockOpenAi) -> String {
    let mut config = GuardConfig::default();
    config.telegram.bot_token = BOT_TOKEN.to_string();
    config.telegram.api_base = telegram.base_url.clone();
    config.openai.api_key = "sk-test".to_string();
    config.openai.api_base = openai.base_url.clone();

    let server = HttpServer::new(&config).expect("server setup");
    serve(server.into_router()).await
}

/// Deliver a webhook body and return the response status.
pub async fn post_webhook(app_url: &str, body: &str) -> u16 {
    reqwest::Client::new()
        .post(format!("{app_url}/webhook"))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .expect("webhook request")
        .status()
        .as_u16()
}

/// A minimal text-message update.
pub fn text_update(chat_id: i64, text: &str) -> String {
    json!({
        "update_id": 1,
        "message": {
            "message_id": 10,
            "chat": {"id": chat_id},
            "date": 1700000000,
            "text": text
        }
    })
    .to_string()
}

/// A minimal voice-message update.
pub fn voice_update(chat_id: i64, file_id: &str) -> String {
    json!({
        "update_id": 2,
        "message": {
            "message_id": 11,
            "chat": {"id": chat_id},
            "date": 1700000000,
            "voice": {"file_id": file_id, "duration": 2}
        }
    })
    .to_string()
}
