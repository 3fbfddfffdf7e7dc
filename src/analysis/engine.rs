//! Risk-assessment orchestrator.
//!
//! # Responsibilities
//! - Build the fixed instruction prompt around the message text
//! - Invoke the chat-completion endpoint at low temperature
//! - Parse and normalize the reply into a [`RiskAssessment`]
//! - Substitute the fixed fallbacks on failure; `assess` never errors
//!
//! # Design Decisions
//! - No retry and no backoff: a failed call degrades to the unavailable
//!   fallback immediately, keeping webhook latency bounded by a single
//!   upstream round trip.
//! - Parsing is separated from I/O so the fallback rules are unit-testable.

use std::sync::Arc;

use crate::analysis::types::{RawAssessment, RiskAssessment};
use crate::config::schema::AnalysisConfig;
use crate::observability::metrics;
use crate::openai::types::{ChatCompletionRequest, ChatMessage};
use crate::openai::OpenAiClient;

/// System message pinning the reply format.
const SYSTEM_INSTRUCTION: &str = "Отвечай только валидным JSON без пояснений.";

/// Engine that turns message text into a risk assessment.
#[derive(Clone)]
pub struct AnalysisEngine {
    client: Arc<OpenAiClient>,
    model: String,
    temperature: f32,
}

impl AnalysisEngine {
    /// Create a new engine backed by the given model client.
    pub fn new(client: Arc<OpenAiClient>, config: &AnalysisConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Assess a message. Infallible: every failure mode maps to one of the
    /// fixed fallback assessments.
    pub async fn assess(&self, text: &str) -> RiskAssessment {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_INSTRUCTION),
                ChatMessage::user(build_prompt(text)),
            ],
            temperature: self.temperature,
        };

        let response = match self.client.chat_completion(&request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(error = %error, "Model call failed, using fallback");
                metrics::record_analysis("error");
                return RiskAssessment::unavailable_fallback();
            }
        };

        let Some(choice) = response.choices.first() else {
            tracing::warn!("Model returned no candidates, using fallback");
            metrics::record_analysis("empty");
            return RiskAssessment::unavailable_fallback();
        };

        parse_reply(&choice.message.content)
    }
}

/// Parse a model reply into an assessment, falling back on malformed JSON.
fn parse_reply(content: &str) -> RiskAssessment {
    match serde_json::from_str::<RawAssessment>(content) {
        Ok(raw) => {
            metrics::record_analysis("ok");
            raw.normalize()
        }
        Err(error) => {
            tracing::debug!(error = %error, "Model reply was not valid JSON, using fallback");
            metrics::record_analysis("malformed");
            RiskAssessment::malformed_fallback()
        }
    }
}

/// Build the per-message user prompt around the fixed rubric.
fn build_prompt(text: &str) -> String {
    format!(
        r#"
Ты эксперт по кибербезопасности. Проанализируй сообщение на признаки онлайн-мошенничества (фишинг, социнжиниринг, давление).
Оцени риск 0-100 (чем выше, тем опаснее). Верни СТРОГО валидный JSON:
{{
 "risk": <0-100>,
 "level": "<low|medium|high>",
 "reasons": ["...","..."],
 "recommendation": "..."
}}
Повышай риск при наличии: срочности/давления/угроз/перевода денег/"код из SMS"/лжебанка/подозрительных ссылок.
Сообщение: """{text}""""#
    )
}
