//! Risk-assessment types and normalization rules.
//!
//! # Design Decisions
//! - The model's reply is parsed into a lenient [`RawAssessment`] first:
//!   every field optional, score unbounded, level free-text. Normalization
//!   into the strongly-typed [`RiskAssessment`] is a pure function so the
//!   bounding rules are testable without any network.
//! - Severity is a closed three-level enum; any tier string outside
//!   low/medium/high is treated as absent and derived from the score.

use serde::{Deserialize, Serialize};

/// Score at or above which a missing tier becomes [`RiskLevel::High`].
const HIGH_THRESHOLD: u8 = 80;

/// Score at or above which a missing tier becomes [`RiskLevel::Medium`].
const MEDIUM_THRESHOLD: u8 = 40;

/// Severity tier of a risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Derive a tier from a clamped score using the fixed thresholds.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= HIGH_THRESHOLD => RiskLevel::High,
            s if s >= MEDIUM_THRESHOLD => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    /// Parse a tier string, case-insensitively. Unknown strings are `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{name}")
    }
}

/// A normalized risk assessment, valid by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Risk score, always within [0, 100].
    pub score: u8,
    /// Severity tier.
    pub level: RiskLevel,
    /// Human-readable reasons; may be empty.
    pub reasons: Vec<String>,
    /// Free-text recommendation; may be empty.
    pub recommendation: String,
}

impl RiskAssessment {
    /// Fallback when the model call fails or returns no candidates.
    pub fn unavailable_fallback() -> Self {
        Self {
            score: 50,
            level: RiskLevel::Medium,
            reasons: vec!["Ошибка анализа".to_string()],
            recommendation: "Перепроверьте источник сообщения.".to_string(),
        }
    }

    /// Fallback when the model replies with something that is not the
    /// expected JSON shape.
    pub fn malformed_fallback() -> Self {
        Self {
            score: 60,
            level: RiskLevel::Medium,
            reasons: vec!["Нестрогий формат ответа ИИ".to_string()],
            recommendation: "Будьте осторожны.".to_string(),
        }
    }
}

/// The shape the model actually returns, before any bounds are applied.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawAssessment {
    #[serde(default)]
    pub risk: Option<i64>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub reasons: Option<Vec<String>>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl RawAssessment {
    /// Apply the bounding rules: clamp the score into [0, 100], derive the
    /// tier from the score when absent or unrecognized, default the rest.
    pub fn normalize(self) -> RiskAssessment {
        let score = self.risk.unwrap_or(0).clamp(0, 100) as u8;
        let level = self
            .level
            .as_deref()
            .and_then(RiskLevel::parse)
            .unwrap_or_else(|| RiskLevel::from_score(score));

        RiskAssessment {
            score,
            level,
            reasons: self.reasons.unwrap_or_default(),
            recommendation: self.recommendation.unwrap_or_default(),
        }
    }
}
