//! Outbound message formatting.
//!
//! All user-facing text lives here: the assessment template, the risk bar,
//! and the two fixed fallback messages the webhook can send.

use crate::analysis::RiskAssessment;

/// Sent when a voice message cannot be transcribed.
pub const VOICE_APOLOGY: &str =
    "Не удалось распознать голосовое. Пришлите текст или другое аудио.";

/// Sent when a message carries neither text nor voice.
pub const UNSUPPORTED_HINT: &str = "Пришлите текст или голосовое сообщение для проверки.";

/// Cells in the risk bar.
const BAR_CELLS: u8 = 10;

/// Render the assessment reply for a chat.
///
/// The original message is echoed back in a code span, truncated to
/// `excerpt_chars` characters.
pub fn format_assessment(
    original: &str,
    assessment: &RiskAssessment,
    excerpt_chars: usize,
) -> String {
    let reasons = if assessment.reasons.is_empty() {
        "-".to_string()
    } else {
        format!("- {}", assessment.reasons.join("\n- "))
    };

    format!(
        "🛡️ *FraudGuard AI*\n\n*Оригинал:*\n`{}`\n\n*Риск:* {}% {}\n*Уровень:* {}\n*Причины:*\n{}\n\n*Совет:* {}",
        truncate_chars(original, excerpt_chars),
        assessment.score,
        risk_bar(assessment.score),
        assessment.level.to_string().to_uppercase(),
        reasons,
        assessment.recommendation,
    )
}

/// Ten-cell bar: one `█` per full 10 points of score, `░` for the rest.
pub fn risk_bar(score: u8) -> String {
    let filled = (score.min(100) / BAR_CELLS) as usize;
    format!(
        "│{}{}│",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS as usize - filled)
    )
}

/// Truncate to at most `max` characters, appending `…` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RiskLevel;

    #[test]
    fn test_risk_bar_fill() {
        assert_eq!(risk_bar(0), "│░░░░░░░░░░│");
        assert_eq!(risk_bar(9), "│░░░░░░░░░░│");
        assert_eq!(risk_bar(10), "│█░░░░░░░░░│");
        assert_eq!(risk_bar(87), "│████████░░│");
        assert_eq!(risk_bar(100), "│██████████│");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("привет", 10), "привет");
        assert_eq!(truncate_chars("привет", 6), "привет");
        // Cyrillic is two bytes per char; a byte-based cut would panic or
        // split mid-character here.
        assert_eq!(truncate_chars("привет", 4), "прив…");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_template_is_deterministic() {
        let assessment = RiskAssessment {
            score: 87,
            level: RiskLevel::High,
            reasons: vec!["давление".to_string(), "срочность".to_string()],
            recommendation: "Не переводите деньги.".to_string(),
        };
        let message = format_assessment("Срочно оплатите штраф", &assessment, 800);
        assert_eq!(
            message,
            "🛡️ *FraudGuard AI*\n\n\
             *Оригинал:*\n`Срочно оплатите штраф`\n\n\
             *Риск:* 87% │████████░░│\n\
             *Уровень:* HIGH\n\
             *Причины:*\n- давление\n- срочность\n\n\
             *Совет:* Не переводите деньги."
        );
    }

    #[test]
    fn test_empty_reasons_render_as_dash() {
        let assessment = RiskAssessment {
            score: 5,
            level: RiskLevel::Low,
            reasons: vec![],
            recommendation: String::new(),
        };
        let message = format_assessment("ок", &assessment, 800);
        assert!(message.contains("*Причины:*\n-\n"));
        assert!(message.contains("*Уровень:* LOW"));
    }

    #[test]
    fn test_long_original_truncated_in_template() {
        let original = "а".repeat(1000);
        let assessment = RiskAssessment {
            score: 50,
            level: RiskLevel::Medium,
            reasons: vec![],
            recommendation: String::new(),
        };
        let message = format_assessment(&original, &assessment, 800);
        let excerpt = format!("`{}…`", "а".repeat(800));
        assert!(message.contains(&excerpt));
    }
}
