//! Risk analysis: assessment types and the model-backed orchestrator.

pub mod engine;
pub mod types;

pub use engine::AnalysisEngine;
pub use types::{RiskAssessment, RiskLevel};
