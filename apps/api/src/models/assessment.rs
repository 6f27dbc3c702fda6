use serde::{Deserialize, Serialize};

use crate::models::ConfidenceLevel;
use crate::normalizer::shape::{Container, FieldKind, FieldSpec, Shape};
use crate::normalizer::Structured;

/// Result of screening a CV against a job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAssessment {
    /// 0 – 100
    pub match_score: i64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub confidence_level: ConfidenceLevel,
    pub confidence_analysis: String,
    pub recommendation: String,
}

impl Structured for MatchAssessment {
    const SHAPE: Shape = Shape {
        container: Container::Object,
        fields: &[
            FieldSpec::new("match_score", FieldKind::Score),
            FieldSpec::new("strengths", FieldKind::TextList),
            FieldSpec::new("gaps", FieldKind::TextList),
            FieldSpec::new("confidence_level", FieldKind::Confidence),
            FieldSpec::new("confidence_analysis", FieldKind::Text),
            FieldSpec::new("recommendation", FieldKind::Text),
        ],
    };

    /// The raw completion is kept as the recommendation so a reviewer can still
    /// read the model's reasoning.
    fn fallback(raw: &str) -> Self {
        Self {
            match_score: 50,
            strengths: vec!["Unable to parse detailed analysis".to_string()],
            gaps: vec!["Please review manually".to_string()],
            confidence_level: ConfidenceLevel::Medium,
            confidence_analysis: "Confidence could not be determined automatically".to_string(),
            recommendation: raw.to_string(),
        }
    }
}
