use serde::{Deserialize, Serialize};

use crate::models::ConfidenceLevel;
use crate::normalizer::shape::{Container, FieldKind, FieldSpec, Shape};
use crate::normalizer::Structured;

/// Confidence analysis of a recorded interview answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    /// 0 – 100
    pub confidence_score: i64,
    pub confidence_level: ConfidenceLevel,
    /// e.g. "Calm", "Nervous"
    pub tone: String,
    pub summary: String,
    pub transcription: String,
}

impl Structured for AudioAnalysis {
    const SHAPE: Shape = Shape {
        container: Container::Object,
        fields: &[
            FieldSpec::new("confidence_score", FieldKind::Score),
            FieldSpec::new("confidence_level", FieldKind::Confidence),
            FieldSpec::new("tone", FieldKind::Text),
            FieldSpec::new("summary", FieldKind::Text),
            FieldSpec::new("transcription", FieldKind::Text),
        ],
    };

    fn fallback(raw: &str) -> Self {
        Self {
            confidence_score: 50,
            confidence_level: ConfidenceLevel::Medium,
            tone: "Unknown".to_string(),
            summary: raw.to_string(),
            transcription: String::new(),
        }
    }
}
