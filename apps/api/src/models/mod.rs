//! Request and result types shared by handlers, prompts and the normalizer.

pub mod assessment;
pub mod interview;
pub mod jd;
pub mod quiz;

use serde::{Deserialize, Serialize};

/// Confidence label attached to assessments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }

    /// Maps a model-supplied label onto the enum. Unknown labels become `Medium`.
    pub fn coerce(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => ConfidenceLevel::High,
            "low" => ConfidenceLevel::Low,
            _ => ConfidenceLevel::Medium,
        }
    }
}
