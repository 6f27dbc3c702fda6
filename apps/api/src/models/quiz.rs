use serde::{Deserialize, Serialize};

use crate::models::ConfidenceLevel;
use crate::normalizer::shape::{Container, FieldKind, FieldSpec, Shape};
use crate::normalizer::Structured;

pub const DEFAULT_NUM_QUESTIONS: u32 = 5;
pub const MAX_NUM_QUESTIONS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

fn default_num_questions() -> u32 {
    DEFAULT_NUM_QUESTIONS
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub role: String,
    pub skill_level: SkillLevel,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answer: String,
    /// easy / medium / hard, as labelled by the model
    pub difficulty: String,
    pub topic: String,
}

/// Array payload of a quiz-generation completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(pub Vec<QuizQuestion>);

impl Structured for QuestionSet {
    const SHAPE: Shape = Shape {
        container: Container::Array,
        fields: &[
            FieldSpec::new("question", FieldKind::Text),
            FieldSpec::new("answer", FieldKind::Text),
            FieldSpec::new("difficulty", FieldKind::Text),
            FieldSpec::new("topic", FieldKind::Text),
        ],
    };

    fn fallback(_raw: &str) -> Self {
        QuestionSet(vec![QuizQuestion {
            question: "Unable to generate questions. Please try again.".to_string(),
            answer: String::new(),
            difficulty: "medium".to_string(),
            topic: "General".to_string(),
        }])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizEvaluationRequest {
    pub answers: Vec<UserAnswer>,
}

/// Overall grade for a set of quiz answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizEvaluation {
    /// 0 – 100
    pub score: i64,
    pub confidence_level: ConfidenceLevel,
    pub feedback: String,
}

impl Structured for QuizEvaluation {
    const SHAPE: Shape = Shape {
        container: Container::Object,
        fields: &[
            FieldSpec::new("score", FieldKind::Score),
            FieldSpec::new("confidence_level", FieldKind::Confidence),
            FieldSpec::new("feedback", FieldKind::Text),
        ],
    };

    fn fallback(raw: &str) -> Self {
        Self {
            score: 0,
            confidence_level: ConfidenceLevel::Medium,
            feedback: raw.to_string(),
        }
    }
}
