use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::models::quiz::{QuizEvaluation, QuizEvaluationRequest};
use crate::normalizer::normalize;
use crate::quiz::prompts::build_evaluation_prompt;

pub async fn evaluate_quiz(
    request: QuizEvaluationRequest,
    llm: &dyn CompletionClient,
) -> Result<QuizEvaluation, AppError> {
    if request.answers.is_empty() {
        return Err(AppError::Validation("answers cannot be empty".to_string()));
    }
    if request.answers.iter().any(|a| a.question.trim().is_empty()) {
        return Err(AppError::Validation(
            "every answer must reference a question".to_string(),
        ));
    }

    let prompt = build_evaluation_prompt(&request.answers);
    let raw = llm.complete(&prompt).await?;

    let normalized = normalize::<QuizEvaluation>(&raw);
    if let Some(reason) = &normalized.fallback {
        warn!("Quiz evaluation unparseable ({reason}); returning fallback evaluation");
    }
    info!(
        "Evaluated {} answers: score={}",
        request.answers.len(),
        normalized.value.score
    );
    Ok(normalized.value)
}
