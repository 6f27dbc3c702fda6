use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::models::quiz::{QuestionSet, QuizRequest, QuizResponse, MAX_NUM_QUESTIONS};
use crate::normalizer::normalize;
use crate::quiz::prompts::build_quiz_prompt;

/// Generates `num_questions` questions; extra questions from the model are discarded.
pub async fn generate_quiz(
    request: QuizRequest,
    llm: &dyn CompletionClient,
) -> Result<QuizResponse, AppError> {
    let role = request.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    if !(1..=MAX_NUM_QUESTIONS).contains(&request.num_questions) {
        return Err(AppError::Validation(format!(
            "num_questions must be between 1 and {MAX_NUM_QUESTIONS}"
        )));
    }

    let prompt = build_quiz_prompt(role, request.skill_level.as_str(), request.num_questions);
    let raw = llm.complete(&prompt).await?;

    let normalized = normalize::<QuestionSet>(&raw);
    if let Some(reason) = &normalized.fallback {
        warn!("Quiz response unparseable ({reason}); returning fallback question");
    }

    let QuestionSet(mut questions) = normalized.value;
    questions.truncate(request.num_questions as usize);

    if questions.len() < request.num_questions as usize {
        warn!(
            "Model returned {} usable questions, {} requested",
            questions.len(),
            request.num_questions
        );
    }
    info!("Generated {} quiz questions for '{}'", questions.len(), role);

    Ok(QuizResponse { questions })
}
