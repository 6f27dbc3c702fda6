use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::quiz::{QuizEvaluation, QuizEvaluationRequest, QuizRequest, QuizResponse};
use crate::quiz::evaluator::evaluate_quiz;
use crate::quiz::generator::generate_quiz;
use crate::state::AppState;

/// POST /api/quiz/generate
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let response = generate_quiz(request, state.llm.as_ref()).await?;
    Ok(Json(response))
}

/// POST /api/quiz/evaluate
pub async fn handle_evaluate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizEvaluationRequest>,
) -> Result<Json<QuizEvaluation>, AppError> {
    let evaluation = evaluate_quiz(request, state.llm.as_ref()).await?;
    Ok(Json(evaluation))
}
